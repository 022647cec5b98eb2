#![deny(unsafe_code)]
//! CLI binary for lchcolor.
//!
//! Subcommands:
//! - `convert <hex>...`: print colors in RGB, LAB, LCH and HSV
//! - `render`: write a PNG comparing one gradient across color spaces
//! - `list`: print available color spaces and hue modes

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use lchcolor_core::{ColorSpace, GradientSpec, HueInterpolation, Rgb};
use std::path::{Path, PathBuf};
use std::process;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "lchcolor", about = "Color space conversion and gradient comparison")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert hex colors to LAB, LCH and HSV.
    Convert {
        /// Colors as "#rrggbb" or "rrggbb".
        #[arg(required = true)]
        colors: Vec<String>,
    },
    /// Render one gradient per color space as stacked strips in a PNG.
    Render {
        /// JSON gradient spec; flags below override its fields.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Begin color as hex.
        #[arg(long)]
        begin: Option<String>,

        /// End color as hex.
        #[arg(long)]
        end: Option<String>,

        /// Interpolation samples per strip.
        #[arg(short, long)]
        samples: Option<usize>,

        /// Image width in pixels.
        #[arg(short = 'W', long)]
        width: Option<usize>,

        /// Image height in pixels.
        #[arg(short = 'H', long)]
        height: Option<usize>,

        /// Color space to render; repeat for several strips (rgb, lab, hsv, lch).
        #[arg(long = "space")]
        spaces: Vec<String>,

        /// Hue interpolation (linear, shorter).
        #[arg(long)]
        hue: Option<String>,

        /// Output file path.
        #[arg(short, long, default_value = "gradient.png")]
        output: PathBuf,
    },
    /// List available color spaces and hue interpolation modes.
    List,
}

/// Flag overrides applied on top of a loaded or default spec.
struct RenderOverrides {
    begin: Option<String>,
    end: Option<String>,
    samples: Option<usize>,
    width: Option<usize>,
    height: Option<usize>,
    spaces: Vec<String>,
    hue: Option<String>,
}

fn load_spec(config: Option<&Path>, overrides: RenderOverrides) -> Result<GradientSpec, CliError> {
    let mut spec = match config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .map_err(|e| CliError::Io(format!("reading {}: {e}", path.display())))?;
            debug!(path = %path.display(), "loaded gradient spec");
            GradientSpec::from_json(&text)?
        }
        None => GradientSpec::default(),
    };

    if let Some(hex) = overrides.begin {
        spec.begin = Rgb::from_hex(&hex)?;
    }
    if let Some(hex) = overrides.end {
        spec.end = Rgb::from_hex(&hex)?;
    }
    if let Some(samples) = overrides.samples {
        spec.samples = samples;
    }
    if let Some(width) = overrides.width {
        spec.width = width;
    }
    if let Some(height) = overrides.height {
        spec.height = height;
    }
    if !overrides.spaces.is_empty() {
        spec.spaces = overrides
            .spaces
            .iter()
            .map(|name| ColorSpace::from_name(name))
            .collect::<Result<_, _>>()?;
    }
    if let Some(name) = overrides.hue {
        spec.hue = HueInterpolation::from_name(&name)?;
    }

    spec.validate()?;
    Ok(spec)
}

fn convert_json(rgb: Rgb) -> serde_json::Value {
    let lab = rgb.to_lab();
    let lch = rgb.to_lch();
    let hsv = rgb.to_hsv();
    serde_json::json!({
        "hex": rgb.to_hex(),
        "rgb": {"r": rgb.r, "g": rgb.g, "b": rgb.b},
        "lab": lab,
        "lch": lch,
        "hsv": {"h": hsv.hue(), "s": hsv.s, "v": hsv.v},
        "lab_round_trip": lab.to_rgb().to_hex(),
        "lch_round_trip": lch.to_rgb().to_hex(),
    })
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let spaces = ColorSpace::list_names();
            let hues = HueInterpolation::list_names();
            if cli.json {
                let info = serde_json::json!({
                    "spaces": spaces,
                    "hue_modes": hues,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Color spaces:");
                println!("  {}", spaces.join(", "));
                println!("Hue interpolation:");
                println!("  {}", hues.join(", "));
            }
        }
        Command::Convert { colors } => {
            let colors = colors
                .iter()
                .map(|hex| Rgb::from_hex(hex))
                .collect::<Result<Vec<_>, _>>()?;

            if cli.json {
                let out: Vec<_> = colors.iter().map(|&c| convert_json(c)).collect();
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                for rgb in colors {
                    let lab = rgb.to_lab();
                    let lch = rgb.to_lch();
                    println!("{}", rgb.to_hex());
                    println!("  {rgb}");
                    println!("  {lab} -> {}", lab.to_rgb());
                    println!("  {lch} -> {}", lch.to_rgb());
                    println!("  {}", rgb.to_hsv());
                }
            }
        }
        Command::Render {
            config,
            begin,
            end,
            samples,
            width,
            height,
            spaces,
            hue,
            output,
        } => {
            let spec = load_spec(
                config.as_deref(),
                RenderOverrides {
                    begin,
                    end,
                    samples,
                    width,
                    height,
                    spaces,
                    hue,
                },
            )?;

            lchcolor_render::snapshot::write_png(&spec, &output)?;

            if cli.json {
                let info = serde_json::json!({
                    "spec": spec,
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                let names: Vec<&str> = spec.spaces.iter().map(|s| s.name()).collect();
                eprintln!(
                    "rendered {} -> {} in {} ({}x{}, {} samples) -> {}",
                    spec.begin.to_hex(),
                    spec.end.to_hex(),
                    names.join("/"),
                    spec.width,
                    spec.height,
                    spec.samples,
                    output.display()
                );
            }
        }
    }

    Ok(())
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("warning: logging disabled: {e}");
    }
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
