//! Noisefield CLI - render fractal noise fields to PNG.
//!
//! Generate turbulence or fBm noise, rescale it into a byte range and
//! colorize it through a gradient.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::time::Instant;

use noisefield::export::{export_field_png_u16, export_pixels_png, PngExportOptions};
use noisefield::noise::{NoiseMode, Tweak};
use noisefield::render::{Frame, NoiseRenderer, RenderConfig, BYTES_PER_PIXEL, TARGET_RANGE};

/// Fractal simplex noise renderer.
#[derive(Parser)]
#[command(name = "noisefield")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a single noise frame.
    Render {
        #[command(flatten)]
        frame: FrameArgs,
    },

    /// Render a frame, then one more frame per parameter tweak.
    ///
    /// All frames share one renderer, so the cumulative extrema carry over
    /// from frame to frame.
    Sweep {
        #[command(flatten)]
        frame: FrameArgs,

        /// Whitespace-separated tweaks: o, f, g, l (uppercase to decrease).
        #[arg(short, long)]
        tweaks: String,
    },

    /// Display buffer sizes for a resolution.
    Info {
        /// Width in pixels.
        #[arg(long, default_value = "800")]
        width: u32,

        /// Height in pixels.
        #[arg(long, default_value = "600")]
        height: u32,
    },
}

#[derive(Args)]
struct FrameArgs {
    /// JSON render config. Flags below override its values.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Built-in preset used when no config file is given.
    #[arg(short, long, default_value = "turbulence")]
    preset: Preset,

    /// Width in pixels.
    #[arg(long)]
    width: Option<u32>,

    /// Height in pixels.
    #[arg(long)]
    height: Option<u32>,

    /// Octave accumulation mode.
    #[arg(short, long)]
    mode: Option<ModeArg>,

    /// Number of noise octaves.
    #[arg(long, allow_negative_numbers = true)]
    octaves: Option<i32>,

    /// Base noise frequency.
    #[arg(long, allow_negative_numbers = true)]
    frequency: Option<f32>,

    /// Frequency multiplier per octave (lacunarity).
    #[arg(long, allow_negative_numbers = true)]
    lacunarity: Option<f32>,

    /// Amplitude multiplier per octave (gain).
    #[arg(long, allow_negative_numbers = true)]
    gain: Option<f32>,

    /// Seed for the simplex primitive.
    #[arg(short, long, allow_negative_numbers = true)]
    seed: Option<i32>,

    /// Output directory for generated files.
    #[arg(short, long, default_value = "./output")]
    output: PathBuf,

    /// Base name for output files.
    #[arg(short, long, default_value = "noise")]
    name: String,

    /// Also export the rescaled field as a 16-bit grayscale PNG.
    #[arg(long)]
    raw_field: bool,

    /// Generate rows in parallel.
    #[arg(long)]
    parallel: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Preset {
    /// 800x600 turbulence through an ocean/land gradient.
    Turbulence,
    /// 800x600 fBm clouds on a blue-to-white sky.
    Clouds,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    /// Fractal Brownian motion (signed octaves).
    Fbm,
    /// Turbulence (absolute-valued octaves).
    Turbulence,
}

impl From<ModeArg> for NoiseMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Fbm => NoiseMode::Fbm,
            ModeArg::Turbulence => NoiseMode::Turbulence,
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render { frame } => run_render(frame),
        Commands::Sweep { frame, tweaks } => run_sweep(frame, &tweaks),
        Commands::Info { width, height } => run_info(width, height),
    }
}

fn fail(context: &str, err: impl std::fmt::Display) -> ! {
    log::error!("{}: {}", context, err);
    std::process::exit(1);
}

fn resolve_config(args: &FrameArgs) -> RenderConfig {
    let mut config = match &args.config {
        Some(path) => RenderConfig::from_json_file(path)
            .unwrap_or_else(|e| fail(&format!("Error loading config {}", path.display()), e)),
        None => match args.preset {
            Preset::Turbulence => RenderConfig::turbulence_demo(),
            Preset::Clouds => RenderConfig::clouds(),
        },
    };

    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if let Some(mode) = args.mode {
        config.mode = mode.into();
    }
    if let Some(octaves) = args.octaves {
        config.params.octaves = octaves;
    }
    if let Some(frequency) = args.frequency {
        config.params.frequency = frequency;
    }
    if let Some(lacunarity) = args.lacunarity {
        config.params.lacunarity = lacunarity;
    }
    if let Some(gain) = args.gain {
        config.params.gain = gain;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }

    config
        .validate()
        .unwrap_or_else(|e| fail("Invalid configuration", e));
    config
}

fn log_config(config: &RenderConfig) {
    log::info!("Noisefield - Fractal Noise Renderer");
    log::info!("Resolution: {}x{}", config.width, config.height);
    log::info!("Mode: {}", config.mode.name());
    log::info!("Seed: {}", config.seed);
    log::info!(
        "Octaves: {}, frequency: {}, lacunarity: {}, gain: {}",
        config.params.octaves,
        config.params.frequency,
        config.params.lacunarity,
        config.params.gain
    );
}

fn write_frame(frame: &Frame, output: &Path, stem: &str, raw_field: bool) {
    let options = PngExportOptions::default();

    let path = output.join(format!("{}.png", stem));
    export_pixels_png(&frame.pixels, &path, &options)
        .unwrap_or_else(|e| fail("Error exporting PNG", e));
    log::info!("  Exported {}", path.display());

    if raw_field {
        let path = output.join(format!("{}_field.png", stem));
        export_field_png_u16(&frame.field, &path, 0.0, TARGET_RANGE, &options)
            .unwrap_or_else(|e| fail("Error exporting field PNG", e));
        log::info!("  Exported {}", path.display());
    }
}

fn run_render(args: FrameArgs) {
    let config = resolve_config(&args);
    log_config(&config);

    std::fs::create_dir_all(&args.output)
        .unwrap_or_else(|e| fail("Error creating output directory", e));

    let start = Instant::now();
    let mut renderer = NoiseRenderer::from_config(&config);
    renderer.set_parallel(args.parallel);
    let frame = renderer.render_frame(&config.params);
    log::info!("Generation completed in {:.2?}", start.elapsed());

    if let Some((min, max)) = renderer.stats().range() {
        log::info!("Noise range: [{:.4}, {:.4}], scale {:.4}", min, max, frame.scale);
    }

    write_frame(&frame, &args.output, &args.name, args.raw_field);
    log::info!("Total time: {:.2?}", start.elapsed());
}

fn run_sweep(args: FrameArgs, tweaks: &str) {
    let tweaks = Tweak::parse_sequence(tweaks).unwrap_or_else(|e| fail("Invalid tweaks", e));
    let config = resolve_config(&args);
    log_config(&config);

    std::fs::create_dir_all(&args.output)
        .unwrap_or_else(|e| fail("Error creating output directory", e));

    let start = Instant::now();
    let mut renderer = NoiseRenderer::from_config(&config);
    renderer.set_parallel(args.parallel);

    let mut params = config.params;
    let total = tweaks.len() + 1;
    for i in 0..total {
        if i > 0 {
            let tweak = tweaks[i - 1];
            params = params.apply(tweak);
            log::info!(
                "[{}/{}] Tweak '{}': octaves={}, frequency={:.4}, lacunarity={:.2}, gain={:.2}",
                i + 1,
                total,
                tweak,
                params.octaves,
                params.frequency,
                params.lacunarity,
                params.gain
            );
        } else {
            log::info!("[1/{}] Initial frame", total);
        }

        let frame = renderer.render_frame(&params);
        let stem = format!("{}_{:03}", args.name, i);
        write_frame(&frame, &args.output, &stem, args.raw_field);
    }

    if let Some((min, max)) = renderer.stats().range() {
        log::info!("Cumulative noise range: [{:.4}, {:.4}]", min, max);
    }
    log::info!("Sweep completed in {:.2?}", start.elapsed());
}

fn run_info(width: u32, height: u32) {
    let pixels = (width as u64) * (height as u64);
    let bytes_field = pixels * 4; // f32
    let bytes_buffer = pixels * BYTES_PER_PIXEL as u64;
    let bytes_png = pixels * 3;
    let bytes_field_png = pixels * 2;

    println!("Noisefield - Frame Info");
    println!("=======================");
    println!();
    println!("Resolution: {}x{} ({} pixels)", width, height, pixels);
    println!();
    println!("Memory usage (in-memory):");
    println!("  Noise field:   {:>12} bytes ({:.2} MB)", bytes_field, bytes_field as f64 / 1024.0 / 1024.0);
    println!("  Pixel buffer:  {:>12} bytes ({:.2} MB)", bytes_buffer, bytes_buffer as f64 / 1024.0 / 1024.0);
    println!("  Row pitch:     {:>12} bytes", width as u64 * BYTES_PER_PIXEL as u64);
    println!();
    println!("Export sizes (uncompressed):");
    println!("  RGB PNG:        {:>10} bytes ({:.2} MB)", bytes_png, bytes_png as f64 / 1024.0 / 1024.0);
    println!("  16-bit field:   {:>10} bytes ({:.2} MB)", bytes_field_png, bytes_field_png as f64 / 1024.0 / 1024.0);
}
