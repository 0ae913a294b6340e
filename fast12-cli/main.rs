use clap::Parser;
use fast12_cli::{
    draw_features, gray_average, overlay_path, resolve_settings, run_sweep, to_grid, DetectorConfig,
    SweepOverrides,
};
use fast12_core::init_thread_pool;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "FAST-12 corner detection benchmark")]
struct Cli {
    /// Input image, any format the `image` crate decodes.
    image: PathBuf,
    /// Comma separated thresholds to sweep [default: 30,25,22,20,19].
    #[arg(short, long, value_delimiter = ',')]
    thresholds: Vec<i32>,
    /// Keep at most this many features per run.
    #[arg(short = 'n', long)]
    limit: Option<usize>,
    /// Write overlay images marking every feature.
    #[arg(short, long)]
    draw: bool,
    /// Directory for overlay images, defaults to the input's directory.
    #[arg(long, value_name = "DIR")]
    out_dir: Option<PathBuf>,
    /// Scan rows in parallel.
    #[arg(long)]
    parallel: bool,
    /// Detector configuration (TOML or JSON); its threshold replaces the
    /// default sweep. Explicit flags override the file.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Enable tracing output for performance profiling.
    #[arg(long)]
    trace: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive("fast12_detect=info".parse()?))
            .with_target(false)
            .init();
    }

    let config = match &cli.config {
        Some(path) => {
            let cfg = DetectorConfig::load(path)?;
            println!("{}", cfg.summary());
            Some(cfg)
        }
        None => None,
    };
    let overrides = SweepOverrides {
        thresholds: cli.thresholds.clone(),
        limit: cli.limit,
        parallel: cli.parallel,
    };
    let (base, thresholds) = resolve_settings(config.as_ref(), &overrides);

    if let Some(dir) = cli.out_dir.as_deref().filter(|_| cli.draw) {
        std::fs::create_dir_all(dir)?;
    }

    if base.parallel {
        init_thread_pool(base.n_threads)?;
    }

    let rgb = image::open(&cli.image)?.to_rgb8();
    let gray = gray_average(&rgb);
    let grid = to_grid(&gray)?;
    println!("{}: {}x{}", cli.image.display(), grid.width(), grid.height());

    for result in run_sweep(&grid, &base, &thresholds)? {
        println!("{}", result.report());

        if cli.draw {
            for (tag, run) in [
                ("with_nonmax", &result.with_nonmax),
                ("without_nonmax", &result.without_nonmax),
            ] {
                let path = overlay_path(&cli.image, cli.out_dir.as_deref(), tag, result.threshold);
                draw_features(&gray, &run.features).save(&path)?;
                println!("Saved {}", path.display());
            }
        }
    }

    Ok(())
}
