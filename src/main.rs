use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::Level;

use clock_icon_renderer::{GeneratorConfig, OutputDriver, SourceSettings};

/// Generate clock-face PNG icons.
///
/// With no arguments, writes icon16.png, icon32.png, icon48.png and
/// icon128.png into ./icons.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// JSON config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output directory, created if missing
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Comma-separated icon sizes
    #[arg(long, value_delimiter = ',')]
    sizes: Option<Vec<u32>>,

    /// Rasterize this SVG file instead of drawing the clock
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Log each step to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    let mut config = match &args.config {
        Some(path) => GeneratorConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => GeneratorConfig::default(),
    };
    if let Some(dir) = args.out_dir {
        config.output_dir = dir;
    }
    if let Some(sizes) = args.sizes {
        config.sizes = sizes;
    }
    if let Some(svg) = args.svg {
        config.source = Some(SourceSettings::from_path(svg));
    }

    let renderer = config.renderer()?;
    let driver = OutputDriver::new(&config.output_dir).with_prefix(&config.file_prefix);
    let written = driver.generate(&renderer, &config.sizes)?;

    println!(
        "Icon generation complete ({} files in {})",
        written.len(),
        driver.dir().display()
    );
    Ok(())
}
