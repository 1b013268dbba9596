use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use log::{info, LevelFilter};

use img2tile::{
    config::{Config, Mode},
    import::load_png,
    persist::{expand_inputs, save_header, save_manifest, save_tiles},
    symbols::{self, symbol_name},
    Batch,
};

/// Convert images into (a set of) tiles for 8-bit display hardware
#[derive(Parser, Debug)]
#[command(name = "img2tile", version)]
struct Args {
    /// Input image(s); glob patterns are expanded
    #[arg(short, long, required = true, num_args = 1..)]
    input: Vec<String>,

    /// Output file with the tile data
    #[arg(short, long)]
    output: PathBuf,

    /// C header with the tile symbols
    #[arg(short = 'H', long)]
    header: Option<PathBuf>,

    /// JSON description of where each image landed
    #[arg(long)]
    manifest: Option<PathBuf>,

    /// Luminance threshold for a pixel to be "on"
    #[arg(short, long, default_value_t = 1)]
    luminance: u32,

    /// Reverse the luminance threshold
    #[arg(short = 'R', long)]
    reverse: bool,

    /// Encode at 2 bits per pixel with up to 4 colors
    #[arg(short, long)]
    multicolor: bool,

    /// Bank number used to namespace the emitted symbols
    #[arg(short, long)]
    bank: Option<u8>,

    /// Reference color to pin at palette index 0 (multicolor)
    #[arg(short = 'g', long)]
    background: Option<String>,

    /// More output (repeat for more)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only report errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Args {
    fn config(&self) -> Result<Config> {
        let mut config = Config::new()
            .threshold(self.luminance)
            .reverse(self.reverse)
            .mode(if self.multicolor {
                Mode::Multicolor
            } else {
                Mode::Monochrome
            });
        if let Some(bank) = self.bank {
            config = config.bank(bank);
        }
        if let Some(name) = &self.background {
            config = config.with_background_name(name)?;
        }
        Ok(config)
    }

    fn log_level(&self) -> LevelFilter {
        match (self.quiet, self.verbose) {
            (true, _) => LevelFilter::Error,
            (false, 0) => LevelFilter::Warn,
            (false, 1) => LevelFilter::Info,
            (false, _) => LevelFilter::Debug,
        }
    }
}

pub fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    let config = args.config()?;
    let inputs = expand_inputs(&args.input)?;
    info!("Output tile(s) .............. {}", args.output.display());

    let mut batch = Batch::new();
    for path in &inputs {
        info!("Input image ................. {}", path.display());
        let image = load_png(path)?;
        batch
            .add(&symbol_name(path), &image, &config)
            .with_context(|| format!("Cannot convert {}", path.display()))?;
    }

    if args.header.is_some() {
        symbols::validate(&batch.records)?;
    }

    save_tiles(&args.output, &batch.sheet)?;
    if let Some(header) = &args.header {
        save_header(header, &batch.records, batch.tiles_count(), config.bank)?;
    }
    if let Some(manifest) = &args.manifest {
        save_manifest(
            manifest,
            &batch.records,
            batch.tiles_count(),
            config.mode,
            config.bank,
        )?;
    }
    Ok(())
}
