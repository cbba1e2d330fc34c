use clap::Parser;
use gallery::core::config::{self, CliOverrides, GalleryConfig};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "gallery", about = "Browse the Art Institute of Chicago collection")]
struct Args {
    /// Museum API base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Number of artworks to request
    #[arg(long)]
    artworks_limit: Option<u32>,

    /// Number of artists to request
    #[arg(long)]
    artists_limit: Option<u32>,

    /// Ignore responses to requests that have been superseded
    #[arg(long)]
    discard_stale: bool,

    /// Log file path
    #[arg(long)]
    log_file: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Loading runs before the logger starts; its outcome is logged below
    let (file_config, source, load_error) = match config::load_config() {
        Ok(loaded) => (loaded.config, Some(loaded.source), None),
        Err(e) => (GalleryConfig::default(), None, Some(e)),
    };
    let cli = CliOverrides {
        base_url: args.base_url,
        artworks_limit: args.artworks_limit,
        artists_limit: args.artists_limit,
        discard_stale: args.discard_stale,
        log_file: args.log_file,
    };
    let resolved = config::resolve(&file_config, &cli);

    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    if let Some(source) = &source {
        source.log();
    }
    log::debug!("Config: {:?}", resolved);
    if let Some(e) = load_error {
        log::warn!("Falling back to default configuration: {e}");
    }
    log::info!(
        "Gallery starting up against {} (artworks {}, artists {})",
        resolved.api_base_url,
        resolved.artworks_limit,
        resolved.artists_limit
    );

    gallery::tui::run(resolved)
}
