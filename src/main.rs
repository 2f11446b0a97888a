mod classifier;
mod cli;
mod config;
mod error;
mod filter;
mod metadata;
mod output;
mod report;
mod scanner;
mod walker;

use crate::classifier::Capabilities;
use crate::cli::Cli;
use crate::config::AppConfig;
use crate::error::AppError;
use crate::scanner::ScanConfiguration;
use clap::Parser;
use log::info;

fn main() {
    let cli = Cli::parse();
    let config = AppConfig::new(cli.config.as_deref()).map_err(AppError::from);

    // Settings may be broken; fall back to info so the failure still gets logged.
    let level = cli
        .log_level
        .clone()
        .or_else(|| config.as_ref().ok().map(|c| c.log_level.clone()))
        .unwrap_or_else(|| "info".to_string());
    env_logger::Builder::new()
        .filter_level(level.parse().unwrap_or(log::LevelFilter::Info))
        .init();

    if let Err(e) = config.and_then(|config| run(cli, &config)) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli, config: &AppConfig) -> Result<(), AppError> {
    let capabilities = if cli.no_dimensions {
        Capabilities::none()
    } else {
        Capabilities::detect()
    };
    if !capabilities.dimensions {
        info!("Image dimensions will not be read");
    }

    let excluded_names = match &cli.exclude {
        Some(raw) => cli::parse_exclude_list(raw),
        None => config.exclude_dirs.iter().cloned().collect(),
    };
    log::debug!("Excluded directories: {:?}", excluded_names);

    let output = cli::expand_home(
        cli.output
            .clone()
            .unwrap_or_else(|| config.output_json_file.clone().into()),
    );
    let output = std::path::absolute(&output)?;

    let scan_config = ScanConfiguration {
        root_path: cli::expand_home(cli.scan),
        excluded_names,
        capabilities,
    };
    let result = scanner::scan(&scan_config)?;
    output::write_json(&output, &result)?;

    if cli.list {
        print!("{}", report::render_summary(&result, &output));
    }
    info!("Found {} images", result.scan_info.total_images);
    Ok(())
}
