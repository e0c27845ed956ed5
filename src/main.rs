mod app;
mod config;
mod error;
mod logger;
mod process;
mod snapshot;
mod utils;

use std::process::ExitCode;

use app::{ApplicationState, ApplicationsMap};
use config::Config;
use snapshot::Snapshot;

use crate::{error::Result, logger::init_logger, utils::normalize_path};

fn run(config: &Config) -> Result<bool> {
    let snapshot_path = normalize_path(&config.snapshot)?;
    let snapshot = Snapshot::load(&snapshot_path)?;
    let apps_map = ApplicationsMap::new(&snapshot.processes);

    let infos = apps_map.infos();

    for info in infos.iter() {
        if info.has_major_failure() || info.has_minor_failure() {
            log::warn!("{}", info);
        } else {
            log::info!("{}", info);
        }
    }

    log::info!(
        "{} applications, {} running",
        infos.len(),
        infos
            .iter()
            .filter(|info| info.state() == ApplicationState::Running)
            .count()
    );

    if !config.reconcile || snapshot.applications.is_empty() {
        return Ok(true);
    }

    let mismatches = snapshot.reconcile(&apps_map);

    for mismatch in mismatches.iter() {
        log::warn!(
            "application \"{}\" reported as {} but derived as {}",
            mismatch.application_name,
            mismatch.reported,
            mismatch.derived
        );
    }

    if mismatches.is_empty() {
        log::info!(
            "all {} reported applications match their processes",
            snapshot.applications.len()
        );
    }

    Ok(mismatches.is_empty())
}

fn main() -> ExitCode {
    let config = match Config::new().and_then(Config::validate) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("unable to load config, {}", err);

            return ExitCode::from(1);
        }
    };

    init_logger(&config.log_level);

    log::debug!("loaded config {:#?}", config);

    match run(&config) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(err) => {
            log::error!("unable to compute application status, {}", err);

            ExitCode::from(1)
        }
    }
}
