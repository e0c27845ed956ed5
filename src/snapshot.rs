use std::{fs::File, path::Path, str::FromStr};

use serde::Deserialize;

use crate::{
    app::{ApplicationInfo, ApplicationStatus, ApplicationsMap},
    error::{Result, StatusError},
    process::ProcessRecord,
};

fn default_processes() -> Vec<ProcessRecord> {
    vec![]
}

fn default_applications() -> Vec<ApplicationInfo> {
    vec![]
}

/// Process and application records fetched from the management API.
#[derive(Debug, Deserialize)]
pub struct Snapshot {
    #[serde(default = "default_processes")]
    pub processes: Vec<ProcessRecord>,

    // application status as computed by the server, if it was fetched too
    #[serde(default = "default_applications")]
    pub applications: Vec<ApplicationInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub application_name: String,
    pub reported: ApplicationStatus,
    pub derived: ApplicationStatus,
}

impl Snapshot {
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let snapshot: Snapshot = serde_yaml::from_reader(file)?;

        log::debug!(
            "loaded snapshot {}: {} processes, {} reported applications",
            path.display(),
            snapshot.processes.len(),
            snapshot.applications.len()
        );

        Ok(snapshot)
    }

    pub fn reconcile(&self, apps_map: &ApplicationsMap) -> Vec<Mismatch> {
        self.applications
            .iter()
            .filter_map(|reported| {
                let derived = apps_map.info_of(reported.name());

                if derived.status() == reported.status() {
                    return None;
                }

                Some(Mismatch {
                    application_name: reported.name().to_owned(),
                    reported: reported.status(),
                    derived: derived.status(),
                })
            })
            .collect()
    }
}

impl FromStr for Snapshot {
    type Err = StatusError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(s)?)
    }
}
