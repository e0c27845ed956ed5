use std::fmt;

use serde::Deserialize;

use super::{ApplicationState, ApplicationStatus};

fn default_failure() -> bool {
    false
}

#[derive(Debug, Deserialize)]
struct ApplicationInfoRecord {
    application_name: String,

    #[serde(alias = "state")]
    statename: ApplicationState,

    #[serde(default = "default_failure")]
    major_failure: bool,

    #[serde(default = "default_failure")]
    minor_failure: bool,
}

/// Named application status, either reported by the server or derived locally.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "ApplicationInfoRecord")]
pub struct ApplicationInfo {
    name: String,
    status: ApplicationStatus,
}

impl From<ApplicationInfoRecord> for ApplicationInfo {
    fn from(record: ApplicationInfoRecord) -> Self {
        Self::new(
            record.application_name,
            ApplicationStatus::new(record.statename, record.major_failure, record.minor_failure),
        )
    }
}

impl ApplicationInfo {
    pub fn new(name: impl Into<String>, status: ApplicationStatus) -> Self {
        Self {
            name: name.into(),
            status,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status(&self) -> ApplicationStatus {
        self.status
    }

    pub fn state(&self) -> ApplicationState {
        self.status.get_state()
    }

    pub fn has_major_failure(&self) -> bool {
        self.status.has_major_failure()
    }

    pub fn has_minor_failure(&self) -> bool {
        self.status.has_minor_failure()
    }
}

impl fmt::Display for ApplicationInfo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ApplicationInfo(name={} {})", self.name, self.status)
    }
}
