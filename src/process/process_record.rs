use serde::Deserialize;

use super::{ProcessState, ProcessStatus};

fn default_required() -> bool {
    false
}

fn default_expected() -> bool {
    true
}

/// Process entry as delivered by the management API.
#[derive(Debug, Clone, Deserialize)]
pub struct ProcessRecord {
    pub name: String,
    pub application_name: String,

    #[serde(alias = "state")]
    pub statename: ProcessState,

    #[serde(default = "default_required")]
    pub required: bool,

    // false when the process exited without having been asked to
    #[serde(default = "default_expected")]
    pub expected: bool,
}

impl ProcessRecord {
    pub fn status(&self) -> ProcessStatus {
        ProcessStatus::new(self.name.to_owned(), self.statename)
            .required(self.required)
            .unexpected_exit(!self.expected)
    }
}
