use std::collections::{BTreeMap, HashSet};

use crate::process::{ProcessRecord, ProcessStatus};

use super::{compute_status, ApplicationInfo};

/// Processes grouped by application, iterated in application name order.
pub struct ApplicationsMap {
    map: BTreeMap<String, Vec<ProcessStatus>>,
}

impl ApplicationsMap {
    pub fn new(records: &[ProcessRecord]) -> Self {
        let mut map: BTreeMap<String, Vec<ProcessStatus>> = BTreeMap::new();

        for record in records {
            map.entry(record.application_name.to_owned())
                .or_default()
                .push(record.status());
        }

        for (application_name, processes) in map.iter() {
            let mut seen: HashSet<&str> = HashSet::new();

            for process in processes {
                if !seen.insert(process.get_name()) {
                    log::warn!(
                        "process \"{}\" is listed more than once in application \"{}\"",
                        process.get_name(),
                        application_name
                    );
                }
            }

            log::debug!(
                "application \"{}\": {}/{} processes running",
                application_name,
                processes.iter().filter(|p| p.get_state().is_running()).count(),
                processes.len()
            );
        }

        Self { map }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(String::as_str)
    }

    pub fn processes_of(&self, application_name: &str) -> &[ProcessStatus] {
        match self.map.get(application_name) {
            None => &[],
            Some(processes) => processes.as_slice(),
        }
    }

    /// Unknown applications have no processes, hence are STOPPED.
    pub fn info_of(&self, application_name: &str) -> ApplicationInfo {
        ApplicationInfo::new(
            application_name,
            compute_status(self.processes_of(application_name)),
        )
    }

    pub fn infos(&self) -> Vec<ApplicationInfo> {
        self.names().map(|name| self.info_of(name)).collect()
    }
}
