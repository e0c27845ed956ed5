use super::ProcessState;

/// Snapshot of one process as seen by the application aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessStatus {
    name: String,
    state: ProcessState,
    required: bool,
    unexpected_exit: bool,
}

impl ProcessStatus {
    pub fn new(name: impl Into<String>, state: ProcessState) -> Self {
        Self {
            name: name.into(),
            state,
            required: false,
            unexpected_exit: false,
        }
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn unexpected_exit(mut self, unexpected_exit: bool) -> Self {
        self.unexpected_exit = unexpected_exit;
        self
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_state(&self) -> ProcessState {
        self.state
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn has_unexpected_exit(&self) -> bool {
        self.unexpected_exit
    }
}
