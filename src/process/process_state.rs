use std::fmt;

use serde::{de::Error, Deserialize, Deserializer};
use serde_yaml::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProcessState {
    // The process is not running and was stopped on request (or never started)
    Stopped,

    // Spawned, waiting for the startsecs delay to elapse
    Starting,

    Running,

    // Exited too quickly while starting, a new spawn attempt is pending
    Backoff,

    // A stop has been requested and the process has not exited yet
    Stopping,

    // The process exited from RUNNING, expectedly or not
    Exited,

    // Too many BACKOFF retries, the supervisor gave up
    Fatal,

    // The supervisor lost track of the process
    Unknown,
}

const ALL_STATES: [ProcessState; 8] = [
    ProcessState::Stopped,
    ProcessState::Starting,
    ProcessState::Running,
    ProcessState::Backoff,
    ProcessState::Stopping,
    ProcessState::Exited,
    ProcessState::Fatal,
    ProcessState::Unknown,
];

impl ProcessState {
    pub fn name(&self) -> &'static str {
        match self {
            ProcessState::Stopped => "STOPPED",
            ProcessState::Starting => "STARTING",
            ProcessState::Running => "RUNNING",
            ProcessState::Backoff => "BACKOFF",
            ProcessState::Stopping => "STOPPING",
            ProcessState::Exited => "EXITED",
            ProcessState::Fatal => "FATAL",
            ProcessState::Unknown => "UNKNOWN",
        }
    }

    /// Numeric code used by the supervisor XML-RPC interface.
    pub fn code(&self) -> i64 {
        match self {
            ProcessState::Stopped => 0,
            ProcessState::Starting => 10,
            ProcessState::Running => 20,
            ProcessState::Backoff => 30,
            ProcessState::Stopping => 40,
            ProcessState::Exited => 100,
            ProcessState::Fatal => 200,
            ProcessState::Unknown => 1000,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        ALL_STATES
            .into_iter()
            .find(|state| state.name().eq_ignore_ascii_case(name.trim()))
    }

    pub fn from_code(code: i64) -> Option<Self> {
        ALL_STATES.into_iter().find(|state| state.code() == code)
    }

    pub fn is_running(&self) -> bool {
        matches!(
            self,
            ProcessState::Starting | ProcessState::Running | ProcessState::Backoff
        )
    }

    pub fn is_stopped(&self) -> bool {
        matches!(
            self,
            ProcessState::Stopped | ProcessState::Exited | ProcessState::Fatal | ProcessState::Unknown
        )
    }
}

impl fmt::Display for ProcessState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl<'de> Deserialize<'de> for ProcessState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: Value = Deserialize::deserialize(deserializer)?;

        match value {
            Value::String(string_value) => ProcessState::from_name(&string_value)
                .ok_or_else(|| D::Error::custom(format!("unknown process state \"{}\"", string_value))),
            Value::Number(number) => number
                .as_i64()
                .and_then(ProcessState::from_code)
                .ok_or_else(|| D::Error::custom(format!("unknown process state code {}", number))),
            _ => Err(D::Error::custom(
                "unable to parse process state, expected string or number",
            )),
        }
    }
}
