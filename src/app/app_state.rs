use std::fmt;

use serde::{de::Error, Deserialize, Deserializer};
use serde_yaml::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ApplicationState {
    // All the processes are STOPPED, EXITED, FATAL or UNKNOWN
    #[default]
    Stopped,

    // One of the processes is STARTING
    Starting,

    // At least one process is RUNNING and none is STARTING or STOPPING
    Running,

    // One of the processes is STOPPING and none is STARTING
    Stopping,
}

const ALL_STATES: [ApplicationState; 4] = [
    ApplicationState::Stopped,
    ApplicationState::Starting,
    ApplicationState::Running,
    ApplicationState::Stopping,
];

impl ApplicationState {
    pub fn name(&self) -> &'static str {
        match self {
            ApplicationState::Stopped => "STOPPED",
            ApplicationState::Starting => "STARTING",
            ApplicationState::Running => "RUNNING",
            ApplicationState::Stopping => "STOPPING",
        }
    }

    pub fn code(&self) -> i64 {
        match self {
            ApplicationState::Stopped => 0,
            ApplicationState::Starting => 1,
            ApplicationState::Running => 2,
            ApplicationState::Stopping => 3,
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

    /// The application is expected to be up, so stopped processes count as failures.
    pub fn is_expected_up(&self) -> bool {
        matches!(self, ApplicationState::Running | ApplicationState::Starting)
    }
}

impl fmt::Display for ApplicationState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl<'de> Deserialize<'de> for ApplicationState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: Value = Deserialize::deserialize(deserializer)?;

        match value {
            Value::String(string_value) => ApplicationState::from_name(&string_value).ok_or_else(
                || D::Error::custom(format!("unknown application state \"{}\"", string_value)),
            ),
            Value::Number(number) => number
                .as_i64()
                .and_then(ApplicationState::from_code)
                .ok_or_else(|| {
                    D::Error::custom(format!("unknown application state code {}", number))
                }),
            _ => Err(D::Error::custom(
                "unable to parse application state, expected string or number",
            )),
        }
    }
}
