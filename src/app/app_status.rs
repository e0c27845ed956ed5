use std::fmt;

use crate::process::{ProcessState, ProcessStatus};

use super::ApplicationState;

/// Aggregate status of an application, derived from its processes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ApplicationStatus {
    state: ApplicationState,
    major_failure: bool,
    minor_failure: bool,
}

impl ApplicationStatus {
    pub fn new(state: ApplicationState, major_failure: bool, minor_failure: bool) -> Self {
        Self {
            state,
            major_failure,
            minor_failure,
        }
    }

    pub fn compute(processes: &[ProcessStatus]) -> Self {
        let any_in = |state: ProcessState| processes.iter().any(|p| p.get_state() == state);

        let state = if any_in(ProcessState::Starting) {
            ApplicationState::Starting
        } else if any_in(ProcessState::Stopping) {
            ApplicationState::Stopping
        } else if any_in(ProcessState::Running) {
            ApplicationState::Running
        } else {
            ApplicationState::Stopped
        };

        /*
         * A stopped or stopping application was asked to go down,
         * so its stopped processes are not failures
         */
        if !state.is_expected_up() {
            return Self::new(state, false, false);
        }

        let major_failure = processes
            .iter()
            .any(|p| p.is_required() && p.get_state().is_stopped());

        // required processes only ever raise the major failure
        let minor_failure = processes.iter().any(|p| {
            !p.is_required()
                && p.has_unexpected_exit()
                && matches!(p.get_state(), ProcessState::Exited | ProcessState::Fatal)
        });

        Self::new(state, major_failure, minor_failure)
    }

    pub fn get_state(&self) -> ApplicationState {
        self.state
    }

    pub fn has_major_failure(&self) -> bool {
        self.major_failure
    }

    pub fn has_minor_failure(&self) -> bool {
        self.minor_failure
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "state={} majorFailure={} minorFailure={}",
            self.state, self.major_failure, self.minor_failure
        )
    }
}

pub fn compute_status(processes: &[ProcessStatus]) -> ApplicationStatus {
    ApplicationStatus::compute(processes)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn process(state: ProcessState) -> ProcessStatus {
        ProcessStatus::new("p", state)
    }

    fn status(state: ApplicationState, major: bool, minor: bool) -> ApplicationStatus {
        ApplicationStatus::new(state, major, minor)
    }

    fn state_strategy() -> impl Strategy<Value = ProcessState> {
        prop_oneof![
            Just(ProcessState::Stopped),
            Just(ProcessState::Starting),
            Just(ProcessState::Running),
            Just(ProcessState::Backoff),
            Just(ProcessState::Stopping),
            Just(ProcessState::Exited),
            Just(ProcessState::Fatal),
            Just(ProcessState::Unknown),
        ]
    }

    fn stopped_state_strategy() -> impl Strategy<Value = ProcessState> {
        prop_oneof![
            Just(ProcessState::Stopped),
            Just(ProcessState::Exited),
            Just(ProcessState::Fatal),
            Just(ProcessState::Unknown),
        ]
    }

    fn process_strategy(
        states: impl Strategy<Value = ProcessState>,
    ) -> impl Strategy<Value = ProcessStatus> {
        (states, any::<bool>(), any::<bool>(), "[a-z]{1,3}").prop_map(
            |(state, required, unexpected_exit, name)| {
                ProcessStatus::new(name, state)
                    .required(required)
                    .unexpected_exit(unexpected_exit)
            },
        )
    }

    #[test]
    fn test_empty_is_stopped_without_failures() {
        assert_eq!(
            compute_status(&[]),
            status(ApplicationState::Stopped, false, false)
        );
        assert_eq!(compute_status(&[]), ApplicationStatus::default());
    }

    #[test]
    fn test_required_process_stopped_while_running() {
        let processes = [
            process(ProcessState::Running).required(true),
            process(ProcessState::Stopped).required(true),
        ];

        assert_eq!(
            compute_status(&processes),
            status(ApplicationState::Running, true, false)
        );
    }

    #[test]
    fn test_optional_process_exited_unexpectedly_while_running() {
        let processes = [
            process(ProcessState::Running),
            process(ProcessState::Exited).unexpected_exit(true),
        ];

        assert_eq!(
            compute_status(&processes),
            status(ApplicationState::Running, false, true)
        );
    }

    #[test]
    fn test_stopped_application_masks_failures() {
        let processes = [process(ProcessState::Stopped).required(true)];

        assert_eq!(
            compute_status(&processes),
            status(ApplicationState::Stopped, false, false)
        );
    }

    #[test]
    fn test_starting_and_running_required_processes() {
        let processes = [
            process(ProcessState::Starting).required(true),
            process(ProcessState::Running).required(true),
        ];

        assert_eq!(
            compute_status(&processes),
            status(ApplicationState::Starting, false, false)
        );
    }

    #[test]
    fn test_stopping_application_masks_failures() {
        let processes = [
            process(ProcessState::Stopping),
            process(ProcessState::Running),
            process(ProcessState::Fatal).required(true),
            process(ProcessState::Exited).unexpected_exit(true),
        ];

        assert_eq!(
            compute_status(&processes),
            status(ApplicationState::Stopping, false, false)
        );
    }

    #[test]
    fn test_required_unexpected_exit_only_raises_major() {
        let processes = [
            process(ProcessState::Running),
            process(ProcessState::Exited)
                .required(true)
                .unexpected_exit(true),
        ];

        assert_eq!(
            compute_status(&processes),
            status(ApplicationState::Running, true, false)
        );
    }

    #[test]
    fn test_major_and_minor_from_different_processes() {
        let processes = [
            process(ProcessState::Starting),
            process(ProcessState::Unknown).required(true),
            process(ProcessState::Fatal).unexpected_exit(true),
        ];

        assert_eq!(
            compute_status(&processes),
            status(ApplicationState::Starting, true, true)
        );
    }

    #[test]
    fn test_expected_exit_is_not_a_minor_failure() {
        let processes = [
            process(ProcessState::Running),
            process(ProcessState::Exited),
            process(ProcessState::Stopped).unexpected_exit(true),
        ];

        assert_eq!(
            compute_status(&processes),
            status(ApplicationState::Running, false, false)
        );
    }

    #[test]
    fn test_backoff_alone_is_stopped() {
        let processes = [process(ProcessState::Backoff).required(true)];

        assert_eq!(
            compute_status(&processes),
            status(ApplicationState::Stopped, false, false)
        );
    }

    #[test]
    fn test_required_backoff_is_not_a_major_failure() {
        let processes = [
            process(ProcessState::Running),
            process(ProcessState::Backoff).required(true),
        ];

        assert_eq!(
            compute_status(&processes),
            status(ApplicationState::Running, false, false)
        );
    }

    #[test]
    fn test_duplicate_names_are_counted() {
        let processes = [
            ProcessStatus::new("web", ProcessState::Running),
            ProcessStatus::new("web", ProcessState::Fatal).required(true),
        ];

        assert_eq!(
            compute_status(&processes),
            status(ApplicationState::Running, true, false)
        );
    }

    proptest! {
        #[test]
        fn prop_all_stopped_states_give_stopped(
            processes in prop::collection::vec(process_strategy(stopped_state_strategy()), 0..8)
        ) {
            prop_assert_eq!(
                compute_status(&processes),
                status(ApplicationState::Stopped, false, false)
            );
        }

        #[test]
        fn prop_starting_wins(
            mut processes in prop::collection::vec(process_strategy(state_strategy()), 0..8),
            index in any::<prop::sample::Index>(),
        ) {
            let position = index.index(processes.len() + 1);
            processes.insert(position, process(ProcessState::Starting));

            prop_assert_eq!(compute_status(&processes).get_state(), ApplicationState::Starting);
        }

        #[test]
        fn prop_state_precedence(
            processes in prop::collection::vec(process_strategy(state_strategy()), 0..8)
        ) {
            let has = |state| processes.iter().any(|p| p.get_state() == state);
            let derived = compute_status(&processes).get_state();

            if has(ProcessState::Starting) {
                prop_assert_eq!(derived, ApplicationState::Starting);
            } else if has(ProcessState::Stopping) {
                prop_assert_eq!(derived, ApplicationState::Stopping);
            } else if has(ProcessState::Running) {
                prop_assert_eq!(derived, ApplicationState::Running);
            } else {
                prop_assert_eq!(derived, ApplicationState::Stopped);
            }
        }

        #[test]
        fn prop_failures_only_when_expected_up(
            processes in prop::collection::vec(process_strategy(state_strategy()), 0..8)
        ) {
            let result = compute_status(&processes);

            if !result.get_state().is_expected_up() {
                prop_assert!(!result.has_major_failure());
                prop_assert!(!result.has_minor_failure());
            }
        }

        #[test]
        fn prop_order_does_not_matter(
            processes in prop::collection::vec(process_strategy(state_strategy()), 0..8)
        ) {
            let mut reversed = processes.clone();
            reversed.reverse();

            prop_assert_eq!(compute_status(&processes), compute_status(&reversed));
        }

        #[test]
        fn prop_idempotent(
            processes in prop::collection::vec(process_strategy(state_strategy()), 0..8)
        ) {
            let snapshot = processes.clone();

            prop_assert_eq!(compute_status(&processes), compute_status(&processes));
            prop_assert_eq!(processes, snapshot);
        }
    }
}
