//! Submission lifecycle state machine

/// Lifecycle of the one outbound signup submission.
///
/// Exactly one variant is active at a time and it is the sole driver of
/// which screen renders. `Submitted` is terminal; `Failed` keeps the form
/// interactive so the user can retry manually.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Submitted,
    Failed(String),
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmissionState::Submitted)
    }

    /// The user-facing failure message, if the last attempt failed
    pub fn error_message(&self) -> Option<&str> {
        match self {
            SubmissionState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Events observed during a submission attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionEvent {
    Started,
    Succeeded,
    Failed(String),
}

/// Advance the submission lifecycle by one event.
///
/// `Submitted` absorbs every event, `Started` is ignored while a send is
/// already in flight, and completion events are ignored unless a send is
/// in flight.
pub fn transition(state: SubmissionState, event: SubmissionEvent) -> SubmissionState {
    match (state, event) {
        (SubmissionState::Submitted, _) => SubmissionState::Submitted,
        (SubmissionState::Submitting, SubmissionEvent::Succeeded) => SubmissionState::Submitted,
        (SubmissionState::Submitting, SubmissionEvent::Failed(message)) => {
            SubmissionState::Failed(message)
        }
        (SubmissionState::Submitting, SubmissionEvent::Started) => SubmissionState::Submitting,
        (SubmissionState::Idle | SubmissionState::Failed(_), SubmissionEvent::Started) => {
            SubmissionState::Submitting
        }
        (state, _) => state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        assert_eq!(SubmissionState::default(), SubmissionState::Idle);
    }

    #[test]
    fn test_idle_started_goes_submitting() {
        let state = transition(SubmissionState::Idle, SubmissionEvent::Started);
        assert_eq!(state, SubmissionState::Submitting);
    }

    #[test]
    fn test_failed_started_goes_submitting() {
        let state = transition(
            SubmissionState::Failed("oops".to_string()),
            SubmissionEvent::Started,
        );
        assert_eq!(state, SubmissionState::Submitting);
    }

    #[test]
    fn test_submitting_succeeded_goes_submitted() {
        let state = transition(SubmissionState::Submitting, SubmissionEvent::Succeeded);
        assert_eq!(state, SubmissionState::Submitted);
    }

    #[test]
    fn test_submitting_failed_carries_message() {
        let state = transition(
            SubmissionState::Submitting,
            SubmissionEvent::Failed("boom".to_string()),
        );
        assert_eq!(state, SubmissionState::Failed("boom".to_string()));
    }

    #[test]
    fn test_submitting_started_is_noop() {
        let state = transition(SubmissionState::Submitting, SubmissionEvent::Started);
        assert_eq!(state, SubmissionState::Submitting);
    }

    #[test]
    fn test_submitted_is_absorbing() {
        for event in [
            SubmissionEvent::Started,
            SubmissionEvent::Succeeded,
            SubmissionEvent::Failed("late".to_string()),
        ] {
            let state = transition(SubmissionState::Submitted, event);
            assert_eq!(state, SubmissionState::Submitted);
        }
    }

    #[test]
    fn test_completion_events_ignored_outside_submitting() {
        let state = transition(SubmissionState::Idle, SubmissionEvent::Succeeded);
        assert_eq!(state, SubmissionState::Idle);

        let failed = SubmissionState::Failed("first".to_string());
        let state = transition(failed.clone(), SubmissionEvent::Failed("second".to_string()));
        assert_eq!(state, failed);
    }

    #[test]
    fn test_error_message_accessor() {
        let state = SubmissionState::Failed("oops".to_string());
        assert_eq!(state.error_message(), Some("oops"));
        assert_eq!(SubmissionState::Idle.error_message(), None);
    }
}
