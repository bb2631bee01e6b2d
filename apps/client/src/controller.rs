//! Request lifecycle controller.
//!
//! Owns the single [`RequestState`] the view renders from and mutates it in
//! exactly two places: `begin` (new invocation starts, state goes to
//! `Loading`) and `complete` (terminal outcome lands). A successful fetch
//! replaces the previous resume wholesale; nothing is merged.

use tracing::debug;

use crate::fetch::{AttemptSink, FetchError, RetryingFetcher};
use crate::models::{RequestState, Resume};

/// Token for one invocation of the fetch cycle, monotonic per controller.
///
/// Triggers may overlap (a user can request regeneration while a previous
/// invocation is still retrying); a completion carrying a stale token is
/// discarded, so the newest trigger always wins regardless of which
/// invocation's outcome resolves last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Invocation(u64);

pub struct ResumeController {
    fetcher: RetryingFetcher,
    state: RequestState,
    invocation: u64,
}

impl ResumeController {
    pub fn new(fetcher: RetryingFetcher) -> Self {
        Self {
            fetcher,
            state: RequestState::Idle,
            invocation: 0,
        }
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    /// Starts a new invocation: clears any prior error or resume from the
    /// visible state and moves to `Loading`. There is no path back to
    /// `Idle` once the first invocation has begun.
    pub fn begin(&mut self) -> Invocation {
        self.invocation += 1;
        self.state = RequestState::Loading;
        Invocation(self.invocation)
    }

    /// Applies a terminal outcome for the invocation identified by `token`.
    /// Returns false, leaving state untouched, when a newer invocation has
    /// begun since the token was issued.
    pub fn complete(&mut self, token: Invocation, outcome: Result<Resume, FetchError>) -> bool {
        if token.0 != self.invocation {
            debug!(
                "Discarding stale outcome for invocation {} (current is {})",
                token.0, self.invocation
            );
            return false;
        }
        self.state = match outcome {
            Ok(resume) => RequestState::Loaded(resume),
            Err(err) => RequestState::Failed(err.to_string()),
        };
        true
    }

    /// One full fetch cycle. Used both for the automatic initial load and
    /// for user-requested regeneration; calling it while `Loaded` or
    /// `Failed` unconditionally restarts from `Loading`.
    pub async fn trigger(&mut self, sink: &dyn AttemptSink) {
        let token = self.begin();
        let outcome = self.fetcher.fetch_with_retry(sink).await;
        self.complete(token, outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Contact;

    fn make_controller() -> ResumeController {
        // No request is issued by begin/complete, so the endpoint is inert.
        ResumeController::new(RetryingFetcher::new("http://127.0.0.1:9"))
    }

    fn make_resume(name: &str, skills: &[&str]) -> Resume {
        Resume {
            name: name.to_string(),
            title: "Chief Example Officer".to_string(),
            summary: "Does examples.".to_string(),
            contact: Some(Contact {
                email: "e".to_string(),
                phone: "p".to_string(),
                location: "l".to_string(),
            }),
            experience: vec![],
            skills: skills.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_initial_state_is_idle() {
        let controller = make_controller();
        assert_eq!(*controller.state(), RequestState::Idle);
    }

    #[test]
    fn test_begin_moves_to_loading() {
        let mut controller = make_controller();
        controller.begin();
        assert_eq!(*controller.state(), RequestState::Loading);
    }

    #[test]
    fn test_success_outcome_moves_to_loaded() {
        let mut controller = make_controller();
        let token = controller.begin();
        assert!(controller.complete(token, Ok(make_resume("A", &[]))));
        assert!(matches!(controller.state(), RequestState::Loaded(r) if r.name == "A"));
    }

    #[test]
    fn test_failure_outcome_carries_terminal_message() {
        let mut controller = make_controller();
        let token = controller.begin();
        controller.complete(
            token,
            Err(FetchError {
                attempts: 3,
                reason: "not found".to_string(),
            }),
        );
        match controller.state() {
            RequestState::Failed(message) => {
                assert_eq!(message, "Failed to fetch resume after 3 attempts: not found");
            }
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[test]
    fn test_retrigger_from_loaded_resets_to_loading_and_replaces_wholesale() {
        let mut controller = make_controller();
        let token = controller.begin();
        controller.complete(token, Ok(make_resume("Old", &["Yodeling"])));

        let token = controller.begin();
        assert_eq!(*controller.state(), RequestState::Loading);

        controller.complete(token, Ok(make_resume("New", &[])));
        match controller.state() {
            RequestState::Loaded(resume) => {
                assert_eq!(resume.name, "New");
                assert!(resume.skills.is_empty(), "old skills must not be retained");
            }
            other => panic!("expected Loaded, got {other:?}"),
        }
    }

    #[test]
    fn test_retrigger_from_failed_clears_error() {
        let mut controller = make_controller();
        let token = controller.begin();
        controller.complete(
            token,
            Err(FetchError {
                attempts: 3,
                reason: "boom".to_string(),
            }),
        );
        controller.begin();
        assert_eq!(*controller.state(), RequestState::Loading);
    }

    #[test]
    fn test_stale_outcome_is_discarded() {
        let mut controller = make_controller();
        let stale = controller.begin();
        let current = controller.begin();

        assert!(!controller.complete(stale, Ok(make_resume("Stale", &[]))));
        assert_eq!(*controller.state(), RequestState::Loading);

        assert!(controller.complete(current, Ok(make_resume("Current", &[]))));
        assert!(matches!(controller.state(), RequestState::Loaded(r) if r.name == "Current"));
    }

    #[test]
    fn test_stale_outcome_after_completion_does_not_overwrite() {
        let mut controller = make_controller();
        let stale = controller.begin();
        let current = controller.begin();
        controller.complete(current, Ok(make_resume("Current", &[])));

        assert!(!controller.complete(
            stale,
            Err(FetchError {
                attempts: 3,
                reason: "late failure".to_string(),
            })
        ));
        assert!(matches!(controller.state(), RequestState::Loaded(r) if r.name == "Current"));
    }
}
