//! Registration modal state machine
//!
//! ```text
//! Closed --open--> Open --submit(invalid)--> Open (errors shown)
//!                       --submit(valid)----> Submitting --ok--> Closed (draft reset)
//!                                                       --err-> Open
//! ```

use std::future::Future;
use std::pin::Pin;

use thiserror::Error;

use super::validation::{Field, FieldErrors, RegistrationDraft, RegistrationForm};

/// Future returned by a caller-supplied submit handler
pub type SubmitFuture = Pin<Box<dyn Future<Output = Result<(), SubmitError>>>>;

/// Submission failure reported by the submit handler
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("submission rejected: {0}")]
    Rejected(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalPhase {
    #[default]
    Closed,
    Open,
    Submitting,
}

/// Modal phase, input values and the errors of the last submit attempt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationFlow {
    phase: ModalPhase,
    draft: RegistrationDraft,
    errors: FieldErrors,
}

impl RegistrationFlow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flow that starts with the dialog already shown
    pub fn opened() -> Self {
        Self {
            phase: ModalPhase::Open,
            ..Self::default()
        }
    }

    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase != ModalPhase::Closed
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == ModalPhase::Submitting
    }

    pub fn draft(&self) -> &RegistrationDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut RegistrationDraft {
        &mut self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn open(&mut self) {
        if self.phase == ModalPhase::Closed {
            self.phase = ModalPhase::Open;
        }
    }

    /// A submission in flight keeps the dialog up
    pub fn can_close(&self) -> bool {
        self.phase != ModalPhase::Submitting
    }

    /// Close unless a submission is in flight. Input values are kept.
    pub fn close(&mut self) -> bool {
        if !self.can_close() {
            return false;
        }
        self.phase = ModalPhase::Closed;
        true
    }

    /// Editing a field clears its inline error
    pub fn clear_error(&mut self, field: Field) {
        let mut remaining = FieldErrors::new();
        for error in self.errors.iter().filter(|e| e.field() != field) {
            remaining.add(error.clone());
        }
        self.errors = remaining;
    }

    /// Validate the draft. On success the flow enters `Submitting` and the
    /// payload for the submit handler is returned; on failure the errors are
    /// stored and the dialog stays open.
    pub fn submit(&mut self) -> Option<RegistrationForm> {
        if self.phase != ModalPhase::Open {
            return None;
        }

        match self.draft.validate() {
            Ok(form) => {
                self.errors = FieldErrors::new();
                self.phase = ModalPhase::Submitting;
                Some(form)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    /// Apply the outcome of the submit handler
    pub fn finish(&mut self, outcome: Result<(), SubmitError>) {
        self.settle(outcome, ModalPhase::Closed);
    }

    /// Apply the outcome when the caller owns the open state: a successful
    /// submit resets the draft but leaves the dialog up until the caller
    /// closes it.
    pub fn finish_controlled(&mut self, outcome: Result<(), SubmitError>) {
        self.settle(outcome, ModalPhase::Open);
    }

    fn settle(&mut self, outcome: Result<(), SubmitError>, on_success: ModalPhase) {
        if self.phase != ModalPhase::Submitting {
            return;
        }
        match outcome {
            Ok(()) => {
                self.draft.reset();
                self.errors = FieldErrors::new();
                self.phase = on_success;
            }
            Err(_) => self.phase = ModalPhase::Open,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_valid(flow: &mut RegistrationFlow) {
        let draft = flow.draft_mut();
        draft.name = "Jane Doe".to_string();
        draft.email = "jane@example.com".to_string();
        draft.agree_to_terms = true;
    }

    #[test]
    fn test_starts_closed() {
        let flow = RegistrationFlow::new();
        assert_eq!(flow.phase(), ModalPhase::Closed);
        assert!(!flow.is_open());
        assert!(RegistrationFlow::opened().is_open());
    }

    #[test]
    fn test_submit_requires_open_dialog() {
        let mut flow = RegistrationFlow::new();
        fill_valid(&mut flow);
        assert!(flow.submit().is_none());
        assert_eq!(flow.phase(), ModalPhase::Closed);
    }

    #[test]
    fn test_invalid_submit_stays_open_with_errors() {
        let mut flow = RegistrationFlow::opened();
        flow.draft_mut().name = "J".to_string();

        assert!(flow.submit().is_none());
        assert_eq!(flow.phase(), ModalPhase::Open);
        assert!(flow.errors().get(Field::Name).is_some());
    }

    #[test]
    fn test_clear_error_only_touches_one_field() {
        let mut flow = RegistrationFlow::opened();
        flow.submit();
        assert_eq!(flow.errors().len(), 3);

        flow.clear_error(Field::Email);
        assert_eq!(flow.errors().len(), 2);
        assert!(flow.errors().get(Field::Email).is_none());
        assert!(flow.errors().get(Field::Name).is_some());
    }

    #[test]
    fn test_successful_submit_resets_and_closes() {
        let mut flow = RegistrationFlow::opened();
        fill_valid(&mut flow);

        let form = flow.submit().expect("valid draft");
        assert_eq!(form.name, "Jane Doe");
        assert!(flow.is_submitting());

        flow.finish(Ok(()));
        assert_eq!(flow.phase(), ModalPhase::Closed);
        assert_eq!(flow.draft(), &RegistrationDraft::default());
    }

    #[test]
    fn test_failed_submit_keeps_values() {
        let mut flow = RegistrationFlow::opened();
        fill_valid(&mut flow);
        flow.submit();

        flow.finish(Err(SubmitError::Rejected("offline".to_string())));
        assert_eq!(flow.phase(), ModalPhase::Open);
        assert_eq!(flow.draft().name, "Jane Doe");
    }

    #[test]
    fn test_cannot_close_while_submitting() {
        let mut flow = RegistrationFlow::opened();
        fill_valid(&mut flow);
        flow.submit();

        assert!(!flow.close());
        assert!(flow.is_submitting());
    }

    #[test]
    fn test_controlled_success_waits_for_caller_to_close() {
        let mut flow = RegistrationFlow::opened();
        fill_valid(&mut flow);
        flow.submit();

        flow.finish_controlled(Ok(()));
        assert_eq!(flow.phase(), ModalPhase::Open);
        assert_eq!(flow.draft(), &RegistrationDraft::default());

        // The caller's open state turning false closes it
        assert!(flow.close());
        assert!(!flow.is_open());
    }

    #[test]
    fn test_controlled_failure_keeps_values() {
        let mut flow = RegistrationFlow::opened();
        fill_valid(&mut flow);
        flow.submit();

        flow.finish_controlled(Err(SubmitError::Rejected("offline".to_string())));
        assert_eq!(flow.phase(), ModalPhase::Open);
        assert_eq!(flow.draft().name, "Jane Doe");
    }

    #[test]
    fn test_can_close_does_not_change_phase() {
        let mut flow = RegistrationFlow::opened();
        assert!(flow.can_close());
        assert_eq!(flow.phase(), ModalPhase::Open);

        fill_valid(&mut flow);
        flow.submit();
        assert!(!flow.can_close());
    }

    #[test]
    fn test_finish_ignored_outside_submitting() {
        let mut flow = RegistrationFlow::opened();
        fill_valid(&mut flow);
        flow.finish(Ok(()));
        assert_eq!(flow.phase(), ModalPhase::Open);
        assert_eq!(flow.draft().name, "Jane Doe");
    }

    #[test]
    fn test_submit_error_display() {
        let err = SubmitError::Rejected("server down".to_string());
        assert_eq!(err.to_string(), "submission rejected: server down");
    }
}
