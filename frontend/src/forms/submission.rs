use std::future::Future;

use log::{info, warn};

use crate::api::ApiError;
use crate::forms::validation::ValidationErrors;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Outcome {
    #[default]
    Idle,
    Pending,
    Success,
    ServerError(String),
}

#[derive(Debug)]
pub enum SubmitStep {
    Rejected(ValidationErrors),
    Started,
    Finished(Result<(), ApiError>),
}

#[derive(Debug, PartialEq)]
pub enum Begin<P> {
    // a request for this form is already in flight
    Busy,
    Invalid(ValidationErrors),
    Ready(P),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SubmissionStatus {
    pub errors: ValidationErrors,
    pub outcome: Outcome,
}

impl SubmissionStatus {
    pub fn is_pending(&self) -> bool {
        self.outcome == Outcome::Pending
    }

    pub fn is_success(&self) -> bool {
        self.outcome == Outcome::Success
    }

    pub fn server_error(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::ServerError(message) => Some(message),
            _ => None,
        }
    }

    pub fn begin<P>(&self, validated: Result<P, ValidationErrors>) -> Begin<P> {
        if self.is_pending() {
            return Begin::Busy;
        }
        match validated {
            Ok(payload) => Begin::Ready(payload),
            Err(errors) => Begin::Invalid(errors),
        }
    }

    pub fn dismiss_server_error(&mut self) {
        if self.server_error().is_some() {
            self.outcome = Outcome::Idle;
        }
    }

    // true when the form fields should be reset
    pub fn apply(&mut self, event: SubmitStep) -> bool {
        match event {
            SubmitStep::Rejected(errors) => {
                self.errors = errors;
                self.dismiss_server_error();
                false
            }
            SubmitStep::Started => {
                self.errors = ValidationErrors::new();
                self.outcome = Outcome::Pending;
                false
            }
            SubmitStep::Finished(Ok(())) => {
                self.errors = ValidationErrors::new();
                self.outcome = Outcome::Success;
                true
            }
            SubmitStep::Finished(Err(err)) => {
                self.outcome = Outcome::ServerError(err.to_string());
                false
            }
        }
    }
}

pub async fn run_submission<P, T, S, Fut, D>(begin: Begin<P>, send: S, dispatch: D)
where
    S: FnOnce(P) -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
    D: Fn(SubmitStep),
{
    match begin {
        Begin::Busy => {
            warn!("Submission already in flight, ignoring submit");
        }
        Begin::Invalid(errors) => {
            let fields: Vec<&str> = errors.fields().map(|f| f.name()).collect();
            info!("Form rejected locally, invalid fields: {:?}", fields);
            dispatch(SubmitStep::Rejected(errors));
        }
        Begin::Ready(payload) => {
            dispatch(SubmitStep::Started);
            let result = send(payload).await.map(|_| ());
            if let Err(err) = &result {
                warn!("Submission failed: {}", err);
            }
            dispatch(SubmitStep::Finished(result));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::validation::Field;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    fn rejected() -> ApiError {
        ApiError::Rejected {
            status: 400,
            message: "Bu raqam allaqachon ro‘yxatdan o‘tgan".to_string(),
        }
    }

    #[test]
    fn test_begin_refuses_while_pending() {
        let status = SubmissionStatus {
            outcome: Outcome::Pending,
            ..Default::default()
        };
        assert_eq!(status.begin::<u8>(Ok(1)), Begin::Busy);
    }

    #[test]
    fn test_started_clears_field_errors() {
        let mut errors = ValidationErrors::new();
        errors.reject(Field::Name);
        let mut status = SubmissionStatus {
            errors,
            outcome: Outcome::ServerError("old".into()),
        };
        assert!(!status.apply(SubmitStep::Started));
        assert!(status.errors.is_empty());
        assert!(status.is_pending());
    }

    #[test]
    fn test_rejection_dismisses_server_banner() {
        let mut status = SubmissionStatus {
            outcome: Outcome::ServerError("old".into()),
            ..Default::default()
        };
        let mut errors = ValidationErrors::new();
        errors.reject(Field::Phone);
        status.apply(SubmitStep::Rejected(errors));
        assert_eq!(status.server_error(), None);
        assert!(status.errors.get(Field::Phone).is_some());
    }

    #[test]
    fn test_failure_keeps_message_verbatim() {
        let mut status = SubmissionStatus::default();
        status.apply(SubmitStep::Started);
        assert!(!status.apply(SubmitStep::Finished(Err(rejected()))));
        assert_eq!(status.server_error(), Some("Bu raqam allaqachon ro‘yxatdan o‘tgan"));
    }

    #[test]
    fn test_run_submission_sends_once_when_ready() {
        let sent = Cell::new(0);
        let events = RefCell::new(Vec::new());
        block_on(run_submission(
            Begin::Ready("payload"),
            |p| {
                sent.set(sent.get() + 1);
                assert_eq!(p, "payload");
                async { Ok::<_, ApiError>(serde_json::Value::Null) }
            },
            |e| events.borrow_mut().push(e),
        ));
        assert_eq!(sent.get(), 1);
        let events = events.into_inner();
        assert!(matches!(events[0], SubmitStep::Started));
        assert!(matches!(events[1], SubmitStep::Finished(Ok(()))));
    }

    #[test]
    fn test_run_submission_skips_network_when_invalid_or_busy() {
        let sent = Cell::new(0);
        let events = RefCell::new(Vec::new());
        let mut errors = ValidationErrors::new();
        errors.reject(Field::Name);

        for begin in [Begin::Invalid(errors), Begin::Busy] {
            block_on(run_submission(
                begin,
                |_: ()| {
                    sent.set(sent.get() + 1);
                    async { Ok::<_, ApiError>(()) }
                },
                |e| events.borrow_mut().push(e),
            ));
        }
        assert_eq!(sent.get(), 0);
        let events = events.into_inner();
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], SubmitStep::Rejected(_)));
    }
}
