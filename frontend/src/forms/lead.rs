use std::rc::Rc;

use serde::Serialize;
use yew::functional::Reducible;

use crate::forms::phone;
use crate::forms::submission::{Begin, SubmissionStatus, SubmitStep};
use crate::forms::validation::{Field, ValidationErrors};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LeadSubmission {
    #[serde(rename = "ism")]
    pub name: String,
    #[serde(rename = "telefon")]
    pub phone: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LeadForm {
    pub name: String,
    pub phone: String,
    pub status: SubmissionStatus,
}

pub enum LeadAction {
    SetName(String),
    // raw input value, normalized in reduce
    SetPhone(String),
    Submit(SubmitStep),
}

impl Default for LeadForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            phone: phone::PREFIX.to_string(),
            status: SubmissionStatus::default(),
        }
    }
}

impl LeadForm {
    pub fn prefilled(name: Option<&str>, phone: Option<&str>) -> Self {
        Self {
            name: name.unwrap_or_default().to_string(),
            phone: phone::prefill(phone),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<LeadSubmission, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require_text(Field::Name, &self.name);
        errors.require_phone(&self.phone);
        errors.into_result().map(|()| LeadSubmission {
            name: self.name.trim().to_string(),
            phone: self.phone.clone(),
        })
    }

    pub fn begin_submit(&self) -> Begin<LeadSubmission> {
        self.status.begin(self.validate())
    }

    fn clear_fields(&mut self) {
        self.name.clear();
        self.phone = phone::PREFIX.to_string();
    }
}

impl Reducible for LeadForm {
    type Action = LeadAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            LeadAction::SetName(name) => {
                next.name = name;
                next.status.dismiss_server_error();
            }
            LeadAction::SetPhone(raw) => {
                next.phone = phone::normalize(&raw);
                next.status.dismiss_server_error();
            }
            LeadAction::Submit(event) => {
                if next.status.apply(event) {
                    next.clear_fields();
                }
            }
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::forms::submission::{run_submission, Outcome};
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    fn filled(name: &str, phone: &str) -> Rc<LeadForm> {
        Rc::new(LeadForm::default())
            .reduce(LeadAction::SetName(name.to_string()))
            .reduce(LeadAction::SetPhone(phone.to_string()))
    }

    fn submit(form: Rc<LeadForm>, response: Result<(), ApiError>) -> (Rc<LeadForm>, usize) {
        let sent = Cell::new(0);
        let state = RefCell::new(form.clone());
        block_on(run_submission(
            form.begin_submit(),
            |payload: LeadSubmission| {
                sent.set(sent.get() + 1);
                assert_eq!(payload.phone.len(), phone::FULL_LENGTH);
                async move { response }
            },
            |event| {
                let current = state.borrow().clone();
                *state.borrow_mut() = current.reduce(LeadAction::Submit(event));
            },
        ));
        (state.into_inner(), sent.get())
    }

    #[test]
    fn test_payload_uses_api_field_names() {
        let payload = filled("Aziz", "+998901234567").validate().unwrap();
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json, serde_json::json!({"ism": "Aziz", "telefon": "+998901234567"}));
    }

    #[test]
    fn test_prefill_from_query() {
        let form = LeadForm::prefilled(Some("Aziz"), Some("+998901234567"));
        assert_eq!(form.name, "Aziz");
        assert_eq!(form.phone, "+998901234567");

        let form = LeadForm::prefilled(None, Some("12345"));
        assert_eq!(form.name, "");
        assert_eq!(form.phone, "+998");
    }

    #[test]
    fn test_phone_input_is_normalized() {
        let form = filled("Aziz", "90 123 45 67 89");
        assert_eq!(form.phone, "+998901234567");
    }

    #[test]
    fn test_empty_name_is_reported_without_request() {
        let (form, sent) = submit(filled("  ", "+998901234567"), Ok(()));
        assert_eq!(sent, 0);
        assert_eq!(form.status.errors.len(), 1);
        assert_eq!(form.status.errors.get(Field::Name), Some("Ism majburiy"));
        assert_eq!(form.phone, "+998901234567");
    }

    #[test]
    fn test_bare_prefix_phone_is_reported_without_request() {
        let (form, sent) = submit(filled("Aziz", ""), Ok(()));
        assert_eq!(sent, 0);
        assert_eq!(form.status.errors.fields().collect::<Vec<_>>(), vec![Field::Phone]);
    }

    #[test]
    fn test_successful_submit_clears_fields_and_sets_flag() {
        let (form, sent) = submit(filled("Aziz", "+998901234567"), Ok(()));
        assert_eq!(sent, 1);
        assert!(form.status.is_success());
        assert_eq!(form.name, "");
        assert_eq!(form.phone, phone::PREFIX);
        assert!(form.status.errors.is_empty());
    }

    #[test]
    fn test_server_error_is_shown_and_fields_kept() {
        let error = ApiError::Rejected {
            status: 400,
            message: "Bu raqam allaqachon ro‘yxatdan o‘tgan".to_string(),
        };
        let (form, sent) = submit(filled("Aziz", "+998901234567"), Err(error));
        assert_eq!(sent, 1);
        assert_eq!(form.status.server_error(), Some("Bu raqam allaqachon ro‘yxatdan o‘tgan"));
        assert_eq!(form.name, "Aziz");
        assert_eq!(form.phone, "+998901234567");
    }

    #[test]
    fn test_editing_dismisses_server_error() {
        let mut form = (*filled("Aziz", "+998901234567")).clone();
        form.status.outcome = Outcome::ServerError("xato".into());
        let form = Rc::new(form).reduce(LeadAction::SetName("Aziza".into()));
        assert_eq!(form.status.outcome, Outcome::Idle);
    }

    #[test]
    fn test_second_submit_while_pending_is_ignored() {
        let form = filled("Aziz", "+998901234567").reduce(LeadAction::Submit(SubmitStep::Started));
        assert_eq!(form.begin_submit(), Begin::Busy);
    }
}
