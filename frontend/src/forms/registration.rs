use std::rc::Rc;

use serde::Serialize;
use yew::functional::Reducible;

use crate::forms::catalog::{self, EducationType};
use crate::forms::phone;
use crate::forms::submission::{Begin, SubmissionStatus, SubmitStep};
use crate::forms::validation::{Field, ValidationErrors};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegistrationSubmission {
    #[serde(rename = "ism")]
    pub full_name: String,
    #[serde(rename = "telefon")]
    pub phone: String,
    #[serde(rename = "viloyat")]
    pub region: String,
    #[serde(rename = "talim_shakli")]
    pub education_type: EducationType,
    #[serde(rename = "talim_yonalishi")]
    pub direction: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RegistrationForm {
    pub full_name: String,
    pub phone: String,
    pub region: String,
    pub education_type: Option<EducationType>,
    pub direction: String,
    pub status: SubmissionStatus,
}

pub enum RegistrationAction {
    SetFullName(String),
    SetPhone(String),
    SetRegion(String),
    SetEducationType(Option<EducationType>),
    SetDirection(String),
    Submit(SubmitStep),
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            phone: phone::PREFIX.to_string(),
            region: String::new(),
            education_type: None,
            direction: String::new(),
            status: SubmissionStatus::default(),
        }
    }
}

impl RegistrationForm {
    pub fn available_directions(&self) -> &'static [&'static str] {
        self.education_type.map(|t| t.directions()).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<RegistrationSubmission, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require_text(Field::Name, &self.full_name);
        errors.require_phone(&self.phone);
        if !catalog::is_known_region(&self.region) {
            errors.reject(Field::Region);
        }
        let Some(education_type) = self.education_type else {
            errors.reject(Field::EducationType);
            errors.reject(Field::Direction);
            return Err(errors);
        };
        if !education_type.offers(&self.direction) {
            errors.reject(Field::Direction);
        }
        errors.into_result()?;

        Ok(RegistrationSubmission {
            full_name: self.full_name.trim().to_string(),
            phone: self.phone.clone(),
            region: self.region.clone(),
            education_type,
            direction: self.direction.clone(),
        })
    }

    pub fn begin_submit(&self) -> Begin<RegistrationSubmission> {
        self.status.begin(self.validate())
    }

    fn clear_fields(&mut self) {
        self.full_name.clear();
        self.phone = phone::PREFIX.to_string();
        self.region.clear();
        self.education_type = None;
        self.direction.clear();
    }
}

impl Reducible for RegistrationForm {
    type Action = RegistrationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            RegistrationAction::SetFullName(name) => next.full_name = name,
            RegistrationAction::SetPhone(raw) => next.phone = phone::normalize(&raw),
            RegistrationAction::SetRegion(region) => next.region = region,
            RegistrationAction::SetEducationType(education_type) => {
                next.education_type = education_type;
                next.direction.clear();
            }
            RegistrationAction::SetDirection(direction) => {
                let offered = next.education_type.is_some_and(|t| t.offers(&direction));
                if offered || direction.is_empty() {
                    next.direction = direction;
                }
            }
            RegistrationAction::Submit(event) => {
                if next.status.apply(event) {
                    next.clear_fields();
                }
            }
        }
        Rc::new(next)
    }
}
