use gloo_net::http::Request;
use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::config;
use crate::forms::lead::LeadSubmission;
use crate::forms::phone;
use crate::forms::registration::RegistrationSubmission;

pub const LEAD_PATH: &str = "/sampleusers";
pub const REGISTRATION_PATH: &str = "/registratedusers";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("So‘rovni tayyorlashda xatolik: {0}")]
    Serialize(String),
    #[error("Tarmoq xatosi: {0}")]
    Transport(String),
    #[error("{message}")]
    Rejected { status: u16, message: String },
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FormApi {
    base_url: String,
}

impl Default for FormApi {
    fn default() -> Self {
        Self::new(config::get_form_api_url())
    }
}

impl FormApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn submit_lead(&self, lead: &LeadSubmission) -> Result<Value, ApiError> {
        info!("Submitting lead for {}", phone::masked(&lead.phone));
        self.post(LEAD_PATH, lead).await
    }

    pub async fn submit_registration(&self, registration: &RegistrationSubmission) -> Result<Value, ApiError> {
        info!(
            "Submitting registration for {} ({}, {})",
            phone::masked(&registration.phone),
            registration.education_type.label(),
            registration.region,
        );
        self.post(REGISTRATION_PATH, registration).await
    }

    async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Value, ApiError> {
        let url = self.endpoint(path);
        let response = Request::post(&url)
            .json(body)
            .map_err(|e| ApiError::Serialize(e.to_string()))?
            .send()
            .await
            .map_err(|e| {
                error!("Network error posting to {}: {}", url, e);
                ApiError::Transport(e.to_string())
            })?;

        let status = response.status();
        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                warn!("Could not read body of POST {} ({}): {}", path, status, e);
                String::new()
            }
        };
        if response.ok() {
            info!("POST {} succeeded with status {}", path, status);
            Ok(decode_success(&text))
        } else {
            error!("POST {} failed with status {}", path, status);
            Err(decode_failure(status, &text))
        }
    }
}

pub fn decode_success(body: &str) -> Value {
    serde_json::from_str(body).unwrap_or(Value::Null)
}

pub fn decode_failure(status: u16, body: &str) -> ApiError {
    let message = match serde_json::from_str::<ErrorResponse>(body) {
        Ok(resp) => resp.error,
        Err(_) => format!("Xatolik yuz berdi ({})", status),
    };
    ApiError::Rejected { status, message }
}
