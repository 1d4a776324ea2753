const PRODUCTION_FORM_API_URL: &str = "https://form-api.nordicuniversity.org";

#[cfg(debug_assertions)]
pub fn get_form_api_url() -> &'static str {
    // Point local builds at a mock intake with FORM_API_URL=http://localhost:3001
    option_env!("FORM_API_URL").unwrap_or(PRODUCTION_FORM_API_URL)
}

#[cfg(not(debug_assertions))]
pub fn get_form_api_url() -> &'static str {
    PRODUCTION_FORM_API_URL
}

pub const EVENT_DATE: &str = "10-11-MAY";
pub const EVENT_DETAILS: &str = "20:30, Onlayn, yopiq taqdimot";
pub const TELEGRAM_CHANNEL_URL: &str = "https://t.me/+EaHrV3DBidliMTgy";

/// Screens narrower than this get the plain registration layout.
pub const LARGE_SCREEN_MIN_WIDTH: f64 = 640.0;
