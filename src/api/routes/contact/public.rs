//! Public types for the contact form API
use serde::Deserialize;

/// Full contact-form submission. Everything except `company` and
/// `phone` is required; required fields default to empty here so the
/// handler can reject them with a 400 instead of a deserialization
/// error.
#[derive(Deserialize, Debug)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub company: Option<String>,
    pub phone: Option<String>,
    #[serde(default)]
    pub service: String,
    // The sites historically posted this field capitalized
    #[serde(default, alias = "Messages")]
    pub message: String,
    #[serde(default)]
    pub date: String,
}
