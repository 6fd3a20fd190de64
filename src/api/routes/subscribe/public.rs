//! Public types for the lead magnet subscription API
use serde::Deserialize;

/// Lightweight lead-magnet signup: just a name, an email, and the
/// signup date. All required.
#[derive(Deserialize, Debug)]
pub struct SubscribeRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub date: String,
}
