use std::env;

/// Brevo list that chat leads and contact-form submissions land in.
const DEFAULT_CONTACT_LIST_ID: u32 = 14;
/// Brevo list for the lead-magnet ("blueprint") subscribers.
const DEFAULT_BLUEPRINT_LIST_ID: u32 = 16;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub openai_api_hostname: String,
    pub openai_api_key: String,
    pub openai_model: String,
    pub brevo_api_hostname: String,
    // Missing credentials are reported per-request as a configuration
    // error rather than failing startup, so the brochure pages stay up
    // even when the CRM key is absent.
    pub brevo_api_key: Option<String>,
    pub contact_list_id: u32,
    pub blueprint_list_id: u32,
    pub site_dir: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let openai_api_hostname = env::var("CONCIERGE_LLM_HOST")
            .unwrap_or_else(|_| "https://api.openai.com".to_string());
        let openai_api_key =
            env::var("OPENAI_API_KEY").unwrap_or_else(|_| "thiswontworkforopenai".to_string());
        let openai_model =
            env::var("CONCIERGE_LLM_MODEL").unwrap_or_else(|_| "gpt-4o".to_string());
        let brevo_api_hostname = env::var("CONCIERGE_BREVO_HOST")
            .unwrap_or_else(|_| "https://api.brevo.com".to_string());
        let brevo_api_key = env::var("BREVO_API_KEY").ok();
        let contact_list_id = env::var("CONCIERGE_CONTACT_LIST_ID")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_CONTACT_LIST_ID);
        let blueprint_list_id = env::var("CONCIERGE_BLUEPRINT_LIST_ID")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_BLUEPRINT_LIST_ID);
        let site_dir = env::var("CONCIERGE_SITE_DIR").unwrap_or_else(|_| "./site".to_string());

        Self {
            openai_api_hostname,
            openai_api_key,
            openai_model,
            brevo_api_hostname,
            brevo_api_key,
            contact_list_id,
            blueprint_list_id,
            site_dir,
        }
    }
}
