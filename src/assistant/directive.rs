use serde::Deserialize;

/// The payload the assistant emits as its entire reply to finish the
/// lead capture flow. Parsing is strict: the whole content must be
/// exactly this shape, otherwise the reply is ordinary display text.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LeadCaptureDirective {
    pub action: DirectiveAction,
    pub data: LeadFields,
}

/// Single-variant tag so any other action value fails the parse
/// instead of matching loosely.
#[derive(Deserialize, Clone, Copy, Debug, PartialEq)]
pub enum DirectiveAction {
    #[serde(rename = "capture_lead")]
    CaptureLead,
}

/// Contact fields the model collected. Individual fields default to
/// empty so that shape matching and field validation stay separate
/// concerns; the orchestrator rejects empty name/email before
/// dispatch.
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LeadFields {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

impl LeadCaptureDirective {
    pub fn parse(content: &str) -> Option<Self> {
        serde_json::from_str(content).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_parses_a_complete_directive() {
        let content = r#"{"action":"capture_lead","data":{"name":"Jane Doe","email":"jane@example.com","phone":"555-1234"}}"#;
        let directive = LeadCaptureDirective::parse(content).unwrap();
        assert_eq!(directive.action, DirectiveAction::CaptureLead);
        assert_eq!(directive.data.name, "Jane Doe");
        assert_eq!(directive.data.email, "jane@example.com");
        assert_eq!(directive.data.phone, "555-1234");
    }

    #[test]
    fn it_tolerates_surrounding_whitespace() {
        let content = "\n  {\"action\": \"capture_lead\", \"data\": {\"name\": \"Jane\", \"email\": \"jane@example.com\", \"phone\": \"\"}}  \n";
        assert!(LeadCaptureDirective::parse(content).is_some());
    }

    #[test]
    fn it_defaults_missing_contact_fields_to_empty() {
        let content = r#"{"action":"capture_lead","data":{"name":"Jane Doe"}}"#;
        let directive = LeadCaptureDirective::parse(content).unwrap();
        assert_eq!(directive.data.email, "");
        assert_eq!(directive.data.phone, "");
    }

    #[test]
    fn it_rejects_prose() {
        assert!(LeadCaptureDirective::parse("<p>Happy to help! Anything else?</p>").is_none());
    }

    #[test]
    fn it_rejects_json_embedded_in_prose() {
        let content = r#"Here you go: {"action":"capture_lead","data":{"name":"Jane","email":"jane@example.com","phone":""}}"#;
        assert!(LeadCaptureDirective::parse(content).is_none());
    }

    #[test]
    fn it_rejects_other_actions() {
        let content = r#"{"action":"schedule_call","data":{"name":"Jane","email":"jane@example.com","phone":""}}"#;
        assert!(LeadCaptureDirective::parse(content).is_none());
    }

    #[test]
    fn it_rejects_extra_fields() {
        let content = r#"{"action":"capture_lead","data":{"name":"Jane","email":"jane@example.com","phone":""},"note":"hi"}"#;
        assert!(LeadCaptureDirective::parse(content).is_none());
    }

    #[test]
    fn it_rejects_a_missing_data_object() {
        assert!(LeadCaptureDirective::parse(r#"{"action":"capture_lead"}"#).is_none());
    }
}
