//! Adapter for the Brevo contacts API, the sink every captured lead
//! ends up in. One request per submission, no internal retries; retry
//! policy belongs to the caller.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use crate::assistant::LeadSink;

const SINK_TIMEOUT: Duration = Duration::from_secs(30);

/// MESSAGE attribute used when no conversation summary is available.
const DEFAULT_LEAD_NOTE: &str = "Lead captured via chatbot.";

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("Brevo API key is not configured")]
    MissingApiKey,
    #[error("contact request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Brevo API returned status {status}: {body}")]
    Status { status: u16, body: String },
}

/// A normalized lead as captured by the chat assistant. `name` and
/// `email` are validated upstream by the orchestrator.
#[derive(Clone, Debug, PartialEq)]
pub struct LeadRecord {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub note: Option<String>,
}

/// Attribute map for a Brevo contact. Names match the attribute
/// schema configured on the lists.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct ContactAttributes {
    #[serde(rename = "NAME")]
    pub name: String,
    #[serde(rename = "COMPANY", skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(rename = "PHONE", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "SERVICE", skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(rename = "MESSAGE", skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(rename = "DATE", skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ContactUpsert {
    pub email: String,
    pub list_id: u32,
    pub attributes: ContactAttributes,
}

#[derive(Clone, Debug)]
pub struct BrevoClient {
    api_hostname: String,
    api_key: Option<String>,
}

impl BrevoClient {
    pub fn new(api_hostname: &str, api_key: Option<String>) -> Self {
        Self {
            api_hostname: api_hostname.to_string(),
            api_key,
        }
    }

    /// Create-or-update a contact keyed by email. Submitting the same
    /// email again updates the existing contact instead of creating a
    /// duplicate (`updateEnabled`).
    pub async fn upsert_contact(&self, upsert: &ContactUpsert) -> Result<(), SinkError> {
        let api_key = self.api_key.as_deref().ok_or(SinkError::MissingApiKey)?;

        let payload = json!({
            "email": upsert.email,
            "listIds": [upsert.list_id],
            "attributes": upsert.attributes,
            "updateEnabled": true,
        });
        let url = format!("{}/v3/contacts", self.api_hostname.trim_end_matches('/'));
        let response = reqwest::Client::new()
            .post(url)
            .header("api-key", api_key)
            .header("Content-Type", "application/json")
            .timeout(SINK_TIMEOUT)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Brevo API error ({}): {}", status, body);
            return Err(SinkError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}

/// Lead sink used by the chat assistant: captured leads land in one
/// contact list with the conversation summary in the MESSAGE
/// attribute.
#[derive(Clone, Debug)]
pub struct ChatLeadSink {
    client: BrevoClient,
    list_id: u32,
}

impl ChatLeadSink {
    pub fn new(client: BrevoClient, list_id: u32) -> Self {
        Self { client, list_id }
    }
}

#[async_trait]
impl LeadSink for ChatLeadSink {
    async fn submit(&self, record: &LeadRecord) -> Result<(), SinkError> {
        let upsert = ContactUpsert {
            email: record.email.clone(),
            list_id: self.list_id,
            attributes: ContactAttributes {
                name: record.name.clone(),
                phone: Some(record.phone.clone().unwrap_or_default()),
                message: Some(
                    record
                        .note
                        .clone()
                        .unwrap_or_else(|| DEFAULT_LEAD_NOTE.to_string()),
                ),
                ..Default::default()
            },
        };
        self.client.upsert_contact(&upsert).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    #[tokio::test]
    async fn it_upserts_a_contact() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v3/contacts")
            .match_header("api-key", "test-key")
            .match_body(Matcher::Json(serde_json::json!({
                "email": "jane@example.com",
                "listIds": [14],
                "attributes": {
                    "NAME": "Jane Doe",
                    "PHONE": "555-1234",
                    "MESSAGE": "Interested in a new website."
                },
                "updateEnabled": true
            })))
            .with_status(201)
            .with_body(r#"{"id":42}"#)
            .create_async()
            .await;

        let client = BrevoClient::new(&server.url(), Some("test-key".to_string()));
        let upsert = ContactUpsert {
            email: "jane@example.com".to_string(),
            list_id: 14,
            attributes: ContactAttributes {
                name: "Jane Doe".to_string(),
                phone: Some("555-1234".to_string()),
                message: Some("Interested in a new website.".to_string()),
                ..Default::default()
            },
        };

        assert!(client.upsert_contact(&upsert).await.is_ok());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn it_treats_updated_contacts_as_success() {
        let mut server = mockito::Server::new_async().await;
        // Brevo answers 204 with no body when the contact already
        // existed and was updated.
        let _mock = server
            .mock("POST", "/v3/contacts")
            .with_status(204)
            .create_async()
            .await;

        let client = BrevoClient::new(&server.url(), Some("test-key".to_string()));
        let upsert = ContactUpsert {
            email: "jane@example.com".to_string(),
            list_id: 14,
            attributes: ContactAttributes {
                name: "Jane Doe".to_string(),
                ..Default::default()
            },
        };

        assert!(client.upsert_contact(&upsert).await.is_ok());
    }

    #[tokio::test]
    async fn it_fails_without_an_api_key() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v3/contacts")
            .expect(0)
            .create_async()
            .await;

        let client = BrevoClient::new(&server.url(), None);
        let upsert = ContactUpsert {
            email: "jane@example.com".to_string(),
            list_id: 14,
            attributes: ContactAttributes::default(),
        };

        let err = client.upsert_contact(&upsert).await.unwrap_err();
        assert!(matches!(err, SinkError::MissingApiKey));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn it_reports_upstream_rejections() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/v3/contacts")
            .with_status(400)
            .with_body(r#"{"code":"invalid_parameter","message":"email is invalid"}"#)
            .create_async()
            .await;

        let client = BrevoClient::new(&server.url(), Some("test-key".to_string()));
        let upsert = ContactUpsert {
            email: "not-an-email".to_string(),
            list_id: 14,
            attributes: ContactAttributes::default(),
        };

        let err = client.upsert_contact(&upsert).await.unwrap_err();
        match err {
            SinkError::Status { status, body } => {
                assert_eq!(status, 400);
                assert!(body.contains("invalid_parameter"));
            }
            other => panic!("Expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn it_defaults_phone_and_note_when_submitting_a_lead() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v3/contacts")
            .match_body(Matcher::Json(serde_json::json!({
                "email": "jane@example.com",
                "listIds": [14],
                "attributes": {
                    "NAME": "Jane Doe",
                    "PHONE": "",
                    "MESSAGE": "Lead captured via chatbot."
                },
                "updateEnabled": true
            })))
            .with_status(201)
            .create_async()
            .await;

        let sink = ChatLeadSink::new(
            BrevoClient::new(&server.url(), Some("test-key".to_string())),
            14,
        );
        let record = LeadRecord {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: None,
            note: None,
        };

        assert!(sink.submit(&record).await.is_ok());
        mock.assert_async().await;
    }
}
