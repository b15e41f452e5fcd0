use base64::{display::Base64Display, engine::general_purpose::STANDARD};
use courier_core::{ApiResponse, Attachment, MailTransport, NotificationPayload, TransportError};
use reqwest::{
    Body, Client, Url,
    header::{ACCEPT, CONTENT_TYPE},
};
use secrecy::{ExposeSecret, Secret};
use serde::Serializer;

use crate::config::postmark::POSTMARK_AUTH_HEADER;
use crate::email::streaming_encoder::StreamingEncoder;

#[derive(Clone)]
pub struct PostmarkEmailClient {
    http_client: Client,
    base_url: String,
    authorization_token: Secret<String>,
    encoder: StreamingEncoder,
}

impl PostmarkEmailClient {
    pub fn new(base_url: String, authorization_token: Secret<String>, http_client: Client) -> Self {
        Self {
            http_client,
            base_url,
            authorization_token,
            encoder: StreamingEncoder::default(),
        }
    }

    pub fn with_encoder(mut self, encoder: StreamingEncoder) -> Self {
        self.encoder = encoder;
        self
    }

    /// POST an already encoded body and parse the answer.
    ///
    /// The status code is not checked: Postmark reports failures with a 4xx
    /// status and an `ErrorCode` in the JSON body.
    async fn post(&self, body: Body) -> Result<ApiResponse, TransportError> {
        let base = Url::parse(&self.base_url).map_err(|e| TransportError::Request(e.to_string()))?;
        let url = base
            .join("/email")
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let response = self
            .http_client
            .post(url)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .header(
                POSTMARK_AUTH_HEADER,
                self.authorization_token.expose_secret(),
            )
            .body(body)
            .send()
            .await
            .map_err(|e| TransportError::Transmission(e.to_string()))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| TransportError::Transmission(e.to_string()))?;
        tracing::debug!(%status, len = bytes.len(), "Postmark answered");

        ApiResponse::from_slice(&bytes)
            .map_err(|e| TransportError::MalformedResponse(format!("{} (HTTP {})", e, status)))
    }
}

#[async_trait::async_trait]
impl MailTransport for PostmarkEmailClient {
    #[tracing::instrument(name = "Sending email", skip_all, fields(to = %payload.to))]
    async fn transmit(&self, payload: NotificationPayload) -> Result<ApiResponse, TransportError> {
        let stream = self.encoder.encode(SendEmailRequest::from(payload));
        self.post(Body::wrap_stream(stream)).await
    }
}

#[derive(serde::Serialize)]
#[serde(rename_all = "PascalCase")]
struct SendEmailRequest {
    from: String,
    to: String,
    subject: String,
    text_body: String,
    attachments: Vec<AttachmentRequest>,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "PascalCase")]
struct AttachmentRequest {
    name: String,
    content_type: String,
    #[serde(serialize_with = "as_base64")]
    content: Vec<u8>,
}

impl From<NotificationPayload> for SendEmailRequest {
    fn from(payload: NotificationPayload) -> Self {
        Self {
            from: payload.from,
            to: payload.to,
            subject: payload.subject,
            text_body: payload.text_body,
            attachments: payload
                .attachments
                .into_iter()
                .map(AttachmentRequest::from)
                .collect(),
        }
    }
}

impl From<Attachment> for AttachmentRequest {
    fn from(attachment: Attachment) -> Self {
        Self {
            name: attachment.name,
            content_type: attachment.content_type,
            content: attachment.content,
        }
    }
}

// Written straight into the output, no intermediate base64 string
fn as_base64<S: Serializer>(content: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&Base64Display::new(content, &STANDARD))
}
