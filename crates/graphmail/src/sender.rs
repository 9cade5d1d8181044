//! The mail sender component.

use crate::attachment::AttachmentInput;
use crate::config::GraphSettings;
use crate::error::{Error, Result};
use crate::message::SendMailRequest;
use crate::recipients::Recipients;
use graphmail_auth::{ClientCredentials, TokenProvider};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{error, info};
use url::Url;

/// Permission scope requested for the Graph mail API.
pub const GRAPH_SCOPE: &str = "https://graph.microsoft.com/.default";

/// Default Graph API endpoint.
pub const GRAPH_ENDPOINT: &str = "https://graph.microsoft.com/v1.0";

/// Sends transactional email through the Graph `sendMail` API.
///
/// Construction validates credentials and sets up the authenticated
/// client once; the instance is then stateless across sends and safe to
/// share between tasks. Every send is single-shot: success, a validation
/// failure before any network call, or a remote failure. Nothing is
/// retried or suppressed.
#[derive(Debug)]
pub struct MailSender {
    http: Client,
    tokens: TokenProvider,
    endpoint: Url,
}

impl MailSender {
    /// Creates a sender from Graph application settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if any of tenant id, client id,
    /// or client secret is missing or blank.
    pub fn new(settings: &GraphSettings) -> Result<Self> {
        settings.validate()?;

        let credentials = ClientCredentials::new(
            &settings.tenant_id,
            &settings.client_id,
            &settings.client_secret,
        )?;
        let tokens = TokenProvider::new(credentials, GRAPH_SCOPE)?;
        let endpoint =
            Url::parse(GRAPH_ENDPOINT).map_err(|e| Error::Configuration(e.to_string()))?;

        Ok(Self {
            http: Client::new(),
            tokens,
            endpoint,
        })
    }

    /// Points the sender at a different Graph endpoint (national clouds).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the endpoint is not a valid URL.
    pub fn with_endpoint(mut self, endpoint: impl AsRef<str>) -> Result<Self> {
        self.endpoint =
            Url::parse(endpoint.as_ref()).map_err(|e| Error::Configuration(e.to_string()))?;
        Ok(self)
    }

    /// Points the token provider at a different authority host.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the authority is not a valid URL.
    pub fn with_authority(mut self, authority: impl AsRef<str>) -> Result<Self> {
        self.tokens = self.tokens.with_authority(authority)?;
        Ok(self)
    }

    /// Sends a message with one `to` recipient and one `cc` recipient.
    ///
    /// `cc_user` is always placed in Cc; Bcc is submitted as an explicit
    /// empty list. No deduplication is applied between To and Cc.
    /// The message body is HTML and a copy lands in the sender's Sent
    /// Items folder.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RemoteApi`] if Graph rejects the request, or
    /// [`Error::Unexpected`] for any other fault. Errors are logged and
    /// propagated unchanged.
    pub async fn send_simple(
        &self,
        from_address: &str,
        to_address: &str,
        subject: &str,
        body: &str,
        cc_user: &str,
    ) -> Result<()> {
        let recipients = Recipients::raw(
            vec![to_address.to_string()],
            vec![cc_user.to_string()],
            Vec::new(),
        );
        let request = SendMailRequest::new(subject, body, &recipients, Vec::new());

        let result = self.submit(from_address, &request).await;
        log_outcome(&result);
        result
    }

    /// Sends a message to many recipients, optionally with attachments.
    ///
    /// Each recipient list is cleaned independently (blank entries
    /// dropped, whitespace trimmed, case-insensitive duplicates collapsed
    /// to the first occurrence), then cross-list duplicates are removed
    /// with priority to > cc > bcc. Attachments with a blank file name or
    /// empty content are dropped; missing content types are guessed from
    /// the file extension.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] before any network call if no usable
    /// `to` address remains, [`Error::RemoteApi`] if Graph rejects the
    /// request, or [`Error::Unexpected`] for any other fault. Errors are
    /// logged and propagated unchanged.
    pub async fn send_bulk_with_attachments(
        &self,
        from_address: &str,
        to_addresses: &[String],
        subject: &str,
        html_body: &str,
        cc_addresses: &[String],
        bcc_addresses: &[String],
        attachments: Vec<AttachmentInput>,
    ) -> Result<()> {
        let result = async {
            let recipients = Recipients::cleaned(to_addresses, cc_addresses, bcc_addresses)?;
            let request = SendMailRequest::new(subject, html_body, &recipients, attachments);
            self.submit(from_address, &request).await
        }
        .await;

        log_outcome(&result);
        result
    }

    async fn submit(&self, from_address: &str, request: &SendMailRequest) -> Result<()> {
        let token = self.tokens.bearer_token().await?;
        let url = send_mail_url(&self.endpoint, from_address)?;

        let response = self
            .http
            .post(url)
            .bearer_auth(token)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(remote_error(status, &body))
    }
}

fn log_outcome(result: &Result<()>) {
    match result {
        Ok(()) => info!("Email sent successfully"),
        Err(e) => error!(error = %e, "Failed to send email"),
    }
}

/// Builds `{endpoint}/users/{from_address}/sendMail`.
fn send_mail_url(endpoint: &Url, from_address: &str) -> Result<Url> {
    let mut url = endpoint.clone();
    url.path_segments_mut()
        .map_err(|()| Error::Configuration("Graph endpoint cannot be a base URL".to_string()))?
        .pop_if_empty()
        .extend(["users", from_address, "sendMail"]);
    Ok(url)
}

/// Error body returned by Graph: `{"error":{"code":...,"message":...}}`.
#[derive(Debug, Deserialize)]
struct GraphErrorBody {
    error: GraphError,
}

#[derive(Debug, Deserialize)]
struct GraphError {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
}

/// Maps a non-success response to [`Error::RemoteApi`], carrying the
/// provider's message through unchanged. Bodies that are not Graph error
/// JSON fall back to the HTTP status line.
fn remote_error(status: StatusCode, body: &str) -> Error {
    match serde_json::from_str::<GraphErrorBody>(body) {
        Ok(parsed) => Error::RemoteApi {
            code: parsed.error.code,
            message: parsed.error.message,
        },
        Err(_) => Error::RemoteApi {
            code: status.to_string(),
            message: if body.trim().is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            } else {
                body.trim().to_string()
            },
        },
    }
}
