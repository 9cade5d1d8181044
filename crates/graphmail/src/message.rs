//! Wire types for the Graph `sendMail` request body.

use crate::attachment::AttachmentInput;
use crate::recipients::Recipients;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::Serialize;

/// Body of a `POST /users/{id}/sendMail` request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SendMailRequest {
    message: Message,
    save_to_sent_items: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Message {
    subject: String,
    body: ItemBody,
    // Graph rejects a null recipient collection, so all three lists are
    // always serialized, empty or not.
    to_recipients: Vec<Recipient>,
    cc_recipients: Vec<Recipient>,
    bcc_recipients: Vec<Recipient>,
    // The attachments field, by contrast, is omitted entirely when empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    attachments: Option<Vec<FileAttachment>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ItemBody {
    content_type: &'static str,
    content: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Recipient {
    email_address: EmailAddress,
}

#[derive(Debug, Serialize)]
struct EmailAddress {
    address: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FileAttachment {
    #[serde(rename = "@odata.type")]
    odata_type: &'static str,
    name: String,
    content_bytes: String,
    content_type: String,
}

impl SendMailRequest {
    /// Shapes a request with an HTML body and `saveToSentItems` set.
    ///
    /// Unusable attachments are dropped; if none survive, the attachments
    /// field is left absent.
    pub(crate) fn new(
        subject: impl Into<String>,
        html_body: impl Into<String>,
        recipients: &Recipients,
        attachments: Vec<AttachmentInput>,
    ) -> Self {
        let attachments: Vec<FileAttachment> = attachments
            .into_iter()
            .filter(AttachmentInput::is_usable)
            .map(|a| FileAttachment {
                odata_type: "#microsoft.graph.fileAttachment",
                content_type: a.resolved_content_type(),
                content_bytes: BASE64.encode(&a.content),
                name: a.file_name,
            })
            .collect();

        Self {
            message: Message {
                subject: subject.into(),
                body: ItemBody {
                    content_type: "html",
                    content: html_body.into(),
                },
                to_recipients: to_wire(recipients.to()),
                cc_recipients: to_wire(recipients.cc()),
                bcc_recipients: to_wire(recipients.bcc()),
                attachments: if attachments.is_empty() {
                    None
                } else {
                    Some(attachments)
                },
            },
            save_to_sent_items: true,
        }
    }
}

fn to_wire(addresses: &[String]) -> Vec<Recipient> {
    addresses
        .iter()
        .map(|address| Recipient {
            email_address: EmailAddress {
                address: address.clone(),
            },
        })
        .collect()
}
