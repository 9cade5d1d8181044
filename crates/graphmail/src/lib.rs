//! # graphmail
//!
//! Transactional email sending through the Microsoft Graph `sendMail` API.
//!
//! A thin adapter: it validates and normalizes recipient lists, dedupes
//! addresses across To/Cc/Bcc, guesses attachment MIME types from file
//! extensions, shapes the `sendMail` payload, and submits it under the
//! sender's identity using client-credential authentication (via
//! [`graphmail-auth`](graphmail_auth)). It deliberately does not retry,
//! rate-limit, queue, template, or track delivery status.
//!
//! ## Quick Start
//!
//! ```ignore
//! use graphmail::{GraphSettings, MailSender, AttachmentInput};
//!
//! let settings = GraphSettings::from_env()?;
//! let sender = MailSender::new(&settings)?;
//!
//! sender
//!     .send_bulk_with_attachments(
//!         "noreply@contoso.com",
//!         &["user@example.com".to_string()],
//!         "Monthly report",
//!         "<p>See attached.</p>",
//!         &[],
//!         &[],
//!         vec![AttachmentInput::new("report.pdf", pdf_bytes)],
//!     )
//!     .await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod attachment;
mod config;
mod error;
mod message;
mod recipients;
mod sender;

pub use attachment::{AttachmentInput, guess_content_type};
pub use config::GraphSettings;
pub use error::{Error, Result};
pub use recipients::Recipients;
pub use sender::{GRAPH_ENDPOINT, GRAPH_SCOPE, MailSender};
