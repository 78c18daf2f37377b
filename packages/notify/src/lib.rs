#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Email delivery of the weekly report summary.
//!
//! Sends the rendered plain-text report over SMTP (STARTTLS relay with
//! credentials). Delivery is a best-effort side channel: the caller logs a
//! failure and moves on, since the persisted report is the source of truth
//! and must never be lost to a mail outage.

use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport as _, Message, Tokio1Executor};

/// Errors that can occur while sending the report email.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    /// A sender or recipient address failed to parse.
    #[error("invalid email address: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The message could not be assembled.
    #[error("failed to build email: {0}")]
    Message(#[from] lettre::error::Error),

    /// The SMTP transport rejected the message or could not connect.
    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}

/// SMTP delivery settings, resolved by the caller.
///
/// No field is read from the environment here; configuration assembly is
/// the binary's job.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    /// SMTP relay hostname (STARTTLS on the submission port).
    pub relay: String,
    /// Relay username.
    pub username: String,
    /// Relay password.
    pub password: String,
    /// Sender address.
    pub sender: String,
    /// Recipient address.
    pub recipient: String,
}

/// Sends the report as a plain-text email.
///
/// # Errors
///
/// Returns [`NotifyError`] if an address fails to parse, the message cannot
/// be built, or the SMTP transport fails.
pub async fn send_report(
    config: &SmtpConfig,
    subject: &str,
    body: &str,
) -> Result<(), NotifyError> {
    let email = Message::builder()
        .from(config.sender.parse()?)
        .to(config.recipient.parse()?)
        .subject(subject)
        .header(ContentType::TEXT_PLAIN)
        .body(body.to_owned())?;

    let mailer: AsyncSmtpTransport<Tokio1Executor> =
        AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.relay)?
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

    let response = mailer.send(email).await?;

    log::info!(
        "report emailed to {} (smtp {})",
        config.recipient,
        response.code()
    );

    Ok(())
}
