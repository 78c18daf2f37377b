#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for the weekly blotter pipeline.
//!
//! Resolves configuration from flags and environment variables into plain
//! values (the library crates never touch the environment), then runs one
//! sequential pass: locate the report link on the statistics page, download
//! and extract the PDF text, parse the requested districts, export the JSON
//! report, and optionally email the plain-text summary.
//!
//! A missing or unparsable district list and a missing report link are
//! fatal. A failed email delivery is logged and swallowed; the exported
//! report is the run's real output.

use std::path::PathBuf;

use clap::Parser;

/// Scrape the weekly police incident report and summarize it per district.
#[derive(Parser)]
#[command(name = "blotter", about = "Weekly police incident report scraper")]
struct Cli {
    /// Comma-separated patrol district numbers to report on (e.g. "41,42,43,44").
    #[arg(
        long,
        env = "DISTRICTS_OF_INTEREST",
        value_delimiter = ',',
        required = true,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    districts: Vec<u32>,

    /// Statistics page listing the weekly report links.
    #[arg(
        long,
        default_value = "https://www.garlandtx.gov/396/Crime-Statistics-Maps"
    )]
    page_url: String,

    /// Site base URL used to resolve relative report links.
    #[arg(long, default_value = "https://www.garlandtx.gov")]
    base_url: String,

    /// Anchor text identifying the weekly report link.
    #[arg(long, default_value = "Previous Week Selected Incident Report (PDF)")]
    link_label: String,

    /// Title used for the summary header and the email subject.
    #[arg(long, default_value = "Garland TX Police Activity Report")]
    title: String,

    /// Directory the JSON report is written into.
    #[arg(long, default_value = "exported-incidents")]
    export_dir: PathBuf,

    /// Sender address for the emailed summary. Email is skipped when the
    /// sender or recipient is not configured.
    #[arg(long, env = "EMAIL_SENDER")]
    email_sender: Option<String>,

    /// Recipient address for the emailed summary.
    #[arg(long, env = "EMAIL_RECIPIENT")]
    email_recipient: Option<String>,

    /// SMTP relay host for the emailed summary.
    #[arg(long, env = "SMTP_RELAY", default_value = "in-v3.mailjet.com")]
    smtp_relay: String,

    /// SMTP relay username.
    #[arg(long, env = "SMTP_USERNAME", default_value = "")]
    smtp_username: String,

    /// SMTP relay password.
    #[arg(long, env = "SMTP_PASSWORD", default_value = "")]
    smtp_password: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();

    let cli = Cli::parse();

    let page = blotter_scraper::ReportPage {
        url: &cli.page_url,
        base_url: &cli.base_url,
        link_label: &cli.link_label,
    };
    let pdf_url = blotter_scraper::locate_report_pdf(&page).await?;

    log::info!("downloading report from {pdf_url}");
    let text = blotter_pdf::download_and_extract_text(&pdf_url).await?;

    let report = blotter_report::assemble::assemble(&text, &cli.districts);

    let path = blotter_report::export::export_report(&report, &cli.export_dir)?;
    log::info!(
        "week {}: exported {} incidents across {} districts to {}",
        report.week_number,
        report.districts.total_incidents(),
        report.districts.len(),
        path.display(),
    );

    if let (Some(sender), Some(recipient)) = (&cli.email_sender, &cli.email_recipient) {
        let smtp = blotter_notify::SmtpConfig {
            relay: cli.smtp_relay.clone(),
            username: cli.smtp_username.clone(),
            password: cli.smtp_password.clone(),
            sender: sender.clone(),
            recipient: recipient.clone(),
        };
        let subject = format!("{} - Week {}", cli.title, report.week_number);
        let body = blotter_report::render::format_report(&report, &cli.title);

        // Delivery failures never fail the run; the exported file already
        // landed.
        if let Err(e) = blotter_notify::send_report(&smtp, &subject, &body).await {
            log::error!("failed to send report email: {e}");
        }
    } else {
        log::info!("email sender/recipient not configured, skipping delivery");
    }

    Ok(())
}
