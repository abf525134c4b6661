//! Send a test message through Microsoft Graph
//!
//! Run with: cargo run --example send_test -- <mailbox> <recipient>...
//!
//! Reads CLIENT_ID, CLIENT_SECRET and TENANT_ID from the environment or a
//! `.env` file in the working directory.

use anyhow::{bail, Context};
use graphmail_send::{MailSender, Message};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let Some(mailbox) = args.next() else {
        bail!("usage: send_test <mailbox> <recipient>...");
    };
    let recipients: Vec<String> = args.collect();
    if recipients.is_empty() {
        bail!("at least one recipient is required (\"Name:address\" or \"address\")");
    }

    let sender = MailSender::from_env().context("Failed to load configuration")?;

    println!("=== Graph sendMail Test ===\n");
    println!("Mailbox:    {}", mailbox);
    println!("Recipients: {}", recipients.join(", "));

    let message = Message::builder()
        .mailbox(mailbox)
        .to(&recipients)
        .subject("GraphMail test message")
        .body("<p>This message was sent by the <b>send_test</b> example.</p>")
        .attachment("hello.txt", "text/plain", "Hello from GraphMail\n");

    let result = sender.send(message).await;

    if result.success {
        println!("\nSent (HTTP {})", result.status.unwrap_or_default());
        Ok(())
    } else {
        bail!(
            "send failed: {}",
            result.error_message.unwrap_or_else(|| "unknown error".to_string())
        )
    }
}
