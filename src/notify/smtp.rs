use anyhow::Result;
use async_trait::async_trait;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::SmtpConfig;
use crate::domain::order::OrderRecord;

use super::email;
use super::Notifier;

// ============================================================================
// SMTP Notifier - Order Delivery over Mail Transport
// ============================================================================

pub struct SmtpNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    to: Mailbox,
}

impl SmtpNotifier {
    /// Build the transport from the environment-driven SMTP configuration.
    /// The connection is upgraded with STARTTLS on the configured port.
    pub fn new(config: &SmtpConfig) -> Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?
            .port(config.port)
            .credentials(Credentials::new(config.user.clone(), config.pass.clone()))
            .build();

        Ok(Self {
            transport,
            from: config.from.parse()?,
            to: config.to.parse()?,
        })
    }
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn notify(&self, order: &OrderRecord) -> Result<()> {
        let message = Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(email::subject(order))
            .multipart(MultiPart::alternative_plain_html(
                email::render_text(order),
                email::render_html(order),
            ))?;

        self.transport.send(message).await?;

        tracing::info!(
            business = %order.business_name,
            to = %self.to,
            "Order notification delivered"
        );
        Ok(())
    }
}
