use anyhow::Result;
use async_trait::async_trait;

use crate::domain::order::OrderRecord;

// ============================================================================
// Notifier Boundary - Order Delivery
// ============================================================================
//
// The submission flow only ever sees this trait; the SMTP implementation
// below it is swapped for a fake in tests.
//
// ============================================================================

pub mod email;
pub mod smtp;

pub use smtp::SmtpNotifier;

/// Delivers an accepted order to the workshop.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, order: &OrderRecord) -> Result<()>;
}
