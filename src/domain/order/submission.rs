use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use uuid::Uuid;

use crate::metrics::Metrics;
use crate::notify::Notifier;

use super::value_objects::{OrderRecord, SubmissionOutcome};

// ============================================================================
// Order Submission Flow
// ============================================================================
//
// Orchestrates: OrderRecord → validation → Notifier → SubmissionOutcome
//
// One delivery attempt per submit. A failed delivery is reported once and
// the user resubmits manually; there is no retry, queueing, or dedup.
//
// ============================================================================

pub struct SubmissionHandler {
    notifier: Arc<dyn Notifier>,
    metrics: Arc<Metrics>,
}

impl SubmissionHandler {
    pub fn new(notifier: Arc<dyn Notifier>, metrics: Arc<Metrics>) -> Self {
        Self { notifier, metrics }
    }

    /// Validate the order and hand it to the notifier, normalizing every
    /// outcome into the two-valued result shown to the user.
    ///
    /// Notifier failures are logged and converted; they never propagate.
    pub async fn submit(&self, order: OrderRecord) -> SubmissionOutcome {
        let submission_id = Uuid::new_v4();

        if let Err(error) = order.validate(Utc::now().date_naive()) {
            tracing::warn!(
                submission_id = %submission_id,
                business = %order.business_name,
                error = %error,
                "Order submission rejected"
            );
            self.metrics.record_order_rejected("validation");
            return SubmissionOutcome::failed(error.to_string());
        }

        let started = Instant::now();
        let result = self.notifier.notify(&order).await;
        self.metrics
            .observe_notify_duration(started.elapsed().as_secs_f64());

        match result {
            Ok(()) => {
                self.metrics.record_order_accepted();
                tracing::info!(
                    submission_id = %submission_id,
                    business = %order.business_name,
                    quantity = order.quantity,
                    "✅ Order submitted and notification delivered"
                );
                SubmissionOutcome::delivered("Email sent successfully")
            }
            Err(error) => {
                self.metrics.record_order_rejected("delivery");
                tracing::error!(
                    submission_id = %submission_id,
                    business = %order.business_name,
                    error = %error,
                    "Failed to deliver order notification"
                );
                SubmissionOutcome::failed("Failed to send email")
            }
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
