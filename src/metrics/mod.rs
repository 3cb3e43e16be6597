use prometheus::{Histogram, HistogramOpts, IntCounter, IntCounterVec, Opts, Registry};

// ============================================================================
// Metrics Module - Prometheus metrics for observability
// ============================================================================
//
// Provides metrics for:
// - Dimension constraint checks (by dimension and outcome)
// - Order submissions (accepted / rejected by reason)
// - Notification delivery latency
//
// All metrics are registered with Prometheus and can be scraped via /metrics
// ============================================================================

/// Central metrics registry for the entire application
pub struct Metrics {
    registry: Registry,

    // Dimension Validation Metrics
    pub dimension_checks: IntCounterVec,

    // Order Metrics
    pub orders_accepted: IntCounter,
    pub orders_rejected: IntCounterVec,

    // Notification Metrics
    pub notify_duration: Histogram,
}

impl Metrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let dimension_checks = IntCounterVec::new(
            Opts::new(
                "dimension_checks_total",
                "Dimension constraint checks by dimension and outcome",
            ),
            &["dimension", "outcome"],
        )?;
        registry.register(Box::new(dimension_checks.clone()))?;

        let orders_accepted = IntCounter::new(
            "orders_accepted_total",
            "Orders validated and delivered to the notifier",
        )?;
        registry.register(Box::new(orders_accepted.clone()))?;

        let orders_rejected = IntCounterVec::new(
            Opts::new("orders_rejected_total", "Rejected order submissions"),
            &["reason"],
        )?;
        registry.register(Box::new(orders_rejected.clone()))?;

        let notify_duration = Histogram::with_opts(
            HistogramOpts::new(
                "notify_duration_seconds",
                "Order notification delivery duration",
            )
            .buckets(vec![0.01, 0.05, 0.1, 0.5, 1.0, 2.5, 5.0, 10.0]),
        )?;
        registry.register(Box::new(notify_duration.clone()))?;

        Ok(Self {
            registry,
            dimension_checks,
            orders_accepted,
            orders_rejected,
            notify_duration,
        })
    }

    /// Get the Prometheus registry for exposing metrics via HTTP
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Helper to record a dimension constraint check
    pub fn record_dimension_check(&self, dimension: &str, accepted: bool) {
        let outcome = if accepted { "accepted" } else { "rejected" };
        self.dimension_checks
            .with_label_values(&[dimension, outcome])
            .inc();
    }

    /// Helper to record a successful order submission
    pub fn record_order_accepted(&self) {
        self.orders_accepted.inc();
    }

    /// Helper to record a rejected order submission
    pub fn record_order_rejected(&self, reason: &str) {
        self.orders_rejected.with_label_values(&[reason]).inc();
    }

    /// Helper to record how long a notification delivery took
    pub fn observe_notify_duration(&self, duration_secs: f64) {
        self.notify_duration.observe(duration_secs);
    }
}
