use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::dimensions::{self, DimensionTriple};

use super::errors::OrderError;

// ============================================================================
// Order Value Objects
// ============================================================================

/// A crate order as submitted from the configurator form.
///
/// Field names follow the form's wire format (camelCase JSON). The record
/// is immutable once built and is consumed exactly once by the notifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    pub name: String,
    pub business_name: String,
    pub delivery_address: String,
    #[serde(flatten)]
    pub dimensions: DimensionTriple,
    pub quantity: u32,
    pub weight: f64,
    pub date_required: NaiveDate,
}

impl OrderRecord {
    /// Combined weight of the whole order, in kilograms.
    pub fn total_weight(&self) -> f64 {
        self.weight * self.quantity as f64
    }

    /// Validate every business rule against the given submission date.
    ///
    /// `today` is passed in explicitly; the date rule is *strictly after*,
    /// so an order required today is rejected.
    pub fn validate(&self, today: NaiveDate) -> Result<(), OrderError> {
        if self.name.trim().is_empty() {
            return Err(OrderError::EmptyName);
        }
        if self.business_name.trim().is_empty() {
            return Err(OrderError::EmptyBusinessName);
        }
        if self.delivery_address.trim().is_empty() {
            return Err(OrderError::EmptyDeliveryAddress);
        }
        if self.quantity < 1 {
            return Err(OrderError::InvalidQuantity(self.quantity));
        }
        if !self.weight.is_finite() || self.weight <= 0.0 {
            return Err(OrderError::InvalidWeight(self.weight));
        }
        if self.date_required <= today {
            return Err(OrderError::NotAFutureDate(self.date_required));
        }
        dimensions::check_triple(&self.dimensions)?;
        Ok(())
    }
}

/// The two-valued result every submission reduces to for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionOutcome {
    pub success: bool,
    pub message: String,
}

impl SubmissionOutcome {
    pub fn delivered(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dimensions::Dimension;

    fn create_test_order() -> OrderRecord {
        OrderRecord {
            name: "Jo Park".to_string(),
            business_name: "Park Distillery".to_string(),
            delivery_address: "14 Harbour Road, Fremantle".to_string(),
            dimensions: DimensionTriple::new(1000.0, 1000.0, 1000.0),
            quantity: 3,
            weight: 10.0,
            date_required: NaiveDate::from_ymd_opt(2025, 6, 20).unwrap(),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 10).unwrap()
    }

    #[test]
    fn test_valid_order_passes() {
        assert!(create_test_order().validate(today()).is_ok());
    }

    #[test]
    fn test_total_weight_multiplies_by_quantity() {
        let order = create_test_order();

        assert_eq!(order.total_weight(), 30.0);
        assert_eq!(format!("{:.2}", order.total_weight()), "30.00");
    }

    #[test]
    fn test_blank_customer_fields_are_rejected() {
        let mut order = create_test_order();
        order.name = "   ".to_string();
        assert_eq!(order.validate(today()), Err(OrderError::EmptyName));

        let mut order = create_test_order();
        order.business_name = String::new();
        assert_eq!(order.validate(today()), Err(OrderError::EmptyBusinessName));

        let mut order = create_test_order();
        order.delivery_address = String::new();
        assert_eq!(
            order.validate(today()),
            Err(OrderError::EmptyDeliveryAddress)
        );
    }

    #[test]
    fn test_zero_quantity_is_rejected() {
        let mut order = create_test_order();
        order.quantity = 0;

        assert_eq!(order.validate(today()), Err(OrderError::InvalidQuantity(0)));
    }

    #[test]
    fn test_non_positive_weight_is_rejected() {
        let mut order = create_test_order();
        order.weight = 0.0;

        assert_eq!(order.validate(today()), Err(OrderError::InvalidWeight(0.0)));
    }

    #[test]
    fn test_date_required_today_is_rejected() {
        let mut order = create_test_order();
        order.date_required = today();

        assert_eq!(
            order.validate(today()),
            Err(OrderError::NotAFutureDate(today()))
        );
    }

    #[test]
    fn test_date_required_tomorrow_is_accepted() {
        let mut order = create_test_order();
        order.date_required = today().succ_opt().unwrap();

        assert!(order.validate(today()).is_ok());
    }

    #[test]
    fn test_dimension_rule_is_enforced_at_submission() {
        let mut order = create_test_order();
        order.dimensions = DimensionTriple::new(2500.0, 1000.0, 1000.0);

        assert!(matches!(
            order.validate(today()),
            Err(OrderError::Dimension(_))
        ));
    }

    #[test]
    fn test_order_record_wire_format() {
        let json = serde_json::json!({
            "name": "Jo Park",
            "businessName": "Park Distillery",
            "deliveryAddress": "14 Harbour Road, Fremantle",
            "width": 1000.0,
            "height": 1200.0,
            "depth": 800.0,
            "quantity": 2,
            "weight": 12.5,
            "dateRequired": "2025-06-20",
        });

        let order: OrderRecord = serde_json::from_value(json).unwrap();

        assert_eq!(order.business_name, "Park Distillery");
        assert_eq!(order.dimensions.get(Dimension::Height), 1200.0);
        assert_eq!(
            order.date_required,
            NaiveDate::from_ymd_opt(2025, 6, 20).unwrap()
        );
    }
}
