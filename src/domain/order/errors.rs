use chrono::NaiveDate;

use crate::domain::dimensions::DimensionError;

// ============================================================================
// Order Business Rule Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OrderError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Business name cannot be empty")]
    EmptyBusinessName,

    #[error("Delivery address cannot be empty")]
    EmptyDeliveryAddress,

    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),

    #[error("Invalid weight rating: {0}kg")]
    InvalidWeight(f64),

    #[error("Date required must be later than {0}")]
    NotAFutureDate(NaiveDate),

    #[error(transparent)]
    Dimension(#[from] DimensionError),
}
