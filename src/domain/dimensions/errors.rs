use super::value_objects::Dimension;

// ============================================================================
// Dimension Business Rule Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DimensionError {
    #[error("{dimension} must be at least 0.1mm")]
    BelowMinimum { dimension: Dimension, value: f64 },

    #[error("{dimension} cannot exceed {max}mm with current dimensions")]
    ExceedsLimit { dimension: Dimension, max: f64 },
}
