use super::errors::DimensionError;
use super::value_objects::{Dimension, DimensionLimits, DimensionTriple};

// ============================================================================
// Dimension Constraint Engine
// ============================================================================
//
// Enforces the coupled handling limit on crate dimensions: any single
// dimension may run up to 2400mm, but once one dimension reaches the large
// regime (>= 1200mm) the other two are capped at 1200mm.
//
// Everything here is a pure function of the caller-supplied triple; the
// engine keeps no state between calls.
//
// ============================================================================

/// Smallest accepted dimension value, in millimeters.
pub const MIN_DIMENSION_MM: f64 = 0.1;

/// Absolute ceiling for any single dimension, in millimeters.
pub const MAX_DIMENSION_MM: f64 = 2400.0;

/// A dimension at or above this value is in the large regime (inclusive).
pub const LARGE_THRESHOLD_MM: f64 = 1200.0;

fn is_large(value: f64) -> bool {
    value >= LARGE_THRESHOLD_MM
}

/// Result of checking a proposed edit against the constraint rules.
///
/// The caller commits the new value only when `accepted` is true; on
/// rejection the prior value is retained and `error` carries the per-field
/// message.
#[derive(Debug, Clone, PartialEq)]
pub struct Validation {
    pub accepted: bool,
    pub limits: DimensionLimits,
    pub error: Option<DimensionError>,
}

/// Compute the legal upper bound of each dimension for the given triple.
///
/// `changing` names the dimension currently being edited: when its own
/// value is large it drags the other two down to the threshold, while its
/// own ceiling stays at the absolute maximum.
pub fn compute_limits(current: &DimensionTriple, changing: Dimension) -> DimensionLimits {
    let mut limits = DimensionLimits::uniform(MAX_DIMENSION_MM);

    if is_large(current.get(changing)) {
        for other in changing.others() {
            limits.cap(other, LARGE_THRESHOLD_MM);
        }
    }

    // Independently of which field is being edited: once any dimension is
    // large, only the large dimensions keep the absolute ceiling.
    if Dimension::ALL.iter().any(|d| is_large(current.get(*d))) {
        for dimension in Dimension::ALL {
            let ceiling = if is_large(current.get(dimension)) {
                MAX_DIMENSION_MM
            } else {
                LARGE_THRESHOLD_MM
            };
            limits.cap(dimension, ceiling);
        }
    }

    limits
}

/// Validate a proposed value for one dimension.
///
/// Limits are recomputed with the proposed value substituted into the
/// triple, so the check reflects the post-edit state. The field-level
/// minimum is checked first; the upper side falls out of the computed
/// limits, since no limit ever exceeds the absolute ceiling.
pub fn validate(current: &DimensionTriple, dimension: Dimension, proposed: f64) -> Validation {
    let candidate = current.with_value(dimension, proposed);
    let limits = compute_limits(&candidate, dimension);

    // NaN is rejected along with sub-minimum input.
    if proposed.is_nan() || proposed < MIN_DIMENSION_MM {
        return Validation {
            accepted: false,
            limits,
            error: Some(DimensionError::BelowMinimum {
                dimension,
                value: proposed,
            }),
        };
    }

    let max = limits.for_dimension(dimension);
    if proposed > max {
        return Validation {
            accepted: false,
            limits,
            error: Some(DimensionError::ExceedsLimit { dimension, max }),
        };
    }

    Validation {
        accepted: true,
        limits,
        error: None,
    }
}

/// Check that a full triple satisfies the constraint rules for every
/// dimension.
///
/// Used at order submission, where all three values arrive at once rather
/// than as single edits.
pub fn check_triple(triple: &DimensionTriple) -> Result<(), DimensionError> {
    for dimension in Dimension::ALL {
        let validation = validate(triple, dimension, triple.get(dimension));
        if let Some(error) = validation.error {
            return Err(error);
        }
    }
    Ok(())
}

// ============================================================================
// Unit Tests
// ============================================================================
