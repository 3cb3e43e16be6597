use serde::{Deserialize, Serialize};

// ============================================================================
// Dimension Value Objects
// ============================================================================

/// One of the three crate dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Width,
    Height,
    Depth,
}

impl Dimension {
    pub const ALL: [Dimension; 3] = [Dimension::Width, Dimension::Height, Dimension::Depth];

    /// The two dimensions coupled to this one.
    pub fn others(self) -> [Dimension; 2] {
        match self {
            Dimension::Width => [Dimension::Height, Dimension::Depth],
            Dimension::Height => [Dimension::Width, Dimension::Depth],
            Dimension::Depth => [Dimension::Width, Dimension::Height],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Dimension::Width => "width",
            Dimension::Height => "height",
            Dimension::Depth => "depth",
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Dimension::Width => "Width",
            Dimension::Height => "Height",
            Dimension::Depth => "Depth",
        };
        write!(f, "{}", label)
    }
}

/// Crate dimensions in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionTriple {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

impl DimensionTriple {
    pub fn new(width: f64, height: f64, depth: f64) -> Self {
        Self { width, height, depth }
    }

    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Width => self.width,
            Dimension::Height => self.height,
            Dimension::Depth => self.depth,
        }
    }

    /// Copy of the triple with one dimension replaced.
    pub fn with_value(&self, dimension: Dimension, value: f64) -> Self {
        let mut next = *self;
        match dimension {
            Dimension::Width => next.width = value,
            Dimension::Height => next.height = value,
            Dimension::Depth => next.depth = value,
        }
        next
    }

    /// Meter-scale triple consumed by the 3D preview.
    pub fn in_meters(&self) -> Self {
        Self {
            width: self.width / 1000.0,
            height: self.height / 1000.0,
            depth: self.depth / 1000.0,
        }
    }
}

impl Default for DimensionTriple {
    /// The configurator starts every session from a one-meter cube.
    fn default() -> Self {
        Self::new(1000.0, 1000.0, 1000.0)
    }
}

/// Upper bounds for each dimension under the coupled size rule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionLimits {
    pub max_width: f64,
    pub max_height: f64,
    pub max_depth: f64,
}

impl DimensionLimits {
    pub fn uniform(max: f64) -> Self {
        Self {
            max_width: max,
            max_height: max,
            max_depth: max,
        }
    }

    pub fn for_dimension(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Width => self.max_width,
            Dimension::Height => self.max_height,
            Dimension::Depth => self.max_depth,
        }
    }

    /// Lower the bound for one dimension, never raising it.
    pub fn cap(&mut self, dimension: Dimension, max: f64) {
        let slot = match dimension {
            Dimension::Width => &mut self.max_width,
            Dimension::Height => &mut self.max_height,
            Dimension::Depth => &mut self.max_depth,
        };
        *slot = slot.min(max);
    }
}

/// Per-field validation messages for the three dimension inputs.
///
/// The field set is fixed, so this is an explicit record rather than a map.
/// An edit to one dimension only ever touches that dimension's slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationErrors {
    pub width: Option<String>,
    pub height: Option<String>,
    pub depth: Option<String>,
}

impl ValidationErrors {
    pub fn get(&self, dimension: Dimension) -> Option<&str> {
        match dimension {
            Dimension::Width => self.width.as_deref(),
            Dimension::Height => self.height.as_deref(),
            Dimension::Depth => self.depth.as_deref(),
        }
    }

    pub fn record(&mut self, dimension: Dimension, message: Option<String>) {
        match dimension {
            Dimension::Width => self.width = message,
            Dimension::Height => self.height = message,
            Dimension::Depth => self.depth = message,
        }
    }

    pub fn is_clear(&self) -> bool {
        self.width.is_none() && self.height.is_none() && self.depth.is_none()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_value_replaces_single_dimension() {
        let triple = DimensionTriple::new(1000.0, 1100.0, 1200.0);
        let next = triple.with_value(Dimension::Height, 900.0);

        assert_eq!(next.width, 1000.0);
        assert_eq!(next.height, 900.0);
        assert_eq!(next.depth, 1200.0);
        // Original is untouched
        assert_eq!(triple.height, 1100.0);
    }

    #[test]
    fn test_in_meters_scales_down_by_one_thousand() {
        let triple = DimensionTriple::new(1000.0, 2400.0, 500.0);
        let meters = triple.in_meters();

        assert_eq!(meters.width, 1.0);
        assert_eq!(meters.height, 2.4);
        assert_eq!(meters.depth, 0.5);
    }

    #[test]
    fn test_dimension_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Dimension::Width).unwrap();
        assert_eq!(json, "\"width\"");

        let parsed: Dimension = serde_json::from_str("\"depth\"").unwrap();
        assert_eq!(parsed, Dimension::Depth);
    }

    #[test]
    fn test_limits_cap_never_raises() {
        let mut limits = DimensionLimits::uniform(1200.0);
        limits.cap(Dimension::Width, 2400.0);

        assert_eq!(limits.max_width, 1200.0);
    }

    #[test]
    fn test_validation_errors_touch_only_their_slot() {
        let mut errors = ValidationErrors::default();
        errors.record(Dimension::Depth, Some("too big".to_string()));

        assert!(errors.width.is_none());
        assert!(errors.height.is_none());
        assert_eq!(errors.get(Dimension::Depth), Some("too big"));
        assert!(!errors.is_clear());

        errors.record(Dimension::Depth, None);
        assert!(errors.is_clear());
    }
}
