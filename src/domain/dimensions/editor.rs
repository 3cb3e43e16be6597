use super::engine::{self, Validation};
use super::value_objects::{Dimension, DimensionTriple, ValidationErrors};

// ============================================================================
// Dimension Editor - Commit/Retain Step Around the Engine
// ============================================================================

/// The form-side state for the three dimension inputs.
///
/// Every mutation goes through the constraint engine: an accepted edit
/// commits the value and clears that field's error slot, a rejected edit
/// leaves the triple untouched and records the message in that slot only.
#[derive(Debug, Clone, Default)]
pub struct DimensionEditor {
    dimensions: DimensionTriple,
    errors: ValidationErrors,
}

impl DimensionEditor {
    pub fn new(dimensions: DimensionTriple) -> Self {
        Self {
            dimensions,
            errors: ValidationErrors::default(),
        }
    }

    /// Propose a new value for one dimension, committing it when the
    /// engine accepts. Returns the engine's verdict either way.
    pub fn propose(&mut self, dimension: Dimension, value: f64) -> Validation {
        let validation = engine::validate(&self.dimensions, dimension, value);
        match &validation.error {
            None => {
                self.dimensions = self.dimensions.with_value(dimension, value);
                self.errors.record(dimension, None);
            }
            Some(error) => {
                self.errors.record(dimension, Some(error.to_string()));
            }
        }
        validation
    }

    pub fn dimensions(&self) -> DimensionTriple {
        self.dimensions
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepted_edit_commits_the_value() {
        let mut editor = DimensionEditor::default();

        assert!(editor.propose(Dimension::Width, 1300.0).accepted);
        assert_eq!(editor.dimensions().width, 1300.0);
        assert!(editor.errors().is_clear());
    }

    #[test]
    fn test_rejected_edit_retains_the_prior_value() {
        let mut editor = DimensionEditor::default();

        assert!(!editor.propose(Dimension::Width, 2500.0).accepted);
        assert_eq!(editor.dimensions().width, 1000.0);
        assert_eq!(
            editor.errors().get(Dimension::Width),
            Some("Width cannot exceed 2400mm with current dimensions")
        );
    }

    #[test]
    fn test_rejection_sets_only_its_own_error_slot() {
        let mut editor = DimensionEditor::default();
        editor.propose(Dimension::Height, 2500.0);

        assert!(editor.errors().get(Dimension::Width).is_none());
        assert!(editor.errors().get(Dimension::Height).is_some());
        assert!(editor.errors().get(Dimension::Depth).is_none());
    }

    #[test]
    fn test_subsequent_accepted_edit_clears_the_error() {
        let mut editor = DimensionEditor::default();

        editor.propose(Dimension::Depth, 2500.0);
        assert!(editor.errors().get(Dimension::Depth).is_some());

        editor.propose(Dimension::Depth, 800.0);
        assert!(editor.errors().is_clear());
        assert_eq!(editor.dimensions().depth, 800.0);
    }

    #[test]
    fn test_coupled_rule_across_successive_edits() {
        let mut editor = DimensionEditor::default();

        // Width goes large, then height may still go large, but the depth
        // stays capped at the threshold.
        assert!(editor.propose(Dimension::Width, 1300.0).accepted);
        assert!(editor.propose(Dimension::Height, 1300.0).accepted);
        assert!(editor.propose(Dimension::Depth, 1100.0).accepted);
        assert!(editor.errors().is_clear());
    }
}
