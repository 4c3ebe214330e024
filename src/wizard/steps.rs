//! Wizard step placement and the ready-made sequence data source
//!
//! Steps themselves are opaque to the wizard; only their placement within the
//! sequence is modelled here.

use serde::{Deserialize, Serialize};

use super::data_source::WizardDataSource;

/// Where a step sits in the sequence
///
/// Hosts use this to pick a transition direction or animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStepPlacement {
    /// The step that opens the wizard
    First,

    /// Any step between the first and the last
    Middle,

    /// The final step; going forward from here finishes the wizard
    Last,
}

impl WizardStepPlacement {
    /// Placement of the step at `index` in a sequence of `len` steps
    ///
    /// The opening step is always `First`, even when it is also the only step.
    /// Going forward from it still finishes the wizard.
    pub fn for_index(index: usize, len: usize) -> Self {
        if index == 0 {
            WizardStepPlacement::First
        } else if index + 1 >= len {
            WizardStepPlacement::Last
        } else {
            WizardStepPlacement::Middle
        }
    }

    /// Check if this is the first step
    pub fn is_first(&self) -> bool {
        matches!(self, WizardStepPlacement::First)
    }

    /// Check if this is the last step
    pub fn is_last(&self) -> bool {
        matches!(self, WizardStepPlacement::Last)
    }

    pub fn label(&self) -> &'static str {
        match self {
            WizardStepPlacement::First => "first",
            WizardStepPlacement::Middle => "middle",
            WizardStepPlacement::Last => "last",
        }
    }
}

impl std::fmt::Display for WizardStepPlacement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Data source over a fixed, ordered list of steps
///
/// Takes no user data: the step after index `i` is always `i + 1`. Steps are
/// located by equality, so each must be distinct.
#[derive(Debug, Clone)]
pub struct SequenceDataSource<S> {
    steps: Vec<S>,
}

impl<S> SequenceDataSource<S>
where
    S: Clone + PartialEq + std::fmt::Debug,
{
    /// # Panics
    ///
    /// Panics if two steps compare equal.
    pub fn new(steps: Vec<S>) -> Self {
        let repeated = steps
            .iter()
            .enumerate()
            .find(|&(i, step)| steps[i + 1..].contains(step));
        assert!(
            repeated.is_none(),
            "Wizard steps must be distinct, found {:?} more than once",
            repeated.map(|(_, step)| step)
        );
        Self { steps }
    }

    /// Get all steps in order
    pub fn steps(&self) -> &[S] {
        &self.steps
    }

    /// Get total number of steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Position of `step` in the sequence
    pub fn index_of(&self, step: &S) -> Option<usize> {
        self.steps.iter().position(|s| s == step)
    }

    fn entry(&self, index: usize) -> Option<(S, WizardStepPlacement)> {
        self.steps
            .get(index)
            .map(|step| (step.clone(), WizardStepPlacement::for_index(index, self.len())))
    }
}

impl<S> WizardDataSource for SequenceDataSource<S>
where
    S: Clone + PartialEq + std::fmt::Debug,
{
    type Step = S;
    type Data = ();

    fn initial_step(&self) -> Option<S> {
        self.steps.first().cloned()
    }

    fn step_after(&self, current: &S, _data: &()) -> Option<(S, WizardStepPlacement)> {
        let index = self.index_of(current)?;
        self.entry(index + 1)
    }

    fn step_before(&self, current: &S) -> Option<(S, WizardStepPlacement)> {
        let index = self.index_of(current)?;
        let previous = index.checked_sub(1)?;
        self.entry(previous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_for_index() {
        assert_eq!(WizardStepPlacement::for_index(0, 3), WizardStepPlacement::First);
        assert_eq!(WizardStepPlacement::for_index(1, 3), WizardStepPlacement::Middle);
        assert_eq!(WizardStepPlacement::for_index(2, 3), WizardStepPlacement::Last);

        // Two steps: no middle
        assert_eq!(WizardStepPlacement::for_index(1, 2), WizardStepPlacement::Last);

        // A lone step opens the wizard
        assert_eq!(WizardStepPlacement::for_index(0, 1), WizardStepPlacement::First);
    }

    #[test]
    fn test_placement_predicates() {
        assert!(WizardStepPlacement::First.is_first());
        assert!(!WizardStepPlacement::First.is_last());
        assert!(WizardStepPlacement::Last.is_last());
        assert!(!WizardStepPlacement::Middle.is_first());
        assert_eq!(WizardStepPlacement::Middle.to_string(), "middle");
    }

    #[test]
    fn test_sequence_navigation() {
        let source = SequenceDataSource::new(vec!["a", "b", "c"]);
        assert_eq!(source.initial_step(), Some("a"));

        assert_eq!(
            source.step_after(&"a", &()),
            Some(("b", WizardStepPlacement::Middle))
        );
        assert_eq!(
            source.step_after(&"b", &()),
            Some(("c", WizardStepPlacement::Last))
        );
        assert!(source.step_after(&"c", &()).is_none());
    }

    #[test]
    fn test_sequence_previous_navigation() {
        let source = SequenceDataSource::new(vec!["a", "b", "c"]);

        assert_eq!(
            source.step_before(&"c"),
            Some(("b", WizardStepPlacement::Middle))
        );
        assert_eq!(
            source.step_before(&"b"),
            Some(("a", WizardStepPlacement::First))
        );
        assert!(source.step_before(&"a").is_none());
    }

    #[test]
    fn test_empty_sequence() {
        let source: SequenceDataSource<&str> = SequenceDataSource::new(Vec::new());
        assert!(source.is_empty());
        assert!(source.initial_step().is_none());
    }

    #[test]
    #[should_panic(expected = "must be distinct")]
    fn test_repeated_steps_rejected() {
        SequenceDataSource::new(vec!["same", "same", "end"]);
    }

    #[test]
    fn test_single_step_sequence() {
        let source = SequenceDataSource::new(vec!["only"]);
        assert_eq!(source.initial_step(), Some("only"));
        assert!(source.step_after(&"only", &()).is_none());
        assert!(source.step_before(&"only").is_none());
    }

    #[test]
    fn test_unknown_step() {
        let source = SequenceDataSource::new(vec![1, 2]);
        assert!(source.step_after(&7, &()).is_none());
        assert!(source.step_before(&7).is_none());
    }

    #[test]
    fn test_placement_serialization() {
        let json = serde_json::to_string(&WizardStepPlacement::Last).unwrap();
        assert_eq!(json, "\"last\"");

        let placement: WizardStepPlacement = serde_json::from_str("\"first\"").unwrap();
        assert_eq!(placement, WizardStepPlacement::First);
    }
}
