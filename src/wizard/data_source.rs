//! Step sequencing contract
//!
//! The wizard never decides ordering itself; it asks its data source.

use super::steps::WizardStepPlacement;

/// Supplies the ordered steps of a wizard
///
/// `Data` is whatever the user has entered so far. It is owned by the
/// [`Wizard`](super::Wizard) and handed to [`step_after`](Self::step_after) so
/// the forward path can branch on user input.
pub trait WizardDataSource {
    /// One screen's content or configuration
    type Step: Clone + std::fmt::Debug;

    /// Accumulated user input
    type Data: Default;

    /// The step shown when the wizard starts, if any
    fn initial_step(&self) -> Option<Self::Step>;

    /// The step that follows `current`; `None` means the wizard is done
    fn step_after(
        &self,
        current: &Self::Step,
        data: &Self::Data,
    ) -> Option<(Self::Step, WizardStepPlacement)>;

    /// The step that precedes `current`; `None` at the start of the sequence
    fn step_before(&self, current: &Self::Step) -> Option<(Self::Step, WizardStepPlacement)>;
}
