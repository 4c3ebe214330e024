//! Transition notifications
//!
//! Implemented by whatever renders the wizard. The wizard itself never
//! touches presentation.

use super::steps::WizardStepPlacement;

/// Receives every transition the [`Wizard`](super::Wizard) performs
pub trait WizardDelegate<S> {
    /// The initial step became current
    fn did_go_to_initial_step(&mut self, step: &S);

    /// Moved forward to `step`
    fn did_go_to_next_step(&mut self, step: &S, placement: WizardStepPlacement);

    /// Moved back to `step`
    fn did_go_to_previous_step(&mut self, step: &S, placement: WizardStepPlacement);

    /// The wizard was canceled before its last step
    fn did_cancel(&mut self);

    /// Went forward past the last step
    fn did_finish(&mut self);
}
