//! Rendering hooks a host must provide
//!
//! All three methods are required, so a host that forgets one fails to build.

use crate::wizard::WizardStepPlacement;

/// Displays wizard steps
///
/// Called by [`WizardController`](super::WizardController) after the wizard
/// has already moved; the view only has to render `step`.
pub trait WizardView<S> {
    /// Display the initial wizard step
    fn navigate_to_initial(&mut self, step: &S);

    /// Display the next wizard step
    fn navigate_to_next(&mut self, step: &S, placement: WizardStepPlacement);

    /// Display the previous wizard step
    fn navigate_to_previous(&mut self, step: &S, placement: WizardStepPlacement);
}
