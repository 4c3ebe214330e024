//! Host commands
//!
//! Commands represent user requests to move the wizard (imperative).
//! They are executed by the [`WizardController`](crate::host::WizardController).

/// Wizard commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardCommand {
    /// Show the next step, or finish
    GoToNextStep,

    /// Show the previous step
    GoToPreviousStep,

    /// Stop without completing the remaining steps
    Cancel,
}

impl WizardCommand {
    /// Get a human-readable description of the command
    pub fn description(&self) -> &'static str {
        match self {
            WizardCommand::GoToNextStep => "Go to next step",
            WizardCommand::GoToPreviousStep => "Go to previous step",
            WizardCommand::Cancel => "Cancel wizard",
        }
    }

    /// Whether the command is dropped while a transition is in flight
    pub fn is_transition(&self) -> bool {
        !matches!(self, WizardCommand::Cancel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_description() {
        assert_eq!(WizardCommand::GoToNextStep.description(), "Go to next step");
        assert_eq!(WizardCommand::Cancel.description(), "Cancel wizard");
    }

    #[test]
    fn test_cancel_is_not_a_transition() {
        assert!(WizardCommand::GoToNextStep.is_transition());
        assert!(WizardCommand::GoToPreviousStep.is_transition());
        assert!(!WizardCommand::Cancel.is_transition());
    }
}
