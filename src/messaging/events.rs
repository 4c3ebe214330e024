//! Event types for wizard observers
//!
//! Events represent transitions that have happened (past tense).
//! They are broadcast to all subscribers.

use crate::wizard::WizardStepPlacement;

/// Wizard events
#[derive(Debug, Clone, PartialEq)]
pub enum WizardEvent<S> {
    /// The initial step is now shown
    WentToInitialStep { step: S },

    /// Moved forward
    WentToNextStep {
        step: S,
        placement: WizardStepPlacement,
    },

    /// Moved back
    WentToPreviousStep {
        step: S,
        placement: WizardStepPlacement,
    },

    /// The user canceled the wizard
    Canceled,

    /// The user went past the last step
    Finished,
}

impl<S> WizardEvent<S> {
    /// Check if the wizard accepts nothing after this event
    pub fn is_terminal(&self) -> bool {
        matches!(self, WizardEvent::Canceled | WizardEvent::Finished)
    }

    /// The step this event moved to, if any
    pub fn step(&self) -> Option<&S> {
        match self {
            WizardEvent::WentToInitialStep { step }
            | WizardEvent::WentToNextStep { step, .. }
            | WizardEvent::WentToPreviousStep { step, .. } => Some(step),
            WizardEvent::Canceled | WizardEvent::Finished => None,
        }
    }
}

impl<S: std::fmt::Debug> WizardEvent<S> {
    /// Get a human-readable description of the event
    pub fn description(&self) -> String {
        match self {
            WizardEvent::WentToInitialStep { step } => format!("Started at {:?}", step),
            WizardEvent::WentToNextStep { step, placement } => {
                format!("Next: {:?} ({})", step, placement)
            }
            WizardEvent::WentToPreviousStep { step, placement } => {
                format!("Back: {:?} ({})", step, placement)
            }
            WizardEvent::Canceled => "Wizard canceled".to_string(),
            WizardEvent::Finished => "Wizard finished".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_description() {
        let event = WizardEvent::WentToNextStep {
            step: "account",
            placement: WizardStepPlacement::Middle,
        };
        assert_eq!(event.description(), "Next: \"account\" (middle)");

        let event: WizardEvent<&str> = WizardEvent::Finished;
        assert_eq!(event.description(), "Wizard finished");
    }

    #[test]
    fn test_event_step() {
        let event = WizardEvent::WentToInitialStep { step: 1 };
        assert_eq!(event.step(), Some(&1));
        assert!(!event.is_terminal());

        let event: WizardEvent<u8> = WizardEvent::Canceled;
        assert!(event.step().is_none());
        assert!(event.is_terminal());
    }
}
