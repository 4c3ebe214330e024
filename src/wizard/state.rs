//! Wizard lifecycle state
//!
//! Tracks where the wizard is in its lifecycle and why a request was refused.

/// Lifecycle of a wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WizardStatus {
    /// No step requested yet
    Uninitialized,

    /// A step is current
    Active,

    /// Went forward past the last step (terminal)
    Finished,

    /// Canceled by the user (terminal)
    Canceled,
}

impl WizardStatus {
    /// Check if no step has been shown yet
    pub fn is_uninitialized(&self) -> bool {
        matches!(self, WizardStatus::Uninitialized)
    }

    /// Check if a step is current
    pub fn is_active(&self) -> bool {
        matches!(self, WizardStatus::Active)
    }

    /// Check if no further transitions are accepted
    pub fn is_terminal(&self) -> bool {
        matches!(self, WizardStatus::Finished | WizardStatus::Canceled)
    }

    /// Get a human-readable description of the state
    pub fn description(&self) -> &'static str {
        match self {
            WizardStatus::Uninitialized => "Not started",
            WizardStatus::Active => "In progress",
            WizardStatus::Finished => "Finished",
            WizardStatus::Canceled => "Canceled",
        }
    }
}

impl Default for WizardStatus {
    fn default() -> Self {
        WizardStatus::Uninitialized
    }
}

/// Why a transition request was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockReason {
    /// Initial step requested twice
    AlreadyStarted,

    /// Data source has no initial step
    NoInitialStep,

    /// Next/previous requested before the initial step
    NotStarted,

    /// Previous requested on the first step
    AtFirstStep,

    /// Wizard already finished
    Finished,

    /// Wizard already canceled
    Canceled,

    /// A transition is still in flight on the host
    Navigating,
}

impl BlockReason {
    /// Reason for refusing a request while in `status`, if terminal
    pub(crate) fn for_terminal(status: WizardStatus) -> Option<Self> {
        match status {
            WizardStatus::Finished => Some(BlockReason::Finished),
            WizardStatus::Canceled => Some(BlockReason::Canceled),
            _ => None,
        }
    }
}

impl std::fmt::Display for BlockReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlockReason::AlreadyStarted => write!(f, "Wizard has already started"),
            BlockReason::NoInitialStep => write!(f, "Data source has no initial step"),
            BlockReason::NotStarted => write!(f, "Wizard has not started"),
            BlockReason::AtFirstStep => write!(f, "Already at first step"),
            BlockReason::Finished => write!(f, "Wizard is finished"),
            BlockReason::Canceled => write!(f, "Wizard is canceled"),
            BlockReason::Navigating => {
                write!(f, "Cannot navigate while a transition is in progress")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_predicates() {
        let status = WizardStatus::default();
        assert!(status.is_uninitialized());
        assert!(!status.is_active());
        assert!(!status.is_terminal());

        assert!(WizardStatus::Active.is_active());
        assert!(WizardStatus::Finished.is_terminal());
        assert!(WizardStatus::Canceled.is_terminal());
    }

    #[test]
    fn test_terminal_reason() {
        assert_eq!(
            BlockReason::for_terminal(WizardStatus::Finished),
            Some(BlockReason::Finished)
        );
        assert_eq!(
            BlockReason::for_terminal(WizardStatus::Canceled),
            Some(BlockReason::Canceled)
        );
        assert_eq!(BlockReason::for_terminal(WizardStatus::Active), None);
    }

    #[test]
    fn test_reason_display() {
        assert_eq!(BlockReason::AtFirstStep.to_string(), "Already at first step");
        assert_eq!(WizardStatus::Canceled.description(), "Canceled");
    }
}
