//! Wizard state stepper
//!
//! Steps a user through an ordered sequence of screens. Ordering comes from a
//! [`WizardDataSource`]; every transition is reported to a [`WizardDelegate`].
//!
//! ## Architecture
//!
//! ```text
//! Wizard
//!   ├── WizardDataSource (initial step, step after, step before)
//!   ├── WizardDelegate   (weak; initial, next, previous, cancel, finish)
//!   └── WizardStatus     (uninitialized, active, finished, canceled)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use std::rc::Rc;
//! use wizardry::wizard::{NavigationResult, SequenceDataSource, Wizard};
//!
//! let source = Rc::new(SequenceDataSource::new(vec!["welcome", "account", "done"]));
//! let mut wizard = Wizard::new(source);
//!
//! wizard.go_to_initial_step();
//! assert_eq!(wizard.current_step(), Some(&"welcome"));
//!
//! wizard.go_to_next_step();
//! wizard.go_to_next_step();
//! assert_eq!(wizard.go_to_next_step(), NavigationResult::Completed);
//! ```
//!
//! ## Transitions
//!
//! 1. **Uninitialized → Active** via `go_to_initial_step`
//! 2. **Active → Active** via `go_to_next_step` / `go_to_previous_step`
//! 3. **Active → Finished** via `go_to_next_step` on the last step
//! 4. **Active → Canceled** via `cancel`
//!
//! Finished and Canceled accept nothing further.

pub mod data_source;
pub mod delegate;
pub mod flow;
pub mod state;
pub mod steps;

// Re-export commonly used types
pub use data_source::WizardDataSource;
pub use delegate::WizardDelegate;
pub use flow::{BackFromFirstStep, DelegateHandle, NavigationResult, Wizard, WizardOptions};
pub use state::{BlockReason, WizardStatus};
pub use steps::{SequenceDataSource, WizardStepPlacement};
