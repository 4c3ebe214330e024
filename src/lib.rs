//! Wizardry: a step-by-step wizard stepper
//!
//! - [`wizard`]: the state stepper, its data source and delegate contracts
//! - [`host`]: controller that wires a wizard to a view and a completion callback
//! - [`messaging`]: commands and broadcast events for observers
//! - [`config`] / [`logging`]: ambient setup for binaries

pub mod config;
pub mod error;
pub mod host;
pub mod logging;
pub mod messaging;
pub mod wizard;

pub use config::WizardConfig;
pub use error::ConfigError;
pub use host::{CompletionHandler, NavigationFlag, WizardController, WizardView};
pub use messaging::{EventBus, WizardCommand, WizardEvent};
pub use wizard::{
    NavigationResult, SequenceDataSource, Wizard, WizardDataSource, WizardDelegate,
    WizardStepPlacement,
};
