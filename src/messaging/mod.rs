//! Messaging for wizard hosts and observers
//!
//! - **Commands**: user requests to move the wizard (imperative, targeted)
//! - **Events**: transitions that happened (past tense, broadcast)
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────┐   WizardCommand   ┌────────────┐  delegate  ┌──────────────┐
//! │  Host   │ ────────────────> │ Controller │ ─────────> │  Event Bus   │
//! │  (UI)   │                   │  + Wizard  │            │              │
//! └─────────┘                   └────────────┘            └──────────────┘
//!                                                                │
//!                                                                │ Publishes
//!                                                                ▼
//!                                                          ┌───────────┐
//!                                                          │ Observers │
//!                                                          └───────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use wizardry::messaging::{EventBus, EventForwarder, WizardEvent};
//! use wizardry::wizard::{SequenceDataSource, Wizard};
//!
//! let bus = EventBus::new();
//! let (rx, _id) = bus.subscribe();
//!
//! let forwarder = Rc::new(RefCell::new(EventForwarder::new(bus)));
//! let source = Rc::new(SequenceDataSource::new(vec!["intro", "done"]));
//! let mut wizard = Wizard::with_delegate(source, &forwarder);
//! wizard.go_to_initial_step();
//!
//! assert_eq!(rx.try_recv(), Ok(WizardEvent::WentToInitialStep { step: "intro" }));
//! ```

pub mod bus;
pub mod commands;
pub mod events;
pub mod forwarder;

// Re-export commonly used types
pub use bus::{EventBus, SubscriberId};
pub use commands::WizardCommand;
pub use events::WizardEvent;
pub use forwarder::EventForwarder;
