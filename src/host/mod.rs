//! Host integration
//!
//! Everything a UI container needs to drive a [`Wizard`](crate::wizard::Wizard):
//! rendering hooks, a re-entrancy guard and a one-shot completion callback.
//!
//! ```text
//! WizardController
//!   ├── Wizard            (owned)
//!   ├── WizardView        (navigate_to_initial / next / previous)
//!   ├── NavigationFlag    (drops requests while a transition runs)
//!   └── CompletionHandler (canceled: bool, invoked once)
//! ```

pub mod completion;
pub mod controller;
pub mod navigation;
pub mod view;

pub use completion::CompletionHandler;
pub use controller::WizardController;
pub use navigation::NavigationFlag;
pub use view::WizardView;
