//! Wizard flow management
//!
//! The stepper: asks the data source where to go, updates the current step
//! and reports every transition to the delegate.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::data_source::WizardDataSource;
use super::delegate::WizardDelegate;
use super::state::{BlockReason, WizardStatus};

/// What going back from the first step does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackFromFirstStep {
    /// Nothing happens and no notification fires
    #[default]
    Ignore,

    /// The wizard is canceled
    Cancel,
}

/// Behaviour switches for a [`Wizard`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WizardOptions {
    pub back_from_first_step: BackFromFirstStep,
}

/// Navigation result
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationResult<S> {
    /// Navigation succeeded, now on this step
    Success(S),

    /// Nothing changed and no notification fired
    Blocked { reason: BlockReason },

    /// Went past the last step
    Completed,

    /// Wizard canceled
    Canceled,
}

impl<S> NavigationResult<S> {
    pub fn is_success(&self) -> bool {
        matches!(self, NavigationResult::Success(_))
    }

    pub fn is_blocked(&self) -> bool {
        matches!(self, NavigationResult::Blocked { .. })
    }

    /// The step navigated to, if any
    pub fn step(&self) -> Option<&S> {
        match self {
            NavigationResult::Success(step) => Some(step),
            _ => None,
        }
    }
}

/// Non-owning handle to a delegate
pub type DelegateHandle<S> = Weak<RefCell<dyn WizardDelegate<S>>>;

/// Steps through the sequence supplied by a [`WizardDataSource`]
///
/// Holds at most one current step. The delegate is held weakly so a host that
/// owns the wizard can also be its delegate without a reference cycle; once
/// the delegate is dropped, transitions still happen but nobody is told.
pub struct Wizard<D: WizardDataSource> {
    data_source: Rc<D>,
    delegate: Option<DelegateHandle<D::Step>>,
    current_step: Option<D::Step>,
    data: D::Data,
    status: WizardStatus,
    options: WizardOptions,
}

impl<D: WizardDataSource> Wizard<D> {
    /// Create a wizard with no delegate attached
    pub fn new(data_source: Rc<D>) -> Self {
        Self {
            data_source,
            delegate: None,
            current_step: None,
            data: D::Data::default(),
            status: WizardStatus::Uninitialized,
            options: WizardOptions::default(),
        }
    }

    /// Create a wizard reporting to `delegate`
    pub fn with_delegate<T>(data_source: Rc<D>, delegate: &Rc<RefCell<T>>) -> Self
    where
        T: WizardDelegate<D::Step> + 'static,
    {
        let delegate: Weak<RefCell<T>> = Rc::downgrade(delegate);
        let mut wizard = Self::new(data_source);
        wizard.set_delegate(delegate);
        wizard
    }

    pub fn with_options(mut self, options: WizardOptions) -> Self {
        self.options = options;
        self
    }

    /// Replace the delegate
    pub fn set_delegate(&mut self, delegate: DelegateHandle<D::Step>) {
        self.delegate = Some(delegate);
    }

    /// Check whether a live delegate is attached
    pub fn has_delegate(&self) -> bool {
        self.delegate
            .as_ref()
            .map_or(false, |delegate| delegate.strong_count() > 0)
    }

    /// Get current step (`None` before the initial step)
    pub fn current_step(&self) -> Option<&D::Step> {
        self.current_step.as_ref()
    }

    pub fn status(&self) -> WizardStatus {
        self.status
    }

    pub fn options(&self) -> WizardOptions {
        self.options
    }

    pub fn data_source(&self) -> &Rc<D> {
        &self.data_source
    }

    /// User input gathered so far
    pub fn data(&self) -> &D::Data {
        &self.data
    }

    /// Mutable access to the user input consulted by the next forward step
    pub fn data_mut(&mut self) -> &mut D::Data {
        &mut self.data
    }

    pub fn is_finished(&self) -> bool {
        self.status == WizardStatus::Finished
    }

    pub fn is_canceled(&self) -> bool {
        self.status == WizardStatus::Canceled
    }

    /// Check if a previous step exists
    pub fn can_go_back(&self) -> bool {
        match self.active_step() {
            Ok(current) => self.data_source.step_before(current).is_some(),
            Err(_) => false,
        }
    }

    /// Show the data source's first step
    ///
    /// Only the first call has an effect; later calls are blocked with
    /// [`BlockReason::AlreadyStarted`]. An empty data source leaves the wizard
    /// uninitialized.
    pub fn go_to_initial_step(&mut self) -> NavigationResult<D::Step> {
        if !self.status.is_uninitialized() {
            debug!(status = ?self.status, "Initial step already shown, ignoring");
            return NavigationResult::Blocked {
                reason: BlockReason::AlreadyStarted,
            };
        }

        let step = match self.data_source.initial_step() {
            Some(step) => step,
            None => {
                warn!("Data source returned no initial step");
                return NavigationResult::Blocked {
                    reason: BlockReason::NoInitialStep,
                };
            }
        };

        debug!(?step, "Going to initial step");
        self.current_step = Some(step.clone());
        self.status = WizardStatus::Active;
        self.notify(|delegate| delegate.did_go_to_initial_step(&step));

        NavigationResult::Success(step)
    }

    /// Navigate to next step, or finish when there is none
    pub fn go_to_next_step(&mut self) -> NavigationResult<D::Step> {
        let next = match self.active_step() {
            Ok(current) => self.data_source.step_after(current, &self.data),
            Err(reason) => return self.blocked("next", reason),
        };

        match next {
            Some((step, placement)) => {
                debug!(?step, %placement, "Going to next step");
                self.current_step = Some(step.clone());
                self.notify(|delegate| delegate.did_go_to_next_step(&step, placement));
                NavigationResult::Success(step)
            }
            None => {
                info!("Wizard finished");
                self.status = WizardStatus::Finished;
                self.notify(|delegate| delegate.did_finish());
                NavigationResult::Completed
            }
        }
    }

    /// Navigate to previous step
    ///
    /// At the first step this does nothing unless the wizard was built with
    /// [`BackFromFirstStep::Cancel`].
    pub fn go_to_previous_step(&mut self) -> NavigationResult<D::Step> {
        let previous = match self.active_step() {
            Ok(current) => self.data_source.step_before(current),
            Err(reason) => return self.blocked("previous", reason),
        };

        match previous {
            Some((step, placement)) => {
                debug!(?step, %placement, "Going to previous step");
                self.current_step = Some(step.clone());
                self.notify(|delegate| delegate.did_go_to_previous_step(&step, placement));
                NavigationResult::Success(step)
            }
            None => match self.options.back_from_first_step {
                BackFromFirstStep::Ignore => {
                    debug!("Already at first step, ignoring");
                    NavigationResult::Blocked {
                        reason: BlockReason::AtFirstStep,
                    }
                }
                BackFromFirstStep::Cancel => self.cancel(),
            },
        }
    }

    /// Stop the wizard without completing it
    ///
    /// Accepted from any non-terminal state, including before the initial
    /// step has been shown.
    pub fn cancel(&mut self) -> NavigationResult<D::Step> {
        if let Some(reason) = BlockReason::for_terminal(self.status) {
            return self.blocked("cancel", reason);
        }

        info!("Wizard canceled");
        self.status = WizardStatus::Canceled;
        self.notify(|delegate| delegate.did_cancel());
        NavigationResult::Canceled
    }

    fn active_step(&self) -> Result<&D::Step, BlockReason> {
        if let Some(reason) = BlockReason::for_terminal(self.status) {
            return Err(reason);
        }
        self.current_step.as_ref().ok_or(BlockReason::NotStarted)
    }

    fn blocked(&self, request: &str, reason: BlockReason) -> NavigationResult<D::Step> {
        warn!(request, %reason, "Wizard transition refused");
        NavigationResult::Blocked { reason }
    }

    fn notify(&self, f: impl FnOnce(&mut dyn WizardDelegate<D::Step>)) {
        match self.delegate.as_ref().and_then(Weak::upgrade) {
            Some(delegate) => f(&mut *delegate.borrow_mut()),
            None => debug!("No live delegate, notification dropped"),
        }
    }
}

impl<D: WizardDataSource> std::fmt::Debug for Wizard<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wizard")
            .field("current_step", &self.current_step)
            .field("status", &self.status)
            .field("options", &self.options)
            .field("has_delegate", &self.has_delegate())
            .finish()
    }
}
