//! Host-side wizard controller
//!
//! Owns a [`Wizard`] and acts as its delegate: forwards transitions to a
//! [`WizardView`], republishes them on an optional [`EventBus`], and reports
//! the end of the wizard through a one-shot [`CompletionHandler`].

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use tracing::{debug, warn};

use super::completion::CompletionHandler;
use super::navigation::NavigationFlag;
use super::view::WizardView;
use crate::messaging::{EventBus, WizardCommand, WizardEvent};
use crate::wizard::{
    BlockReason, NavigationResult, Wizard, WizardDataSource, WizardDelegate, WizardOptions,
    WizardStepPlacement,
};

/// Delegate half of the controller
///
/// Kept behind its own `Rc<RefCell<_>>` so the wizard can hold it weakly while
/// the controller owns the wizard.
struct Presenter<S, V> {
    view: V,
    completion: Option<CompletionHandler>,
    events: Option<EventBus<S>>,
}

impl<S: Clone, V> Presenter<S, V> {
    fn publish(&self, event: WizardEvent<S>) {
        if let Some(bus) = &self.events {
            bus.publish(event);
        }
    }

    fn complete(&mut self, canceled: bool) {
        match self.completion.as_mut() {
            Some(handler) => {
                handler.invoke(canceled);
            }
            None => warn!(canceled, "Wizard ended with no completion handler"),
        }
    }
}

impl<S, V> WizardDelegate<S> for Presenter<S, V>
where
    S: Clone,
    V: WizardView<S>,
{
    fn did_go_to_initial_step(&mut self, step: &S) {
        self.view.navigate_to_initial(step);
        self.publish(WizardEvent::WentToInitialStep { step: step.clone() });
    }

    fn did_go_to_next_step(&mut self, step: &S, placement: WizardStepPlacement) {
        self.view.navigate_to_next(step, placement);
        self.publish(WizardEvent::WentToNextStep {
            step: step.clone(),
            placement,
        });
    }

    fn did_go_to_previous_step(&mut self, step: &S, placement: WizardStepPlacement) {
        self.view.navigate_to_previous(step, placement);
        self.publish(WizardEvent::WentToPreviousStep {
            step: step.clone(),
            placement,
        });
    }

    fn did_cancel(&mut self) {
        self.publish(WizardEvent::Canceled);
        self.complete(true);
    }

    fn did_finish(&mut self) {
        self.publish(WizardEvent::Finished);
        self.complete(false);
    }
}

/// Integrates a [`Wizard`] with a host view
///
/// Lifecycle mirrors a UI container: build it with its view, configure it
/// once with a data source and completion callback, and call
/// [`view_did_load`](Self::view_did_load) once the view is on screen. The
/// initial step is shown as soon as both have happened, in either order.
pub struct WizardController<D: WizardDataSource, V> {
    presenter: Rc<RefCell<Presenter<D::Step, V>>>,
    wizard: Option<Wizard<D>>,
    navigation: NavigationFlag,
    options: WizardOptions,
    view_loaded: bool,
}

impl<D, V> WizardController<D, V>
where
    D: WizardDataSource,
    D::Step: 'static,
    V: WizardView<D::Step> + 'static,
{
    pub fn new(view: V) -> Self {
        Self {
            presenter: Rc::new(RefCell::new(Presenter {
                view,
                completion: None,
                events: None,
            })),
            wizard: None,
            navigation: NavigationFlag::new(),
            options: WizardOptions::default(),
            view_loaded: false,
        }
    }

    /// Options applied to the wizard created by [`configure_with`](Self::configure_with)
    pub fn with_options(mut self, options: WizardOptions) -> Self {
        self.options = options;
        self
    }

    /// Share a navigation flag with the view
    pub fn with_navigation_flag(mut self, flag: NavigationFlag) -> Self {
        self.navigation = flag;
        self
    }

    /// Also publish every transition on `bus`
    pub fn with_event_bus(self, bus: EventBus<D::Step>) -> Self {
        self.presenter.borrow_mut().events = Some(bus);
        self
    }

    /// Create the wizard and remember the completion callback
    ///
    /// # Panics
    ///
    /// Panics if called more than once on the same controller.
    pub fn configure_with(
        &mut self,
        data_source: Rc<D>,
        completion: impl FnMut(bool) + 'static,
    ) {
        assert!(
            self.wizard.is_none(),
            "The wizard controller can only be configured once."
        );

        self.presenter.borrow_mut().completion = Some(CompletionHandler::new(completion));
        let wizard = Wizard::with_delegate(data_source, &self.presenter).with_options(self.options);
        self.wizard = Some(wizard);
        debug!("Wizard controller configured");

        if self.view_loaded {
            self.show_initial_step();
        }
    }

    /// The host view is ready; shows the initial step if not already shown
    pub fn view_did_load(&mut self) {
        self.view_loaded = true;
        self.show_initial_step();
    }

    pub fn is_view_loaded(&self) -> bool {
        self.view_loaded
    }

    /// User asked for the next step
    pub fn handle_go_to_next_step(&mut self) -> NavigationResult<D::Step> {
        self.execute(WizardCommand::GoToNextStep)
    }

    /// User asked for the previous step
    pub fn handle_go_to_previous_step(&mut self) -> NavigationResult<D::Step> {
        self.execute(WizardCommand::GoToPreviousStep)
    }

    /// User wants to stop without completing the remaining steps
    pub fn handle_wizard_canceled(&mut self) -> NavigationResult<D::Step> {
        self.execute(WizardCommand::Cancel)
    }

    /// Run a host command against the wizard
    ///
    /// Next/previous are dropped while a navigation is in flight; cancel is
    /// always accepted.
    pub fn execute(&mut self, command: WizardCommand) -> NavigationResult<D::Step> {
        if command.is_transition() && self.navigation.is_navigating() {
            debug!(command = command.description(), "Navigation in progress, dropping request");
            return NavigationResult::Blocked {
                reason: BlockReason::Navigating,
            };
        }

        let wizard = match self.wizard.as_mut() {
            Some(wizard) => wizard,
            None => {
                warn!(command = command.description(), "Wizard controller is not configured");
                return NavigationResult::Blocked {
                    reason: BlockReason::NotStarted,
                };
            }
        };

        match command {
            WizardCommand::GoToNextStep => wizard.go_to_next_step(),
            WizardCommand::GoToPreviousStep => wizard.go_to_previous_step(),
            WizardCommand::Cancel => wizard.cancel(),
        }
    }

    /// Returns the wizard that manages this controller's steps
    pub fn wizard(&self) -> Option<&Wizard<D>> {
        self.wizard.as_ref()
    }

    pub fn wizard_mut(&mut self) -> Option<&mut Wizard<D>> {
        self.wizard.as_mut()
    }

    /// Handle to the "is navigating" flag
    pub fn navigation_flag(&self) -> NavigationFlag {
        self.navigation.clone()
    }

    pub fn is_navigating(&self) -> bool {
        self.navigation.is_navigating()
    }

    /// Whether the completion callback has run
    pub fn is_completed(&self) -> bool {
        self.presenter
            .borrow()
            .completion
            .as_ref()
            .map_or(false, CompletionHandler::is_completed)
    }

    pub fn view(&self) -> Ref<'_, V> {
        Ref::map(self.presenter.borrow(), |presenter| &presenter.view)
    }

    pub fn view_mut(&self) -> RefMut<'_, V> {
        RefMut::map(self.presenter.borrow_mut(), |presenter| &mut presenter.view)
    }

    fn show_initial_step(&mut self) {
        if let Some(wizard) = self.wizard.as_mut() {
            if wizard.current_step().is_none() {
                wizard.go_to_initial_step();
            }
        }
    }
}

impl<D: WizardDataSource, V> std::fmt::Debug for WizardController<D, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WizardController")
            .field("wizard", &self.wizard)
            .field("navigation", &self.navigation)
            .field("view_loaded", &self.view_loaded)
            .finish_non_exhaustive()
    }
}
