//! Delegate that republishes transitions on an [`EventBus`]

use super::bus::EventBus;
use super::events::WizardEvent;
use crate::wizard::{WizardDelegate, WizardStepPlacement};

/// Turns delegate callbacks into [`WizardEvent`]s
#[derive(Debug, Clone)]
pub struct EventForwarder<S> {
    bus: EventBus<S>,
}

impl<S: Clone> EventForwarder<S> {
    pub fn new(bus: EventBus<S>) -> Self {
        Self { bus }
    }

    pub fn bus(&self) -> &EventBus<S> {
        &self.bus
    }
}

impl<S: Clone> WizardDelegate<S> for EventForwarder<S> {
    fn did_go_to_initial_step(&mut self, step: &S) {
        self.bus.publish(WizardEvent::WentToInitialStep { step: step.clone() });
    }

    fn did_go_to_next_step(&mut self, step: &S, placement: WizardStepPlacement) {
        self.bus.publish(WizardEvent::WentToNextStep {
            step: step.clone(),
            placement,
        });
    }

    fn did_go_to_previous_step(&mut self, step: &S, placement: WizardStepPlacement) {
        self.bus.publish(WizardEvent::WentToPreviousStep {
            step: step.clone(),
            placement,
        });
    }

    fn did_cancel(&mut self) {
        self.bus.publish(WizardEvent::Canceled);
    }

    fn did_finish(&mut self) {
        self.bus.publish(WizardEvent::Finished);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::{SequenceDataSource, Wizard};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_forwards_wizard_transitions() {
        let bus = EventBus::new();
        let (rx, _id) = bus.subscribe();
        let forwarder = Rc::new(RefCell::new(EventForwarder::new(bus)));

        let source = Rc::new(SequenceDataSource::new(vec!["a", "b"]));
        let mut wizard = Wizard::with_delegate(source, &forwarder);
        wizard.go_to_initial_step();
        wizard.go_to_next_step();
        wizard.go_to_previous_step();
        wizard.cancel();

        let events: Vec<_> = rx.try_iter().collect();
        assert_eq!(
            events,
            vec![
                WizardEvent::WentToInitialStep { step: "a" },
                WizardEvent::WentToNextStep {
                    step: "b",
                    placement: WizardStepPlacement::Last,
                },
                WizardEvent::WentToPreviousStep {
                    step: "a",
                    placement: WizardStepPlacement::First,
                },
                WizardEvent::Canceled,
            ]
        );
    }
}
