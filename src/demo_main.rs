//! Console demo: a short account-setup wizard driven from stdin

use std::cell::Cell;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::Context;
use sysinfo::System;
use wizardry::error::AppResult;
use wizardry::{
    logging, EventBus, NavigationResult, WizardCommand, WizardConfig, WizardController,
    WizardDataSource, WizardStepPlacement, WizardView,
};

const LOG_TARGET_STARTUP: &str = "wizardry::startup";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SetupStep {
    Welcome,
    Account,
    Newsletter,
    Confirm,
}

impl SetupStep {
    fn title(&self) -> &'static str {
        match self {
            SetupStep::Welcome => "Welcome",
            SetupStep::Account => "Create your account",
            SetupStep::Newsletter => "Newsletter preferences",
            SetupStep::Confirm => "Confirm and finish",
        }
    }
}

#[derive(Debug, Default)]
struct SetupAnswers {
    wants_newsletter: bool,
}

/// Shows the newsletter step only to users who opted in
struct SetupFlow;

impl WizardDataSource for SetupFlow {
    type Step = SetupStep;
    type Data = SetupAnswers;

    fn initial_step(&self) -> Option<SetupStep> {
        Some(SetupStep::Welcome)
    }

    fn step_after(
        &self,
        current: &SetupStep,
        data: &SetupAnswers,
    ) -> Option<(SetupStep, WizardStepPlacement)> {
        match current {
            SetupStep::Welcome => Some((SetupStep::Account, WizardStepPlacement::Middle)),
            SetupStep::Account if data.wants_newsletter => {
                Some((SetupStep::Newsletter, WizardStepPlacement::Middle))
            }
            SetupStep::Account | SetupStep::Newsletter => {
                Some((SetupStep::Confirm, WizardStepPlacement::Last))
            }
            SetupStep::Confirm => None,
        }
    }

    fn step_before(&self, current: &SetupStep) -> Option<(SetupStep, WizardStepPlacement)> {
        match current {
            SetupStep::Welcome => None,
            SetupStep::Account => Some((SetupStep::Welcome, WizardStepPlacement::First)),
            // Going back skips the optional step
            SetupStep::Newsletter | SetupStep::Confirm => {
                Some((SetupStep::Account, WizardStepPlacement::Middle))
            }
        }
    }
}

struct ConsoleView;

impl ConsoleView {
    fn render(&self, arrow: &str, step: &SetupStep, placement: Option<WizardStepPlacement>) {
        let hint = match placement {
            Some(WizardStepPlacement::Last) => "next finishes",
            Some(WizardStepPlacement::First) | None => "next / cancel",
            Some(WizardStepPlacement::Middle) => "next / back / cancel",
        };
        println!("{} {}  [{}]", arrow, step.title(), hint);
    }
}

impl WizardView<SetupStep> for ConsoleView {
    fn navigate_to_initial(&mut self, step: &SetupStep) {
        self.render("●", step, None);
    }

    fn navigate_to_next(&mut self, step: &SetupStep, placement: WizardStepPlacement) {
        self.render("→", step, Some(placement));
    }

    fn navigate_to_previous(&mut self, step: &SetupStep, placement: WizardStepPlacement) {
        self.render("←", step, Some(placement));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    Command(WizardCommand),
    Newsletter(bool),
    Help,
}

fn parse_input(line: &str) -> Option<Input> {
    match line.trim().to_lowercase().as_str() {
        "n" | "next" => Some(Input::Command(WizardCommand::GoToNextStep)),
        "b" | "back" => Some(Input::Command(WizardCommand::GoToPreviousStep)),
        "c" | "cancel" | "q" | "quit" => Some(Input::Command(WizardCommand::Cancel)),
        "newsletter on" => Some(Input::Newsletter(true)),
        "newsletter off" => Some(Input::Newsletter(false)),
        "h" | "help" | "?" => Some(Input::Help),
        _ => None,
    }
}

fn print_help() {
    println!("Commands: next (n), back (b), cancel (c), newsletter on|off, help (?)");
}

fn config_path_from_args() -> Option<PathBuf> {
    let args: Vec<String> = std::env::args().collect();
    args.iter()
        .position(|arg| arg == "--config")
        .and_then(|index| args.get(index + 1))
        .map(PathBuf::from)
}

fn log_runtime_environment() {
    let version = env!("CARGO_PKG_VERSION");
    let os_name = System::long_os_version()
        .or_else(System::name)
        .unwrap_or_else(|| "Unknown OS".to_string());
    let architecture = std::env::consts::ARCH;

    tracing::info!(target: LOG_TARGET_STARTUP, "Starting wizardry demo v{} ({})", version, architecture);
    tracing::info!(target: LOG_TARGET_STARTUP, "Operating System: {}", os_name);
}

fn main() -> AppResult<()> {
    let config = match config_path_from_args() {
        Some(path) => WizardConfig::load_from(&path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => WizardConfig::load().context("loading default config")?,
    };

    logging::init_tracing(&config);
    log_runtime_environment();

    let bus = EventBus::new();
    let (transcript, _id) = bus.subscribe();

    let outcome: Rc<Cell<Option<bool>>> = Rc::new(Cell::new(None));
    let outcome_sink = Rc::clone(&outcome);

    let mut controller: WizardController<SetupFlow, ConsoleView> =
        WizardController::new(ConsoleView)
            .with_options(config.options())
            .with_event_bus(bus);
    controller.configure_with(Rc::new(SetupFlow), move |canceled| {
        outcome_sink.set(Some(canceled));
    });

    print_help();
    controller.view_did_load();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    while outcome.get().is_none() {
        print!("> ");
        io::stdout().flush().context("flushing stdout")?;

        let line = match lines.next() {
            Some(line) => line.context("reading stdin")?,
            None => break,
        };

        match parse_input(&line) {
            Some(Input::Command(command)) => {
                if let NavigationResult::Blocked { reason } = controller.execute(command) {
                    println!("  ({})", reason);
                }
            }
            Some(Input::Newsletter(enabled)) => {
                if let Some(wizard) = controller.wizard_mut() {
                    wizard.data_mut().wants_newsletter = enabled;
                    println!("  newsletter: {}", if enabled { "on" } else { "off" });
                }
            }
            Some(Input::Help) => print_help(),
            None => println!("  unknown command, type ? for help"),
        }
    }

    match outcome.get() {
        Some(false) => println!("Setup complete."),
        Some(true) => println!("Setup canceled."),
        None => println!("Input closed before the wizard ended."),
    }

    println!("Transcript:");
    for event in transcript.try_iter() {
        println!("  {}", event.description());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input() {
        assert_eq!(
            parse_input(" Next "),
            Some(Input::Command(WizardCommand::GoToNextStep))
        );
        assert_eq!(
            parse_input("b"),
            Some(Input::Command(WizardCommand::GoToPreviousStep))
        );
        assert_eq!(parse_input("newsletter on"), Some(Input::Newsletter(true)));
        assert_eq!(parse_input("?"), Some(Input::Help));
        assert_eq!(parse_input("jump 3"), None);
    }

    #[test]
    fn test_newsletter_step_is_optional() {
        let flow = SetupFlow;
        let mut answers = SetupAnswers::default();

        assert_eq!(
            flow.step_after(&SetupStep::Account, &answers),
            Some((SetupStep::Confirm, WizardStepPlacement::Last))
        );

        answers.wants_newsletter = true;
        assert_eq!(
            flow.step_after(&SetupStep::Account, &answers),
            Some((SetupStep::Newsletter, WizardStepPlacement::Middle))
        );
        assert!(flow.step_after(&SetupStep::Confirm, &answers).is_none());
    }
}
