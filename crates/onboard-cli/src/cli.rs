//! Command handlers for the terminal front end.
//!
//! [`Cli`] carries the rendering and delivery settings shared by every
//! subcommand. The interactive `start` command hands control to a
//! [`Session`], which owns one wizard and feeds it line commands:
//!
//! ```text
//! stdin line → SessionCommand → Wizard operation → display wrapper → terminal
//! ```

use std::{path::Path, time::Duration};

use anyhow::{bail, Context, Result};
use log::{debug, info};
use onboard_core::{
    catalog::{self, FEATURES},
    display::{OperationStatus, OptionLists, StatusBanner, StepForm, StepIndicator},
    validate, validate_all, Field, NotificationSender, OnboardError, ProjectRecord,
    SessionStatus, Wizard, WizardStep,
};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::{
    renderer::TerminalRenderer,
    session::{SessionCommand, HELP},
};

/// Shared settings for all subcommands.
pub struct Cli {
    renderer: TerminalRenderer,
    submit_timeout: Duration,
}

impl Cli {
    pub fn new(renderer: TerminalRenderer, submit_timeout: Duration) -> Self {
        Self {
            renderer,
            submit_timeout,
        }
    }

    /// Runs an interactive session on standard input.
    pub async fn start_session<S: NotificationSender>(&self, sender: S) -> Result<()> {
        let wizard = Wizard::builder(sender)
            .with_submit_timeout(self.submit_timeout)
            .build();
        Session::new(wizard, &self.renderer)
            .run(BufReader::new(tokio::io::stdin()))
            .await
    }

    /// Checks every step of the record in `path`.
    pub fn validate_file(&self, path: &Path) -> Result<()> {
        let record = load_record(path)?;
        let errors = validate_all(&record);
        if !errors.is_empty() {
            self.renderer
                .render(&format!("## Validation Errors\n\n{errors}"))?;
            bail!("Record has {} invalid field(s)", errors.len());
        }

        self.renderer.show(&OperationStatus::success(
            "Record is valid and ready to submit".to_string(),
        ))
    }

    /// Validates the record in `path` and delivers it through `sender`.
    pub async fn submit_file<S: NotificationSender>(&self, sender: S, path: &Path) -> Result<()> {
        let record = load_record(path)?;
        let errors = validate_all(&record);
        if !errors.is_empty() {
            self.renderer
                .render(&format!("## Validation Errors\n\n{errors}"))?;
            bail!("Record has {} invalid field(s)", errors.len());
        }

        let mut wizard = Wizard::builder(sender)
            .with_submit_timeout(self.submit_timeout)
            .with_record(record)
            .build();
        let status = wizard.submit().await.context("Submission refused")?;
        self.renderer
            .show(&StatusBanner::new(status, wizard.record()))?;

        if status != SessionStatus::Success {
            bail!("Submission failed");
        }
        Ok(())
    }

    /// Prints one catalog list, or all of them.
    pub fn list_options(&self, name: Option<&str>) -> Result<()> {
        match option_lists(name) {
            Ok(lists) => self.renderer.show(&lists),
            Err(message) => bail!(message),
        }
    }
}

fn load_record(path: &Path) -> Result<ProjectRecord> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read record file {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse record file {}", path.display()))
}

/// Resolves a list name (any field spelling) to the catalog lists to show.
fn option_lists(name: Option<&str>) -> std::result::Result<OptionLists, String> {
    let Some(name) = name else {
        return Ok(OptionLists::all());
    };
    let field = name.parse::<Field>().map_err(|e| e.to_string())?;
    catalog::options_for(field.as_str())
        .map(|list| OptionLists(vec![list]))
        .ok_or_else(|| format!("Field '{}' has no fixed choices", field.as_str()))
}

/// Whether the read loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// One interactive onboarding session.
pub struct Session<'a, S> {
    wizard: Wizard<S>,
    renderer: &'a TerminalRenderer,
}

impl<'a, S: NotificationSender> Session<'a, S> {
    pub fn new(wizard: Wizard<S>, renderer: &'a TerminalRenderer) -> Self {
        Self { wizard, renderer }
    }

    pub fn wizard(&self) -> &Wizard<S> {
        &self.wizard
    }

    /// Reads commands from `reader` until `quit` or end of input.
    pub async fn run<R: AsyncBufRead + Unpin>(mut self, reader: R) -> Result<()> {
        self.renderer
            .render("# Project Onboarding\n\nType `help` for the list of commands.\n\n")?;
        self.show_form()?;

        let mut lines = reader.lines();
        while let Some(line) = lines.next_line().await.context("Failed to read command")? {
            if self.handle_line(&line).await? == Flow::Quit {
                break;
            }
        }

        info!("Session ended with status {}", self.wizard.status());
        Ok(())
    }

    /// Parses and runs one input line. Bad input is reported, not returned.
    pub async fn handle_line(&mut self, line: &str) -> Result<Flow> {
        if line.trim().is_empty() {
            return Ok(Flow::Continue);
        }

        let command = match line.parse::<SessionCommand>() {
            Ok(command) => command,
            Err(message) => {
                self.fail(message)?;
                return Ok(Flow::Continue);
            }
        };
        debug!("Session command: {command:?}");

        let status = self.wizard.status();
        if !command.allowed_in(status) {
            self.fail(refusal(status))?;
            return Ok(Flow::Continue);
        }
        self.handle(command).await
    }

    async fn handle(&mut self, command: SessionCommand) -> Result<Flow> {
        match command {
            SessionCommand::Set { field, value } => self.set(field, &value)?,
            SessionCommand::Toggle(feature) => self.toggle(&feature)?,
            SessionCommand::Next => {
                if self.wizard.current_step().is_last() {
                    self.deliver(false).await?;
                } else {
                    self.advance()?;
                }
            }
            SessionCommand::Back => {
                self.wizard.retreat();
                self.show_form()?;
            }
            SessionCommand::Submit => {
                if self.wizard.current_step().is_last() {
                    self.deliver(false).await?;
                } else {
                    self.fail("Complete the remaining steps with `next` before submitting")?;
                }
            }
            SessionCommand::Retry => self.deliver(true).await?,
            SessionCommand::Cancel => {
                self.wizard.cancel_error()?;
                self.succeed("Returned to the form")?;
                self.show_form()?;
            }
            SessionCommand::Reset => {
                self.wizard.reset();
                self.succeed("Started a new project")?;
                self.show_form()?;
            }
            SessionCommand::Show => {
                self.show_form()?;
                self.renderer
                    .show(&StatusBanner::new(self.wizard.status(), self.wizard.record()))?;
            }
            SessionCommand::Options(name) => match option_lists(name.as_deref()) {
                Ok(lists) => self.renderer.show(&lists)?,
                Err(message) => self.fail(message)?,
            },
            SessionCommand::Help => self.renderer.render(HELP)?,
            SessionCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn set(&mut self, field: Field, value: &str) -> Result<()> {
        match self.wizard.set_field(field, value) {
            Ok(()) => {
                let stored = self.wizard.record().value_of(field);
                if stored.is_empty() {
                    self.succeed(format!("Cleared {}", field.label()))?;
                } else {
                    self.succeed(format!("{}: {stored}", field.label()))?;
                }
                self.show_state()
            }
            Err(e) => self.fail(e.to_string()),
        }
    }

    fn toggle(&mut self, feature: &str) -> Result<()> {
        let Some(feature) = catalog::canonical(FEATURES, feature) else {
            return self.fail(format!(
                "Unknown feature: {feature}. Use `options features` to see the choices"
            ));
        };

        if self.wizard.toggle_feature(feature) {
            self.succeed(format!("Selected {feature}"))?;
        } else {
            self.succeed(format!("Deselected {feature}"))?;
        }
        self.show_state()
    }

    fn advance(&mut self) -> Result<()> {
        match self.wizard.advance() {
            Ok(_) => self.show_form(),
            Err(OnboardError::Validation { .. }) => {
                self.fail("Please fix the highlighted fields")?;
                self.show_form()
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn deliver(&mut self, retry: bool) -> Result<()> {
        if validate(WizardStep::Requirements, self.wizard.record()).is_empty() {
            self.renderer
                .show(&StatusBanner::new(SessionStatus::Submitting, self.wizard.record()))?;
        }

        let outcome = if retry {
            self.wizard.retry_submit().await
        } else {
            self.wizard.submit().await
        };

        match outcome {
            Ok(status) => self
                .renderer
                .show(&StatusBanner::new(status, self.wizard.record())),
            Err(OnboardError::Validation { step, errors }) => {
                self.fail(format!(
                    "Please fix the highlighted fields on step {step} ({})",
                    step.label()
                ))?;
                self.renderer.show(&errors)
            }
            Err(e) => self.fail(e.to_string()),
        }
    }

    fn show_form(&self) -> Result<()> {
        self.renderer.show(&StepForm::new(
            self.wizard.current_step(),
            self.wizard.record(),
            self.wizard.errors(),
        ))
    }

    /// Step indicator plus any outstanding errors.
    fn show_state(&self) -> Result<()> {
        self.renderer
            .show(&StepIndicator::new(self.wizard.current_step()))?;
        let errors = self.wizard.errors();
        if !errors.is_empty() {
            self.renderer.show(errors)?;
        }
        Ok(())
    }

    fn succeed(&self, message: impl Into<String>) -> Result<()> {
        self.renderer
            .show(&OperationStatus::success(message.into()))
    }

    fn fail(&self, message: impl Into<String>) -> Result<()> {
        self.renderer
            .show(&OperationStatus::failure(message.into()))
    }
}

fn refusal(status: SessionStatus) -> &'static str {
    match status {
        SessionStatus::Success => {
            "This project has already been submitted. Use `reset` to start a new one"
        }
        SessionStatus::Error => "The last delivery failed. Use `retry` or `cancel` first",
        SessionStatus::Submitting => "A submission is already in progress",
        SessionStatus::Idle => "There is no failed delivery to retry or cancel",
    }
}
