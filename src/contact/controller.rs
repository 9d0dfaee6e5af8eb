//! Contact form controller.

use crate::button::{ButtonError, ButtonMachine, ButtonState, PointerFeedback};
use crate::config::{ContactConfig, INVALID_FORM_MESSAGE, SUCCESS_MESSAGE};
use crate::contact::events::{EventResponse, UiEvent};
use crate::core::State;
use crate::dom::{apply_field_state, clear_field_state, DocumentPort, DomError};
use crate::schedule::{Scheduler, TaskKey, TaskKind};
use crate::submit::{
    show_form_message, FeedbackKind, FormPayload, SubmissionOutcome, Transport, TransportError,
};
use crate::validation::{validate, validate_fields, FieldError, ValidationResult};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tokio::time::Instant;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ContactError {
    #[error(transparent)]
    Dom(#[from] DomError),

    #[error(transparent)]
    Button(#[from] ButtonError),
}

/// Result of one submit event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// The button was not interactive; nothing happened.
    Blocked,
    /// Validation failed; no request was sent.
    Rejected { invalid_fields: Vec<String> },
    /// A request was sent and settled.
    Completed(SubmissionOutcome),
}

/// Controller for one contact form on the page.
///
/// Handlers take the document port explicitly, so the controller never
/// holds on to the page between events.
pub struct ContactForm<T: Transport> {
    config: ContactConfig,
    transport: T,
    button: Option<ButtonMachine>,
    scheduler: Scheduler,
}

impl<T: Transport> ContactForm<T> {
    /// Bind to the form described by `config`.
    ///
    /// The form itself is required. A missing submit button only disables
    /// the button feedback.
    pub fn mount<P: DocumentPort + ?Sized>(
        port: &mut P,
        transport: T,
        config: ContactConfig,
    ) -> Result<Self, ContactError> {
        port.form_fields(&config.form_id)?;

        let button = match ButtonMachine::locate(port, &config.submit_button_id) {
            Ok(button) => {
                button.render(port)?;
                Some(button)
            }
            Err(err) => {
                tracing::warn!(error = %err, "submit button unavailable, continuing without it");
                None
            }
        };

        Ok(Self {
            config,
            transport,
            button,
            scheduler: Scheduler::new(),
        })
    }

    pub fn config(&self) -> &ContactConfig {
        &self.config
    }

    pub fn button(&self) -> Option<&ButtonMachine> {
        self.button.as_ref()
    }

    pub fn button_state(&self) -> Option<ButtonState> {
        self.button.as_ref().map(ButtonMachine::current_state)
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Validate one field and render its error state.
    pub fn validate_field<P: DocumentPort + ?Sized>(
        &self,
        port: &mut P,
        field_id: &str,
    ) -> Result<ValidationResult, ContactError> {
        let field = port.field(field_id)?;
        let result = validate(&field);
        apply_field_state(port, field_id, &result)?;
        Ok(result)
    }

    pub fn on_blur<P: DocumentPort + ?Sized>(
        &self,
        port: &mut P,
        field_id: &str,
    ) -> Result<ValidationResult, ContactError> {
        self.validate_field(port, field_id)
    }

    /// Re-validate while typing, but only once the field shows an error.
    pub fn on_input<P: DocumentPort + ?Sized>(
        &self,
        port: &mut P,
        field_id: &str,
    ) -> Result<Option<ValidationResult>, ContactError> {
        if crate::dom::shows_error(port, field_id)? {
            self.validate_field(port, field_id).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Validate every field and refresh every error state.
    pub fn validate_form<P: DocumentPort + ?Sized>(
        &self,
        port: &mut P,
    ) -> Result<Validation<(), NonEmptyVec<FieldError>>, ContactError> {
        let fields = port.form_fields(&self.config.form_id)?;
        let outcome = validate_fields(&fields);

        let failures: Vec<&FieldError> = match &outcome {
            Validation::Failure(errors) => errors.iter().collect(),
            Validation::Success(_) => Vec::new(),
        };
        for field in &fields {
            let result = failures
                .iter()
                .find(|e| e.field_id == field.id)
                .map(|e| ValidationResult::invalid(e.violation))
                .unwrap_or_else(ValidationResult::valid);
            apply_field_state(port, &field.id, &result)?;
        }

        Ok(outcome)
    }

    /// Run the submission flow.
    ///
    /// Only one submission can be in flight: while the button is Loading
    /// or Success the attempt is `Blocked`.
    pub async fn on_submit<P: DocumentPort + ?Sized>(
        &mut self,
        port: &mut P,
    ) -> Result<SubmitAttempt, ContactError> {
        if let Some(button) = &self.button {
            if !button.is_interactive() {
                tracing::debug!(state = button.current_state().name(), "submit ignored");
                return Ok(SubmitAttempt::Blocked);
            }
        }

        if let Validation::Failure(errors) = self.validate_form(port)? {
            show_form_message(
                port,
                &self.config.message_id,
                FeedbackKind::Error,
                INVALID_FORM_MESSAGE,
            )?;
            return Ok(SubmitAttempt::Rejected {
                invalid_fields: errors.iter().map(|e| e.field_id.clone()).collect(),
            });
        }

        // Page reads come before Loading; a failed read must not strand the button.
        let fields = port.form_fields(&self.config.form_id)?;
        let payload = FormPayload::from_fields(&fields);
        let action = port.attribute(&self.config.form_id, "action")?;

        self.cancel_timers();
        self.transition(port, ButtonState::Loading)?;
        show_form_message(port, &self.config.message_id, FeedbackKind::Info, "")?;

        let result = match self.config.resolve_endpoint(action.as_deref()) {
            Some(endpoint) => self.transport.post_form(&endpoint, &payload).await,
            None => Err(TransportError::InvalidEndpoint(action.unwrap_or_default())),
        };

        let outcome = SubmissionOutcome::from(result);
        match &outcome {
            SubmissionOutcome::Success => {
                tracing::info!(form = %self.config.form_id, "form submitted");
                self.transition(port, ButtonState::Success)?;
                show_form_message(
                    port,
                    &self.config.message_id,
                    FeedbackKind::Success,
                    SUCCESS_MESSAGE,
                )?;
                self.scheduler.schedule(
                    TaskKey::new(&self.config.form_id, TaskKind::FormReset),
                    self.config.reset_delay(),
                );
            }
            SubmissionOutcome::Failure(reason) => {
                tracing::error!(form = %self.config.form_id, %reason, "form submission failed");
                self.transition(port, ButtonState::Error)?;
                let message = self.config.failure_message();
                show_form_message(port, &self.config.message_id, FeedbackKind::Error, &message)?;
                self.scheduler.schedule(
                    TaskKey::new(&self.config.submit_button_id, TaskKind::ErrorRecovery),
                    self.config.error_recovery_delay(),
                );
            }
        }

        Ok(SubmitAttempt::Completed(outcome))
    }

    /// Restore fields, clear every error state and the message, and
    /// return the button to Default. Pending tasks are cancelled.
    pub fn reset_form<P: DocumentPort + ?Sized>(&mut self, port: &mut P) -> Result<(), ContactError> {
        self.cancel_timers();
        port.reset_form(&self.config.form_id)?;
        for field in port.form_fields(&self.config.form_id)? {
            clear_field_state(port, &field.id)?;
        }

        if let Some(button) = self.button.as_mut() {
            if button.current_state() == ButtonState::Loading {
                tracing::warn!("form reset while a submission is in flight; button left as is");
            } else {
                button.reset(port)?;
            }
        }

        show_form_message(port, &self.config.message_id, FeedbackKind::Info, "")?;
        Ok(())
    }

    /// Fire every task due now.
    pub fn tick<P: DocumentPort + ?Sized>(
        &mut self,
        port: &mut P,
    ) -> Result<Vec<TaskKind>, ContactError> {
        let due = self.scheduler.take_due(Instant::now());
        let mut fired = Vec::with_capacity(due.len());
        for key in due {
            tracing::debug!(owner = %key.owner, kind = ?key.kind, "task fired");
            match key.kind {
                TaskKind::ErrorRecovery => self.recover_from_error(port)?,
                TaskKind::FormReset => self.reset_form(port)?,
            }
            fired.push(key.kind);
        }
        Ok(fired)
    }

    /// Sleep through every pending task, firing each at its deadline.
    pub async fn run_timers<P: DocumentPort + ?Sized>(
        &mut self,
        port: &mut P,
    ) -> Result<(), ContactError> {
        while let Some(deadline) = self.scheduler.next_deadline() {
            tokio::time::sleep_until(deadline).await;
            self.tick(port)?;
        }
        Ok(())
    }

    pub fn on_pointer<P: DocumentPort + ?Sized>(
        &self,
        port: &mut P,
        feedback: PointerFeedback,
    ) -> Result<(), ContactError> {
        if let Some(button) = &self.button {
            button.pointer(port, feedback)?;
        }
        Ok(())
    }

    /// Route a UI event to its handler.
    pub async fn dispatch<P: DocumentPort + ?Sized>(
        &mut self,
        port: &mut P,
        event: UiEvent,
    ) -> Result<EventResponse, ContactError> {
        let response = match event {
            UiEvent::Blur(field_id) => EventResponse::Validated(self.on_blur(port, &field_id)?),
            UiEvent::Input(field_id) => match self.on_input(port, &field_id)? {
                Some(result) => EventResponse::Validated(result),
                None => EventResponse::Ignored,
            },
            UiEvent::Submit => EventResponse::Submitted(self.on_submit(port).await?),
            UiEvent::Reset => {
                self.reset_form(port)?;
                EventResponse::Updated
            }
            UiEvent::Pointer(feedback) => {
                self.on_pointer(port, feedback)?;
                EventResponse::Updated
            }
            UiEvent::TimerTick => EventResponse::TimersFired(self.tick(port)?),
        };
        Ok(response)
    }

    fn recover_from_error<P: DocumentPort + ?Sized>(
        &mut self,
        port: &mut P,
    ) -> Result<(), ContactError> {
        match self.button.as_ref().map(ButtonMachine::current_state) {
            Some(ButtonState::Error) => self.transition(port, ButtonState::Default),
            state => {
                tracing::debug!(?state, "error recovery skipped, button already moved on");
                Ok(())
            }
        }
    }

    fn transition<P: DocumentPort + ?Sized>(
        &mut self,
        port: &mut P,
        to: ButtonState,
    ) -> Result<(), ContactError> {
        if let Some(button) = self.button.as_mut() {
            button.transition_to(port, to)?;
        }
        Ok(())
    }

    fn cancel_timers(&mut self) {
        self.scheduler.cancel_owner(&self.config.form_id);
        self.scheduler.cancel_owner(&self.config.submit_button_id);
    }
}
