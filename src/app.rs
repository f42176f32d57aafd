//! Application state and core logic

use crate::config::EmailConfig;
use crate::notify::{EmailJsClient, NotificationClient};
use crate::state::{
    transition, Form, SubmissionEvent, SubmissionState, ValidationErrors, WaitlistForm,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Fixed user-facing message for any submission failure
pub const SUBMIT_FAILED_MESSAGE: &str = "Something went wrong. Please try again later.";

/// Index of the select field in the form
const SELECT_FIELD_INDEX: usize = 3;

/// Main application struct
pub struct App {
    /// The signup form being filled in
    pub form: WaitlistForm,
    /// Validation errors from the last submit attempt
    pub errors: ValidationErrors,
    /// Submission lifecycle; drives which screen renders
    pub submission: SubmissionState,
    /// Notification client for the email service
    notifier: Box<dyn NotificationClient>,
    /// Email service identifiers from the environment
    config: EmailConfig,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance with the real email client
    pub fn new(config: EmailConfig) -> Self {
        let notifier = Box::new(EmailJsClient::new(&config.public_key));
        Self::with_notifier(config, notifier)
    }

    /// Create a new App instance with an injected notification client
    pub fn with_notifier(config: EmailConfig, notifier: Box<dyn NotificationClient>) -> Self {
        Self {
            form: WaitlistForm::new(),
            errors: ValidationErrors::default(),
            submission: SubmissionState::default(),
            notifier,
            config,
            quit: false,
        }
    }

    /// Check if the app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Quit shortcuts work from any screen
        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.quit = true;
            return Ok(());
        }

        // Confirmation screen is terminal; only quitting remains
        if self.submission.is_submitted() {
            if key.code == KeyCode::Char('q') {
                self.quit = true;
            }
            return Ok(());
        }

        let on_submit_row = self.form.is_submit_row_active();
        let on_select = self.form.active_field_index == SELECT_FIELD_INDEX;

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.form.prev_field(),
            // Submit from anywhere with Ctrl+S
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.begin_submit();
            }
            KeyCode::Enter if on_submit_row => self.begin_submit(),
            // Enter on a field advances to the next one
            KeyCode::Enter => self.form.next_field(),
            KeyCode::Left if on_select => self.form.current_otp.prev_option(),
            KeyCode::Right if on_select => self.form.current_otp.next_option(),
            KeyCode::Char(' ') if on_select => self.form.current_otp.next_option(),
            KeyCode::Char(c) if !on_submit_row => self.form.get_active_field_mut().push_char(c),
            KeyCode::Backspace if !on_submit_row => self.form.get_active_field_mut().pop_char(),
            _ => {}
        }
        Ok(())
    }

    /// Validate the form and, if valid, enter the `Submitting` state.
    ///
    /// Invalid input aborts silently before any network call; the updated
    /// error map is rendered inline on the next draw. The send itself
    /// happens in [`App::complete_submit`] so the event loop can render
    /// the busy state first. A no-op while a send is in flight or after
    /// the terminal `Submitted` state is reached.
    pub fn begin_submit(&mut self) {
        if self.submission.is_submitting() || self.submission.is_submitted() {
            return;
        }

        self.errors = self.form.validate();
        if !self.errors.is_empty() {
            return;
        }

        self.submission = transition(
            std::mem::take(&mut self.submission),
            SubmissionEvent::Started,
        );
    }

    /// Perform the send started by [`App::begin_submit`].
    ///
    /// A no-op unless a send is pending; at most one is ever in flight.
    pub async fn complete_submit(&mut self) {
        if !self.submission.is_submitting() {
            return;
        }

        let request = self.form.to_request();
        let result = self
            .notifier
            .send(
                &self.config.service_id,
                &self.config.template_id,
                request.template_params(),
            )
            .await;

        let event = match result {
            Ok(()) => SubmissionEvent::Succeeded,
            Err(err) => {
                tracing::error!(error = %err, "waitlist submission failed");
                SubmissionEvent::Failed(SUBMIT_FAILED_MESSAGE.to_string())
            }
        };
        self.submission = transition(std::mem::take(&mut self.submission), event);
    }
}
