//! Add/edit modal forms.
//!
//! A form moves `Idle -> Submitting -> Closed` on success, or back to `Idle`
//! with an error on failure so the user can retry without retyping.

use std::fmt;

use thiserror::Error;

use super::Ui;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    Submitting,
    Closed,
}

/// A draft that can be turned into an API payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Required field is empty: {0}")]
    MissingField(&'static str),
    #[error("Field is out of range: {0}")]
    OutOfRange(&'static str),
}

impl DraftError {
    pub fn message_key(&self) -> &'static str {
        match self {
            DraftError::MissingField(_) => "form_required_fields",
            DraftError::OutOfRange(_) => "form_out_of_range",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormState<D> {
    draft: D,
    phase: FormPhase,
    error: Option<String>,
}

impl<D: Clone> FormState<D> {
    pub fn open(draft: D) -> Self {
        Self {
            draft,
            phase: FormPhase::Idle,
            error: None,
        }
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    /// Inputs are read-only while a submission is in flight.
    pub fn draft_mut(&mut self) -> Option<&mut D> {
        match self.phase {
            FormPhase::Idle => Some(&mut self.draft),
            _ => None,
        }
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_open(&self) -> bool {
        self.phase != FormPhase::Closed
    }

    pub fn is_submit_enabled(&self) -> bool {
        self.phase == FormPhase::Idle
    }

    /// Locks the form and hands out the draft to submit. `None` when a
    /// submission is already running or the form is closed.
    pub fn begin_submit(&mut self) -> Option<D> {
        if !self.is_submit_enabled() {
            return None;
        }
        self.phase = FormPhase::Submitting;
        self.error = None;
        Some(self.draft.clone())
    }

    /// Closes on success; reopens with the error on failure.
    pub fn settle<T, E: fmt::Display>(&mut self, result: &Result<T, E>) {
        match result {
            Ok(_) => self.phase = FormPhase::Closed,
            Err(e) => self.fail(e.to_string()),
        }
    }

    /// Back to `Idle` with a message, e.g. a draft that did not validate.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.phase = FormPhase::Idle;
        self.error = Some(message.into());
    }

    pub fn close(&mut self) {
        self.phase = FormPhase::Closed;
    }
}

/// A modal as text: title, one `label: value` line per field, the error if
/// any, then the buttons. The submit button turns into "saving" while a
/// submission is in flight.
pub fn render_modal<D: Clone>(
    ui: &Ui<'_>,
    form: &FormState<D>,
    title_key: &str,
    submit_key: &str,
    fields: &[(String, String)],
) -> String {
    if !form.is_open() {
        return String::new();
    }

    let mut lines = vec![ui.t(title_key)];
    lines.extend(fields.iter().map(|(label, value)| format!("{}: {}", label, value)));
    if let Some(error) = form.error() {
        lines.push(format!("! {}", error));
    }
    let submit = match form.phase() {
        FormPhase::Submitting => format!("({})", ui.t("saving")),
        _ => format!("[{}]", ui.t(submit_key)),
    };
    lines.push(format!("{} [{}]", submit, ui.t("cancel")));
    lines.join("\n")
}
