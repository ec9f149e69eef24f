use std::{fmt, time::Duration};

use thiserror::Error;

/// How long the confirmation message stays up before the form comes back empty.
pub const CONFIRMATION_DELAY: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// Name shown to visitors of the page.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "nombre",
            Field::Email => "email",
            Field::Message => "mensaje",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// First required field that is blank, if any.
    pub fn first_missing(&self) -> Option<Field> {
        Field::ALL
            .into_iter()
            .find(|f| self.get(*f).trim().is_empty())
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.into_iter().all(|f| self.get(f).is_empty())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("required field is empty: {0}")]
    MissingField(Field),
    #[error("message already sent")]
    AlreadyConfirmed,
    #[error("message could not be sent: {0}")]
    Rejected(String),
}

impl SubmitError {
    /// Message for the visitor, in the page's language. `Display` stays for logs.
    pub fn notice(&self) -> String {
        match self {
            SubmitError::MissingField(field) => {
                format!("Completa el campo {}.", field.label())
            }
            SubmitError::AlreadyConfirmed => "Tu mensaje ya fue enviado.".to_string(),
            SubmitError::Rejected(_) => {
                "No se pudo enviar el mensaje. Inténtalo de nuevo más tarde.".to_string()
            }
        }
    }
}

/// Receives a completed draft. Implementations deliver it somewhere, or pretend to.
pub trait Submitter {
    fn submit(&self, draft: &ContactDraft) -> Result<(), SubmitError>;
}

/// Accepts every draft without sending it anywhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSubmitter;

impl Submitter for LocalSubmitter {
    fn submit(&self, draft: &ContactDraft) -> Result<(), SubmitError> {
        log::info!(
            "contact form submitted locally ({} chars)",
            draft.message.chars().count()
        );
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Editing,
    Confirmed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    draft: ContactDraft,
    phase: FormPhase,
    error: Option<SubmitError>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_confirmed(&self) -> bool {
        self.phase == FormPhase::Confirmed
    }

    /// Error from the last failed submission, cleared by the next edit.
    pub fn error(&self) -> Option<&SubmitError> {
        self.error.as_ref()
    }

    /// Update one field. Ignored while the confirmation is showing.
    pub fn edit(&mut self, field: Field, value: impl Into<String>) -> bool {
        if self.is_confirmed() {
            return false;
        }
        self.draft.set(field, value);
        self.error = None;
        true
    }

    /// Hand the draft to `submitter` and switch to the confirmation on success.
    /// The draft is kept until [`ContactForm::reset`].
    pub fn submit<S: Submitter + ?Sized>(&mut self, submitter: &S) -> Result<(), SubmitError> {
        if self.is_confirmed() {
            return Err(SubmitError::AlreadyConfirmed);
        }
        let res = match self.draft.first_missing() {
            Some(field) => Err(SubmitError::MissingField(field)),
            None => submitter.submit(&self.draft),
        };
        match res {
            Ok(()) => {
                self.phase = FormPhase::Confirmed;
                self.error = None;
                Ok(())
            }
            Err(e) => {
                self.error = Some(e.clone());
                Err(e)
            }
        }
    }

    /// Leave the confirmation and start over with an empty draft.
    pub fn reset(&mut self) {
        self.phase = FormPhase::Editing;
        self.draft = ContactDraft::default();
        self.error = None;
    }
}
