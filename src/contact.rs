//! Contact form

use thiserror::Error;

use crate::notices::Notice;

/// Errors raised when a contact form submission is rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    /// At least one field is blank.
    #[error("Please fill in all fields!")]
    MissingFields,
}

impl From<&ContactError> for Notice {
    fn from(error: &ContactError) -> Self {
        match error {
            ContactError::MissingFields => Notice::MissingFields,
        }
    }
}

/// The fields of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    /// Sender name
    Name,

    /// Sender email
    Email,

    /// Message subject
    Subject,

    /// Message body
    Message,
}

/// Values entered in the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    /// Sender name
    pub name: String,

    /// Sender email
    pub email: String,

    /// Message subject
    pub subject: String,

    /// Message body
    pub message: String,
}

impl ContactForm {
    /// Current value of `field`.
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    /// Replace the value of `field`.
    pub fn set_field(&mut self, field: ContactField, value: String) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };

        *slot = value;
    }

    /// Checks that every field has a value. Whitespace alone does not count.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError::MissingFields`] if any field is blank.
    pub fn validate(&self) -> Result<(), ContactError> {
        let fields = [&self.name, &self.email, &self.subject, &self.message];

        if fields.iter().any(|field| field.trim().is_empty()) {
            return Err(ContactError::MissingFields);
        }

        Ok(())
    }

    /// Validates the form and returns the notice to show.
    ///
    /// A successful submission clears the form; a rejected one keeps what was typed.
    pub fn submit(&mut self) -> Notice {
        match self.validate() {
            Ok(()) => {
                *self = Self::default();
                Notice::MessageSent
            }
            Err(error) => Notice::from(&error),
        }
    }
}
