use thiserror::Error;

/// How long the fake submission spins before reporting success.
pub const SEND_DELAY_MS: f64 = 1500.0;
/// How long the success state is shown before the button resets.
pub const SENT_DISPLAY_MS: f64 = 3000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Sent,
}

impl SubmitStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SubmitStatus::Idle => "Send Message",
            SubmitStatus::Sending => "Sending...",
            SubmitStatus::Sent => "✓ Message Sent!",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please enter your name")]
    MissingName,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a message")]
    MissingMessage,
    #[error("A message is already being sent")]
    Busy,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::MissingName);
        }
        if !is_plausible_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail);
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::MissingMessage);
        }
        Ok(())
    }
}

// same bar as <input type="email">: something@something, no whitespace
fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !email.chars().any(char::is_whitespace)
}

/// Simulated submission cycle: Idle -> Sending -> Sent -> Idle.
/// Nothing leaves the browser.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outbox {
    pub form: ContactForm,
    pub status: SubmitStatus,
}

impl Outbox {
    pub fn submit(&mut self) -> Result<(), ContactError> {
        if self.status == SubmitStatus::Sending {
            return Err(ContactError::Busy);
        }
        self.form.validate()?;
        self.status = SubmitStatus::Sending;
        Ok(())
    }

    /// Called when the send delay elapses.
    pub fn delivered(&mut self) {
        if self.status == SubmitStatus::Sending {
            self.status = SubmitStatus::Sent;
            self.form = ContactForm::default();
        }
    }

    /// Called when the success banner times out.
    pub fn acknowledge(&mut self) {
        if self.status == SubmitStatus::Sent {
            self.status = SubmitStatus::Idle;
        }
    }
}
