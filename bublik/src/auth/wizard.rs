use crate::models::{Identity, is_valid_email, normalize_username};

/// Number of digits in a verification code.
pub const CODE_LENGTH: usize = 6;

/// Keeps ASCII digits only, truncated to [`CODE_LENGTH`].
pub fn sanitize_code(input: &str) -> String {
    input
        .chars()
        .filter(char::is_ascii_digit)
        .take(CODE_LENGTH)
        .collect()
}

/// True iff the input holds exactly [`CODE_LENGTH`] digits once everything
/// else is stripped.
pub fn is_complete_code(input: &str) -> bool {
    input.chars().filter(char::is_ascii_digit).count() == CODE_LENGTH
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStep {
    Email,
    Code,
    Profile,
}

/// Identifies one request handed out by [`AuthWizard::submit`]. The outcome
/// is reported back with the same ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    pub step: AuthStep,
    pub generation: u64,
}

/// Work the wizard hands to its caller when a step is submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthRequest {
    /// Ask the verification service to mail a code.
    SendCode { email: String, ticket: RequestTicket },
    /// Ask the verification service to check the entered code.
    VerifyCode {
        email: String,
        code: String,
        ticket: RequestTicket,
    },
    /// The wizard is finished. Emitted once per wizard.
    Complete(Identity),
}

impl AuthRequest {
    pub fn ticket(&self) -> Option<RequestTicket> {
        match self {
            Self::SendCode { ticket, .. } | Self::VerifyCode { ticket, .. } => Some(*ticket),
            Self::Complete(_) => None,
        }
    }
}

/// Three-step sign-in flow: `Email -> Code -> Profile`.
///
/// The wizard never talks to a service itself. [`AuthWizard::submit`] returns
/// the request to run and marks the wizard busy; the caller reports the
/// outcome through [`AuthWizard::resolve`].
#[derive(Debug, Clone)]
pub struct AuthWizard {
    step: AuthStep,
    email: String,
    code: String,
    username: String,
    name: String,
    // Ticket of the in-flight request.
    pending: Option<RequestTicket>,
    // Bumped on every submit and on "change email".
    generation: u64,
    completed: bool,
    error: Option<String>,
}

impl Default for AuthWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthWizard {
    pub fn new() -> Self {
        Self {
            step: AuthStep::Email,
            email: String::new(),
            code: String::new(),
            username: String::new(),
            name: String::new(),
            pending: None,
            generation: 0,
            completed: false,
            error: None,
        }
    }

    pub fn step(&self) -> AuthStep {
        self.step
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
        self.error = None;
    }

    pub fn set_code(&mut self, value: &str) {
        self.code = sanitize_code(value);
        self.error = None;
    }

    pub fn set_username(&mut self, value: &str) {
        self.username = normalize_username(value);
        self.error = None;
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = value.into();
        self.error = None;
    }

    /// Whether the current step's guard is satisfied.
    pub fn can_proceed(&self) -> bool {
        match self.step {
            AuthStep::Email => is_valid_email(&self.email),
            AuthStep::Code => is_complete_code(&self.code),
            AuthStep::Profile => !self.username.is_empty() && !self.name.is_empty(),
        }
    }

    /// Whether the submit control should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.completed && !self.is_busy() && self.can_proceed()
    }

    /// Submits the current step. Returns `None` when the guard fails, a
    /// request is already in flight or the wizard has completed.
    pub fn submit(&mut self) -> Option<AuthRequest> {
        if !self.can_submit() {
            return None;
        }
        self.error = None;
        self.generation += 1;
        let ticket = RequestTicket {
            step: self.step,
            generation: self.generation,
        };
        let request = match self.step {
            AuthStep::Email => AuthRequest::SendCode {
                email: self.email.clone(),
                ticket,
            },
            AuthStep::Code => AuthRequest::VerifyCode {
                email: self.email.clone(),
                code: self.code.clone(),
                ticket,
            },
            AuthStep::Profile => {
                self.completed = true;
                return Some(AuthRequest::Complete(Identity::new(
                    self.email.clone(),
                    self.username.clone(),
                    self.name.clone(),
                )));
            }
        };
        self.pending = Some(ticket);
        Some(request)
    }

    /// Applies the outcome of the request identified by `ticket`.
    ///
    /// Only the latest in-flight request is accepted; results of abandoned or
    /// superseded requests are dropped. Returns whether the result was
    /// applied.
    pub fn resolve(&mut self, ticket: RequestTicket, result: Result<(), String>) -> bool {
        if self.pending != Some(ticket) || self.step != ticket.step {
            tracing::debug!(?ticket, step = ?self.step, "Dropping stale auth result");
            return false;
        }
        self.pending = None;
        match result {
            Ok(()) => {
                self.step = match ticket.step {
                    AuthStep::Email => AuthStep::Code,
                    AuthStep::Code | AuthStep::Profile => AuthStep::Profile,
                };
            }
            Err(error) => {
                self.error = Some(error);
            }
        }
        true
    }

    /// The "change email" back-edge: `Code -> Email`. Any in-flight
    /// verification is abandoned and the entered code is cleared, since a new
    /// code will be mailed.
    pub fn change_email(&mut self) {
        if self.step != AuthStep::Code {
            return;
        }
        self.step = AuthStep::Email;
        self.code.clear();
        self.generation += 1;
        self.pending = None;
        self.error = None;
    }

    /// Reports a failure to hand the completed identity over, re-enabling
    /// the profile step.
    pub fn reopen(&mut self, error: impl Into<String>) {
        if self.step == AuthStep::Profile {
            self.completed = false;
            self.error = Some(error.into());
        }
    }
}
