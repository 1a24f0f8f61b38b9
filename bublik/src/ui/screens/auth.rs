use std::sync::Arc;

use iced::widget::{Space, button, column, container, row, text, text_input};
use iced::{Alignment, Element, Length, Task, Theme, alignment};
use tokio::sync::Mutex as TokioMutex;

use crate::auth::{AuthRequest, AuthStep, AuthWizard, RequestTicket};
use crate::config::ConfigManager;
use crate::models::Identity;
use crate::storage::Storage;
use crate::ui::AppContext;
use crate::ui::core::{Screen, ScreenCommand, ScreenType};
use crate::ui::theme::{colors, styles};

/// Sign-in screen: drives an [`AuthWizard`] through email, code and profile
/// and hands the finished identity to the app.
/// - The proceed button stays disabled until the step's guard holds.
/// - Requests to the verification service run as tasks; their results come
///   back as `StepResolved`.
pub struct AuthScreen {
    wizard: AuthWizard,
}

/// Messages emitted by the auth screen.
#[derive(Debug, Clone)]
pub enum AuthMessage {
    EmailChanged(String),
    CodeChanged(String),
    NameChanged(String),
    UsernameChanged(String),
    /// User pressed the proceed button or hit Enter.
    Submit,
    /// "Change email" on the code step.
    ChangeEmail,
    /// Outcome of the verification request with the given ticket.
    StepResolved(RequestTicket, Result<(), String>),
    /// Outcome of persisting the finished identity.
    IdentitySaved(Result<Identity, String>),
}

impl Default for AuthScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthScreen {
    pub fn new() -> Self {
        Self {
            wizard: AuthWizard::new(),
        }
    }

    pub fn wizard(&self) -> &AuthWizard {
        &self.wizard
    }

    fn header(title: &str, subtitle: String, theme: &Theme) -> Element<'static, AuthMessage> {
        column![
            text(title.to_string()).size(22),
            text(subtitle).size(14).color(colors::text_secondary(theme)),
        ]
        .spacing(4)
        .into()
    }

    fn proceed_button<'a>(&self, idle: &'a str, busy: &'a str) -> Element<'a, AuthMessage> {
        let label = if self.wizard.is_busy() { busy } else { idle };
        button(
            container(text(label).size(16))
                .center_x(Length::Fill)
                .padding([2, 0]),
        )
        .width(Length::Fill)
        .padding([10, 20])
        .style(button::primary)
        .on_press_maybe(self.wizard.can_submit().then_some(AuthMessage::Submit))
        .into()
    }

    fn email_step(&self, theme: &Theme) -> Element<'_, AuthMessage> {
        column![
            Self::header(
                "Sign in or register",
                "Enter your email to sign in".to_string(),
                theme
            ),
            text_input("email@example.com", self.wizard.email())
                .on_input(AuthMessage::EmailChanged)
                .on_submit(AuthMessage::Submit)
                .padding(10)
                .size(16),
            self.proceed_button("Get code", "Sending..."),
        ]
        .spacing(12)
        .into()
    }

    fn code_step(&self, theme: &Theme) -> Element<'_, AuthMessage> {
        column![
            Self::header(
                "Check your inbox",
                format!("We sent a code to {}", self.wizard.email()),
                theme
            ),
            text_input("000000", self.wizard.code())
                .on_input(AuthMessage::CodeChanged)
                .on_submit(AuthMessage::Submit)
                .padding(10)
                .size(24)
                .align_x(alignment::Horizontal::Center),
            self.proceed_button("Confirm", "Checking..."),
            button(
                container(text("Change email").size(14))
                    .center_x(Length::Fill)
            )
            .width(Length::Fill)
            .padding([8, 20])
            .style(button::text)
            .on_press(AuthMessage::ChangeEmail),
        ]
        .spacing(12)
        .into()
    }

    fn profile_step(&self, theme: &Theme) -> Element<'_, AuthMessage> {
        column![
            Self::header(
                "Create your profile",
                "How should people see you in BublikChat?".to_string(),
                theme
            ),
            text("Name").size(14),
            text_input("Your name", self.wizard.name())
                .on_input(AuthMessage::NameChanged)
                .padding(10)
                .size(16),
            text("Username").size(14),
            row![
                text("@").size(16).color(colors::text_secondary(theme)),
                text_input("username", self.wizard.username())
                    .on_input(AuthMessage::UsernameChanged)
                    .on_submit(AuthMessage::Submit)
                    .padding(10)
                    .size(16),
            ]
            .spacing(6)
            .align_y(Alignment::Center),
            Space::with_height(4),
            self.proceed_button("Start chatting", "Saving..."),
        ]
        .spacing(8)
        .into()
    }
}

impl Screen for AuthScreen {
    type Message = AuthMessage;

    fn update(&mut self, message: AuthMessage, ctx: &mut AppContext) -> ScreenCommand<AuthMessage> {
        match message {
            AuthMessage::EmailChanged(value) => {
                self.wizard.set_email(value);
                ScreenCommand::None
            }
            AuthMessage::CodeChanged(value) => {
                self.wizard.set_code(&value);
                ScreenCommand::None
            }
            AuthMessage::NameChanged(value) => {
                self.wizard.set_name(value);
                ScreenCommand::None
            }
            AuthMessage::UsernameChanged(value) => {
                self.wizard.set_username(&value);
                ScreenCommand::None
            }
            AuthMessage::ChangeEmail => {
                self.wizard.change_email();
                ScreenCommand::None
            }
            AuthMessage::Submit => {
                let Some(request) = self.wizard.submit() else {
                    return ScreenCommand::None;
                };
                let verification = ctx.verification.clone();
                let task = match request {
                    AuthRequest::SendCode { email, ticket } => Task::perform(
                        async move {
                            verification
                                .send_code(&email)
                                .await
                                .map_err(|e| format!("Failed to send code: {e}"))
                        },
                        move |result| AuthMessage::StepResolved(ticket, result),
                    ),
                    AuthRequest::VerifyCode {
                        email,
                        code,
                        ticket,
                    } => Task::perform(
                        async move {
                            verification
                                .verify_code(&email, &code)
                                .await
                                .map_err(|e| format!("Failed to verify code: {e}"))
                        },
                        move |result| AuthMessage::StepResolved(ticket, result),
                    ),
                    AuthRequest::Complete(identity) => Task::perform(
                        persist_identity(ctx.storage.clone(), identity),
                        AuthMessage::IdentitySaved,
                    ),
                };
                ScreenCommand::Message(task)
            }
            AuthMessage::StepResolved(ticket, result) => {
                self.wizard.resolve(ticket, result);
                ScreenCommand::None
            }
            AuthMessage::IdentitySaved(result) => match result {
                Ok(identity) => {
                    tracing::info!(username = ?identity.username, "Signed in");
                    ctx.identity = Some(identity);
                    ScreenCommand::ChangeScreen(ScreenType::Chats)
                }
                Err(error) => {
                    tracing::error!(%error, "Cannot store identity");
                    self.wizard.reopen(error);
                    ScreenCommand::None
                }
            },
        }
    }

    fn view<'a>(&'a self, ctx: &'a AppContext) -> Element<'a, AuthMessage> {
        let theme = ctx.theme();
        let step = match self.wizard.step() {
            AuthStep::Email => self.email_step(&theme),
            AuthStep::Code => self.code_step(&theme),
            AuthStep::Profile => self.profile_step(&theme),
        };
        let mut card = column![step].spacing(10);
        if let Some(err) = self.wizard.error() {
            card = card.push(
                container(text(err).size(14).color(colors::text_error(&theme)))
                    .padding([4, 0])
                    .width(Length::Fill)
                    .style(styles::error_text),
            );
        }
        let content = column![
            text("BublikChat").size(40),
            text("A modern messenger")
                .size(14)
                .color(colors::text_secondary(&theme)),
            Space::with_height(24),
            container(card)
                .padding(24)
                .width(Length::Fill)
                .style(styles::card),
            Space::with_height(16),
            text("By continuing you accept the terms of use")
                .size(12)
                .color(colors::text_muted(&theme)),
        ]
        .spacing(6)
        .align_x(Alignment::Center)
        .width(Length::Fixed(420.0));
        container(content)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }
}

/// Writes the finished identity to the persisted slot. Without storage the
/// identity only lives for this session.
async fn persist_identity(
    storage: Option<Arc<TokioMutex<Storage>>>,
    identity: Identity,
) -> Result<Identity, String> {
    match storage {
        Some(storage) => {
            ConfigManager::new(storage)
                .store_identity(&identity)
                .await
                .map_err(|e| format!("Failed to save profile: {e}"))?;
        }
        None => {
            tracing::warn!("Storage unavailable, identity is kept for this session only");
        }
    }
    Ok(identity)
}
