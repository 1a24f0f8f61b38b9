use iced::widget::{
    Space, button, column, container, row, scrollable, stack, svg, text, text_input,
};
use iced::{Alignment, Color, Element, Length, Padding, Task, Theme, alignment};

use crate::chat::{ConversationShell, Panel, demo_shell};
use crate::config::ConfigManager;
use crate::contact::{DirectoryEntry, parse_contact_username};
use crate::models::{Chat, ChatId, Message, initials};
use crate::ui::AppContext;
use crate::ui::core::{Screen, ScreenCommand, ScreenType};
use crate::ui::screens::{SettingsMessage, apply_settings, settings_panel};
use crate::ui::theme::{colors, styles};

// SVG Icons
const ADD_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="currentColor">
    <path d="M19 13h-6v6h-2v-6H5v-2h6V5h2v6h6v2z"/>
</svg>"#;

const PROFILE_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="currentColor">
    <path d="M12 12c2.21 0 4-1.79 4-4s-1.79-4-4-4-4 1.79-4 4 1.79 4 4 4zm0 2c-2.67 0-8 1.34-8 4v2h16v-2c0-2.66-5.33-4-8-4z"/>
</svg>"#;

const SETTINGS_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="currentColor">
    <path d="M12 15.5A3.5 3.5 0 0 1 8.5 12 3.5 3.5 0 0 1 12 8.5a3.5 3.5 0 0 1 3.5 3.5 3.5 3.5 0 0 1-3.5 3.5m7.43-2.53c.04-.32.07-.64.07-.97 0-.33-.03-.66-.07-1l2.11-1.63c.19-.15.24-.42.12-.64l-2-3.460c-.12-.22-.39-.3-.61-.22l-2.49 1c-.52-.39-1.06-.73-1.690-.98l-.37-2.65A.506.506 0 0 0 14 2h-4c-.25 0-.46.18-.5.42l-.37 2.65c-.63.25-1.17.59-1.69.98l-2.49-1c-.22-.09-.49 0-.61.22l-2 3.46c-.13.22-.07.49.12.64L4.57 11c-.04.34-.07.67-.07 1 0 .33.03.65.07.97l-2.11 1.66c-.19.15-.25.42-.12.64l2 3.46c.12.22.39.3.61.22l2.49-1.01c.52.4 1.06.74 1.69.99l.37 2.65c.04.24.25.42.5.42h4c.25 0 .46-.18.5-.42l.37-2.65c.63-.26 1.17-.59 1.69-.99l2.49 1.01c.22.08.49 0 .61-.22l2-3.46c.12-.22.07-.49-.12-.64l-2.11-1.66Z"/>
</svg>"#;

const SEND_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="currentColor">
    <path d="M2.01 21L23 12 2.01 3 2 10l15 2-15 2z"/>
</svg>"#;

#[derive(Clone, Debug)]
pub enum ChatListMessage {
    SelectChat(ChatId),
    SearchChanged(String),
    ComposeChanged(String),
    SendMessage,
    TogglePanel(Panel),
    ClosePanel(Panel),
    AddContactInputChanged(String),
    AddContactSubmit,
    ContactResolved(Result<DirectoryEntry, String>),
    Settings(SettingsMessage),
    Logout,
    LoggedOut(Result<(), String>),
    ClearError,
}

/// Main screen: sidebar with the filtered chat list, the open conversation
/// and the optional profile/settings panels. All chat state lives in the
/// wrapped [`ConversationShell`].
pub struct ChatListScreen {
    shell: ConversationShell,
    add_contact_busy: bool,
    add_contact_error: Option<String>,
    global_error: Option<String>,
    messages_scrollable_id: scrollable::Id,
}

impl Default for ChatListScreen {
    fn default() -> Self {
        Self::new(ConversationShell::new())
    }
}

impl ChatListScreen {
    pub fn new(shell: ConversationShell) -> Self {
        Self {
            shell,
            add_contact_busy: false,
            add_contact_error: None,
            global_error: None,
            messages_scrollable_id: scrollable::Id::unique(),
        }
    }

    /// Screen seeded with the demo conversations.
    pub fn with_demo_chats() -> Self {
        Self::new(demo_shell())
    }

    pub fn shell(&self) -> &ConversationShell {
        &self.shell
    }

    fn scroll_to_end(&self) -> Task<ChatListMessage> {
        scrollable::snap_to(
            self.messages_scrollable_id.clone(),
            scrollable::RelativeOffset::END,
        )
    }

    fn icon<'a>(data: &'static str, size: f32, color: Color) -> svg::Svg<'a> {
        svg::Svg::new(svg::Handle::from_memory(data.as_bytes()))
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .style(move |_theme, _status| svg::Style { color: Some(color) })
    }

    fn avatar<'a>(initials: String, size: f32, online: bool) -> Element<'a, ChatListMessage> {
        let circle = container(text(initials).size(size * 0.4))
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .center_x(Length::Fixed(size))
            .center_y(Length::Fixed(size))
            .style(move |t: &Theme| styles::avatar(t));
        if !online {
            return circle.into();
        }
        let dot = container(
            container(Space::new(10, 10)).style(move |t: &Theme| styles::status_online(t)),
        )
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom);
        stack![circle, dot].into()
    }

    fn divider<'a>() -> Element<'a, ChatListMessage> {
        container(Space::with_width(1))
            .height(Length::Fill)
            .style(move |t: &Theme| styles::divider(t))
            .into()
    }

    fn build_left_panel<'a>(&'a self, ctx: &'a AppContext, theme: &Theme) -> Element<'a, ChatListMessage> {
        let icon_color = colors::text_primary(theme);
        let profile_toggle = button(Self::icon(PROFILE_ICON, 20.0, icon_color))
            .on_press(ChatListMessage::TogglePanel(Panel::Profile))
            .padding(4)
            .style(move |t: &Theme, status| styles::button_icon(t, status));
        let add_toggle = button(Self::icon(ADD_ICON, 20.0, icon_color))
            .on_press(ChatListMessage::TogglePanel(Panel::AddContact))
            .padding(4)
            .style(move |t: &Theme, status| styles::button_icon(t, status));

        let header = container(
            column![
                row![
                    text("Messenger").size(20).color(colors::text_primary(theme)),
                    Space::with_width(Length::Fill),
                    add_toggle,
                    profile_toggle,
                ]
                .spacing(4)
                .align_y(Alignment::Center),
                text_input("Search...", self.shell.search())
                    .on_input(ChatListMessage::SearchChanged)
                    .padding(8)
                    .size(14),
            ]
            .spacing(10),
        )
        .width(Length::Fill)
        .padding(Padding::from([12, 12]))
        .style(move |t: &Theme| styles::panel_header(t));

        let show_online = ctx.settings.show_online_status;
        let filtered = self.shell.filtered_chats();
        let list: Element<'a, ChatListMessage> = if filtered.is_empty() {
            container(
                text("No chats found")
                    .size(14)
                    .color(colors::text_secondary(theme)),
            )
            .padding(16)
            .into()
        } else {
            filtered
                .into_iter()
                .fold(column![].spacing(2), |col, chat| {
                    col.push(self.build_chat_item(chat, show_online, theme))
                })
                .into()
        };

        let panel = column![
            header,
            container(Space::with_height(1))
                .width(Length::Fill)
                .style(move |t: &Theme| styles::divider(t)),
            scrollable(container(list).padding([4, 4])).height(Length::Fill),
        ]
        .width(Length::Fixed(320.0))
        .spacing(0);
        container(panel)
            .width(Length::Fixed(320.0))
            .height(Length::Fill)
            .into()
    }

    fn build_chat_item<'a>(
        &self,
        chat: &'a Chat,
        show_online: bool,
        theme: &Theme,
    ) -> Element<'a, ChatListMessage> {
        let selected = self.shell.selected_id() == Some(chat.id);
        let badge: Element<'a, ChatListMessage> = if chat.unread > 0 {
            container(text(chat.unread.to_string()).size(11))
                .padding([2, 7])
                .style(move |t: &Theme| styles::unread_badge(t))
                .into()
        } else {
            Space::with_height(0).into()
        };
        let content = row![
            Self::avatar(chat.initials(), 44.0, show_online && chat.online),
            column![
                text(&chat.name).size(15),
                text(&chat.last_message)
                    .size(13)
                    .color(colors::text_secondary(theme)),
            ]
            .spacing(2)
            .width(Length::Fill),
            column![
                text(&chat.time).size(11).color(colors::text_muted(theme)),
                badge,
            ]
            .spacing(4)
            .align_x(Alignment::End),
        ]
        .spacing(10)
        .align_y(Alignment::Center);
        button(content)
            .on_press(ChatListMessage::SelectChat(chat.id))
            .width(Length::Fill)
            .padding(8)
            .style(move |t: &Theme, status| styles::chat_item(t, status, selected))
            .into()
    }

    fn build_right_panel<'a>(&'a self, ctx: &'a AppContext, theme: &Theme) -> Element<'a, ChatListMessage> {
        let Some(chat) = self.shell.selected_chat() else {
            return container(
                text("Select a chat to start messaging")
                    .size(16)
                    .color(colors::text_secondary(theme)),
            )
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into();
        };

        let show_online = ctx.settings.show_online_status;
        let mut title = column![text(&chat.name).size(18)].spacing(2);
        if show_online {
            let presence_color = if chat.online {
                colors::text_success(theme)
            } else {
                colors::text_secondary(theme)
            };
            title = title.push(text(chat.presence_label()).size(12).color(presence_color));
        }
        let header = container(
            row![
                Self::avatar(chat.initials(), 40.0, show_online && chat.online),
                title,
            ]
            .spacing(12)
            .align_y(Alignment::Center),
        )
        .width(Length::Fill)
        .padding(Padding::from([10, 16]))
        .style(move |t: &Theme| styles::panel_header(t));

        let bubbles = self
            .shell
            .selected_messages()
            .iter()
            .fold(column![].spacing(8).padding([12, 16]), |col, message| {
                col.push(Self::build_message(message))
            });
        let messages = scrollable(bubbles)
            .id(self.messages_scrollable_id.clone())
            .height(Length::Fill)
            .width(Length::Fill);

        let can_send = !self.shell.compose().trim().is_empty();
        let icon_color = colors::text_primary(theme);
        let compose = container(
            row![
                text_input("Write a message...", self.shell.compose())
                    .on_input(ChatListMessage::ComposeChanged)
                    .on_submit(ChatListMessage::SendMessage)
                    .padding(10)
                    .size(15),
                button(Self::icon(SEND_ICON, 20.0, icon_color))
                    .on_press_maybe(can_send.then_some(ChatListMessage::SendMessage))
                    .padding(8)
                    .style(move |t: &Theme, status| styles::button_icon(t, status)),
            ]
            .spacing(8)
            .align_y(Alignment::Center),
        )
        .width(Length::Fill)
        .padding(Padding::from([10, 16]))
        .style(move |t: &Theme| styles::panel_header(t));

        column![header, messages, compose]
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn build_message<'a>(message: &'a Message) -> Element<'a, ChatListMessage> {
        let mine = message.is_mine();
        let bubble = container(
            column![text(&message.text).size(15), text(&message.time).size(11)]
                .spacing(2)
                .align_x(if mine { Alignment::End } else { Alignment::Start }),
        )
        .padding([8, 12])
        .max_width(420.0)
        .style(if mine {
            styles::message_outgoing
        } else {
            styles::message_incoming
        });
        if mine {
            row![Space::with_width(Length::Fill), bubble].into()
        } else {
            row![bubble, Space::with_width(Length::Fill)].into()
        }
    }

    fn build_profile_panel<'a>(&'a self, ctx: &'a AppContext, theme: &Theme) -> Element<'a, ChatListMessage> {
        let header = container(
            row![
                text("Profile").size(20),
                Space::with_width(Length::Fill),
                button(text("×").size(16))
                    .on_press(ChatListMessage::ClosePanel(Panel::Profile))
                    .padding(4)
                    .style(move |t: &Theme, status| styles::button_icon(t, status)),
            ]
            .align_y(Alignment::Center),
        )
        .width(Length::Fill)
        .padding(Padding::from([12, 16]))
        .style(move |t: &Theme| styles::panel_header(t));

        let details: Element<'a, ChatListMessage> = match &ctx.identity {
            Some(identity) => column![
                Self::avatar(initials(&identity.name), 72.0, false),
                text(&identity.name).size(18),
                text(identity.handle())
                    .size(14)
                    .color(colors::text_secondary(theme)),
                text(&identity.email)
                    .size(13)
                    .color(colors::text_muted(theme)),
            ]
            .spacing(6)
            .align_x(Alignment::Center)
            .into(),
            None => column![
                Self::avatar("Me".to_string(), 72.0, false),
                text("Not signed in")
                    .size(14)
                    .color(colors::text_secondary(theme)),
            ]
            .spacing(6)
            .align_x(Alignment::Center)
            .into(),
        };

        let icon_color = colors::text_primary(theme);
        let settings_button = button(
            row![
                Self::icon(SETTINGS_ICON, 18.0, icon_color),
                text("Settings").size(14),
            ]
            .spacing(8)
            .align_y(Alignment::Center),
        )
        .on_press(ChatListMessage::TogglePanel(Panel::Settings))
        .width(Length::Fill)
        .padding([8, 12])
        .style(button::secondary);
        let logout_button = button(text("Log out").size(14))
            .on_press(ChatListMessage::Logout)
            .width(Length::Fill)
            .padding([8, 12])
            .style(button::danger);

        let mut body = column![
            container(details).center_x(Length::Fill),
            Space::with_height(16),
            settings_button,
            logout_button,
        ]
        .spacing(8);
        if let Some(err) = &self.global_error {
            body = body.push(
                button(text(err).size(12).color(colors::text_error(theme)))
                    .on_press(ChatListMessage::ClearError)
                    .padding(4)
                    .style(button::text),
            );
        }

        container(column![header, container(body).padding(16)])
            .width(Length::Fixed(280.0))
            .height(Length::Fill)
            .style(move |t: &Theme| styles::side_panel(t))
            .into()
    }

    fn build_add_contact_modal(&self, theme: &Theme) -> Element<'_, ChatListMessage> {
        let can_submit = !self.add_contact_busy
            && !parse_contact_username(self.shell.add_contact_input()).is_empty();
        let modal_dialog = container(
            column![
                row![
                    text("Add Contact")
                        .size(20)
                        .color(colors::text_primary(theme)),
                    Space::with_width(Length::Fill),
                    button(text("×").size(20))
                        .on_press(ChatListMessage::ClosePanel(Panel::AddContact))
                        .padding(4)
                        .style(button::text)
                ]
                .align_y(Alignment::Center),
                Space::with_height(16),
                container(
                    text("Username")
                        .size(14)
                        .color(colors::text_secondary(theme))
                )
                .padding(Padding::ZERO.bottom(4)),
                text_input("@username", self.shell.add_contact_input())
                    .on_input(ChatListMessage::AddContactInputChanged)
                    .on_submit(ChatListMessage::AddContactSubmit)
                    .padding(10)
                    .size(16),
                if let Some(err) = &self.add_contact_error {
                    Element::from(
                        container(text(err).size(12).color(colors::text_error(theme))).padding(4),
                    )
                } else {
                    Element::from(Space::with_height(0))
                },
                Space::with_height(16),
                row![
                    Space::with_width(Length::Fill),
                    button(text("Cancel").size(14))
                        .on_press(ChatListMessage::ClosePanel(Panel::AddContact))
                        .padding([8, 16])
                        .style(button::secondary),
                    Space::with_width(8),
                    button(
                        text(if self.add_contact_busy {
                            "Searching..."
                        } else {
                            "Add Contact"
                        })
                        .size(14)
                    )
                    .on_press_maybe(can_submit.then_some(ChatListMessage::AddContactSubmit))
                    .padding([8, 16])
                    .style(button::primary)
                ]
            ]
            .spacing(8),
        )
        .width(Length::Fixed(420.0))
        .padding(24)
        .style(move |t: &Theme| styles::card(t));

        container(
            container(modal_dialog)
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |t: &Theme| styles::modal_overlay(t))
        .into()
    }
}

impl Screen for ChatListScreen {
    type Message = ChatListMessage;

    fn update(
        &mut self,
        message: ChatListMessage,
        ctx: &mut AppContext,
    ) -> ScreenCommand<ChatListMessage> {
        match message {
            ChatListMessage::SelectChat(id) => {
                if self.shell.select_chat(id) {
                    return ScreenCommand::Message(self.scroll_to_end());
                }
                ScreenCommand::None
            }
            ChatListMessage::SearchChanged(query) => {
                self.shell.set_search(query);
                ScreenCommand::None
            }
            ChatListMessage::ComposeChanged(value) => {
                self.shell.set_compose(value);
                ScreenCommand::None
            }
            ChatListMessage::SendMessage => match self.shell.send_compose() {
                Some(_) => ScreenCommand::Message(self.scroll_to_end()),
                None => ScreenCommand::None,
            },
            ChatListMessage::TogglePanel(panel) => {
                self.shell.toggle_panel(panel);
                if panel == Panel::AddContact {
                    self.add_contact_error = None;
                }
                ScreenCommand::None
            }
            ChatListMessage::ClosePanel(panel) => {
                self.shell.set_panel(panel, false);
                ScreenCommand::None
            }
            ChatListMessage::AddContactInputChanged(value) => {
                self.shell.set_add_contact_input(value);
                self.add_contact_error = None;
                ScreenCommand::None
            }
            ChatListMessage::AddContactSubmit => {
                let username = parse_contact_username(self.shell.add_contact_input());
                if username.is_empty() || self.add_contact_busy {
                    return ScreenCommand::None;
                }
                self.add_contact_busy = true;
                let directory = ctx.directory.clone();
                let lookup = Task::perform(
                    async move {
                        directory
                            .lookup(&username)
                            .await
                            .map_err(|e| format!("Cannot find user: {e}"))
                    },
                    ChatListMessage::ContactResolved,
                );
                ScreenCommand::Message(lookup)
            }
            ChatListMessage::ContactResolved(result) => {
                self.add_contact_busy = false;
                match result {
                    Ok(entry) => {
                        self.shell.insert_contact(entry);
                        ScreenCommand::Message(self.scroll_to_end())
                    }
                    Err(error) => {
                        tracing::warn!(%error, "Contact lookup failed");
                        self.add_contact_error = Some(error);
                        ScreenCommand::None
                    }
                }
            }
            ChatListMessage::Settings(SettingsMessage::Close) => {
                self.shell.set_panel(Panel::Settings, false);
                ScreenCommand::None
            }
            ChatListMessage::Settings(message) => {
                apply_settings(&mut ctx.settings, &message);
                ScreenCommand::None
            }
            ChatListMessage::Logout => {
                let config = ctx.config();
                ScreenCommand::Message(Task::perform(
                    forget_identity(config),
                    ChatListMessage::LoggedOut,
                ))
            }
            ChatListMessage::LoggedOut(result) => match result {
                Ok(()) => {
                    if let Some(identity) = ctx.identity.take() {
                        tracing::info!(username = ?identity.username, "Logged out");
                    }
                    ScreenCommand::ChangeScreen(ScreenType::Auth)
                }
                Err(error) => {
                    tracing::error!(%error, "Cannot clear stored identity");
                    self.global_error = Some(error);
                    ScreenCommand::None
                }
            },
            ChatListMessage::ClearError => {
                self.global_error = None;
                ScreenCommand::None
            }
        }
    }

    fn view<'a>(&'a self, ctx: &'a AppContext) -> Element<'a, ChatListMessage> {
        let theme = ctx.theme();
        let mut layout = row![
            self.build_left_panel(ctx, &theme),
            Self::divider(),
            self.build_right_panel(ctx, &theme),
        ]
        .spacing(0)
        .align_y(Alignment::Start);
        if self.shell.is_open(Panel::Profile) {
            layout = layout
                .push(Self::divider())
                .push(self.build_profile_panel(ctx, &theme));
        }
        if self.shell.is_open(Panel::Settings) {
            layout = layout
                .push(Self::divider())
                .push(settings_panel(&ctx.settings, &theme).map(ChatListMessage::Settings));
        }

        let main_content: Element<'a, ChatListMessage> = container(layout)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |t: &Theme| container::Style {
                background: Some(iced::Background::Color(colors::background_base(t))),
                ..Default::default()
            })
            .into();

        if self.shell.is_open(Panel::AddContact) {
            let modal = self.build_add_contact_modal(&theme);
            stack![main_content, modal].into()
        } else {
            main_content
        }
    }
}

/// Clears the persisted identity slot. Without storage there is nothing to
/// clear.
async fn forget_identity(config: Option<ConfigManager>) -> Result<(), String> {
    match config {
        Some(config) => config
            .clear_identity()
            .await
            .map_err(|e| format!("Failed to log out: {e}")),
        None => Ok(()),
    }
}
