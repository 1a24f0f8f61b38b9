//! Theme management for the bublik UI
//!
//! Light and dark palettes plus the container/button styles shared by the
//! screens.

use iced::widget::{button, container};
use iced::{Color, Theme};

/// Theme preference derived from the in-memory settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    pub fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    pub fn to_iced_theme(self) -> Theme {
        match self {
            Self::Light => Theme::CatppuccinLatte,
            Self::Dark => Theme::CatppuccinMocha,
        }
    }
}

/// Custom styles for various UI components
pub mod styles {
    use super::*;

    /// Style for the panel divider
    pub fn divider(theme: &Theme) -> container::Style {
        let palette = theme.extended_palette();
        container::Style {
            background: Some(iced::Background::Color(palette.background.strong.color)),
            ..Default::default()
        }
    }

    /// Style for panel headers (sidebar, chat header, side panels)
    pub fn panel_header(theme: &Theme) -> container::Style {
        let palette = theme.extended_palette();
        container::Style {
            background: Some(iced::Background::Color(palette.background.weak.color)),
            ..Default::default()
        }
    }

    /// Style for side panels (profile, settings)
    pub fn side_panel(theme: &Theme) -> container::Style {
        let palette = theme.extended_palette();
        container::Style {
            background: Some(iced::Background::Color(palette.background.base.color)),
            border: iced::Border {
                color: palette.background.strong.color,
                width: 1.0,
                radius: 0.0.into(),
            },
            ..Default::default()
        }
    }

    /// Style for card containers (auth form, modals)
    pub fn card(theme: &Theme) -> container::Style {
        let palette = theme.extended_palette();
        container::Style {
            background: Some(iced::Background::Color(palette.background.weak.color)),
            border: iced::Border {
                color: palette.background.strong.color,
                width: 1.0,
                radius: 8.0.into(),
            },
            ..Default::default()
        }
    }

    /// Style for modal overlay background
    pub fn modal_overlay(theme: &Theme) -> container::Style {
        let palette = theme.extended_palette();
        let mut base_color = palette.background.base.color;
        base_color.a = 0.85;
        container::Style {
            background: Some(iced::Background::Color(base_color)),
            ..Default::default()
        }
    }

    /// Round avatar placeholder holding the initials
    pub fn avatar(theme: &Theme) -> container::Style {
        let palette = theme.extended_palette();
        container::Style {
            background: Some(iced::Background::Color(palette.primary.base.color)),
            text_color: Some(palette.primary.base.text),
            border: iced::Border {
                radius: 24.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Presence dot on top of an avatar
    pub fn status_online(theme: &Theme) -> container::Style {
        let palette = theme.extended_palette();
        container::Style {
            background: Some(iced::Background::Color(palette.success.strong.color)),
            border: iced::Border {
                color: palette.background.base.color,
                width: 2.0,
                radius: 6.0.into(),
            },
            ..Default::default()
        }
    }

    /// Unread counter badge
    pub fn unread_badge(theme: &Theme) -> container::Style {
        let palette = theme.extended_palette();
        container::Style {
            background: Some(iced::Background::Color(palette.primary.strong.color)),
            text_color: Some(palette.primary.strong.text),
            border: iced::Border {
                radius: 10.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Style for a chat entry in the sidebar
    pub fn chat_item(theme: &Theme, status: button::Status, selected: bool) -> button::Style {
        let palette = theme.extended_palette();
        let background = match (selected, status) {
            (true, _) => palette.primary.weak.color,
            (false, button::Status::Hovered) => palette.background.weak.color,
            (false, button::Status::Pressed) => palette.background.strong.color,
            (false, _) => Color::TRANSPARENT,
        };
        button::Style {
            background: Some(iced::Background::Color(background)),
            text_color: palette.background.base.text,
            border: iced::Border {
                radius: 6.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Style for incoming message bubble
    pub fn message_incoming(theme: &Theme) -> container::Style {
        let palette = theme.extended_palette();
        container::Style {
            background: Some(iced::Background::Color(palette.background.strong.color)),
            border: iced::Border {
                radius: 12.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Style for outgoing message bubble
    pub fn message_outgoing(theme: &Theme) -> container::Style {
        let palette = theme.extended_palette();
        container::Style {
            background: Some(iced::Background::Color(palette.primary.base.color)),
            border: iced::Border {
                radius: 12.0.into(),
                ..Default::default()
            },
            text_color: Some(palette.primary.base.text),
            ..Default::default()
        }
    }

    /// Style for error messages
    pub fn error_text(theme: &Theme) -> container::Style {
        let palette = theme.extended_palette();
        container::Style {
            text_color: Some(palette.danger.strong.color),
            ..Default::default()
        }
    }

    /// Style for icon buttons (transparent background)
    pub fn button_icon(theme: &Theme, status: button::Status) -> button::Style {
        let palette = theme.extended_palette();
        let background = match status {
            button::Status::Active | button::Status::Disabled => Color::TRANSPARENT,
            button::Status::Hovered => palette.background.weak.color,
            button::Status::Pressed => palette.background.strong.color,
        };
        let text_color = match status {
            button::Status::Disabled => palette.background.strong.text,
            _ => palette.background.base.text,
        };
        button::Style {
            background: Some(iced::Background::Color(background)),
            text_color,
            border: iced::Border {
                radius: 4.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Helper functions to get colors from theme
pub mod colors {
    use super::*;

    pub fn text_primary(theme: &Theme) -> Color {
        theme.extended_palette().background.base.text
    }

    pub fn text_secondary(theme: &Theme) -> Color {
        let mut color = theme.extended_palette().background.base.text;
        color.a = 0.7;
        color
    }

    pub fn text_muted(theme: &Theme) -> Color {
        let mut color = theme.extended_palette().background.base.text;
        color.a = 0.5;
        color
    }

    pub fn text_error(theme: &Theme) -> Color {
        theme.extended_palette().danger.strong.color
    }

    pub fn text_success(theme: &Theme) -> Color {
        theme.extended_palette().success.strong.color
    }

    pub fn background_base(theme: &Theme) -> Color {
        theme.extended_palette().background.base.color
    }
}
