use iced::widget::{Space, button, checkbox, column, container, row, text};
use iced::{Alignment, Element, Length, Padding, Theme};

use crate::models::{Language, Settings, SettingsToggle};
use crate::ui::theme::{colors, styles};

#[derive(Clone, Debug)]
pub enum SettingsMessage {
    Toggled(SettingsToggle, bool),
    LanguageSelected(Language),
    Close,
}

/// Applies a settings change. Returns whether anything changed; `Close` is
/// left to the owning screen.
pub fn apply_settings(settings: &mut Settings, message: &SettingsMessage) -> bool {
    let before = *settings;
    match message {
        SettingsMessage::Toggled(toggle, value) => settings.set(*toggle, *value),
        SettingsMessage::LanguageSelected(language) => settings.language = *language,
        SettingsMessage::Close => {}
    }
    let changed = before != *settings;
    if changed {
        tracing::debug!(?settings, "Settings changed");
    }
    changed
}

/// Side panel with the preference toggles and the language selector.
pub fn settings_panel<'a>(settings: &Settings, theme: &Theme) -> Element<'a, SettingsMessage> {
    let header = container(
        row![
            text("Settings").size(20),
            Space::with_width(Length::Fill),
            button(text("×").size(16))
                .on_press(SettingsMessage::Close)
                .padding(4)
                .style(move |t: &Theme, status| styles::button_icon(t, status)),
        ]
        .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .padding(Padding::from([12, 16]))
    .style(move |t: &Theme| styles::panel_header(t));

    let toggles = SettingsToggle::ALL.into_iter().fold(
        column![text("Preferences").size(16)].spacing(10),
        |col, toggle| {
            col.push(
                checkbox(toggle.label(), settings.get(toggle))
                    .on_toggle(move |value| SettingsMessage::Toggled(toggle, value))
                    .size(16)
                    .text_size(14),
            )
        },
    );

    let languages = Language::ALL.into_iter().fold(row![].spacing(8), |r, language| {
        let selected = settings.language == language;
        r.push(
            button(text(language.name()).size(14))
                .on_press(SettingsMessage::LanguageSelected(language))
                .padding([6, 12])
                .style(if selected {
                    button::primary
                } else {
                    button::secondary
                }),
        )
    });

    let language_section = column![
        text("Language").size(16),
        languages,
        text(format!("Interface language code: {}", settings.language.code()))
            .size(12)
            .color(colors::text_secondary(theme)),
    ]
    .spacing(10);

    let note = text("Settings are kept until the app is closed")
        .size(12)
        .color(colors::text_muted(theme));

    container(column![
        header,
        container(
            column![toggles, Space::with_height(12), language_section, Space::with_height(12), note]
                .spacing(8)
        )
        .padding(16),
    ])
    .width(Length::Fixed(300.0))
    .height(Length::Fill)
    .style(move |t: &Theme| styles::side_panel(t))
    .into()
}
