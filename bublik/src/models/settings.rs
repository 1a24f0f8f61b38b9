#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    Ru,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Ru];

    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ru => "ru",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Ru => "Русский",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }
}

/// In-memory preferences. Never persisted: every launch starts from
/// `Settings::default()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub dark_theme: bool,
    pub notifications: bool,
    pub sounds: bool,
    pub show_online_status: bool,
    pub language: Language,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dark_theme: false,
            notifications: true,
            sounds: true,
            show_online_status: true,
            language: Language::default(),
        }
    }
}

/// Boolean entries of [`Settings`] that the settings panel exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsToggle {
    DarkTheme,
    Notifications,
    Sounds,
    ShowOnlineStatus,
}

impl SettingsToggle {
    pub const ALL: [SettingsToggle; 4] = [
        SettingsToggle::DarkTheme,
        SettingsToggle::Notifications,
        SettingsToggle::Sounds,
        SettingsToggle::ShowOnlineStatus,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::DarkTheme => "Dark theme",
            Self::Notifications => "Notifications",
            Self::Sounds => "Sounds",
            Self::ShowOnlineStatus => "Show online status",
        }
    }
}

impl Settings {
    pub fn get(&self, toggle: SettingsToggle) -> bool {
        match toggle {
            SettingsToggle::DarkTheme => self.dark_theme,
            SettingsToggle::Notifications => self.notifications,
            SettingsToggle::Sounds => self.sounds,
            SettingsToggle::ShowOnlineStatus => self.show_online_status,
        }
    }

    pub fn set(&mut self, toggle: SettingsToggle, value: bool) {
        let slot = match toggle {
            SettingsToggle::DarkTheme => &mut self.dark_theme,
            SettingsToggle::Notifications => &mut self.notifications,
            SettingsToggle::Sounds => &mut self.sounds,
            SettingsToggle::ShowOnlineStatus => &mut self.show_online_status,
        };
        *slot = value;
    }
}
