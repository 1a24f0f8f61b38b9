use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context as _;
use iced::widget::{column, container, text};
use iced::{Alignment, Element, Length, Task, Theme};
use tokio::sync::Mutex as TokioMutex;

use crate::auth::{SimulatedVerification, VerificationService};
use crate::config::ConfigManager;
use crate::contact::{DirectoryService, LocalDirectory};
use crate::models::{Identity, Settings};
use crate::storage::Storage;
use crate::ui::core::{Screen, ScreenCommand, ScreenType};
use crate::ui::screens::{AuthMessage, AuthScreen, ChatListMessage, ChatListScreen};
use crate::ui::theme::{ThemePreference, colors};

enum CurrentScreen {
    Loading,
    Auth(AuthScreen),
    Chats(ChatListScreen),
}

/// Everything screens share: the storage handle, the signed-in identity,
/// in-memory settings and the service collaborators.
pub struct AppContext {
    pub storage_dir: PathBuf,
    pub storage: Option<Arc<TokioMutex<Storage>>>,
    pub identity: Option<Identity>,
    pub settings: Settings,
    pub verification: Arc<dyn VerificationService>,
    pub directory: Arc<dyn DirectoryService>,
}

impl AppContext {
    pub fn new() -> Self {
        let storage_dir = Self::get_data_dir().unwrap_or_else(|err| {
            tracing::warn!(?err, "Cannot resolve profile directory, using working directory");
            PathBuf::from("bublik")
        });
        Self::with_services(
            storage_dir,
            Arc::new(SimulatedVerification::new()),
            Arc::new(LocalDirectory),
        )
    }

    pub fn with_services(
        storage_dir: PathBuf,
        verification: Arc<dyn VerificationService>,
        directory: Arc<dyn DirectoryService>,
    ) -> Self {
        Self {
            storage_dir,
            storage: None,
            identity: None,
            settings: Settings::default(),
            verification,
            directory,
        }
    }

    fn get_data_dir() -> Result<PathBuf, anyhow::Error> {
        // Check for custom profile directory from environment variable
        if let Ok(custom_dir) = std::env::var("BUBLIK_PROFILE_DIR") {
            let path = PathBuf::from(custom_dir);
            if path.is_absolute() {
                return Ok(path);
            } else {
                tracing::warn!("BUBLIK_PROFILE_DIR is not an absolute path, using default");
            }
        }
        let base_dir = dirs::config_dir()
            .or_else(dirs::data_dir)
            .context("Failed to determine config directory")?;
        Ok(base_dir.join("bublik"))
    }

    pub fn theme(&self) -> Theme {
        ThemePreference::from_dark(self.settings.dark_theme).to_iced_theme()
    }

    /// Config view over the storage, if it could be opened.
    pub fn config(&self) -> Option<ConfigManager> {
        self.storage.clone().map(ConfigManager::new)
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Storage opened at startup together with the identity found in it.
#[derive(Clone)]
pub struct Startup {
    storage: Arc<TokioMutex<Storage>>,
    identity: Option<Identity>,
}

pub struct BublikApp {
    screen: CurrentScreen,
    ctx: AppContext,
}

#[derive(Clone)]
pub enum AppMessage {
    // Wrapped screen messages
    Auth(AuthMessage),
    ChatList(ChatListMessage),
    // Result of opening storage and reading the identity slot
    Loaded(Result<Startup, String>),
}

impl std::fmt::Debug for AppMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppMessage::Auth(msg) => write!(f, "Auth({msg:?})"),
            AppMessage::ChatList(msg) => write!(f, "ChatList({msg:?})"),
            AppMessage::Loaded(Ok(_)) => write!(f, "Loaded(Ok)"),
            AppMessage::Loaded(Err(err)) => write!(f, "Loaded(Err({err}))"),
        }
    }
}

impl BublikApp {
    pub fn new() -> (Self, Task<AppMessage>) {
        Self::with_context(AppContext::new())
    }

    pub fn with_context(ctx: AppContext) -> (Self, Task<AppMessage>) {
        let storage_dir = ctx.storage_dir.clone();
        let app = Self {
            screen: CurrentScreen::Loading,
            ctx,
        };
        let load = Task::perform(
            async move { load_startup(&storage_dir).await.map_err(|e| format!("{e:#}")) },
            AppMessage::Loaded,
        );
        (app, load)
    }

    /// Helper method to handle ScreenCommand and convert to Task<AppMessage>
    fn handle_screen_command<M, F>(&mut self, cmd: ScreenCommand<M>, wrap: F) -> Task<AppMessage>
    where
        M: Send + 'static,
        F: Fn(M) -> AppMessage + 'static + Send + Sync + Clone,
    {
        match cmd {
            ScreenCommand::None => Task::none(),
            ScreenCommand::Message(task) => task.map(wrap),
            ScreenCommand::ChangeScreen(screen_type) => {
                self.switch_screen(screen_type);
                Task::none()
            }
        }
    }

    fn switch_screen(&mut self, screen_type: ScreenType) {
        tracing::debug!(?screen_type, "Switching screen");
        self.screen = match screen_type {
            ScreenType::Auth => CurrentScreen::Auth(AuthScreen::new()),
            ScreenType::Chats => CurrentScreen::Chats(ChatListScreen::with_demo_chats()),
        };
    }

    pub fn title(&self) -> String {
        match &self.screen {
            CurrentScreen::Loading => "BublikChat".to_string(),
            CurrentScreen::Auth(_) => "BublikChat: Sign in".to_string(),
            CurrentScreen::Chats(_) => match &self.ctx.identity {
                Some(identity) => format!("BublikChat: {}", identity.handle()),
                None => "BublikChat".to_string(),
            },
        }
    }

    pub fn theme(&self) -> Theme {
        self.ctx.theme()
    }

    pub fn update(&mut self, message: AppMessage) -> Task<AppMessage> {
        match (&mut self.screen, message) {
            (_, AppMessage::Loaded(result)) => {
                match result {
                    Ok(startup) => {
                        self.ctx.storage = Some(startup.storage);
                        self.ctx.identity = startup.identity;
                    }
                    Err(err) => {
                        tracing::error!(%err, "Cannot open storage, identity will not be kept");
                    }
                }
                if let Some(identity) = &self.ctx.identity {
                    tracing::info!(username = ?identity.username, "Restored stored identity");
                    self.switch_screen(ScreenType::Chats);
                } else {
                    self.switch_screen(ScreenType::Auth);
                }
                Task::none()
            }
            (CurrentScreen::Auth(a), AppMessage::Auth(msg)) => {
                let cmd = a.update(msg, &mut self.ctx);
                self.handle_screen_command(cmd, AppMessage::Auth)
            }
            (CurrentScreen::Chats(c), AppMessage::ChatList(msg)) => {
                let cmd = c.update(msg, &mut self.ctx);
                self.handle_screen_command(cmd, AppMessage::ChatList)
            }
            // Late results for a screen that is no longer shown
            (_, message) => {
                tracing::debug!(?message, "Dropping message for inactive screen");
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, AppMessage> {
        match &self.screen {
            CurrentScreen::Loading => {
                let theme = self.ctx.theme();
                container(
                    column![
                        text("BublikChat").size(36),
                        text("Loading...")
                            .size(14)
                            .color(colors::text_secondary(&theme)),
                    ]
                    .spacing(8)
                    .align_x(Alignment::Center),
                )
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .into()
            }
            CurrentScreen::Auth(a) => a.view(&self.ctx).map(AppMessage::Auth),
            CurrentScreen::Chats(c) => c.view(&self.ctx).map(AppMessage::ChatList),
        }
    }
}

async fn load_startup(storage_dir: &Path) -> Result<Startup, anyhow::Error> {
    let storage = Storage::open(storage_dir).await?;
    let storage = Arc::new(TokioMutex::new(storage));
    let identity = ConfigManager::new(storage.clone()).load_identity().await?;
    Ok(Startup { storage, identity })
}
