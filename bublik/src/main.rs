#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use bublik::ui::BublikApp;
use tracing_subscriber::prelude::*;

fn main() -> iced::Result {
    // Initialize tracing (optional, controlled via RUST_LOG)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bublik=info,iced=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
    iced::application(BublikApp::title, BublikApp::update, BublikApp::view)
        .theme(BublikApp::theme)
        .window_size((1100.0, 720.0))
        .run_with(BublikApp::new)
}
