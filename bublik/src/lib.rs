pub mod auth;
pub mod chat;
pub mod contact;
pub mod models;
pub mod storage;

// Key/value settings backed by storage (identity slot)
pub mod config;

pub mod ui;
