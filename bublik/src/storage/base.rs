use std::path::{Path, PathBuf};

use anyhow::Context as _;
use tokio_sqlite::Connection;

/// Local SQLite database inside the profile directory.
pub struct Storage {
    path: PathBuf,
    connection: Connection,
}

impl Storage {
    pub const DATA_FILE: &'static str = "data.db";

    /// Opens the database in `path`, creating the directory and the file
    /// when missing.
    pub async fn open(path: &Path) -> Result<Self, anyhow::Error> {
        let path = path.to_owned();
        tokio::fs::create_dir_all(&path)
            .await
            .with_context(|| format!("Failed to create profile dir {}", path.display()))?;
        let data_path = path.join(Self::DATA_FILE);
        let connection = Connection::open(&data_path)
            .await
            .with_context(|| format!("Failed to open database {}", data_path.display()))?;
        tracing::debug!(path = %data_path.display(), "Storage opened");
        Ok(Self { path, connection })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn connection(&mut self) -> &mut Connection {
        &mut self.connection
    }
}
