use crate::domain::model::CardTable;
use crate::domain::ports::CardStore;
use crate::utils::error::{AppError, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// 從 JSON 檔案讀取卡片資料，每次呼叫都重新讀檔
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn unavailable(&self, reason: impl ToString) -> AppError {
        AppError::DataUnavailable {
            source_name: self.path.display().to_string(),
            reason: reason.to_string(),
        }
    }
}

#[async_trait]
impl CardStore for JsonFileStore {
    async fn load(&self) -> Result<CardTable> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| self.unavailable(e))?;

        let table: CardTable = serde_json::from_slice(&bytes).map_err(|e| self.unavailable(e))?;
        table.check_keys().map_err(|reason| self.unavailable(reason))?;

        tracing::debug!("Loaded card table from {}", self.path.display());
        Ok(table)
    }
}

/// In-memory table, handed out as-is on every load.
#[derive(Debug, Clone, Default)]
pub struct StaticCardStore {
    table: CardTable,
}

impl StaticCardStore {
    pub fn new(table: CardTable) -> Self {
        Self { table }
    }
}

#[async_trait]
impl CardStore for StaticCardStore {
    async fn load(&self) -> Result<CardTable> {
        Ok(self.table.clone())
    }
}
