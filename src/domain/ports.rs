use crate::domain::model::CardTable;
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Source of the card table. Implementations report failures as `DataUnavailable`.
#[async_trait]
pub trait CardStore: Send + Sync {
    async fn load(&self) -> Result<CardTable>;
}

pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}
