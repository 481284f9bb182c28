pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{
    clock::{FixedClock, SystemClock},
    storage::{JsonFileStore, StaticCardStore},
};
pub use app::{router, serve};
pub use config::{CliConfig, Settings};
pub use crate::core::resolver::{CardResolver, SUPPORTED_YEAR};
pub use crate::core::service::MotivationService;
pub use domain::model::{Card, CardResponse, CardTable, ResolvedCard};
pub use utils::error::{AppError, Result};
