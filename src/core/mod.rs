pub mod resolver;
pub mod service;

pub use crate::domain::model::{Card, CardResponse, CardTable, ResolvedCard};
pub use crate::domain::ports::{CardStore, Clock};
pub use crate::utils::error::Result;
