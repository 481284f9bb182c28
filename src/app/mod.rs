// Presentation layer: axum routes for the page and the JSON API.

pub mod routes;
pub mod view;

pub use routes::{router, serve};
