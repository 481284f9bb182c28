use crate::app::view;
use crate::core::service::MotivationService;
use crate::core::CardResponse;
use crate::utils::error::{AppError, ErrorCategory, Result};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use std::future::Future;
use tokio::net::TcpListener;

pub fn router(service: MotivationService) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/today", get(today))
        .route("/api/quote-of-day", get(today))
        .route("/api/date/:month/:day", get(by_date))
        .with_state(service)
}

/// 啟動 HTTP 服務直到 `shutdown` 完成
pub async fn serve<F>(listener: TcpListener, router: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        tracing::info!("Listening on http://{}", addr);
    }
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

async fn index(State(service): State<MotivationService>) -> std::result::Result<Html<String>, AppError> {
    let resolved = service.today().await?;
    Ok(Html(view::render_index(&resolved)))
}

async fn today(
    State(service): State<MotivationService>,
) -> std::result::Result<Json<CardResponse>, AppError> {
    let resolved = service.today().await?;
    Ok(Json(CardResponse::from(&resolved)))
}

async fn by_date(
    State(service): State<MotivationService>,
    Path((month, day)): Path<(String, String)>,
) -> std::result::Result<Json<CardResponse>, AppError> {
    let resolved = service.for_date(&month, &day).await?;
    Ok(Json(CardResponse::from(&resolved)))
}

pub fn status_code(err: &AppError) -> StatusCode {
    match err.category() {
        ErrorCategory::Client => StatusCode::BAD_REQUEST,
        ErrorCategory::NotFound => StatusCode::NOT_FOUND,
        ErrorCategory::Data | ErrorCategory::Configuration | ErrorCategory::System => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = status_code(&self);

        let detail = if self.is_client_error() {
            tracing::debug!("Rejected request: {}", self);
            self.to_string()
        } else {
            tracing::error!(
                "Request failed: {} (Category: {:?}, Severity: {:?})",
                self,
                self.category(),
                self.severity()
            );
            self.user_friendly_message()
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
