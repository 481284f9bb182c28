use anyhow::Context;
use clap::Parser;
use daily_motivation::utils::error::ErrorSeverity;
use daily_motivation::utils::{logger, validation::Validate};
use daily_motivation::{
    router, serve, CardResolver, CliConfig, JsonFileStore, MotivationService, Settings, SystemClock,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let settings = match Settings::load(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            // logger 還沒初始化，只能直接輸出
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    logger::init_logger(settings.verbose, settings.json_logs);

    tracing::info!("Starting daily-motivation server");
    if settings.verbose {
        tracing::debug!("Settings: {:?}", settings);
    }

    // 驗證配置
    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let store = JsonFileStore::new(&settings.data_path);
    if !store.path().exists() {
        tracing::warn!(
            "Data file {} does not exist yet, requests will fail until it is created",
            store.path().display()
        );
    }

    let service = MotivationService::new(
        Arc::new(store),
        Arc::new(SystemClock),
        CardResolver::new(settings.year),
    );

    let listener = tokio::net::TcpListener::bind(settings.bind_address())
        .await
        .with_context(|| format!("failed to bind {}", settings.bind_address()))?;

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for shutdown signal: {}", e);
        }
        tracing::info!("Shutdown signal received");
    };

    if let Err(e) = serve(listener, router(service), shutdown).await {
        tracing::error!(
            "❌ Server stopped: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());

        let exit_code = match e.severity() {
            ErrorSeverity::Low | ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }

    tracing::info!("✅ Server shut down cleanly");
    Ok(())
}
