use pearl_engine::{Config, EngineState, OrderQueue};
use tokio::signal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Environment (dotenv, logging)
    dotenv::dotenv().ok();
    let config = Config::from_env();
    pearl_engine::init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    tracing::info!(environment = %config.environment, "Pearl engine starting");

    let state = EngineState::initialize(&config).await?;

    // Live staff queue keeps a fresh snapshot for connected screens
    let queue = OrderQueue::subscribe(state.order_repository(), &state.change_bus).await;

    // Mirror user-facing notices into the operator log
    let mut notices = state.notifier.subscribe();
    tokio::spawn(async move {
        while let Ok(notice) = notices.recv().await {
            tracing::info!(level = ?notice.level, "{}", notice.message);
        }
    });

    signal::ctrl_c().await?;
    tracing::info!("Shutting down");
    queue.shutdown().await;

    Ok(())
}
