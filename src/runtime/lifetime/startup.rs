use crate::errors::Result;
use crate::storage::Storage;
use std::sync::Arc;
use tracing::{info, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 输出当前数据概况，便于确认连接的是哪一个库
async fn report_storage_state(storage: &Arc<dyn Storage>) {
    match storage.count_connections().await {
        Ok(total) => info!("Storage ready, {} connection(s) recorded so far", total),
        Err(e) => warn!("Failed to read connection total: {}", e),
    }
}

/// 准备服务器启动的上下文
/// 包括存储初始化与数据库迁移
pub async fn prepare_server_startup() -> Result<StartupContext> {
    // sqlx 同时依赖多个 rustls 加密后端时需要显式选择
    let _ = rustls::crypto::ring::default_provider().install_default();

    let storage = crate::storage::create_storage().await?;
    warn!("Storage backend initialized and migrations completed");

    report_storage_state(&storage).await;

    Ok(StartupContext { storage })
}
