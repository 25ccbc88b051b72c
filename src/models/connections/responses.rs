use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 联系总数响应
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../web/src/types/generated/connection.ts")]
pub struct ConnectionCountResponse {
    pub total: i64,
}
