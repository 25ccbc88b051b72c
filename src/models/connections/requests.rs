use serde::Deserialize;
use ts_rs::TS;

// 创建联系记录请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../web/src/types/generated/connection.ts")]
pub struct CreateConnectionRequest {
    #[serde(with = "crate::models::common::numeric::lenient_i64")]
    #[ts(type = "number | string")]
    pub user_id: i64,
}
