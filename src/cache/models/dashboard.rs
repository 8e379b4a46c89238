use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 仪表盘缓存过期时间，单位秒
pub const DASHBOARD_CACHE_EXPIRE: u64 = 24 * 3600;

/// 仪表盘缓存数据模型
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CachedDashboard {
    pub user_id: String,
    pub payload: Value,
    pub cached_at: i64, // Unix timestamp
}
