use serde_json::Value;

use crate::cache::DashboardStore;
use crate::cache::models::dashboard::CachedDashboard;

/// 仪表盘缓存操作
pub struct DashboardCacheOperations;

impl DashboardCacheOperations {
    /// 写入缓存，同一用户为最后写入生效
    pub async fn cache_dashboard(store: &DashboardStore, user_id: &str, payload: Value) {
        let entry = CachedDashboard {
            user_id: user_id.to_string(),
            payload,
            cached_at: chrono::Utc::now().timestamp(),
        };

        let mut entries = store.entries.write().await;
        entries.insert(entry.user_id.clone(), entry);
    }

    /// 读取用户最近一次缓存的仪表盘
    pub async fn get_dashboard(store: &DashboardStore, user_id: &str) -> Option<CachedDashboard> {
        let entries = store.entries.read().await;
        entries.get(user_id).cloned()
    }
}
