// 缓存模块
// 进程内仪表盘缓存的数据结构和操作逻辑

pub mod models;
pub mod operations;

use std::collections::HashMap;

use tokio::sync::RwLock;

// 重新导出常用类型和函数，方便其他模块使用
pub use models::dashboard::{CachedDashboard, DASHBOARD_CACHE_EXPIRE};
pub use operations::dashboard::DashboardCacheOperations;

/// 进程内仪表盘缓存
/// 按用户ID保存最近一次成功构建的仪表盘，进程生命周期内不清除
#[derive(Debug, Default)]
pub struct DashboardStore {
    entries: RwLock<HashMap<String, CachedDashboard>>,
}
