use std::collections::HashMap;

use crate::config::Config;

/// 用户电话号码目录
/// 下游代理以电话号码作为查询主键
#[derive(Debug, Clone, Default)]
pub struct PhoneDirectory {
    entries: HashMap<String, String>,
}

impl PhoneDirectory {
    /// 从配置构建目录，未配置时使用内置演示映射
    pub fn from_config(config: &Config) -> Self {
        if config.phone_directory.trim().is_empty() {
            return Self::builtin();
        }
        Self::parse(&config.phone_directory)
    }

    /// 解析 "user=phone,user=phone" 形式的映射
    pub fn parse(raw: &str) -> Self {
        let entries = raw
            .split(',')
            .filter_map(|pair| {
                let (user, phone) = pair.split_once('=')?;
                let user = user.trim();
                let phone = phone.trim();
                if user.is_empty() || phone.is_empty() {
                    return None;
                }
                Some((user.to_string(), phone.to_string()))
            })
            .collect();

        Self { entries }
    }

    fn builtin() -> Self {
        Self::parse("guest=+15550100,demo=+15550101,dev=+15550102")
    }

    pub fn lookup(&self, user_id: &str) -> Option<&str> {
        self.entries.get(user_id).map(String::as_str)
    }
}
