//! 配置模块
//!
//! 从 TOML 文件加载日志与代价模型配置，缺省项取默认值

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::error::{ConfigError, ConfigResult};
use crate::query::optimizer::cost::CostModelConfig;

/// 日志配置
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub dir: String,
    pub file: String,
    pub max_file_size: u64,
    pub max_files: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: "logs".to_string(),
            file: "costmodel".to_string(),
            max_file_size: 100 * 1024 * 1024, // 100MB
            max_files: 5,
        }
    }
}

/// 应用配置
///
/// ```toml
/// [log]
/// level = "debug"
///
/// [cost]
/// tuple_cpu_cost = 2.0
/// hash_table_load_factor = 0.5
/// ```
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub log: LogConfig,
    pub cost: CostModelConfig,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> ConfigResult<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> ConfigResult<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.log.level.trim().is_empty() {
            return Err(ConfigError::Invalid("log.level 不能为空".to_string()));
        }
        if self.log.max_files == 0 {
            return Err(ConfigError::Invalid("log.max_files 必须大于 0".to_string()));
        }
        self.cost.validate().map_err(ConfigError::Invalid)
    }
}
