//! 统一错误处理
//!
//! - `optimize`：代价计算与优化器错误
//! - `config`：配置加载错误

pub mod config;
pub mod optimize;

pub use config::{ConfigError, ConfigResult};
pub use optimize::{CostError, CostResult, OptimizeError, OptimizeResult};
