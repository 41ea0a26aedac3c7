//! 统计信息模块
//!
//! 代价模型只读消费的表级与列级统计信息
//!
//! ## 模块结构
//!
//! - `provider` - 统计信息提供者 trait
//! - `manager` - 统计信息管理器，内存中的提供者实现
//! - `table` - 表统计信息
//! - `column` - 列统计信息

pub mod column;
pub mod manager;
pub mod provider;
pub mod table;

pub use column::ColumnStatistics;
pub use manager::StatisticsManager;
pub use provider::StatisticsProvider;
pub use table::TableStatistics;
