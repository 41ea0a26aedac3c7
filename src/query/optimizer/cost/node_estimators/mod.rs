//! 节点估算器模块
//!
//! 按算子类别提供代价公式：
//! - `scan` - 顺序扫描、索引扫描、派生表扫描
//! - `join` - 嵌套循环连接、哈希连接
//! - `sort_limit` - 排序、LIMIT、分组与聚合
//!
//! 估算器只借用统计信息与配置，每次计算时按需构造。

pub mod join;
pub mod scan;
pub mod sort_limit;

pub use join::{BucketEstimate, JoinEstimator};
pub use scan::ScanEstimator;
pub use sort_limit::SortLimitEstimator;
