//! 代价计算模块
//!
//! 为搜索空间中的单个组表达式估算代价，供基于代价的搜索比较候选计划
//!
//! ## 模块结构
//!
//! - `model` - 代价模型 trait 与平凡实现
//! - `calculator` - 基于统计信息的代价计算器
//! - `qualifier` - 谓词 CPU 代价估算
//! - `config` - 代价模型配置
//! - `assigner` - 代价赋值器，把估算结果写回搜索空间
//! - `estimate` - 代价估算结果
//! - `child_accessor` - 子组行数访问器
//! - `node_estimators` - 各类算子估算器

pub mod assigner;
pub mod calculator;
pub mod child_accessor;
pub mod config;
pub mod estimate;
pub mod model;
pub mod node_estimators;
pub mod qualifier;

pub use assigner::{CostAssigner, ExpressionCost};
pub use calculator::CostCalculator;
pub use child_accessor::ChildAccessor;
pub use config::CostModelConfig;
pub use estimate::CostEstimate;
pub use model::{CostModel, TrivialCostModel};
pub use qualifier::QualifierCostEstimator;
