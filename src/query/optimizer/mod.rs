//! 查询优化器模块
//!
//! 提供基于代价的搜索所需的代价估算功能
//!
//! ## 模块结构
//!
//! - `stats` - 统计信息模块，管理表与列的统计信息
//! - `plan` - 搜索空间模块，包括等价组、组表达式与物理算子
//! - `cost` - 代价计算模块，计算单个组表达式的代价
//!
//! ## 使用示例
//!
//! ```rust
//! use costmodel::query::optimizer::{CostCalculator, Memo, PhysicalOperator, StatisticsManager};
//! use costmodel::query::optimizer::plan::Limit;
//! use std::sync::Arc;
//!
//! // 创建统计信息管理器与代价计算器
//! let stats_manager = Arc::new(StatisticsManager::new());
//! let cost_calculator = CostCalculator::new(stats_manager);
//!
//! // 子组行数由基数估算阶段写入
//! let mut memo = Memo::new();
//! let child = memo.add_group();
//! memo.set_num_rows(child, 1000.0).unwrap();
//! let limit = memo
//!     .insert_new_group(PhysicalOperator::Limit(Limit::new(0, 10)), vec![child])
//!     .unwrap();
//!
//! let expr = memo.group_expression(limit, 0).unwrap();
//! let cost = cost_calculator.calculate_cost(&memo, expr).unwrap();
//! assert_eq!(cost.cost(), Some(20.0));
//! ```

pub mod cost;
pub mod plan;
pub mod stats;

// 重新导出主要类型
pub use stats::{ColumnStatistics, StatisticsManager, StatisticsProvider, TableStatistics};

pub use plan::{Group, GroupExpression, Memo, OperatorKind, PhysicalOperator};

pub use cost::{
    CostAssigner, CostCalculator, CostEstimate, CostModel, CostModelConfig,
    QualifierCostEstimator, TrivialCostModel,
};
