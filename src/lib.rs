//! CostModel - cost estimation engine for a cost-based SQL query optimizer
//!
//! Given one physical group expression from the optimizer's memo, this crate
//! computes a relative cost used to rank competing plans during plan search.
//! Statistics are read from an injected provider; child cardinalities are
//! read from the memo passed to each costing call.

pub mod config;
pub mod core;
pub mod query;
pub mod utils;

pub use crate::core::error::optimize::{CostError, CostResult, OptimizeError, OptimizeResult};
pub use crate::query::optimizer::cost::{
    CostAssigner, CostCalculator, CostEstimate, CostModel, CostModelConfig, TrivialCostModel,
};
pub use crate::query::optimizer::plan::{Group, GroupExpression, Memo, OperatorKind, PhysicalOperator};
pub use crate::query::optimizer::stats::{
    ColumnStatistics, StatisticsManager, StatisticsProvider, TableStatistics,
};
