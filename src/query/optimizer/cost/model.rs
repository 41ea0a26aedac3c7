//! 代价模型抽象
//!
//! 搜索算法只依赖 `CostModel` trait，具体模型可以替换。

use crate::core::error::CostResult;
use crate::query::optimizer::plan::{GroupExpression, Memo};

use super::CostEstimate;

/// 代价模型 trait
///
/// 实现必须是纯函数：同样的搜索空间、统计信息与配置总是给出同样的结果，
/// 且计算过程不修改任何共享状态，可以在多个线程上并发调用。
pub trait CostModel: Send + Sync {
    /// 模型名称
    fn name(&self) -> &str;

    /// 计算一个组表达式自身的代价（不含子计划代价）
    fn calculate_cost(&self, memo: &Memo, expr: &GroupExpression) -> CostResult<CostEstimate>;
}

/// 平凡代价模型
///
/// 为每个算子返回同一个固定代价，用于测试搜索算法本身。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrivialCostModel {
    cost: f64,
}

impl TrivialCostModel {
    pub fn new(cost: f64) -> Self {
        Self { cost }
    }
}

impl Default for TrivialCostModel {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl CostModel for TrivialCostModel {
    fn name(&self) -> &str {
        "trivial"
    }

    fn calculate_cost(&self, _memo: &Memo, _expr: &GroupExpression) -> CostResult<CostEstimate> {
        Ok(CostEstimate::Costed(self.cost))
    }
}
