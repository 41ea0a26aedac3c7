//! 排序、LIMIT 与聚合操作估算器
//!
//! 为以下算子提供代价估算：
//! - OrderBy
//! - Limit
//! - HashGroupBy
//! - SortGroupBy
//! - Aggregate

use crate::core::error::CostResult;
use crate::query::optimizer::cost::{ChildAccessor, CostModelConfig};
use crate::query::optimizer::plan::{GroupBy, Limit, OrderBy};

/// 排序与聚合操作估算器
pub struct SortLimitEstimator<'a> {
    config: &'a CostModelConfig,
}

impl<'a> SortLimitEstimator<'a> {
    pub fn new(config: &'a CostModelConfig) -> Self {
        Self { config }
    }

    /// 排序代价，当前模型不计
    pub fn order_by(&self, _op: &OrderBy) -> f64 {
        0.0
    }

    /// LIMIT 代价
    ///
    /// 至多物化 limit 行；子组行数取整后不超过 limit，负值按 0 处理。
    pub fn limit(&self, op: &Limit, children: &ChildAccessor<'_>) -> CostResult<f64> {
        let child_rows = children.child_rows(0)?.max(0.0).trunc();
        let rows = child_rows.min(op.limit as f64);
        Ok(rows * self.config.tuple_cpu_cost)
    }

    pub fn hash_group_by(&self, _op: &GroupBy) -> f64 {
        0.0
    }

    /// 排序分组代价，固定为 1.0
    pub fn sort_group_by(&self, _op: &GroupBy) -> f64 {
        1.0
    }

    pub fn aggregate(&self) -> f64 {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::optimizer::cost::node_estimators::test_support::{expression, leaf};
    use crate::query::optimizer::plan::{Memo, PhysicalOperator};

    fn limit_cost(child_rows: f64, limit: u64) -> f64 {
        let config = CostModelConfig::default();
        let op = Limit::new(0, limit);
        let mut memo = Memo::new();
        let child = leaf(&mut memo, child_rows);
        let expr = expression(&mut memo, PhysicalOperator::Limit(op.clone()), vec![child], None);
        SortLimitEstimator::new(&config)
            .limit(&op, &ChildAccessor::new(&memo, &expr))
            .expect("计算失败")
    }

    #[test]
    fn test_limit_bounded_by_limit() {
        assert_eq!(limit_cost(1000.0, 10), 20.0);
    }

    #[test]
    fn test_limit_bounded_by_child() {
        assert_eq!(limit_cost(3.0, 10), 6.0);
        assert_eq!(limit_cost(3.7, 10), 6.0);
    }

    #[test]
    fn test_limit_negative_child_rows() {
        assert_eq!(limit_cost(-5.0, 10), 0.0);
    }

    #[test]
    fn test_fixed_costs() {
        let config = CostModelConfig::default();
        let estimator = SortLimitEstimator::new(&config);
        assert_eq!(estimator.order_by(&OrderBy::default()), 0.0);
        assert_eq!(estimator.hash_group_by(&GroupBy::default()), 0.0);
        assert_eq!(estimator.sort_group_by(&GroupBy::default()), 1.0);
        assert_eq!(estimator.aggregate(), 0.0);
    }
}
