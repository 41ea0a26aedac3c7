//! 代价计算器模块
//!
//! 基于统计信息的代价模型。每次计算只读取搜索空间中的行数、
//! 统计信息与配置，按算子种类分派到对应的估算器。

use std::sync::Arc;

use crate::core::error::CostResult;
use crate::query::optimizer::plan::{GroupExpression, Memo, PhysicalOperator};
use crate::query::optimizer::stats::StatisticsProvider;

use super::node_estimators::{JoinEstimator, ScanEstimator, SortLimitEstimator};
use super::{ChildAccessor, CostEstimate, CostModel, CostModelConfig};

/// 代价计算器
///
/// 计算器本身无内部可变状态，可在多个线程间共享。
#[derive(Clone)]
pub struct CostCalculator {
    stats: Arc<dyn StatisticsProvider>,
    config: CostModelConfig,
}

impl std::fmt::Debug for CostCalculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CostCalculator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl CostCalculator {
    /// 创建新的代价计算器（使用默认配置）
    pub fn new(stats: Arc<dyn StatisticsProvider>) -> Self {
        Self::with_config(stats, CostModelConfig::default())
    }

    /// 创建新的代价计算器（使用指定配置）
    pub fn with_config(stats: Arc<dyn StatisticsProvider>, config: CostModelConfig) -> Self {
        Self { stats, config }
    }

    /// 获取配置
    pub fn config(&self) -> &CostModelConfig {
        &self.config
    }

    /// 获取统计信息提供者
    pub fn statistics(&self) -> &Arc<dyn StatisticsProvider> {
        &self.stats
    }

    /// 计算组表达式自身的代价
    ///
    /// 没有代价公式的算子返回 `CostEstimate::NotCosted`；
    /// 子组缺失或行数未估算时返回错误。
    pub fn calculate_cost(&self, memo: &Memo, expr: &GroupExpression) -> CostResult<CostEstimate> {
        let children = ChildAccessor::new(memo, expr);
        let scan = ScanEstimator::new(self.stats.as_ref(), &self.config);
        let join = JoinEstimator::new(self.stats.as_ref(), &self.config);
        let sort_limit = SortLimitEstimator::new(&self.config);

        let cost = match expr.op() {
            PhysicalOperator::SeqScan(op) => scan.seq_scan(op),
            PhysicalOperator::IndexScan(op) => scan.index_scan(op, &children)?,
            PhysicalOperator::QueryDerivedScan(op) => scan.query_derived_scan(op),
            PhysicalOperator::OrderBy(op) => sort_limit.order_by(op),
            PhysicalOperator::Limit(op) => sort_limit.limit(op, &children)?,
            PhysicalOperator::InnerNLJoin(op) => join.nested_loop(op, &children)?,
            PhysicalOperator::InnerHashJoin(op) => join.hash_join(op, &children)?,
            PhysicalOperator::HashGroupBy(op) => sort_limit.hash_group_by(op),
            PhysicalOperator::SortGroupBy(op) => sort_limit.sort_group_by(op),
            PhysicalOperator::Aggregate => sort_limit.aggregate(),
            PhysicalOperator::InnerIndexJoin(_)
            | PhysicalOperator::LeftNLJoin(_)
            | PhysicalOperator::RightNLJoin(_)
            | PhysicalOperator::OuterNLJoin(_)
            | PhysicalOperator::LeftHashJoin(_)
            | PhysicalOperator::RightHashJoin(_)
            | PhysicalOperator::OuterHashJoin(_)
            | PhysicalOperator::Insert(_)
            | PhysicalOperator::InsertSelect(_)
            | PhysicalOperator::Delete(_)
            | PhysicalOperator::Update(_) => {
                log::debug!("{} 没有代价公式，{} 未计算代价", expr.group_id(), expr.op());
                return Ok(CostEstimate::NotCosted(expr.op().kind()));
            }
        };

        log::trace!("{} 的 {} 代价为 {}", expr.group_id(), expr.op(), cost);
        Ok(CostEstimate::Costed(cost))
    }
}

impl CostModel for CostCalculator {
    fn name(&self) -> &str {
        "statistics"
    }

    fn calculate_cost(&self, memo: &Memo, expr: &GroupExpression) -> CostResult<CostEstimate> {
        CostCalculator::calculate_cost(self, memo, expr)
    }
}
