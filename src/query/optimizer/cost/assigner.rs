//! 代价赋值器模块
//!
//! 用代价模型为搜索空间中的组表达式计算代价，并把结果写回所在组
//!
//! ## 使用示例
//!
//! ```rust
//! use costmodel::query::optimizer::cost::{CostAssigner, CostCalculator};
//! use costmodel::query::optimizer::plan::Memo;
//! use costmodel::query::optimizer::stats::StatisticsManager;
//! use std::sync::Arc;
//!
//! let stats_manager = Arc::new(StatisticsManager::new());
//! let assigner = CostAssigner::new(Arc::new(CostCalculator::new(stats_manager)));
//!
//! let mut memo = Memo::new();
//! assigner.assign_all_costs(&mut memo).expect("代价计算失败");
//! ```
//!
//! ## 架构说明
//!
//! 代价模型只计算单个组表达式自身的代价；赋值器负责遍历搜索空间，
//! 未计算代价的表达式不会写入代价，因而不会被选为组内最优。

use std::sync::Arc;

use rayon::prelude::*;

use crate::core::error::{CostError, CostResult};
use crate::core::types::GroupId;
use crate::query::optimizer::plan::Memo;

use super::{CostEstimate, CostModel};

/// 单个组表达式的代价计算结果
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionCost {
    pub group_id: GroupId,
    pub index: usize,
    pub result: CostResult<CostEstimate>,
}

/// 代价赋值器
#[derive(Clone)]
pub struct CostAssigner {
    model: Arc<dyn CostModel>,
}

impl std::fmt::Debug for CostAssigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CostAssigner")
            .field("model", &self.model.name())
            .finish()
    }
}

impl CostAssigner {
    /// 创建新的代价赋值器
    pub fn new(model: Arc<dyn CostModel>) -> Self {
        Self { model }
    }

    /// 获取代价模型
    pub fn model(&self) -> &Arc<dyn CostModel> {
        &self.model
    }

    /// 为一个组内全部组表达式计算代价并写回，返回组内最优表达式
    ///
    /// 先清除该组已有的代价，未计算代价的表达式保持无代价状态。
    pub fn assign_group_costs(
        &self,
        memo: &mut Memo,
        group_id: GroupId,
    ) -> CostResult<Option<(usize, f64)>> {
        let group = memo
            .get_group_by_id(group_id)
            .ok_or(CostError::GroupNotFound(group_id))?;

        let mut estimates = Vec::with_capacity(group.expressions().len());
        for (index, expr) in group.expressions().iter().enumerate() {
            estimates.push((index, self.model.calculate_cost(memo, expr)?));
        }

        let group = memo
            .get_group_mut(group_id)
            .ok_or(CostError::GroupNotFound(group_id))?;
        group.clear_costs();
        for (index, estimate) in estimates {
            match estimate {
                CostEstimate::Costed(cost) => group.set_expression_cost(index, cost),
                CostEstimate::NotCosted(kind) => {
                    log::debug!("{} 中第 {} 个表达式 ({}) 未计算代价", group_id, index, kind);
                }
            }
        }

        Ok(group.best_expression())
    }

    /// 按组编号顺序为整个搜索空间计算代价
    pub fn assign_all_costs(&self, memo: &mut Memo) -> CostResult<()> {
        let group_ids: Vec<GroupId> = memo.groups().iter().map(|g| g.id()).collect();
        for group_id in group_ids {
            self.assign_group_costs(memo, group_id)?;
        }
        log::debug!("已为 {} 个组计算代价，模型: {}", memo.len(), self.model.name());
        Ok(())
    }

    /// 并行计算整个搜索空间中每个组表达式的代价，不修改搜索空间
    ///
    /// 结果按组编号与组内下标排序。
    pub fn estimate_all(&self, memo: &Memo) -> Vec<ExpressionCost> {
        memo.groups()
            .par_iter()
            .flat_map_iter(|group| {
                group
                    .expressions()
                    .iter()
                    .enumerate()
                    .map(move |(index, expr)| ExpressionCost {
                        group_id: group.id(),
                        index,
                        result: self.model.calculate_cost(memo, expr),
                    })
            })
            .collect()
    }
}
