//! 等价组定义
//! 定义 Group 结构体，管理一组逻辑等价的组表达式
//!
//! Group 是搜索空间中的核心数据结构之一：
//! - 包含多个等价的组表达式（GroupExpression）
//! - 持有由基数估算阶段写入一次的估算行数
//! - 记录搜索算法写回的每个组表达式的代价，并据此选出最便宜的表达式

use std::collections::HashMap;

use super::node::GroupExpression;
use crate::core::types::GroupId;

#[derive(Debug, Clone)]
pub struct Group {
    id: GroupId,
    num_rows: Option<f64>,
    expressions: Vec<GroupExpression>,
    expression_costs: HashMap<usize, f64>,
}

impl Group {
    pub fn new(id: GroupId) -> Self {
        Self {
            id,
            num_rows: None,
            expressions: Vec::new(),
            expression_costs: HashMap::new(),
        }
    }

    pub fn id(&self) -> GroupId {
        self.id
    }

    /// 估算行数，尚未估算时返回 None
    pub fn num_rows(&self) -> Option<f64> {
        self.num_rows
    }

    /// 写入估算行数
    ///
    /// 必须在任何引用本组作为子组的表达式被计算代价之前完成。
    pub fn set_num_rows(&mut self, num_rows: f64) {
        if let Some(previous) = self.num_rows {
            log::warn!("{} 的估算行数被覆盖: {} -> {}", self.id, previous, num_rows);
        }
        self.num_rows = Some(num_rows);
    }

    pub(crate) fn add_expression(&mut self, expr: GroupExpression) -> usize {
        self.expressions.push(expr);
        self.expressions.len() - 1
    }

    pub fn expressions(&self) -> &[GroupExpression] {
        &self.expressions
    }

    pub fn expression(&self, index: usize) -> Option<&GroupExpression> {
        self.expressions.get(index)
    }

    /// 记录组表达式的代价
    pub fn set_expression_cost(&mut self, index: usize, cost: f64) {
        self.expression_costs.insert(index, cost);
    }

    pub fn expression_cost(&self, index: usize) -> Option<f64> {
        self.expression_costs.get(&index).copied()
    }

    /// 代价最低的组表达式及其代价
    pub fn best_expression(&self) -> Option<(usize, f64)> {
        self.expression_costs
            .iter()
            .map(|(&index, &cost)| (index, cost))
            .min_by(|a, b| {
                a.1.partial_cmp(&b.1)
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then(a.0.cmp(&b.0))
            })
    }

    pub fn clear_costs(&mut self) {
        self.expression_costs.clear();
    }
}
