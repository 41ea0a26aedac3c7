//! 谓词 CPU 代价估算器
//!
//! 计算对一行元组求值一组谓词的 CPU 代价：以基础代价为起点，
//! 递归累加每个谓词树中各节点的操作符代价。

use super::CostModelConfig;
use crate::core::error::{CostError, CostResult};
use crate::core::{AnnotatedExpression, Expression};

/// 谓词代价估算器
#[derive(Debug, Clone, Copy)]
pub struct QualifierCostEstimator {
    config: CostModelConfig,
}

impl QualifierCostEstimator {
    pub fn new(config: CostModelConfig) -> Self {
        Self { config }
    }

    /// 计算一组谓词对单行求值的 CPU 代价
    pub fn cost_for_quals(&self, qualifiers: &[AnnotatedExpression]) -> CostResult<f64> {
        let mut total_cost = self.config.qualifier_base_cost;
        for qual in qualifiers {
            total_cost += self.cost_per_qual(qual.expr())?;
        }
        Ok(total_cost)
    }

    /// 计算单个谓词的 CPU 代价
    ///
    /// 节点本身属于已建模的操作符时计入一次操作符代价，函数调用不计；
    /// 无论节点本身是否计入，都会累加全部子表达式的代价。
    pub fn cost_per_qual(&self, qualifier: &Expression) -> CostResult<f64> {
        self.cost_recursive(qualifier, 1)
    }

    fn cost_recursive(&self, expr: &Expression, depth: usize) -> CostResult<f64> {
        if depth > self.config.max_expression_depth {
            return Err(CostError::ExpressionTooDeep(depth));
        }

        let mut total_cost = self.config.qualifier_node_cost;
        if expr.expression_type().is_costed_operator() {
            total_cost += self.config.operator_cpu_cost;
        }
        for child in expr.children() {
            total_cost += self.cost_recursive(child, depth + 1)?;
        }
        Ok(total_cost)
    }
}
