//! 连接操作估算器
//!
//! 为内连接提供代价估算：
//! - InnerNLJoin：外侧每行扫描一遍内侧
//! - InnerHashJoin：左侧构建哈希表，右侧逐行探测
//!
//! 哈希连接的探测代价依赖哈希桶大小比例的估算，桶大小由连接列的
//! 基数、空值比例和最高频值频率推算。

use crate::core::error::CostResult;
use crate::core::types::{AnnotatedExpression, TableId};
use crate::query::optimizer::cost::{ChildAccessor, CostModelConfig, QualifierCostEstimator};
use crate::query::optimizer::plan::{HashJoin, NLJoin};
use crate::query::optimizer::stats::{ColumnStatistics, StatisticsProvider};

/// 哈希桶估算结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BucketEstimate {
    /// 一个探测行平均落入的桶占构建侧的比例
    pub bucket_size_frac: f64,
    /// 连接列最高频值的频率
    pub mcv_freq: f64,
}

impl Default for BucketEstimate {
    fn default() -> Self {
        Self {
            bucket_size_frac: 1.0,
            mcv_freq: 1.0,
        }
    }
}

/// 连接操作估算器
pub struct JoinEstimator<'a> {
    stats: &'a dyn StatisticsProvider,
    config: &'a CostModelConfig,
    qualifier: QualifierCostEstimator,
}

impl<'a> JoinEstimator<'a> {
    /// 创建新的连接估算器
    pub fn new(stats: &'a dyn StatisticsProvider, config: &'a CostModelConfig) -> Self {
        Self {
            stats,
            config,
            qualifier: QualifierCostEstimator::new(*config),
        }
    }

    /// 嵌套循环内连接代价
    ///
    /// 子组 0 为外侧，子组 1 为内侧。
    pub fn nested_loop(&self, op: &NLJoin, children: &ChildAccessor<'_>) -> CostResult<f64> {
        let mut outer_rows = children.child_rows(0)?;
        let mut inner_rows = children.child_rows(1)?;
        let total_rows = children.output_rows()?;
        let tuple_cost = self.config.tuple_cpu_cost;

        // 外侧第一行之后的每一行都要重新扫描内侧
        let init_cost = if outer_rows > 1.0 {
            (outer_rows - 1.0) * tuple_cost * inner_rows
        } else {
            0.0
        };

        if outer_rows <= 0.0 {
            outer_rows = 1.0;
        }
        if inner_rows <= 0.0 {
            inner_rows = 1.0;
        }

        let num_tuples = outer_rows * inner_rows;
        let cpu_per_tuple = self.qualifier.cost_for_quals(&op.join_predicates)? + tuple_cost;

        Ok(init_cost + num_tuples * cpu_per_tuple + tuple_cost * total_rows)
    }

    /// 哈希内连接代价
    ///
    /// 子组 0 为构建侧，子组 1 为探测侧。
    pub fn hash_join(&self, op: &HashJoin, children: &ChildAccessor<'_>) -> CostResult<f64> {
        let left_rows = children.child_rows(0)?;
        let right_rows = children.child_rows(1)?;
        let total_rows = children.output_rows()?;
        let tuple_cost = self.config.tuple_cpu_cost;
        let operator_cost = self.config.operator_cpu_cost;

        let num_keys = op.join_predicates.len() as f64;
        let init_cost = (operator_cost * num_keys + tuple_cost) * right_rows
            + operator_cost * num_keys * left_rows;

        let buckets = self.estimate_buckets(op, left_rows, right_rows, total_rows);
        log::trace!(
            "哈希连接桶估算: bucket_size_frac={}, mcv_freq={}",
            buckets.bucket_size_frac,
            buckets.mcv_freq
        );

        let hash_cost = self.qualifier.cost_for_quals(&op.join_predicates)?;
        let mut row_est = right_rows * buckets.bucket_size_frac * 0.5;
        row_est = if row_est < 1.0 { 1.0 } else { row_est.trunc() };

        Ok(init_cost + hash_cost * left_rows * row_est * 0.5 + tuple_cost * total_rows)
    }

    /// 估算所有连接谓词中最小的桶大小比例与最高频值频率
    ///
    /// 无法解析到列统计信息的谓词被跳过；全部跳过时两者均为 1.0。
    pub fn estimate_buckets(
        &self,
        op: &HashJoin,
        left_rows: f64,
        right_rows: f64,
        total_rows: f64,
    ) -> BucketEstimate {
        let left_table = Self::build_side_table(op);
        let mut result = BucketEstimate::default();

        for pred in &op.join_predicates {
            let Some(column_stats) = self.resolve_predicate_column(pred, left_table) else {
                log::debug!("连接谓词 {} 无可用列统计信息，跳过桶估算", pred.expr());
                continue;
            };
            let estimate =
                self.predicate_bucket(&column_stats, left_rows, right_rows, total_rows);
            result.bucket_size_frac = result.bucket_size_frac.min(estimate.bucket_size_frac);
            result.mcv_freq = result.mcv_freq.min(estimate.mcv_freq);
        }

        result
    }

    /// 构建侧表：取第一个左侧键所在表，没有左侧键时取第一个谓词左操作数所在表
    fn build_side_table(op: &HashJoin) -> Option<TableId> {
        op.left_keys
            .first()
            .and_then(|key| key.as_column())
            .or_else(|| {
                op.join_predicates
                    .first()
                    .and_then(|pred| pred.expr().child(0))
                    .and_then(|child| child.as_column())
            })
            .map(|column| column.table_id)
    }

    /// 取谓词中属于构建侧的那一列的统计信息
    fn resolve_predicate_column(
        &self,
        pred: &AnnotatedExpression,
        left_table: Option<TableId>,
    ) -> Option<ColumnStatistics> {
        let expr = pred.expr();
        let left = expr.child(0)?.as_column()?;
        let right = expr.child(1)?.as_column()?;
        let column = if Some(left.table_id) == left_table {
            left
        } else {
            right
        };

        let stats = self.stats.get_column_stats(column)?;
        if stats.cardinality <= 0.0 {
            return None;
        }
        Some(stats)
    }

    fn predicate_bucket(
        &self,
        stats: &ColumnStatistics,
        left_rows: f64,
        right_rows: f64,
        total_rows: f64,
    ) -> BucketEstimate {
        let cardinality = stats.cardinality;
        let num_buckets = cardinality / self.config.hash_table_load_factor;
        let mcv_freq = stats.top_frequency().unwrap_or(0.0);

        let mut num_distinct = cardinality;
        let avg_freq = (1.0 - stats.frac_null) / num_distinct;

        // 按连接输出相对较大输入的比例缩放不同值个数
        let ratio = total_rows / left_rows.max(right_rows);
        if total_rows > 0.0 {
            num_distinct *= ratio;
            num_distinct = if num_distinct < 1.0 {
                1.0
            } else {
                num_distinct.trunc()
            };
        }

        let mut bucket_size_frac = if num_distinct > num_buckets {
            1.0 / num_buckets
        } else {
            1.0 / num_distinct
        };

        // 数据倾斜时按最高频值放大桶大小
        if avg_freq > 0.0 && mcv_freq > avg_freq {
            bucket_size_frac *= mcv_freq / avg_freq;
        }

        if bucket_size_frac < self.config.min_bucket_size_frac {
            bucket_size_frac = self.config.min_bucket_size_frac;
        } else if bucket_size_frac > 1.0 {
            bucket_size_frac = 1.0;
        }

        BucketEstimate {
            bucket_size_frac,
            mcv_freq,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ColumnId, Expression, Value};
    use crate::query::optimizer::cost::node_estimators::test_support::{column, expression, leaf, DB};
    use crate::query::optimizer::plan::{Memo, PhysicalOperator};
    use crate::query::optimizer::stats::{StatisticsManager, TableStatistics};

    const A: u32 = 1;
    const B: u32 = 2;

    /// A: 100000 行，基数 50000，空值 20%；B: 5 行，基数 5
    fn stats() -> StatisticsManager {
        let manager = StatisticsManager::new();
        manager
            .insert_table_stats(
                TableStatistics::new(DB, TableId::new(A), 100_000).with_column(
                    ColumnStatistics::new(DB, TableId::new(A), ColumnId::new(1))
                        .with_num_rows(100_000)
                        .with_cardinality(50_000.0)
                        .with_frac_null(0.2)
                        .with_most_common(vec![Value::Int(7)], vec![0.001]),
                ),
            )
            .expect("写入统计信息失败");
        manager
            .insert_table_stats(
                TableStatistics::new(DB, TableId::new(B), 5).with_column(
                    ColumnStatistics::new(DB, TableId::new(B), ColumnId::new(1))
                        .with_num_rows(5)
                        .with_cardinality(5.0)
                        .with_most_common(vec![Value::Int(1)], vec![0.2]),
                ),
            )
            .expect("写入统计信息失败");
        manager
    }

    fn join_pred(left: u32, right: u32) -> AnnotatedExpression {
        AnnotatedExpression::from(Expression::eq(column(left, 1), column(right, 1)))
    }

    fn nl_cost(outer: f64, inner: f64, total: f64) -> f64 {
        let stats = stats();
        let config = CostModelConfig::default();
        let op = NLJoin::new(vec![join_pred(A, B)]);
        let mut memo = Memo::new();
        let outer = leaf(&mut memo, outer);
        let inner = leaf(&mut memo, inner);
        let expr = expression(
            &mut memo,
            PhysicalOperator::InnerNLJoin(op.clone()),
            vec![outer, inner],
            Some(total),
        );
        JoinEstimator::new(&stats, &config)
            .nested_loop(&op, &ChildAccessor::new(&memo, &expr))
            .expect("计算失败")
    }

    fn hash_cost(left_table: u32, left_rows: f64, right_table: u32, right_rows: f64) -> f64 {
        let stats = stats();
        let config = CostModelConfig::default();
        let op = HashJoin::new(
            vec![join_pred(left_table, right_table)],
            vec![column(left_table, 1)],
            vec![column(right_table, 1)],
        );
        let mut memo = Memo::new();
        let left = leaf(&mut memo, left_rows);
        let right = leaf(&mut memo, right_rows);
        let expr = expression(
            &mut memo,
            PhysicalOperator::InnerHashJoin(op.clone()),
            vec![left, right],
            Some(1000.0),
        );
        JoinEstimator::new(&stats, &config)
            .hash_join(&op, &ChildAccessor::new(&memo, &expr))
            .expect("计算失败")
    }

    #[test]
    fn test_nested_loop_cost() {
        // 初始化 4 * 2 * 100000，元组 5 * 100000 * (3 + 2)，输出 2 * 1000
        assert_eq!(nl_cost(5.0, 100_000.0, 1000.0), 3_302_000.0);
    }

    #[test]
    fn test_nested_loop_prefers_small_outer() {
        assert!(nl_cost(5.0, 100_000.0, 1000.0) < nl_cost(100_000.0, 5.0, 1000.0));
    }

    #[test]
    fn test_nested_loop_clamps_empty_inputs() {
        // 行数被钳制为 1：1 * 1 * 5 + 2 * 0
        assert_eq!(nl_cost(0.0, 0.0, 0.0), 5.0);
    }

    #[test]
    fn test_hash_join_small_build_side() {
        assert_eq!(hash_cost(B, 5.0, A, 100_000.0), 777_010.0);
    }

    #[test]
    fn test_hash_join_large_build_side() {
        assert_eq!(hash_cost(A, 100_000.0, B, 5.0), 352_020.0);
    }

    #[test]
    fn test_bucket_estimate_uses_build_side_column() {
        let stats = stats();
        let config = CostModelConfig::default();
        let estimator = JoinEstimator::new(&stats, &config);

        // 左侧键在 A 上，谓词左操作数却是 B 的列：应选取 A 的列
        let op = HashJoin::new(vec![join_pred(B, A)], vec![column(A, 1)], vec![column(B, 1)]);
        let estimate = estimator.estimate_buckets(&op, 100_000.0, 5.0, 1000.0);
        assert_eq!(estimate.mcv_freq, 0.001);
        assert!((estimate.bucket_size_frac - 0.125).abs() < 1e-9);
    }

    #[test]
    fn test_bucket_estimate_without_keys() {
        let stats = stats();
        let config = CostModelConfig::default();
        let estimator = JoinEstimator::new(&stats, &config);

        // 无左侧键时以第一个谓词的左操作数确定构建侧
        let op = HashJoin::new(vec![join_pred(B, A)], vec![], vec![]);
        let estimate = estimator.estimate_buckets(&op, 5.0, 100_000.0, 1000.0);
        assert_eq!(estimate.bucket_size_frac, 1.0);
        assert_eq!(estimate.mcv_freq, 0.2);
    }

    #[test]
    fn test_bucket_estimate_skips_unresolvable_predicates() {
        let stats = stats();
        let config = CostModelConfig::default();
        let estimator = JoinEstimator::new(&stats, &config);

        let non_column = AnnotatedExpression::from(Expression::eq(
            column(A, 1),
            Expression::literal(3),
        ));
        let unknown_table = join_pred(9, 8);
        let op = HashJoin::new(vec![non_column, unknown_table], vec![], vec![]);
        assert_eq!(
            estimator.estimate_buckets(&op, 10.0, 10.0, 10.0),
            BucketEstimate::default()
        );
    }

    #[test]
    fn test_bucket_frac_lower_bound() {
        let manager = StatisticsManager::new();
        manager
            .insert_table_stats(
                TableStatistics::new(DB, TableId::new(A), 10_000_000).with_column(
                    ColumnStatistics::new(DB, TableId::new(A), ColumnId::new(1))
                        .with_num_rows(10_000_000)
                        .with_cardinality(10_000_000.0),
                ),
            )
            .expect("写入统计信息失败");
        let config = CostModelConfig::default();
        let estimator = JoinEstimator::new(&manager, &config);

        let op = HashJoin::new(vec![join_pred(A, B)], vec![column(A, 1)], vec![]);
        let estimate = estimator.estimate_buckets(&op, 10_000_000.0, 10_000_000.0, 10_000_000.0);
        assert_eq!(estimate.bucket_size_frac, config.min_bucket_size_frac);
        assert_eq!(estimate.mcv_freq, 0.0);
    }
}
