//! 扫描操作估算器
//!
//! 为扫描算子提供代价估算：
//! - SeqScan
//! - IndexScan
//! - QueryDerivedScan

use crate::core::error::CostResult;
use crate::query::optimizer::cost::{ChildAccessor, CostModelConfig};
use crate::query::optimizer::plan::{IndexScan, QueryDerivedScan, SeqScan};
use crate::query::optimizer::stats::StatisticsProvider;

/// 扫描操作估算器
pub struct ScanEstimator<'a> {
    stats: &'a dyn StatisticsProvider,
    config: &'a CostModelConfig,
}

impl<'a> ScanEstimator<'a> {
    /// 创建新的扫描估算器
    pub fn new(stats: &'a dyn StatisticsProvider, config: &'a CostModelConfig) -> Self {
        Self { stats, config }
    }

    /// 顺序扫描代价
    ///
    /// 逐行物化全表。没有表统计信息或表统计信息不含任何列时返回哨兵代价 1.0。
    pub fn seq_scan(&self, op: &SeqScan) -> f64 {
        match self.stats.get_table_stats(op.database_id, op.table_id) {
            Some(table) if table.column_count() > 0 => {
                table.num_rows as f64 * self.config.tuple_cpu_cost
            }
            _ => {
                log::debug!(
                    "{} 缺少统计信息，顺序扫描使用哨兵代价",
                    op.table_id
                );
                1.0
            }
        }
    }

    /// 索引扫描代价
    ///
    /// 一次 B 树下探（以表行数的对数近似）加上产出行的物化代价。
    /// 统计信息缺失、不含列或表为空时返回 0.0。
    pub fn index_scan(&self, op: &IndexScan, children: &ChildAccessor<'_>) -> CostResult<f64> {
        let table = match self.stats.get_table_stats(op.database_id, op.table_id) {
            Some(table) if table.column_count() > 0 && table.num_rows > 0 => table,
            _ => {
                log::debug!("{} 缺少统计信息，索引扫描代价记为 0", op.table_id);
                return Ok(0.0);
            }
        };

        let output_rows = children.output_rows()?;
        let tuple_cost = self.config.tuple_cpu_cost;
        Ok((table.num_rows as f64).log2() * tuple_cost + output_rows * tuple_cost)
    }

    /// 派生表扫描代价
    ///
    /// 子查询的代价计入其子计划，这里不重复计算。
    pub fn query_derived_scan(&self, _op: &QueryDerivedScan) -> f64 {
        0.0
    }
}
