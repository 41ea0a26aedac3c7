//! 列统计信息模块
//!
//! 提供列级别的统计信息，用于哈希连接的桶大小估算

use crate::core::types::ColumnRef;
use crate::core::{ColumnId, DatabaseId, TableId, Value};

/// 列统计信息
///
/// 对应 PostgreSQL 的 pg_stats。最常见值及其频率按频率降序排列。
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnStatistics {
    pub database_id: DatabaseId,
    pub table_id: TableId,
    pub column_id: ColumnId,
    /// 列所在表的行数
    pub num_rows: u64,
    /// 不同值数量
    pub cardinality: f64,
    /// 空值比例（0.0 - 1.0）
    pub frac_null: f64,
    /// 最常见值列表（MCV）
    pub most_common_vals: Vec<Value>,
    /// 最常见值的频率
    pub most_common_freqs: Vec<f64>,
    /// 直方图边界值
    pub histogram_bounds: Vec<f64>,
    /// 是否为基表列
    pub is_base_table: bool,
}

impl ColumnStatistics {
    /// 创建新的列统计信息
    pub fn new(database_id: DatabaseId, table_id: TableId, column_id: ColumnId) -> Self {
        Self {
            database_id,
            table_id,
            column_id,
            num_rows: 0,
            cardinality: 0.0,
            frac_null: 0.0,
            most_common_vals: Vec::new(),
            most_common_freqs: Vec::new(),
            histogram_bounds: Vec::new(),
            is_base_table: true,
        }
    }

    pub fn with_num_rows(mut self, num_rows: u64) -> Self {
        self.num_rows = num_rows;
        self
    }

    pub fn with_cardinality(mut self, cardinality: f64) -> Self {
        self.cardinality = cardinality;
        self
    }

    pub fn with_frac_null(mut self, frac_null: f64) -> Self {
        self.frac_null = frac_null;
        self
    }

    /// 设置最常见值及其频率
    pub fn with_most_common(mut self, vals: Vec<Value>, freqs: Vec<f64>) -> Self {
        self.most_common_vals = vals;
        self.most_common_freqs = freqs;
        self
    }

    pub fn with_histogram_bounds(mut self, bounds: Vec<f64>) -> Self {
        self.histogram_bounds = bounds;
        self
    }

    pub fn with_base_table(mut self, is_base_table: bool) -> Self {
        self.is_base_table = is_base_table;
        self
    }

    /// 列引用
    pub fn column_ref(&self) -> ColumnRef {
        ColumnRef::new(self.database_id, self.table_id, self.column_id)
    }

    /// 最高的 MCV 频率，没有 MCV 时返回 None
    pub fn top_frequency(&self) -> Option<f64> {
        self.most_common_freqs
            .iter()
            .copied()
            .fold(None, |acc: Option<f64>, f| Some(acc.map_or(f, |m| m.max(f))))
    }

    /// 获取 MCV 的总频率
    pub fn mcv_total_frequency(&self) -> f64 {
        self.most_common_freqs.iter().sum()
    }

    /// 校验统计信息内容
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.frac_null) {
            return Err(format!("{} 的空值比例超出范围: {}", self.column_ref(), self.frac_null));
        }
        if self.cardinality < 0.0 || self.cardinality.is_nan() {
            return Err(format!("{} 的基数非法: {}", self.column_ref(), self.cardinality));
        }
        if !self.most_common_vals.is_empty()
            && self.most_common_vals.len() != self.most_common_freqs.len()
        {
            return Err(format!(
                "{} 的最常见值与频率数量不一致: {} != {}",
                self.column_ref(),
                self.most_common_vals.len(),
                self.most_common_freqs.len()
            ));
        }
        if self.most_common_freqs.windows(2).any(|w| w[0] < w[1]) {
            return Err(format!("{} 的最常见值频率未按降序排列", self.column_ref()));
        }
        Ok(())
    }
}
