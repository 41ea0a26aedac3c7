//! 表统计信息模块
//!
//! 提供表级别的统计信息，用于扫描算子的代价估算

use std::collections::HashMap;

use super::ColumnStatistics;
use crate::core::{ColumnId, DatabaseId, TableId};

/// 表统计信息
///
/// 表统计信息由统计信息收集流程写入，代价模型只读。
#[derive(Debug, Clone, PartialEq)]
pub struct TableStatistics {
    pub database_id: DatabaseId,
    pub table_id: TableId,
    /// 表行数
    pub num_rows: u64,
    /// 是否为基表
    pub is_base_table: bool,
    /// 列统计信息
    column_stats: HashMap<ColumnId, ColumnStatistics>,
}

impl TableStatistics {
    /// 创建新的表统计信息
    pub fn new(database_id: DatabaseId, table_id: TableId, num_rows: u64) -> Self {
        Self {
            database_id,
            table_id,
            num_rows,
            is_base_table: true,
            column_stats: HashMap::new(),
        }
    }

    /// 添加列统计信息
    pub fn with_column(mut self, stats: ColumnStatistics) -> Self {
        self.add_column_stats(stats);
        self
    }

    pub fn add_column_stats(&mut self, stats: ColumnStatistics) {
        self.column_stats.insert(stats.column_id, stats);
    }

    pub fn get_column_stats(&self, column_id: ColumnId) -> Option<&ColumnStatistics> {
        self.column_stats.get(&column_id)
    }

    /// 已记录统计信息的列数
    pub fn column_count(&self) -> usize {
        self.column_stats.len()
    }

    pub fn has_column_stats(&self, column_id: ColumnId) -> bool {
        self.column_stats.contains_key(&column_id)
    }

    pub fn columns(&self) -> impl Iterator<Item = &ColumnStatistics> {
        self.column_stats.values()
    }

    /// 校验表及其所有列的统计信息
    pub fn validate(&self) -> Result<(), String> {
        for stats in self.column_stats.values() {
            if stats.table_id != self.table_id || stats.database_id != self.database_id {
                return Err(format!(
                    "列 {} 不属于表 {}.{}",
                    stats.column_ref(),
                    self.database_id,
                    self.table_id
                ));
            }
            stats.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_count() {
        let db = DatabaseId::new(1);
        let table = TableId::new(1);
        let stats = TableStatistics::new(db, table, 100)
            .with_column(ColumnStatistics::new(db, table, ColumnId::new(1)))
            .with_column(ColumnStatistics::new(db, table, ColumnId::new(2)));
        assert_eq!(stats.column_count(), 2);
        assert!(stats.has_column_stats(ColumnId::new(2)));
        assert!(stats.get_column_stats(ColumnId::new(3)).is_none());
        assert!(stats.validate().is_ok());
    }

    #[test]
    fn test_validate_foreign_column() {
        let db = DatabaseId::new(1);
        let stats = TableStatistics::new(db, TableId::new(1), 100)
            .with_column(ColumnStatistics::new(db, TableId::new(9), ColumnId::new(1)));
        assert!(stats.validate().is_err());
    }
}
