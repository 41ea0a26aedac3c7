//! 统计信息提供者
//!
//! 代价模型通过该 trait 只读地访问统计信息，具体存储由外部负责。

use std::sync::Arc;

use super::{ColumnStatistics, TableStatistics};
use crate::core::types::ColumnRef;
use crate::core::{DatabaseId, TableId};

/// 统计信息提供者 trait
///
/// 返回 `Arc` 快照，调用方在计算期间不持有任何锁。
/// 没有统计信息时返回 None，代价模型据此退化为哨兵代价。
pub trait StatisticsProvider: Send + Sync {
    /// 获取表的统计信息
    fn get_table_stats(
        &self,
        database_id: DatabaseId,
        table_id: TableId,
    ) -> Option<Arc<TableStatistics>>;

    /// 获取列的统计信息
    fn get_column_stats(&self, column: &ColumnRef) -> Option<ColumnStatistics> {
        self.get_table_stats(column.database_id, column.table_id)
            .and_then(|table| table.get_column_stats(column.column_id).cloned())
    }
}

impl<T: StatisticsProvider + ?Sized> StatisticsProvider for Arc<T> {
    fn get_table_stats(
        &self,
        database_id: DatabaseId,
        table_id: TableId,
    ) -> Option<Arc<TableStatistics>> {
        (**self).get_table_stats(database_id, table_id)
    }
}
