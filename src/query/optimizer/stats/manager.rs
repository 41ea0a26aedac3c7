//! 统计信息管理器模块
//!
//! 统一管理所有表的统计信息，提供线程安全的访问

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use super::{StatisticsProvider, TableStatistics};
use crate::core::error::{OptimizeError, OptimizeResult};
use crate::core::{DatabaseId, TableId};

type TableKey = (DatabaseId, TableId);

/// 统计信息管理器
///
/// 内存中的统计信息存储，以 (数据库, 表) 为键
#[derive(Debug, Default)]
pub struct StatisticsManager {
    table_stats: RwLock<HashMap<TableKey, Arc<TableStatistics>>>,
}

impl StatisticsManager {
    /// 创建新的统计信息管理器
    pub fn new() -> Self {
        Self::default()
    }

    /// 写入表统计信息，已存在时替换
    pub fn insert_table_stats(&self, stats: TableStatistics) -> OptimizeResult<()> {
        stats.validate().map_err(OptimizeError::StatisticsError)?;
        let key = (stats.database_id, stats.table_id);
        log::debug!("更新表统计信息: {}.{}, 行数 {}", key.0, key.1, stats.num_rows);
        self.table_stats.write().insert(key, Arc::new(stats));
        Ok(())
    }

    /// 删除表统计信息
    pub fn remove_table_stats(
        &self,
        database_id: DatabaseId,
        table_id: TableId,
    ) -> Option<Arc<TableStatistics>> {
        self.table_stats.write().remove(&(database_id, table_id))
    }

    /// 清除所有统计信息
    pub fn clear_all(&self) {
        self.table_stats.write().clear();
    }

    /// 已记录统计信息的表数量
    pub fn table_count(&self) -> usize {
        self.table_stats.read().len()
    }

    /// 获取所有已记录的表
    pub fn get_all_tables(&self) -> Vec<(DatabaseId, TableId)> {
        let mut keys: Vec<_> = self.table_stats.read().keys().copied().collect();
        keys.sort();
        keys
    }
}

impl StatisticsProvider for StatisticsManager {
    fn get_table_stats(
        &self,
        database_id: DatabaseId,
        table_id: TableId,
    ) -> Option<Arc<TableStatistics>> {
        self.table_stats.read().get(&(database_id, table_id)).cloned()
    }
}

impl Clone for StatisticsManager {
    fn clone(&self) -> Self {
        Self {
            table_stats: RwLock::new(self.table_stats.read().clone()),
        }
    }
}
