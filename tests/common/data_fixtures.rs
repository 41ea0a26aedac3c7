//! 测试数据生成模块
//!
//! 五张测试表 A 到 E，每张表一列连接列：
//!
//! | 表 | 行数   | 基数  | 空值比例 | 最高频值频率 |
//! |----|--------|-------|----------|--------------|
//! | A  | 100000 | 50000 | 0.2      | 0.001        |
//! | B  | 5      | 5     | 0        | 0.2          |
//! | C  | 1000   | 1000  | 0        | 0.002        |
//! | D  | 100    | 100   | 0        | 0.01         |
//! | E  | 100000 | 50000 | 0.2      | 0.001        |

use costmodel::core::{
    AnnotatedExpression, ColumnId, DatabaseId, Expression, IndexId, TableId, Value,
};
use costmodel::query::optimizer::plan::{HashJoin, IndexScan, Limit, NLJoin, SeqScan};
use costmodel::{ColumnStatistics, PhysicalOperator, StatisticsManager, TableStatistics};

pub const DB: DatabaseId = DatabaseId(1);
pub const JOIN_COLUMN: ColumnId = ColumnId(1);

pub const TABLE_A: TableId = TableId(1);
pub const TABLE_B: TableId = TableId(2);
pub const TABLE_C: TableId = TableId(3);
pub const TABLE_D: TableId = TableId(4);
pub const TABLE_E: TableId = TableId(5);

/// 没有统计信息的表
pub const TABLE_UNKNOWN: TableId = TableId(99);

/// 连接组的输出行数
pub const JOIN_ROWS: f64 = 1000.0;

/// 表的行数
pub fn table_rows(table: TableId) -> f64 {
    match table {
        TABLE_A | TABLE_E => 100_000.0,
        TABLE_B => 5.0,
        TABLE_C => 1000.0,
        TABLE_D => 100.0,
        _ => 0.0,
    }
}

fn table_stats(
    table: TableId,
    rows: u64,
    cardinality: f64,
    frac_null: f64,
    mcv_freq: f64,
) -> TableStatistics {
    TableStatistics::new(DB, table, rows).with_column(
        ColumnStatistics::new(DB, table, JOIN_COLUMN)
            .with_num_rows(rows)
            .with_cardinality(cardinality)
            .with_frac_null(frac_null)
            .with_most_common(vec![Value::Int(1)], vec![mcv_freq])
            .with_base_table(true),
    )
}

/// 创建包含 A 到 E 五张表统计信息的管理器
pub fn fixture_statistics() -> StatisticsManager {
    let manager = StatisticsManager::new();
    let tables = [
        table_stats(TABLE_A, 100_000, 50_000.0, 0.2, 0.001),
        table_stats(TABLE_B, 5, 5.0, 0.0, 0.2),
        table_stats(TABLE_C, 1000, 1000.0, 0.0, 0.002),
        table_stats(TABLE_D, 100, 100.0, 0.0, 0.01),
        table_stats(TABLE_E, 100_000, 50_000.0, 0.2, 0.001),
    ];
    for stats in tables {
        manager
            .insert_table_stats(stats)
            .expect("写入测试统计信息失败");
    }
    manager
}

/// 表的连接列
pub fn column(table: TableId) -> Expression {
    Expression::column(DB, table, JOIN_COLUMN)
}

/// 两表连接列上的等值谓词
pub fn join_predicate(left: TableId, right: TableId) -> AnnotatedExpression {
    AnnotatedExpression::new(
        Expression::eq(column(left), column(right)),
        [table_alias(left), table_alias(right)],
    )
}

pub fn table_alias(table: TableId) -> String {
    format!("t{}", table.value())
}

pub fn seq_scan(table: TableId) -> PhysicalOperator {
    PhysicalOperator::SeqScan(SeqScan::new(DB, table, table_alias(table)))
}

pub fn index_scan(table: TableId) -> PhysicalOperator {
    PhysicalOperator::IndexScan(IndexScan::new(DB, table, IndexId::new(1), table_alias(table)))
}

pub fn limit(limit: u64) -> PhysicalOperator {
    PhysicalOperator::Limit(Limit::new(0, limit))
}

/// 以 outer 为外侧的嵌套循环内连接
pub fn inner_nl_join(outer: TableId, inner: TableId) -> PhysicalOperator {
    PhysicalOperator::InnerNLJoin(NLJoin::new(vec![join_predicate(outer, inner)]))
}

/// 以 left 为构建侧的哈希内连接
pub fn inner_hash_join(left: TableId, right: TableId) -> PhysicalOperator {
    PhysicalOperator::InnerHashJoin(hash_join(left, right))
}

pub fn hash_join(left: TableId, right: TableId) -> HashJoin {
    HashJoin::new(
        vec![join_predicate(left, right)],
        vec![column(left)],
        vec![column(right)],
    )
}
