//! 物理算子定义
//!
//! 代价模型按算子种类分派代价公式。算子集合是封闭的，新增算子时
//! 编译器会要求每个 `match` 处理新变体。

use std::fmt;

use crate::core::types::{ColumnId, DatabaseId, IndexId, TableId};
use crate::core::{AnnotatedExpression, Expression};

/// 排序方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// 排序键
#[derive(Debug, Clone, PartialEq)]
pub struct SortKey {
    pub expr: Expression,
    pub direction: SortDirection,
}

/// 顺序扫描
#[derive(Debug, Clone, PartialEq)]
pub struct SeqScan {
    pub database_id: DatabaseId,
    pub table_id: TableId,
    pub predicates: Vec<AnnotatedExpression>,
    pub table_alias: String,
    pub is_for_update: bool,
}

impl SeqScan {
    pub fn new(database_id: DatabaseId, table_id: TableId, table_alias: impl Into<String>) -> Self {
        Self {
            database_id,
            table_id,
            predicates: Vec::new(),
            table_alias: table_alias.into(),
            is_for_update: false,
        }
    }

    pub fn with_predicates(mut self, predicates: Vec<AnnotatedExpression>) -> Self {
        self.predicates = predicates;
        self
    }
}

/// 索引扫描
#[derive(Debug, Clone, PartialEq)]
pub struct IndexScan {
    pub database_id: DatabaseId,
    pub table_id: TableId,
    pub index_id: IndexId,
    pub predicates: Vec<AnnotatedExpression>,
    pub table_alias: String,
    pub is_for_update: bool,
}

impl IndexScan {
    pub fn new(
        database_id: DatabaseId,
        table_id: TableId,
        index_id: IndexId,
        table_alias: impl Into<String>,
    ) -> Self {
        Self {
            database_id,
            table_id,
            index_id,
            predicates: Vec::new(),
            table_alias: table_alias.into(),
            is_for_update: false,
        }
    }
}

/// 子查询派生表扫描
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryDerivedScan {
    pub table_alias: String,
}

/// 排序
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderBy {
    pub sort_keys: Vec<SortKey>,
}

/// 限制输出行数
#[derive(Debug, Clone, PartialEq)]
pub struct Limit {
    pub offset: u64,
    pub limit: u64,
    pub sort_keys: Vec<SortKey>,
}

impl Limit {
    pub fn new(offset: u64, limit: u64) -> Self {
        Self {
            offset,
            limit,
            sort_keys: Vec::new(),
        }
    }
}

/// 索引嵌套循环连接
#[derive(Debug, Clone, PartialEq)]
pub struct IndexJoin {
    pub database_id: DatabaseId,
    pub table_id: TableId,
    pub index_id: IndexId,
    pub join_predicates: Vec<AnnotatedExpression>,
}

/// 嵌套循环连接
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NLJoin {
    pub join_predicates: Vec<AnnotatedExpression>,
}

impl NLJoin {
    pub fn new(join_predicates: Vec<AnnotatedExpression>) -> Self {
        Self { join_predicates }
    }
}

/// 哈希连接
///
/// 左侧（子组 0）构建哈希表，右侧（子组 1）探测。
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HashJoin {
    pub join_predicates: Vec<AnnotatedExpression>,
    pub left_keys: Vec<Expression>,
    pub right_keys: Vec<Expression>,
}

impl HashJoin {
    pub fn new(
        join_predicates: Vec<AnnotatedExpression>,
        left_keys: Vec<Expression>,
        right_keys: Vec<Expression>,
    ) -> Self {
        Self {
            join_predicates,
            left_keys,
            right_keys,
        }
    }
}

/// 插入常量行
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    pub database_id: DatabaseId,
    pub table_id: TableId,
    pub columns: Vec<ColumnId>,
    pub values: Vec<Vec<Expression>>,
}

/// 插入查询结果
#[derive(Debug, Clone, PartialEq)]
pub struct InsertSelect {
    pub database_id: DatabaseId,
    pub table_id: TableId,
}

/// 删除
#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    pub database_id: DatabaseId,
    pub table_id: TableId,
}

/// 更新
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    pub database_id: DatabaseId,
    pub table_id: TableId,
    pub updates: Vec<(ColumnId, Expression)>,
}

/// 分组聚合
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GroupBy {
    pub columns: Vec<Expression>,
    pub having: Vec<AnnotatedExpression>,
}

/// 物理算子
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicalOperator {
    // 扫描
    SeqScan(SeqScan),
    IndexScan(IndexScan),
    QueryDerivedScan(QueryDerivedScan),

    // 排序和限制
    OrderBy(OrderBy),
    Limit(Limit),

    // 连接
    InnerIndexJoin(IndexJoin),
    InnerNLJoin(NLJoin),
    LeftNLJoin(NLJoin),
    RightNLJoin(NLJoin),
    OuterNLJoin(NLJoin),
    InnerHashJoin(HashJoin),
    LeftHashJoin(HashJoin),
    RightHashJoin(HashJoin),
    OuterHashJoin(HashJoin),

    // DML
    Insert(Insert),
    InsertSelect(InsertSelect),
    Delete(Delete),
    Update(Update),

    // 分组和聚合
    HashGroupBy(GroupBy),
    SortGroupBy(GroupBy),
    Aggregate,
}

/// 算子种类（不带参数的判别值）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorKind {
    SeqScan,
    IndexScan,
    QueryDerivedScan,
    OrderBy,
    Limit,
    InnerIndexJoin,
    InnerNLJoin,
    LeftNLJoin,
    RightNLJoin,
    OuterNLJoin,
    InnerHashJoin,
    LeftHashJoin,
    RightHashJoin,
    OuterHashJoin,
    Insert,
    InsertSelect,
    Delete,
    Update,
    HashGroupBy,
    SortGroupBy,
    Aggregate,
}

impl OperatorKind {
    pub fn name(&self) -> &'static str {
        match self {
            OperatorKind::SeqScan => "SeqScan",
            OperatorKind::IndexScan => "IndexScan",
            OperatorKind::QueryDerivedScan => "QueryDerivedScan",
            OperatorKind::OrderBy => "OrderBy",
            OperatorKind::Limit => "Limit",
            OperatorKind::InnerIndexJoin => "InnerIndexJoin",
            OperatorKind::InnerNLJoin => "InnerNLJoin",
            OperatorKind::LeftNLJoin => "LeftNLJoin",
            OperatorKind::RightNLJoin => "RightNLJoin",
            OperatorKind::OuterNLJoin => "OuterNLJoin",
            OperatorKind::InnerHashJoin => "InnerHashJoin",
            OperatorKind::LeftHashJoin => "LeftHashJoin",
            OperatorKind::RightHashJoin => "RightHashJoin",
            OperatorKind::OuterHashJoin => "OuterHashJoin",
            OperatorKind::Insert => "Insert",
            OperatorKind::InsertSelect => "InsertSelect",
            OperatorKind::Delete => "Delete",
            OperatorKind::Update => "Update",
            OperatorKind::HashGroupBy => "HashGroupBy",
            OperatorKind::SortGroupBy => "SortGroupBy",
            OperatorKind::Aggregate => "Aggregate",
        }
    }

    /// 算子要求的子组数量
    pub fn arity(&self) -> usize {
        match self {
            OperatorKind::SeqScan
            | OperatorKind::IndexScan
            | OperatorKind::QueryDerivedScan
            | OperatorKind::Insert => 0,
            OperatorKind::OrderBy
            | OperatorKind::Limit
            | OperatorKind::InnerIndexJoin
            | OperatorKind::InsertSelect
            | OperatorKind::Delete
            | OperatorKind::Update
            | OperatorKind::HashGroupBy
            | OperatorKind::SortGroupBy
            | OperatorKind::Aggregate => 1,
            OperatorKind::InnerNLJoin
            | OperatorKind::LeftNLJoin
            | OperatorKind::RightNLJoin
            | OperatorKind::OuterNLJoin
            | OperatorKind::InnerHashJoin
            | OperatorKind::LeftHashJoin
            | OperatorKind::RightHashJoin
            | OperatorKind::OuterHashJoin => 2,
        }
    }
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl PhysicalOperator {
    pub fn kind(&self) -> OperatorKind {
        match self {
            PhysicalOperator::SeqScan(_) => OperatorKind::SeqScan,
            PhysicalOperator::IndexScan(_) => OperatorKind::IndexScan,
            PhysicalOperator::QueryDerivedScan(_) => OperatorKind::QueryDerivedScan,
            PhysicalOperator::OrderBy(_) => OperatorKind::OrderBy,
            PhysicalOperator::Limit(_) => OperatorKind::Limit,
            PhysicalOperator::InnerIndexJoin(_) => OperatorKind::InnerIndexJoin,
            PhysicalOperator::InnerNLJoin(_) => OperatorKind::InnerNLJoin,
            PhysicalOperator::LeftNLJoin(_) => OperatorKind::LeftNLJoin,
            PhysicalOperator::RightNLJoin(_) => OperatorKind::RightNLJoin,
            PhysicalOperator::OuterNLJoin(_) => OperatorKind::OuterNLJoin,
            PhysicalOperator::InnerHashJoin(_) => OperatorKind::InnerHashJoin,
            PhysicalOperator::LeftHashJoin(_) => OperatorKind::LeftHashJoin,
            PhysicalOperator::RightHashJoin(_) => OperatorKind::RightHashJoin,
            PhysicalOperator::OuterHashJoin(_) => OperatorKind::OuterHashJoin,
            PhysicalOperator::Insert(_) => OperatorKind::Insert,
            PhysicalOperator::InsertSelect(_) => OperatorKind::InsertSelect,
            PhysicalOperator::Delete(_) => OperatorKind::Delete,
            PhysicalOperator::Update(_) => OperatorKind::Update,
            PhysicalOperator::HashGroupBy(_) => OperatorKind::HashGroupBy,
            PhysicalOperator::SortGroupBy(_) => OperatorKind::SortGroupBy,
            PhysicalOperator::Aggregate => OperatorKind::Aggregate,
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind().name()
    }
}

impl fmt::Display for PhysicalOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
