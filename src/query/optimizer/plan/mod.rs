//! 搜索空间表示模块
//! 提供代价计算所需的等价组、组表达式和物理算子数据结构

pub mod group;
pub mod memo;
pub mod node;
pub mod operator;

pub use group::Group;
pub use memo::Memo;
pub use node::GroupExpression;
pub use operator::{
    Delete, GroupBy, HashJoin, IndexJoin, IndexScan, Insert, InsertSelect, Limit, NLJoin,
    OperatorKind, OrderBy, PhysicalOperator, QueryDerivedScan, SeqScan, SortDirection, SortKey,
    Update,
};
