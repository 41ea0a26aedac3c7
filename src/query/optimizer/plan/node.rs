//! 组表达式定义
//!
//! 组表达式是等价组中的一个具体算子实现，引用若干子组。
//! 由搜索算法创建，创建后不可变。

use super::operator::PhysicalOperator;
use crate::core::types::GroupId;

/// 组表达式
#[derive(Debug, Clone, PartialEq)]
pub struct GroupExpression {
    group_id: GroupId,
    child_groups: Vec<GroupId>,
    op: PhysicalOperator,
}

impl GroupExpression {
    pub fn new(group_id: GroupId, op: PhysicalOperator, child_groups: Vec<GroupId>) -> Self {
        Self {
            group_id,
            child_groups,
            op,
        }
    }

    /// 所属组
    pub fn group_id(&self) -> GroupId {
        self.group_id
    }

    /// 第 index 个子组
    pub fn child_group_id(&self, index: usize) -> Option<GroupId> {
        self.child_groups.get(index).copied()
    }

    pub fn child_groups(&self) -> &[GroupId] {
        &self.child_groups
    }

    pub fn child_count(&self) -> usize {
        self.child_groups.len()
    }

    /// 算子内容
    pub fn op(&self) -> &PhysicalOperator {
        &self.op
    }
}
