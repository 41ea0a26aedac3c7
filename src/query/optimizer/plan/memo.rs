//! 搜索空间（Memo）定义
//!
//! Memo 持有全部等价组。代价模型只通过组标识读取子组的估算行数，
//! 不修改 Memo。

use super::group::Group;
use super::node::GroupExpression;
use super::operator::PhysicalOperator;
use crate::core::error::{OptimizeError, OptimizeResult};
use crate::core::types::GroupId;

#[derive(Debug, Clone, Default)]
pub struct Memo {
    groups: Vec<Group>,
}

impl Memo {
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建空组
    pub fn add_group(&mut self) -> GroupId {
        let id = GroupId::new(self.groups.len());
        self.groups.push(Group::new(id));
        id
    }

    /// 向已有组中插入组表达式，返回其在组内的下标
    ///
    /// 子组必须已存在，子组数量必须与算子要求一致。
    pub fn insert_expression(
        &mut self,
        group_id: GroupId,
        op: PhysicalOperator,
        child_groups: Vec<GroupId>,
    ) -> OptimizeResult<usize> {
        let arity = op.kind().arity();
        if child_groups.len() != arity {
            return Err(OptimizeError::MalformedPlan(format!(
                "{} 需要 {} 个子组，实际为 {}",
                op.name(),
                arity,
                child_groups.len()
            )));
        }
        if let Some(missing) = child_groups.iter().find(|c| self.get_group_by_id(**c).is_none()) {
            return Err(OptimizeError::MalformedPlan(format!("子组不存在: {}", missing)));
        }
        let group = self
            .get_group_mut(group_id)
            .ok_or_else(|| OptimizeError::MalformedPlan(format!("组不存在: {}", group_id)))?;
        Ok(group.add_expression(GroupExpression::new(group_id, op, child_groups)))
    }

    /// 创建新组并插入组表达式
    pub fn insert_new_group(
        &mut self,
        op: PhysicalOperator,
        child_groups: Vec<GroupId>,
    ) -> OptimizeResult<GroupId> {
        let group_id = self.add_group();
        match self.insert_expression(group_id, op, child_groups) {
            Ok(_) => Ok(group_id),
            Err(e) => {
                self.groups.pop();
                Err(e)
            }
        }
    }

    pub fn get_group_by_id(&self, id: GroupId) -> Option<&Group> {
        self.groups.get(id.value())
    }

    pub fn get_group_mut(&mut self, id: GroupId) -> Option<&mut Group> {
        self.groups.get_mut(id.value())
    }

    /// 写入组的估算行数
    pub fn set_num_rows(&mut self, id: GroupId, num_rows: f64) -> OptimizeResult<()> {
        let group = self
            .get_group_mut(id)
            .ok_or_else(|| OptimizeError::MalformedPlan(format!("组不存在: {}", id)))?;
        group.set_num_rows(num_rows);
        Ok(())
    }

    pub fn group_expression(&self, id: GroupId, index: usize) -> Option<&GroupExpression> {
        self.get_group_by_id(id).and_then(|g| g.expression(index))
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
