//! 子组访问器
//!
//! 从搜索空间中读取组表达式自身所在组和子组的估算行数

use crate::core::error::{CostError, CostResult};
use crate::core::types::GroupId;
use crate::query::optimizer::plan::{GroupExpression, Memo};

/// 子组访问器
///
/// 子组的行数必须已由基数估算阶段写入，这里不做任何重算。
#[derive(Debug, Clone, Copy)]
pub struct ChildAccessor<'a> {
    memo: &'a Memo,
    expr: &'a GroupExpression,
}

impl<'a> ChildAccessor<'a> {
    pub fn new(memo: &'a Memo, expr: &'a GroupExpression) -> Self {
        Self { memo, expr }
    }

    /// 组表达式自身所在组的估算行数
    pub fn output_rows(&self) -> CostResult<f64> {
        self.group_rows(self.expr.group_id())
    }

    /// 第 index 个子组的估算行数
    pub fn child_rows(&self, index: usize) -> CostResult<f64> {
        let child = self
            .expr
            .child_group_id(index)
            .ok_or(CostError::MissingChild {
                operator: self.expr.op().name(),
                index,
            })?;
        self.group_rows(child)
    }

    fn group_rows(&self, id: GroupId) -> CostResult<f64> {
        self.memo
            .get_group_by_id(id)
            .ok_or(CostError::GroupNotFound(id))?
            .num_rows()
            .ok_or(CostError::RowCountNotEstimated(id))
    }
}
