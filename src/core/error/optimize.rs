//! 优化器错误类型
//!
//! 定义查询优化器相关的错误类型，包括：
//! - 代价计算错误
//! - 计划形状错误（组或子节点缺失）
//! - 统计信息错误

use thiserror::Error;

use crate::core::types::GroupId;

/// 优化器错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OptimizeError {
    /// 代价计算错误
    #[error("代价计算错误: {0}")]
    Cost(#[from] CostError),

    /// 计划形状错误
    #[error("计划形状错误: {0}")]
    MalformedPlan(String),

    /// 统计信息错误
    #[error("统计信息错误: {0}")]
    StatisticsError(String),

    /// 内部优化错误
    #[error("内部优化错误: {0}")]
    InternalError(String),
}

/// 优化器结果类型
pub type OptimizeResult<T> = Result<T, OptimizeError>;

/// 代价计算相关错误
///
/// 缺少统计信息不属于错误，代价模型会退化为固定的哨兵代价。
/// 未实现代价公式的算子也不属于错误，见 `CostEstimate::NotCosted`。
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CostError {
    /// 搜索空间中不存在该组
    #[error("组不存在: {0}")]
    GroupNotFound(GroupId),

    /// 组的行数尚未估算
    #[error("组 {0} 的行数尚未估算")]
    RowCountNotEstimated(GroupId),

    /// 组表达式缺少算子所需的子组
    #[error("算子 {operator} 缺少第 {index} 个子组")]
    MissingChild {
        operator: &'static str,
        index: usize,
    },

    /// 谓词表达式深度超过上限
    #[error("表达式深度超过上限: {0}")]
    ExpressionTooDeep(usize),
}

/// 代价计算结果类型
pub type CostResult<T> = Result<T, CostError>;

impl CostError {
    /// 是否属于调用方违反计划形状约定的错误
    pub fn is_plan_shape_error(&self) -> bool {
        matches!(
            self,
            CostError::GroupNotFound(_)
                | CostError::RowCountNotEstimated(_)
                | CostError::MissingChild { .. }
        )
    }
}
