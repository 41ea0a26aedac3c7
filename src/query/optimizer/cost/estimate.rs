//! 代价估算结果
//!
//! 一次代价计算的输出：要么是该算子的代价，要么明确表示该算子
//! 没有代价公式。调用方（搜索算法）决定未计算代价的计划是排除
//! 还是赋予哨兵代价。

use std::fmt;

use crate::query::optimizer::plan::OperatorKind;

/// 代价估算结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CostEstimate {
    /// 已计算的代价
    Costed(f64),
    /// 该算子种类没有代价公式
    NotCosted(OperatorKind),
}

impl CostEstimate {
    pub fn cost(&self) -> Option<f64> {
        match self {
            CostEstimate::Costed(cost) => Some(*cost),
            CostEstimate::NotCosted(_) => None,
        }
    }

    pub fn is_costed(&self) -> bool {
        matches!(self, CostEstimate::Costed(_))
    }

    /// 未计算代价时返回给定的哨兵代价
    pub fn or_worst_case(&self, sentinel: f64) -> f64 {
        self.cost().unwrap_or(sentinel)
    }
}

impl fmt::Display for CostEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CostEstimate::Costed(cost) => write!(f, "{:.2}", cost),
            CostEstimate::NotCosted(kind) => write!(f, "{} 未计算代价", kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_costed() {
        let estimate = CostEstimate::Costed(12.5);
        assert!(estimate.is_costed());
        assert_eq!(estimate.cost(), Some(12.5));
        assert_eq!(estimate.or_worst_case(f64::MAX), 12.5);
        assert_eq!(estimate.to_string(), "12.50");
    }

    #[test]
    fn test_not_costed() {
        let estimate = CostEstimate::NotCosted(OperatorKind::LeftHashJoin);
        assert!(!estimate.is_costed());
        assert_eq!(estimate.cost(), None);
        assert_eq!(estimate.or_worst_case(f64::MAX), f64::MAX);
        assert!(estimate.to_string().contains("LeftHashJoin"));
    }
}
