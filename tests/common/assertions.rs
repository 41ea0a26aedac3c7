//! 自定义断言辅助模块
//!
//! 提供测试中的常用断言函数

use costmodel::CostEstimate;

/// 断言结果成功，返回内部值
pub fn assert_ok<T, E: std::fmt::Debug>(result: Result<T, E>) -> T {
    result.expect("操作应该成功")
}

/// 断言估算结果已计算代价，返回代价
pub fn assert_costed(estimate: CostEstimate) -> f64 {
    match estimate {
        CostEstimate::Costed(cost) => cost,
        CostEstimate::NotCosted(kind) => panic!("{} 应该计算代价", kind),
    }
}

/// 断言 a 严格小于 b
pub fn assert_cheaper(a: f64, b: f64, what: &str) {
    assert!(a < b, "{}: 期望 {} < {}", what, a, b);
}
