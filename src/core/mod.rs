pub mod error;
pub mod types;
pub mod value;

// 错误和结果类型
pub use error::{ConfigError, CostError, CostResult, OptimizeError, OptimizeResult};

// 核心数据类型
pub use value::Value;

// 表达式系统类型
pub use types::expression::{AnnotatedExpression, ColumnRef, DataType, Expression, ExpressionType};
pub use types::operators::{BinaryOperator, UnaryOperator};

// 目录标识
pub use types::{ColumnId, DatabaseId, GroupId, IndexId, TableId};
