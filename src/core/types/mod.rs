// 核心类型系统模块
//
// 包含目录标识、表达式与操作符定义

use serde::{Deserialize, Serialize};
use std::fmt;

pub mod expression;
pub mod operators;

pub use expression::{AnnotatedExpression, ColumnRef, DataType, Expression, ExpressionType};
pub use operators::{BinaryOperator, UnaryOperator};

/// 定义目录标识的新类型包装
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident, $inner:ty, $prefix:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name(pub $inner);

        impl $name {
            pub const fn new(id: $inner) -> Self {
                Self(id)
            }

            pub const fn value(self) -> $inner {
                self.0
            }
        }

        impl From<$inner> for $name {
            fn from(id: $inner) -> Self {
                Self(id)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}#{}", $prefix, self.0)
            }
        }
    };
}

define_id!(
    /// 数据库标识
    DatabaseId, u32, "db"
);
define_id!(
    /// 表标识
    TableId, u32, "table"
);
define_id!(
    /// 列标识
    ColumnId, u32, "col"
);
define_id!(
    /// 索引标识
    IndexId, u32, "index"
);
define_id!(
    /// 等价组标识（由搜索算法分配）
    GroupId, usize, "group"
);
