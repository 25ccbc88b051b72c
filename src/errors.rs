//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_proffy_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum ProffyError {
            $($variant(String),)*
        }

        impl ProffyError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(ProffyError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(ProffyError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(ProffyError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl ProffyError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        ProffyError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_proffy_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    MissingFilter("E004", "Missing Filter"),
    Validation("E005", "Validation Error"),
    TimeFormat("E006", "Time Format Error"),
    RegistrationFailed("E007", "Registration Failed"),
}

impl ProffyError {
    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for ProffyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ProffyError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for ProffyError {
    fn from(err: sea_orm::DbErr) -> Self {
        ProffyError::DatabaseOperation(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ProffyError>;
