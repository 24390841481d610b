//! itlang-log - 结构化日志系统
//!
//! 为 Itlang 工具链设计的日志系统，特点：
//! - **显式传递**：无全局logger，logger 作为参数或字段传入
//! - **可测试**：[`LogRingBuffer`] 保留最近的记录，测试可直接断言
//! - **可定制格式**：输出型 sink 通过 [`RecordFormat`] 决定文本形式
//!
//! # 快速开始
//!
//! ```
//! use itlang_log::{debug, Level, LogRingBuffer, Logger};
//!
//! let ring = LogRingBuffer::new(100);
//! let logger = Logger::new(Level::Debug).with_sink(ring.clone());
//! debug!(logger, "read {} chars", 5);
//! assert_eq!(ring.messages(), vec!["read 5 chars"]);
//! ```
//!
//! # 输出目标
//!
//! | Feature  | Sink         |
//! |----------|--------------|
//! | `stdout` | `StdoutSink` |
//! | `file`   | `FileSink`   |
//!
//! 环形缓冲区总是可用。

mod config;
mod format;
mod logger;
mod macros;
mod record;
mod ring_buffer;

pub use config::{LogConfig, OutputConfig};
pub use format::{AlternatingPrefix, FullFormat, RecordFormat};
pub use logger::{LogSink, Logger};
pub use record::{Level, Record};
pub use ring_buffer::{LogRingBuffer, RingBufferStats};

#[cfg(feature = "file")]
pub use logger::FileSink;
#[cfg(feature = "stdout")]
pub use logger::StdoutSink;

// 宏通过 #[macro_export] 自动导出到 crate 根：
// trace!, debug!, info!, warn!, error!, log!

/// 日志结果类型
pub type Result<T> = std::result::Result<T, Error>;

/// 日志系统错误类型
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// 输出目标无法建立
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// 无法识别的日志级别名
    #[error("Unknown log level '{0}'")]
    InvalidLevel(String),
}
