//! Itlang - character source and token kinds for the itlang toolchain
//!
//! # Architecture
//!
//! ```text
//! itlang-config/  - Pure configuration data (no logic)
//! itlang-log/     - Explicitly passed structured logger
//! itlang-core/    - SourceReader (lookahead character source) and TokenKind
//! itlang-cli/     - `itlang` binary: dump the characters of a file
//! ```
//!
//! # Quick Start
//!
//! ```
//! use itlang::{ReadResult, SourceReader};
//!
//! let mut reader = SourceReader::from_text("let");
//! assert_eq!(reader.next_char(), ReadResult::Char('l'));
//! reader.unread('l');
//! assert_eq!(reader.next_char(), ReadResult::Char('l'));
//! assert_eq!(reader.next_char(), ReadResult::Char('e'));
//! ```

pub use itlang_config as config;
pub use itlang_core as core;
pub use itlang_log as log;

// 重导出常用类型
pub use itlang_config::{Phase, ReaderConfig};
pub use itlang_core::{ReadResult, SourceReader, StreamError, TokenKind};
pub use itlang_log::{Level, LogConfig, Logger};
