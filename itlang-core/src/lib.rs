//! Itlang Core - character source and token kinds
//!
//! Pure logic over caller-supplied streams: no file opening, no terminal output.
//! Loggers and configuration are passed explicitly, never read from global state.

pub mod lexer;
pub mod reader;

// Re-export common types
pub use lexer::TokenKind;
pub use reader::{ReadResult, SourceReader, StreamError};

// Re-export config types from itlang-config
pub use itlang_config::{Phase, ReaderConfig};
