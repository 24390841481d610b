//! 字符源
//!
//! 字节流 → [`SourceReader`] → 词法分析器

pub mod result;
pub mod source;

pub use result::{ReadResult, StreamError};
pub use source::{Chars, SourceReader};
