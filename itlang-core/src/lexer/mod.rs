//! 词法分析
//!
//! 目前只定义 token 类别；扫描逻辑建立在 [`crate::reader::SourceReader`] 之上。

pub mod token_kind;

pub use token_kind::TokenKind;
