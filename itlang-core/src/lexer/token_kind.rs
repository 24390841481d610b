//! Itlang Token 类型定义
//!
//! 词法分析器产出的 token 类别的唯一定义处。

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Default)]
#[repr(u8)]
pub enum TokenKind {
    // 错误/状态类型 (0-1)
    /// 无法识别的输入（默认值）
    #[default]
    Illegal = 0,
    /// 输入结束
    End,

    // 标识符 (10)
    Identifier = 10,

    // 字面量 (20)
    Integer = 20,

    // 运算符 (30-31)
    Assign = 30,
    Plus,

    // 分隔符 (40-41)
    Comma = 40,
    Semicolon,

    // 括号 (50-53)
    LeftParen = 50,
    RightParen,
    LeftBrace,
    RightBrace,

    // 关键字 (60-61)
    Func = 60,
    Let,
}

impl TokenKind {
    /// 所有 token 类别，按判别值排序
    pub const ALL: [TokenKind; 14] = [
        TokenKind::Illegal,
        TokenKind::End,
        TokenKind::Identifier,
        TokenKind::Integer,
        TokenKind::Assign,
        TokenKind::Plus,
        TokenKind::Comma,
        TokenKind::Semicolon,
        TokenKind::LeftParen,
        TokenKind::RightParen,
        TokenKind::LeftBrace,
        TokenKind::RightBrace,
        TokenKind::Func,
        TokenKind::Let,
    ];

    pub fn is_keyword(self) -> bool {
        matches!(self, TokenKind::Func | TokenKind::Let)
    }

    pub fn is_literal(self) -> bool {
        matches!(self, TokenKind::Integer)
    }

    /// 固定拼写的 token 的源文本；标识符、字面量等开放类别返回 `None`
    pub fn fixed_lexeme(self) -> Option<&'static str> {
        match self {
            TokenKind::Assign => Some("="),
            TokenKind::Plus => Some("+"),
            TokenKind::Comma => Some(","),
            TokenKind::Semicolon => Some(";"),
            TokenKind::LeftParen => Some("("),
            TokenKind::RightParen => Some(")"),
            TokenKind::LeftBrace => Some("{"),
            TokenKind::RightBrace => Some("}"),
            TokenKind::Func => Some("func"),
            TokenKind::Let => Some("let"),
            TokenKind::Illegal | TokenKind::End | TokenKind::Identifier | TokenKind::Integer => {
                None
            }
        }
    }

    /// 用于诊断信息的名称
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Illegal => "illegal",
            TokenKind::End => "end of input",
            TokenKind::Identifier => "identifier",
            TokenKind::Integer => "integer",
            TokenKind::Assign => "'='",
            TokenKind::Plus => "'+'",
            TokenKind::Comma => "','",
            TokenKind::Semicolon => "';'",
            TokenKind::LeftParen => "'('",
            TokenKind::RightParen => "')'",
            TokenKind::LeftBrace => "'{'",
            TokenKind::RightBrace => "'}'",
            TokenKind::Func => "'func'",
            TokenKind::Let => "'let'",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<TokenKind> for u8 {
    fn from(val: TokenKind) -> Self {
        val as u8
    }
}

impl TryFrom<u8> for TokenKind {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        TokenKind::ALL
            .into_iter()
            .find(|kind| u8::from(*kind) == value)
            .ok_or(value)
    }
}
