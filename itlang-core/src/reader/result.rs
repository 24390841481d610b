//! 读取结果与错误类型

use std::io;

/// 字符流错误
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StreamError {
    #[error("I/O error ({kind:?}): {message}")]
    Io { kind: io::ErrorKind, message: String },

    #[error("Invalid UTF-8 byte 0x{byte:02X} at byte offset {offset}")]
    InvalidUtf8 { offset: usize, byte: u8 },

    #[error("Incomplete UTF-8 sequence at byte offset {offset}: expected {expected} bytes, got {found}")]
    IncompleteUtf8 {
        offset: usize,
        expected: usize,
        found: usize,
    },
}

impl StreamError {
    /// 解码错误总会消费至少一个字节，继续读取可以前进；I/O 错误则不一定
    pub fn is_decode_error(&self) -> bool {
        !matches!(self, StreamError::Io { .. })
    }
}

impl From<io::Error> for StreamError {
    fn from(e: io::Error) -> Self {
        StreamError::Io {
            kind: e.kind(),
            message: e.to_string(),
        }
    }
}

/// `SourceReader::next_char` 的结果
///
/// `Eof` 是输入结束的哨兵值，可以直接用 `==` 比较。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadResult {
    /// 读到一个字符
    Char(char),
    /// 输入已结束
    Eof,
    /// 底层流读取或解码失败
    Error(StreamError),
}

impl ReadResult {
    pub fn is_eof(&self) -> bool {
        matches!(self, ReadResult::Eof)
    }

    pub fn as_char(&self) -> Option<char> {
        match self {
            ReadResult::Char(c) => Some(*c),
            _ => None,
        }
    }

    /// 转为迭代器风格：`Eof` 为 `None`
    pub fn into_option(self) -> Option<Result<char, StreamError>> {
        match self {
            ReadResult::Char(c) => Some(Ok(c)),
            ReadResult::Eof => None,
            ReadResult::Error(e) => Some(Err(e)),
        }
    }
}

impl From<char> for ReadResult {
    fn from(c: char) -> Self {
        ReadResult::Char(c)
    }
}

impl From<StreamError> for ReadResult {
    fn from(e: StreamError) -> Self {
        ReadResult::Error(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_error_display() {
        let err = StreamError::InvalidUtf8 {
            offset: 3,
            byte: 0x80,
        };
        assert_eq!(err.to_string(), "Invalid UTF-8 byte 0x80 at byte offset 3");

        let err = StreamError::IncompleteUtf8 {
            offset: 0,
            expected: 4,
            found: 1,
        };
        assert!(err.to_string().contains("expected 4 bytes, got 1"));
    }

    #[test]
    fn test_stream_error_from_io() {
        let err: StreamError = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed").into();
        assert!(matches!(
            err,
            StreamError::Io { kind: io::ErrorKind::BrokenPipe, ref message } if message == "pipe closed"
        ));
        assert!(!err.is_decode_error());
    }

    #[test]
    fn test_read_result_accessors() {
        assert_eq!(ReadResult::from('x').as_char(), Some('x'));
        assert!(ReadResult::Eof.is_eof());
        assert_eq!(ReadResult::Eof.as_char(), None);
        assert_eq!(ReadResult::Eof.into_option(), None);
        assert_eq!(ReadResult::Char('y').into_option(), Some(Ok('y')));
    }

    #[test]
    fn test_read_result_from_error() {
        let err = StreamError::InvalidUtf8 {
            offset: 0,
            byte: 0xFF,
        };
        assert!(err.is_decode_error());
        assert_eq!(
            ReadResult::from(err.clone()).into_option(),
            Some(Err(err))
        );
    }
}
