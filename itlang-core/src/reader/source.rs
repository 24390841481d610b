//! 源代码读取器
//!
//! 把字节流解码为字符，并提供回退（unread）能力，供词法分析器预读使用。

use std::collections::VecDeque;
use std::io::{self, Read};
use std::sync::Arc;

use itlang_config::ReaderConfig;
use itlang_log::{trace, warn, Logger};

use super::result::{ReadResult, StreamError};

/// 源代码读取器
///
/// 包装一个字节流和一个回退队列。回退队列是 FIFO：
/// 先 `unread` 的值先被 `next_char` 重放，且队列非空时不会从底层流读取。
///
/// 底层流可以被拥有（`SourceReader<File>`），也可以被借用
/// （`SourceReader<&mut File>`）。读取器从不关闭底层流。
/// 每次从流中读取单个字节，需要缓冲时请传入 `BufReader`。
pub struct SourceReader<R> {
    input: R,
    /// 待重放的值（FIFO）
    pushback: VecDeque<ReadResult>,
    /// 解码时多读的一个字节
    carry: Option<u8>,
    /// 已解码的字节数
    offset: usize,
    /// 底层流已报告结束
    at_eof: bool,
    logger: Arc<Logger>,
}

impl<R: Read> SourceReader<R> {
    /// 创建读取器（noop logger）
    pub fn new(input: R) -> Self {
        Self::with_logger(input, Logger::noop())
    }

    /// 创建带 logger 的读取器
    pub fn with_logger(input: R, logger: Arc<Logger>) -> Self {
        Self::with_config(input, &ReaderConfig::default(), logger)
    }

    pub fn with_config(input: R, config: &ReaderConfig, logger: Arc<Logger>) -> Self {
        trace!(
            logger,
            "Creating SourceReader with pushback capacity {}",
            config.pushback_capacity
        );
        Self {
            input,
            pushback: VecDeque::with_capacity(config.pushback_capacity),
            carry: None,
            offset: 0,
            at_eof: false,
            logger,
        }
    }

    /// 读取下一个字符
    ///
    /// 回退队列非空时返回队首元素，不触碰底层流；
    /// 否则从流中解码一个字符。流结束后每次调用都返回 [`ReadResult::Eof`]。
    pub fn next_char(&mut self) -> ReadResult {
        if let Some(replayed) = self.pushback.pop_front() {
            return replayed;
        }
        self.decode_next()
    }

    /// 放回一个值，之后的 `next_char` 会按放回顺序重放
    ///
    /// 接受任何值，包括 [`ReadResult::Eof`]。队列无容量上限。
    pub fn unread(&mut self, item: impl Into<ReadResult>) {
        let item = item.into();
        trace!(
            self.logger,
            "Unread {:?} ({} pending)",
            item,
            self.pushback.len() + 1
        );
        self.pushback.push_back(item);
    }

    /// 逐字符迭代，到 `Eof` 为止
    pub fn chars(&mut self) -> Chars<'_, R> {
        Chars {
            reader: self,
            done: false,
        }
    }

    /// 回退队列中待重放的值的数量
    pub fn pending(&self) -> usize {
        self.pushback.len()
    }

    /// 已从流中解码的字节数（不含回退队列）
    pub fn byte_offset(&self) -> usize {
        self.offset
    }

    pub fn get_ref(&self) -> &R {
        &self.input
    }

    /// 直接读取底层流会绕过回退队列
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.input
    }

    /// 取回底层流，丢弃未重放的值
    pub fn into_inner(self) -> R {
        self.input
    }

    fn decode_next(&mut self) -> ReadResult {
        if self.at_eof {
            return ReadResult::Eof;
        }

        let start = self.offset;
        let lead = match self.read_byte() {
            Ok(Some(byte)) => byte,
            Ok(None) => {
                self.at_eof = true;
                trace!(self.logger, "Input exhausted after {} bytes", self.offset);
                return ReadResult::Eof;
            }
            Err(e) => return self.fail(e.into()),
        };

        let Some(len) = utf8_sequence_length(lead) else {
            return self.fail(StreamError::InvalidUtf8 {
                offset: start,
                byte: lead,
            });
        };

        let mut bytes = [lead, 0, 0, 0];
        for i in 1..len {
            match self.read_byte() {
                Ok(Some(byte)) if is_continuation(byte) => bytes[i] = byte,
                Ok(Some(byte)) => {
                    // 非续字节属于下一个字符，留待下次解码
                    self.carry = Some(byte);
                    self.offset -= 1;
                    return self.fail(StreamError::IncompleteUtf8 {
                        offset: start,
                        expected: len,
                        found: i,
                    });
                }
                Ok(None) => {
                    self.at_eof = true;
                    return self.fail(StreamError::IncompleteUtf8 {
                        offset: start,
                        expected: len,
                        found: i,
                    });
                }
                Err(e) => return self.fail(e.into()),
            }
        }

        match std::str::from_utf8(&bytes[..len])
            .ok()
            .and_then(|s| s.chars().next())
        {
            Some(c) => ReadResult::Char(c),
            None => self.fail(StreamError::InvalidUtf8 {
                offset: start,
                byte: lead,
            }),
        }
    }

    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        if let Some(byte) = self.carry.take() {
            self.offset += 1;
            return Ok(Some(byte));
        }

        let mut byte = [0u8; 1];
        loop {
            match self.input.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => {
                    self.offset += 1;
                    return Ok(Some(byte[0]));
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    fn fail(&self, error: StreamError) -> ReadResult {
        warn!(self.logger, "{}", error);
        ReadResult::Error(error)
    }
}

impl<'a> SourceReader<&'a [u8]> {
    /// 读取内存中的文本
    pub fn from_text(text: &'a str) -> Self {
        Self::new(text.as_bytes())
    }
}

/// [`SourceReader::chars`] 返回的迭代器
///
/// 解码错误后继续迭代；I/O 错误后结束，避免对持续失败的流无限重试。
pub struct Chars<'a, R> {
    reader: &'a mut SourceReader<R>,
    done: bool,
}

impl<R: Read> Iterator for Chars<'_, R> {
    type Item = Result<char, StreamError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let item = self.reader.next_char().into_option();
        match &item {
            None => self.done = true,
            Some(Err(e)) if !e.is_decode_error() => self.done = true,
            _ => {}
        }
        item
    }
}

/// 获取UTF-8序列长度
fn utf8_sequence_length(lead_byte: u8) -> Option<usize> {
    match lead_byte {
        0x00..=0x7F => Some(1),
        0xC0..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF7 => Some(4),
        _ => None,
    }
}

fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}
