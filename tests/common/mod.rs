//! 测试辅助工具
//!
//! 提供集成测试共用的调试输出器

#![allow(dead_code)]

use std::fmt::Display;
use std::sync::Arc;

use itlang::log::{debug, AlternatingPrefix, Level, LogConfig, LogRingBuffer, Logger, StdoutSink};
use itlang::ReadResult;

/// 开启调试输出的环境变量
pub const DEBUG_ENV: &str = "ITLANG_TEST_DEBUG";

/// 测试调试输出器
///
/// 每个测试持有自己的实例。所有输出都进入内部环形缓冲区；
/// 开启回显时同时以交替前缀打印到 stdout（配合 `--nocapture` 查看）。
pub struct DebugPrinter {
    logger: Arc<Logger>,
    ring: Arc<LogRingBuffer>,
}

impl DebugPrinter {
    pub fn new(echo: bool) -> Self {
        let (logger, ring) = LogConfig::new(Level::Debug).with_ring_buffer(1024).init();
        let ring = ring.expect("ring buffer output configured");
        if echo {
            logger.add_sink(StdoutSink::with_format(AlternatingPrefix::debug()));
        }
        Self { logger, ring }
    }

    /// `ITLANG_TEST_DEBUG` 设置且不为 `0` 时回显
    pub fn from_env() -> Self {
        let echo = std::env::var_os(DEBUG_ENV).is_some_and(|v| v != "0");
        Self::new(echo)
    }

    pub fn print(&self, text: impl Display) {
        debug!(self.logger, "{}", text);
    }

    /// 打印一次读取的结果
    pub fn print_read(&self, item: &ReadResult) {
        match item {
            ReadResult::Char(c) => self.print(c),
            ReadResult::Eof => self.print("<eof>"),
            ReadResult::Error(e) => self.print(format_args!("<error: {e}>")),
        }
    }

    /// 已打印的内容（按顺序）
    pub fn lines(&self) -> Vec<String> {
        self.ring.messages()
    }
}
