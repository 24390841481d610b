//! 日志记录格式化器
//!
//! 输出型 sink（stdout/file）通过 [`RecordFormat`] 决定一条记录的文本形式。

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::record::Record;

/// 记录格式化 trait
pub trait RecordFormat: Send + Sync {
    /// 将记录格式化为一行文本（不含换行）
    fn format(&self, record: &Record) -> String;
}

/// 默认格式：`[时间] 级别 目标: 消息`
#[derive(Clone, Copy, Debug, Default)]
pub struct FullFormat;

impl RecordFormat for FullFormat {
    fn format(&self, record: &Record) -> String {
        record.format()
    }
}

/// 交替前缀格式
///
/// 依次为每条记录加上两个前缀中的一个（第一、第三……条用 `first`，
/// 第二、第四……条用 `second`），只输出消息本身。
/// 计数器属于格式化器实例，不同实例互不影响。
#[derive(Debug)]
pub struct AlternatingPrefix {
    prefixes: [String; 2],
    count: AtomicUsize,
}

impl AlternatingPrefix {
    /// 测试调试输出使用的前缀
    pub const DEBUG_PREFIXES: (&'static str, &'static str) = ("[  DEBUG   ] ", "[   DEBUG  ] ");

    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            prefixes: [first.into(), second.into()],
            count: AtomicUsize::new(0),
        }
    }

    /// 使用 [`Self::DEBUG_PREFIXES`] 创建
    pub fn debug() -> Self {
        let (first, second) = Self::DEBUG_PREFIXES;
        Self::new(first, second)
    }

    /// 已格式化的记录数
    pub fn count(&self) -> usize {
        self.count.load(Ordering::Relaxed)
    }

    /// 下一条记录将使用的前缀
    pub fn next_prefix(&self) -> &str {
        &self.prefixes[self.count() % 2]
    }
}

impl RecordFormat for AlternatingPrefix {
    fn format(&self, record: &Record) -> String {
        let index = self.count.fetch_add(1, Ordering::Relaxed) % 2;
        format!("{}{}", self.prefixes[index], record.message)
    }
}
