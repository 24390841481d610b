//! 日志器实现

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

#[cfg(any(feature = "stdout", feature = "file"))]
use crate::format::{FullFormat, RecordFormat};
use crate::record::{Level, Record};

/// 日志输出目标trait
pub trait LogSink: Send + Sync {
    /// 写入日志记录
    fn write(&self, record: &Record);
}

/// 日志器配置和状态
///
/// 不存在全局实例，调用方显式持有 `Arc<Logger>` 并向下传递。
pub struct Logger {
    /// 当前日志级别（原子存储）
    level: AtomicU8,
    /// 输出目标列表
    sinks: Mutex<Vec<Box<dyn LogSink>>>,
}

impl Logger {
    /// 创建新的日志器
    pub fn new(level: Level) -> Arc<Self> {
        Arc::new(Logger {
            level: AtomicU8::new(level as u8),
            sinks: Mutex::new(Vec::new()),
        })
    }

    /// 添加输出目标
    pub fn with_sink<S: LogSink + 'static>(self: Arc<Self>, sink: S) -> Arc<Self> {
        self.add_sink(sink);
        self
    }

    /// 添加 sink（用于已共享的 logger）
    pub fn add_sink<S: LogSink + 'static>(&self, sink: S) {
        self.sinks().push(Box::new(sink));
    }

    /// 动态设置日志级别
    pub fn set_level(&self, level: Level) {
        self.level.store(level as u8, Ordering::Relaxed);
    }

    /// 获取当前日志级别
    pub fn level(&self) -> Level {
        Level::from_u8(self.level.load(Ordering::Relaxed)).unwrap_or(Level::Info)
    }

    /// 检查指定级别是否启用
    pub fn is_enabled(&self, level: Level) -> bool {
        level >= self.level()
    }

    /// 已注册的 sink 数量
    pub fn sink_count(&self) -> usize {
        self.sinks().len()
    }

    /// 记录日志（宏的展开目标）
    #[inline(never)]
    pub fn log(&self, level: Level, target: &'static str, message: impl Into<String>) {
        if !self.is_enabled(level) {
            return;
        }

        let record = Record::new(level, target, message);
        for sink in self.sinks().iter() {
            sink.write(&record);
        }
    }

    /// 创建禁用日志的no-op日志器（用于测试或禁用场景）
    pub fn noop() -> Arc<Self> {
        Self::new(Level::Error)
    }

    fn sinks(&self) -> MutexGuard<'_, Vec<Box<dyn LogSink>>> {
        // sink 写入中 panic 不应让后续日志全部失效
        self.sinks.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level())
            .field("sinks", &self.sink_count())
            .finish()
    }
}

// 链式日志器：把记录转发给另一个 logger
impl LogSink for Arc<Logger> {
    fn write(&self, record: &Record) {
        self.log(record.level, record.target, record.message.clone());
    }
}

/// 标准输出sink
#[cfg(feature = "stdout")]
pub struct StdoutSink {
    format: Box<dyn RecordFormat>,
}

#[cfg(feature = "stdout")]
impl StdoutSink {
    pub fn new() -> Self {
        Self::with_format(FullFormat)
    }

    pub fn with_format<F: RecordFormat + 'static>(format: F) -> Self {
        Self {
            format: Box::new(format),
        }
    }
}

#[cfg(feature = "stdout")]
impl Default for StdoutSink {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "stdout")]
impl LogSink for StdoutSink {
    fn write(&self, record: &Record) {
        println!("{}", self.format.format(record));
    }
}

/// 文件sink（追加模式）
#[cfg(feature = "file")]
pub struct FileSink {
    file: Mutex<std::fs::File>,
    format: Box<dyn RecordFormat>,
}

#[cfg(feature = "file")]
impl FileSink {
    pub fn new(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;

        Ok(FileSink {
            file: Mutex::new(file),
            format: Box::new(FullFormat),
        })
    }

    pub fn with_format<F: RecordFormat + 'static>(mut self, format: F) -> Self {
        self.format = Box::new(format);
        self
    }
}

#[cfg(feature = "file")]
impl LogSink for FileSink {
    #[inline(never)]
    fn write(&self, record: &Record) {
        use std::io::Write;
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(file, "{}", self.format.format(record));
        }
    }
}
