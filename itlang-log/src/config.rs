//! 日志配置
//!
//! 把输出目标列表组装成一个 [`Logger`]。

use std::sync::Arc;

use crate::{Level, LogRingBuffer, Logger};

/// 日志输出目标配置
#[derive(Clone, Debug, PartialEq)]
pub enum OutputConfig {
    /// 追加写入文件（路径）
    #[cfg(feature = "file")]
    File(std::path::PathBuf),
    /// 输出到环形缓冲区（容量）
    RingBuffer(usize),
}

/// 日志配置
///
/// ```
/// use itlang_log::{LogConfig, Level};
///
/// let (logger, ring) = LogConfig::new(Level::Debug)
///     .with_ring_buffer(1000)
///     .init();
/// assert!(ring.is_some());
/// assert_eq!(logger.level(), Level::Debug);
/// ```
#[derive(Clone, Debug)]
pub struct LogConfig {
    pub level: Level,
    pub outputs: Vec<OutputConfig>,
}

impl LogConfig {
    /// 创建配置（无输出）
    pub fn new(level: Level) -> Self {
        LogConfig {
            level,
            outputs: Vec::new(),
        }
    }

    #[cfg(feature = "file")]
    pub fn with_file(mut self, path: impl Into<std::path::PathBuf>) -> Self {
        self.outputs.push(OutputConfig::File(path.into()));
        self
    }

    pub fn with_ring_buffer(mut self, capacity: usize) -> Self {
        self.outputs.push(OutputConfig::RingBuffer(capacity));
        self
    }

    /// 初始化日志器，跳过无法打开的文件输出
    ///
    /// 返回 (logger, ring_buffer)；配置了多个环形缓冲区时返回最后一个。
    pub fn init(self) -> (Arc<Logger>, Option<Arc<LogRingBuffer>>) {
        let logger = Logger::new(self.level);
        let mut ring_buffer = None;

        for output in self.outputs {
            // 文件打开失败时该输出被忽略
            let _ = attach(&logger, output, &mut ring_buffer);
        }

        (logger, ring_buffer)
    }

    /// 初始化日志器，任一输出无法建立时返回错误
    pub fn try_init(self) -> crate::Result<(Arc<Logger>, Option<Arc<LogRingBuffer>>)> {
        let logger = Logger::new(self.level);
        let mut ring_buffer = None;

        for output in self.outputs {
            attach(&logger, output, &mut ring_buffer)?;
        }

        Ok((logger, ring_buffer))
    }
}

fn attach(
    logger: &Logger,
    output: OutputConfig,
    ring_buffer: &mut Option<Arc<LogRingBuffer>>,
) -> crate::Result<()> {
    match output {
        #[cfg(feature = "file")]
        OutputConfig::File(path) => logger.add_sink(crate::FileSink::new(path)?),
        OutputConfig::RingBuffer(capacity) => {
            let ring = LogRingBuffer::new(capacity);
            *ring_buffer = Some(Arc::clone(&ring));
            logger.add_sink(ring);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_new() {
        let config = LogConfig::new(Level::Debug);
        assert_eq!(config.level, Level::Debug);
        assert!(config.outputs.is_empty());
    }

    #[test]
    fn test_config_init() {
        let (logger, ring) = LogConfig::new(Level::Debug).with_ring_buffer(100).init();

        assert_eq!(logger.level(), Level::Debug);
        crate::debug!(logger, "test message");
        assert_eq!(ring.unwrap().messages(), vec!["test message"]);
    }

    #[test]
    fn test_config_init_no_ring() {
        let (logger, ring) = LogConfig::new(Level::Debug).init();
        assert!(ring.is_none());
        assert_eq!(logger.sink_count(), 0);
    }

    #[test]
    fn test_try_init_ring_only() {
        let (logger, ring) = LogConfig::new(Level::Error).with_ring_buffer(4).try_init().unwrap();
        assert_eq!(logger.sink_count(), 1);
        assert_eq!(ring.unwrap().capacity(), 4);
    }

    #[cfg(feature = "file")]
    #[test]
    fn test_file_output_errors() {
        let dir = std::env::temp_dir();

        let result = LogConfig::new(Level::Debug).with_file(&dir).try_init();
        assert!(matches!(result, Err(crate::Error::Io(_))));

        // init 忽略失败的文件输出
        let (logger, _) = LogConfig::new(Level::Debug).with_file(dir).init();
        assert_eq!(logger.sink_count(), 0);
    }

    #[cfg(feature = "file")]
    #[test]
    fn test_file_output_receives_records() {
        let path = std::env::temp_dir().join("itlang_log_config_file.tmp");
        std::fs::remove_file(&path).ok();

        let (logger, _) = LogConfig::new(Level::Info).with_file(&path).try_init().unwrap();
        crate::warn!(logger, "bad byte at {}", 3);
        crate::debug!(logger, "filtered");

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("WARN"));
        assert!(content.contains("bad byte at 3"));
        assert!(!content.contains("filtered"));

        std::fs::remove_file(&path).ok();
    }
}
