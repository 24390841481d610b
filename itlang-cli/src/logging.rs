//! CLI 日志系统初始化
//!
//! 基于 `tracing-subscriber` 实现分目标日志控制。库 crate 使用 `itlang-log`，
//! 其记录通过 [`TracingSink`] 转发为 `tracing` 事件。

use std::io;
use tracing_subscriber::{filter::Targets, fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer};

use crate::config::LogConfig;
use itlang_config::Phase;
use itlang_log::{LogSink, Record};

/// 读取器记录转发到的 `tracing` 目标
const READER_TARGET: &str = Phase::Reader.target();

/// 日志输出格式
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// 彩色格式化（开发使用）
    Pretty,
    /// 紧凑格式
    Compact,
    /// JSON 格式（工具集成）
    Json,
}

/// 初始化全局 subscriber，日志写到 stderr（stdout 留给字符转储）
pub fn init(log_config: &LogConfig, format: LogFormat) {
    let targets = Phase::ALL
        .iter()
        .fold(Targets::new().with_default(log_config.global), |targets, phase| {
            targets.with_target(phase.target(), log_config.level_for(phase.target()))
        })
        .with_target("itlang::cli", log_config.global);

    let layer = create_format_layer(format, io::stderr).with_filter(targets);
    tracing_subscriber::registry().with(layer).init();
}

/// Create formatter layer based on format
fn create_format_layer<W, F>(format: LogFormat, make_writer: F) -> impl Layer<tracing_subscriber::Registry>
where
    W: io::Write + Send + Sync + 'static,
    F: Fn() -> W + Send + Sync + 'static,
{
    match format {
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_target(true)
            .with_timer(fmt::time::time())
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(false)
            .without_time()
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_timer(fmt::time::time())
            .with_writer(make_writer)
            .boxed(),
    }
}

/// 将 `itlang-log` 级别映射为 `tracing` 级别
pub fn to_tracing_level(level: itlang_log::Level) -> tracing::Level {
    match level {
        itlang_log::Level::Trace => tracing::Level::TRACE,
        itlang_log::Level::Debug => tracing::Level::DEBUG,
        itlang_log::Level::Info => tracing::Level::INFO,
        itlang_log::Level::Warn => tracing::Level::WARN,
        itlang_log::Level::Error => tracing::Level::ERROR,
    }
}

/// 把 `itlang-log` 记录转发到 `tracing`，目标固定为读取阶段
pub struct TracingSink;

impl LogSink for TracingSink {
    fn write(&self, record: &Record) {
        let module = record.target;
        let message = &record.message;
        match record.level {
            itlang_log::Level::Trace => tracing::trace!(target: READER_TARGET, module, "{message}"),
            itlang_log::Level::Debug => tracing::debug!(target: READER_TARGET, module, "{message}"),
            itlang_log::Level::Info => tracing::info!(target: READER_TARGET, module, "{message}"),
            itlang_log::Level::Warn => tracing::warn!(target: READER_TARGET, module, "{message}"),
            itlang_log::Level::Error => tracing::error!(target: READER_TARGET, module, "{message}"),
        }
    }
}
