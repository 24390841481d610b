//! Itlang CLI - dump the characters a source reader yields
//!
//! Reads a file (or stdin) through `SourceReader` and prints one line per
//! character, followed by `<eof>`. A stream that fails before reaching its end
//! is terminated with `<read error>` instead.

use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

mod config;
mod logging;

use crate::config::{CliConfig, LogConfig};
use crate::logging::{to_tracing_level, LogFormat, TracingSink};
use itlang_core::{ReadResult, SourceReader};
use itlang_log::{Level, Logger};

#[derive(Parser)]
#[command(
    name = "itlang",
    about = "Itlang source reader - dump the characters of a source file",
    version
)]
struct Cli {
    /// Input file; reads stdin when absent or "-"
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// JSON configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level: error, warn, info, debug, trace
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Reader log level (defaults to --log-level)
    #[arg(long, value_name = "LEVEL")]
    reader_log_level: Option<String>,

    /// Also append reader log records to this file
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    log_format: LogFormat,
}

fn main() {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => CliConfig::load(path).unwrap_or_else(|e| fail(&e)),
        None => CliConfig::default(),
    };

    let level = parse_level(
        cli.log_level
            .as_deref()
            .or(config.log_level.as_deref())
            .unwrap_or("warn"),
    );
    let reader_level = cli
        .reader_log_level
        .as_deref()
        .or(config.reader_log_level.as_deref())
        .map_or(level, parse_level);

    logging::init(
        &LogConfig {
            global: to_tracing_level(level),
            reader: Some(to_tracing_level(reader_level)),
        },
        cli.log_format,
    );

    let log_file = cli.log_file.as_deref().or(config.log_file.as_deref());
    let logger = reader_logger(reader_level, log_file).unwrap_or_else(|e| fail(&e));

    let input = open_input(cli.input.as_ref()).unwrap_or_else(|e| fail(&e));
    let mut reader = SourceReader::with_config(BufReader::new(input), &config.reader, logger);

    tracing::info!(target: "itlang::cli", input = ?cli.input, "Dumping characters");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match dump(&mut reader, &mut out) {
        Ok(0) => {}
        Ok(errors) => {
            tracing::info!(target: "itlang::cli", errors, "Finished with read errors");
            process::exit(1);
        }
        // 下游关闭管道时安静退出
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {}
        Err(e) => fail(&format!("Cannot write output: {e}")),
    }
}

fn parse_level(name: &str) -> Level {
    name.parse().unwrap_or_else(|e| fail(&format!("{e}")))
}

/// Build the reader's logger: forwarded to `tracing`, plus an optional log file
fn reader_logger(level: Level, log_file: Option<&Path>) -> Result<Arc<Logger>, String> {
    let mut log_config = itlang_log::LogConfig::new(level);
    if let Some(path) = log_file {
        log_config = log_config.with_file(path);
    }

    let (logger, _) = log_config.try_init().map_err(|e| match log_file {
        Some(path) => format!("Cannot open log file '{}': {}", path.display(), e),
        None => e.to_string(),
    })?;
    logger.add_sink(TracingSink);
    Ok(logger)
}

/// Open the input file, or stdin for `None` / `-`
fn open_input(path: Option<&PathBuf>) -> Result<Box<dyn Read>, String> {
    match path {
        Some(path) if path.as_os_str() != "-" => {
            let file = File::open(path)
                .map_err(|e| format!("Cannot read input file '{}': {}", path.display(), e))?;
            Ok(Box::new(file))
        }
        _ => Ok(Box::new(io::stdin())),
    }
}

/// Write one line per character; returns the number of read errors
///
/// Decode errors are reported and skipped. An I/O error ends the dump with
/// `<read error>`; `<eof>` is written only when the input is exhausted.
fn dump<R: Read, W: Write>(reader: &mut SourceReader<R>, out: &mut W) -> io::Result<usize> {
    let mut index = 0usize;
    let mut errors = 0usize;

    loop {
        match reader.next_char() {
            ReadResult::Char(c) => {
                writeln!(out, "{index:>6} {c:?} U+{:04X}", c as u32)?;
                index += 1;
            }
            ReadResult::Eof => {
                writeln!(out, "<eof>")?;
                break;
            }
            ReadResult::Error(e) => {
                out.flush()?;
                eprintln!("Error: {e}");
                errors += 1;
                if !e.is_decode_error() {
                    writeln!(out, "<read error>")?;
                    break;
                }
            }
        }
    }
    out.flush()?;

    Ok(errors)
}

fn fail(message: &str) -> ! {
    eprintln!("Error: {message}");
    process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// 每次读取都失败的输入
    struct Denied;

    impl Read for Denied {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
        }
    }

    fn dump_reader<R: Read>(mut reader: SourceReader<R>) -> (String, usize) {
        let mut out = Vec::new();
        let errors = dump(&mut reader, &mut out).unwrap();
        (String::from_utf8(out).unwrap(), errors)
    }

    fn dump_str(input: &[u8]) -> (String, usize) {
        dump_reader(SourceReader::new(Cursor::new(input.to_vec())))
    }

    #[test]
    fn test_dump_lines() {
        let (out, errors) = dump_str("a\n中".as_bytes());
        assert_eq!(errors, 0);
        assert_eq!(
            out,
            "     0 'a' U+0061\n     1 '\\n' U+000A\n     2 '中' U+4E2D\n<eof>\n"
        );
    }

    #[test]
    fn test_dump_counts_errors() {
        let (out, errors) = dump_str(&[b'x', 0xFF, b'y']);
        assert_eq!(errors, 1);
        assert!(out.contains("'x'"));
        assert!(out.contains("     1 'y'"));
        assert!(out.ends_with("<eof>\n"));
    }

    #[test]
    fn test_dump_empty() {
        assert_eq!(dump_str(b""), ("<eof>\n".to_string(), 0));
    }

    #[test]
    fn test_dump_failing_stream_is_not_eof() {
        let (out, errors) = dump_reader(SourceReader::new(Denied));
        assert_eq!(errors, 1);
        assert_eq!(out, "<read error>\n");
    }

    #[test]
    fn test_dump_stream_failing_midway() {
        let (out, errors) = dump_reader(SourceReader::new(Cursor::new("ab").chain(Denied)));
        assert_eq!(errors, 1);
        assert_eq!(out, "     0 'a' U+0061\n     1 'b' U+0062\n<read error>\n");
        assert!(!out.contains("<eof>"));
    }

    #[test]
    fn test_reader_logger_writes_log_file() {
        let path = std::env::temp_dir().join("itlang_cli_reader_log.tmp");
        std::fs::remove_file(&path).ok();

        let logger = reader_logger(Level::Warn, Some(&path)).unwrap();
        assert_eq!(logger.sink_count(), 2);

        let mut reader = SourceReader::with_logger(&[0xFF, b'a'][..], logger);
        assert!(matches!(reader.next_char(), ReadResult::Error(_)));
        assert_eq!(reader.next_char(), ReadResult::Char('a'));

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("WARN"));
        assert!(content.contains("0xFF"));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_reader_logger_bad_log_file() {
        let dir = std::env::temp_dir();
        let err = reader_logger(Level::Warn, Some(&dir)).unwrap_err();
        assert!(err.contains("Cannot open log file"));
    }

    #[test]
    fn test_reader_logger_without_file() {
        let logger = reader_logger(Level::Info, None).unwrap();
        assert_eq!(logger.level(), Level::Info);
        assert_eq!(logger.sink_count(), 1);
    }

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from([
            "itlang",
            "src.it",
            "--log-level",
            "debug",
            "--reader-log-level",
            "trace",
            "--log-file",
            "reader.log",
            "--log-format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.input, Some(PathBuf::from("src.it")));
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert_eq!(cli.reader_log_level.as_deref(), Some("trace"));
        assert_eq!(cli.log_file, Some(PathBuf::from("reader.log")));
        assert_eq!(cli.log_format, LogFormat::Json);
    }

    #[test]
    fn test_open_missing_input() {
        let err = open_input(Some(&PathBuf::from("no/such/file.it"))).err().unwrap();
        assert!(err.contains("no/such/file.it"));
    }
}
