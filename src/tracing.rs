use anyhow::Context;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, OnceLock, RwLock};

const DEFAULT_FILTER: &str = "info";

/// Writer handed to the subscriber; tees stderr and an optional log file.
#[derive(Clone)]
struct TeeWriter {
    file: Arc<RwLock<Option<File>>>,
}

impl TeeWriter {
    fn new() -> Self {
        Self {
            file: Arc::new(RwLock::new(None)),
        }
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for TeeWriter {
    type Writer = TeeWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let written = io::stderr().write(buf)?;
        if let Ok(mut guard) = self.file.write() {
            if let Some(file) = guard.as_mut() {
                let _ = file.write_all(&buf[..written]);
            }
        }
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()?;
        if let Ok(mut guard) = self.file.write() {
            if let Some(file) = guard.as_mut() {
                let _ = file.flush();
            }
        }
        Ok(())
    }
}

static WRITER: OnceLock<TeeWriter> = OnceLock::new();

/// Installs the global subscriber. `RUST_LOG` overrides the default `info`
/// filter; `log` records are bridged into it.
pub fn init() {
    let _ = tracing_log::LogTracer::init();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER));

    let writer = WRITER.get_or_init(TeeWriter::new).clone();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(writer)
        .try_init();
}

/// Mirrors log output into `log_file`, or stops mirroring when `None`.
pub fn set_log_file(log_file: Option<&Path>) -> anyhow::Result<()> {
    let Some(writer) = WRITER.get() else {
        return Ok(());
    };

    let file = match log_file {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("creating log dir {}", parent.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("opening log file {}", path.display()))?;
            Some(file)
        }
        None => None,
    };

    let mut guard = writer
        .file
        .write()
        .map_err(|_| anyhow::anyhow!("log writer lock poisoned"))?;
    *guard = file;
    Ok(())
}
