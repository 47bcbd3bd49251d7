use std::{
    fs::File,
    io::{self, BufWriter, Stdout, Write},
    path::{Path, PathBuf},
};

use crate::{
    Record,
    palette::{CALLSITE_COLOR, RESET, color_start, severity_start},
};

/// A destination records are written to.
///
/// Implementations must write each record as one unit: the dispatcher
/// serializes calls, so a single `write_all` per record is enough to keep
/// lines from interleaving.
pub trait LogSink: Send {
    fn write_record(&mut self, record: &Record<'_>) -> io::Result<()>;
    fn flush(&mut self) -> io::Result<()>;
    /// Called once when the owning logger is torn down.
    fn close(&mut self) -> io::Result<()> {
        self.flush()
    }
}

/// Colorized sink, writing to stdout unless another writer is given.
pub struct ConsoleSink<W: Write + Send = Stdout> {
    writer: W,
}

impl ConsoleSink {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::stdout()
    }
}

impl<W: Write + Send> ConsoleSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn format(record: &Record<'_>) -> String {
        let start = severity_start(record.severity);
        format!(
            "{start}[{tag}: {time}] {highlight}{callsite}{start} -- {message}{RESET}\n",
            tag = record.severity.tag(),
            time = record.timestamp,
            highlight = color_start(CALLSITE_COLOR, false),
            callsite = record.callsite,
            message = record.message(),
        )
    }
}

impl<W: Write + Send> LogSink for ConsoleSink<W> {
    fn write_record(&mut self, record: &Record<'_>) -> io::Result<()> {
        self.writer.write_all(Self::format(record).as_bytes())?;
        self.writer.flush()
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// Plain text sink owning an open file, truncated when created.
pub struct FileSink {
    path: PathBuf,
    file: BufWriter<File>,
}

impl FileSink {
    pub fn create<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::options()
            .create(true)
            .truncate(true)
            .write(true)
            .open(&path)?;
        Ok(Self {
            path: path.as_ref().to_path_buf(),
            file: BufWriter::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LogSink for FileSink {
    fn write_record(&mut self, record: &Record<'_>) -> io::Result<()> {
        self.file.write_all(record.plain_line().as_bytes())?;
        self.file.flush()
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }

    fn close(&mut self) -> io::Result<()> {
        self.file.flush()?;
        self.file.get_ref().sync_all()
    }
}
