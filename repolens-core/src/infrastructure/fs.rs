//! Per-file reading with explicit outcomes.
//!
//! Repository content is untrusted: any file may be unreadable, binary, or a
//! symlink pointing outside the checkout. Readers here never fail the caller;
//! they return [`FileRead::Skipped`] with the reason instead, and scanners
//! record that reason next to their results.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

/// Leading bytes inspected for a NUL byte when deciding a file is binary
pub const BINARY_PROBE_BYTES: usize = 8 * 1024;

/// Longest line prefix handed to line visitors; the rest of the line is
/// dropped
pub const MAX_LINE_BYTES: usize = 64 * 1024;

/// Why a path contributed nothing to a scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", content = "detail", rename_all = "snake_case")]
pub enum SkipReason {
    PermissionDenied,
    NotFound,
    /// NUL byte found in the leading probe window
    Binary,
    /// Symlinks are never followed
    Symlink,
    /// Directory nested deeper than the configured limit
    DepthLimit,
    Io(String),
}

impl From<&io::Error> for SkipReason {
    fn from(err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::PermissionDenied => Self::PermissionDenied,
            io::ErrorKind::NotFound => Self::NotFound,
            _ => Self::Io(err.to_string()),
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PermissionDenied => f.write_str("permission denied"),
            Self::NotFound => f.write_str("not found"),
            Self::Binary => f.write_str("binary content"),
            Self::Symlink => f.write_str("symlink not followed"),
            Self::DepthLimit => f.write_str("depth limit reached"),
            Self::Io(detail) => write!(f, "io error: {}", detail),
        }
    }
}

/// A path skipped during a scan, relative to the scanned root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedPath {
    pub path: String,
    pub reason: SkipReason,
}

impl SkippedPath {
    pub fn new(path: impl Into<String>, reason: SkipReason) -> Self {
        Self {
            path: path.into(),
            reason,
        }
    }
}

/// Outcome of reading one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileRead<T> {
    Read(T),
    Skipped(SkipReason),
}

impl<T> FileRead<T> {
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Read(value) => Some(value),
            Self::Skipped(_) => None,
        }
    }

    pub fn skip_reason(&self) -> Option<&SkipReason> {
        match self {
            Self::Read(_) => None,
            Self::Skipped(reason) => Some(reason),
        }
    }
}

/// Count line records. `\n`, `\r\n` and a lone `\r` all end a record; a
/// final record without a terminator still counts and an empty file has zero
/// records. Memory use is bounded by the read buffer, whatever the line
/// lengths.
pub fn count_lines(path: &Path) -> FileRead<u64> {
    match File::open(path) {
        Ok(file) => count_lines_from(file),
        Err(e) => FileRead::Skipped(SkipReason::from(&e)),
    }
}

/// [`count_lines`] over any reader
pub fn count_lines_from<R: Read>(reader: R) -> FileRead<u64> {
    stream_records(reader, false, |_| {})
}

/// Stream the file line by line, decoding lossily, calling `visit` with the
/// 1-based line number and the line without its terminator. Lines longer
/// than [`MAX_LINE_BYTES`] are truncated to that length.
///
/// If the read fails part-way the outcome is `Skipped`; `visit` may already
/// have seen earlier lines, so callers should buffer what they derive and
/// discard it on skip.
pub fn read_lines<F>(path: &Path, visit: F) -> FileRead<u64>
where
    F: FnMut(u32, &str),
{
    match File::open(path) {
        Ok(file) => read_lines_from(file, visit),
        Err(e) => FileRead::Skipped(SkipReason::from(&e)),
    }
}

/// [`read_lines`] over any reader
pub fn read_lines_from<R, F>(reader: R, mut visit: F) -> FileRead<u64>
where
    R: Read,
    F: FnMut(u32, &str),
{
    let mut line_number: u32 = 0;
    stream_records(reader, true, |record| {
        line_number = line_number.saturating_add(1);
        visit(line_number, &String::from_utf8_lossy(record));
    })
}

/// Split `reader` into records chunk by chunk. With `keep_text` the record
/// bytes (up to [`MAX_LINE_BYTES`]) are handed to `on_record`; otherwise it
/// gets an empty slice.
fn stream_records<R, F>(reader: R, keep_text: bool, mut on_record: F) -> FileRead<u64>
where
    R: Read,
    F: FnMut(&[u8]),
{
    let mut reader = BufReader::with_capacity(BINARY_PROBE_BYTES, reader);

    match reader.fill_buf() {
        Ok(head) if head.contains(&0) => return FileRead::Skipped(SkipReason::Binary),
        Ok(_) => {}
        Err(e) => return FileRead::Skipped(SkipReason::from(&e)),
    }

    let mut records = 0u64;
    let mut line = Vec::new();
    let mut open_record = false;
    let mut after_cr = false;
    loop {
        let chunk = match reader.fill_buf() {
            Ok([]) => break,
            Ok(chunk) => chunk,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return FileRead::Skipped(SkipReason::from(&e)),
        };

        for &byte in chunk {
            match byte {
                // second half of a \r\n pair
                b'\n' if after_cr => after_cr = false,
                b'\n' | b'\r' => {
                    records += 1;
                    on_record(&line);
                    line.clear();
                    open_record = false;
                    after_cr = byte == b'\r';
                }
                _ => {
                    after_cr = false;
                    open_record = true;
                    if keep_text && line.len() < MAX_LINE_BYTES {
                        line.push(byte);
                    }
                }
            }
        }

        let consumed = chunk.len();
        reader.consume(consumed);
    }

    if open_record {
        records += 1;
        on_record(&line);
    }
    FileRead::Read(records)
}

/// Render `path` relative to `root` with `/` separators
pub fn relative_display(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
