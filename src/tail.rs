//! Incremental tailing of a file that grows under another process.

use std::io::SeekFrom;
use std::path::PathBuf;

use tokio::io::{AsyncReadExt, AsyncSeekExt};

/// Reads newly appended complete lines from a file across polls.
///
/// The cursor only ever advances past fully terminated lines; a trailing
/// fragment without a newline stays unconsumed and is picked up again,
/// together with its completion, on a later poll. Under append-only growth
/// no line is dropped, duplicated, or split across two polls.
#[derive(Debug)]
pub struct FileTail {
    path: PathBuf,
    offset: u64,
}

impl FileTail {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            offset: 0,
        }
    }

    /// Byte offset of the next unread position.
    #[must_use]
    pub const fn offset(&self) -> u64 {
        self.offset
    }

    /// Returns the complete lines appended since the previous poll.
    ///
    /// A missing file is not an error: the writer may not have created it
    /// yet, so the poll reports no new lines and leaves the cursor where it
    /// is.
    ///
    /// # Errors
    ///
    /// Returns any I/O failure other than the file being absent.
    pub async fn poll(&mut self) -> Result<Vec<String>, std::io::Error> {
        let mut file = match tokio::fs::File::open(&self.path).await {
            Ok(file) => file,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err),
        };

        file.seek(SeekFrom::Start(self.offset)).await?;
        let mut buffer = Vec::new();
        file.read_to_end(&mut buffer).await?;

        let Some(terminated_len) = terminated_prefix_len(&buffer) else {
            return Ok(Vec::new());
        };
        let consumed = buffer.get(..terminated_len).unwrap_or_default();
        self.offset = self.offset.saturating_add(terminated_len as u64);

        Ok(split_lines(consumed))
    }
}

/// Byte length of `buffer` up to and including the last `\n`, if any.
fn terminated_prefix_len(buffer: &[u8]) -> Option<usize> {
    buffer
        .iter()
        .rposition(|byte| *byte == b'\n')
        .map(|index| index.saturating_add(1))
}

/// Splits newline-terminated bytes into lines, tolerating `\r\n` endings
/// and non-UTF-8 content.
fn split_lines(bytes: &[u8]) -> Vec<String> {
    let mut lines: Vec<String> = bytes
        .split(|byte| *byte == b'\n')
        .map(|chunk| {
            let chunk = chunk.strip_suffix(b"\r").unwrap_or(chunk);
            String::from_utf8_lossy(chunk).into_owned()
        })
        .collect();
    // The input always ends in a terminator, so the final chunk is empty.
    drop(lines.pop());
    lines
}
