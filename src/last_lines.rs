//! Reverse line reader.
//!
//! Reads a file from its end toward its beginning in fixed-size chunks and
//! yields complete lines, last line first, without loading the whole file
//! into memory. Only one chunk plus the line fragment that straddles the
//! previous chunk boundary is held at any time.
//!
//! Lines are assembled as raw bytes and decoded as UTF-8 once complete, so
//! a multi-byte character cut in half by a chunk boundary is never decoded
//! on its own.

use crate::error::{ExerciseError, Result};
use log::{debug, trace};
use std::collections::VecDeque;
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::iter::FusedIterator;
use std::path::Path;

/// Chunk size used when no explicit buffer size is given.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Line terminator. `\r\n` lines keep their `\r` as part of the content.
const NEWLINE: u8 = b'\n';

/// Opens `path` and returns its lines in reverse order using
/// [`DEFAULT_BUFFER_SIZE`] chunks.
///
/// # Examples
///
/// ```no_run
/// use coding_exercises::last_lines;
///
/// for line in last_lines("app.log")?.take(10) {
///     print!("{}", line?);
/// }
/// # Ok::<(), coding_exercises::ExerciseError>(())
/// ```
pub fn last_lines(path: impl AsRef<Path>) -> Result<LastLines<File>> {
    LastLines::open(path)
}

/// A line, possibly spread over several chunks, and the file offset of
/// its first byte.
#[derive(Debug)]
struct Segment {
    offset: u64,
    /// One piece per chunk, the piece closest to the end of the file first.
    parts: Vec<Vec<u8>>,
}

impl Segment {
    fn new(offset: u64, bytes: &[u8]) -> Self {
        Segment {
            offset,
            parts: vec![bytes.to_vec()],
        }
    }

    fn is_empty(&self) -> bool {
        self.parts.iter().all(Vec::is_empty)
    }

    /// Prepends an earlier piece of the same line, moving the line's start
    /// back to `offset`.
    fn prepend(&mut self, offset: u64, part: Vec<u8>) {
        self.offset = offset;
        self.parts.push(part);
    }

    /// Joins the pieces in file order.
    fn into_bytes(mut self) -> Vec<u8> {
        self.parts.reverse();
        self.parts.concat()
    }
}

/// Iterator over the lines of a seekable source, from last to first.
///
/// Each item is one line including its trailing `\n`. The final line of the
/// source is yielded without a terminator if it has none.
///
/// The source is dropped as soon as its front chunk has been read, on the
/// first error, or when the iterator is dropped, whichever comes first.
/// After an error the iterator yields `None`.
#[derive(Debug)]
pub struct LastLines<R> {
    /// `None` once the source is exhausted or failed.
    reader: Option<R>,
    buffer_size: usize,
    /// Bytes at the front of the source not yet read.
    remaining: u64,
    /// Possibly incomplete first line of the most recent chunk.
    pending: Option<Segment>,
    /// Complete lines waiting to be yielded, in output order.
    ready: VecDeque<Segment>,
    chunk: Vec<u8>,
}

impl LastLines<File> {
    /// Opens a file with the default buffer size.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::with_buffer_size(path, DEFAULT_BUFFER_SIZE)
    }

    /// Opens a file reading `buffer_size` bytes per backward step.
    ///
    /// Fails before any line is produced if the path is missing, is not a
    /// regular file, or cannot be read.
    pub fn with_buffer_size(path: impl AsRef<Path>, buffer_size: usize) -> Result<Self> {
        let path = path.as_ref();
        if buffer_size == 0 {
            return Err(ExerciseError::InvalidBufferSize);
        }

        let file = File::open(path).map_err(|e| ExerciseError::from_open(path, e))?;
        if !file.metadata()?.is_file() {
            return Err(ExerciseError::NotFound {
                path: path.to_path_buf(),
            });
        }

        debug!(
            "Reading {} backward in {} byte chunks",
            path.display(),
            buffer_size
        );
        Self::new(file, buffer_size)
    }
}

impl<R: Read + Seek> LastLines<R> {
    /// Wraps any seekable source.
    pub fn new(mut reader: R, buffer_size: usize) -> Result<Self> {
        if buffer_size == 0 {
            return Err(ExerciseError::InvalidBufferSize);
        }

        let size = reader.seek(SeekFrom::End(0))?;
        trace!("Source size is {} bytes", size);

        Ok(LastLines {
            reader: (size > 0).then_some(reader),
            buffer_size,
            remaining: size,
            pending: None,
            ready: VecDeque::new(),
            chunk: Vec::with_capacity(buffer_size.min(size as usize)),
        })
    }

    /// Reads the chunk just before the cursor and queues the lines it
    /// completes.
    fn read_chunk(&mut self) -> Result<()> {
        let reader = match self.reader.as_mut() {
            Some(reader) => reader,
            None => return Ok(()),
        };

        let len = self.remaining.min(self.buffer_size as u64);
        let start = self.remaining - len;

        let mut chunk = std::mem::take(&mut self.chunk);
        chunk.resize(len as usize, 0);
        reader.seek(SeekFrom::Start(start))?;
        reader.read_exact(&mut chunk)?;
        trace!("Read {} bytes at offset {}", len, start);

        self.remaining = start;
        if self.remaining == 0 {
            self.reader = None;
        }

        self.split_chunk(&chunk, start);
        self.chunk = chunk;
        Ok(())
    }

    fn split_chunk(&mut self, chunk: &[u8], start: u64) {
        let mut pieces = Vec::new();
        let mut offset = start;
        for piece in chunk.split_inclusive(|&b| b == NEWLINE) {
            pieces.push(Segment::new(offset, piece));
            offset += piece.len() as u64;
        }

        if let Some(mut pending) = self.pending.take() {
            if chunk.last() == Some(&NEWLINE) {
                // The chunk stops on a line boundary, so the fragment was a
                // whole line and precedes everything in this chunk.
                self.ready.push_back(pending);
            } else if let Some(last) = pieces.pop() {
                pending.prepend(last.offset, last.into_bytes());
                pieces.push(pending);
            }
        }

        let mut pieces = pieces.into_iter();
        self.pending = pieces.next();
        self.ready
            .extend(pieces.rev().filter(|segment| !segment.is_empty()));
    }

    fn decode(&mut self, segment: Segment) -> Result<String> {
        let offset = segment.offset;
        match String::from_utf8(segment.into_bytes()) {
            Ok(line) => Ok(line),
            Err(_) => {
                self.fuse();
                Err(ExerciseError::Decoding { offset })
            }
        }
    }

    /// Releases the source and discards all buffered state.
    fn fuse(&mut self) {
        self.reader = None;
        self.remaining = 0;
        self.pending = None;
        self.ready.clear();
    }
}

impl<R: Read + Seek> Iterator for LastLines<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(segment) = self.ready.pop_front() {
                return Some(self.decode(segment));
            }

            if self.reader.is_none() {
                let segment = self.pending.take()?;
                return Some(self.decode(segment));
            }

            if let Err(e) = self.read_chunk() {
                self.fuse();
                return Some(Err(e));
            }
        }
    }
}

impl<R: Read + Seek> FusedIterator for LastLines<R> {}
