use std::fs::File;
use std::io::{self, BufReader, Read};
use std::iter::FusedIterator;
use std::path::Path;

use marks_buffers::{BufferError, Reader};
use thiserror::Error;
use tracing::{debug, trace, warn};

use super::{decode_record, StudentRecord};
use crate::constants::RECORD_SIZE;

/// Outcome of one record read.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordRead {
    /// A full slot was consumed. The record may be blank.
    Record(StudentRecord),
    /// No further complete record is available.
    EndOfRecords,
}

/// Reasons a record read stopped other than a clean end of file.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("i/o error reading record slot {slot}: {source}")]
    Io {
        slot: usize,
        #[source]
        source: io::Error,
    },
    #[error("{0} trailing bytes after the last complete record")]
    TrailingBytes(usize),
    #[error("record slot {slot} could not be decoded: {source}")]
    Truncated {
        slot: usize,
        #[source]
        source: BufferError,
    },
}

/// Reads fixed-size student records from a byte stream.
///
/// Each call to [`next_record`](Self::next_record) pulls exactly
/// [`RECORD_SIZE`] bytes from the stream before decoding anything. The
/// iterator impl skips blank slots and stops at the first read that cannot
/// produce a whole record. Once finished, the reader stays finished.
///
/// # Example
///
/// ```
/// use marks_codec::{RecordRead, RecordReader, RECORD_SIZE};
///
/// let mut data = vec![0u8; RECORD_SIZE];
/// data[0] = 3;
/// data[1..4].copy_from_slice(b"LEE");
///
/// let mut reader = RecordReader::new(&data[..]);
/// match reader.next_record() {
///     RecordRead::Record(record) => assert_eq!(record.name, "LEE"),
///     RecordRead::EndOfRecords => unreachable!(),
/// }
/// assert_eq!(reader.next_record(), RecordRead::EndOfRecords);
/// ```
pub struct RecordReader<R> {
    inner: R,
    buf: Box<[u8; RECORD_SIZE]>,
    slots: usize,
    finished: bool,
}

impl<R: Read> RecordReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buf: Box::new([0u8; RECORD_SIZE]),
            slots: 0,
            finished: false,
        }
    }

    /// Number of complete slots consumed so far, blank ones included.
    pub fn slots_read(&self) -> usize {
        self.slots
    }

    /// Reads the next slot, reporting why reading stopped when it did not
    /// end cleanly on a record boundary.
    pub fn try_next_record(&mut self) -> Result<RecordRead, RecordError> {
        if self.finished {
            return Ok(RecordRead::EndOfRecords);
        }

        let filled = match fill(&mut self.inner, &mut self.buf[..]) {
            Ok(filled) => filled,
            Err(source) => {
                self.finished = true;
                return Err(RecordError::Io {
                    slot: self.slots,
                    source,
                });
            }
        };
        if filled == 0 {
            self.finished = true;
            return Ok(RecordRead::EndOfRecords);
        }
        if filled < RECORD_SIZE {
            self.finished = true;
            return Err(RecordError::TrailingBytes(filled));
        }

        let decoded = decode_record(&mut Reader::new(&self.buf[..]));
        match decoded {
            Ok(record) => {
                self.slots += 1;
                Ok(RecordRead::Record(record))
            }
            Err(source) => {
                self.finished = true;
                Err(RecordError::Truncated {
                    slot: self.slots,
                    source,
                })
            }
        }
    }

    /// Reads the next slot.
    ///
    /// The legacy format has no way to tell corruption apart from the end of
    /// the file, so every failure ends iteration. Failures are logged.
    pub fn next_record(&mut self) -> RecordRead {
        match self.try_next_record() {
            Ok(read) => read,
            Err(RecordError::TrailingBytes(len)) => {
                debug!(
                    slots = self.slots,
                    len, "ignoring trailing fragment after last record"
                );
                RecordRead::EndOfRecords
            }
            Err(err) => {
                warn!(slots = self.slots, error = %err, "stopping record read");
                RecordRead::EndOfRecords
            }
        }
    }
}

impl<R: Read> Iterator for RecordReader<R> {
    type Item = StudentRecord;

    fn next(&mut self) -> Option<StudentRecord> {
        loop {
            match self.next_record() {
                RecordRead::Record(record) if record.is_blank() => {
                    trace!(slot = self.slots - 1, "skipping blank slot");
                }
                RecordRead::Record(record) => return Some(record),
                RecordRead::EndOfRecords => return None,
            }
        }
    }
}

impl<R: Read> FusedIterator for RecordReader<R> {}

/// Opens a `.rec` file for reading. The file closes when the reader drops.
pub fn open_records(path: impl AsRef<Path>) -> io::Result<RecordReader<BufReader<File>>> {
    let file = File::open(path.as_ref())?;
    Ok(RecordReader::new(BufReader::new(file)))
}

/// Reads until `buf` is full or the stream ends; returns the bytes read.
fn fill<R: Read>(inner: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match inner.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        }
    }
    Ok(filled)
}
