//! Blob input binding
//!
//! A blob is read through a cursor: each call to [InputStream::read] picks up where the last one
//! stopped, and an empty result signals the end of the stream.

use std::io::{self, Read};

use crate::error::Result;
use crate::types::Body;

/// A binary, blob-like readable source
pub trait InputStream {
    /// Read up to `size` bytes, or everything that is left when `size` is `None`
    ///
    /// Returns an empty body once the stream is exhausted. Failures of the underlying source
    /// surface as [BindingError::Io](crate::BindingError::Io).
    fn read(&mut self, size: Option<usize>) -> Result<Body>;

    /// The name of the blob, if the backing store tracks it
    fn name(&self) -> Option<&str>;

    /// The size of the blob in bytes, if known up front
    fn length(&self) -> Option<u64>;

    /// The blob's primary location
    fn uri(&self) -> Option<&str>;
}

/// A blob backed by any [Read] source
pub struct Blob<R> {
    reader: R,
    name: Option<String>,
    length: Option<u64>,
    uri: Option<String>,
    exhausted: bool,
}

impl<R: Read> Blob<R> {
    pub fn new(reader: R) -> Self {
        Blob {
            reader,
            name: None,
            length: None,
            uri: None,
            exhausted: false,
        }
    }

    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_length(mut self, length: u64) -> Self {
        self.length = Some(length);
        self
    }

    pub fn with_uri<S: Into<String>>(mut self, uri: S) -> Self {
        self.uri = Some(uri.into());
        self
    }

    /// Read up to `size` bytes; the buffer grows with the data actually delivered
    fn read_up_to(&mut self, size: usize) -> io::Result<Vec<u8>> {
        let mut buf = Vec::new();
        (&mut self.reader).take(size as u64).read_to_end(&mut buf)?;
        Ok(buf)
    }
}

impl Blob<io::Cursor<Body>> {
    /// A blob over an in-memory buffer; its length is known
    pub fn from_bytes<B: Into<Body>>(bytes: B) -> Self {
        let bytes = bytes.into();
        let length = bytes.len() as u64;
        Blob::new(io::Cursor::new(bytes)).with_length(length)
    }
}

impl<R: Read> InputStream for Blob<R> {
    fn read(&mut self, size: Option<usize>) -> Result<Body> {
        if self.exhausted {
            return Ok(Body::new());
        }

        let buf = match size {
            Some(size) => self.read_up_to(size)?,
            None => {
                let mut buf = Vec::new();
                self.reader.read_to_end(&mut buf)?;
                buf
            }
        };

        // a short read means the source has nothing more to give
        if size.map_or(true, |size| buf.len() < size) {
            tracing::trace!(name = ?self.name, "blob exhausted");
            self.exhausted = true;
        }

        Ok(Body::from(buf))
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn length(&self) -> Option<u64> {
        self.length
    }

    fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }
}

/// Shares the cursor with [InputStream::read], so both can be mixed on one blob
impl<R: Read> Read for Blob<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.exhausted || buf.is_empty() {
            return Ok(0);
        }

        let n = self.reader.read(buf)?;
        if n == 0 {
            tracing::trace!(name = ?self.name, "blob exhausted");
            self.exhausted = true;
        }
        Ok(n)
    }
}
