//! Data source abstraction for classification input.
//!
//! The classifier never reads storage itself. It asks a [`DataSource`]
//! for the bytes to measure, which keeps analysis independent of where
//! content lives and lets tests use in-memory buffers.

use std::borrow::Cow;

/// Supplies the content to classify.
pub trait DataSource {
    /// Returns the content, or `None` if no data is available.
    ///
    /// Implementations decide whether an empty object is presented as
    /// an empty buffer or as no data.
    fn content(&self) -> Option<Cow<'_, [u8]>>;
}

/// In-memory source holding a fixed buffer.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    data: Vec<u8>,
}

impl MemorySource {
    /// Creates a source over `data`.
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self { data: data.into() }
    }

    /// Returns the held bytes.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

impl DataSource for MemorySource {
    fn content(&self) -> Option<Cow<'_, [u8]>> {
        Some(Cow::Borrowed(&self.data))
    }
}

/// Source that never has data, standing in for unreadable content.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unavailable;

impl DataSource for Unavailable {
    fn content(&self) -> Option<Cow<'_, [u8]>> {
        None
    }
}

impl DataSource for [u8] {
    fn content(&self) -> Option<Cow<'_, [u8]>> {
        Some(Cow::Borrowed(self))
    }
}

impl DataSource for Vec<u8> {
    fn content(&self) -> Option<Cow<'_, [u8]>> {
        Some(Cow::Borrowed(self.as_slice()))
    }
}

impl<T: DataSource> DataSource for Option<T> {
    fn content(&self) -> Option<Cow<'_, [u8]>> {
        self.as_ref().and_then(|source| source.content())
    }
}

impl<T: DataSource + ?Sized> DataSource for &T {
    fn content(&self) -> Option<Cow<'_, [u8]>> {
        (**self).content()
    }
}
