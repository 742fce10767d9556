//! Content acquisition.
//!
//! This module provides the accessor seam between the classifier and
//! wherever bytes come from. A source either yields a buffer or reports
//! that no data is available; telling read failures apart from empty
//! content is the source's job, not the classifier's.

mod accessor;
mod file;

pub use accessor::{DataSource, MemorySource, Unavailable};
pub use file::{FileSource, SourceError};
