use std::fmt;

use async_trait::async_trait;

use drop_error::Result;

/// One dropped file-system entry: either a leaf file handle or a
/// directory whose children are discoverable only through asynchronous
/// reads.
pub enum Entry<F> {
    File(F),
    Directory(Box<dyn DirectoryReader<F>>),
}

impl<F: fmt::Debug> fmt::Debug for Entry<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::File(file) => f.debug_tuple("File").field(file).finish(),
            Entry::Directory(_) => f.write_str("Directory(..)"),
        }
    }
}

/// Asynchronous access to the immediate children of a dropped directory.
///
/// A single read is not guaranteed to return all children; readers hand
/// out children in batches, and an empty batch means the directory has no
/// further entries.
#[async_trait]
pub trait DirectoryReader<F: Send>: Send {
    /// Read the next batch of child entries
    async fn read_batch(&mut self) -> Result<Vec<Entry<F>>>;
}
