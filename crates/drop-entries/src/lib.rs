//! # Drop Entries
//!
//! `drop-entries` resolves the file-system entries behind a completed drop
//! into a flat list of file handles. Directories are expanded recursively
//! and concurrently; on platforms that cannot enumerate directories the
//! caller falls back to the flat files view it already holds.

mod entry;
mod expand;
mod fs;

pub use entry::{DirectoryReader, Entry};
pub use expand::expand;
pub use fs::{mime_from_extension, DroppedFile, FsEntrySource};

#[cfg(test)]
mod tests;
