use std::{future::Future, pin::Pin};

use futures_buffered::try_join_all;

use drop_error::Result;

use crate::Entry;

type Expansion<F> = Pin<Box<dyn Future<Output = Result<Vec<F>>> + Send>>;

/// Expand a set of dropped entries into a flat list of file handles.
///
/// Directories are read and recursed into; sibling expansions run
/// concurrently and their results are concatenated in no particular
/// order. The contract is all-or-nothing: if any read fails, the whole
/// expansion fails and no partial list is returned.
pub async fn expand<F>(entries: Vec<Entry<F>>) -> Result<Vec<F>>
where
    F: Send + 'static,
{
    log::debug!("Expanding {} dropped entries", entries.len());

    let lists = try_join_all(entries.into_iter().map(expand_entry)).await?;
    Ok(lists.into_iter().flatten().collect())
}

fn expand_entry<F>(entry: Entry<F>) -> Expansion<F>
where
    F: Send + 'static,
{
    Box::pin(async move {
        match entry {
            Entry::File(file) => Ok(vec![file]),
            Entry::Directory(mut reader) => {
                // A single read may return only part of a large directory;
                // keep reading until the reader reports no further entries
                let mut children = Vec::new();
                loop {
                    let batch = reader.read_batch().await?;
                    if batch.is_empty() {
                        break;
                    }
                    children.extend(batch);
                }
                log::trace!(
                    "Expanding {} child entries of a directory",
                    children.len()
                );

                let lists =
                    try_join_all(children.into_iter().map(expand_entry))
                        .await?;
                Ok(lists.into_iter().flatten().collect())
            }
        }
    })
}
