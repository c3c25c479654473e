use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::fs;

use drop_accept::TransferredFile;
use drop_error::{DropAreaError, Result};

use crate::{DirectoryReader, Entry};

/// The maximum number of child entries one directory read returns
const READ_BATCH_SIZE: usize = 64;

/// A file handle realized from a native drop: its name, its declared
/// MIME type, and the path it was materialized from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DroppedFile {
    name: String,
    mime_type: String,
    path: PathBuf,
}

impl DroppedFile {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TransferredFile for DroppedFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn mime_type(&self) -> &str {
        &self.mime_type
    }
}

type MimeResolver = Arc<dyn Fn(&Path) -> String + Send + Sync>;

/// Builds expandable [`Entry`] values from real file-system paths, the
/// way a host maps a native drop onto the expander.
///
/// MIME types are declared from the file name by the host-supplied
/// resolver; file content is never inspected.
#[derive(Clone)]
pub struct FsEntrySource {
    resolve_mime: MimeResolver,
}

impl FsEntrySource {
    pub fn new(
        resolve_mime: impl Fn(&Path) -> String + Send + Sync + 'static,
    ) -> Self {
        FsEntrySource {
            resolve_mime: Arc::new(resolve_mime),
        }
    }

    /// An entry source declaring MIME types from a table of common file
    /// extensions (see [`mime_from_extension`])
    pub fn with_common_types() -> Self {
        FsEntrySource::new(mime_from_extension)
    }

    /// Map one dropped path to an expandable entry
    pub async fn entry<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<Entry<DroppedFile>> {
        let path = path.as_ref().to_path_buf();
        let metadata = fs::metadata(&path).await?;

        if metadata.is_dir() {
            log::trace!("Dropped path {:?} is a directory", path);
            Ok(Entry::Directory(Box::new(FsDirectoryReader {
                path,
                resolve_mime: self.resolve_mime.clone(),
                read_dir: None,
                done: false,
            })))
        } else {
            Ok(Entry::File(dropped_file(&self.resolve_mime, path)?))
        }
    }
}

fn dropped_file(
    resolve_mime: &MimeResolver,
    path: PathBuf,
) -> Result<DroppedFile> {
    let name = path
        .file_name()
        .ok_or_else(|| {
            DropAreaError::Materialize(format!(
                "Path {:?} has no file name",
                path
            ))
        })?
        .to_string_lossy()
        .to_string();
    let mime_type = resolve_mime(&path);

    Ok(DroppedFile {
        name,
        mime_type,
        path,
    })
}

struct FsDirectoryReader {
    path: PathBuf,
    resolve_mime: MimeResolver,
    read_dir: Option<fs::ReadDir>,
    done: bool,
}

#[async_trait]
impl DirectoryReader<DroppedFile> for FsDirectoryReader {
    async fn read_batch(&mut self) -> Result<Vec<Entry<DroppedFile>>> {
        if self.done {
            return Ok(vec![]);
        }
        if self.read_dir.is_none() {
            self.read_dir = Some(fs::read_dir(&self.path).await?);
        }

        let mut batch = Vec::new();
        if let Some(read_dir) = self.read_dir.as_mut() {
            while batch.len() < READ_BATCH_SIZE {
                let dir_entry = match read_dir.next_entry().await? {
                    Some(dir_entry) => dir_entry,
                    None => {
                        self.done = true;
                        break;
                    }
                };

                let file_type = dir_entry.file_type().await?;
                if file_type.is_dir() {
                    batch.push(Entry::Directory(Box::new(FsDirectoryReader {
                        path: dir_entry.path(),
                        resolve_mime: self.resolve_mime.clone(),
                        read_dir: None,
                        done: false,
                    })));
                } else if file_type.is_file() {
                    batch.push(Entry::File(dropped_file(
                        &self.resolve_mime,
                        dir_entry.path(),
                    )?));
                } else {
                    log::trace!(
                        "Ignoring non-file entry: {:?}",
                        dir_entry.path()
                    );
                }
            }
        }

        log::trace!(
            "Read {} child entries from directory {:?}",
            batch.len(),
            self.path
        );
        Ok(batch)
    }
}

/// Declare a MIME type from a file's extension using a table of common
/// types. Unknown extensions map to `application/octet-stream`.
pub fn mime_from_extension(path: &Path) -> String {
    let extension = path
        .extension()
        .and_then(|extension| extension.to_str())
        .map(|extension| extension.to_ascii_lowercase());

    let mime_type = match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("mp3") => "audio/mpeg",
        Some("wav") => "audio/wav",
        Some("ogg") => "audio/ogg",
        Some("mp4") => "video/mp4",
        Some("webm") => "video/webm",
        Some("txt") => "text/plain",
        Some("json") => "application/json",
        Some("pdf") => "application/pdf",
        _ => "application/octet-stream",
    };
    mime_type.to_string()
}
