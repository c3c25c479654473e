use std::{
    collections::VecDeque,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use uuid::Uuid;

use drop_error::{DropAreaError, Result};

use crate::{
    expand, mime_from_extension, DirectoryReader, Entry, FsEntrySource,
};

/// A directory reader serving a fixed sequence of child batches
struct StaticDir {
    batches: VecDeque<Vec<Entry<String>>>,
}

impl StaticDir {
    fn new(batches: Vec<Vec<Entry<String>>>) -> Box<Self> {
        Box::new(StaticDir {
            batches: batches.into(),
        })
    }
}

#[async_trait]
impl DirectoryReader<String> for StaticDir {
    async fn read_batch(&mut self) -> Result<Vec<Entry<String>>> {
        Ok(self.batches.pop_front().unwrap_or_default())
    }
}

/// A directory reader whose every read fails
struct FailingDir;

#[async_trait]
impl DirectoryReader<String> for FailingDir {
    async fn read_batch(&mut self) -> Result<Vec<Entry<String>>> {
        Err(DropAreaError::DirectoryRead(
            "device not ready".to_string(),
        ))
    }
}

fn file(name: &str) -> Entry<String> {
    Entry::File(name.to_string())
}

fn dir(children: Vec<Entry<String>>) -> Entry<String> {
    Entry::Directory(StaticDir::new(vec![children]))
}

fn sorted(mut files: Vec<String>) -> Vec<String> {
    files.sort();
    files
}

// expansion over mock readers

#[tokio::test]
async fn expand_resolves_a_leaf_to_a_single_file() {
    let files = expand(vec![file("a.png")])
        .await
        .expect("Should expand successfully");
    assert_eq!(files, vec!["a.png".to_string()]);
}

#[tokio::test]
async fn expand_returns_empty_for_no_entries() {
    let files: Vec<String> =
        expand(vec![]).await.expect("Should expand successfully");
    assert!(files.is_empty());
}

#[tokio::test]
async fn expand_flattens_nested_directories() {
    // [fileA, dirB{fileC, dirD{fileE}}]
    let entries = vec![
        file("fileA"),
        dir(vec![file("fileC"), dir(vec![file("fileE")])]),
    ];

    let files = expand(entries)
        .await
        .expect("Should expand successfully");

    assert_eq!(
        sorted(files),
        vec![
            "fileA".to_string(),
            "fileC".to_string(),
            "fileE".to_string()
        ]
    );
}

#[tokio::test]
async fn expand_concatenates_batched_directory_reads() {
    // One read call is not guaranteed to return the whole directory;
    // the expander must keep reading until an empty batch
    let entries = vec![Entry::Directory(StaticDir::new(vec![
        vec![file("first")],
        vec![file("second"), file("third")],
    ]))];

    let files = expand(entries)
        .await
        .expect("Should expand successfully");

    assert_eq!(
        sorted(files),
        vec![
            "first".to_string(),
            "second".to_string(),
            "third".to_string()
        ]
    );
}

#[tokio::test]
async fn empty_directory_expands_to_nothing() {
    let files = expand(vec![dir(vec![])])
        .await
        .expect("Should expand successfully");
    assert!(files.is_empty());
}

#[tokio::test]
async fn expand_fails_as_a_whole_on_read_error() {
    // A failing read anywhere in the tree fails the whole expansion;
    // no partial file list is ever delivered
    let entries = vec![
        file("fileA"),
        dir(vec![file("fileC"), Entry::Directory(Box::new(FailingDir))]),
    ];

    let result = expand(entries).await;

    assert!(matches!(result, Err(DropAreaError::DirectoryRead(_))));
}

// expansion over the real file system

fn create_temp_tree() -> PathBuf {
    let root = std::env::temp_dir().join(Uuid::new_v4().to_string());
    std::fs::create_dir(&root).expect("Could not create temp dir");
    root
}

fn create_file_at(root: &PathBuf, name: &str) {
    std::fs::write(root.join(name), b"content")
        .expect("Could not create temp file");
}

#[tokio::test]
async fn fs_entry_for_a_file_resolves_name_and_type() {
    let root = create_temp_tree();
    create_file_at(&root, "photo.png");

    let source = FsEntrySource::with_common_types();
    let entry = source
        .entry(root.join("photo.png"))
        .await
        .expect("Should resolve entry");

    match entry {
        Entry::File(dropped) => {
            assert_eq!(dropped.name(), "photo.png");
            assert_eq!(dropped.mime_type(), "image/png");
            assert_eq!(dropped.path(), root.join("photo.png"));
        }
        Entry::Directory(_) => panic!("Expected a file entry"),
    }

    std::fs::remove_dir_all(root).expect("Could not clean up after test");
}

#[tokio::test]
async fn fs_directory_tree_expands_to_all_leaf_files() {
    let root = create_temp_tree();
    create_file_at(&root, "a.png");
    std::fs::create_dir(root.join("sub")).expect("Could not create dir");
    create_file_at(&root.join("sub"), "b.txt");
    std::fs::create_dir(root.join("sub/inner"))
        .expect("Could not create dir");
    create_file_at(&root.join("sub/inner"), "c.mp3");

    let source = FsEntrySource::with_common_types();
    let entry = source
        .entry(&root)
        .await
        .expect("Should resolve entry");

    let files = expand(vec![entry])
        .await
        .expect("Should expand successfully");
    let mut names: Vec<&str> =
        files.iter().map(|file| file.name()).collect();
    names.sort();

    assert_eq!(names, vec!["a.png", "b.txt", "c.mp3"]);

    std::fs::remove_dir_all(root).expect("Could not clean up after test");
}

#[tokio::test]
async fn fs_directory_larger_than_one_read_batch_is_not_truncated() {
    let root = create_temp_tree();
    for i in 0..70 {
        create_file_at(&root, &format!("file_{:03}.txt", i));
    }

    let source = FsEntrySource::with_common_types();
    let entry = source
        .entry(&root)
        .await
        .expect("Should resolve entry");

    let files = expand(vec![entry])
        .await
        .expect("Should expand successfully");
    assert_eq!(files.len(), 70);

    std::fs::remove_dir_all(root).expect("Could not clean up after test");
}

#[tokio::test]
async fn fs_entry_fails_for_a_missing_path() {
    let root = create_temp_tree();

    let source = FsEntrySource::with_common_types();
    let result = source.entry(root.join("missing")).await;

    assert!(matches!(result, Err(DropAreaError::Io(_))));

    std::fs::remove_dir_all(root).expect("Could not clean up after test");
}

#[test]
fn mime_table_covers_common_extensions() {
    assert_eq!(mime_from_extension(Path::new("a.png")), "image/png");
    assert_eq!(mime_from_extension(Path::new("a.PNG")), "image/png");
    assert_eq!(mime_from_extension(Path::new("a.jpeg")), "image/jpeg");
    assert_eq!(mime_from_extension(Path::new("a.mp3")), "audio/mpeg");
    assert_eq!(mime_from_extension(Path::new("a.mp4")), "video/mp4");
    assert_eq!(
        mime_from_extension(Path::new("a.unknown")),
        "application/octet-stream"
    );
    assert_eq!(
        mime_from_extension(Path::new("no_extension")),
        "application/octet-stream"
    );
}
