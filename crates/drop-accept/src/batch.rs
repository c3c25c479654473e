use serde::{Deserialize, Serialize};

/// The kind of content behind a transfer item
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    /// The item resolves to a file once the drop completes
    File,
    /// Non-file drag content, e.g. a text selection or a link
    Other,
}

/// One item offered by a drag-and-drop gesture.
///
/// During enter/over only the kind and declared MIME type are known; the
/// name appears once the transfer is finalized as a drop.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateItem {
    kind: ItemKind,
    mime_type: String,
    name: Option<String>,
}

impl CandidateItem {
    pub fn new(
        kind: ItemKind,
        mime_type: impl Into<String>,
        name: Option<String>,
    ) -> Self {
        CandidateItem {
            kind,
            mime_type: mime_type.into(),
            name,
        }
    }

    /// A file item as seen mid-drag, before its name is known
    pub fn file(mime_type: impl Into<String>) -> Self {
        CandidateItem::new(ItemKind::File, mime_type, None)
    }

    /// A non-file item, e.g. dragged text
    pub fn other(mime_type: impl Into<String>) -> Self {
        CandidateItem::new(ItemKind::Other, mime_type, None)
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// The name and declared MIME type of a realized file handle.
///
/// Realized files only exist once a drop completes (or a browse dialog
/// returns); classification reads them through this trait so hosts can
/// plug in their own file representation.
pub trait TransferredFile {
    fn name(&self) -> &str;
    fn mime_type(&self) -> &str;
}

/// A snapshot of everything one gesture offers at a given phase.
///
/// Two parallel views exist before the drop completes: the items view is
/// richer and includes non-file drag content, while the files view holds
/// only realized files. The files view is never longer than the items
/// view; equal lengths mean every offered item is already a plain file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransferBatch<F> {
    items: Vec<CandidateItem>,
    files: Vec<F>,
}

impl<F: TransferredFile> TransferBatch<F> {
    pub fn new(items: Vec<CandidateItem>, files: Vec<F>) -> Self {
        TransferBatch { items, files }
    }

    /// A batch as seen mid-drag: items only, no realized files yet
    pub fn from_items(items: Vec<CandidateItem>) -> Self {
        TransferBatch {
            items,
            files: vec![],
        }
    }

    /// A fully resolved batch, one item per realized file
    pub fn from_files(files: Vec<F>) -> Self {
        let items = files
            .iter()
            .map(|file| {
                CandidateItem::new(
                    ItemKind::File,
                    file.mime_type(),
                    Some(file.name().to_string()),
                )
            })
            .collect();
        TransferBatch { items, files }
    }

    pub fn items(&self) -> &[CandidateItem] {
        &self.items
    }

    pub fn files(&self) -> &[F] {
        &self.files
    }

    /// Consume the batch, keeping only the realized files
    pub fn into_files(self) -> Vec<F> {
        self.files
    }
}
