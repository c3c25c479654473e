use crate::{AcceptFilter, ItemKind, TransferBatch, TransferredFile};

/// Decide whether a transfer batch is acceptable under the given filter
/// and multiplicity policy.
///
/// This is a pure predicate over an immutable batch snapshot. It is
/// called twice per gesture: at enter/over, where only item kinds and
/// MIME types are known and the verdict is advisory, and again at drop,
/// where realized file names are available and the verdict gates whether
/// extraction proceeds.
pub fn is_accepting<F: TransferredFile>(
    batch: &TransferBatch<F>,
    filter: &AcceptFilter,
    multiple: bool,
    disabled: bool,
) -> bool {
    if disabled {
        log::trace!("Rejecting transfer: area is disabled");
        return false;
    }

    if !multiple && batch.items().len() != 1 {
        log::trace!(
            "Rejecting transfer: {} items offered to a single-file area",
            batch.items().len()
        );
        return false;
    }

    if batch.items().len() > batch.files().len() {
        // Drag still in progress, or some items are not files. File names
        // are unknown here, so extension patterns cannot accept anything
        // and the verdict is a best-effort preview.
        for item in batch.items() {
            if item.kind() != ItemKind::File {
                log::trace!("Rejecting transfer: non-file item in batch");
                return false;
            }
            if !filter.matches(item.mime_type(), None) {
                log::trace!(
                    "Rejecting transfer: item type {:?} fails the filter",
                    item.mime_type()
                );
                return false;
            }
        }
    } else {
        // Drop complete, full name+type details per file
        if batch.files().is_empty() {
            log::trace!("Rejecting transfer: no files in drop");
            return false;
        }
        for file in batch.files() {
            if !filter.matches(file.mime_type(), Some(file.name())) {
                log::trace!(
                    "Rejecting transfer: file {:?} fails the filter",
                    file.name()
                );
                return false;
            }
        }
    }

    true
}
