use drop_accept::{is_accepting, TransferBatch, TransferredFile};
use drop_entries::{expand, Entry};
use drop_error::Result;

use crate::DropAreaOptions;

/// Advisory effect hint mirrored back to the platform during a gesture
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropEffect {
    /// The transfer would be accepted here
    Copy,
    /// Allowed effects advertised when a drag starts inside the area
    CopyMove,
    /// The transfer would be rejected here
    None,
}

type FilesCallback<F> = Box<dyn FnMut(Vec<F>) + Send>;
type AcceptedDragCallback = Box<dyn FnMut() + Send>;

/// The engine of one drop area: classification at every gesture phase,
/// entry expansion at drop, and the callback boundary towards the host.
///
/// `traversal_supported` is the platform capability flag for enumerating
/// dropped directories, queried once at construction. Without it,
/// dropped directories are silently ignored and the platform's flat
/// files view is delivered as-is.
pub struct DropArea<F> {
    options: DropAreaOptions,
    traversal_supported: bool,
    on_select_files: FilesCallback<F>,
    on_accepted_drag_enter: Option<AcceptedDragCallback>,
}

impl<F> DropArea<F>
where
    F: TransferredFile + Send + 'static,
{
    /// Create an area delivering accepted files to `on_select_files`.
    ///
    /// The callback fires exactly once per accepted drop or browse
    /// action, with the final flat file list.
    pub fn new(
        options: DropAreaOptions,
        traversal_supported: bool,
        on_select_files: impl FnMut(Vec<F>) + Send + 'static,
    ) -> Self {
        DropArea {
            options,
            traversal_supported,
            on_select_files: Box::new(on_select_files),
            on_accepted_drag_enter: None,
        }
    }

    /// Register a callback fired when an in-progress drag is classified
    /// as acceptable (drives presentation-only visual state)
    pub fn on_accepted_drag_enter(
        mut self,
        callback: impl FnMut() + Send + 'static,
    ) -> Self {
        self.on_accepted_drag_enter = Some(Box::new(callback));
        self
    }

    pub fn options(&self) -> &DropAreaOptions {
        &self.options
    }

    /// Classify a batch snapshot under the area's filter and policy
    pub fn is_accepting(&self, batch: &TransferBatch<F>) -> bool {
        is_accepting(
            batch,
            &self.options.accept,
            self.options.multiple,
            self.options.disabled,
        )
    }

    /// A drag started inside the area; advertise the allowed effects
    pub fn handle_drag_start(&self) -> DropEffect {
        DropEffect::CopyMove
    }

    /// A drag entered the area. The verdict is advisory: names are not
    /// known yet, so it is re-validated at drop time.
    pub fn handle_drag_enter(&mut self, batch: &TransferBatch<F>) -> DropEffect {
        if self.is_accepting(batch) {
            if let Some(callback) = self.on_accepted_drag_enter.as_mut() {
                callback();
            }
            DropEffect::Copy
        } else {
            DropEffect::None
        }
    }

    /// A drag moved over the area; same advisory verdict as enter,
    /// without the accepted-drag notification
    pub fn handle_drag_over(&self, batch: &TransferBatch<F>) -> DropEffect {
        if self.is_accepting(batch) {
            DropEffect::Copy
        } else {
            DropEffect::None
        }
    }

    /// A drag left the area without dropping. Visual state is the host's
    /// to reset; nothing is classified here.
    pub fn handle_drag_leave(&self) {
        log::trace!("Drag left the area");
    }

    /// A drag ended; deterministic no-op, kept for symmetry with the
    /// gesture lifecycle
    pub fn handle_drag_end(&self) {
        log::trace!("Drag ended");
    }

    /// A drop completed. The batch is re-classified authoritatively;
    /// on ACCEPT the dropped entries are expanded (or, without traversal
    /// support, the flat files view is taken as-is) and the files
    /// callback fires once.
    ///
    /// Returns `Ok(true)` if files were delivered, `Ok(false)` for a
    /// rejected drop (a normal outcome, not an error), and `Err` if the
    /// expansion failed, in which case no callback fires.
    pub async fn handle_drop(
        &mut self,
        batch: TransferBatch<F>,
        entries: Vec<Entry<F>>,
    ) -> Result<bool> {
        if !self.is_accepting(&batch) {
            log::debug!("Drop rejected by classification");
            return Ok(false);
        }

        let files = if self.traversal_supported {
            expand(entries).await?
        } else {
            // Directories cannot be enumerated here; deliver the plain
            // files the platform offered directly
            batch.into_files()
        };

        log::debug!("Drop accepted with {} files", files.len());
        (self.on_select_files)(files);
        Ok(true)
    }

    /// The area was clicked. Returns whether the host should open the
    /// native file chooser.
    pub fn handle_click(&self) -> bool {
        !self.options.disabled && self.options.clickable
    }

    /// Deliver a browse-dialog selection. The user already picked these
    /// files in the chooser, so they bypass classification and go
    /// straight to the files callback.
    pub fn select_files(&mut self, files: Vec<F>) {
        log::debug!("Browse selection with {} files", files.len());
        (self.on_select_files)(files);
    }
}
