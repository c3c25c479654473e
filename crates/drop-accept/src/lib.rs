mod batch;
mod classify;
mod filter;

pub use batch::{CandidateItem, ItemKind, TransferBatch, TransferredFile};
pub use classify::is_accepting;
pub use filter::AcceptFilter;
