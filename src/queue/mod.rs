//! The queue core: ordered store, snapshot diffing, the update-badge
//! lifecycle, and multi-select editing.
//!
//! All mutation happens on the UI event loop thread. The update pump
//! ([`scheduler::UpdatePump`]) only emits timed events; it never touches
//! the store itself.

pub mod reconciler;
pub mod scheduler;
pub mod selection;
pub mod snapshot;
pub mod store;

pub use scheduler::{UpdateCadence, UpdatePump};
pub use selection::SelectionController;
pub use snapshot::{QueueItem, QueueSnapshot};
pub use store::QueueStore;
