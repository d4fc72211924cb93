//! DOM-free gallery logic: what is visible, in which order, and what the
//! page should say about it. The wasm frontend reads items out of the page,
//! asks this crate, and writes the answer back.

pub mod detection;
pub mod inflight;
pub mod lifecycle;
pub mod selection;
pub mod text;
pub mod view;

pub use detection::{DetectionResult, ResultItem};
pub use inflight::InFlight;
pub use lifecycle::{Deletion, ItemState, Settled};
pub use selection::{Filter, ParseSelectionError, Restored, Selection, SortKey};
pub use text::{Counts, StatusBadge, Subject, SummaryLine, pluralize};
pub use view::{GalleryView, compute_order, compute_order_by, compute_visibility, fold_compare};
