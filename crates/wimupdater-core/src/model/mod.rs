/// Data model for WimUpdater.
///
/// Re-exports the image record types and the selection list.
pub mod image;
pub mod selection;
pub mod size;

pub use image::{ImageInfo, ImageRecord, UNKNOWN};
pub use selection::{SelectAllState, SelectableItem, SelectionList};
