/// Selection list — the scanned images and which of them take part in the
/// next update run.
///
/// Owned by the UI thread. Background threads never touch it; scan results
/// arrive over the scanner channel and are handed to [`SelectionList::add_all`].
use super::image::ImageRecord;
use super::size::format_size;
use crate::error::WimError;
use std::path::PathBuf;

/// Display size shown when the file no longer exists.
pub const SIZE_MISSING: &str = "N/A";

/// Display size shown when the file exists but its metadata is unreadable.
pub const SIZE_UNREADABLE: &str = "Unknown";

/// A scanned image plus its inclusion flag.
#[derive(Debug, Clone)]
pub struct SelectableItem {
    pub record: ImageRecord,
    /// `true` if the image takes part in the next update run.
    pub included: bool,
    /// File length at the time the item was created.
    pub size_bytes: Option<u64>,
    /// Human-readable size, see [`format_size`].
    pub size_display: String,
}

impl SelectableItem {
    /// Wrap a record, reading its file size from disk. New items are included.
    pub fn new(record: ImageRecord) -> Self {
        let (size_bytes, size_display) = match std::fs::metadata(&record.file_path) {
            Ok(meta) => (Some(meta.len()), format_size(meta.len())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                (None, SIZE_MISSING.to_string())
            }
            Err(_) => (None, SIZE_UNREADABLE.to_string()),
        };
        Self {
            record,
            included: true,
            size_bytes,
            size_display,
        }
    }
}

/// Aggregate state for a tri-state "select all" control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectAllState {
    /// The list is empty; the control should be disabled.
    Empty,
    /// No item is included.
    None,
    /// Some but not all items are included.
    Partial,
    /// Every item is included.
    All,
}

/// Ordered list of scanned images in discovery order.
#[derive(Debug, Clone, Default)]
pub struct SelectionList {
    items: Vec<SelectableItem>,
}

impl SelectionList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents with `records`, every item included.
    pub fn add_all(&mut self, records: Vec<ImageRecord>) {
        self.items = records.into_iter().map(SelectableItem::new).collect();
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[SelectableItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Flip one item's inclusion flag and return the new value.
    pub fn toggle(&mut self, index: usize) -> Result<bool, WimError> {
        let item = self.item_mut(index)?;
        item.included = !item.included;
        Ok(item.included)
    }

    /// Set one item's inclusion flag.
    pub fn set_included(&mut self, index: usize, included: bool) -> Result<(), WimError> {
        self.item_mut(index)?.included = included;
        Ok(())
    }

    /// Include or exclude every item.
    pub fn set_all(&mut self, included: bool) {
        for item in &mut self.items {
            item.included = included;
        }
    }

    /// Paths of all included items, in list order.
    pub fn selected_paths(&self) -> Vec<PathBuf> {
        self.items
            .iter()
            .filter(|item| item.included)
            .map(|item| item.record.file_path.clone())
            .collect()
    }

    /// `(selected, total)`.
    pub fn counts(&self) -> (usize, usize) {
        let selected = self.items.iter().filter(|item| item.included).count();
        (selected, self.items.len())
    }

    pub fn select_all_state(&self) -> SelectAllState {
        match self.counts() {
            (_, 0) => SelectAllState::Empty,
            (0, _) => SelectAllState::None,
            (selected, total) if selected == total => SelectAllState::All,
            _ => SelectAllState::Partial,
        }
    }

    fn item_mut(&mut self, index: usize) -> Result<&mut SelectableItem, WimError> {
        let len = self.items.len();
        self.items
            .get_mut(index)
            .ok_or(WimError::SelectionOutOfRange { index, len })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ImageInfo;

    fn records(names: &[&str]) -> Vec<ImageRecord> {
        names
            .iter()
            .map(|n| ImageRecord::new(ImageInfo::default(), PathBuf::from(n)))
            .collect()
    }

    fn list(names: &[&str]) -> SelectionList {
        let mut list = SelectionList::new();
        list.add_all(records(names));
        list
    }

    #[test]
    fn test_add_all_selects_everything() {
        let list = list(&["a.wim", "b.wim", "c.wim"]);
        assert_eq!(list.counts(), (3, 3));
        assert!(list.items().iter().all(|i| i.included));
        assert_eq!(list.select_all_state(), SelectAllState::All);
    }

    #[test]
    fn test_add_all_replaces_contents() {
        let mut list = list(&["a.wim", "b.wim"]);
        list.toggle(0).unwrap();
        list.add_all(records(&["z.wim"]));
        assert_eq!(list.counts(), (1, 1));
        assert_eq!(list.selected_paths(), vec![PathBuf::from("z.wim")]);
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        let mut list = list(&["a.wim", "b.wim", "c.wim"]);
        let before = list.counts();
        assert!(!list.toggle(1).unwrap());
        assert_eq!(list.counts(), (2, 3));
        assert!(list.toggle(1).unwrap());
        assert_eq!(list.counts(), before);
        assert!(list.items()[1].included);
    }

    #[test]
    fn test_selected_paths_keep_order() {
        let mut list = list(&["a.wim", "b.wim", "c.wim", "d.wim"]);
        list.set_all(false);
        list.set_included(3, true).unwrap();
        list.set_included(1, true).unwrap();
        assert_eq!(
            list.selected_paths(),
            vec![PathBuf::from("b.wim"), PathBuf::from("d.wim")]
        );
        assert_eq!(list.select_all_state(), SelectAllState::Partial);

        list.set_all(true);
        assert_eq!(
            list.selected_paths(),
            vec![
                PathBuf::from("a.wim"),
                PathBuf::from("b.wim"),
                PathBuf::from("c.wim"),
                PathBuf::from("d.wim"),
            ]
        );
        assert_eq!(list.counts(), (4, 4));
    }

    #[test]
    fn test_set_all_false() {
        let mut list = list(&["a.wim", "b.wim"]);
        list.set_all(false);
        assert_eq!(list.counts(), (0, 2));
        assert!(list.selected_paths().is_empty());
        assert_eq!(list.select_all_state(), SelectAllState::None);
    }

    #[test]
    fn test_out_of_range_is_an_error() {
        let mut list = list(&["a.wim"]);
        let err = list.toggle(5).unwrap_err();
        assert!(matches!(
            err,
            WimError::SelectionOutOfRange { index: 5, len: 1 }
        ));
        assert!(list.set_included(1, false).is_err());
        // The failed calls must not have changed anything.
        assert_eq!(list.counts(), (1, 1));
    }

    #[test]
    fn test_empty_list_state() {
        let list = SelectionList::new();
        assert_eq!(list.select_all_state(), SelectAllState::Empty);
        assert_eq!(list.counts(), (0, 0));
    }

    #[test]
    fn test_size_display_for_missing_file() {
        let list = list(&["definitely-missing-file.wim"]);
        assert_eq!(list.items()[0].size_display, SIZE_MISSING);
        assert_eq!(list.items()[0].size_bytes, None);
    }

    #[test]
    fn test_size_display_for_real_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("install.wim");
        std::fs::write(&path, vec![0u8; 2048]).unwrap();

        let mut list = SelectionList::new();
        list.add_all(vec![ImageRecord::new(ImageInfo::default(), path)]);
        assert_eq!(list.items()[0].size_bytes, Some(2048));
        assert_eq!(list.items()[0].size_display, "2.0 KB");
    }
}
