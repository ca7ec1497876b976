//! Selected item plus open flag for a detail overlay

/// What happens to the selected item when the overlay closes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DismissBehavior {
    /// Keep the last item around; content is static per click
    #[default]
    Retain,
    /// Forget the item as well
    Clear,
}

/// Detail-overlay state shared by the quote, concentration and faculty overlays.
///
/// The overlay can only be open while an item is selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<T> {
    selected: Option<T>,
    open: bool,
    on_dismiss: DismissBehavior,
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self::new(DismissBehavior::default())
    }
}

impl<T> Selection<T> {
    pub fn new(on_dismiss: DismissBehavior) -> Self {
        Self {
            selected: None,
            open: false,
            on_dismiss,
        }
    }

    pub fn clearing() -> Self {
        Self::new(DismissBehavior::Clear)
    }

    pub fn select(&mut self, item: T) {
        self.selected = Some(item);
        self.open = true;
    }

    pub fn dismiss(&mut self) {
        self.open = false;
        if self.on_dismiss == DismissBehavior::Clear {
            self.selected = None;
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Last selected item, whether or not the overlay is showing
    pub fn selected(&self) -> Option<&T> {
        self.selected.as_ref()
    }

    /// The item to draw in the overlay, if it is open
    pub fn visible(&self) -> Option<&T> {
        if self.open {
            self.selected.as_ref()
        } else {
            None
        }
    }
}
