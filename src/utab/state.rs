use crate::model::User;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> SortDirection {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Sort and filter configuration for the active list view.
///
/// Recreated on every navigation into the list view and mutated in place by
/// sort-header and search-input interactions while that view is active.
#[derive(Debug, Default)]
pub struct ViewState {
    /// Dotted field path the view is sorted by, if any
    pub sort_key: Option<String>,
    pub direction: SortDirection,
    /// The active filtered subset; `None` means no filter is applied and the
    /// full cached set is rendered.
    pub filtered: Option<Vec<User>>,
}

impl ViewState {
    /// Header-click toggling rule: the currently active key flips the
    /// direction, a different key becomes active with `Ascending`.
    pub fn toggle_sort(&mut self, key: &str) {
        match self.sort_key.as_deref() {
            Some(active) if active == key => self.direction = self.direction.flipped(),
            _ => {
                self.sort_key = Some(key.to_string());
                self.direction = SortDirection::Ascending;
            }
        }
    }
}

/// Session-wide mutable state: the most recently fetched full record set and
/// the view configuration of the active list view.
///
/// Owned by a single logical thread of control; there are no concurrent
/// writers. Fetches are tagged with the navigation epoch that initiated them
/// so a result arriving after the user navigated away is discarded.
#[derive(Debug, Default)]
pub struct SessionState {
    cache: Option<Vec<User>>,
    pub view: ViewState,
    epoch: u64,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new navigation epoch and discards the previous view
    /// configuration. Fetches initiated before this call become stale.
    pub fn begin_navigation(&mut self) -> u64 {
        self.epoch += 1;
        self.view = ViewState::default();
        self.epoch
    }

    pub fn current_epoch(&self) -> u64 {
        self.epoch
    }

    /// Installs a freshly fetched full set, replacing the cache wholesale.
    /// Returns false and drops the result if `epoch` has been superseded.
    pub fn install_cache(&mut self, epoch: u64, users: Vec<User>) -> bool {
        if epoch != self.epoch {
            return false;
        }
        self.cache = Some(users);
        true
    }

    pub fn cache(&self) -> Option<&[User]> {
        self.cache.as_deref()
    }

    pub fn needs_fetch(&self, force_refresh: bool) -> bool {
        force_refresh || self.cache.is_none()
    }

    /// The records the list view renders: the filtered subset when a filter
    /// is active, otherwise the full cached set.
    pub fn visible(&self) -> &[User] {
        self.view
            .filtered
            .as_deref()
            .or(self.cache.as_deref())
            .unwrap_or(&[])
    }
}
