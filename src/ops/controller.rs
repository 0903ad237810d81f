use tracing::debug;

use crate::model::contact::Contact;
use crate::model::filter::{FilterState, FilterValue};
use crate::model::selection::SelectionState;
use crate::model::sort::{SortField, SortState};
use crate::ops::{filter_ops, select_ops, sort_ops};

/// Search, sort, filter and selection state for one page of contacts.
///
/// All methods run synchronously and never fail. Loading data and acting
/// on the selection belong to the caller.
#[derive(Debug, Clone, Default)]
pub struct TableStateController {
    contacts: Vec<Contact>,
    filters: FilterState,
    sort: SortState,
    selection: SelectionState,
}

impl TableStateController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        TableStateController {
            contacts,
            ..Self::default()
        }
    }

    /// Replace the loaded page. Selected IDs that are not on the new page
    /// are dropped; filters and sort carry over.
    pub fn load_page(&mut self, contacts: Vec<Contact>) {
        self.contacts = contacts;
        let before = self.selection.len();
        self.selection = select_ops::retain_on_page(&self.selection, &self.contacts);
        if self.selection.len() != before {
            debug!(
                dropped = before - self.selection.len(),
                "pruned selection after page load"
            );
        }
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    // -----------------------------------------------------------------------
    // Filters
    // -----------------------------------------------------------------------

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.filters.search_term = term.into();
    }

    pub fn set_source_filter(&mut self, value: impl Into<FilterValue>) {
        self.filters.source = value.into();
    }

    pub fn set_segment_filter(&mut self, value: impl Into<FilterValue>) {
        self.filters.segment = value.into();
    }

    pub fn set_status_filter(&mut self, value: impl Into<FilterValue>) {
        self.filters.status = value.into();
    }

    pub fn set_filters(&mut self, filters: FilterState) {
        self.filters = filters;
    }

    /// Reset the categorical filters; search and sort are kept
    pub fn clear_filters(&mut self) {
        self.filters = filter_ops::clear_filters(&self.filters);
    }

    pub fn active_filter_count(&self) -> usize {
        filter_ops::active_filter_count(&self.filters)
    }

    pub fn has_active_filters(&self) -> bool {
        filter_ops::has_active_filters(&self.filters)
    }

    // -----------------------------------------------------------------------
    // Sort
    // -----------------------------------------------------------------------

    /// Column header click
    pub fn sort_by(&mut self, field: SortField) {
        self.sort = sort_ops::toggle_sort(&self.sort, field);
    }

    pub fn set_sort(&mut self, sort: SortState) {
        self.sort = sort;
    }

    pub fn clear_sort(&mut self) {
        self.sort = SortState::default();
    }

    // -----------------------------------------------------------------------
    // Derived rows
    // -----------------------------------------------------------------------

    /// Rows to render: filtered, then sorted
    pub fn visible(&self) -> Vec<&Contact> {
        let filtered = filter_ops::apply_filters(&self.contacts, &self.filters);
        sort_ops::apply_sort(&filtered, &self.sort)
    }

    /// Selected contacts in page order
    pub fn selected_contacts(&self) -> Vec<&Contact> {
        self.contacts
            .iter()
            .filter(|c| self.selection.contains(&c.id))
            .collect()
    }

    // -----------------------------------------------------------------------
    // Selection
    // -----------------------------------------------------------------------

    /// Header checkbox over the visible rows
    pub fn select_all(&mut self, checked: bool) {
        let next = select_ops::toggle_select_all(checked, &self.visible());
        self.selection = next;
    }

    /// Whether `id` is one of the rows currently shown
    pub fn is_visible(&self, id: &str) -> bool {
        self.visible().iter().any(|c| c.id == id)
    }

    /// Row checkbox. IDs that are not visible (not on the page, or hidden
    /// by the filters) are ignored and leave the selection unchanged.
    /// Returns whether `id` is selected afterwards.
    pub fn toggle_selected(&mut self, id: &str) -> bool {
        if !self.is_visible(id) {
            debug!(id, "ignoring selection toggle for contact not visible");
            return self.selection.contains(id);
        }
        self.selection = select_ops::toggle_one(id, &self.selection);
        self.selection.contains(id)
    }

    pub fn clear_selection(&mut self) {
        self.selection = SelectionState::new();
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.contains(id)
    }

    /// Checked state for the header checkbox
    pub fn all_visible_selected(&self) -> bool {
        select_ops::all_selected(&self.selection, &self.visible())
    }
}
