//! Page Components for Condominio Admin
//!
//! One page per entity. Each page is the single source of truth for its
//! entity collection and the visible mode (list vs. form): it fetches and
//! holds state, passes data and callbacks down to the table and form, and
//! reacts to user intents by re-invoking the API client and refetching.
//!
//! ## Available Pages
//!
//! - **ContractsPage**: contract list/form with PDF generation
//! - **RolesPage**: role list/form with permission assignment
//! - **VisitorsPage**: visitor list/form with photo upload

pub mod contracts;
pub mod roles;
pub mod visitors;

// Re-export page components for convenience
pub use contracts::ContractsPage;
pub use roles::RolesPage;
pub use visitors::VisitorsPage;

// ============================================================================
// Page Mode
// ============================================================================

/// The list/form state machine shared by all pages.
///
/// List → (new/edit) → Form → (submit success or cancel) → List. Submit
/// success additionally triggers a full collection refetch; cancel changes
/// nothing beyond closing the form.
#[derive(Debug, Clone, PartialEq)]
pub enum PageMode<T> {
    /// Showing the collection table.
    List,
    /// Showing the create/edit form; `editing` is None for a new record.
    Form { editing: Option<T> },
}

// Manual impl: the records themselves have no Default.
impl<T> Default for PageMode<T> {
    fn default() -> Self {
        PageMode::List
    }
}

impl<T> PageMode<T> {
    /// Whether the form is open.
    pub fn is_form(&self) -> bool {
        matches!(self, PageMode::Form { .. })
    }

    /// Open the form for a new record.
    pub fn open_new(&mut self) {
        *self = PageMode::Form { editing: None };
    }

    /// Open the form pre-populated with an existing record.
    pub fn open_edit(&mut self, record: T) {
        *self = PageMode::Form {
            editing: Some(record),
        };
    }

    /// Close the form and return to the list.
    pub fn close(&mut self) {
        *self = PageMode::List;
    }

    /// The record currently being edited, if any.
    pub fn editing(&self) -> Option<&T> {
        match self {
            PageMode::Form { editing } => editing.as_ref(),
            PageMode::List => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_in_list_mode() {
        let mode: PageMode<i64> = PageMode::default();
        assert!(!mode.is_form());
        assert_eq!(mode.editing(), None);
    }

    #[test]
    fn test_open_new_then_cancel() {
        let mut mode: PageMode<i64> = PageMode::List;
        mode.open_new();
        assert!(mode.is_form());
        assert_eq!(mode.editing(), None);

        mode.close();
        assert!(!mode.is_form());
    }

    #[test]
    fn test_open_edit_carries_record() {
        let mut mode: PageMode<i64> = PageMode::List;
        mode.open_edit(42);
        assert!(mode.is_form());
        assert_eq!(mode.editing(), Some(&42));
    }

    #[test]
    fn test_submit_success_returns_to_list() {
        let mut mode: PageMode<i64> = PageMode::List;
        mode.open_edit(7);
        mode.close();
        assert_eq!(mode, PageMode::List);
        assert_eq!(mode.editing(), None);
    }
}
