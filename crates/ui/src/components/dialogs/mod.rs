//! # Dialog Components
//!
//! Modal dialogs for the entity workflows: one form dialog per entity
//! plus a shared delete confirmation.

pub mod confirm_delete;
pub mod contract_form;
pub mod role_form;
pub mod visitor_form;

pub use confirm_delete::ConfirmDeleteDialog;
pub use contract_form::ContractFormDialog;
pub use role_form::RoleFormDialog;
pub use visitor_form::VisitorFormDialog;

/// Reduce a server timestamp to its date part for a date input.
///
/// The server may return either a bare date or a full ISO timestamp;
/// date inputs only accept `YYYY-MM-DD`.
pub fn date_only(value: &str) -> String {
    match value.split_once('T') {
        Some((date, _)) => date.to_string(),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_date_only_strips_time_part() {
        assert_eq!(date_only("2024-05-01T14:30:00Z"), "2024-05-01");
    }

    #[test]
    fn test_date_only_passes_bare_dates_through() {
        assert_eq!(date_only("2024-05-01"), "2024-05-01");
        assert_eq!(date_only(""), "");
    }
}
