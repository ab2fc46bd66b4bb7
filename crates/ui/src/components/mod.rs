//! # UI Components
//!
//! Reusable building blocks: form inputs, one searchable table per
//! entity, and the modal dialogs.

pub mod contract_table;
pub mod dialogs;
pub mod inputs;
pub mod role_table;
pub mod visitor_table;

pub use contract_table::ContractTable;
pub use dialogs::{ConfirmDeleteDialog, ContractFormDialog, RoleFormDialog, VisitorFormDialog};
pub use role_table::RoleTable;
pub use visitor_table::VisitorTable;
