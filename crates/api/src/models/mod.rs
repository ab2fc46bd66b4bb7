//! Entity models for Condominio Admin
//!
//! Plain serde records with server-assigned integer ids. Wire field names
//! are the backend's Spanish names; outbound payload shapes live next to
//! the records they belong to.

pub mod contract;
pub mod role;
pub mod visitor;

// Re-exports
pub use contract::{Contract, ContractPayload, ContractStatus, OwnerRecord, OwnerRef, PdfGenerated};
pub use role::{Permission, Role, RolePayload};
pub use visitor::{Sex, Visitor, VisitorPayload, VisitorStatus};
