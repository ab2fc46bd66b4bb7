//! # Condo API
//!
//! Entity models and typed REST API clients for Condominio Admin.
//!
//! This crate owns everything that crosses the wire:
//!
//! - **Models**: serde records for Contract, Role, Permission and Visitor,
//!   plus the outbound payload shapes
//! - **Transport**: a shared [`ApiClient`] wrapping `reqwest` with bearer
//!   authentication from an injected [`CredentialProvider`]
//! - **Clients**: one typed client per entity translating CRUD verbs into
//!   HTTP requests
//! - **Errors**: every transport failure or non-2xx response is normalized
//!   into a single [`ClientError`]
//!

// ============================================================================
// Modules
// ============================================================================

pub mod client;
pub mod contracts;
pub mod credentials;
pub mod error;
pub mod models;
pub mod permissions;
pub mod roles;
pub mod visitors;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::{ApiClient, ListResponse, Paginated};
pub use contracts::ContractsClient;
pub use credentials::{CredentialProvider, EnvCredentials, SharedCredentials, TokenCell};
pub use error::{ClientError, ClientResult};
pub use models::{
    Contract, ContractPayload, ContractStatus, OwnerRecord, OwnerRef, PdfGenerated, Permission,
    Role, RolePayload, Sex, Visitor, VisitorPayload, VisitorStatus,
};
pub use permissions::PermissionsClient;
pub use roles::RolesClient;
pub use visitors::VisitorsClient;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
