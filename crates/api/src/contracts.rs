//! Contracts API client
//!
//! CRUD against `contratos/` plus the two document operations: server-side
//! PDF generation (single request/response, no polling) and download of the
//! generated bytes to a local path.

use std::path::Path;
use std::sync::Arc;

use crate::client::ApiClient;
use crate::error::ClientResult;
use crate::models::{Contract, ContractPayload, PdfGenerated};

/// Typed client for the contract endpoints.
#[derive(Debug, Clone)]
pub struct ContractsClient {
    http: Arc<ApiClient>,
}

impl ContractsClient {
    /// Create a client over the shared transport.
    pub fn new(http: Arc<ApiClient>) -> Self {
        Self { http }
    }

    /// Fetch all contracts. GET `contratos/`
    pub async fn fetch_all(&self) -> ClientResult<Vec<Contract>> {
        let contracts = self.http.get_list("contratos/").await?;
        tracing::debug!("Fetched {} contracts", contracts.len());
        Ok(contracts)
    }

    /// Create a contract. POST `contratos/`
    pub async fn create(&self, payload: &ContractPayload) -> ClientResult<Contract> {
        let contract: Contract = self.http.post("contratos/", payload).await?;
        tracing::info!("Created contract {}", contract.id);
        Ok(contract)
    }

    /// Update a contract. PUT `contratos/{id}/`
    pub async fn update(&self, id: i64, payload: &ContractPayload) -> ClientResult<Contract> {
        let contract: Contract = self
            .http
            .put(&format!("contratos/{}/", id), payload)
            .await?;
        tracing::info!("Updated contract {}", contract.id);
        Ok(contract)
    }

    /// Delete a contract. DELETE `contratos/{id}/`
    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        self.http.delete(&format!("contratos/{}/", id)).await?;
        tracing::info!("Deleted contract {}", id);
        Ok(())
    }

    /// Generate the contract's PDF on the server.
    /// POST `contratos/{id}/generar_pdf/`
    pub async fn generate_pdf(&self, id: i64) -> ClientResult<PdfGenerated> {
        let generated: PdfGenerated = self
            .http
            .post_empty(&format!("contratos/{}/generar_pdf/", id))
            .await?;
        tracing::info!("Generated PDF for contract {}: {}", id, generated.pdf_url);
        Ok(generated)
    }

    /// Download a generated PDF to the given destination path.
    ///
    /// `url` is the absolute document URL from the contract record or a
    /// fresh [`PdfGenerated`] response.
    pub async fn download_pdf(&self, url: &str, dest: &Path) -> ClientResult<()> {
        let bytes = self.http.get_bytes(url).await?;
        tokio::fs::write(dest, &bytes).await?;
        tracing::info!("Saved PDF to {}", dest.display());
        Ok(())
    }
}
