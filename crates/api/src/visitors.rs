//! Visitors API client
//!
//! Create and update come in two flavours: plain JSON when the photo is an
//! existing remote reference (or absent), multipart when the caller picked
//! a new local file to upload.

use std::path::Path;
use std::sync::Arc;

use reqwest::multipart::{Form, Part};

use crate::client::ApiClient;
use crate::error::ClientResult;
use crate::models::{Visitor, VisitorPayload};

/// Typed client for the visitor endpoints.
#[derive(Debug, Clone)]
pub struct VisitorsClient {
    http: Arc<ApiClient>,
}

impl VisitorsClient {
    /// Create a client over the shared transport.
    pub fn new(http: Arc<ApiClient>) -> Self {
        Self { http }
    }

    /// Fetch all visitors. GET `visitantes/`
    pub async fn fetch_all(&self) -> ClientResult<Vec<Visitor>> {
        let visitors = self.http.get_list("visitantes/").await?;
        tracing::debug!("Fetched {} visitors", visitors.len());
        Ok(visitors)
    }

    /// Create a visitor. POST `visitantes/`
    ///
    /// `photo` is a newly picked local file, sent as multipart; when absent
    /// the payload goes out as JSON (preserving any remote `foto` URL).
    pub async fn create(
        &self,
        payload: &VisitorPayload,
        photo: Option<&Path>,
    ) -> ClientResult<Visitor> {
        let visitor: Visitor = match photo {
            Some(path) => {
                let form = multipart_form(payload, path).await?;
                self.http.post_multipart("visitantes/", form).await?
            }
            None => self.http.post("visitantes/", payload).await?,
        };
        tracing::info!("Created visitor {} ({})", visitor.full_name(), visitor.id);
        Ok(visitor)
    }

    /// Update a visitor. PUT `visitantes/{id}/`
    pub async fn update(
        &self,
        id: i64,
        payload: &VisitorPayload,
        photo: Option<&Path>,
    ) -> ClientResult<Visitor> {
        let path_str = format!("visitantes/{}/", id);
        let visitor: Visitor = match photo {
            Some(path) => {
                let form = multipart_form(payload, path).await?;
                self.http.put_multipart(&path_str, form).await?
            }
            None => self.http.put(&path_str, payload).await?,
        };
        tracing::info!("Updated visitor {} ({})", visitor.full_name(), visitor.id);
        Ok(visitor)
    }

    /// Delete a visitor. DELETE `visitantes/{id}/`
    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        self.http.delete(&format!("visitantes/{}/", id)).await?;
        tracing::info!("Deleted visitor {}", id);
        Ok(())
    }
}

/// Assemble the multipart form: all scalar fields as text parts, the local
/// photo file as a named binary part.
async fn multipart_form(payload: &VisitorPayload, photo: &Path) -> ClientResult<Form> {
    let bytes = tokio::fs::read(photo).await?;
    let file_name = photo
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "foto.jpg".to_string());

    Ok(Form::new()
        .text("nombre", payload.nombre.clone())
        .text("apellido", payload.apellido.clone())
        .text("telefono", payload.telefono.clone())
        .text("estado", payload.estado.code())
        .text("sexo", payload.sexo.code())
        .text("nro_documento", payload.nro_documento.clone())
        .text("fecha_nacimiento", payload.fecha_nacimiento.clone())
        .part("foto", Part::bytes(bytes).file_name(file_name)))
}
