//! Contract records and payloads
//!
//! A contract ties an owner to a unit with a monthly fee. The backend is
//! inconsistent about the owner field: older records carry a plain display
//! string, newer ones a nested owner object. [`OwnerRef`] models both
//! shapes explicitly so render sites never branch on shape.

use serde::{Deserialize, Serialize};

// ============================================================================
// Contract status
// ============================================================================

/// Contract lifecycle status, serialized as its single-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ContractStatus {
    /// Awaiting approval; the default for new contracts.
    #[default]
    #[serde(rename = "P")]
    Pending,
    /// In force.
    #[serde(rename = "A")]
    Active,
    /// Terminated.
    #[serde(rename = "F")]
    Finished,
}

impl ContractStatus {
    /// All statuses, in form-option order.
    pub const ALL: [ContractStatus; 3] = [
        ContractStatus::Pending,
        ContractStatus::Active,
        ContractStatus::Finished,
    ];

    /// Wire code for this status.
    pub fn code(&self) -> &'static str {
        match self {
            ContractStatus::Pending => "P",
            ContractStatus::Active => "A",
            ContractStatus::Finished => "F",
        }
    }

    /// Display label for this status.
    pub fn label(&self) -> &'static str {
        match self {
            ContractStatus::Pending => "Pendiente",
            ContractStatus::Active => "Activo",
            ContractStatus::Finished => "Finalizado",
        }
    }

    /// Parse a wire code, falling back to the default for unknown codes.
    pub fn from_code(code: &str) -> Self {
        match code {
            "A" => ContractStatus::Active,
            "F" => ContractStatus::Finished,
            _ => ContractStatus::Pending,
        }
    }
}

// ============================================================================
// Owner reference
// ============================================================================

/// Nested owner object as returned by newer backend records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnerRecord {
    /// Server-assigned owner id.
    pub id: i64,
    /// First name.
    #[serde(default)]
    pub nombre: Option<String>,
    /// Surname.
    #[serde(default)]
    pub apellido: Option<String>,
}

/// The contract's owner field: plain display string or nested object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OwnerRef {
    /// Nested owner object.
    Record(OwnerRecord),
    /// Denormalized display name.
    Name(String),
}

impl Default for OwnerRef {
    fn default() -> Self {
        OwnerRef::Name(String::new())
    }
}

impl OwnerRef {
    /// Normalize to a single display name.
    ///
    /// Falls back to `"N/A"` when the record carries no name at all.
    pub fn display_name(&self) -> String {
        match self {
            OwnerRef::Name(name) if !name.trim().is_empty() => name.clone(),
            OwnerRef::Name(_) => "N/A".to_string(),
            OwnerRef::Record(record) => {
                let full = format!(
                    "{} {}",
                    record.nombre.as_deref().unwrap_or(""),
                    record.apellido.as_deref().unwrap_or(""),
                );
                let full = full.trim().to_string();
                if full.is_empty() { "N/A".to_string() } else { full }
            }
        }
    }

    /// The raw owner name as stored, without the display placeholder.
    ///
    /// Suitable for prefilling an editable field.
    pub fn raw_name(&self) -> String {
        match self {
            OwnerRef::Name(name) => name.clone(),
            OwnerRef::Record(record) => {
                let full = format!(
                    "{} {}",
                    record.nombre.as_deref().unwrap_or(""),
                    record.apellido.as_deref().unwrap_or(""),
                );
                full.trim().to_string()
            }
        }
    }
}

// ============================================================================
// Contract
// ============================================================================

/// A contract record as returned by the backend.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Contract {
    /// Server-assigned id.
    pub id: i64,
    /// Owner reference (display string or nested object). The backend
    /// serializes an empty owner as an explicit `null`, which neither
    /// untagged variant matches, so null is mapped to the default here.
    #[serde(default, deserialize_with = "owner_ref_or_default")]
    pub propietario: OwnerRef,
    /// Unit code or label.
    #[serde(default)]
    pub unidad: Option<String>,
    /// Contract date (`YYYY-MM-DD`).
    #[serde(default)]
    pub fecha_contrato: Option<String>,
    /// Monthly fee.
    #[serde(default)]
    pub cuota_mensual: Option<f64>,
    /// Purchase cost.
    #[serde(default)]
    pub costo_compra: Option<f64>,
    /// Lifecycle status; defaults to pending when absent.
    #[serde(default)]
    pub estado: ContractStatus,
    /// URL of the generated PDF, once one exists.
    #[serde(default)]
    pub pdf_generado: Option<String>,
}

/// Treat `"propietario": null` the same as an absent key.
fn owner_ref_or_default<'de, D>(deserializer: D) -> Result<OwnerRef, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<OwnerRef>::deserialize(deserializer)?.unwrap_or_default())
}

/// Outbound payload for creating or updating a contract.
///
/// Optional fields left blank in the form are sent as their documented
/// defaults: empty strings for text, `null` for numerics, `"P"` for status.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContractPayload {
    /// Owner display name (denormalized on write).
    pub propietario: String,
    /// Unit code or label.
    pub unidad: String,
    /// Contract date (`YYYY-MM-DD`), empty when unset.
    pub fecha_contrato: String,
    /// Monthly fee.
    pub cuota_mensual: Option<f64>,
    /// Purchase cost.
    pub costo_compra: Option<f64>,
    /// Lifecycle status.
    pub estado: ContractStatus,
}

/// Response of the server-side PDF generation endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct PdfGenerated {
    /// URL of the freshly generated document.
    pub pdf_url: String,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_status_codes_round_trip() {
        for status in ContractStatus::ALL {
            assert_eq!(ContractStatus::from_code(status.code()), status);
        }
    }

    #[test]
    fn test_status_defaults_to_pending() {
        assert_eq!(ContractStatus::default(), ContractStatus::Pending);
        assert_eq!(ContractStatus::from_code("X"), ContractStatus::Pending);
    }

    #[test]
    fn test_owner_ref_string_shape() {
        let owner: OwnerRef = serde_json::from_str(r#""Ana Flores""#).unwrap();
        assert_eq!(owner.display_name(), "Ana Flores");
    }

    #[test]
    fn test_owner_ref_record_shape() {
        let owner: OwnerRef =
            serde_json::from_str(r#"{"id":7,"nombre":"Ana","apellido":"Flores"}"#).unwrap();
        assert_eq!(owner.display_name(), "Ana Flores");
    }

    #[test]
    fn test_owner_ref_empty_renders_placeholder() {
        assert_eq!(OwnerRef::default().display_name(), "N/A");

        let owner = OwnerRef::Record(OwnerRecord {
            id: 3,
            nombre: None,
            apellido: None,
        });
        assert_eq!(owner.display_name(), "N/A");
    }

    #[test]
    fn test_owner_ref_raw_name_keeps_empty() {
        // The placeholder is presentation only; edits start from the
        // stored value.
        assert_eq!(OwnerRef::default().raw_name(), "");
        assert_eq!(OwnerRef::Name("Ana".to_string()).raw_name(), "Ana");

        let owner = OwnerRef::Record(OwnerRecord {
            id: 3,
            nombre: Some("Ana".to_string()),
            apellido: None,
        });
        assert_eq!(owner.raw_name(), "Ana");
    }

    #[test]
    fn test_contract_with_all_optionals_absent() {
        // A minimal record must deserialize and render placeholders.
        let contract: Contract = serde_json::from_str(r#"{"id":5}"#).unwrap();
        assert_eq!(contract.estado, ContractStatus::Pending);
        assert_eq!(contract.cuota_mensual, None);
        assert_eq!(contract.pdf_generado, None);
        assert_eq!(contract.propietario.display_name(), "N/A");
    }

    #[test]
    fn test_contract_with_null_owner_deserializes() {
        // An empty FK comes back as an explicit null, not a missing key.
        let contract: Contract =
            serde_json::from_str(r#"{"id":5,"propietario":null,"unidad":"B-202"}"#).unwrap();
        assert_eq!(contract.propietario.display_name(), "N/A");
        assert_eq!(contract.unidad.as_deref(), Some("B-202"));
    }

    #[test]
    fn test_contract_full_record() {
        let json = r#"{
            "id": 1,
            "propietario": {"id": 9, "nombre": "Luis", "apellido": "Paz"},
            "unidad": "A-101",
            "fecha_contrato": "2024-03-15",
            "cuota_mensual": 350.5,
            "costo_compra": 92000.0,
            "estado": "A",
            "pdf_generado": "http://files.example.com/c1.pdf"
        }"#;
        let contract: Contract = serde_json::from_str(json).unwrap();
        assert_eq!(contract.estado, ContractStatus::Active);
        assert_eq!(contract.propietario.display_name(), "Luis Paz");
        assert_eq!(contract.unidad.as_deref(), Some("A-101"));
    }

    #[test]
    fn test_default_payload_serialization() {
        // The untouched new-contract draft must serialize exactly like this.
        let payload = ContractPayload {
            propietario: String::new(),
            unidad: String::new(),
            fecha_contrato: String::new(),
            cuota_mensual: None,
            costo_compra: None,
            estado: ContractStatus::Pending,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "propietario": "",
                "unidad": "",
                "fecha_contrato": "",
                "cuota_mensual": null,
                "costo_compra": null,
                "estado": "P"
            })
        );
    }
}
