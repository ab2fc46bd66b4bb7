//! Visitor records and payloads

use serde::{Deserialize, Serialize};

// ============================================================================
// Enumerations
// ============================================================================

/// Visitor status, serialized as its single-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VisitorStatus {
    /// Allowed on the premises; the default for new visitors.
    #[default]
    #[serde(rename = "A")]
    Active,
    /// No longer visiting.
    #[serde(rename = "I")]
    Inactive,
    /// Temporarily barred.
    #[serde(rename = "S")]
    Suspended,
}

impl VisitorStatus {
    /// All statuses, in form-option order.
    pub const ALL: [VisitorStatus; 3] = [
        VisitorStatus::Active,
        VisitorStatus::Inactive,
        VisitorStatus::Suspended,
    ];

    /// Wire code for this status.
    pub fn code(&self) -> &'static str {
        match self {
            VisitorStatus::Active => "A",
            VisitorStatus::Inactive => "I",
            VisitorStatus::Suspended => "S",
        }
    }

    /// Display label for this status.
    pub fn label(&self) -> &'static str {
        match self {
            VisitorStatus::Active => "Activo",
            VisitorStatus::Inactive => "Inactivo",
            VisitorStatus::Suspended => "Suspendido",
        }
    }

    /// Parse a wire code, falling back to the default for unknown codes.
    pub fn from_code(code: &str) -> Self {
        match code {
            "I" => VisitorStatus::Inactive,
            "S" => VisitorStatus::Suspended,
            _ => VisitorStatus::Active,
        }
    }
}

/// Visitor sex, serialized as `M` / `F`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Sex {
    /// Male; the first/neutral form option.
    #[default]
    #[serde(rename = "M")]
    Male,
    /// Female.
    #[serde(rename = "F")]
    Female,
}

impl Sex {
    /// All options, in form order.
    pub const ALL: [Sex; 2] = [Sex::Male, Sex::Female];

    /// Wire code.
    pub fn code(&self) -> &'static str {
        match self {
            Sex::Male => "M",
            Sex::Female => "F",
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Sex::Male => "Masculino",
            Sex::Female => "Femenino",
        }
    }

    /// Parse a wire code, falling back to the default for unknown codes.
    pub fn from_code(code: &str) -> Self {
        match code {
            "F" => Sex::Female,
            _ => Sex::Male,
        }
    }
}

// ============================================================================
// Visitor
// ============================================================================

/// A visitor record as returned by the backend.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Visitor {
    /// Server-assigned id.
    pub id: i64,
    /// First name.
    #[serde(default)]
    pub nombre: String,
    /// Surname.
    #[serde(default)]
    pub apellido: String,
    /// Phone number.
    #[serde(default)]
    pub telefono: Option<String>,
    /// URL of the stored photo, if one was uploaded.
    #[serde(default)]
    pub foto: Option<String>,
    /// Status; defaults to active when absent.
    #[serde(default)]
    pub estado: VisitorStatus,
    /// Sex.
    #[serde(default)]
    pub sexo: Sex,
    /// National identity number; uniqueness is enforced server-side.
    #[serde(default)]
    pub nro_documento: Option<String>,
    /// Birth date (`YYYY-MM-DD`).
    #[serde(default)]
    pub fecha_nacimiento: Option<String>,
    /// Registration timestamp, server-assigned and read-only.
    #[serde(default)]
    pub fecha_registro: Option<String>,
}

impl Visitor {
    /// Full display name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.nombre, self.apellido).trim().to_string()
    }
}

/// Outbound payload for creating or updating a visitor.
///
/// `foto` carries an existing remote URL to preserve it without re-upload;
/// a newly picked local file travels as a multipart part instead and is
/// assembled by the client, not here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisitorPayload {
    /// First name.
    pub nombre: String,
    /// Surname.
    pub apellido: String,
    /// Phone number, empty when unset.
    pub telefono: String,
    /// Existing remote photo URL, if being preserved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foto: Option<String>,
    /// Status.
    pub estado: VisitorStatus,
    /// Sex.
    pub sexo: Sex,
    /// National identity number.
    pub nro_documento: String,
    /// Birth date (`YYYY-MM-DD`), empty when unset.
    pub fecha_nacimiento: String,
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
        for status in VisitorStatus::ALL {
            assert_eq!(VisitorStatus::from_code(status.code()), status);
        }
        for sex in Sex::ALL {
            assert_eq!(Sex::from_code(sex.code()), sex);
        }
    }

    #[test]
    fn test_visitor_with_all_optionals_absent() {
        let visitor: Visitor = serde_json::from_str(r#"{"id":3}"#).unwrap();
        assert_eq!(visitor.estado, VisitorStatus::Active);
        assert_eq!(visitor.sexo, Sex::Male);
        assert_eq!(visitor.telefono, None);
        assert_eq!(visitor.foto, None);
        assert_eq!(visitor.nro_documento, None);
        assert_eq!(visitor.full_name(), "");
    }

    #[test]
    fn test_visitor_full_record() {
        let json = r#"{
            "id": 8,
            "nombre": "María",
            "apellido": "Quispe",
            "telefono": "77712345",
            "foto": "http://files.example.com/v8.jpg",
            "estado": "S",
            "sexo": "F",
            "nro_documento": "6543210",
            "fecha_nacimiento": "1990-07-01",
            "fecha_registro": "2024-01-10T09:30:00Z"
        }"#;
        let visitor: Visitor = serde_json::from_str(json).unwrap();
        assert_eq!(visitor.estado, VisitorStatus::Suspended);
        assert_eq!(visitor.sexo, Sex::Female);
        assert_eq!(visitor.nro_documento.as_deref(), Some("6543210"));
        assert_eq!(visitor.full_name(), "María Quispe");
    }

    #[test]
    fn test_visitor_null_document_deserializes() {
        let visitor: Visitor =
            serde_json::from_str(r#"{"id":3,"nombre":"Ana","nro_documento":null}"#).unwrap();
        assert_eq!(visitor.nro_documento, None);
    }

    #[test]
    fn test_payload_omits_absent_photo() {
        let payload = VisitorPayload {
            nombre: "Ana".to_string(),
            apellido: "Rojas".to_string(),
            telefono: String::new(),
            foto: None,
            estado: VisitorStatus::Active,
            sexo: Sex::Female,
            nro_documento: "1234567".to_string(),
            fecha_nacimiento: String::new(),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "nombre": "Ana",
                "apellido": "Rojas",
                "telefono": "",
                "estado": "A",
                "sexo": "F",
                "nro_documento": "1234567",
                "fecha_nacimiento": ""
            })
        );
    }

    #[test]
    fn test_payload_preserves_remote_photo() {
        let payload = VisitorPayload {
            nombre: "Ana".to_string(),
            apellido: "Rojas".to_string(),
            telefono: String::new(),
            foto: Some("http://files.example.com/v8.jpg".to_string()),
            estado: VisitorStatus::Active,
            sexo: Sex::Female,
            nro_documento: "1234567".to_string(),
            fecha_nacimiento: String::new(),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["foto"], "http://files.example.com/v8.jpg");
    }
}
