use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// The persisted entity: one row of the `supplier` table.
// ---------------------------------------------------------------------------
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierRecord {
    /// Store-generated, unique, immutable. Never reused after deletion.
    pub id: i64,
    pub first_name: String,
    pub last_name: Option<String>,
    /// Exactly 11 numeric digits; globally unique; never changes.
    pub national_id: String,
    pub father_name: String,
    pub mother_name: String,
    pub address: String,
    /// Exactly 8 numeric digits when present.
    pub postal_code: Option<String>,
}

// ---------------------------------------------------------------------------
// The raw registration input, exactly as collected from the caller.
// Optional fields arrive as empty strings and are stored as NULL.
// ---------------------------------------------------------------------------
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SupplierDraft {
    pub first_name: String,
    pub last_name: String,
    pub national_id: String,
    pub father_name: String,
    pub mother_name: String,
    pub address: String,
    pub postal_code: String,
}

impl SupplierDraft {
    /// An empty optional field means "absent".
    pub fn last_name_opt(&self) -> Option<&str> {
        none_if_empty(&self.last_name)
    }

    pub fn postal_code_opt(&self) -> Option<&str> {
        none_if_empty(&self.postal_code)
    }
}

fn none_if_empty(s: &str) -> Option<&str> {
    if s.is_empty() { None } else { Some(s) }
}
