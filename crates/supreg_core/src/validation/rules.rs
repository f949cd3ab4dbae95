use crate::error::{RegistryError, MAX_ADDRESS_LEN};
use crate::model::SupplierDraft;
use crate::validation::ValidationRule;

/// True when the text is exactly `len` ASCII digits.
fn is_digits(text: &str, len: usize) -> bool {
    text.len() == len && text.bytes().all(|b| b.is_ascii_digit())
}

/// Letters (any Unicode letter, accented included) and spaces only.
/// Empty text does not qualify.
fn is_name(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_alphabetic() || c == ' ')
}

/// The national id format shared by register, fetch and delete:
/// exactly 11 numeric digits.
pub fn is_valid_national_id(text: &str) -> bool {
    is_digits(text, 11)
}

// =========================================================================
// RULE: SUP-001
// "All required fields must be non-empty"
// Required: first_name, national_id, father_name, mother_name, address
// =========================================================================
pub struct RuleRequiredFields;

impl ValidationRule for RuleRequiredFields {
    fn rule_id(&self) -> &'static str { "SUP-001" }

    fn check(&self, draft: &SupplierDraft) -> Result<(), RegistryError> {
        let required: [(&'static str, &str); 5] = [
            ("first_name", &draft.first_name),
            ("national_id", &draft.national_id),
            ("father_name", &draft.father_name),
            ("mother_name", &draft.mother_name),
            ("address", &draft.address),
        ];
        for (field, value) in required {
            if value.is_empty() {
                return Err(RegistryError::MissingRequiredField { field });
            }
        }
        Ok(())
    }
}

// =========================================================================
// RULE: SUP-002
// "Name-like fields contain only letters and spaces"
// last_name is optional and checked only when present.
// =========================================================================
pub struct RuleNameFormat;

impl ValidationRule for RuleNameFormat {
    fn rule_id(&self) -> &'static str { "SUP-002" }

    fn check(&self, draft: &SupplierDraft) -> Result<(), RegistryError> {
        let names: [(&'static str, &str); 3] = [
            ("first_name", &draft.first_name),
            ("father_name", &draft.father_name),
            ("mother_name", &draft.mother_name),
        ];
        for (field, value) in names {
            if !is_name(value) {
                return Err(RegistryError::InvalidNameFormat { field });
            }
        }
        if let Some(last) = draft.last_name_opt() {
            if !is_name(last) {
                return Err(RegistryError::InvalidNameFormat { field: "last_name" });
            }
        }
        Ok(())
    }
}

// =========================================================================
// RULE: SUP-003
// "National id is exactly 11 numeric digits"
// =========================================================================
pub struct RuleNationalIdFormat;

impl ValidationRule for RuleNationalIdFormat {
    fn rule_id(&self) -> &'static str { "SUP-003" }

    fn check(&self, draft: &SupplierDraft) -> Result<(), RegistryError> {
        if !is_valid_national_id(&draft.national_id) {
            return Err(RegistryError::InvalidNationalId);
        }
        Ok(())
    }
}

// =========================================================================
// RULE: SUP-004
// "Postal code, when present, is exactly 8 numeric digits"
// =========================================================================
pub struct RulePostalCodeFormat;

impl ValidationRule for RulePostalCodeFormat {
    fn rule_id(&self) -> &'static str { "SUP-004" }

    fn check(&self, draft: &SupplierDraft) -> Result<(), RegistryError> {
        if let Some(code) = draft.postal_code_opt() {
            if !is_digits(code, 8) {
                return Err(RegistryError::InvalidPostalCode);
            }
        }
        Ok(())
    }
}

// =========================================================================
// RULE: SUP-005
// "Address is at most 40 characters"
// Counted in characters, not bytes, so accented street names are not
// penalized for their encoding.
// =========================================================================
pub struct RuleAddressLength;

impl ValidationRule for RuleAddressLength {
    fn rule_id(&self) -> &'static str { "SUP-005" }

    fn check(&self, draft: &SupplierDraft) -> Result<(), RegistryError> {
        let len = draft.address.chars().count();
        if len > MAX_ADDRESS_LEN {
            return Err(RegistryError::AddressTooLong { len });
        }
        Ok(())
    }
}
