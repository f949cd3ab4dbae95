pub mod error;
pub mod model;
pub mod validation;

use validation::{rules, ValidationEngine};

/// Builds the standard rule set for registration drafts, in the order the
/// rules must fire: presence, name format, national id, postal code,
/// address length.
pub fn draft_validator() -> ValidationEngine {
    ValidationEngine::new()
        .add_rule(rules::RuleRequiredFields)
        .add_rule(rules::RuleNameFormat)
        .add_rule(rules::RuleNationalIdFormat)
        .add_rule(rules::RulePostalCodeFormat)
        .add_rule(rules::RuleAddressLength)
}
