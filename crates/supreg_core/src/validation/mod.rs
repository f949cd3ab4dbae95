use crate::error::RegistryError;
use crate::model::SupplierDraft;

pub mod rules;

// The contract every rule must fulfill. A rule checks one concern of the
// draft and reports the first offending field as a tagged error.
pub trait ValidationRule {
    fn rule_id(&self) -> &'static str;
    fn check(&self, draft: &SupplierDraft) -> Result<(), RegistryError>;
}

// The engine that holds the ordered rule registry. Rules run in insertion
// order and the first failure wins; nothing is mutated on failure.
pub struct ValidationEngine {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl ValidationEngine {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn add_rule<R: ValidationRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn run(&self, draft: &SupplierDraft) -> Result<(), RegistryError> {
        for rule in &self.rules {
            rule.check(draft)?;
        }
        Ok(())
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::new()
    }
}
