pub mod delete;
pub mod delete_all;
pub mod fetch;
pub mod list;
pub mod register;

use anyhow::anyhow;
use supreg_core::error::RegistryError;

/// Renders a registry error for the user. Validation-class errors are part
/// of normal operation: print and carry on. Store failures are real
/// failures and bubble up.
pub(crate) fn report(err: RegistryError) -> anyhow::Result<()> {
    match err {
        RegistryError::Store(detail) => Err(anyhow!("store failure: {detail}")),
        other => {
            println!("❌ {other}");
            Ok(())
        }
    }
}
