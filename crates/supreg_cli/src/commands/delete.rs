use clap::Args;

use supreg_db::SupplierRegistry;

use crate::commands::report;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// National id of the supplier to delete (11 digits)
    #[arg(long)]
    pub national_id: String,
}

pub fn execute(registry: &SupplierRegistry, args: DeleteArgs) -> anyhow::Result<()> {
    match registry.delete_by_id(&args.national_id) {
        Ok(0) => {
            println!("No supplier with this national id; nothing deleted.");
            Ok(())
        }
        Ok(_) => {
            println!("✅ Supplier deleted successfully.");
            Ok(())
        }
        Err(err) => report(err),
    }
}
