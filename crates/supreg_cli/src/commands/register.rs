use clap::Args;

use supreg_core::model::SupplierDraft;
use supreg_db::SupplierRegistry;

use crate::commands::report;

#[derive(Debug, Args)]
pub struct RegisterArgs {
    /// First name (required; letters and spaces only)
    #[arg(long)]
    pub first_name: String,

    /// Last name (optional)
    #[arg(long, default_value = "")]
    pub last_name: String,

    /// National id: exactly 11 numeric digits, unique
    #[arg(long)]
    pub national_id: String,

    /// Father's name (required)
    #[arg(long)]
    pub father_name: String,

    /// Mother's name (required)
    #[arg(long)]
    pub mother_name: String,

    /// Address (required; at most 40 characters)
    #[arg(long)]
    pub address: String,

    /// Postal code (optional; exactly 8 numeric digits)
    #[arg(long, default_value = "")]
    pub postal_code: String,
}

pub fn execute(registry: &SupplierRegistry, args: RegisterArgs) -> anyhow::Result<()> {
    let draft = SupplierDraft {
        first_name: args.first_name,
        last_name: args.last_name,
        national_id: args.national_id,
        father_name: args.father_name,
        mother_name: args.mother_name,
        address: args.address,
        postal_code: args.postal_code,
    };

    match registry.register(&draft) {
        Ok(id) => {
            println!("✅ Supplier registered successfully.");
            println!("🔑 Id: {id}");
            Ok(())
        }
        Err(err) => report(err),
    }
}
