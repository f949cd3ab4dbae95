use clap::Args;

use supreg_db::SupplierRegistry;

use crate::commands::report;

#[derive(Debug, Args)]
pub struct FetchArgs {
    /// National id of the supplier to look up (11 digits)
    #[arg(long)]
    pub national_id: String,

    /// Print the record as JSON instead of plain text
    #[arg(long)]
    pub json: bool,
}

pub fn execute(registry: &SupplierRegistry, args: FetchArgs) -> anyhow::Result<()> {
    let record = match registry.fetch_by_id(&args.national_id) {
        Ok(r) => r,
        Err(err) => return report(err),
    };

    match record {
        Some(record) if args.json => {
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        Some(record) => {
            println!("✅ Supplier found.");
            println!("   Id:          {}", record.id);
            println!(
                "   Name:        {} {}",
                record.first_name,
                record.last_name.as_deref().unwrap_or("")
            );
            println!("   National id: {}", record.national_id);
            println!("   Father:      {}", record.father_name);
            println!("   Mother:      {}", record.mother_name);
            println!("   Address:     {}", record.address);
            if let Some(code) = &record.postal_code {
                println!("   Postal code: {code}");
            }
        }
        None => {
            println!("No supplier found with this national id.");
        }
    }

    Ok(())
}
