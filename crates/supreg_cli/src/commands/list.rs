use supreg_db::SupplierRegistry;

use crate::commands::report;

pub fn execute(registry: &SupplierRegistry) -> anyhow::Result<()> {
    let ids = match registry.list_ids() {
        Ok(ids) => ids,
        Err(err) => return report(err),
    };

    if ids.is_empty() {
        println!("No suppliers registered.");
    } else {
        println!("📋 Registered supplier ids ({}):", ids.len());
        for id in ids {
            println!("   Id: {id}");
        }
    }

    Ok(())
}
