use std::io::{self, Write};

use clap::Args;

use supreg_db::SupplierRegistry;

use crate::commands::report;

#[derive(Debug, Args)]
pub struct DeleteAllArgs {
    /// Skip the interactive confirmation
    #[arg(long)]
    pub yes: bool,
}

pub fn execute(registry: &SupplierRegistry, args: DeleteAllArgs) -> anyhow::Result<()> {
    // The registry deletes unconditionally; the confirmation lives here,
    // on the caller's side.
    if !args.yes && !confirm("Delete ALL suppliers? This cannot be undone. [y/N] ")? {
        println!("Aborted. Nothing deleted.");
        return Ok(());
    }

    match registry.delete_all() {
        Ok(count) => {
            println!("✅ Deleted {count} supplier(s).");
            Ok(())
        }
        Err(err) => report(err),
    }
}

fn confirm(prompt: &str) -> anyhow::Result<bool> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    let answer = line.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}
