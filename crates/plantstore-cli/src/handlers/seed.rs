//! Seed command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::seed_data::starter_plants;

/// Insert the starter catalog.
///
/// Skips when the catalog already has plants unless `force` is set.
/// Returns how many plants were inserted.
pub async fn execute(ctx: &CliContext, force: bool) -> Result<usize> {
    let existing = ctx.plants().list(None, None).await?.len();
    if existing > 0 && !force {
        println!("Catalog already has {existing} plant(s); use --force to seed anyway.");
        return Ok(0);
    }

    let inserted = ctx.plants().seed(starter_plants()).await?;
    println!(
        "{inserted} plants seeded into {}",
        ctx.database_path().display()
    );
    Ok(inserted)
}
