//! List command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::presentation::print_plant_table;

/// Print plants matching the optional filters, newest first.
pub async fn execute(
    ctx: &CliContext,
    search: Option<&str>,
    category: Option<&str>,
) -> Result<usize> {
    let plants = ctx.plants().list(search, category).await?;

    if plants.is_empty() {
        println!("No plants found.");
        println!("Use 'plantstore seed' to load the starter catalog.");
        return Ok(0);
    }

    println!("Found {} plant(s):\n", plants.len());
    print_plant_table(&plants);
    Ok(plants.len())
}
