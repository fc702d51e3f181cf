//! Fix-image-paths command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;

/// Normalize stored image references to be root-relative.
pub async fn execute(ctx: &CliContext) -> Result<u64> {
    let fixed = ctx.plants().normalize_stored_image_refs().await?;
    if fixed == 0 {
        println!("All image paths already start with '/'.");
    } else {
        println!("Fixed {fixed} image path(s).");
    }
    Ok(fixed)
}
