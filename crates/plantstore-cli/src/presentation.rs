//! Table formatting helpers for CLI output.

use plantstore_core::Plant;

/// Truncate a string to fit within a column, appending `...` when cut.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

/// Print a horizontal separator line.
pub fn print_separator(width: usize) {
    println!("{}", "-".repeat(width));
}

/// Print plants as a table.
pub fn print_plant_table(plants: &[Plant]) {
    println!(
        "{:<36} {:<22} {:>8} {:<6} {:<30} Image",
        "ID", "Name", "Price", "Avail", "Categories"
    );
    print_separator(120);

    for plant in plants {
        println!(
            "{:<36} {:<22} {:>8.2} {:<6} {:<30} {}",
            plant.id.as_str(),
            truncate_string(&plant.name, 21),
            plant.price,
            if plant.availability { "yes" } else { "no" },
            truncate_string(&plant.categories.join(", "), 29),
            plant.image_ref.as_ref().map_or("--", |image| image.as_str()),
        );
    }
}
