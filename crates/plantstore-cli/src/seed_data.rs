//! Starter catalog inserted by `plantstore seed`.

use plantstore_core::{NewPlant, parse_categories};

/// Name, price and categories of each starter plant.
const STARTER_PLANTS: &[(&str, f64, &[&str])] = &[
    ("Money Plant", 99.0, &["Indoor", "Air Purifying", "Home Decor"]),
    ("Snake Plant", 149.0, &["Indoor", "Low Maintenance", "Air Purifying"]),
    ("Peace Lily", 199.0, &["Indoor", "Flowering", "Air Purifying"]),
    ("Jade Plant", 109.0, &["Succulent", "Indoor", "Low Maintenance"]),
    ("Spider Plant", 189.0, &["Indoor", "Air Purifying", "Home Decor"]),
    ("Aloe Vera", 79.0, &["Succulent", "Indoor", "Medicinal"]),
    ("Bamboo Plant", 129.0, &["Indoor", "Outdoor", "Home Decor"]),
    ("ZZ Plant", 159.0, &["Indoor", "Low Maintenance"]),
    ("Pothos", 89.0, &["Indoor", "Trailing", "Air Purifying"]),
    ("Rubber Plant", 249.0, &["Indoor", "Air Purifying"]),
    ("Ficus Bonsai", 299.0, &["Indoor", "Bonsai", "Home Decor"]),
    ("Areca Palm", 199.0, &["Indoor", "Outdoor", "Air Purifying"]),
    ("Boston Fern", 139.0, &["Indoor", "Hanging", "Air Purifying"]),
    ("Philodendron", 119.0, &["Indoor", "Trailing"]),
    ("Dracaena", 179.0, &["Indoor", "Low Maintenance"]),
    ("Syngonium", 99.0, &["Indoor", "Air Purifying"]),
    ("Cactus Mix", 59.0, &["Succulent", "Indoor", "Low Maintenance"]),
    ("Succulent Pack", 199.0, &["Succulent", "Indoor"]),
    ("Rose Bush", 149.0, &["Outdoor", "Flowering"]),
    ("Hibiscus", 129.0, &["Outdoor", "Flowering"]),
    ("Mogra (Jasmine)", 99.0, &["Outdoor", "Flowering", "Fragrant"]),
    ("Ixora", 109.0, &["Outdoor", "Flowering"]),
    ("Periwinkle", 79.0, &["Outdoor", "Flowering", "Ground Cover"]),
    ("Aparajita (Butterfly Pea)", 89.0, &["Outdoor", "Climber", "Flowering"]),
    ("Kaner (Oleander)", 119.0, &["Outdoor", "Flowering"]),
    ("Chrysanthemum", 99.0, &["Outdoor", "Flowering"]),
    ("Marigold", 49.0, &["Outdoor", "Flowering", "Annual"]),
    ("Petunia", 69.0, &["Outdoor", "Flowering", "Hanging"]),
    ("Lavender", 139.0, &["Outdoor", "Fragrant", "Herb"]),
    ("Basil (Tulsi)", 59.0, &["Outdoor", "Herb", "Medicinal"]),
    ("Mint", 49.0, &["Outdoor", "Herb"]),
    ("Lemon Grass", 79.0, &["Outdoor", "Herb"]),
    ("Curry Leaf", 89.0, &["Outdoor", "Herb"]),
    ("Tomato Plant", 59.0, &["Outdoor", "Vegetable"]),
    ("Chilli Plant", 49.0, &["Outdoor", "Vegetable"]),
    ("Eggplant", 69.0, &["Outdoor", "Vegetable"]),
    ("Schefflera", 159.0, &["Indoor", "Air Purifying"]),
    ("Croton", 129.0, &["Indoor", "Colorful Foliage"]),
    ("Dieffenbachia", 149.0, &["Indoor"]),
    ("Aglaonema", 179.0, &["Indoor", "Low Maintenance"]),
    ("Anthurium", 199.0, &["Indoor", "Flowering"]),
    ("African Violet", 99.0, &["Indoor", "Flowering"]),
    ("Orchid", 249.0, &["Indoor", "Flowering"]),
    ("Bird of Paradise", 299.0, &["Indoor", "Outdoor"]),
    ("Yucca", 189.0, &["Indoor", "Low Maintenance"]),
    ("Palm Mix", 219.0, &["Indoor", "Outdoor"]),
    ("Ferns Pack", 159.0, &["Indoor", "Hanging"]),
    ("Calathea", 139.0, &["Indoor", "Air Purifying"]),
    ("Monstera", 229.0, &["Indoor", "Trailing"]),
    ("Fittonia", 89.0, &["Indoor", "Ground Cover"]),
];

/// The starter plants, all available and without images.
pub fn starter_plants() -> Vec<NewPlant> {
    STARTER_PLANTS
        .iter()
        .map(|(name, price, categories)| {
            NewPlant::new(
                *name,
                *price,
                parse_categories(&categories.join(",")),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starter_catalog_is_normalized() {
        let plants = starter_plants();
        assert_eq!(plants.len(), 50);
        for plant in &plants {
            assert!(plant.availability);
            assert!(plant.price >= 0.0);
            assert!(!plant.categories.is_empty());
            assert!(plant.categories.iter().all(|c| *c == c.to_lowercase()));
        }
    }

    #[test]
    fn test_categories_are_lowercased() {
        let plants = starter_plants();
        let money = plants.iter().find(|p| p.name == "Money Plant").unwrap();
        assert_eq!(money.categories, vec!["indoor", "air purifying", "home decor"]);
    }
}
