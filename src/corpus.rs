//! Built-in search vocabularies for the storefront search boxes.
//!
//! Used by the CLI when no `--corpus` file is given.

pub const CAR_MAKES: &[&str] = &[
    "Acura",
    "Alfa Romeo",
    "Audi",
    "BMW",
    "Cadillac",
    "Chevrolet",
    "Chrysler",
    "Citroën",
    "Dodge",
    "Ferrari",
    "Fiat",
    "Ford",
    "Genesis",
    "GMC",
    "Honda",
    "Hyundai",
    "Infiniti",
    "Jaguar",
    "Jeep",
    "Kia",
    "Lamborghini",
    "Land Rover",
    "Lexus",
    "Lincoln",
    "Mazda",
    "Mercedes-Benz",
    "Mini",
    "Mitsubishi",
    "Nissan",
    "Peugeot",
    "Porsche",
    "Renault",
    "Subaru",
    "Suzuki",
    "Tesla",
    "Toyota",
    "Volkswagen",
    "Volvo",
];

pub const BODY_TYPES: &[&str] = &[
    "Sedan",
    "Hatchback",
    "SUV",
    "Crossover",
    "Coupe",
    "Convertible",
    "Minivan",
    "Pickup",
    "Wagon",
];

pub const FEATURE_TAGS: &[&str] = &[
    "Automatic",
    "Manual",
    "Hybrid",
    "Electric",
    "Diesel",
    "All-wheel drive",
    "Apple CarPlay",
    "Android Auto",
    "Heated seats",
    "Sunroof",
    "Backup camera",
    "Bluetooth",
    "Cruise control",
    "Third-row seating",
];

/// Every built-in label, makes first.
pub fn default_corpus() -> Vec<String> {
    CAR_MAKES
        .iter()
        .chain(BODY_TYPES)
        .chain(FEATURE_TAGS)
        .map(|s| s.to_string())
        .collect()
}
