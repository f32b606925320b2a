//! Shared test utilities and fixtures.

#![allow(dead_code)]

use carlot::Searchable;

// Re-export canonical test utilities from carlot::testing
pub use carlot::testing::{add_ons, compact_car, corpus, no_add_ons, rate_card};

// ============================================================================
// FLEET FIXTURE
// ============================================================================

/// A listing on the lot: searched by make, model and feature tags.
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub make: String,
    pub model: String,
    pub features: Vec<String>,
}

impl Vehicle {
    pub fn new(make: &str, model: &str, features: &[&str]) -> Self {
        Self {
            make: make.to_string(),
            model: model.to_string(),
            features: features.iter().map(|f| f.to_string()).collect(),
        }
    }

    pub fn title(&self) -> String {
        format!("{} {}", self.make, self.model)
    }
}

impl Searchable for Vehicle {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.make.as_str(), self.model.as_str()];
        fields.extend(self.features.iter().map(String::as_str));
        fields
    }
}

pub fn fleet() -> Vec<Vehicle> {
    vec![
        Vehicle::new("Toyota", "Camry", &["Hybrid", "Automatic"]),
        Vehicle::new("Honda", "Civic", &["Manual", "Bluetooth"]),
        Vehicle::new("Nissan", "Leaf", &["Electric", "Automatic"]),
        Vehicle::new("Ford", "Transit", &["Diesel", "Manual"]),
        Vehicle::new("Mazda", "MX-5 Miata", &["Convertible", "Manual"]),
    ]
}

/// Titles of a search result, for readable assertions.
pub fn titles(hits: &[&Vehicle]) -> Vec<String> {
    hits.iter().map(|v| v.title()).collect()
}
