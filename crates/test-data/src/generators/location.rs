//! Location generation.

use crate::config::COUNTRIES;
use crate::script::SqlRow;

/// Generated location ready for the `locations` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedLocation {
    pub name: String,
    pub country: &'static str,
    pub nearest_town: String,
}

impl SqlRow for GeneratedLocation {
    const TABLE: &'static str = "locations";
    const COLUMNS: &'static [&'static str] = &["name", "country", "nearest_town"];

    fn values(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.country.to_string(),
            self.nearest_town.clone(),
        ]
    }
}

/// Generates locations numbered from 1. Fully deterministic.
#[derive(Debug, Clone, Default)]
pub struct LocationGenerator;

impl LocationGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generates location number `i`.
    ///
    /// The country is `COUNTRIES[i % 5]`, so location 1 lands on the second entry.
    pub fn generate(&self, i: usize) -> GeneratedLocation {
        GeneratedLocation {
            name: format!("location{i}"),
            country: COUNTRIES[i % COUNTRIES.len()],
            nearest_town: format!("town{i}"),
        }
    }

    /// Generates locations `1..=count`.
    pub fn generate_batch(&self, count: usize) -> Vec<GeneratedLocation> {
        (1..=count).map(|i| self.generate(i)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_round_robin() {
        let locations = LocationGenerator::new().generate_batch(6);

        let countries: Vec<_> = locations.iter().map(|l| l.country).collect();
        assert_eq!(
            countries,
            ["Kyrgyzstan", "Iceland", "Latvia", "Norway", "Russia", "Kyrgyzstan"]
        );
    }

    #[test]
    fn test_names_follow_index() {
        let location = LocationGenerator::new().generate(7);
        assert_eq!(location.name, "location7");
        assert_eq!(location.nearest_town, "town7");
        assert_eq!(location.values(), ["location7", "Iceland", "town7"]);
    }
}
