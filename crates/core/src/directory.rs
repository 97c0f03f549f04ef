//! Coach directory
//!
//! In-memory listing catalog browsed by clients. Seeded with fixture data;
//! a real deployment would populate this from a backing service.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A coach as shown in the directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoachListing {
    pub id: Uuid,
    pub name: String,
    pub specialty: String,
    pub client_count: u32,
    pub experience_years: u32,
    pub certifications: Vec<String>,
    pub monthly_price_cents: u32,
    pub blurb: String,
}

impl CoachListing {
    pub fn price_display(&self) -> String {
        format!(
            "${}.{:02}/month",
            self.monthly_price_cents / 100,
            self.monthly_price_cents % 100
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct CoachDirectory {
    listings: Vec<CoachListing>,
}

impl CoachDirectory {
    pub fn new(listings: Vec<CoachListing>) -> Self {
        Self { listings }
    }

    /// The demo catalog. Listing ids are stable so seeded session data can
    /// reference them.
    pub fn seeded() -> Self {
        Self::new(vec![
            CoachListing {
                id: Uuid::from_u128(1),
                name: "Sarah Johnson".to_string(),
                specialty: "Weight Loss & Nutrition".to_string(),
                client_count: 45,
                experience_years: 5,
                certifications: vec![
                    "NASM Certified Personal Trainer".to_string(),
                    "Nutrition Specialist".to_string(),
                ],
                monthly_price_cents: 4999,
                blurb: "Specialized in helping clients achieve sustainable weight loss \
                        through personalized workout and nutrition plans."
                    .to_string(),
            },
            CoachListing {
                id: Uuid::from_u128(2),
                name: "Michael Chen".to_string(),
                specialty: "Strength Training".to_string(),
                client_count: 38,
                experience_years: 7,
                certifications: vec![
                    "ACE Certified Trainer".to_string(),
                    "CrossFit Level 2".to_string(),
                ],
                monthly_price_cents: 5999,
                blurb: "Expert in strength training and functional fitness, helping \
                        clients build muscle and improve overall performance."
                    .to_string(),
            },
            CoachListing {
                id: Uuid::from_u128(3),
                name: "Emma Rodriguez".to_string(),
                specialty: "Yoga & Wellness".to_string(),
                client_count: 52,
                experience_years: 6,
                certifications: vec![
                    "RYT-200 Yoga Instructor".to_string(),
                    "Meditation Coach".to_string(),
                ],
                monthly_price_cents: 4499,
                blurb: "Combines yoga, meditation, and mindfulness to help clients \
                        achieve balance in body and mind."
                    .to_string(),
            },
        ])
    }

    pub fn all(&self) -> &[CoachListing] {
        &self.listings
    }

    pub fn get(&self, id: Uuid) -> Option<&CoachListing> {
        self.listings.iter().find(|l| l.id == id)
    }

    /// Case-insensitive substring match on the specialty.
    pub fn by_specialty(&self, query: &str) -> Vec<&CoachListing> {
        let query = query.to_lowercase();
        self.listings
            .iter()
            .filter(|l| l.specialty.to_lowercase().contains(&query))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_catalog_has_stable_ids() {
        let directory = CoachDirectory::seeded();
        assert_eq!(directory.len(), 3);
        assert_eq!(
            directory.get(Uuid::from_u128(1)).unwrap().name,
            "Sarah Johnson"
        );
    }

    #[test]
    fn specialty_filter_is_case_insensitive() {
        let directory = CoachDirectory::seeded();
        let hits = directory.by_specialty("strength");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Michael Chen");
    }

    #[test]
    fn price_display_formats_cents() {
        let directory = CoachDirectory::seeded();
        assert_eq!(
            directory.get(Uuid::from_u128(1)).unwrap().price_display(),
            "$49.99/month"
        );
    }
}
