//! Coach directory browsing view model

use fitlink_core::{CoachDirectory, CoachListing, Error, Result, SessionStore, UserRole};
use uuid::Uuid;

/// What the payment screen needs to know about a chosen coach.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingCheckout {
    pub coach_id: Uuid,
    pub coach_name: String,
    pub monthly_price_cents: u32,
}

/// Directory screen state: active filters over the listing catalog.
#[derive(Debug, Default)]
pub struct DirectoryBrowser {
    pub specialty_filter: String,
    pub max_price_cents: Option<u32>,
}

impl DirectoryBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Listings matching the active filters. Specialty matching is the
    /// directory's query; the price ceiling is applied on top.
    pub fn listings<'a>(&self, directory: &'a CoachDirectory) -> Vec<&'a CoachListing> {
        let query = self.specialty_filter.trim();
        let mut hits = if query.is_empty() {
            directory.all().iter().collect()
        } else {
            directory.by_specialty(query)
        };
        if let Some(ceiling) = self.max_price_cents {
            hits.retain(|l| l.monthly_price_cents <= ceiling);
        }
        hits
    }

    /// Start a checkout for the given coach. Only clients subscribe; the
    /// guard already redirects everyone else away from this screen, so a
    /// non-client here is an invalid operation.
    pub fn checkout(
        &self,
        directory: &CoachDirectory,
        store: &SessionStore,
        coach_id: Uuid,
    ) -> Result<PendingCheckout> {
        if store.role() != Some(UserRole::Client) {
            return Err(Error::InvalidOperation(
                "Only clients can subscribe to a coach".to_string(),
            ));
        }

        let listing = directory
            .get(coach_id)
            .ok_or_else(|| Error::NotFound(format!("Coach {coach_id}")))?;

        Ok(PendingCheckout {
            coach_id: listing.id,
            coach_name: listing.name.clone(),
            monthly_price_cents: listing.monthly_price_cents,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitlink_core::User;

    fn client_store() -> SessionStore {
        let user = User::new(
            "c@example.com".to_string(),
            UserRole::Client,
            "Jo".to_string(),
        );
        SessionStore::with_state(Some(user), vec![], vec![])
    }

    #[test]
    fn filters_compose() {
        let directory = CoachDirectory::seeded();
        let mut browser = DirectoryBrowser::new();
        browser.max_price_cents = Some(5000);

        assert_eq!(browser.listings(&directory).len(), 2);

        browser.specialty_filter = "yoga".to_string();
        let hits = browser.listings(&directory);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Emma Rodriguez");
    }

    #[test]
    fn checkout_carries_listing_details() {
        let directory = CoachDirectory::seeded();
        let store = client_store();
        let browser = DirectoryBrowser::new();

        let checkout = browser
            .checkout(&directory, &store, Uuid::from_u128(1))
            .unwrap();
        assert_eq!(checkout.coach_name, "Sarah Johnson");
        assert_eq!(checkout.monthly_price_cents, 4999);
    }

    #[test]
    fn checkout_rejects_unknown_coach() {
        let directory = CoachDirectory::seeded();
        let store = client_store();
        let browser = DirectoryBrowser::new();

        let result = browser.checkout(&directory, &store, Uuid::from_u128(99));
        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[test]
    fn checkout_rejects_non_client() {
        let directory = CoachDirectory::seeded();
        let coach = User::new(
            "t@example.com".to_string(),
            UserRole::Coach,
            "T".to_string(),
        );
        let store = SessionStore::with_state(Some(coach), vec![], vec![]);
        let browser = DirectoryBrowser::new();

        let result = browser.checkout(&directory, &store, Uuid::from_u128(1));
        assert!(matches!(result, Err(Error::InvalidOperation(_))));
    }
}
