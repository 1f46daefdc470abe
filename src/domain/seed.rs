//! Built-in storefront data
//!
//! The catalog, plan book and the sample reviews ship inside the binary as JSON5.

use serde::Deserialize;

use crate::domain::{
    catalog::{Catalog, Device},
    error::StoreError,
    plan::{Plan, PlanBook},
    review::Review,
};

const STORE: &str = include_str!("../../.config/store.json5");

#[derive(Debug, Clone, Deserialize)]
struct StoreFile {
    devices: Vec<Device>,
    plans: Vec<Plan>,
    #[serde(default)]
    reviews: Vec<Review>,
}

/// Static reference data plus the initial review sequence (most recent first)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreSeed {
    pub catalog: Catalog,
    pub plans: PlanBook,
    pub reviews: Vec<Review>,
}

impl StoreSeed {
    pub fn builtin() -> Result<Self, StoreError> {
        Self::parse(STORE)
    }

    pub fn parse(source: &str) -> Result<Self, StoreError> {
        let file: StoreFile =
            json5::from_str(source).map_err(|e| StoreError::Seed(e.to_string()))?;
        log::debug!(
            "Loaded store data: {} devices, {} plans, {} reviews",
            file.devices.len(),
            file.plans.len(),
            file.reviews.len()
        );
        Ok(Self {
            catalog: Catalog::new(file.devices),
            plans: PlanBook::new(file.plans),
            reviews: file.reviews,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::{catalog::Dpi, plan::PlanTier};

    #[test]
    fn test_builtin_seed() -> color_eyre::Result<()> {
        let seed = StoreSeed::builtin()?;

        assert_eq!(seed.catalog.len(), 8);
        assert_eq!(seed.catalog.names().next(), Some("POCO X3"));
        assert_eq!(seed.plans.len(), 3);
        assert_eq!(seed.plans.get(PlanTier::Brutal)?.local_price, "6500 PKR");
        assert_eq!(seed.reviews.len(), 3);
        assert_eq!(seed.reviews[0].device, "POCO X3");
        Ok(())
    }

    #[test]
    fn test_ios_devices_have_no_dpi() -> color_eyre::Result<()> {
        let seed = StoreSeed::builtin()?;
        let iphone = seed.catalog.lookup("iPhone 12")?;
        assert_eq!(
            iphone.profile.dpi,
            Dpi::NotApplicable("N/A (iOS fixed touch)".to_string())
        );
        assert_eq!(seed.catalog.lookup("Realme 8")?.profile.dpi, Dpi::Value(500));
        Ok(())
    }

    #[test]
    fn test_parse_rejects_bad_rating() {
        let source = r#"{
            devices: [],
            plans: [],
            reviews: [{ id: 1, customerName: "a", email: "a@b", device: "x",
                        rating: 9, reviewText: "t", date: "2024-01-01" }],
        }"#;
        assert!(matches!(StoreSeed::parse(source), Err(StoreError::Seed(_))));
    }
}
