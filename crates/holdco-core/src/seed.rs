// Mock data the site starts with
use crate::models::{Company, Inquiry, Popup, Post};
use serde::Deserialize;
use std::collections::HashSet;
use tracing::{info, warn};

const SEED_JSON: &str = include_str!("../data/seed.json");

/// Raw contents of a seed file, before de-duplication
#[derive(Debug, Clone, Deserialize, Default)]
pub struct SeedData {
    #[serde(default)]
    pub companies: Vec<Company>,
    #[serde(default)]
    pub posts: Vec<Post>,
    #[serde(default)]
    pub inquiries: Vec<Inquiry>,
    #[serde(default)]
    pub popups: Vec<Popup>,
}

impl SeedData {
    /// The data compiled into the binary
    pub fn embedded() -> crate::Result<Self> {
        Self::from_json(SEED_JSON)
    }

    pub fn from_json(json: &str) -> crate::Result<Self> {
        let data: SeedData = serde_json::from_str(json)?;

        info!(
            "Loaded seed data: {} companies, {} posts, {} inquiries, {} popups",
            data.companies.len(),
            data.posts.len(),
            data.inquiries.len(),
            data.popups.len()
        );

        Ok(data)
    }
}

/// Keep the first company for each id
///
/// Runs once, when the store is built from seed data.
pub(crate) fn dedup_companies(companies: Vec<Company>) -> Vec<Company> {
    let mut seen = HashSet::new();
    companies
        .into_iter()
        .filter(|c| {
            let fresh = seen.insert(c.id.clone());
            if !fresh {
                warn!("Dropping duplicate company id {}", c.id);
            }
            fresh
        })
        .collect()
}
