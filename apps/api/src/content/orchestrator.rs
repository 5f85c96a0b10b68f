//! Content orchestration — profile gate, freshness check, prompt build,
//! generation, parse, cache replacement.
//!
//! One orchestrator exists per active session. Failures at any boundary
//! (profile fetch, generation, parse) are converted into the session-level
//! error slot instead of propagating; a failed load never overwrites
//! previously cached data. Concurrent loads for the same category are not
//! serialized — both run and the last cache write wins.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::llm_client::TextGenerator;
use crate::profile::{ProfileApiClient, UserProfile};

use super::cache::ContentCache;
use super::category::ContentCategory;
use super::parser;
use super::progress::build_progress_records;
use super::prompts::build_prompt;
use super::records::{decode_records, ContentRecord};

pub struct ContentOrchestrator {
    generator: Arc<dyn TextGenerator>,
    profile: Mutex<Option<UserProfile>>,
    cache: Mutex<ContentCache>,
    error: Mutex<Option<String>>,
    loading: AtomicBool,
}

impl ContentOrchestrator {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator,
            profile: Mutex::new(None),
            cache: Mutex::new(ContentCache::new()),
            error: Mutex::new(None),
            loading: AtomicBool::new(false),
        }
    }

    /// Fetches the stored profile. On failure the profile stays `None` and
    /// the session error is set; every content operation then no-ops until
    /// a later fetch succeeds.
    pub async fn load_profile(&self, api: &ProfileApiClient, token: &str) {
        match api.fetch_profile(token).await {
            Ok(profile) => {
                info!(
                    "profile loaded for session: {} skills, {} industries",
                    profile.skills.len(),
                    profile.industries.len()
                );
                *self.profile.lock().await = Some(profile);
                *self.error.lock().await = None;
            }
            Err(e) => {
                warn!("profile load failed: {e}");
                *self.error.lock().await = Some(e.to_string());
            }
        }
    }

    pub async fn profile(&self) -> Option<UserProfile> {
        self.profile.lock().await.clone()
    }

    pub async fn session_error(&self) -> Option<String> {
        self.error.lock().await.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// Snapshot of the category's cached records (empty when absent).
    pub async fn records(&self, category: ContentCategory) -> Vec<ContentRecord> {
        self.cache
            .lock()
            .await
            .get(category)
            .map(|entry| entry.records.clone())
            .unwrap_or_default()
    }

    pub async fn data_freshness(&self, category: ContentCategory) -> String {
        self.cache.lock().await.freshness_label(category, Utc::now())
    }

    /// Loads a category unless a fresh entry already exists. No-op while the
    /// profile is unavailable.
    pub async fn load_tab_data(&self, category: ContentCategory) {
        let Some(profile) = self.profile().await else {
            return; // profile not ready; a session error is already set
        };

        if self.cache.lock().await.is_fresh(category, Utc::now()) {
            return;
        }

        if category.is_locally_computed() {
            let now = Utc::now();
            let records = build_progress_records(&profile, now.date_naive());
            self.cache.lock().await.insert(category, records, now);
            return;
        }

        let prompt = {
            let cache = self.cache.lock().await;
            build_prompt(category, &profile, &cache)
        };
        let Some(prompt) = prompt else {
            return;
        };

        self.generate_and_store(category, &prompt).await;
    }

    /// Unconditionally clears the category's entry, then loads it again —
    /// bypassing the freshness check.
    pub async fn refresh_tab_data(&self, category: ContentCategory) {
        self.cache.lock().await.clear(category);
        self.load_tab_data(category).await;
    }

    async fn generate_and_store(&self, category: ContentCategory, prompt: &str) {
        self.loading.store(true, Ordering::SeqCst);
        let result = self.generator.generate(prompt).await;
        self.loading.store(false, Ordering::SeqCst);

        let text = match result {
            Ok(text) => text,
            Err(e) => {
                warn!("generation failed for {category}: {e}");
                *self.error.lock().await = Some(format!("Failed to generate content: {e}"));
                return;
            }
        };

        let values = match parser::parse_records(&text) {
            Ok(values) => values,
            Err(e) => {
                warn!("parse failed for {category}: {e}");
                *self.error.lock().await =
                    Some(format!("Failed to parse generated content: {e}"));
                return; // previous entry, if any, stays untouched
            }
        };

        let records = decode_records(category, values);
        if records.is_empty() {
            warn!("generated text for {category} decoded to zero records");
            *self.error.lock().await =
                Some("Generated content contained no usable records".to_string());
            return;
        }

        let count = records.len();
        self.cache.lock().await.insert(category, records, Utc::now());
        *self.error.lock().await = None;
        info!("cached {count} {category} records");
    }
}

#[cfg(test)]
impl ContentOrchestrator {
    pub(crate) async fn set_profile(&self, profile: UserProfile) {
        *self.profile.lock().await = Some(profile);
    }

    pub(crate) async fn seed_cache(
        &self,
        category: ContentCategory,
        records: Vec<ContentRecord>,
        fetched_at: chrono::DateTime<Utc>,
    ) {
        self.cache.lock().await.insert(category, records, fetched_at);
    }

    pub(crate) async fn cached_entry(
        &self,
        category: ContentCategory,
    ) -> Option<super::cache::CacheEntry> {
        self.cache.lock().await.get(category).cloned()
    }
}
