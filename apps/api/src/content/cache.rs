//! Per-session category cache with calendar-day staleness.
//!
//! Entries are replaced wholesale, never partially mutated, so readers of a
//! cloned snapshot can never observe a torn update.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::category::ContentCategory;
use super::records::ContentRecord;

#[derive(Debug, Clone, Serialize)]
pub struct CacheEntry {
    pub records: Vec<ContentRecord>,
    pub fetched_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
pub struct ContentCache {
    entries: HashMap<ContentCategory, CacheEntry>,
}

impl ContentCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, category: ContentCategory) -> Option<&CacheEntry> {
        self.entries.get(&category)
    }

    /// Replaces the category's entry wholesale.
    pub fn insert(
        &mut self,
        category: ContentCategory,
        records: Vec<ContentRecord>,
        fetched_at: DateTime<Utc>,
    ) {
        self.entries.insert(
            category,
            CacheEntry {
                records,
                fetched_at,
            },
        );
    }

    pub fn clear(&mut self, category: ContentCategory) -> Option<CacheEntry> {
        self.entries.remove(&category)
    }

    /// An entry is fresh while it was fetched within the current UTC
    /// calendar day; crossing midnight forces a refresh.
    pub fn is_fresh(&self, category: ContentCategory, now: DateTime<Utc>) -> bool {
        self.get(category)
            .map(|entry| entry.fetched_at.date_naive() == now.date_naive())
            .unwrap_or(false)
    }

    /// Human-readable relative age of the category's entry.
    pub fn freshness_label(&self, category: ContentCategory, now: DateTime<Utc>) -> String {
        match self.get(category) {
            Some(entry) => relative_label(entry.fetched_at, now),
            None => "Never updated".to_string(),
        }
    }
}

fn relative_label(fetched_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = now.signed_duration_since(fetched_at).num_seconds().max(0);
    if secs < 60 {
        return "Just now".to_string();
    }
    let minutes = secs / 60;
    if minutes < 60 {
        return format!("{minutes} minute{} ago", plural(minutes));
    }
    let hours = minutes / 60;
    if hours < 24 {
        return format!("{hours} hour{} ago", plural(hours));
    }
    let days = hours / 24;
    format!("{days} day{} ago", plural(days))
}

fn plural(n: i64) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}
