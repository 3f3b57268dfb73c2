//! Delivery-log domain state.
//!
//! DESIGN
//! ======
//! Records are kept newest first so list rendering and storage round-trips
//! need no sorting. The draft mirrors the form fields as raw strings and is
//! parsed once at submit time.

#[cfg(test)]
#[path = "delivery_test.rs"]
mod delivery_test;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::util::format;

/// Browser-storage key for the persisted delivery log.
pub const LOG_STORAGE_KEY: &str = "sitestock.deliveries";

/// Browser-storage key for the in-progress form draft.
pub const DRAFT_STORAGE_KEY: &str = "sitestock.draft";

/// One recorded delivery of material to the site.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DeliveryRecord {
    pub id: Uuid,
    pub material: String,
    pub quantity: f64,
    /// Unit the quantity is measured in ("bags", "m³", "tons").
    pub unit: String,
    /// Cost per unit in US dollars.
    pub unit_cost: f64,
    #[serde(default)]
    pub notes: Option<String>,
    /// File name of the delivery photo, when one was attached.
    #[serde(default)]
    pub photo_name: Option<String>,
    pub recorded_at: DateTime<Utc>,
}

impl DeliveryRecord {
    /// Total value of this delivery.
    #[must_use]
    pub fn line_total(&self) -> f64 {
        self.quantity * self.unit_cost
    }

    /// Case-insensitive substring match against the material, unit, and
    /// notes. An empty or whitespace-only query matches everything.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.material.to_lowercase().contains(&needle)
            || self.unit.to_lowercase().contains(&needle)
            || self
                .notes
                .as_deref()
                .is_some_and(|notes| notes.to_lowercase().contains(&needle))
    }
}

/// Ordered log of recorded deliveries, newest first.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DeliveryLog {
    pub entries: Vec<DeliveryRecord>,
}

impl DeliveryLog {
    /// Prepends a record so the log stays newest first.
    pub fn record(&mut self, record: DeliveryRecord) {
        self.entries.insert(0, record);
    }

    /// Removes the delivery with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.entries.len();
        self.entries.retain(|record| record.id != id);
        self.entries.len() != before
    }

    /// Records that pass the search query, in log order.
    #[must_use]
    pub fn filtered(&self, query: &str) -> Vec<&DeliveryRecord> {
        self.entries
            .iter()
            .filter(|record| record.matches(query))
            .collect()
    }

    /// Combined value of every delivery in the log.
    #[must_use]
    pub fn total_value(&self) -> f64 {
        self.entries.iter().map(DeliveryRecord::line_total).sum()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// In-progress form state, persisted field-for-field as the user types so a
/// page reload does not lose work.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DeliveryDraft {
    pub material: String,
    pub quantity: String,
    pub unit: String,
    pub unit_cost: String,
    pub notes: String,
}

impl DeliveryDraft {
    /// Whether every field is blank once trimmed.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.material.trim().is_empty()
            && self.quantity.trim().is_empty()
            && self.unit.trim().is_empty()
            && self.unit_cost.trim().is_empty()
            && self.notes.trim().is_empty()
    }

    /// Converts the draft into a permanent record with a fresh ID. Numeric
    /// fields go through the same prefix parse the form pickers produce, and
    /// blank notes collapse to `None`.
    #[must_use]
    pub fn into_record(
        self,
        photo_name: Option<String>,
        recorded_at: DateTime<Utc>,
    ) -> DeliveryRecord {
        let notes = self.notes.trim();
        DeliveryRecord {
            id: Uuid::new_v4(),
            material: self.material.trim().to_owned(),
            quantity: format::parse_decimal(&self.quantity),
            unit: self.unit.trim().to_owned(),
            unit_cost: format::parse_decimal(&self.unit_cost),
            notes: (!notes.is_empty()).then(|| notes.to_owned()),
            photo_name,
            recorded_at,
        }
    }
}
