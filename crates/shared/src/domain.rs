use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::RegistryError;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        pub struct $name(pub i64);
    };
}

id_newtype!(PatientId);

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Case-insensitive substring match of `query` against any of `fields`.
/// A blank query matches every record.
pub fn matches_query(fields: &[&str], query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub id: PatientId,
    pub name: String,
    pub department: String,
    pub checked_in_at: DateTime<Utc>,
}

impl Patient {
    pub fn wait_time(&self, now: DateTime<Utc>) -> Duration {
        (now - self.checked_in_at).max(Duration::zero())
    }

    pub fn wait_label(&self, now: DateTime<Utc>) -> String {
        format!("{} mins", self.wait_time(now).num_minutes())
    }

    pub fn matches(&self, query: &str) -> bool {
        matches_query(&[self.name.as_str(), self.department.as_str()], query)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ward {
    name: String,
    total: u32,
    available: u32,
}

impl Ward {
    pub fn new(name: impl Into<String>, total: u32, available: u32) -> Result<Self, RegistryError> {
        let name = name.into();
        if available > total {
            return Err(RegistryError::BedsExceedCapacity {
                ward: name,
                total,
                available,
            });
        }
        Ok(Self {
            name,
            total,
            available,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn available(&self) -> u32 {
        self.available
    }

    pub fn occupied(&self) -> u32 {
        self.total - self.available
    }

    /// Fraction of beds in use, `0.0` for a ward without beds.
    pub fn occupancy_ratio(&self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        self.occupied() as f32 / self.total as f32
    }

    /// At or below a fifth of capacity still free, or nothing free at all.
    pub fn is_critical(&self) -> bool {
        self.available == 0 || self.available * 5 <= self.total
    }

    pub fn matches(&self, query: &str) -> bool {
        matches_query(&[self.name.as_str()], query)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub name: String,
    pub stock: u32,
    pub unit: String,
}

impl InventoryItem {
    pub fn new(name: impl Into<String>, stock: u32, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stock,
            unit: unit.into(),
        }
    }

    pub fn matches(&self, query: &str) -> bool {
        matches_query(&[self.name.as_str(), self.unit.as_str()], query)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BedSummary {
    pub total: u32,
    pub available: u32,
}

impl BedSummary {
    pub fn occupied(&self) -> u32 {
        self.total - self.available
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patient_checked_in(minutes_ago: i64, now: DateTime<Utc>) -> Patient {
        Patient {
            id: PatientId(7),
            name: "Ada Lovelace".to_string(),
            department: "ENT".to_string(),
            checked_in_at: now - Duration::minutes(minutes_ago),
        }
    }

    #[test]
    fn wait_label_counts_whole_minutes() {
        let now = Utc::now();
        assert_eq!(patient_checked_in(0, now).wait_label(now), "0 mins");
        assert_eq!(patient_checked_in(25, now).wait_label(now), "25 mins");
    }

    #[test]
    fn wait_time_never_goes_negative() {
        let now = Utc::now();
        let patient = patient_checked_in(-5, now);
        assert_eq!(patient.wait_time(now), Duration::zero());
    }

    #[test]
    fn ward_rejects_more_available_than_total() {
        let err = Ward::new("ICU", 20, 21).expect_err("over capacity");
        assert!(matches!(
            err,
            RegistryError::BedsExceedCapacity {
                total: 20,
                available: 21,
                ..
            }
        ));
    }

    #[test]
    fn ward_occupancy_and_critical_threshold() {
        let icu = Ward::new("ICU", 20, 3).expect("ward");
        assert_eq!(icu.occupied(), 17);
        assert!((icu.occupancy_ratio() - 0.85).abs() < f32::EPSILON);
        assert!(icu.is_critical());

        let general = Ward::new("General", 50, 15).expect("ward");
        assert!(!general.is_critical());

        let empty = Ward::new("Closed", 0, 0).expect("ward");
        assert_eq!(empty.occupancy_ratio(), 0.0);
        assert!(empty.is_critical());
    }

    #[test]
    fn query_matching_ignores_case_and_surrounding_whitespace() {
        assert!(matches_query(&["Cardiology"], "  cardio "));
        assert!(matches_query(&["Jane Smith", "Orthopedics"], "ORTHO"));
        assert!(!matches_query(&["Jane Smith"], "pediatrics"));
        assert!(matches_query(&["anything"], "   "));
    }

    #[test]
    fn patient_id_displays_with_hash_prefix() {
        assert_eq!(PatientId(12).to_string(), "#12");
    }
}
