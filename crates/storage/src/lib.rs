//! In-memory hospital registry: the OPD queue, ward beds and inventory stock.
//!
//! Nothing here outlives the process. The queue is an ordered list with an
//! auto-incremented identifier that is never handed out twice.

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info};

use shared::{
    domain::{BedSummary, InventoryItem, Patient, PatientId, Ward},
    error::RegistryError,
};

pub const SAMPLE_DEPARTMENTS: [&str; 5] = [
    "Cardiology",
    "Orthopedics",
    "Pediatrics",
    "General Medicine",
    "ENT",
];

#[derive(Debug, Clone)]
pub struct HospitalStore {
    queue: Vec<Patient>,
    wards: Vec<Ward>,
    inventory: Vec<InventoryItem>,
    next_patient_id: i64,
}

impl Default for HospitalStore {
    fn default() -> Self {
        Self::new()
    }
}

impl HospitalStore {
    pub fn new() -> Self {
        Self {
            queue: Vec::new(),
            wards: Vec::new(),
            inventory: Vec::new(),
            next_patient_id: 1,
        }
    }

    /// Store pre-filled with the demo queue, wards and stock levels.
    pub fn with_sample_data(now: DateTime<Utc>) -> Self {
        let queue = [
            ("John Doe", "Cardiology", 15),
            ("Jane Smith", "Orthopedics", 25),
            ("Mike Johnson", "Pediatrics", 10),
        ]
        .into_iter()
        .zip(1..)
        .map(|((name, department, waited), id)| Patient {
            id: PatientId(id),
            name: name.to_string(),
            department: department.to_string(),
            checked_in_at: now - Duration::minutes(waited),
        })
        .collect::<Vec<_>>();

        // Seed capacities are literals that satisfy available <= total.
        let wards = [
            ("General", 50, 15),
            ("ICU", 20, 3),
            ("Emergency", 30, 8),
            ("Pediatric", 25, 12),
        ]
        .into_iter()
        .filter_map(|(name, total, available)| Ward::new(name, total, available).ok())
        .collect();

        let inventory = vec![
            InventoryItem::new("Paracetamol", 1500, "tablets"),
            InventoryItem::new("Bandages", 500, "rolls"),
            InventoryItem::new("Syringes", 2000, "pieces"),
            InventoryItem::new("Surgical Masks", 5000, "pieces"),
        ];

        let next_patient_id = queue.len() as i64 + 1;
        Self {
            queue,
            wards,
            inventory,
            next_patient_id,
        }
    }

    pub fn add_patient(
        &mut self,
        name: &str,
        department: &str,
        now: DateTime<Utc>,
    ) -> Result<PatientId, RegistryError> {
        let name = name.trim();
        let department = department.trim();
        if name.is_empty() {
            return Err(RegistryError::BlankField { field: "name" });
        }
        if department.is_empty() {
            return Err(RegistryError::BlankField {
                field: "department",
            });
        }

        let id = PatientId(self.next_patient_id);
        self.next_patient_id += 1;
        self.queue.push(Patient {
            id,
            name: name.to_string(),
            department: department.to_string(),
            checked_in_at: now,
        });
        info!(
            patient_id = id.0,
            department,
            queue_len = self.queue.len(),
            "patient added to queue"
        );
        Ok(id)
    }

    pub fn remove_patient(&mut self, id: PatientId) -> Result<Patient, RegistryError> {
        let index = self
            .queue
            .iter()
            .position(|patient| patient.id == id)
            .ok_or(RegistryError::PatientNotFound(id))?;
        let removed = self.queue.remove(index);
        info!(
            patient_id = id.0,
            queue_len = self.queue.len(),
            "patient removed from queue"
        );
        Ok(removed)
    }

    pub fn patients(&self) -> &[Patient] {
        &self.queue
    }

    pub fn patient(&self, id: PatientId) -> Option<&Patient> {
        self.queue.iter().find(|patient| patient.id == id)
    }

    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    pub fn next_patient_id(&self) -> PatientId {
        PatientId(self.next_patient_id)
    }

    pub fn search_patients(&self, query: &str) -> Vec<&Patient> {
        self.queue.iter().filter(|p| p.matches(query)).collect()
    }

    pub fn wards(&self) -> &[Ward] {
        &self.wards
    }

    pub fn add_ward(&mut self, ward: Ward) {
        debug!(ward = ward.name(), total = ward.total(), "ward registered");
        self.wards.push(ward);
    }

    pub fn search_wards(&self, query: &str) -> Vec<&Ward> {
        self.wards.iter().filter(|w| w.matches(query)).collect()
    }

    pub fn bed_summary(&self) -> BedSummary {
        self.wards
            .iter()
            .fold(BedSummary::default(), |acc, ward| BedSummary {
                total: acc.total + ward.total(),
                available: acc.available + ward.available(),
            })
    }

    pub fn inventory(&self) -> &[InventoryItem] {
        &self.inventory
    }

    pub fn add_inventory_item(&mut self, item: InventoryItem) {
        debug!(item = %item.name, stock = item.stock, "inventory item registered");
        self.inventory.push(item);
    }

    pub fn search_inventory(&self, query: &str) -> Vec<&InventoryItem> {
        self.inventory.iter().filter(|i| i.matches(query)).collect()
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
