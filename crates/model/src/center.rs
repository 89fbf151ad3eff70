use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// A digital-center site in the network.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Center {
    pub id: u32,
    pub name: String,
    pub region: String,
    pub status: CenterStatus,
    pub registered_at: DateTime<Local>,
    pub membership: u32,
    pub staff: u32,
}

impl Center {
    pub fn is_active(&self) -> bool {
        matches!(self.status, CenterStatus::Active)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum CenterStatus {
    Active,
    Maintenance,
    Closed,
}

impl CenterStatus {
    pub fn name(&self) -> &'static str {
        match self {
            CenterStatus::Active => "Active",
            CenterStatus::Maintenance => "Under maintenance",
            CenterStatus::Closed => "Closed",
        }
    }
}

impl Default for CenterStatus {
    fn default() -> Self {
        CenterStatus::Active
    }
}
