use crate::airport::AirportId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

pub type AircraftId = Arc<str>;
pub type AircraftName = Arc<str>;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Aircraft {
    /// Identifier the club calendar uses for this aircraft
    pub id: AircraftId,
    /// Home airport on the rotation reference date
    #[serde(default)]
    pub airport_at_reference: Option<AirportId>,
}

/// Fleet keyed by display name (usually the tail number). Iteration is in name order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster(BTreeMap<AircraftName, Aircraft>);

impl Roster {
    pub fn iter(&self) -> impl Iterator<Item = (&AircraftName, &Aircraft)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
impl Roster {
    pub fn new() -> Roster {
        Roster(BTreeMap::new())
    }

    pub fn insert(&mut self, name: &str, aircraft: Aircraft) {
        self.0.insert(Arc::from(name), aircraft);
    }
}
