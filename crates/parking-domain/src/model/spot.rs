//! Parking spot type definitions

use serde::{Deserialize, Serialize};

use super::ParseKindError;

/// Physical size class of a parking spot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpotSize {
    Motorcycle,
    Car,
    Large,
}

impl SpotSize {
    pub const ALL: [SpotSize; 3] = [SpotSize::Motorcycle, SpotSize::Car, SpotSize::Large];

    pub fn label(&self) -> &'static str {
        match self {
            SpotSize::Motorcycle => "motorcycle",
            SpotSize::Car => "car",
            SpotSize::Large => "large",
        }
    }
}

impl std::fmt::Display for SpotSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for SpotSize {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "motorcycle" | "moto" => Ok(SpotSize::Motorcycle),
            "car" => Ok(SpotSize::Car),
            "large" => Ok(SpotSize::Large),
            _ => Err(ParseKindError {
                kind: "spot size",
                value: s.to_string(),
            }),
        }
    }
}

/// Position of a spot within its facility
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpotId(pub usize);

impl std::fmt::Display for SpotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single parking spot. Spots are created by, and live inside, a `Facility`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Spot {
    id: SpotId,
    size: SpotSize,
    occupied: bool,
}

impl Spot {
    pub(crate) fn new(id: SpotId, size: SpotSize) -> Self {
        Self {
            id,
            size,
            occupied: false,
        }
    }

    pub fn id(&self) -> SpotId {
        self.id
    }

    pub fn size(&self) -> SpotSize {
        self.size
    }

    pub fn is_occupied(&self) -> bool {
        self.occupied
    }

    /// Free -> Occupied. There is no way back.
    pub(crate) fn occupy(&mut self) {
        self.occupied = true;
    }
}
