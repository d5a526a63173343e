// NEO Catalog Ingestion - NeoWs payload model and typed conversion
// Upstream fields arrive as strings or numbers inconsistently; everything is
// parsed and defaulted exactly once here, so the physics never re-parses

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::impact_physics::{DensityClass, DiameterRangeKm, ImpactSubject};
use crate::orbit_derivation::{CelestialBody, HostBody, KnownFacts};

// =============================================================================
// PAYLOAD TYPES (NeoWs browse subset)
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NeoCatalogPage {
    pub near_earth_objects: Vec<NeoRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NeoRecord {
    pub id: String,
    pub name: String,
    pub estimated_diameter: Option<EstimatedDiameter>,
    pub is_potentially_hazardous_asteroid: Option<bool>,
    pub close_approach_data: Option<Vec<CloseApproach>>,
    pub orbital_data: Option<OrbitalData>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimatedDiameter {
    pub kilometers: Option<DiameterBounds>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiameterBounds {
    pub estimated_diameter_min: f64,
    pub estimated_diameter_max: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloseApproach {
    pub close_approach_date: Option<String>,
    pub relative_velocity: Option<RelativeVelocity>,
    pub miss_distance: Option<MissDistance>,
    pub orbiting_body: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelativeVelocity {
    pub kilometers_per_second: Option<String>,
    pub kilometers_per_hour: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissDistance {
    pub astronomical: Option<String>,
    pub kilometers: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrbitalData {
    pub orbit_class: Option<OrbitClass>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrbitClass {
    pub orbit_class_type: Option<String>,
}

// =============================================================================
// PARSING
// =============================================================================

#[derive(Debug, Error)]
pub enum NeoDataError {
    #[error("failed to parse NEO payload: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parse one browse page of the catalog. Malformed JSON is the only error
/// this crate surfaces; malformed *fields* inside valid JSON degrade to
/// defaults in the conversions below.
pub fn parse_catalog(json: &str) -> Result<Vec<NeoRecord>, NeoDataError> {
    let page: NeoCatalogPage = serde_json::from_str(json)?;
    Ok(page.near_earth_objects)
}

/// Stringified numeric field to f64, defaulting to 0 when absent or
/// unparseable.
fn numeric_or_zero(field: Option<&String>) -> f64 {
    field.and_then(|s| s.parse().ok()).unwrap_or(0.0)
}

// =============================================================================
// CONVERSIONS
// =============================================================================

impl NeoRecord {
    /// First recorded close approach, the one every downstream figure uses.
    pub fn first_approach(&self) -> Option<&CloseApproach> {
        self.close_approach_data.as_ref().and_then(|v| v.first())
    }

    pub fn diameter_km(&self) -> DiameterRangeKm {
        self.estimated_diameter
            .as_ref()
            .and_then(|d| d.kilometers.as_ref())
            .map(|k| {
                DiameterRangeKm::from_bounds(k.estimated_diameter_min, k.estimated_diameter_max)
            })
            .unwrap_or_default()
    }

    /// Approach velocity in km/s, 0 when no approach record or the field is
    /// not numeric.
    pub fn velocity_km_s(&self) -> f64 {
        self.first_approach()
            .and_then(|a| a.relative_velocity.as_ref())
            .map(|v| numeric_or_zero(v.kilometers_per_second.as_ref()))
            .unwrap_or(0.0)
    }

    pub fn is_hazardous(&self) -> bool {
        self.is_potentially_hazardous_asteroid.unwrap_or(false)
    }

    fn orbit_class_type(&self) -> &str {
        self.orbital_data
            .as_ref()
            .and_then(|o| o.orbit_class.as_ref())
            .and_then(|c| c.orbit_class_type.as_deref())
            .unwrap_or("Unknown")
    }

    /// Strictly-typed physical attributes for the impact panel.
    pub fn to_impact_subject(&self) -> ImpactSubject {
        ImpactSubject {
            diameter_km: self.diameter_km(),
            velocity_km_s: self.velocity_km_s(),
            density_class: DensityClass::from_orbit_class(self.orbit_class_type()),
            is_hazardous: self.is_hazardous(),
        }
    }

    /// Renderable body with a derived placement.
    ///
    /// With an approach record the body orbits its host; without one it gets
    /// the seeded scatter placement.
    pub fn to_celestial_body(&self) -> CelestialBody {
        let facts = self.first_approach().map(|approach| {
            let host = HostBody::from_name(approach.orbiting_body.as_deref().unwrap_or("Earth"));
            let astronomical = approach
                .miss_distance
                .as_ref()
                .map(|m| numeric_or_zero(m.astronomical.as_ref()));
            KnownFacts {
                host,
                approach_distance_au: astronomical,
            }
        });
        CelestialBody::new(self.id.clone(), self.name.clone(), facts)
            .hazardous(self.is_hazardous())
    }
}

// =============================================================================
// TESTS
// =============================================================================
