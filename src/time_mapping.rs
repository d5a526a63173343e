// Time Mapping - wall-clock dates to the elapsed-time scalar the position
// models consume, plus the real-ephemeris collaborator boundary

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use thiserror::Error;

use crate::orbital_mechanics::Vec3;

// =============================================================================
// SCALES
// =============================================================================

pub const MS_PER_DAY: f64 = 86_400_000.0;

/// One astronomical unit in kilometers.
pub const KM_PER_AU: f64 = 149_597_870.7;

/// Scene units per AU; the Earth orbit sits at radius 100.
pub const SCENE_UNITS_PER_AU: f64 = 100.0;

/// Conversion applied to ephemeris output (heliocentric km) to land in scene
/// space.
pub const SCENE_UNITS_PER_KM: f64 = SCENE_UNITS_PER_AU / KM_PER_AU;

// =============================================================================
// ELAPSED TIME
// =============================================================================

/// Fractional days between two instants.
pub fn days_between(epoch: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    (now - epoch).num_milliseconds() as f64 / MS_PER_DAY
}

/// The J2000 reference epoch, 2000-01-01 12:00 UTC.
pub fn j2000_epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap()
}

/// Fractional days since J2000; the elapsed-time input of the simplified
/// planet model.
pub fn days_since_j2000(now: DateTime<Utc>) -> f64 {
    days_between(j2000_epoch(), now)
}

// =============================================================================
// TIME MODES
// =============================================================================

/// How a frame's positions are computed. Selected per call; the two modes are
/// never mixed within a single position computation for one body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeMode {
    /// Mean motion since epoch on circular reference orbits.
    Simplified,
    /// Delegate to the ephemeris collaborator, falling back to `Simplified`
    /// when it fails.
    Ephemeris,
}

#[derive(Debug, Error)]
#[error("ephemeris lookup failed for {body}: {reason}")]
pub struct EphemerisError {
    pub body: String,
    pub reason: String,
}

/// The real-ephemeris collaborator: heliocentric Cartesian km for a named
/// body at a date. Synchronous library computation, treated as a black box.
pub trait EphemerisProvider {
    fn helio_position_km(&self, body: &str, at: DateTime<Utc>) -> Result<[f64; 3], EphemerisError>;
}

// =============================================================================
// REFERENCE PLANETS
// =============================================================================

/// Fixed orbital references for the simplified planet model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferencePlanet {
    pub name: &'static str,
    /// Orbit radius in scene units (Earth = 100).
    pub scene_distance: f64,
    pub orbital_period_days: f64,
}

pub const REFERENCE_PLANETS: [ReferencePlanet; 4] = [
    ReferencePlanet { name: "Mercury", scene_distance: 38.7, orbital_period_days: 88.0 },
    ReferencePlanet { name: "Venus", scene_distance: 72.3, orbital_period_days: 225.0 },
    ReferencePlanet { name: "Earth", scene_distance: 100.0, orbital_period_days: 365.25 },
    ReferencePlanet { name: "Mars", scene_distance: 152.4, orbital_period_days: 687.0 },
];

/// Case-insensitive lookup into the reference table.
pub fn reference_planet(name: &str) -> Option<&'static ReferencePlanet> {
    REFERENCE_PLANETS
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
}

// =============================================================================
// PLANET POSITIONS
// =============================================================================

/// Circular mean-motion position on the reference orbit.
pub fn simplified_planet_position(planet: &ReferencePlanet, at: DateTime<Utc>) -> Vec3 {
    let days = days_since_j2000(at);
    let mean_anomaly_deg = (360.0 * days / planet.orbital_period_days) % 360.0;
    let mean_anomaly = mean_anomaly_deg * PI / 180.0;
    Vec3::new(
        mean_anomaly.cos() * planet.scene_distance,
        0.0,
        mean_anomaly.sin() * planet.scene_distance,
    )
}

/// Planet position in scene units for the requested mode.
///
/// Ephemeris mode converts the collaborator's km output wholesale; if the
/// collaborator is absent or errors, the entire computation falls back to the
/// simplified model rather than blending the two.
pub fn planet_position(
    planet: &ReferencePlanet,
    at: DateTime<Utc>,
    mode: TimeMode,
    provider: Option<&dyn EphemerisProvider>,
) -> Vec3 {
    if mode == TimeMode::Ephemeris {
        if let Some(provider) = provider {
            match provider.helio_position_km(planet.name, at) {
                Ok([x, y, z]) => {
                    return Vec3::new(
                        x * SCENE_UNITS_PER_KM,
                        y * SCENE_UNITS_PER_KM,
                        z * SCENE_UNITS_PER_KM,
                    );
                }
                Err(err) => {
                    tracing::debug!(
                        planet = planet.name,
                        error = %err,
                        "ephemeris unavailable, falling back to mean-motion model"
                    );
                }
            }
        }
    }
    simplified_planet_position(planet, at)
}

// =============================================================================
// TESTS
// =============================================================================
