// Orbital Parameter Derivation - synthetic but stable orbits from opaque ids
// The upstream catalog rarely carries full elements for small bodies, so the
// engine derives a consistent set from the body id; recomputing from the same
// id always yields the same orbit, with no persisted state

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::orbital_mechanics::{hazard_wobble, numeric_id_component, OrbitalElements, Vec3};
use crate::seeded_random::{seeded_offset, seeded_range};

// =============================================================================
// DERIVATION RANGES
// =============================================================================
// The approximation is tuned through these, not through the derivation logic.

/// Generated eccentricity band. Upper bound stays far below 1 so the radius
/// formula never degenerates.
pub const ECCENTRICITY_MIN: f64 = 0.02;
pub const ECCENTRICITY_MAX: f64 = 0.2;

/// Vertical-wobble coefficient band (asteroid-path inclination).
pub const INCLINATION_WOBBLE_MIN: f64 = -0.15;
pub const INCLINATION_WOBBLE_MAX: f64 = 0.15;

/// Multiplier applied to the Keplerian base period.
pub const PERIOD_SCALE_MIN: f64 = 0.9;
pub const PERIOD_SCALE_MAX: f64 = 1.1;

/// Radial spread around the host's reference distance.
pub const RADIAL_FACTOR_MIN: f64 = 0.7;
pub const RADIAL_FACTOR_MAX: f64 = 1.7;

/// Constant vertical offset band for derived orbits, scene units.
pub const ELEVATION_SPAN: f64 = 6.0;

/// Scatter-placement half-ranges for bodies with no approach record.
pub const SCATTER_SPAN_XZ: f64 = 10.0;
pub const SCATTER_SPAN_Y: f64 = 3.0;

/// Miss distances are far outside the visible scene at true scale; they are
/// multiplied by this and clamped into the visible band below.
pub const APPROACH_AU_SCALE: f64 = 5.0;
pub const APPROACH_SCENE_MIN: f64 = 4.0;
pub const APPROACH_SCENE_MAX: f64 = 12.0;

// =============================================================================
// HOST BODY LOOKUP
// =============================================================================

/// The primary a secondary body conceptually orbits in the simplified model.
///
/// A lookup key, not an owned reference: reference periods and distances come
/// from a fixed table (scene distances on the Earth-orbit = 100 scale).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HostBody {
    Mercury,
    Venus,
    Earth,
    Mars,
    Other,
}

impl HostBody {
    /// Case-insensitive lookup; anything outside the table maps to `Other`.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "mercury" => HostBody::Mercury,
            "venus" => HostBody::Venus,
            "earth" => HostBody::Earth,
            "mars" => HostBody::Mars,
            _ => {
                tracing::debug!(host = name, "unknown host body, using default references");
                HostBody::Other
            }
        }
    }

    /// Reference orbital period in days.
    pub fn reference_period_days(self) -> f64 {
        match self {
            HostBody::Mercury => 88.0,
            HostBody::Venus => 225.0,
            HostBody::Earth => 365.25,
            HostBody::Mars => 687.0,
            HostBody::Other => 1000.0,
        }
    }

    /// Reference orbit distance in scene units.
    pub fn reference_distance(self) -> f64 {
        match self {
            HostBody::Mercury => 40.0,
            HostBody::Venus => 70.0,
            HostBody::Earth => 100.0,
            HostBody::Mars => 150.0,
            HostBody::Other => 100.0,
        }
    }
}

// =============================================================================
// DERIVATION
// =============================================================================

/// What the upstream catalog actually told us about a body's approach.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KnownFacts {
    pub host: HostBody,
    /// Miss distance in AU, when the approach record carried one.
    pub approach_distance_au: Option<f64>,
}

/// Where a body sits in the scene: on a derived orbit, or parked at a seeded
/// fixed point when there is nothing to derive an orbit from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Placement {
    Orbiting(OrbitalElements),
    Scattered(Vec3),
}

impl Placement {
    /// Position at the given elapsed time. Scattered bodies have no time
    /// dependency at all.
    pub fn position_at(&self, elapsed_time: f64) -> Vec3 {
        match self {
            Placement::Orbiting(elements) => elements.asteroid_position(elapsed_time),
            Placement::Scattered(point) => *point,
        }
    }
}

/// Derive a full set of synthetic orbital elements for a body id.
///
/// Each parameter draws from its own suffixed seed, so the elements are a
/// pure function of the id and the known facts: recomputing for the same id
/// is field-for-field identical.
pub fn derive_elements(body_id: &str, facts: &KnownFacts) -> OrbitalElements {
    let host = facts.host;
    let radial_factor = seeded_range(
        &format!("{body_id}radius"),
        RADIAL_FACTOR_MIN,
        RADIAL_FACTOR_MAX,
    );
    let semi_major_axis = host.reference_distance() * radial_factor;

    let eccentricity = seeded_range(
        &format!("{body_id}-ecc"),
        ECCENTRICITY_MIN,
        ECCENTRICITY_MAX,
    );
    let inclination = seeded_range(
        &format!("{body_id}-inc"),
        INCLINATION_WOBBLE_MIN,
        INCLINATION_WOBBLE_MAX,
    );

    // Kepler's third law against the host reference orbit, then the seeded
    // per-body spread.
    let base_period = host.reference_period_days()
        * (semi_major_axis / host.reference_distance()).powf(1.5);
    let period = base_period
        * seeded_range(
            &format!("{body_id}-period"),
            PERIOD_SCALE_MIN,
            PERIOD_SCALE_MAX,
        );

    let phase = seeded_range(&format!("{body_id}-phase"), 0.0, 2.0 * PI);
    let elevation = seeded_offset(&format!("{body_id}elevation"), ELEVATION_SPAN);

    OrbitalElements::new(semi_major_axis, eccentricity, inclination, phase, period)
        .with_base_elevation(elevation)
}

/// Seeded fixed-point placement for bodies with no approach data.
pub fn scatter_position(body_id: &str) -> Vec3 {
    Vec3::new(
        seeded_offset(&format!("{body_id}x"), SCATTER_SPAN_XZ),
        seeded_offset(&format!("{body_id}y"), SCATTER_SPAN_Y),
        seeded_offset(&format!("{body_id}z"), SCATTER_SPAN_XZ),
    )
}

/// Derive the placement for a body: an orbit when approach facts exist, a
/// scatter point otherwise.
pub fn derive_placement(body_id: &str, facts: Option<&KnownFacts>) -> Placement {
    match facts {
        Some(facts) => Placement::Orbiting(derive_elements(body_id, facts)),
        None => Placement::Scattered(scatter_position(body_id)),
    }
}

/// Miss distance in AU mapped into the visible scene band.
///
/// Carried on the body for display; the derived orbit radius comes from the
/// host reference table instead (see DESIGN notes).
pub fn clamped_scene_distance(approach_au: f64) -> f64 {
    (approach_au * APPROACH_AU_SCALE).clamp(APPROACH_SCENE_MIN, APPROACH_SCENE_MAX)
}

// =============================================================================
// CELESTIAL BODY
// =============================================================================

/// A renderable body: identity, derived placement, and host relation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CelestialBody {
    pub id: String,
    pub name: String,
    pub host: HostBody,
    pub placement: Placement,
    pub is_hazardous: bool,
    /// Clamped display distance in scene units, when an approach record
    /// carried a miss distance.
    pub approach_distance_scene: Option<f64>,
}

impl CelestialBody {
    pub fn new(id: impl Into<String>, name: impl Into<String>, facts: Option<KnownFacts>) -> Self {
        let id = id.into();
        let placement = derive_placement(&id, facts.as_ref());
        let host = facts.map(|f| f.host).unwrap_or(HostBody::Other);
        let approach_distance_scene = facts
            .and_then(|f| f.approach_distance_au)
            .map(clamped_scene_distance);
        Self {
            id,
            name: name.into(),
            host,
            placement,
            is_hazardous: false,
            approach_distance_scene,
        }
    }

    pub fn hazardous(mut self, flag: bool) -> Self {
        self.is_hazardous = flag;
        self
    }

    /// Scene position at the given elapsed time, with the cosmetic hazard
    /// wobble layered on orbiting hazardous bodies.
    pub fn position_at(&self, elapsed_time: f64) -> Vec3 {
        let mut pos = self.placement.position_at(elapsed_time);
        if self.is_hazardous {
            if let Placement::Orbiting(_) = self.placement {
                let orbit_radius = (pos.x * pos.x + pos.z * pos.z).sqrt();
                let wobble = hazard_wobble(
                    elapsed_time,
                    numeric_id_component(&self.id),
                    orbit_radius,
                );
                pos.x += wobble;
                pos.z += wobble;
            }
        }
        pos
    }
}

// =============================================================================
// TESTS
// =============================================================================
