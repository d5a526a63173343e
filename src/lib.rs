// Neoscope - Deterministic Orbit & Impact Engine
// Pure, synchronous math core behind the NEO visualization: orbital element
// derivation and Kepler position models, impact-consequence estimates, and
// the NeoWs ingestion boundary. Holds no state; the renderer calls the query
// functions once per body per frame.

pub mod impact_physics;
pub mod neo_data;
pub mod orbit_derivation;
pub mod orbital_mechanics;
pub mod seeded_random;
pub mod time_mapping;

pub use impact_physics::{
    comparable_explosion, format_energy, format_tnt, severity_band, DensityClass, DiameterRangeKm,
    ImpactEstimate, ImpactSubject, SeverityBand,
};
pub use neo_data::{parse_catalog, NeoDataError, NeoRecord};
pub use orbit_derivation::{
    derive_elements, derive_placement, CelestialBody, HostBody, KnownFacts, Placement,
};
pub use orbital_mechanics::{solve_eccentric_anomaly, OrbitalElements, Vec3};
pub use seeded_random::{seeded_range, seeded_value};
pub use time_mapping::{
    days_between, days_since_j2000, j2000_epoch, planet_position, reference_planet,
    EphemerisProvider, TimeMode,
};
