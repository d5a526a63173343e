// Impact Physics - energy, yield, crater and blast-area estimates
// Display-layer physics over a body's static attributes; every function
// returns a finite, reportable figure for any input

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

// =============================================================================
// CALIBRATION CONSTANTS
// =============================================================================

/// Joules released per kg of TNT.
pub const TNT_ENERGY_PER_KG: f64 = 4.184e6;

/// kg of TNT in one megaton.
pub const KG_PER_MEGATON: f64 = 1e9;

/// Joules in one megaton of TNT.
pub const JOULES_PER_MEGATON: f64 = 4.184e15;

/// Crater scaling-law coefficients. Calibration parameters for the
/// visualization, not physical constants; change them and every reported
/// crater changes.
pub const CRATER_SCALE_M: f64 = 0.04;
pub const CRATER_ENERGY_EXPONENT: f64 = 0.33;

/// Severe-destruction radius coefficient, km per cube-root megaton.
pub const DESTRUCTION_RADIUS_SCALE: f64 = 2.5;

/// Bulk density by composition class (kg/m³).
pub mod density {
    pub const STONY: f64 = 3000.0;
    pub const CARBONACEOUS: f64 = 1700.0;
    pub const METALLIC: f64 = 4000.0;
    /// Mixed average used when the composition is unknown.
    pub const DEFAULT: f64 = 3000.0;
}

// =============================================================================
// DENSITY CLASSIFICATION
// =============================================================================

/// Composition category a body's density estimate is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DensityClass {
    Stony,
    Carbonaceous,
    Metallic,
    Default,
}

impl DensityClass {
    pub fn kg_per_m3(self) -> f64 {
        match self {
            DensityClass::Stony => density::STONY,
            DensityClass::Carbonaceous => density::CARBONACEOUS,
            DensityClass::Metallic => density::METALLIC,
            DensityClass::Default => density::DEFAULT,
        }
    }

    /// Classify from a NeoWs orbit/spectral class string.
    pub fn from_orbit_class(orbit_class: &str) -> Self {
        match orbit_class.to_uppercase().as_str() {
            // NEA orbital classes say nothing about composition.
            "AMO" | "APO" | "ATE" | "IEO" => DensityClass::Default,

            s if s.contains('C') || s.contains('B') || s.contains('D') || s.contains('P') => {
                DensityClass::Carbonaceous
            }
            s if s.contains('S') || s.contains('Q') || s.contains('V') => DensityClass::Stony,
            s if s.contains('M') || s.contains('X') => DensityClass::Metallic,

            _ => DensityClass::Default,
        }
    }
}

// =============================================================================
// IMPACT SUBJECT
// =============================================================================

/// Estimated diameter bounds in kilometers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct DiameterRangeKm {
    pub min: f64,
    pub max: f64,
    pub avg: f64,
}

impl DiameterRangeKm {
    pub fn from_bounds(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            avg: (min + max) / 2.0,
        }
    }
}

/// Static physical attributes the impact figures are computed from.
///
/// The hazard flag is informational only; it never feeds the physics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactSubject {
    pub diameter_km: DiameterRangeKm,
    pub velocity_km_s: f64,
    pub density_class: DensityClass,
    pub is_hazardous: bool,
}

// =============================================================================
// CORE ESTIMATES
// =============================================================================

/// Spherical mass from the average diameter and the class density.
pub fn mass_kg(subject: &ImpactSubject) -> f64 {
    let radius_m = (subject.diameter_km.avg.max(0.0) / 2.0) * 1000.0;
    let volume = (4.0 / 3.0) * PI * radius_m.powi(3);
    volume * subject.density_class.kg_per_m3()
}

/// Kinetic energy at the recorded approach velocity. Missing or zero
/// velocity degrades to zero energy; the panel still renders.
pub fn kinetic_energy_j(subject: &ImpactSubject) -> f64 {
    let velocity_m_s = subject.velocity_km_s.max(0.0) * 1000.0;
    0.5 * mass_kg(subject) * velocity_m_s * velocity_m_s
}

/// Joules to TNT-equivalent megatons.
pub fn tnt_megatons(energy_j: f64) -> f64 {
    (energy_j.max(0.0) / TNT_ENERGY_PER_KG) / KG_PER_MEGATON
}

/// Transient crater diameter in km via the fixed-exponent scaling law.
pub fn crater_diameter_km(megatons: f64) -> f64 {
    CRATER_SCALE_M * (megatons.max(0.0) * JOULES_PER_MEGATON).powf(CRATER_ENERGY_EXPONENT)
        / 1000.0
}

/// Area of severe destruction in km².
pub fn destruction_area_km2(megatons: f64) -> f64 {
    let radius_km = DESTRUCTION_RADIUS_SCALE * megatons.max(0.0).powf(1.0 / 3.0);
    PI * radius_km * radius_km
}

// =============================================================================
// SEVERITY BANDS
// =============================================================================

/// Ordinal impact-scale category. Variant order is ascending severity, so the
/// derived `Ord` matches the yield ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SeverityBand {
    Negligible,
    Minor,
    Moderate,
    Significant,
    Major,
    Severe,
    Catastrophic,
    Continental,
    Global,
    Extinction,
}

impl SeverityBand {
    pub fn as_str(self) -> &'static str {
        match self {
            SeverityBand::Negligible => "negligible",
            SeverityBand::Minor => "minor",
            SeverityBand::Moderate => "moderate",
            SeverityBand::Significant => "significant",
            SeverityBand::Major => "major",
            SeverityBand::Severe => "severe",
            SeverityBand::Catastrophic => "catastrophic",
            SeverityBand::Continental => "continental",
            SeverityBand::Global => "global",
            SeverityBand::Extinction => "extinction",
        }
    }
}

/// Classify a TNT-equivalent yield.
///
/// Evaluated top-down with strict `>=`; the first matching band wins. Keep
/// the ordering: boundary values change band under any other evaluation
/// order.
pub fn severity_band(megatons: f64) -> SeverityBand {
    if megatons >= 100_000.0 {
        SeverityBand::Extinction
    } else if megatons >= 10_000.0 {
        SeverityBand::Global
    } else if megatons >= 1_000.0 {
        SeverityBand::Continental
    } else if megatons >= 100.0 {
        SeverityBand::Catastrophic
    } else if megatons >= 10.0 {
        SeverityBand::Severe
    } else if megatons >= 1.0 {
        SeverityBand::Major
    } else if megatons >= 0.1 {
        SeverityBand::Significant
    } else if megatons >= 0.01 {
        SeverityBand::Moderate
    } else if megatons >= 0.001 {
        SeverityBand::Minor
    } else {
        SeverityBand::Negligible
    }
}

// =============================================================================
// IMPACT ESTIMATE SNAPSHOT
// =============================================================================

/// Derived figures for one subject. Recomputed on demand, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactEstimate {
    pub mass_kg: f64,
    pub kinetic_energy_j: f64,
    pub tnt_megatons: f64,
    pub crater_diameter_km: f64,
    pub destruction_area_km2: f64,
    pub severity: SeverityBand,
}

impl ImpactEstimate {
    pub fn from_subject(subject: &ImpactSubject) -> Self {
        let mass = mass_kg(subject);
        let energy = kinetic_energy_j(subject);
        let megatons = tnt_megatons(energy);
        Self {
            mass_kg: mass,
            kinetic_energy_j: energy,
            tnt_megatons: megatons,
            crater_diameter_km: crater_diameter_km(megatons),
            destruction_area_km2: destruction_area_km2(megatons),
            severity: severity_band(megatons),
        }
    }
}

// =============================================================================
// COMPARATIVE EXPLOSIONS
// =============================================================================

struct ExplosionReference {
    name: &'static str,
    megatons: f64,
}

const TSAR_BOMBA_MT: f64 = 50.0;
const CHICXULUB_MT: f64 = 100_000.0;
const HIROSHIMA_MT: f64 = 0.015;
const KRAKATOA_MT: f64 = 200.0;
/// World annual energy consumption, Mt TNT equivalent.
const WORLD_ENERGY_YEAR_MT: f64 = 157_000.0;

const EXPLOSION_REFERENCES: [ExplosionReference; 10] = [
    ExplosionReference { name: "Tsar Bomba", megatons: TSAR_BOMBA_MT },
    ExplosionReference { name: "Castle Bravo", megatons: 15.0 },
    ExplosionReference { name: "Krakatoa Eruption", megatons: KRAKATOA_MT },
    ExplosionReference { name: "Mt. St. Helens", megatons: 24.0 },
    ExplosionReference { name: "Tunguska Event", megatons: 10.0 },
    ExplosionReference { name: "Chelyabinsk Meteor", megatons: 0.4 },
    ExplosionReference { name: "Hiroshima Bomb", megatons: HIROSHIMA_MT },
    ExplosionReference { name: "Beirut Explosion", megatons: 0.0011 },
    ExplosionReference { name: "Oklahoma City Bombing", megatons: 0.002 },
    ExplosionReference { name: "MOAB (Mother of All Bombs)", megatons: 0.011 },
];

/// Closest historic explosion by order of magnitude, with a relative
/// multiplier. Extreme yields short-circuit to Chicxulub / Tsar Bomba
/// multiples before the table search.
pub fn comparable_explosion(megatons: f64) -> String {
    if !(megatons > 0.0) {
        return "No measurable explosive yield".to_string();
    }

    if megatons >= CHICXULUB_MT {
        return format!(
            "{:.1}x the Chicxulub impact (dinosaur extinction event)",
            megatons / CHICXULUB_MT
        );
    }

    if megatons >= 1000.0 {
        let count = (megatons / TSAR_BOMBA_MT).round() as u64;
        return format!(
            "Equivalent to {} Tsar Bombas (largest nuclear weapon ever tested)",
            count
        );
    }

    let mut closest = &EXPLOSION_REFERENCES[0];
    let mut smallest_diff = (megatons.log10() - closest.megatons.log10()).abs();
    for reference in &EXPLOSION_REFERENCES {
        let diff = (megatons.log10() - reference.megatons.log10()).abs();
        if diff < smallest_diff {
            smallest_diff = diff;
            closest = reference;
        }
    }

    let ratio = megatons / closest.megatons;
    if ratio > 0.9 && ratio < 1.1 {
        format!("Similar to the {} ({} Mt)", closest.name, closest.megatons)
    } else if ratio >= 1.1 {
        format!(
            "{:.1}x more powerful than the {} ({} Mt)",
            ratio, closest.name, closest.megatons
        )
    } else {
        format!(
            "{:.1}x less powerful than the {} ({} Mt)",
            1.0 / ratio,
            closest.name,
            closest.megatons
        )
    }
}

/// Several comparisons at different scales for the info panel.
pub fn scale_comparisons(megatons: f64) -> Vec<String> {
    let mut comparisons = Vec::new();

    if megatons > 10.0 {
        comparisons.push(format!(
            "{:.1}x the Tsar Bomba (largest nuclear weapon ever tested)",
            megatons / TSAR_BOMBA_MT
        ));
    }

    let hiroshima_bombs = megatons / HIROSHIMA_MT;
    if hiroshima_bombs >= 1.0 {
        comparisons.push(format!(
            "{} Hiroshima atomic bombs",
            hiroshima_bombs.round() as u64
        ));
    }

    if megatons > 5.0 {
        if megatons < 30.0 {
            comparisons.push("Similar energy to the Mt. St. Helens eruption (24 Mt)".to_string());
        } else if megatons < 250.0 {
            comparisons
                .push("Similar energy to the Krakatoa volcanic eruption (200 Mt)".to_string());
        } else if megatons < CHICXULUB_MT {
            comparisons.push(format!(
                "{:.1}x the Krakatoa volcanic eruption",
                megatons / KRAKATOA_MT
            ));
        } else {
            comparisons.push(format!(
                "{:.1}x the Chicxulub impact (dinosaur extinction event)",
                megatons / CHICXULUB_MT
            ));
        }
    }

    if megatons > 100.0 {
        let share = megatons / WORLD_ENERGY_YEAR_MT;
        if share < 1.0 {
            comparisons.push(format!(
                "{:.1}% of worldwide annual energy consumption",
                share * 100.0
            ));
        } else {
            comparisons.push(format!(
                "{:.1}x worldwide annual energy consumption",
                share
            ));
        }
    }

    if comparisons.is_empty() {
        comparisons.push(comparable_explosion(megatons));
    }

    comparisons
}

// =============================================================================
// FORMATTING
// =============================================================================

/// Energy with SI prefixes.
pub fn format_energy(joules: f64) -> String {
    if joules >= 1e18 {
        format!("{:.2} EJ", joules / 1e18)
    } else if joules >= 1e15 {
        format!("{:.2} PJ", joules / 1e15)
    } else if joules >= 1e12 {
        format!("{:.2} TJ", joules / 1e12)
    } else if joules >= 1e9 {
        format!("{:.2} GJ", joules / 1e9)
    } else if joules >= 1e6 {
        format!("{:.2} MJ", joules / 1e6)
    } else if joules >= 1e3 {
        format!("{:.2} kJ", joules / 1e3)
    } else {
        format!("{:.2} J", joules)
    }
}

/// TNT yield in the unit that keeps the mantissa readable: megatons above
/// 1 Mt, kilotons above 1 kt, tons below.
pub fn format_tnt(megatons: f64) -> String {
    if megatons >= 1.0 {
        format!("{:.2} Mt TNT", megatons)
    } else if megatons >= 0.001 {
        format!("{:.2} kt TNT", megatons * 1000.0)
    } else {
        format!("{:.2} t TNT", megatons * 1_000_000.0)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn subject(diameter_avg_km: f64, velocity_km_s: f64, class: DensityClass) -> ImpactSubject {
        ImpactSubject {
            diameter_km: DiameterRangeKm {
                min: diameter_avg_km * 0.8,
                max: diameter_avg_km * 1.2,
                avg: diameter_avg_km,
            },
            velocity_km_s,
            density_class: class,
            is_hazardous: false,
        }
    }

    #[test]
    fn test_reference_impact_figures() {
        // 1 km body at 3000 kg/m³ and 20 km/s.
        let s = subject(1.0, 20.0, DensityClass::Stony);
        let mass = mass_kg(&s);
        assert!((mass - 1.571e12).abs() / 1.571e12 < 1e-3, "mass {}", mass);

        let energy = kinetic_energy_j(&s);
        assert!(
            (energy - 3.1416e20).abs() / 3.1416e20 < 1e-3,
            "energy {}",
            energy
        );

        let megatons = tnt_megatons(energy);
        assert!((75_000.0..75_200.0).contains(&megatons), "mt {}", megatons);
        assert_eq!(severity_band(megatons), SeverityBand::Global);
    }

    #[test]
    fn test_estimates_never_negative() {
        let cases = [
            subject(0.0, 0.0, DensityClass::Default),
            subject(-1.0, 5.0, DensityClass::Stony),
            subject(0.5, -3.0, DensityClass::Metallic),
        ];
        for s in &cases {
            let estimate = ImpactEstimate::from_subject(s);
            assert!(estimate.mass_kg >= 0.0);
            assert!(estimate.kinetic_energy_j >= 0.0);
            assert!(estimate.tnt_megatons >= 0.0);
            assert!(estimate.crater_diameter_km >= 0.0);
            assert!(estimate.destruction_area_km2 >= 0.0);
        }
    }

    #[test]
    fn test_missing_velocity_degrades_to_zero() {
        let s = subject(2.0, 0.0, DensityClass::Stony);
        let estimate = ImpactEstimate::from_subject(&s);
        assert!(estimate.mass_kg > 0.0);
        assert_eq!(estimate.kinetic_energy_j, 0.0);
        assert_eq!(estimate.tnt_megatons, 0.0);
        assert_eq!(estimate.severity, SeverityBand::Negligible);
    }

    #[test]
    fn test_severity_boundaries_first_match_wins() {
        assert_eq!(severity_band(100_000.0), SeverityBand::Extinction);
        assert_eq!(severity_band(99_999.9), SeverityBand::Global);
        assert_eq!(severity_band(10_000.0), SeverityBand::Global);
        assert_eq!(severity_band(1_000.0), SeverityBand::Continental);
        assert_eq!(severity_band(100.0), SeverityBand::Catastrophic);
        assert_eq!(severity_band(10.0), SeverityBand::Severe);
        assert_eq!(severity_band(1.0), SeverityBand::Major);
        assert_eq!(severity_band(0.1), SeverityBand::Significant);
        assert_eq!(severity_band(0.01), SeverityBand::Moderate);
        assert_eq!(severity_band(0.001), SeverityBand::Minor);
        assert_eq!(severity_band(0.0009), SeverityBand::Negligible);
    }

    #[test]
    fn test_severity_is_monotonic() {
        let yields = [
            0.0, 0.0005, 0.001, 0.004, 0.01, 0.1, 0.9, 1.0, 9.0, 10.0, 99.0, 100.0, 999.0,
            1_000.0, 9_999.0, 10_000.0, 99_999.0, 100_000.0, 1e7,
        ];
        for pair in yields.windows(2) {
            assert!(
                severity_band(pair[0]) <= severity_band(pair[1]),
                "band regressed between {} and {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_crater_scaling_law() {
        // 1 Mt: 0.04 * (4.184e15)^0.33 / 1000.
        let expected = 0.04 * 4.184e15_f64.powf(0.33) / 1000.0;
        assert!((crater_diameter_km(1.0) - expected).abs() < 1e-9);
        assert!(crater_diameter_km(8.0) > crater_diameter_km(1.0));
    }

    #[test]
    fn test_destruction_area_cube_root_scaling() {
        let one = destruction_area_km2(1.0);
        assert!((one - PI * 6.25).abs() < 1e-9);
        // Radius grows with the cube root, area with its square.
        let eight = destruction_area_km2(8.0);
        assert!((eight / one - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_density_classification() {
        assert_eq!(DensityClass::from_orbit_class("APO"), DensityClass::Default);
        assert_eq!(
            DensityClass::from_orbit_class("C"),
            DensityClass::Carbonaceous
        );
        assert_eq!(DensityClass::from_orbit_class("S"), DensityClass::Stony);
        assert_eq!(DensityClass::from_orbit_class("Q"), DensityClass::Stony);
        assert_eq!(DensityClass::from_orbit_class("M"), DensityClass::Metallic);
        assert_eq!(DensityClass::from_orbit_class("X"), DensityClass::Metallic);
        assert_eq!(
            DensityClass::from_orbit_class("Unknown"),
            DensityClass::Default
        );
    }

    #[test]
    fn test_comparable_explosion_special_cases() {
        assert!(comparable_explosion(200_000.0).contains("Chicxulub"));
        assert!(comparable_explosion(5_000.0).contains("Tsar Bombas"));
        assert!(comparable_explosion(0.0).contains("No measurable"));
    }

    #[test]
    fn test_comparable_explosion_table_search() {
        // 50 Mt is exactly the Tsar Bomba.
        let similar = comparable_explosion(50.0);
        assert!(similar.contains("Similar to the Tsar Bomba"), "{}", similar);

        let bigger = comparable_explosion(70.0);
        assert!(bigger.contains("more powerful"), "{}", bigger);

        let smaller = comparable_explosion(0.0002);
        assert!(smaller.contains("less powerful"), "{}", smaller);
    }

    #[test]
    fn test_scale_comparisons_never_empty() {
        for mt in [0.0001, 0.02, 1.0, 12.0, 300.0, 2e5] {
            assert!(!scale_comparisons(mt).is_empty());
        }
    }

    #[test]
    fn test_format_energy_prefixes() {
        assert_eq!(format_energy(3.1416e20), "314.16 EJ");
        assert_eq!(format_energy(2.5e13), "25.00 TJ");
        assert_eq!(format_energy(999.0), "999.00 J");
    }

    #[test]
    fn test_format_tnt_unit_selection() {
        assert_eq!(format_tnt(2.5), "2.50 Mt TNT");
        assert_eq!(format_tnt(0.5), "500.00 kt TNT");
        // Below a kiloton the figure reads in tons.
        assert_eq!(format_tnt(0.0005), "500.00 t TNT");
    }
}
