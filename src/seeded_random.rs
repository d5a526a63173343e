// Seeded Random - deterministic scalar generation from string keys
// Replaces global RNG state so the same body always renders the same orbit

// =============================================================================
// HASH-BASED SCALAR GENERATION
// =============================================================================

/// Resolution of the normalized output. The hash is folded modulo this value,
/// so distinct seeds collapse onto a 1/1000 grid in `[0, 1)`.
pub const SEED_RESOLUTION: i32 = 1000;

/// Deterministic pseudo-random value in `[0, 1)` derived from a string seed.
///
/// Uses a polynomial rolling hash (`hash = hash * 31 + code_unit`) over the
/// UTF-16 code units of the seed, wrapping at 32-bit signed range, then
/// normalizes `|hash| % 1000 / 1000`. Same seed, same value, on every run and
/// every platform.
///
/// Callers that need several independent values from one logical identity
/// append distinguishing suffixes (`"{id}-ecc"`, `"{id}x"`, ...) rather than
/// advancing any generator state; there is no state to advance.
pub fn seeded_value(seed: &str) -> f64 {
    let mut hash: i32 = 0;
    for unit in seed.encode_utf16() {
        hash = hash.wrapping_mul(31).wrapping_add(i32::from(unit));
    }
    f64::from((hash % SEED_RESOLUTION).abs()) / f64::from(SEED_RESOLUTION)
}

/// Seeded value mapped linearly into `[min, max)`.
pub fn seeded_range(seed: &str, min: f64, max: f64) -> f64 {
    min + seeded_value(seed) * (max - min)
}

/// Seeded value mapped into `[-scale, scale)`, centered on zero.
///
/// The `(v * 2 - 1) * scale` form used for scatter placement and elevation
/// offsets.
pub fn seeded_offset(seed: &str, scale: f64) -> f64 {
    (seeded_value(seed) * 2.0 - 1.0) * scale
}

// =============================================================================
// TESTS
// =============================================================================
