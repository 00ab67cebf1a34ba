//! Canonical spellings for equivalent package names.
//!
//! The table is applied exactly once to a cleaned token. No canonical value
//! is itself a key, so resolving an already-canonical name is a no-op.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Cleaned token -> canonical package name.
pub const ALIASES: &[(&str, &str)] = &[
    // DO-204 registrations and their common names
    ("DO-204AA", "DO-7"),
    ("DO-204AH", "DO-35"),
    ("SOD27", "DO-35"),
    ("DO-204AL", "DO-41"),
    ("SOD66", "DO-41"),
    // Zener diodes in SC-90
    ("SC90", "SOD323F"),
    // small-outline transistors
    ("SOT23", "SOT23-3"),
    ("SOT323", "SOT23-3"),
    ("TO-236AA", "SOT23-3"),
    ("SC59A", "SOT23-3"),
    ("SOT353", "SOT23-5"),
    ("SOT363", "SOT23-6"),
    ("SOT28", "SOT23-8"),
    ("TSOT5", "TSOT23-5"),
    ("SC70-3", "SOT23-3"),
    ("SC70-5", "SOT23-5"),
    ("SC70-6", "SOT23-6"),
    ("SC89", "SOT490"),
    ("SOT416FL", "SOT490"),
    ("EMT3F", "SOT490"),
    ("TO-253", "SOT143"),
    ("SMQ", "SOT24"),
    // TO-220 with the tab encased in plastic
    ("SOT186", "TO-220F"),
    ("SC67", "TO-220F"),
    ("SOT82", "TO-220"),
    // ISOTOP
    ("ISOTOP", "SOT-227"),
    ("SOT227", "SOT-227"),
    ("SOT227-4", "SOT-227"),
    ("SOT227B", "SOT-227B"),
    ("T63", "SOT-23"),
    // SOT89-4 is the same body seen from above, tab counted as a lead
    ("SOT89", "SOT89-3"),
    ("SOT89-4", "SOT89-3"),
    ("SC73", "SOT223"),
    ("TO-261AA", "SOT223"),
    ("SM8", "SOT223-8"),
    // DPAK family
    ("DPAK", "TO-252"),
    ("TO-252AA", "TO-252"),
    ("DDPAK", "TO-263"),
    ("DDPAK3", "TO-263"),
    ("DDPAK5", "TO-263"),
    ("D2PAK", "TO-263"),
    ("I2PAK", "TO-262"),
    // TO-3P is the TO-247 body
    ("TO-3", "TO-247"),
    ("TO-3P", "TO-247"),
    ("SOT429", "TO-247"),
    ("SOT93", "TO-218"),
    // SC-75 / SOT-523
    ("SOT523", "SOT416"),
    ("SC75", "SOT416"),
    ("SC75A", "SOT416"),
    ("SMV", "SOT25"),
    ("SM6", "SOT26"),
    ("SC74", "SOT457"),
    ("TOP3D", "SOT399"),
    ("SMPC", "TO-277A"),
    // MELF
    ("MINIMELF", "MiniMELF"),
    ("MICROMELF", "MicroMELF"),
    ("MMA", "MiniMELF"),
    ("MMB", "MELF"),
    ("MMU", "MicroMELF"),
    // Pentawatt
    ("PENTAWATTV", "PENTAWATT-V"),
    ("TO-220-5", "PENTAWATT"),
    ("TO-220ISO", "TO-220 Full-Pak"),
    ("TO-206-AA", "TO-18"),
    ("TO-218AB5", "TO-218AB-5"),
    ("CB429", "DO-201AD"),
];

static ALIAS_MAP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| ALIASES.iter().copied().collect());

/// Returns the canonical name for `token`, if it is a known alias.
#[must_use]
pub fn canonical(token: &str) -> Option<&'static str> {
    ALIAS_MAP.get(token).copied()
}

/// Resolves `token` through the alias table, leaving unknown tokens unchanged.
///
/// # Examples
///
/// ```
/// use package_classifier::package::alias::resolve;
///
/// assert_eq!(resolve("DPAK"), "TO-252");
/// assert_eq!(resolve("TO-252"), "TO-252");
/// assert_eq!(resolve("LQFP64"), "LQFP64");
/// ```
#[must_use]
pub fn resolve(token: &str) -> &str {
    canonical(token).unwrap_or(token)
}
