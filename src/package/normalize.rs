//! Pre-normalisation of free-text descriptions.
//!
//! Supplier titles spell the same package in many ways ("64-LQFP",
//! "24 ld QFN", "DIP 6", "SOP08"). The rewrites below bring them into the
//! uppercase, family-then-count shape the catalog expects. Each step rewrites
//! every occurrence and runs unconditionally, in order.

use std::sync::LazyLock;

use regex::Regex;

use crate::package::ascii_regex;

/// `24 LD QFN` -> `24-QFN`
static LEAD_COUNT_UNIT: LazyLock<Regex> =
    LazyLock::new(|| ascii_regex(r"(\d+) LD ([A-Z]+)").expect("invalid lead-count regex"));

/// `64-LQFP` -> `LQFP64`
static COUNT_FIRST: LazyLock<Regex> = LazyLock::new(|| {
    ascii_regex(r"(\d{1,})-\s?([2A-Z]{3,})").expect("invalid count-swap regex")
});

/// `DIP 6` -> `DIP-6`
static SPACED_COUNT: LazyLock<Regex> = LazyLock::new(|| {
    ascii_regex(r"(\b(DIP|ZIP))\s([1-9]\d?)").expect("invalid spaced-count regex")
});

/// `SOP08` -> `SOP8`
static LEADING_ZERO: LazyLock<Regex> = LazyLock::new(|| {
    ascii_regex(r"([A-Z]{3,})0(\d)").expect("invalid leading-zero regex")
});

/// `TO218AB-5PIN` -> `TO218AB-5 PIN`
static GLUED_PIN: LazyLock<Regex> =
    LazyLock::new(|| ascii_regex(r"(\d)PIN").expect("invalid pin-suffix regex"));

/// Rewrites a raw description into the canonical working form.
///
/// Never fails; the empty string normalises to the empty string.
///
/// # Examples
///
/// ```
/// use package_classifier::package::normalize::normalize;
///
/// assert_eq!(normalize("64-LQFP (10x10)"), "LQFP64 (10X10)");
/// assert_eq!(normalize("Transoptor DIP 6"), "TRANSOPTOR DIP-6");
/// ```
#[must_use]
pub fn normalize(description: &str) -> String {
    let upper = description.to_uppercase();

    // decorative marks would otherwise glue onto the token ("ISOTOP®")
    let desc = upper.replace('®', " ");

    // TO220-ISO and TO220ISO are the same package
    let desc = desc.replace("-ISO", "ISO");

    let desc = LEAD_COUNT_UNIT.replace_all(&desc, "${1}-${2}");
    let desc = COUNT_FIRST.replace_all(&desc, "${2}${1}");
    let desc = SPACED_COUNT.replace_all(&desc, "${1}-${3}");
    let desc = LEADING_ZERO.replace_all(&desc, "${1}${2}");
    let desc = GLUED_PIN.replace_all(&desc, "${1} PIN");

    desc.into_owned()
}
