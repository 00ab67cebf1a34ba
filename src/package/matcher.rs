//! Catalog matching and token post-processing.
//!
//! [`find`] locates the first package token in a normalised description;
//! [`clean`] reshapes the raw token into the catalog's spelling convention
//! (no spaces or slashes, hyphens only after `TO`, `DO` and `CLIPWATT`).

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use crate::package::ascii_regex;
use crate::package::catalog::{self, PackageFamily, FAMILIES, PACKAGE_GROUP};

/// Compiled catalog alternation plus the capture slot of every family.
struct CatalogMatcher {
    regex: Regex,
    family_slots: Vec<usize>,
}

static CATALOG: LazyLock<CatalogMatcher> = LazyLock::new(|| {
    let regex = RegexBuilder::new(&catalog::combined_pattern())
        .unicode(false)
        .size_limit(64 * (1 << 20))
        .dfa_size_limit(16 * (1 << 20))
        .build()
        .expect("package catalog must compile");

    let family_slots = (0..FAMILIES.len())
        .map(|index| {
            let name = catalog::family_group(index);
            regex
                .capture_names()
                .position(|group| group == Some(name.as_str()))
                .expect("every family has a capture group")
        })
        .collect();

    CatalogMatcher {
        regex,
        family_slots,
    }
});

/// `DIL-14` -> `DIL14`
static LETTER_DASH: LazyLock<Regex> =
    LazyLock::new(|| ascii_regex(r"([A-Z])-([A-Z\d]+)").expect("invalid dash regex"));

/// `TO92` -> `TO-92`
static HYPHENATED_FAMILY: LazyLock<Regex> = LazyLock::new(|| {
    ascii_regex(r"(TO|DO|CLIPWATT)(\d+)").expect("invalid hyphenation regex")
});

/// A package token located in a normalised description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawMatch<'a> {
    /// Index of the winning family in [`FAMILIES`].
    pub family_index: usize,

    /// The matched token, without the surrounding boundary characters.
    pub token: &'a str,

    /// Byte offset of the token within the normalised description.
    pub start: usize,
}

impl RawMatch<'_> {
    /// Returns the catalog entry that produced this match.
    #[must_use]
    pub fn family(&self) -> &'static PackageFamily {
        &FAMILIES[self.family_index]
    }
}

/// Finds the leftmost package token in `normalized`.
///
/// Among families matching at the same position, the one declared first in
/// [`FAMILIES`] wins. Returns `None` when nothing in the catalog matches.
#[must_use]
pub fn find(normalized: &str) -> Option<RawMatch<'_>> {
    let caps = CATALOG.regex.captures(normalized)?;
    let package = caps.name(PACKAGE_GROUP)?;

    let family_index = CATALOG
        .family_slots
        .iter()
        .position(|&slot| caps.get(slot).is_some())?;

    Some(RawMatch {
        family_index,
        token: package.as_str(),
        start: package.start(),
    })
}

/// Reshapes a raw token into its canonical textual form.
///
/// Spaces and slashes are dropped, a hyphen between a letter and the following
/// run is removed, and `TO`, `DO` and `CLIPWATT` regain a hyphen before their
/// digits.
#[must_use]
pub fn clean(token: &str) -> String {
    let token = token.replace(' ', "").replace('/', "");
    let token = LETTER_DASH.replace_all(&token, "${1}${2}");
    let token = HYPHENATED_FAMILY.replace_all(&token, "${1}-${2}");

    token.into_owned()
}
