//! Package-name classification.
//!
//! Turns a free-text component description ("64-LQFP (10x10)",
//! "D²PAK (TO-263AB)", "Tranzystor: NPN; ...; TO220") into one canonical
//! package code, or `None` when no known package family is mentioned.
//!
//! # Pipeline
//!
//! 1. [`normalize`]: uppercase and repair the description
//! 2. [`matcher::find`]: first boundary-anchored hit in the [`catalog`]
//! 3. [`matcher::clean`]: spacing and hyphenation of the raw token
//! 4. [`alias::resolve`]: collapse synonyms onto the canonical name
//!
//! All tables are immutable statics built on first use, so classification
//! is safe to call from any number of threads.
//!
//! # Example
//!
//! ```
//! use package_classifier::package::classify;
//!
//! let code = classify("D²PAK (TO-263AB)").unwrap();
//! assert_eq!(code.as_str(), "TO-263AB");
//!
//! assert!(classify("foo").is_none());
//! ```

pub mod alias;
pub mod catalog;
pub mod matcher;
pub mod normalize;

use std::fmt;

use regex::{Regex, RegexBuilder};
use serde::Serialize;

pub use catalog::{PackageFamily, FAMILIES};
pub use normalize::normalize;

/// Compiles a pattern with ASCII-only `\d`, `\s` and `\b`.
///
/// Distributor text is matched byte-wise: a no-break space is not a token
/// boundary and non-ASCII digits are not pin counts.
pub(crate) fn ascii_regex(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern).unicode(false).build()
}

/// A canonical package code such as `TO-220`, `LQFP64` or `SOT23-6`.
///
/// Only produced for a successful match; "no match" is `None`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PackageCode(String);

impl PackageCode {
    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the code, returning the inner string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for PackageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PackageCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for PackageCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for PackageCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl From<PackageCode> for String {
    fn from(code: PackageCode) -> Self {
        code.0
    }
}

/// The catalog family that produced a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FamilyMatch {
    /// Position of the family in [`FAMILIES`] (lower wins).
    pub index: usize,
    /// Family label.
    pub name: &'static str,
    /// Token as matched in the normalised description.
    pub matched: String,
    /// Token after spacing and hyphenation clean-up, before alias resolution.
    pub cleaned: String,
}

/// Every intermediate stage of one classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    /// Description after pre-normalisation.
    pub normalized: String,
    /// Winning catalog family, if any.
    pub family: Option<FamilyMatch>,
    /// Final canonical code.
    pub code: Option<PackageCode>,
}

/// Classifies a description into a canonical package code.
///
/// Total and deterministic: every input yields either a code or `None`.
#[must_use]
pub fn classify(description: &str) -> Option<PackageCode> {
    let normalized = normalize(description);

    let Some(raw) = matcher::find(&normalized) else {
        tracing::trace!(description, "no package family matched");
        return None;
    };

    let cleaned = matcher::clean(raw.token);
    let code = alias::resolve(&cleaned);

    tracing::trace!(
        family = raw.family().name,
        token = raw.token,
        code,
        "package classified"
    );

    Some(PackageCode(code.to_string()))
}

/// Runs the classification pipeline and reports every stage.
///
/// `explain(d).code` always equals `classify(d)`.
#[must_use]
pub fn explain(description: &str) -> Classification {
    let normalized = normalize(description);

    let family = matcher::find(&normalized).map(|raw| FamilyMatch {
        index: raw.family_index,
        name: raw.family().name,
        matched: raw.token.to_string(),
        cleaned: matcher::clean(raw.token),
    });

    let code = family
        .as_ref()
        .map(|found| PackageCode(alias::resolve(&found.cleaned).to_string()));

    Classification {
        normalized,
        family,
        code,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_examples() {
        assert_eq!(classify("64-LQFP (10x10)").unwrap(), "LQFP64");
        assert_eq!(classify("ISOTOP®").unwrap(), "SOT-227");
        assert_eq!(classify("DPAK").unwrap(), "TO-252");
        assert_eq!(classify("DO-204AA").unwrap(), "DO-7");
        assert_eq!(classify("8-SON (A) (2.9x2.8)").unwrap(), "SON8");
    }

    #[test]
    fn classify_no_match() {
        assert_eq!(classify("foo"), None);
        assert_eq!(classify(""), None);
    }

    #[test]
    fn explain_reports_stages() {
        let result = explain("Pamięć; EEPROM; 1,8÷5,5V; DIP-8");
        assert_eq!(result.normalized, "PAMIĘĆ; EEPROM; 1,8÷5,5V; DIP-8");

        let family = result.family.unwrap();
        assert_eq!(family.name, "DIP");
        assert_eq!(family.matched, "DIP-8");
        assert_eq!(family.cleaned, "DIP8");
        assert_eq!(result.code.unwrap(), "DIP8");
    }

    #[test]
    fn explain_shows_alias_step() {
        let result = explain("TRANS NPN 80V 1A SOT-89");
        let family = result.family.unwrap();
        assert_eq!(family.cleaned, "SOT89");
        assert_eq!(result.code.unwrap(), "SOT89-3");
    }

    #[test]
    fn explain_no_match() {
        let result = explain("Tranzystor: NPN; DIP220; bipolarny");
        assert!(result.family.is_none());
        assert!(result.code.is_none());
    }

    #[test]
    fn package_code_conversions() {
        let code = classify("TO92").unwrap();
        assert_eq!(code.to_string(), "TO-92");
        let text: &str = code.as_ref();
        assert_eq!(text, "TO-92");
        assert_eq!(String::from(code.clone()), "TO-92");
        assert_eq!(code.into_string(), "TO-92");
    }

    #[test]
    fn package_code_serialises_as_string() {
        let code = classify("DFN8").unwrap();
        assert_eq!(serde_json::to_string(&code).unwrap(), r#""DFN8""#);
    }
}
