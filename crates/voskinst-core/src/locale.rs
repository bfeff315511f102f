//! Language-region locales and locale inference from archive entry names.
//!
//! Model archives published by the Vosk project carry the locale in the name
//! of their top-level directory, e.g. `vosk-model-small-en-us-0.22/`. When the
//! caller does not say which locale an archive is for, the installer feeds
//! every entry name through [`detect_locale`] until one matches.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Pattern for small Vosk model directory names.
///
/// Matched against the whole entry name. Group 1 is the language-region tag.
pub const MODEL_NAME_PATTERN: &str = r"^vosk-model-small-([[:word:]]{2}-[[:word:]]{2})-[0-9].[0-9]+.*$";

#[allow(clippy::expect_used)]
static MODEL_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(MODEL_NAME_PATTERN).expect("model name pattern is valid"));

const ROOT_TAG: &str = "und";

/// Error returned when a string is not a well-formed language tag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid language tag: {0:?}")]
pub struct ParseLocaleError(String);

/// A language with an optional region, e.g. `en-US`.
///
/// The default value is the root locale, which stands for "unspecified".
/// Its language tag is `und`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Locale {
    language: String,
    region: Option<String>,
}

impl Locale {
    /// Returns the root (unspecified) locale.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Parses a BCP-47 style tag, falling back to root when it is ill-formed.
    ///
    /// Only the language and region subtags are kept. A single script subtag
    /// between them is skipped; everything after the region is ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use voskinst_core::Locale;
    ///
    /// assert_eq!(Locale::from_language_tag("en-us").to_string(), "en-US");
    /// assert_eq!(Locale::from_language_tag("zh-Hans-CN").to_string(), "zh-CN");
    /// assert!(Locale::from_language_tag("12-34").is_root());
    /// ```
    #[must_use]
    pub fn from_language_tag(tag: &str) -> Self {
        let mut subtags = tag.split('-');
        let Some(language) = subtags.next().filter(|s| is_language(s)) else {
            return Self::root();
        };
        if language.eq_ignore_ascii_case(ROOT_TAG) {
            return Self::root();
        }

        let mut next = subtags.next();
        if next.is_some_and(is_script) {
            next = subtags.next();
        }
        let region = next.filter(|s| is_region(s)).map(str::to_ascii_uppercase);

        Self {
            language: language.to_ascii_lowercase(),
            region,
        }
    }

    /// Returns `true` for the root (unspecified) locale.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.language.is_empty()
    }

    /// Lower-case language subtag, or `None` for root.
    #[must_use]
    pub fn language(&self) -> Option<&str> {
        (!self.is_root()).then_some(self.language.as_str())
    }

    /// Upper-case region subtag, if any.
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Renders the canonical tag, `und` for root.
    #[must_use]
    pub fn to_language_tag(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return f.write_str(ROOT_TAG);
        }
        f.write_str(&self.language)?;
        if let Some(region) = &self.region {
            write!(f, "-{region}")?;
        }
        Ok(())
    }
}

impl FromStr for Locale {
    type Err = ParseLocaleError;

    /// Strict parse: every subtag must be 1-8 ASCII alphanumerics and the
    /// language subtag must be well-formed. `_` is accepted as a separator.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('_', "-");
        let well_formed = !normalized.is_empty()
            && normalized.split('-').all(|sub| {
                (1..=8).contains(&sub.len()) && sub.bytes().all(|b| b.is_ascii_alphanumeric())
            })
            && normalized.split('-').next().is_some_and(is_language);

        if !well_formed {
            return Err(ParseLocaleError(s.to_string()));
        }
        Ok(Self::from_language_tag(&normalized))
    }
}

/// Infers a locale from a single archive entry name.
///
/// Returns `None` when the name does not look like a small Vosk model path
/// or when the captured tag does not parse to a concrete locale.
///
/// # Examples
///
/// ```
/// use voskinst_core::locale::detect_locale;
///
/// let locale = detect_locale("vosk-model-small-en-us-0.22/README").unwrap();
/// assert_eq!(locale.to_string(), "en-US");
/// assert!(detect_locale("vosk-model-en-us-0.22/README").is_none());
/// ```
#[must_use]
pub fn detect_locale(entry_name: &str) -> Option<Locale> {
    let captures = MODEL_NAME_RE.captures(entry_name)?;
    let locale = Locale::from_language_tag(captures.get(1)?.as_str());
    (!locale.is_root()).then_some(locale)
}

fn is_language(s: &str) -> bool {
    (2..=8).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_alphabetic())
}

fn is_script(s: &str) -> bool {
    s.len() == 4 && s.bytes().all(|b| b.is_ascii_alphabetic())
}

fn is_region(s: &str) -> bool {
    (s.len() == 2 && s.bytes().all(|b| b.is_ascii_alphabetic()))
        || (s.len() == 3 && s.bytes().all(|b| b.is_ascii_digit()))
}
