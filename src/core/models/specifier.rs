//! Glob specifier parsing
//!
//! A glob specifier is a module specifier with one of three prefixes:
//!
//! - `glob:<pattern>` - re-export every match
//! - `glob[files]:<pattern>` - object of module namespaces keyed by path
//! - `glob[filepaths]:<pattern>` - object of `true` keyed by path
//!
//! # Examples
//!
//! ```
//! use globfile::core::models::{GlobSpecifier, VirtualFileKind};
//!
//! let spec = GlobSpecifier::parse("glob[files]:./pages/*.ts").unwrap();
//! assert_eq!(spec.kind(), VirtualFileKind::Files);
//! assert_eq!(spec.pattern(), "./pages/*.ts");
//!
//! assert!(GlobSpecifier::parse("./pages/index.ts").is_none());
//! ```

use super::VirtualFileKind;

/// One of the three recognized specifier prefixes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecifierPrefix {
    /// `glob:`
    Matches,
    /// `glob[files]:`
    Files,
    /// `glob[filepaths]:`
    Filepaths,
}

impl SpecifierPrefix {
    /// All prefixes, in the order they are tried
    pub const ALL: [Self; 3] = [Self::Matches, Self::Files, Self::Filepaths];

    /// The literal prefix text
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Matches => "glob:",
            Self::Files => "glob[files]:",
            Self::Filepaths => "glob[filepaths]:",
        }
    }

    /// The virtual file kind this prefix produces
    #[must_use]
    pub const fn kind(self) -> VirtualFileKind {
        match self {
            Self::Matches => VirtualFileKind::Matches,
            Self::Files => VirtualFileKind::Files,
            Self::Filepaths => VirtualFileKind::Filepaths,
        }
    }

    /// Find the prefix a specifier starts with, if any
    #[must_use]
    pub fn detect(specifier: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|prefix| specifier.starts_with(prefix.as_str()))
    }
}

impl std::fmt::Display for SpecifierPrefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed glob specifier: recognized prefix plus raw pattern
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GlobSpecifier {
    prefix: SpecifierPrefix,
    pattern: String,
}

impl GlobSpecifier {
    /// Parse a specifier. Returns `None` unless it starts with a recognized prefix.
    #[must_use]
    pub fn parse(specifier: &str) -> Option<Self> {
        let prefix = SpecifierPrefix::detect(specifier)?;
        Some(Self {
            prefix,
            pattern: specifier[prefix.as_str().len()..].to_string(),
        })
    }

    /// The recognized prefix
    #[must_use]
    pub const fn prefix(&self) -> SpecifierPrefix {
        self.prefix
    }

    /// The pattern with the prefix stripped, `!` left as-is
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The kind of virtual file this specifier resolves to
    #[must_use]
    pub const fn kind(&self) -> VirtualFileKind {
        self.prefix.kind()
    }

    /// The pattern with every `!` percent-encoded, safe to use as a path segment
    #[must_use]
    pub fn encoded_pattern(&self) -> String {
        encode_negations(&self.pattern)
    }
}

impl std::fmt::Display for GlobSpecifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.prefix, self.pattern)
    }
}

/// Percent-encoded form of `!`
pub const ENCODED_NEGATION: &str = "%21";

/// Replace every `!` with `%21`
#[must_use]
pub fn encode_negations(pattern: &str) -> String {
    pattern.replace('!', ENCODED_NEGATION)
}

/// Replace every `%21` with `!`
#[must_use]
pub fn decode_negations(pattern: &str) -> String {
    pattern.replace(ENCODED_NEGATION, "!")
}
