// src/core/naming.rs
use std::fmt;

use regex::Regex;

use crate::error::ScanError;

/// Which variant of a convention's pattern to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strictness {
    Lenient,
    Strict,
}

impl fmt::Display for Strictness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lenient => write!(f, "lenient"),
            Self::Strict => write!(f, "strict"),
        }
    }
}

/// A named naming convention and its two anchored pattern expressions.
///
/// The expressions are regex source strings wrapped in `^...$`, so a match
/// is always a whole-name match. Dot-separated extension segments are part
/// of each expression; the lenient variants accept a wider character class
/// there than in the base name.
#[derive(Debug)]
pub struct Convention {
    pub name: &'static str,
    lenient: &'static str,
    strict: &'static str,
}

/// Every convention the tool knows, in the order help text lists them.
///
/// The lenient snakecase and kebabcase classes are identical: each treats
/// `_` and `-` interchangeably and tolerates any case.
pub const CONVENTIONS: [Convention; 3] = [
    Convention {
        name: "camelcase",
        lenient: r"^[a-z][a-z0-9]*([A-Z][a-zA-Z0-9]*)+(\.[a-zA-Z0-9_-]+)*$",
        strict: r"^[a-z]+([0-9]*[A-Z][a-z0-9]+)+(\.[a-z0-9]+)*$",
    },
    Convention {
        name: "snakecase",
        lenient: r"^[a-zA-Z0-9_-]+(\.[a-zA-Z0-9_-]+)*$",
        strict: r"^[a-z0-9]+(_[a-z0-9]+)*(\.[a-z0-9]+)*$",
    },
    Convention {
        name: "kebabcase",
        lenient: r"^[a-zA-Z0-9_-]+(\.[a-zA-Z0-9_-]+)*$",
        strict: r"^[a-z0-9]+(-[a-z0-9]+)*(\.[a-z0-9]+)*$",
    },
];

/// Looks up a convention by its exact name.
///
/// # Arguments
///
/// * `name` - The convention name as given on the command line; the lookup
///   is case-sensitive
///
/// # Errors
///
/// Returns `ScanError::UnknownConvention` naming the offending string when
/// no convention has that name.
pub fn find_convention(name: &str) -> Result<&'static Convention, ScanError> {
    CONVENTIONS
        .iter()
        .find(|convention| convention.name == name)
        .ok_or_else(|| ScanError::UnknownConvention {
            name: name.to_owned(),
        })
}

impl Convention {
    /// Returns the pattern expression for the requested variant.
    #[must_use]
    pub const fn expression(&self, strictness: Strictness) -> &'static str {
        match strictness {
            Strictness::Lenient => self.lenient,
            Strictness::Strict => self.strict,
        }
    }

    /// Compiles the requested variant into a matcher.
    ///
    /// # Errors
    ///
    /// Returns `ScanError::Pattern` if the expression does not compile;
    /// the table entries are static, so this indicates a defect rather
    /// than a user error.
    pub fn pattern(&self, strictness: Strictness) -> Result<CompiledPattern, ScanError> {
        CompiledPattern::compile(self.expression(strictness))
    }
}

/// A compiled whole-name matcher for one convention variant.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    regex: Regex,
}

impl CompiledPattern {
    /// Compiles an anchored expression.
    ///
    /// # Errors
    ///
    /// Returns `ScanError::Pattern` when the expression is not valid regex
    /// syntax.
    pub fn compile(expression: &str) -> Result<Self, ScanError> {
        Ok(Self {
            regex: Regex::new(expression)?,
        })
    }

    /// Tests a bare entry name against the pattern. Names are matched
    /// whole; paths must never be passed here.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }
}
