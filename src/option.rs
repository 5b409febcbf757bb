//! The option model: one named, typed configuration value with optional
//! validation constraints.
//!
//! A [`CfgOption`] is built with fluent constraint methods, handed to
//! [`Cfg::add`](crate::Cfg::add), and from then on only its *value* changes —
//! the kind, key, and constraints are fixed. Parsers call [`CfgOption::parse`]
//! (or toggle, for booleans) and callers read the typed value back through the
//! accessors.

use std::fmt;

use crate::error::CfgError;
use crate::text;

/// Lower bound of the default (unrestricted) `Double` range.
pub const RANGE_MIN: f64 = f64::MIN;

/// Upper bound of the default (unrestricted) `Double` range.
pub const RANGE_MAX: f64 = f64::MAX;

/// The value type of an option, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    Bool,
    Double,
    String,
}

impl OptionKind {
    fn label(self) -> &'static str {
        match self {
            OptionKind::Bool => "bool",
            OptionKind::Double => "double",
            OptionKind::String => "string",
        }
    }
}

/// A single typed, constrained configuration value.
///
/// Constraint fields exist regardless of kind; validation only consults the
/// ones relevant to the option's kind, so calling a `Double`-only constraint
/// method on a `String` option is accepted and has no effect.
#[derive(Debug, Clone)]
pub struct CfgOption {
    kind: OptionKind,
    key: String,
    value_bool: bool,
    value_double: f64,
    value_string: String,
    range: (f64, f64),
    allowed: Vec<String>,
    required_len: Option<usize>,
    description: String,
}

impl CfgOption {
    /// Create an option of the given kind with a defaulted value
    /// (`false` / `0.0` / `""`) and no constraints.
    pub fn new(kind: OptionKind, key: impl Into<String>) -> Self {
        Self {
            kind,
            key: key.into(),
            value_bool: false,
            value_double: 0.0,
            value_string: String::new(),
            range: (RANGE_MIN, RANGE_MAX),
            allowed: Vec::new(),
            required_len: None,
            description: String::new(),
        }
    }

    /// Shorthand for `CfgOption::new(OptionKind::Bool, key)`.
    pub fn bool(key: impl Into<String>) -> Self {
        Self::new(OptionKind::Bool, key)
    }

    /// Shorthand for `CfgOption::new(OptionKind::Double, key)`.
    pub fn double(key: impl Into<String>) -> Self {
        Self::new(OptionKind::Double, key)
    }

    /// Shorthand for `CfgOption::new(OptionKind::String, key)`.
    pub fn string(key: impl Into<String>) -> Self {
        Self::new(OptionKind::String, key)
    }

    // -- Constraint builders (call before registration) -----------------------

    /// Restrict a `Double` option to the inclusive range `[min, max]`.
    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.range = (min, max);
        self
    }

    /// Append one permitted value to a `String` option's allow-list.
    pub fn allow(mut self, value: impl Into<String>) -> Self {
        self.allowed.push(value.into());
        self
    }

    /// Replace a `String` option's allow-list wholesale.
    pub fn allow_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed = values.into_iter().map(Into::into).collect();
        self
    }

    /// Require a `String` option's value to be exactly `n` characters long.
    pub fn length(mut self, n: usize) -> Self {
        self.required_len = Some(n);
        self
    }

    /// Set the human-readable description shown in help output.
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    // -- Accessors -------------------------------------------------------------

    pub fn kind(&self) -> OptionKind {
        self.kind
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// The boolean value. Meaningful only for `Bool` options; inert `false`
    /// otherwise.
    pub fn as_bool(&self) -> bool {
        self.value_bool
    }

    /// The numeric value. Meaningful only for `Double` options; inert `0.0`
    /// otherwise.
    pub fn as_f64(&self) -> f64 {
        self.value_double
    }

    /// The string value. Meaningful only for `String` options; inert `""`
    /// otherwise.
    pub fn as_str(&self) -> &str {
        &self.value_string
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    // -- Value mutation (parsers only) -----------------------------------------

    /// Flip a boolean option's value. Both parsers *toggle* booleans on every
    /// occurrence rather than setting them true, so a flag appearing twice
    /// restores the original value.
    pub(crate) fn toggle(&mut self) {
        self.value_bool = !self.value_bool;
    }

    /// Convert one textual token into this option's typed value, in place.
    ///
    /// - `Bool`: the token must be exactly `"true"` or `"false"`; anything
    ///   else is a [`Fatal`](crate::Severity::Fatal) error.
    /// - `Double`: permissive numeric parse of the token's leading numeric
    ///   prefix; no prefix at all silently yields `0.0`.
    /// - `String`: a token starting with `"` loses one leading and one
    ///   trailing character (the intended paired quote); otherwise assigned
    ///   verbatim. No escape processing.
    pub fn parse(&mut self, token: &str) -> Result<(), CfgError> {
        match self.kind {
            OptionKind::Bool => match token {
                "true" => self.value_bool = true,
                "false" => self.value_bool = false,
                _ => {
                    return Err(CfgError::InvalidBool {
                        key: self.key.clone(),
                        token: token.to_string(),
                    });
                }
            },
            OptionKind::Double => self.value_double = text::leading_f64(token),
            OptionKind::String => {
                self.value_string = if token.starts_with('"') {
                    text::strip_quoted(token).to_string()
                } else {
                    token.to_string()
                };
            }
        }
        Ok(())
    }

    // -- Validation ------------------------------------------------------------

    /// Check the current value against this option's constraints.
    ///
    /// `Double`: true iff the value lies within `[min, max]` inclusive.
    /// `String`: with no allow-list, always valid (even when a length is
    /// configured); with an allow-list, the value must match an entry exactly
    /// and, when a length is configured, have exactly that many characters.
    /// `Bool`: always valid.
    pub fn is_valid(&self) -> bool {
        match self.kind {
            OptionKind::Bool => true,
            OptionKind::Double => {
                let (min, max) = self.range;
                self.value_double >= min && self.value_double <= max
            }
            OptionKind::String => {
                if self.allowed.is_empty() {
                    return true;
                }
                if let Some(n) = self.required_len
                    && self.value_string.chars().count() != n
                {
                    return false;
                }
                self.allowed.iter().any(|a| a == &self.value_string)
            }
        }
    }
}

impl fmt::Display for CfgOption {
    /// Renders `<type> <key>[ (range lo-hi)][ (must be N char(s) long)]
    /// [ (can be 'a', 'b', ...)]: <description>`. The range clause is omitted
    /// for the default full range; length and allow-list clauses are omitted
    /// when unset.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind.label(), self.key)?;

        match self.kind {
            OptionKind::Double => {
                let (min, max) = self.range;
                if min != RANGE_MIN || max != RANGE_MAX {
                    write!(f, " (range {min}-{max})")?;
                }
            }
            OptionKind::String => {
                if let Some(n) = self.required_len {
                    write!(f, " (must be {n} char(s) long)")?;
                }
                if !self.allowed.is_empty() {
                    write!(f, " (can be ")?;
                    for (i, a) in self.allowed.iter().enumerate() {
                        if i > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "'{a}'")?;
                    }
                    write!(f, ")")?;
                }
            }
            OptionKind::Bool => {}
        }

        write!(f, ": {}", self.description)
    }
}
