//! The option registry: an ordered collection of [`CfgOption`]s plus the
//! shorthand table and program metadata.
//!
//! Registration order is preserved because it drives help output. Keys are
//! not deduplicated on [`add`](Cfg::add) — lookups return the first match, so
//! a duplicate registration is simply shadowed. There is no removal
//! operation: once parsing starts, the registry's shape never changes, only
//! option values do.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use crate::option::CfgOption;

/// A set of registered options, the short-flag table, and program metadata.
///
/// Construct one, describe the program, register options, then parse:
///
/// ```
/// use optreg::{Cfg, CfgOption};
///
/// let mut cfg = Cfg::new().name("myapp").version("1.2.0");
/// cfg.add(CfgOption::bool("verbose").describe("Enable chatty output."));
/// cfg.shorthand('v', "verbose");
/// ```
#[derive(Debug, Default)]
pub struct Cfg {
    options: Vec<CfgOption>,
    shorthand: BTreeMap<char, String>,
    name: String,
    version: String,
    author: String,
    copyright: String,
    pub(crate) parsed_arguments: bool,
}

impl Cfg {
    /// An empty registry with no metadata. Name and version must be set
    /// before [`from_arguments`](Cfg::from_arguments) is called.
    pub fn new() -> Self {
        Self::default()
    }

    // -- Metadata --------------------------------------------------------------

    /// Set the program name (shown by `--help` and `--version`).
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the program version (shown by `--help` and `--version`).
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Set the author line of the help text. Optional.
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Set the copyright line of the help text. Optional.
    pub fn copyright(mut self, copyright: impl Into<String>) -> Self {
        self.copyright = copyright.into();
        self
    }

    pub(crate) fn metadata(&self) -> (&str, &str, &str, &str) {
        (&self.name, &self.version, &self.author, &self.copyright)
    }

    // -- Registration ----------------------------------------------------------

    /// Append an option. Duplicate keys are not rejected; [`get`](Cfg::get)
    /// returns the first registration for a key.
    pub fn add(&mut self, option: CfgOption) {
        self.options.push(option);
    }

    /// Map a single-character short flag to a long option key.
    ///
    /// Registering the same short flag twice keeps the last mapping. Several
    /// short flags may map to the same long key.
    pub fn shorthand(&mut self, short: char, long: impl Into<String>) {
        self.shorthand.insert(short, long.into());
    }

    /// Resolve a short flag to its long key, if mapped.
    pub(crate) fn resolve_shorthand(&self, short: char) -> Option<&str> {
        self.shorthand.get(&short).map(String::as_str)
    }

    pub(crate) fn shorthand_table(&self) -> &BTreeMap<char, String> {
        &self.shorthand
    }

    // -- Lookup ----------------------------------------------------------------

    /// Whether an option with this key is registered.
    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// The first registered option with this key, or `None`.
    pub fn get(&self, key: &str) -> Option<&CfgOption> {
        self.options.iter().find(|o| o.key() == key)
    }

    pub(crate) fn get_mut(&mut self, key: &str) -> Option<&mut CfgOption> {
        self.options.iter_mut().find(|o| o.key() == key)
    }

    /// All registered options, in registration order.
    pub fn options(&self) -> &[CfgOption] {
        &self.options
    }

    // -- Introspection ---------------------------------------------------------

    /// Every option as a `--key` header line followed by its own display
    /// line, in registration order. Used by [`help_text`](Cfg::help_text) and
    /// available standalone for library-level introspection.
    pub fn option_listing(&self) -> String {
        let mut out = String::new();
        for opt in &self.options {
            let _ = writeln!(out, "--{}", opt.key());
            let _ = writeln!(out, "  {opt}");
        }
        out
    }

    /// The full `--help` text: `<name> <version>`, optional author and
    /// copyright lines, one `-<short> --<long>` line per shorthand mapping
    /// (sorted by short flag), a blank line, then the option listing.
    pub fn help_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{} {}", self.name, self.version);
        if !self.author.is_empty() {
            let _ = writeln!(out, "{}", self.author);
        }
        if !self.copyright.is_empty() {
            let _ = writeln!(out, "{}", self.copyright);
        }
        for (short, long) in &self.shorthand {
            let _ = writeln!(out, "-{short} --{long}");
        }
        let _ = writeln!(out);
        out.push_str(&self.option_listing());
        out
    }

    /// The `--version` text: `<name> <version>`.
    pub fn version_text(&self) -> String {
        format!("{} {}", self.name, self.version)
    }
}
