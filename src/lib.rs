//! Declarative, typed option registry with dual-source parsing. Register
//! your options once, then fill them from a config file, the command line,
//! or both.
//!
//! ```no_run
//! use optreg::{ArgOutcome, Cfg, CfgOption};
//!
//! let mut cfg = Cfg::new().name("greeter").version("1.2.0");
//! cfg.add(CfgOption::bool("verbose").describe("Enable chatty output."));
//! cfg.add(
//!     CfgOption::string("name")
//!         .allow_values(["alice", "bob"])
//!         .describe("Who to greet."),
//! );
//! cfg.shorthand('v', "verbose");
//!
//! cfg.from_file("greeter.conf", false)?;
//! match cfg.from_arguments(std::env::args())? {
//!     ArgOutcome::Help(text) | ArgOutcome::Version(text) => println!("{text}"),
//!     ArgOutcome::Parsed { positionals } => {
//!         let name = cfg.get("name").map(|o| o.as_str().to_string());
//!         // ...
//!         let _ = (name, positionals);
//!     }
//! }
//! # Ok::<(), optreg::CfgError>(())
//! ```
//!
//! # Why a registry
//!
//! Derive-based CLI parsers generate a schema from a struct; optreg goes the
//! other way and makes the schema a runtime value. That suits programs whose
//! option set is assembled dynamically — plugins registering their own
//! options, tools that expose the same registry over both a config file and
//! argv — and keeps the whole model down to two types. Every downstream
//! behavior (parsing, validation, `--help` output) derives from the
//! registered [`CfgOption`]s, in registration order.
//!
//! # The two sources
//!
//! A config file supplies defaults; command-line arguments override them.
//! That contract is enforced: [`Cfg::from_file`] refuses to run after
//! [`Cfg::from_arguments`] unless explicitly overridden, because file values
//! applied late would silently clobber what the user typed.
//!
//! Both sources resolve keys against the same registry, convert values
//! through the same [`CfgOption::parse`], and share one validation model
//! ([`CfgOption::is_valid`]). They differ only in grammar and in error
//! policy: argument errors stop the scan (bad user input deserves a prompt
//! failure), file problems are per-line warnings and the rest of the file
//! still applies.
//!
//! # Toggle semantics — read this twice
//!
//! A boolean option is **toggled**, not set, every time its flag or file key
//! appears. `--verbose --verbose` leaves the value exactly where it started;
//! an odd number of occurrences flips it once. This is deliberate: a file
//! can switch a flag on and a single `-v` on the command line switches it
//! back off, with the same short flag doubling as the override. It is *not*
//! the conventional "presence means true" behavior, so document it for your
//! users if you expose boolean flags.
//!
//! # Values and constraints
//!
//! Options come in three kinds — `Bool`, `Double`, `String` — fixed at
//! construction. Constraints are declared with fluent methods before the
//! option is registered and are immutable afterwards:
//!
//! - `Double`: an inclusive `[min, max]` range (default: the full range).
//! - `String`: an allow-list of exact values and/or an exact required
//!   length. A length without an allow-list is inert — validation of an
//!   unlisted string always passes.
//!
//! Value conversion is permissive: a `Double` token parses its leading
//! numeric prefix (`"12cm"` is `12.0`, garbage is `0.0`),
//! and a `String` token wrapped in double quotes loses exactly one character
//! at each end. Only `Bool` literals are strict: `"true"` or `"false"`,
//! case-sensitive, anything else is a fatal error.
//!
//! # Error handling
//!
//! All fallible operations return [`CfgError`]; the library never prints
//! usage and never exits. Each error carries a [`Severity`]:
//!
//! - **Fatal** — the registry is miswired (missing name/version, shorthand
//!   pointing at an unregistered option, file-after-arguments ordering
//!   violation, malformed bool literal). A bug in the embedding program, not
//!   in user input.
//! - **Usage** — malformed command-line input. Print the message and exit 1.
//! - **Warning** — a skipped config-file line (or an unreadable file),
//!   returned in the warning list from [`Cfg::from_file`] and emitted as a
//!   `tracing` event. Parsing already continued past it.

pub mod error;

mod args;
mod file;
mod option;
mod registry;
mod text;

pub use args::ArgOutcome;
pub use error::{CfgError, Severity};
pub use option::{CfgOption, OptionKind, RANGE_MAX, RANGE_MIN};
pub use registry::Cfg;
