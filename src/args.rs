//! Command-line argument parsing.
//!
//! [`Cfg::from_arguments`] scans the raw argument vector in order. Argument 0
//! (the program name) is included in the scan — it never matches flag syntax,
//! so it falls through as the first positional. The parser never prints or
//! exits: `--help` and `--version` come back as [`ArgOutcome`] variants
//! carrying the rendered text, and every malformed input is a returned
//! [`CfgError`] whose [`severity`](CfgError::severity) tells the caller
//! whether this is bad user input (`Usage`) or a miswired registry (`Fatal`).
//!
//! # Grammar
//!
//! - `--help` / `--version` — reserved; short-circuit the scan in encounter
//!   order (tokens before them are processed, tokens after are not).
//! - `--key` / `--key=value` — long form, split on the first `=`. With no
//!   `=`, a non-boolean option takes its value from the following token.
//! - `-c` — short form, resolved through the shorthand table. Only the
//!   character right after the `-` counts; any trailing characters are
//!   ignored. Non-boolean options take their value from the following token.
//! - anything else — positional, collected and returned in encounter order.
//!
//! Boolean options never take a value: each occurrence *toggles* the current
//! value (an inline `=value` is ignored). See the crate docs for why.

use crate::error::CfgError;
use crate::option::OptionKind;
use crate::registry::Cfg;

/// What a scan of the argument vector produced.
///
/// `Help` and `Version` carry fully rendered text; the conventional response
/// is to print it and exit 0, but that stays in the caller's hands.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgOutcome {
    /// `--help` was encountered; contains the help text.
    Help(String),
    /// `--version` was encountered; contains `<name> <version>`.
    Version(String),
    /// The whole vector was consumed; contains the positional (non-flag)
    /// tokens in encounter order.
    Parsed { positionals: Vec<String> },
}

impl ArgOutcome {
    /// The positional tokens, if the scan ran to completion.
    pub fn positionals(&self) -> Option<&[String]> {
        match self {
            ArgOutcome::Parsed { positionals } => Some(positionals),
            _ => None,
        }
    }
}

impl Cfg {
    /// Populate option values from the process's argument vector.
    ///
    /// Pass `std::env::args()` directly, program name included. Requires
    /// [`name`](Cfg::name) and [`version`](Cfg::version) to have been set.
    ///
    /// Every `--key`/`-c` occurrence must resolve to a registered option;
    /// non-boolean options require a non-empty value, and boolean options are
    /// toggled. Errors carry a [`Severity`](crate::Severity) so the caller
    /// can distinguish bad input (exit 1 by convention) from registry
    /// misconfiguration.
    pub fn from_arguments<I>(&mut self, args: I) -> Result<ArgOutcome, CfgError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.parsed_arguments = true;

        let (name, version, _, _) = self.metadata();
        if name.is_empty() {
            return Err(CfgError::NameRequired);
        }
        if version.is_empty() {
            return Err(CfgError::VersionRequired);
        }

        let tokens: Vec<String> = args.into_iter().map(Into::into).collect();
        let mut positionals = Vec::new();
        let mut i = 0;

        while i < tokens.len() {
            let token = &tokens[i];

            if token == "--help" {
                return Ok(ArgOutcome::Help(self.help_text()));
            }
            if token == "--version" {
                return Ok(ArgOutcome::Version(self.version_text()));
            }

            let Some(flag_body) = token.strip_prefix('-') else {
                positionals.push(token.clone());
                i += 1;
                continue;
            };

            let Some(first) = flag_body.chars().next() else {
                return Err(CfgError::BareDash);
            };

            // Resolve the token to a long key, plus any inline `=value`.
            let (key, inline_value) = if let Some(long) = flag_body.strip_prefix('-') {
                let (key, value) = match long.split_once('=') {
                    Some((k, v)) => (k.to_string(), Some(v.to_string())),
                    None => (long.to_string(), None),
                };
                if !self.has(&key) {
                    return Err(CfgError::UnknownKey { key });
                }
                (key, value)
            } else {
                let key = match self.resolve_shorthand(first) {
                    Some(k) => k.to_string(),
                    None => return Err(CfgError::UnknownShorthand { short: first }),
                };
                if !self.has(&key) {
                    return Err(CfgError::ShorthandTarget { short: first, key });
                }
                (key, None)
            };

            let is_bool = self
                .get(&key)
                .is_some_and(|o| o.kind() == OptionKind::Bool);

            if is_bool {
                if let Some(opt) = self.get_mut(&key) {
                    opt.toggle();
                }
                i += 1;
                continue;
            }

            let value = match inline_value {
                Some(v) => v,
                None => match tokens.get(i + 1) {
                    None => return Err(CfgError::MissingValue { key }),
                    Some(next) if next.starts_with('-') => {
                        return Err(CfgError::ValueIsFlag {
                            key,
                            token: next.clone(),
                        });
                    }
                    Some(next) => {
                        i += 1;
                        next.clone()
                    }
                },
            };

            if value.is_empty() {
                return Err(CfgError::MissingValue { key });
            }

            if let Some(opt) = self.get_mut(&key) {
                opt.parse(&value)?;
            }
            i += 1;
        }

        Ok(ArgOutcome::Parsed { positionals })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::option::CfgOption;

    fn sample() -> Cfg {
        let mut cfg = Cfg::new().name("prog").version("1.0");
        cfg.add(CfgOption::bool("verbose").describe("Enable chatty output."));
        cfg.add(
            CfgOption::string("name")
                .allow_values(["alice", "bob"])
                .describe("Who to greet."),
        );
        cfg.add(CfgOption::double("ratio").range(0.0, 1.0).describe("Blend."));
        cfg.shorthand('v', "verbose");
        cfg.shorthand('n', "name");
        cfg
    }

    fn parse(cfg: &mut Cfg, args: &[&str]) -> Result<ArgOutcome, CfgError> {
        cfg.from_arguments(args.iter().copied())
    }

    #[test]
    fn long_flags_and_positionals() {
        let mut cfg = sample();
        let outcome = parse(&mut cfg, &["prog", "--verbose", "--name=alice", "extra"]).unwrap();
        assert!(cfg.get("verbose").unwrap().as_bool());
        assert_eq!(cfg.get("name").unwrap().as_str(), "alice");
        assert_eq!(
            outcome.positionals().unwrap(),
            &["prog".to_string(), "extra".to_string()]
        );
    }

    #[test]
    fn long_flag_value_from_next_token() {
        let mut cfg = sample();
        parse(&mut cfg, &["prog", "--name", "bob"]).unwrap();
        assert_eq!(cfg.get("name").unwrap().as_str(), "bob");
    }

    #[test]
    fn short_flag_value_from_next_token() {
        let mut cfg = sample();
        parse(&mut cfg, &["prog", "-n", "alice"]).unwrap();
        assert_eq!(cfg.get("name").unwrap().as_str(), "alice");
    }

    #[test]
    fn double_value_parsed_and_validated() {
        let mut cfg = sample();
        parse(&mut cfg, &["prog", "--ratio", "0.25"]).unwrap();
        let opt = cfg.get("ratio").unwrap();
        assert_eq!(opt.as_f64(), 0.25);
        assert!(opt.is_valid());
    }

    // -- Toggle semantics ------------------------------------------------------

    #[test]
    fn bool_toggles_not_sets() {
        let mut cfg = sample();
        parse(&mut cfg, &["prog", "--verbose"]).unwrap();
        assert!(cfg.get("verbose").unwrap().as_bool());
    }

    #[test]
    fn short_flag_twice_restores_original() {
        let mut cfg = sample();
        parse(&mut cfg, &["prog", "-v", "-v"]).unwrap();
        assert!(!cfg.get("verbose").unwrap().as_bool());
    }

    #[test]
    fn three_occurrences_flip_once() {
        let mut cfg = sample();
        parse(&mut cfg, &["prog", "-v", "--verbose", "-v"]).unwrap();
        assert!(cfg.get("verbose").unwrap().as_bool());
    }

    #[test]
    fn bool_with_inline_value_still_toggles() {
        let mut cfg = sample();
        parse(&mut cfg, &["prog", "--verbose=false"]).unwrap();
        assert!(cfg.get("verbose").unwrap().as_bool());
    }

    // -- Reserved flags --------------------------------------------------------

    #[test]
    fn help_short_circuits() {
        let mut cfg = sample();
        let outcome = parse(&mut cfg, &["prog", "--help", "--nonsense"]).unwrap();
        match outcome {
            ArgOutcome::Help(text) => {
                assert!(text.starts_with("prog 1.0\n"));
                assert!(text.contains("--verbose"));
                assert!(text.contains("-v --verbose"));
            }
            other => panic!("expected Help, got {other:?}"),
        }
    }

    #[test]
    fn tokens_before_help_are_processed() {
        let mut cfg = sample();
        parse(&mut cfg, &["prog", "--verbose", "--help"]).unwrap();
        assert!(cfg.get("verbose").unwrap().as_bool());
    }

    #[test]
    fn version_short_circuits() {
        let mut cfg = sample();
        let outcome = parse(&mut cfg, &["prog", "--version"]).unwrap();
        assert_eq!(outcome, ArgOutcome::Version("prog 1.0".into()));
    }

    // -- Errors ----------------------------------------------------------------

    #[test]
    fn missing_name_is_fatal() {
        let mut cfg = Cfg::new().version("1.0");
        let err = parse(&mut cfg, &["prog"]).unwrap_err();
        assert!(matches!(err, CfgError::NameRequired));
    }

    #[test]
    fn missing_version_is_fatal() {
        let mut cfg = Cfg::new().name("prog");
        let err = parse(&mut cfg, &["prog"]).unwrap_err();
        assert!(matches!(err, CfgError::VersionRequired));
    }

    #[test]
    fn bare_dash_rejected() {
        let mut cfg = sample();
        let err = parse(&mut cfg, &["prog", "-"]).unwrap_err();
        assert!(matches!(err, CfgError::BareDash));
    }

    #[test]
    fn unknown_long_key() {
        let mut cfg = sample();
        let err = parse(&mut cfg, &["prog", "--nope"]).unwrap_err();
        assert!(matches!(err, CfgError::UnknownKey { key } if key == "nope"));
    }

    #[test]
    fn unknown_short_flag() {
        let mut cfg = sample();
        let err = parse(&mut cfg, &["prog", "-x"]).unwrap_err();
        assert!(matches!(err, CfgError::UnknownShorthand { short: 'x' }));
    }

    #[test]
    fn shorthand_to_unregistered_key_is_fatal() {
        let mut cfg = sample();
        cfg.shorthand('z', "ghost");
        let err = parse(&mut cfg, &["prog", "-z"]).unwrap_err();
        assert!(matches!(err, CfgError::ShorthandTarget { short: 'z', .. }));
        assert_eq!(err.severity(), crate::Severity::Fatal);
    }

    #[test]
    fn missing_value_at_end() {
        let mut cfg = sample();
        let err = parse(&mut cfg, &["prog", "--name"]).unwrap_err();
        assert!(matches!(err, CfgError::MissingValue { key } if key == "name"));
    }

    #[test]
    fn empty_inline_value() {
        let mut cfg = sample();
        let err = parse(&mut cfg, &["prog", "--name="]).unwrap_err();
        assert!(matches!(err, CfgError::MissingValue { .. }));
    }

    #[test]
    fn next_token_flag_is_not_a_value() {
        let mut cfg = sample();
        let err = parse(&mut cfg, &["prog", "-n", "-v"]).unwrap_err();
        assert!(matches!(err, CfgError::ValueIsFlag { .. }));
    }

    // -- Oddities carried over on purpose --------------------------------------

    #[test]
    fn short_token_extra_chars_ignored() {
        let mut cfg = sample();
        parse(&mut cfg, &["prog", "-vxyz"]).unwrap();
        assert!(cfg.get("verbose").unwrap().as_bool());
    }

    #[test]
    fn value_with_equals_kept_whole() {
        let mut cfg = Cfg::new().name("prog").version("1.0");
        cfg.add(CfgOption::string("expr"));
        parse(&mut cfg, &["prog", "--expr=a=b"]).unwrap();
        assert_eq!(cfg.get("expr").unwrap().as_str(), "a=b");
    }

    #[test]
    fn quoted_value_stripped() {
        let mut cfg = Cfg::new().name("prog").version("1.0");
        cfg.add(CfgOption::string("msg"));
        parse(&mut cfg, &["prog", "--msg", "\"hello world\""]).unwrap();
        assert_eq!(cfg.get("msg").unwrap().as_str(), "hello world");
    }
}
