use std::path::PathBuf;
use thiserror::Error;

/// How bad an error is, and what the caller should do about it.
///
/// The library never terminates the process itself. Callers inspect the
/// severity of a returned [`CfgError`] and decide: a `Fatal` error means the
/// program is miswired (panic, or exit with a stack trace in debug builds);
/// a `Usage` error is bad user input (print the message and exit 1);
/// `Warning` errors are only ever handed back in the warning list from
/// [`Cfg::from_file`](crate::Cfg::from_file) — the offending line was skipped
/// and parsing continued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Fatal,
    Usage,
    Warning,
}

#[derive(Debug, Error)]
pub enum CfgError {
    // -- Fatal: the registry itself is misconfigured --------------------------

    #[error("registry has no name — call .name() before parsing arguments")]
    NameRequired,

    #[error("registry has no version — call .version() before parsing arguments")]
    VersionRequired,

    #[error("cannot parse {path} after arguments were already parsed (file values would silently override them)")]
    FileAfterArguments { path: PathBuf },

    #[error("invalid value '{token}' for bool option '{key}' (valid are 'true' and 'false')")]
    InvalidBool { key: String, token: String },

    #[error("shorthand '-{short}' maps to '{key}', which is not a registered option")]
    ShorthandTarget { short: char, key: String },

    // -- Usage: malformed command-line input ----------------------------------

    #[error("'-' is not a valid argument")]
    BareDash,

    #[error("unknown argument '-{short}'")]
    UnknownShorthand { short: char },

    #[error("no such argument '--{key}'")]
    UnknownKey { key: String },

    #[error("option '--{key}' requires a value")]
    MissingValue { key: String },

    #[error("option '--{key}' expects a value, not another flag ('{token}')")]
    ValueIsFlag { key: String, token: String },

    // -- Warning: recoverable file-parsing problems ---------------------------

    #[error("cannot open configuration file {path}")]
    FileUnreadable { path: PathBuf },

    #[error("{path}:{line}: invalid key ''")]
    EmptyFileKey { path: PathBuf, line: usize },

    #[error("{path}:{line}: unknown key '{key}'")]
    UnknownFileKey {
        path: PathBuf,
        line: usize,
        key: String,
    },

    #[error("{path}:{line}: option '{key}' requires a value (non-bool)")]
    MissingFileValue {
        path: PathBuf,
        line: usize,
        key: String,
    },
}

impl CfgError {
    /// Classify this error. See [`Severity`] for what each class means.
    pub fn severity(&self) -> Severity {
        match self {
            CfgError::NameRequired
            | CfgError::VersionRequired
            | CfgError::FileAfterArguments { .. }
            | CfgError::InvalidBool { .. }
            | CfgError::ShorthandTarget { .. } => Severity::Fatal,

            CfgError::BareDash
            | CfgError::UnknownShorthand { .. }
            | CfgError::UnknownKey { .. }
            | CfgError::MissingValue { .. }
            | CfgError::ValueIsFlag { .. } => Severity::Usage,

            CfgError::FileUnreadable { .. }
            | CfgError::EmptyFileKey { .. }
            | CfgError::UnknownFileKey { .. }
            | CfgError::MissingFileValue { .. } => Severity::Warning,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_file_key_formats_with_path_and_line() {
        let err = CfgError::UnknownFileKey {
            path: "/etc/myapp.conf".into(),
            line: 7,
            key: "typo".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("myapp.conf"));
        assert!(msg.contains("7"));
        assert!(msg.contains("typo"));
    }

    #[test]
    fn invalid_bool_formats() {
        let err = CfgError::InvalidBool {
            key: "verbose".into(),
            token: "yes".into(),
        };
        assert!(err.to_string().contains("'yes'"));
        assert!(err.to_string().contains("verbose"));
    }

    #[test]
    fn severities() {
        assert_eq!(CfgError::NameRequired.severity(), Severity::Fatal);
        assert_eq!(
            CfgError::InvalidBool {
                key: "k".into(),
                token: "t".into()
            }
            .severity(),
            Severity::Fatal
        );
        assert_eq!(CfgError::BareDash.severity(), Severity::Usage);
        assert_eq!(
            CfgError::UnknownKey { key: "k".into() }.severity(),
            Severity::Usage
        );
        assert_eq!(
            CfgError::FileUnreadable { path: "x".into() }.severity(),
            Severity::Warning
        );
    }
}
