//! Configuration-file parsing.
//!
//! The file grammar is deliberately small: UTF-8 text, one `key = value` pair
//! per line, `#` starts a full-line comment, and whitespace around the `=`
//! and around both sides is stripped. Lines without an `=` are silently
//! ignored. A boolean key is *toggled* by its presence (`verbose =`), exactly
//! as on the command line; the value after `=` may be empty only for
//! booleans.
//!
//! File problems are never fatal: an unreadable file, an empty or unknown
//! key, or a missing non-boolean value each produce a [`CfgError`] of
//! [`Warning`](crate::Severity::Warning) severity, the line is skipped, and
//! parsing continues. Warnings are returned to the caller and also emitted as
//! `tracing` events, so embedding applications get them in their logs for
//! free.

use std::path::Path;

use crate::error::CfgError;
use crate::option::OptionKind;
use crate::registry::Cfg;
use crate::text;

impl Cfg {
    /// Populate option values from a `key = value` configuration file.
    ///
    /// Files are meant to supply defaults that command-line arguments then
    /// override, so calling this after [`from_arguments`](Cfg::from_arguments)
    /// has already run is a fatal error unless `ignore_order_checking` is
    /// set.
    ///
    /// Returns the per-line warnings for everything that was skipped (empty
    /// keys, unknown keys, missing values — and the whole-file case of an
    /// unreadable path). An empty vector means the file applied cleanly.
    pub fn from_file(
        &mut self,
        path: impl AsRef<Path>,
        ignore_order_checking: bool,
    ) -> Result<Vec<CfgError>, CfgError> {
        let path = path.as_ref();

        if self.parsed_arguments && !ignore_order_checking {
            return Err(CfgError::FileAfterArguments {
                path: path.to_path_buf(),
            });
        }

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(_) => {
                return Ok(vec![file_warning(CfgError::FileUnreadable {
                    path: path.to_path_buf(),
                })]);
            }
        };

        Ok(self.apply_file_content(path, &content))
    }

    /// Line-by-line application of already-read file content. Split out so
    /// the grammar is testable without touching the filesystem.
    fn apply_file_content(&mut self, path: &Path, content: &str) -> Vec<CfgError> {
        let mut warnings = Vec::new();

        for (idx, line) in content.lines().enumerate() {
            let lineno = idx + 1;

            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = text::split_key_value(line) else {
                continue;
            };

            if key.is_empty() {
                warnings.push(file_warning(CfgError::EmptyFileKey {
                    path: path.to_path_buf(),
                    line: lineno,
                }));
                continue;
            }

            let Some(opt) = self.get(key) else {
                warnings.push(file_warning(CfgError::UnknownFileKey {
                    path: path.to_path_buf(),
                    line: lineno,
                    key: key.to_string(),
                }));
                continue;
            };

            let is_bool = opt.kind() == OptionKind::Bool;
            if !is_bool && value.is_empty() {
                warnings.push(file_warning(CfgError::MissingFileValue {
                    path: path.to_path_buf(),
                    line: lineno,
                    key: key.to_string(),
                }));
                continue;
            }

            // Key is known, so get_mut cannot miss; the parse itself only
            // fails for bool literals, which never reach it here (booleans
            // are toggled, not parsed).
            if let Some(opt) = self.get_mut(key) {
                if is_bool {
                    opt.toggle();
                } else if let Err(err) = opt.parse(value) {
                    warnings.push(file_warning(err));
                }
            }
        }

        warnings
    }

}

fn file_warning(warning: CfgError) -> CfgError {
    tracing::warn!(%warning, "skipping configuration line");
    warning
}
