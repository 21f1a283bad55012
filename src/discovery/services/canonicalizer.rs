//! Registration name derivation.

use crate::artifact::domain::{AdapterName, AdapterNameError};
use crate::config::CanonicalizerConfig;
use camino::Utf8Path;

/// Derives registration names from scan-relative paths.
///
/// The derivation is a pure function of the path, so applying it twice
/// yields the same name.
#[derive(Debug, Clone)]
pub struct NameCanonicalizer {
    config: CanonicalizerConfig,
    extension: String,
}

impl NameCanonicalizer {
    /// Creates a canonicalizer for files with `extension`, given with or
    /// without its leading dot.
    #[must_use]
    pub fn new(config: CanonicalizerConfig, extension: &str) -> Self {
        Self {
            config,
            extension: extension.trim_start_matches('.').to_owned(),
        }
    }

    /// Returns the registration name for `path`.
    ///
    /// Components after the last adapters-root segment are considered;
    /// a file nested in a directory is named `<parent>_<stem>`. Hyphens
    /// become underscores and one marker token is stripped, as a suffix if
    /// possible and otherwise as a prefix.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterNameError`] when the derived name is empty or not a
    /// valid registration name.
    pub fn canonicalize(&self, path: &Utf8Path) -> Result<AdapterName, AdapterNameError> {
        let components: Vec<&str> = path.components().map(|component| component.as_str()).collect();
        let start = components
            .iter()
            .rposition(|component| *component == self.config.adapters_segment)
            .map_or(0, |position| position + 1);
        let remaining = components.get(start..).unwrap_or_default();

        let joined = match remaining {
            [] => return Err(AdapterNameError::Empty),
            [file] => self.strip_extension(file).to_owned(),
            [.., parent, file] => format!("{parent}_{}", self.strip_extension(file)),
        };

        let normalized = joined.replace('-', "_");
        let stripped = self.strip_token(&normalized);
        AdapterName::new(stripped.to_lowercase())
    }

    fn strip_extension<'a>(&self, file: &'a str) -> &'a str {
        file.strip_suffix(self.extension.as_str())
            .and_then(|stem| stem.strip_suffix('.'))
            .unwrap_or(file)
    }

    fn strip_token<'a>(&self, name: &'a str) -> &'a str {
        let tokens = &self.config.strip_tokens;
        let suffix = tokens.iter().find_map(|token| {
            name.strip_suffix(token.as_str())
                .and_then(|rest| rest.strip_suffix('_'))
                .filter(|rest| !rest.is_empty())
        });
        suffix
            .or_else(|| {
                tokens.iter().find_map(|token| {
                    name.strip_prefix(token.as_str())
                        .and_then(|rest| rest.strip_prefix('_'))
                        .filter(|rest| !rest.is_empty())
                })
            })
            .unwrap_or(name)
    }
}
