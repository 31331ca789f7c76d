use crate::types::{ConfError, ResolvedPath};

/// Builds the physical cache paths to probe for a logical key.
pub struct KeyResolver;

impl KeyResolver {
    /// Canonicalize a caller-supplied key: strip leading/trailing slash
    /// runs and re-anchor with a single `/`. Keys that are empty before or
    /// after trimming are rejected.
    pub fn normalize(key: &str) -> Result<String, ConfError> {
        let trimmed = key.trim_matches('/');
        if trimmed.is_empty() {
            return Err(ConfError::InvalidKey {
                key: key.to_string(),
            });
        }
        Ok(format!("/{trimmed}"))
    }

    /// The ordered probe list for a normalized key: the idc-qualified path
    /// first, the global path second. An explicit `idc` wins over the
    /// machine-local one; with neither, only the global path is probed.
    /// An empty or slash-only qualifier counts as absent.
    pub fn candidates<'a>(
        key: &str,
        idc: Option<&'a str>,
        local_idc: Option<&'a str>,
    ) -> Vec<ResolvedPath> {
        let qualifier = Self::qualifier(idc).or_else(|| Self::qualifier(local_idc));

        let mut paths = Vec::with_capacity(2);
        if let Some(idc) = qualifier {
            paths.push(ResolvedPath::new(format!("/{idc}{key}")));
        }
        paths.push(ResolvedPath::new(key));
        paths
    }

    /// A usable locality qualifier, or `None` for empty/slash-only input.
    pub(crate) fn qualifier(idc: Option<&str>) -> Option<&str> {
        idc.map(|s| s.trim().trim_matches('/'))
            .filter(|s| !s.is_empty())
    }
}
