//! Token estimation
//!
//! No tokenizer is involved: token counts are derived from character (or
//! byte) counts with a fixed characters-per-token ratio per content kind.

use crate::domain::{CharsPerToken, ContentKind};
use crate::error::{LayoutError, Result};
use std::path::Path;

pub mod files;

pub use files::{FileEstimate, FileWarning};

#[derive(Debug, Clone, Copy, Default)]
pub struct TokenEstimator {
    ratios: CharsPerToken,
}

impl TokenEstimator {
    pub fn new(ratios: CharsPerToken) -> Self {
        Self { ratios }
    }

    pub fn ratios(&self) -> CharsPerToken {
        self.ratios
    }

    /// Estimate tokens as `ceil(char_count / ratio)`.
    ///
    /// A negative `char_count` is rejected with [`LayoutError::InvalidInput`].
    pub fn estimate_from_chars(&self, char_count: i64, kind: ContentKind) -> Result<u64> {
        let chars = u64::try_from(char_count).map_err(|_| {
            LayoutError::InvalidInput(format!(
                "character count must be non-negative, got {char_count}"
            ))
        })?;
        self.tokens_for(chars, kind)
    }

    /// Estimate tokens from the summed byte size of `paths`.
    ///
    /// Unreadable paths are skipped with a warning and contribute nothing, so
    /// this only fails on a bad ratio, never on individual files.
    pub fn estimate_from_files<P: AsRef<Path>>(
        &self,
        paths: &[P],
        kind: ContentKind,
    ) -> Result<FileEstimate> {
        let sizes = files::collect_sizes(paths);
        let tokens = self.tokens_for(sizes.total_bytes, kind)?;
        tracing::debug!(
            "Estimated {} tokens from {} bytes across {} files ({} skipped)",
            tokens,
            sizes.total_bytes,
            sizes.files_counted,
            sizes.warnings.len()
        );
        Ok(FileEstimate {
            tokens,
            total_bytes: sizes.total_bytes,
            files_counted: sizes.files_counted,
            warnings: sizes.warnings,
        })
    }

    fn tokens_for(&self, chars: u64, kind: ContentKind) -> Result<u64> {
        let ratio = self.ratios.ratio_for(kind);
        if ratio == 0 {
            return Err(LayoutError::InvalidConfiguration(format!(
                "chars_per_token for {} content must be at least 1",
                kind.as_str()
            )));
        }
        Ok(chars.div_ceil(ratio))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prose_uses_four_chars_per_token() {
        let estimator = TokenEstimator::default();
        assert_eq!(estimator.estimate_from_chars(800_000, ContentKind::Prose), Ok(200_000));
        assert_eq!(estimator.estimate_from_chars(9, ContentKind::Prose), Ok(3));
    }

    #[test]
    fn code_uses_three_chars_per_token() {
        let estimator = TokenEstimator::default();
        assert_eq!(estimator.estimate_from_chars(9, ContentKind::Code), Ok(3));
        assert_eq!(estimator.estimate_from_chars(10, ContentKind::Code), Ok(4));
    }

    #[test]
    fn zero_chars_is_zero_tokens() {
        let estimator = TokenEstimator::default();
        assert_eq!(estimator.estimate_from_chars(0, ContentKind::Prose), Ok(0));
    }

    #[test]
    fn negative_chars_is_invalid_input() {
        let estimator = TokenEstimator::default();
        let err = estimator.estimate_from_chars(-1, ContentKind::Prose).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidInput(_)));
    }

    #[test]
    fn zero_ratio_is_invalid_configuration() {
        let estimator = TokenEstimator::new(CharsPerToken { prose: 0, code: 3 });
        let err = estimator.estimate_from_chars(10, ContentKind::Prose).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidConfiguration(_)));
        assert_eq!(estimator.estimate_from_chars(10, ContentKind::Code), Ok(4));
    }
}
