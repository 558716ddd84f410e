//! Committed keyword and its navigation mirror.

use crate::model::{search_path, Keyword};
use crate::services::Navigator;
use tracing::debug;

/// Owns the committed search keyword.
///
/// The committed keyword is the source of truth for querying. Navigation is
/// written on every change to a non-empty keyword and never read back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordCommitter {
    keyword: Option<Keyword>,
}

impl KeywordCommitter {
    /// Seed from the navigation location without writing navigation.
    pub fn initialize(from_navigation: Option<&str>) -> Self {
        Self {
            keyword: from_navigation.and_then(|raw| Keyword::new(raw).ok()),
        }
    }

    /// Currently committed keyword, if any.
    pub fn keyword(&self) -> Option<&Keyword> {
        self.keyword.as_ref()
    }

    /// Commit a settled input value.
    ///
    /// - Empty or absent: keyword becomes unset, navigation untouched.
    /// - Same as current: no-op.
    /// - Otherwise: keyword replaced, one navigation write.
    ///
    /// Returns true if the committed keyword changed.
    pub fn commit<N: Navigator + ?Sized>(
        &mut self,
        new_value: Option<&str>,
        navigator: &mut N,
    ) -> bool {
        let Some(keyword) = new_value.and_then(|raw| Keyword::new(raw).ok()) else {
            let had_keyword = self.keyword.take().is_some();
            if had_keyword {
                debug!("committed keyword cleared");
            }
            return had_keyword;
        };

        if self.keyword.as_ref() == Some(&keyword) {
            return false;
        }

        let path = search_path(&keyword);
        debug!(keyword = %keyword, path = %path, "keyword committed");
        self.keyword = Some(keyword);
        navigator.set_path(&path);
        true
    }
}
