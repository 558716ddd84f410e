//! Query descriptor construction (pure).
//!
//! The descriptor depends on exactly three inputs: committed keyword, search
//! mode and sort preference. Nothing else feeds into it.

use crate::model::{
    FetchMethod, Keyword, QueryDescriptor, RenderRequest, SearchMode, SortPreference,
    SubjectKind, POPULAR_SORT_DIRECTIVE,
};

/// Build the descriptor for the result renderer.
///
/// Returns `None` when no keyword is committed: no query is issued for an
/// empty keyword.
pub fn build_descriptor(
    keyword: Option<&Keyword>,
    mode: SearchMode,
    sort: SortPreference,
) -> Option<QueryDescriptor> {
    let keyword = keyword?;
    let relay_sorted = mode == SearchMode::ProfileSearch && sort == SortPreference::Popular;

    let kind = match mode {
        SearchMode::PostSearch => SubjectKind::PostKeyword,
        SearchMode::ProfileSearch => SubjectKind::ProfileKeyword,
    };

    // The sort directive travels inside the term itself
    let term = if relay_sorted {
        format!("{}{}", keyword.as_str(), POPULAR_SORT_DIRECTIVE)
    } else {
        keyword.as_str().to_string()
    };

    Some(QueryDescriptor {
        kind,
        items: vec![term],
        discriminator: keyword.as_str().to_string(),
        no_sort: relay_sorted,
    })
}

/// Wrap a descriptor with the fixed renderer options used by the search screen.
pub fn build_render_request(subject: QueryDescriptor) -> RenderRequest {
    RenderRequest {
        subject,
        posts_only: false,
        method: FetchMethod::LimitUntil,
    }
}
