//! Query descriptor handed to the result renderer.

use serde::Serialize;

/// Literal appended to the query term to ask the relay for popularity order.
pub const POPULAR_SORT_DIRECTIVE: &str = " sort:popular";

/// Kind of records the renderer should fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubjectKind {
    /// Posts whose content matches the term.
    PostKeyword,
    /// Profiles whose metadata matches the term.
    ProfileKeyword,
}

/// Structured query request for the result renderer.
///
/// Derived from the committed keyword, mode and sort preference. Has no
/// lifecycle of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryDescriptor {
    /// Posts or profiles.
    pub kind: SubjectKind,
    /// Ordered search terms. Always exactly one term.
    pub items: Vec<String>,
    /// Raw keyword; lets the renderer tell result sets apart across rebuilds.
    pub discriminator: String,
    /// Relay order is authoritative; the renderer must not re-sort.
    pub no_sort: bool,
}

impl QueryDescriptor {
    /// Key the renderer mounts under.
    ///
    /// Differs between post and profile results for the same keyword so
    /// that switching tabs starts a fresh result list.
    pub fn render_key(&self) -> String {
        match self.kind {
            SubjectKind::PostKeyword => self.discriminator.clone(),
            SubjectKind::ProfileKeyword => format!("{}_p", self.discriminator),
        }
    }
}

/// Pagination strategy requested from the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FetchMethod {
    /// Page backwards with a bounded `until` cursor.
    #[default]
    LimitUntil,
}

/// Everything the result renderer receives for one render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderRequest {
    /// What to fetch.
    pub subject: QueryDescriptor,
    /// Restrict to top-level posts. Always false here.
    pub posts_only: bool,
    /// How to page through results.
    pub method: FetchMethod,
}
