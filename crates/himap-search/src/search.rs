use himap_core::types::School;

/// Suggestion cap used by the search box.
pub const DEFAULT_LIMIT: usize = 20;

/// Case-insensitive substring matcher over name, address and region.
///
/// Results keep collection order; there is no ranking beyond match or miss.
#[derive(Debug, Clone, Copy)]
pub struct SearchMatcher {
    limit: usize,
}

impl Default for SearchMatcher {
    fn default() -> Self { Self { limit: DEFAULT_LIMIT } }
}

impl SearchMatcher {
    pub fn new(limit: usize) -> Self { Self { limit } }

    pub fn limit(&self) -> usize { self.limit }

    /// An empty query returns nothing rather than everything.
    pub fn search<'a>(&self, records: &'a [School], query: &str) -> Vec<&'a School> {
        if query.is_empty() { return Vec::new(); }
        let needle = query.to_lowercase();
        let hits: Vec<&School> = records.iter().filter(|s| matches(s, &needle)).take(self.limit).collect();
        tracing::trace!(query, hits = hits.len(), "search");
        hits
    }
}

fn matches(school: &School, needle: &str) -> bool {
    [&school.name, &school.address, &school.region]
        .into_iter()
        .any(|field| field.to_lowercase().contains(needle))
}
