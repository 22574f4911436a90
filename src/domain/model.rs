/// Aggregated salary statistics for one language on one job board.
///
/// A value of this type only exists when at least one vacancy yielded a
/// usable salary estimate, so `average_salary` is always well-defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageStats {
    pub vacancies_found: usize,
    pub vacancies_processed: usize,
    pub average_salary: u64,
}

/// Per-language statistics in the fixed survey order. `None` marks a
/// language with no usable salary data on this board.
pub type StatsByLanguage = Vec<(String, Option<LanguageStats>)>;

#[derive(Debug, Clone)]
pub struct SiteReport {
    pub site_name: String,
    pub rows: StatsByLanguage,
}
