use crate::domain::model::LanguageStats;

/// Folds per-vacancy salary estimates into `LanguageStats`.
///
/// Vacancies without an estimate still count as found but are excluded from
/// the processed count and the average. Returns `None` when there is nothing
/// to average, so the division below can never hit zero.
pub fn aggregate_stats(estimates: &[Option<u64>]) -> Option<LanguageStats> {
    let vacancies_found = estimates.len();
    if vacancies_found == 0 {
        return None;
    }

    let salaries: Vec<u64> = estimates.iter().flatten().copied().collect();
    let vacancies_processed = salaries.len();
    if vacancies_processed == 0 {
        return None;
    }

    let average_salary = salaries.iter().sum::<u64>() / vacancies_processed as u64;

    Some(LanguageStats {
        vacancies_found,
        vacancies_processed,
        average_salary,
    })
}
