use crate::core::stats::aggregate_stats;
use crate::domain::model::{SiteReport, StatsByLanguage};
use crate::domain::ports::JobBoard;
use crate::utils::error::Result;

/// Walks the fixed language list against one job board and collects the
/// per-language statistics, one blocking fetch after another.
pub struct SurveyEngine {
    languages: Vec<String>,
}

impl SurveyEngine {
    pub fn new(languages: Vec<String>) -> Self {
        Self { languages }
    }

    pub async fn run<B: JobBoard>(&self, board: &B) -> Result<SiteReport> {
        tracing::info!("Collecting vacancies from {}", board.site_name());

        let mut rows = StatsByLanguage::with_capacity(self.languages.len());
        for language in &self.languages {
            let vacancies = board.fetch_all(language).await?;
            tracing::debug!(
                "{}: {} vacancies found for {}",
                board.site_name(),
                vacancies.len(),
                language
            );

            let estimates: Vec<Option<u64>> = vacancies
                .iter()
                .map(|vacancy| board.monthly_salary(vacancy))
                .collect();
            rows.push((language.clone(), aggregate_stats(&estimates)));
        }

        tracing::info!("{}: surveyed {} languages", board.site_name(), rows.len());
        Ok(SiteReport {
            site_name: board.site_name().to_string(),
            rows,
        })
    }
}
