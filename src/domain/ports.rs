use crate::utils::error::Result;
use async_trait::async_trait;

/// A job-listing API that can be surveyed for vacancies.
///
/// Each board keeps its own wire representation of a vacancy; the engine
/// only ever turns one into a monthly RUB estimate via `monthly_salary`.
#[async_trait]
pub trait JobBoard: Send + Sync {
    type Vacancy: Send;

    fn site_name(&self) -> &'static str;

    /// Fetches every vacancy the board reports for `language`, walking all
    /// result pages. A non-success HTTP status ends pagination cleanly and
    /// whatever was accumulated so far is returned.
    async fn fetch_all(&self, language: &str) -> Result<Vec<Self::Vacancy>>;

    /// Estimated monthly salary in the home currency, or `None` when the
    /// vacancy gives no usable figures (foreign currency, no bounds).
    fn monthly_salary(&self, vacancy: &Self::Vacancy) -> Option<u64>;
}
