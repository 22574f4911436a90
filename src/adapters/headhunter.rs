use crate::core::salary::estimate_salary;
use crate::domain::ports::JobBoard;
use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

const HH_API_URL: &str = "https://api.hh.ru/vacancies";
const HH_USER_AGENT: &str = "salary-survey";
const HOME_CURRENCY: &str = "RUR";
const MOSCOW_AREA: u32 = 1;

#[derive(Debug, Clone)]
pub struct HeadHunterConfig {
    pub base_url: String,
    pub area: u32,
}

impl Default for HeadHunterConfig {
    fn default() -> Self {
        Self {
            base_url: HH_API_URL.to_string(),
            area: MOSCOW_AREA,
        }
    }
}

impl Validate for HeadHunterConfig {
    fn validate(&self) -> Result<()> {
        validate_url("headhunter base_url", &self.base_url)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct HhVacancy {
    #[serde(default)]
    pub salary: Option<HhSalary>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HhSalary {
    pub from: Option<i64>,
    pub to: Option<i64>,
    pub currency: Option<String>,
}

#[derive(Debug, Deserialize)]
struct HhSearchPage {
    items: Vec<HhVacancy>,
    pages: u32,
}

pub struct HeadHunterClient {
    client: Client,
    config: HeadHunterConfig,
}

impl HeadHunterClient {
    pub fn new(config: HeadHunterConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl JobBoard for HeadHunterClient {
    type Vacancy = HhVacancy;

    fn site_name(&self) -> &'static str {
        "HeadHunter"
    }

    async fn fetch_all(&self, language: &str) -> Result<Vec<HhVacancy>> {
        let mut vacancies = Vec::new();
        let mut page = 0u32;
        let mut total_pages = 1u32;

        while page < total_pages {
            tracing::debug!("HeadHunter request: language={} page={}", language, page);
            let response = self
                .client
                .get(&self.config.base_url)
                .header("User-Agent", HH_USER_AGENT)
                .query(&[
                    ("area", self.config.area.to_string()),
                    ("text", format!("программист {}", language)),
                    ("page", page.to_string()),
                ])
                .send()
                .await?;

            if !response.status().is_success() {
                tracing::warn!(
                    "HeadHunter returned {} for {} page {}, stopping pagination",
                    response.status(),
                    language,
                    page
                );
                break;
            }

            let body: HhSearchPage = response.json().await?;
            vacancies.extend(body.items);
            total_pages = body.pages;
            page += 1;
        }

        Ok(vacancies)
    }

    fn monthly_salary(&self, vacancy: &HhVacancy) -> Option<u64> {
        let salary = vacancy.salary.as_ref()?;
        if salary.currency.as_deref() != Some(HOME_CURRENCY) {
            return None;
        }
        estimate_salary(salary.from, salary.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::stats::aggregate_stats;
    use serde_json::json;

    fn client() -> HeadHunterClient {
        HeadHunterClient::new(HeadHunterConfig::default())
    }

    fn vacancy(value: serde_json::Value) -> HhVacancy {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_rub_salary_range_is_estimated() {
        let v = vacancy(json!({"salary": {"currency": "RUR", "from": 100, "to": 200}}));
        assert_eq!(client().monthly_salary(&v), Some(150));
    }

    #[test]
    fn test_foreign_currency_is_skipped() {
        let v = vacancy(json!({"salary": {"currency": "USD", "from": 50, "to": 60}}));
        assert_eq!(client().monthly_salary(&v), None);
    }

    #[test]
    fn test_missing_salary_is_skipped() {
        assert_eq!(client().monthly_salary(&vacancy(json!({"salary": null}))), None);
        assert_eq!(client().monthly_salary(&vacancy(json!({}))), None);
    }

    #[test]
    fn test_null_bounds_fall_back_to_single_bound_rules() {
        let v = vacancy(json!({"salary": {"currency": "RUR", "from": 100, "to": null}}));
        assert_eq!(client().monthly_salary(&v), Some(120));

        let v = vacancy(json!({"salary": {"currency": "RUR", "from": null, "to": 100}}));
        assert_eq!(client().monthly_salary(&v), Some(80));
    }

    #[test]
    fn test_mixed_listing_aggregates_rub_only() {
        let listing = [
            json!({"salary": {"currency": "RUR", "from": 100, "to": 200}}),
            json!({"salary": {"currency": "USD", "from": 50, "to": 60}}),
            json!({"salary": null}),
        ];
        let client = client();
        let estimates: Vec<Option<u64>> = listing
            .into_iter()
            .map(|raw| client.monthly_salary(&vacancy(raw)))
            .collect();

        let stats = aggregate_stats(&estimates).unwrap();
        assert_eq!(stats.vacancies_found, 3);
        assert_eq!(stats.vacancies_processed, 1);
        assert_eq!(stats.average_salary, 150);
    }
}
