use crate::core::salary::estimate_salary;
use crate::domain::ports::JobBoard;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

const SJ_API_URL: &str = "https://api.superjob.ru/2.0/vacancies/";
const HOME_CURRENCY: &str = "rub";
const MOSCOW_TOWN: u32 = 4;
// SuperJob catalogue 48: development / programming
const DEVELOPMENT_CATALOGUE: u32 = 48;
const PAGE_SIZE: u32 = 5;

#[derive(Debug, Clone)]
pub struct SuperJobConfig {
    pub base_url: String,
    pub api_key: String,
    pub town: u32,
    pub catalogue: u32,
    pub page_size: u32,
}

impl SuperJobConfig {
    pub fn new(api_key: String) -> Self {
        Self {
            base_url: SJ_API_URL.to_string(),
            api_key,
            town: MOSCOW_TOWN,
            catalogue: DEVELOPMENT_CATALOGUE,
            page_size: PAGE_SIZE,
        }
    }
}

impl Validate for SuperJobConfig {
    fn validate(&self) -> Result<()> {
        validate_url("superjob base_url", &self.base_url)?;
        validate_non_empty_string("superjob api_key", &self.api_key)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SjVacancy {
    pub payment_from: i64,
    pub payment_to: i64,
    pub currency: String,
}

#[derive(Debug, Deserialize)]
struct SjSearchPage {
    objects: Vec<SjVacancy>,
    more: bool,
}

pub struct SuperJobClient {
    client: Client,
    config: SuperJobConfig,
}

impl SuperJobClient {
    pub fn new(config: SuperJobConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl JobBoard for SuperJobClient {
    type Vacancy = SjVacancy;

    fn site_name(&self) -> &'static str {
        "SuperJob"
    }

    async fn fetch_all(&self, language: &str) -> Result<Vec<SjVacancy>> {
        let mut vacancies = Vec::new();
        let mut page = 0u32;

        loop {
            tracing::debug!("SuperJob request: language={} page={}", language, page);
            let response = self
                .client
                .get(&self.config.base_url)
                .header("X-Api-App-Id", &self.config.api_key)
                .query(&[
                    ("page", page.to_string()),
                    ("count", self.config.page_size.to_string()),
                    ("keyword", language.to_string()),
                    ("town", self.config.town.to_string()),
                    ("catalogues", self.config.catalogue.to_string()),
                    ("no_agreement", "1".to_string()),
                ])
                .send()
                .await?;

            if !response.status().is_success() {
                tracing::warn!(
                    "SuperJob returned {} for {} page {}, stopping pagination",
                    response.status(),
                    language,
                    page
                );
                break;
            }

            let body: SjSearchPage = response.json().await?;
            vacancies.extend(body.objects);
            if !body.more {
                break;
            }
            page += 1;
        }

        Ok(vacancies)
    }

    fn monthly_salary(&self, vacancy: &SjVacancy) -> Option<u64> {
        if vacancy.currency != HOME_CURRENCY {
            return None;
        }
        estimate_salary(Some(vacancy.payment_from), Some(vacancy.payment_to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::stats::aggregate_stats;
    use serde_json::json;

    fn client() -> SuperJobClient {
        SuperJobClient::new(SuperJobConfig::new("test-key".to_string()))
    }

    fn vacancy(value: serde_json::Value) -> SjVacancy {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_rub_payment_range_is_estimated() {
        let v = vacancy(json!({"currency": "rub", "payment_from": 100, "payment_to": 200}));
        assert_eq!(client().monthly_salary(&v), Some(150));
    }

    #[test]
    fn test_foreign_currency_is_skipped() {
        let v = vacancy(json!({"currency": "usd", "payment_from": 100, "payment_to": 200}));
        assert_eq!(client().monthly_salary(&v), None);
    }

    #[test]
    fn test_zero_payments_give_no_estimate() {
        let v = vacancy(json!({"currency": "rub", "payment_from": 0, "payment_to": 0}));
        assert_eq!(client().monthly_salary(&v), None);
    }

    #[test]
    fn test_listing_with_unpriced_vacancy_aggregates_priced_only() {
        let listing = [
            json!({"currency": "rub", "payment_from": 0, "payment_to": 0}),
            json!({"currency": "rub", "payment_from": 100, "payment_to": 200}),
        ];
        let client = client();
        let estimates: Vec<Option<u64>> = listing
            .into_iter()
            .map(|raw| client.monthly_salary(&vacancy(raw)))
            .collect();

        let stats = aggregate_stats(&estimates).unwrap();
        assert_eq!(stats.vacancies_found, 2);
        assert_eq!(stats.vacancies_processed, 1);
        assert_eq!(stats.average_salary, 150);
    }

    #[test]
    fn test_missing_api_key_fails_validation() {
        assert!(SuperJobConfig::new(String::new()).validate().is_err());
        assert!(SuperJobConfig::new("key".to_string()).validate().is_ok());
    }
}
