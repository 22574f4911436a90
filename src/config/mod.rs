pub mod cli;

pub use cli::CliArgs;

use crate::utils::error::{Result, SurveyError};
use crate::utils::validation::{validate_non_empty_string, Validate};

/// Languages surveyed on both boards, in report order.
pub const DEFAULT_LANGUAGES: [&str; 15] = [
    "Python",
    "Java",
    "Javascript",
    "TypeScript",
    "Swift",
    "Scala",
    "Objective-C",
    "Shell",
    "Go",
    "C",
    "PHP",
    "Ruby",
    "c++",
    "c#",
    "1c",
];

pub const SUPERJOB_KEY_VAR: &str = "SUPERJOB_API_KEY";

#[derive(Debug, Clone)]
pub struct SurveyConfig {
    pub languages: Vec<String>,
    pub superjob_api_key: String,
}

impl SurveyConfig {
    /// Reads the SuperJob secret from the environment, seeding it from a
    /// local `.env` file when one exists. HeadHunter needs no credential.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();

        let superjob_api_key =
            std::env::var(SUPERJOB_KEY_VAR).map_err(|_| SurveyError::ConfigError {
                message: format!(
                    "{} is not set (expected in the environment or a local .env file)",
                    SUPERJOB_KEY_VAR
                ),
            })?;

        Ok(Self {
            languages: DEFAULT_LANGUAGES.iter().map(|s| s.to_string()).collect(),
            superjob_api_key,
        })
    }
}

impl Validate for SurveyConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("superjob_api_key", &self.superjob_api_key)?;
        if self.languages.is_empty() {
            return Err(SurveyError::ConfigError {
                message: "languages: survey list cannot be empty".to_string(),
            });
        }
        Ok(())
    }
}
