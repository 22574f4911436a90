pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::{HeadHunterClient, HeadHunterConfig, SuperJobClient, SuperJobConfig};
pub use crate::config::{CliArgs, SurveyConfig, DEFAULT_LANGUAGES};
pub use crate::core::{render_table, SurveyEngine};
pub use crate::domain::model::{LanguageStats, SiteReport};
pub use crate::utils::error::{Result, SurveyError};
