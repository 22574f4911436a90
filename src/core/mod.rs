pub mod salary;
pub mod stats;
pub mod survey;
pub mod table;

pub use crate::domain::model::{LanguageStats, SiteReport, StatsByLanguage};
pub use crate::domain::ports::JobBoard;
pub use crate::utils::error::Result;
pub use salary::estimate_salary;
pub use stats::aggregate_stats;
pub use survey::SurveyEngine;
pub use table::render_table;
