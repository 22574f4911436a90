pub mod headhunter;
pub mod superjob;

pub use headhunter::{HeadHunterClient, HeadHunterConfig};
pub use superjob::{SuperJobClient, SuperJobConfig};
