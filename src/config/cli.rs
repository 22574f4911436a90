use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "salary-survey")]
#[command(about = "Compares programmer salaries across HeadHunter and SuperJob")]
pub struct CliArgs {
    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
