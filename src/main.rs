use clap::Parser;
use salary_survey::utils::{logger, validation::Validate};
use salary_survey::{
    render_table, CliArgs, HeadHunterClient, HeadHunterConfig, SiteReport, SuperJobClient,
    SuperJobConfig, SurveyConfig, SurveyEngine,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();
    logger::init_cli_logger(args.verbose);

    tracing::info!("Starting salary-survey");

    let config = match SurveyConfig::from_env().and_then(|config| {
        config.validate()?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration validation failed: {}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let engine = SurveyEngine::new(config.languages.clone());

    let headhunter_config = HeadHunterConfig::default();
    headhunter_config.validate()?;
    let headhunter = HeadHunterClient::new(headhunter_config);
    let report = engine.run(&headhunter).await?;
    print_report(&report);

    let superjob_config = SuperJobConfig::new(config.superjob_api_key.clone());
    superjob_config.validate()?;
    let superjob = SuperJobClient::new(superjob_config);
    let report = engine.run(&superjob).await?;
    print_report(&report);

    Ok(())
}

fn print_report(report: &SiteReport) {
    let title = format!("{} statistics", report.site_name);
    match render_table(&title, &report.rows) {
        Some(table) => println!("{}", table),
        None => println!("No salary data collected from {}", report.site_name),
    }
}
