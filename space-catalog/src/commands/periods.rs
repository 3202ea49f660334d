use crate::OutputFormat;
use crate::output::print_json;
use space_catalog::{CatalogService, Config};
use std::process::ExitCode;

pub async fn run(config: &Config, format: OutputFormat) -> anyhow::Result<ExitCode> {
    let service = CatalogService::from_config(config)?;
    let cards = service.load_availability().await?;

    if format == OutputFormat::Json {
        print_json(&cards)?;
        return Ok(ExitCode::SUCCESS);
    }

    if cards.is_empty() {
        println!("Nenhum período disponível.");
        return Ok(ExitCode::SUCCESS);
    }

    for card in &cards {
        println!("{}", card.space_name);
        for entry in &card.entries {
            println!("  - {}", entry);
        }
    }
    Ok(ExitCode::SUCCESS)
}
