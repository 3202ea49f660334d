use crate::OutputFormat;
use crate::output::{NO_RESULTS, SPACE_HEADERS, print_json, render_table, space_row};
use shared::models::SearchState;
use space_catalog::{CatalogService, Config, filter};
use std::process::ExitCode;

pub async fn run(config: &Config, search: Option<&str>, format: OutputFormat) -> anyhow::Result<ExitCode> {
    let service = CatalogService::from_config(config)?;
    let views = service.load_views().await?;
    let search = SearchState::new(search.unwrap_or_default());
    let matches = filter(&views, search.term());

    if format == OutputFormat::Json {
        print_json(&matches)?;
        return Ok(ExitCode::SUCCESS);
    }

    if matches.is_empty() {
        println!("{}", NO_RESULTS);
        return Ok(ExitCode::SUCCESS);
    }

    let rows: Vec<Vec<String>> = matches
        .iter()
        .map(|view| space_row(view, &config.currency))
        .collect();
    print!("{}", render_table(&SPACE_HEADERS, &rows));
    Ok(ExitCode::SUCCESS)
}
