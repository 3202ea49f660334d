use crate::OutputFormat;
use crate::output::{NO_RESULTS, SPACE_HEADERS, print_json, render_table, space_row};
use space_catalog::{CatalogService, Config};
use std::process::ExitCode;

pub async fn run(config: &Config, format: OutputFormat) -> anyhow::Result<ExitCode> {
    let service = CatalogService::from_config(config)?;
    let spaces = service.load_unified().await?;

    if format == OutputFormat::Json {
        print_json(&spaces)?;
        return Ok(ExitCode::SUCCESS);
    }

    if spaces.is_empty() {
        println!("{}", NO_RESULTS);
        return Ok(ExitCode::SUCCESS);
    }

    let mut headers = SPACE_HEADERS.to_vec();
    headers.push("Outros Espaços");
    let rows: Vec<Vec<String>> = spaces
        .iter()
        .map(|space| {
            let mut row = space_row(&space.view, &config.currency);
            row.push(space.related_spaces.join(", "));
            row
        })
        .collect();
    print!("{}", render_table(&headers, &rows));
    Ok(ExitCode::SUCCESS)
}
