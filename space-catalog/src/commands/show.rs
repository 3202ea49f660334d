use crate::OutputFormat;
use crate::output::print_json;
use anyhow::Context;
use shared::models::Period;
use space_catalog::{CatalogService, Config, display_price, find_by_name};
use std::process::ExitCode;

pub async fn run(config: &Config, name: &str, format: OutputFormat) -> anyhow::Result<ExitCode> {
    let service = CatalogService::from_config(config)?;
    let views = service.load_views().await?;
    let view = find_by_name(&views, name).with_context(|| format!("Espaço não encontrado: {}", name))?;

    if format == OutputFormat::Json {
        print_json(view)?;
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", view.name);
    println!("  Tipo de Espaço: {}", view.space_type);
    println!("  Capacidade: {}", view.capacity_text());
    for period in Period::ALL {
        println!(
            "  {}: {}",
            period.label(),
            display_price(view.price_for(period), &config.currency)
        );
    }
    if view.equipment_names.is_empty() {
        println!("  Equipamentos: -");
    } else {
        println!("  Equipamentos:");
        for item in &view.equipment_names {
            println!("    - {}", item);
        }
    }
    Ok(ExitCode::SUCCESS)
}
