use crate::OutputFormat;
use crate::output::print_json;
use anyhow::{Context, bail};
use shared::models::{Period, SelectionState};
use space_catalog::{CatalogService, Config, display_price, find_by_name, prepare_request};
use std::process::ExitCode;

pub async fn run(
    config: &Config,
    name: &str,
    period: Period,
    equipment: &[String],
    format: OutputFormat,
) -> anyhow::Result<ExitCode> {
    let service = CatalogService::from_config(config)?;
    let views = service.load_views().await?;
    let view = find_by_name(&views, name).with_context(|| format!("Espaço não encontrado: {}", name))?;

    let mut selection = SelectionState::with_period(period);
    for item in equipment {
        let Some(known) = view
            .equipment_names
            .iter()
            .find(|e| e.eq_ignore_ascii_case(item.trim()))
        else {
            bail!("{} não tem o equipamento: {}", view.name, item);
        };
        selection.set_equipment(known, true);
    }

    let request = prepare_request(view, &selection, &config.currency, &config.whatsapp_number);

    if format == OutputFormat::Json {
        print_json(&request)?;
        return Ok(ExitCode::SUCCESS);
    }

    let quote = &request.quote;
    println!("{} ({})", view.name, quote.period.label());
    println!("  Preço base: {}", display_price(quote.base_price, &config.currency));
    println!(
        "  Equipamentos ({}): {}",
        quote.equipment_count,
        display_price(Some(quote.surcharge), &config.currency)
    );
    println!("  Preço final: {}", request.formatted_price);
    if !quote.is_priced() {
        println!("  Sem preço para este período.");
    }
    println!();
    println!("{}", request.text);
    println!();
    println!("{}", request.url);
    Ok(ExitCode::SUCCESS)
}
