//! Terminal rendering for catalog commands

use serde::Serialize;
use shared::models::SpaceView;
use space_catalog::display_price;

pub const SPACE_HEADERS: [&str; 6] = [
    "Espaço",
    "Tipo",
    "Capacidade",
    "Meio Dia",
    "Todo Dia",
    "Equipamentos",
];

pub const NO_RESULTS: &str = "Nenhum espaço encontrado.";

pub fn space_row(view: &SpaceView, currency: &str) -> Vec<String> {
    vec![
        view.name.clone(),
        view.space_type.clone(),
        view.capacity_text(),
        display_price(view.price_half_day, currency),
        display_price(view.price_full_day, currency),
        view.equipment_names.join(", "),
    ]
}

/// Left-aligned columns padded to the widest cell, two spaces apart
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(i) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }

    let mut out = String::new();
    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    push_line(&mut out, &header_cells, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut out, &rule, &widths);
    for row in rows {
        push_line(&mut out, row, &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let last = cells.len().saturating_sub(1);
    for (i, cell) in cells.iter().enumerate() {
        out.push_str(cell);
        if i < last {
            let width = widths.get(i).copied().unwrap_or(0);
            let pad = width.saturating_sub(cell.chars().count());
            out.push_str(&" ".repeat(pad + 2));
        }
    }
    out.push('\n');
}

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_table_pads_columns() {
        let rows = vec![
            vec!["Sala 101".to_string(), "30".to_string()],
            vec!["Auditório A".to_string(), "".to_string()],
        ];
        let table = render_table(&["Espaço", "Capacidade"], &rows);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[0], "Espaço       Capacidade");
        assert_eq!(lines[1], "-----------  ----------");
        assert_eq!(lines[2], "Sala 101     30");
        assert_eq!(lines[3], "Auditório A  ");
    }
}
