//! Rental request hand-off
//!
//! Builds the pre-filled request text and the messaging link that carries
//! it. Nothing here sends anything.

use crate::pricing::{Quote, display_price};
use serde::Serialize;
use shared::models::{Period, SelectionState, SpaceView};

const MESSAGE_BASE_URL: &str = "https://wa.me";

/// Request text for a space, period, formatted price and picked equipment
///
/// The equipment line is left out when nothing is picked.
pub fn build_request_text(
    space: &SpaceView,
    period: Period,
    final_price: &str,
    selected_equipment: &[String],
) -> String {
    let mut lines = vec![
        format!("Olá! Gostaria de solicitar o espaço: {}", space.name),
        format!("Tipo de Espaço: {}", space.space_type),
        format!("Capacidade: {}", space.capacity_text()),
        format!("Período: {}", period.label()),
        format!("Preço de Aluguer: {}", final_price),
    ];
    if !selected_equipment.is_empty() {
        lines.push(format!(
            "Equipamentos de Apoio: {}",
            selected_equipment.join(", ")
        ));
    }
    lines.push("Solicitação feita via site.".to_string());
    lines.join("\n")
}

/// Messaging link with the text as its `text` query parameter
pub fn build_request_url(number: &str, text: &str) -> String {
    format!(
        "{}/{}?text={}",
        MESSAGE_BASE_URL,
        number.trim_start_matches('+'),
        urlencoding::encode(text)
    )
}

/// Everything the presentation layer needs to open a request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalRequest {
    pub quote: Quote,
    pub formatted_price: String,
    pub text: String,
    pub url: String,
}

/// Price the selection and build the request text and link for it
pub fn prepare_request(
    space: &SpaceView,
    selection: &SelectionState,
    currency: &str,
    number: &str,
) -> RentalRequest {
    let quote = crate::pricing::quote(space, selection);
    let formatted_price = display_price(Some(quote.final_price), currency);
    let text = build_request_text(
        space,
        quote.period,
        &formatted_price,
        selection.selected_equipment(),
    );
    let url = build_request_url(number, &text);

    RentalRequest {
        quote,
        formatted_price,
        text,
        url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn room() -> SpaceView {
        SpaceView {
            id: "1".to_string(),
            name: "Room 101".to_string(),
            space_type: "Room".to_string(),
            capacity: Some(30),
            equipment_names: vec!["Projector".to_string()],
            price_half_day: Some(Decimal::from(50)),
            price_full_day: Some(Decimal::from(300)),
        }
    }

    #[test]
    fn test_request_text_with_equipment() {
        let text = build_request_text(
            &room(),
            Period::FullDay,
            "330 AOA",
            &["Projector".to_string(), "Microphone".to_string()],
        );

        assert_eq!(
            text,
            "Olá! Gostaria de solicitar o espaço: Room 101\n\
             Tipo de Espaço: Room\n\
             Capacidade: 30\n\
             Período: Todo dia\n\
             Preço de Aluguer: 330 AOA\n\
             Equipamentos de Apoio: Projector, Microphone\n\
             Solicitação feita via site."
        );
    }

    #[test]
    fn test_request_text_omits_empty_equipment() {
        let mut view = room();
        view.capacity = None;
        let text = build_request_text(&view, Period::HalfDay, "50 AOA", &[]);

        assert!(!text.contains("Equipamentos de Apoio"));
        assert!(text.contains("Capacidade: \n"));
        assert!(text.ends_with("Solicitação feita via site."));
    }

    #[test]
    fn test_request_url_encoding() {
        let url = build_request_url("+244923259580", "Olá!\nSala 1");
        assert_eq!(url, "https://wa.me/244923259580?text=Ol%C3%A1%21%0ASala%201");
    }

    #[test]
    fn test_prepare_request() {
        let mut selection = SelectionState::with_period(Period::FullDay);
        selection.set_equipment("Projector", true);

        let request = prepare_request(&room(), &selection, "AOA", "244923259580");

        assert_eq!(request.quote.final_price, Decimal::from(330));
        assert_eq!(request.formatted_price, "330 AOA");
        assert!(request.text.contains("Preço de Aluguer: 330 AOA"));
        assert!(request.text.contains("Equipamentos de Apoio: Projector"));
        assert!(request.url.starts_with("https://wa.me/244923259580?text=Ol%C3%A1"));
    }
}
