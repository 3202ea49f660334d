//! Free-text search over joined views

use shared::models::SpaceView;

/// Views matching `term` as a case-insensitive substring, in input order
///
/// Checked fields: name, type, capacity, both prices and every equipment
/// name. An empty term matches everything.
pub fn filter<'a>(views: &'a [SpaceView], term: &str) -> Vec<&'a SpaceView> {
    if term.is_empty() {
        return views.iter().collect();
    }
    let needle = term.to_lowercase();
    views.iter().filter(|view| matches(view, &needle)).collect()
}

/// `needle` must already be lowercase
fn matches(view: &SpaceView, needle: &str) -> bool {
    let contains = |text: &str| text.to_lowercase().contains(needle);

    contains(&view.name)
        || contains(&view.space_type)
        || view.capacity.is_some_and(|c| contains(&c.to_string()))
        || view.price_half_day.is_some_and(|p| contains(&p.to_string()))
        || view.price_full_day.is_some_and(|p| contains(&p.to_string()))
        || view.equipment_names.iter().any(|e| contains(e))
}

/// Exact name lookup, as used when a card or table row is opened
pub fn find_by_name<'a>(views: &'a [SpaceView], name: &str) -> Option<&'a SpaceView> {
    views.iter().find(|view| view.name == name)
}
