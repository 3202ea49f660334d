//! Period availability cards

use crate::normalize::AvailabilityEntry;
use shared::models::PeriodAvailability;
use std::collections::HashMap;

/// Group entries by space name, in order of first appearance
pub fn group_by_space(entries: &[AvailabilityEntry]) -> Vec<PeriodAvailability> {
    let mut groups: Vec<PeriodAvailability> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for entry in entries {
        let slot = *index.entry(entry.space_name.as_str()).or_insert_with(|| {
            groups.push(PeriodAvailability {
                space_name: entry.space_name.clone(),
                entries: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].entries.push(entry.label.clone());
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(space: &str, label: &str) -> AvailabilityEntry {
        AvailabilityEntry {
            space_name: space.to_string(),
            label: label.to_string(),
        }
    }

    #[test]
    fn test_group_by_space_keeps_first_appearance_order() {
        let entries = vec![
            entry("Sala 101", "Meio dia"),
            entry("Auditório A", "Todo dia"),
            entry("Sala 101", "Todo dia"),
        ];
        let groups = group_by_space(&entries);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].space_name, "Sala 101");
        assert_eq!(groups[0].entries, vec!["Meio dia", "Todo dia"]);
        assert_eq!(groups[1].space_name, "Auditório A");
        assert_eq!(groups[1].entries, vec!["Todo dia"]);
    }

    #[test]
    fn test_group_empty() {
        assert!(group_by_space(&[]).is_empty());
    }
}
