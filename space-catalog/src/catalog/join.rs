//! Join Engine
//!
//! Builds [`SpaceView`]s from the four normalized tables using per-join
//! indexes (equipment by id, links by space, prices by space), so the whole
//! join is O(spaces + equipment + links + prices).
//!
//! Conflict rules:
//! - equipment id collision: first row wins
//! - repeated (space, period) price: last row wins
//! - dangling foreign keys: dropped, or rejected under [`UnresolvedPolicy::Reject`]

use crate::core::{CatalogError, CatalogResult};
use crate::normalize::columns;
use crate::source::TableName;
use rust_decimal::Decimal;
use shared::models::{Equipment, Period, Price, Space, SpaceEquipmentLink, SpaceView};
use std::collections::{HashMap, HashSet};
use std::str::FromStr;
use tracing::debug;

/// What to do with foreign keys that point nowhere
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnresolvedPolicy {
    /// Drop the dangling row from the view
    #[default]
    Drop,
    /// Fail the join with [`CatalogError::UnresolvedReference`]
    Reject,
}

impl FromStr for UnresolvedPolicy {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "drop" => Ok(Self::Drop),
            "reject" | "strict" => Ok(Self::Reject),
            other => Err(CatalogError::Config(format!(
                "unknown unresolved policy '{}'",
                other
            ))),
        }
    }
}

/// Dangling reference found during a join
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unresolved {
    /// Link row naming an equipment id with no Equipment row
    Equipment { space_id: String, equipment_id: String },
    /// Link row naming a space id with no Space row
    LinkSpace { space_id: String },
    /// Price row naming a space id with no Space row
    PriceSpace { space_id: String },
}

impl Unresolved {
    fn into_error(self) -> CatalogError {
        let (table, column, key) = match self {
            Unresolved::Equipment { equipment_id, .. } => {
                (TableName::SpaceEquipment, columns::EQUIPMENT_ID, equipment_id)
            }
            Unresolved::LinkSpace { space_id } => {
                (TableName::SpaceEquipment, columns::SPACE_ID, space_id)
            }
            Unresolved::PriceSpace { space_id } => (TableName::Prices, columns::SPACE_ID, space_id),
        };
        CatalogError::UnresolvedReference { table, column, key }
    }
}

/// Views plus every dangling reference met along the way
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JoinOutput {
    pub views: Vec<SpaceView>,
    pub unresolved: Vec<Unresolved>,
}

/// Join with the configured unresolved-reference policy
#[derive(Debug, Clone, Copy, Default)]
pub struct JoinEngine {
    policy: UnresolvedPolicy,
}

impl JoinEngine {
    pub fn new(policy: UnresolvedPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> UnresolvedPolicy {
        self.policy
    }

    pub fn join(
        &self,
        spaces: &[Space],
        equipment: &[Equipment],
        links: &[SpaceEquipmentLink],
        prices: &[Price],
    ) -> CatalogResult<Vec<SpaceView>> {
        let JoinOutput { views, unresolved } = join_detailed(spaces, equipment, links, prices);

        match self.policy {
            UnresolvedPolicy::Drop => {
                if !unresolved.is_empty() {
                    debug!(dropped = unresolved.len(), "Dropped unresolved references");
                }
                Ok(views)
            }
            UnresolvedPolicy::Reject => match unresolved.into_iter().next() {
                Some(first) => Err(first.into_error()),
                None => Ok(views),
            },
        }
    }
}

/// Join dropping dangling references
pub fn join(
    spaces: &[Space],
    equipment: &[Equipment],
    links: &[SpaceEquipmentLink],
    prices: &[Price],
) -> Vec<SpaceView> {
    join_detailed(spaces, equipment, links, prices).views
}

#[derive(Debug, Default, Clone, Copy)]
struct PeriodPrices {
    half_day: Option<Decimal>,
    full_day: Option<Decimal>,
}

/// Join and report dangling references in input order
pub fn join_detailed(
    spaces: &[Space],
    equipment: &[Equipment],
    links: &[SpaceEquipmentLink],
    prices: &[Price],
) -> JoinOutput {
    // 1. equipment id -> name, first occurrence wins
    let mut equipment_by_id: HashMap<&str, &str> = HashMap::with_capacity(equipment.len());
    for item in equipment {
        equipment_by_id
            .entry(item.id.as_str())
            .or_insert(item.name.as_str());
    }

    // 2. space id -> period prices, later rows overwrite
    let mut prices_by_space: HashMap<&str, PeriodPrices> = HashMap::new();
    for price in prices {
        let entry = prices_by_space.entry(price.space_id.as_str()).or_default();
        match price.period {
            Period::HalfDay => entry.half_day = price.amount,
            Period::FullDay => entry.full_day = price.amount,
        }
    }

    // 3. space id -> links in link-table order
    let mut links_by_space: HashMap<&str, Vec<&SpaceEquipmentLink>> = HashMap::new();
    for link in links {
        links_by_space
            .entry(link.space_id.as_str())
            .or_default()
            .push(link);
    }

    let space_ids: HashSet<&str> = spaces.iter().map(|s| s.id.as_str()).collect();
    let mut unresolved = Vec::new();

    let views = spaces
        .iter()
        .map(|space| {
            let equipment_names = links_by_space
                .get(space.id.as_str())
                .map(|space_links| {
                    space_links
                        .iter()
                        .filter_map(|link| {
                            equipment_by_id
                                .get(link.equipment_id.as_str())
                                .map(|name| name.to_string())
                        })
                        .collect()
                })
                .unwrap_or_default();

            let period_prices = prices_by_space
                .get(space.id.as_str())
                .copied()
                .unwrap_or_default();

            SpaceView {
                id: space.id.clone(),
                name: space.name.clone(),
                space_type: space.space_type.clone(),
                capacity: space.capacity,
                equipment_names,
                price_half_day: period_prices.half_day,
                price_full_day: period_prices.full_day,
            }
        })
        .collect();

    for link in links {
        if !space_ids.contains(link.space_id.as_str()) {
            unresolved.push(Unresolved::LinkSpace {
                space_id: link.space_id.clone(),
            });
        } else if !equipment_by_id.contains_key(link.equipment_id.as_str()) {
            unresolved.push(Unresolved::Equipment {
                space_id: link.space_id.clone(),
                equipment_id: link.equipment_id.clone(),
            });
        }
    }
    for price in prices {
        if !space_ids.contains(price.space_id.as_str()) {
            unresolved.push(Unresolved::PriceSpace {
                space_id: price.space_id.clone(),
            });
        }
    }

    JoinOutput { views, unresolved }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn space(id: &str, name: &str) -> Space {
        Space {
            id: id.to_string(),
            name: name.to_string(),
            space_type: "Sala".to_string(),
            capacity: Some(30),
        }
    }

    fn equip(id: &str, name: &str) -> Equipment {
        Equipment {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    fn link(space_id: &str, equipment_id: &str) -> SpaceEquipmentLink {
        SpaceEquipmentLink {
            space_id: space_id.to_string(),
            equipment_id: equipment_id.to_string(),
            quantity: Some(1),
        }
    }

    fn price(space_id: &str, period: Period, amount: i64) -> Price {
        Price {
            space_id: space_id.to_string(),
            period,
            amount: Some(Decimal::from(amount)),
        }
    }

    #[test]
    fn test_join_resolves_equipment_and_prices() {
        let spaces = vec![space("1", "Room 101")];
        let equipment = vec![equip("1", "Projector")];
        let links = vec![link("1", "1")];
        let prices = vec![
            price("1", Period::HalfDay, 50),
            price("1", Period::FullDay, 300),
        ];

        let views = join(&spaces, &equipment, &links, &prices);

        assert_eq!(views.len(), 1);
        assert_eq!(views[0].equipment_names, vec!["Projector"]);
        assert_eq!(views[0].price_half_day, Some(Decimal::from(50)));
        assert_eq!(views[0].price_full_day, Some(Decimal::from(300)));
    }

    #[test]
    fn test_join_keeps_space_and_link_order() {
        let spaces = vec![space("2", "B"), space("1", "A"), space("3", "C")];
        let equipment = vec![equip("1", "Projetor"), equip("2", "Microfone")];
        let links = vec![link("1", "2"), link("2", "1"), link("1", "1")];

        let views = join(&spaces, &equipment, &links, &[]);

        let names: Vec<&str> = views.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A", "C"]);
        assert_eq!(views[1].equipment_names, vec!["Microfone", "Projetor"]);
        assert!(views[2].equipment_names.is_empty());
        assert_eq!(views[2].price_half_day, None);
    }

    #[test]
    fn test_unresolved_equipment_is_dropped() {
        let spaces = vec![space("1", "Sala 101")];
        let equipment = vec![equip("1", "Projetor")];
        let links = vec![link("1", "99"), link("1", "1")];

        let output = join_detailed(&spaces, &equipment, &links, &[]);

        assert_eq!(output.views[0].equipment_names, vec!["Projetor"]);
        assert_eq!(
            output.unresolved,
            vec![Unresolved::Equipment {
                space_id: "1".to_string(),
                equipment_id: "99".to_string()
            }]
        );
    }

    #[test]
    fn test_duplicate_price_last_write_wins() {
        let spaces = vec![space("1", "Sala 101")];
        let prices = vec![
            price("1", Period::HalfDay, 50),
            price("1", Period::HalfDay, 75),
        ];

        let views = join(&spaces, &[], &[], &prices);
        assert_eq!(views[0].price_half_day, Some(Decimal::from(75)));
    }

    #[test]
    fn test_later_empty_price_clears_earlier() {
        let spaces = vec![space("1", "Sala 101")];
        let mut prices = vec![price("1", Period::FullDay, 300)];
        prices.push(Price {
            space_id: "1".to_string(),
            period: Period::FullDay,
            amount: None,
        });

        let views = join(&spaces, &[], &[], &prices);
        assert_eq!(views[0].price_full_day, None);
    }

    #[test]
    fn test_equipment_id_collision_first_wins() {
        let spaces = vec![space("1", "Sala 101")];
        let equipment = vec![equip("1", "Projetor"), equip("1", "Televisor")];
        let links = vec![link("1", "1")];

        let views = join(&spaces, &equipment, &links, &[]);
        assert_eq!(views[0].equipment_names, vec!["Projetor"]);
    }

    #[test]
    fn test_orphan_rows_are_reported() {
        let spaces = vec![space("1", "Sala 101")];
        let equipment = vec![equip("1", "Projetor")];
        let links = vec![link("7", "1")];
        let prices = vec![price("8", Period::HalfDay, 10)];

        let output = join_detailed(&spaces, &equipment, &links, &prices);

        assert!(output.views[0].equipment_names.is_empty());
        assert_eq!(
            output.unresolved,
            vec![
                Unresolved::LinkSpace { space_id: "7".to_string() },
                Unresolved::PriceSpace { space_id: "8".to_string() },
            ]
        );
    }

    #[test]
    fn test_join_is_deterministic() {
        let spaces = vec![space("1", "A"), space("2", "B")];
        let equipment = vec![equip("1", "Projetor"), equip("2", "Microfone")];
        let links = vec![link("2", "2"), link("1", "1"), link("2", "1")];
        let prices = vec![price("2", Period::FullDay, 120), price("1", Period::HalfDay, 40)];

        let first = join(&spaces, &equipment, &links, &prices);
        let second = join(&spaces, &equipment, &links, &prices);
        assert_eq!(first, second);
    }

    #[test]
    fn test_engine_policies() {
        let spaces = vec![space("1", "Sala 101")];
        let links = vec![link("1", "404")];

        let dropped = JoinEngine::new(UnresolvedPolicy::Drop)
            .join(&spaces, &[], &links, &[])
            .unwrap();
        assert!(dropped[0].equipment_names.is_empty());

        let err = JoinEngine::new(UnresolvedPolicy::Reject)
            .join(&spaces, &[], &links, &[])
            .unwrap_err();
        match err {
            CatalogError::UnresolvedReference { table, column, key } => {
                assert_eq!(table, TableName::SpaceEquipment);
                assert_eq!(column, "Equipamento_ID");
                assert_eq!(key, "404");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("DROP".parse::<UnresolvedPolicy>().unwrap(), UnresolvedPolicy::Drop);
        assert_eq!("strict".parse::<UnresolvedPolicy>().unwrap(), UnresolvedPolicy::Reject);
        assert!("ignore".parse::<UnresolvedPolicy>().is_err());
        assert_eq!(JoinEngine::default().policy(), UnresolvedPolicy::Drop);
        assert_eq!(
            JoinEngine::new(UnresolvedPolicy::Reject).policy(),
            UnresolvedPolicy::Reject
        );
    }
}
