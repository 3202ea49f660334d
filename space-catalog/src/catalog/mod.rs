//! Catalog assembly: join, search and availability grouping

pub mod availability;
pub mod join;
pub mod loader;
pub mod search;

pub use availability::group_by_space;
pub use join::{JoinEngine, JoinOutput, Unresolved, UnresolvedPolicy, join, join_detailed};
pub use loader::{CatalogTables, load_tables};
pub use search::{filter, find_by_name};
