pub mod legacy;
pub mod list;
pub mod periods;
pub mod quote;
pub mod show;
