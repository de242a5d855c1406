pub mod config;
pub mod lookup;
pub mod regions;
pub mod view;
