//! Mirror Node REST API response models.
//!
//! Field names are snake_case to match Mirror Node JSON exactly, and list
//! endpoints wrap their items in [`links::Page`] with a single HATEOAS
//! `next` link.

pub mod accounts;
pub mod airdrops;
pub mod hcs;
pub mod hts;
pub mod links;
pub mod staking;
pub mod transactions;

pub use links::{Links, Page};
