//! Reusable view components.

pub mod profile_card;
pub mod protected_route;
