//! Wire types shared between the bakery backend and the admin panel.

pub mod domain;
pub mod shared;
