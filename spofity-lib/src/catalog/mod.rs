//! Static catalog data: genres, plans and searchable items.

mod genre;
mod plan;
mod search;

pub use genre::*;
pub use plan::*;
pub use search::*;
