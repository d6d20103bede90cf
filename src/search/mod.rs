mod entity_search;
#[cfg(test)]
mod tests;

pub use entity_search::{search, EntityReport, EntityStatus};
