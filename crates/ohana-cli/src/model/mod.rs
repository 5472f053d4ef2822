pub mod score_store;
pub mod theme;
