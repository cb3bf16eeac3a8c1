// Candidate intake: text normalization, intent matching and candidate scoring,
// plus the HTTP handlers and append-only storage built on top of them.

pub mod catalog;
pub mod handlers;
pub mod intent;
pub mod normalize;
pub mod responses;
pub mod scoring;
pub mod store;
