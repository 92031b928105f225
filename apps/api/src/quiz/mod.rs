// Quiz: answer values, the question catalog, and profile scoring.
// Scoring is pure and synchronous; handlers are the only async code here.

pub mod catalog;
pub mod handlers;
pub mod scoring;
pub mod value;
