mod document_builder;
mod summary_builder;

pub use document_builder::DocumentBuilder;
pub use summary_builder::{SummaryBuilder, MAX_LISTED_DEPENDENCIES};
