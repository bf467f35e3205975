pub mod criteria;
pub mod engine;
pub mod related;

pub use criteria::FilterCriteria;
pub use engine::search;
pub use related::{related, DEFAULT_RELATED_LIMIT};
