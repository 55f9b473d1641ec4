mod collection;
pub mod models;
pub mod normalize;

pub use collection::OrderedGroups;
pub use models::*;
pub use normalize::{normalize_row, normalize_rows, NormalizeError, RawEventRow};
