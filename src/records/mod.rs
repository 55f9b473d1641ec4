pub mod finders;
pub mod hall_of_fame;
pub mod sessions;

pub use finders::*;
pub use hall_of_fame::{hall_of_fame, HallOfFame, RecordEntry, RecordKind};
pub use sessions::{group_by_session, session_key, Sessions};
