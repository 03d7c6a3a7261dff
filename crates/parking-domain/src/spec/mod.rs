//! Composable predicates and the filter that applies them

pub mod filter;
pub mod predicate;
pub mod spot;
pub mod vehicle;

pub use filter::{filter, Filter};
pub use predicate::{and, And, Predicate};
pub use spot::{free_of_size, OccupiedIs, SizeIs};
pub use vehicle::CategoryIs;
