pub mod aggregate;
pub mod correctness;
pub mod error;
pub mod feedback;
pub mod outcome;
pub mod points;
pub mod report;
pub mod summary;

pub use correctness::CorrectnessLevel;
pub use points::{PointTotals, Points};
pub use summary::Summarize;
