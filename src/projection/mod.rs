//! Compound-interest and real-return projections

mod state;
mod engine;
mod timeline;
mod real_return;

pub use state::ProjectionState;
pub use engine::{project_compound_interest, ProjectionConfig, ProjectionEngine};
pub use timeline::{sample_yearly, CompoundInterestResult, TimelineEntry};
pub use real_return::{project_real_return, real_rate, RealReturnEntry, RealReturnResult};
