// stepwise/src/navigation/mod.rs

//! The step-navigation engine: the `StepRegistry<C>` type, projection of the
//! active steps, cursor resolution, traversal, and progress.

pub mod progress;
pub mod projection;
pub mod registry;
pub mod state;
pub mod traversal;

pub use progress::{is_first_step, is_last_step, progress_percent};
pub use projection::resolve_cursor;
pub use registry::{predicate, StepRegistry, StepRegistryBuilder};
pub use state::{NavigationState, StepOverview, StepStatus, StepSummary};
pub use traversal::scan;
