// src/lib.rs

//! Stepwise: a predicate-driven step navigation engine for multi-step wizards.
//!
//! Stepwise takes an ordered list of steps, each with independent visibility
//! and skip predicates evaluated against live application state, and derives:
//!  - The subset of steps currently relevant (the active steps).
//!  - The user's position within that subset.
//!  - Forward, backward and direct traversal that respects the predicates.
//!  - A progress percentage.
//!
//! The engine is stateless between calls and never fails: a missing step, an
//! unresolved cursor or an exhausted scan is simply "no target".

pub mod core;
pub mod error;
pub mod navigation;
pub mod routes;
pub mod session;
pub mod wizards;

// --- Re-exports for the Public API ---

pub use crate::core::context_data::ContextData;
pub use crate::core::control::{Direction, NavigationOutcome};
pub use crate::core::step::{StepDescriptor, StepPredicate};

pub use crate::navigation::progress::{is_first_step, is_last_step, progress_percent};
pub use crate::navigation::projection::resolve_cursor;
pub use crate::navigation::registry::{predicate, StepRegistry, StepRegistryBuilder};
pub use crate::navigation::state::{NavigationState, StepOverview, StepStatus, StepSummary};

pub use crate::routes::{PathRoutes, RouteMap};
pub use crate::session::{Navigator, WizardSession};

pub use crate::error::{StepwiseError, StepwiseResult};

/*
    Core Workflow:
    1. Define a context struct `MyDraft` holding the wizard's choices.
    2. Build a `StepRegistry<MyDraft>` once per session, giving each
       `StepDescriptor` its `visible_when` / `skip_when` predicates.
    3. Wrap the draft in `ContextData<MyDraft>` so the UI can mutate it.
    4. Either query the registry directly with a borrowed draft and the
       current step name (`next_target`, `navigation_state`, ...), or
    5. Create a `WizardSession` with a `RouteMap` and a `Navigator`, and call
       `session.next().await`, `session.previous().await`, `session.go_to(name).await`.
*/
