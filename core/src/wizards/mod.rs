// stepwise/src/wizards/mod.rs

//! Concrete wizards built on the shared engine. Each supplies only a context
//! type and a registry factory.

pub mod creation;
pub mod level_up;

pub use creation::CreationDraft;
pub use level_up::{AsiChoice, LevelUpDraft};
