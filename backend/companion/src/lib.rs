pub mod actions;
pub mod dispatcher;
pub mod persona;
pub mod state;
pub mod store;

pub use actions::{ActionDefinition, ActionKind, ActionTable, StatDelta};
pub use dispatcher::{ActionDispatcher, DispatchOutcome};
pub use state::{CompanionMode, CompanionState, Mood};
pub use store::{CompanionStore, StoreSnapshot};
