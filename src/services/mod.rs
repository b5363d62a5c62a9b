//! Service layer.
//!
//! Services hold the stateful parts of a surface: the canonical color, pick
//! requests, and the background coordinator that runs picks for every
//! open surface.

pub mod color_state;
pub mod coordinator;
pub mod pick_session;

// Re-export commonly used types
pub use color_state::{ColorObserver, ColorState, EditOutcome};
pub use coordinator::{spawn_coordinator, ColorPicked, CoordinatorCommand, CoordinatorHandle};
pub use pick_session::{PickOutcome, PickResponse, PickSession};
