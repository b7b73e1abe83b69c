//! Host-facing observer hooks.

pub mod listener;

pub use listener::{CallbackListener, EventLog, InteractionEvent, InteractionListener};
