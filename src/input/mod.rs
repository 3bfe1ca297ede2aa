pub mod events;
pub mod handler;

// Re-export the essential types
pub use events::{MapEvent, MapEventKind};
pub use handler::{EventManager, ListenerId};
