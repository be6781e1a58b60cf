// Tag filtering over the course catalog.
// The engine is synchronous; handlers wrap it behind the shared RwLock in AppState.

pub mod engine;
pub mod handlers;
