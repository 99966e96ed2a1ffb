//! Session persistence and the per-process session handle.

mod context;
mod storage;

pub use context::{Session, SessionContext};
pub use storage::{
    FileSessionStorage, MemorySessionStorage, SessionStorage, StorageError, StoredSession,
};
