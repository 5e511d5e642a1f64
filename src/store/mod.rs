pub mod retention;
pub mod session_log;
pub mod storage;

pub use retention::RetentionPolicy;
pub use session_log::{
    AppendOutcome, LoadOutcome, STORAGE_KEY, SaveOutcome, SessionLogStore, parse_log,
    serialize_log,
};
pub use storage::{KeyValueStorage, MemoryStorage};
