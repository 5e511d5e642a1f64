pub mod panel_settings;
pub mod session_kind;
pub mod session_record;
pub mod storage_stats;

pub use panel_settings::PanelSettings;
pub use session_kind::SessionKind;
pub use session_record::SessionRecord;
pub use storage_stats::StorageStats;
