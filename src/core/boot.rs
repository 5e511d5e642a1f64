use crate::config::Config;
use crate::core::diagnostics::report_warning;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::panel::PanelController;
use crate::store::SessionLogStore;
use std::fs;

pub struct BootLogic;

impl BootLogic {
    /// Application start-up for every command that touches the panel:
    /// settings restore → log load → first render (inside `PanelController::boot`).
    pub fn boot(cfg: &Config) -> AppResult<PanelController<DbPool>> {
        let db_path = cfg.database_path();
        if let Some(dir) = db_path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let pool = DbPool::new(&db_path)?;
        let store = SessionLogStore::new(pool)
            .with_retention(cfg.retention_policy())
            .with_display_limit(cfg.display_limit);

        let (controller, report) = PanelController::boot(&cfg.features, store);

        if let Some(w) = &report.load.warning {
            report_warning(controller.store().storage(), w);
        }

        Ok(controller)
    }
}
