use crate::core::diagnostics::{record, report_warning};
use crate::db::pool::DbPool;
use crate::panel::{ClearOutcome, Confirm, PanelController};
use crate::ui::messages::{info, success};
use crate::utils::plural_sessions;

pub struct ClearLogic;

impl ClearLogic {
    pub fn apply(controller: &mut PanelController<DbPool>, confirm: &mut dyn Confirm) {
        let before = controller.store().len();

        match controller.clear_session_log(confirm) {
            ClearOutcome::Declined => info("Operation cancelled."),
            ClearOutcome::Cleared(save) => {
                let pool = controller.store().storage();
                match save.warning() {
                    Some(w) => report_warning(pool, w),
                    None => {
                        record(
                            pool,
                            "clear",
                            "",
                            &format!("Cleared {}", plural_sessions(before)),
                        );
                        success(format!(
                            "Session log cleared ({} removed).",
                            plural_sessions(before)
                        ));
                    }
                }
            }
        }
    }
}
