use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::boot::BootLogic;
use crate::core::diagnostics::record;
use crate::core::show::ShowLogic;
use crate::errors::AppResult;
use crate::panel::{ActionOutcome, PanelAction};
use crate::ui::messages::{info, success};
use crate::utils::colors::colorize_flag;

/// `expand`, `collapse` and `toggle`: dispatched as panel actions, written
/// through to the settings file.
pub fn handle(cmd: &Commands, cfg: &mut Config) -> AppResult<()> {
    let action = match cmd {
        Commands::Expand => PanelAction::Expand,
        Commands::Collapse => PanelAction::Collapse,
        Commands::Toggle => PanelAction::Toggle,
        _ => return Ok(()),
    };

    let mut controller = BootLogic::boot(cfg)?;
    let mut no_prompt = |_: &str| false;
    let outcome = controller.dispatch(action, cfg, &mut no_prompt)?;

    let changed = matches!(outcome, ActionOutcome::Panel { changed: true });
    let pool = controller.store().storage();

    match action {
        PanelAction::Toggle => {
            let enabled = controller.is_enabled();
            record(
                pool,
                "toggle",
                "",
                if enabled { "Session logging enabled" } else { "Session logging disabled" },
            );
            success(format!("Session logging: {}", colorize_flag(enabled)));
        }
        PanelAction::Expand if changed => {
            record(pool, "expand", "", "Panel expanded");
            ShowLogic::print(controller.view(), controller.store().retention());
        }
        PanelAction::Expand => {
            info("Panel already expanded.");
            ShowLogic::print(controller.view(), controller.store().retention());
        }
        PanelAction::Collapse if changed => {
            record(pool, "collapse", "", "Panel collapsed");
            success("Panel collapsed.");
        }
        _ => info("Panel already collapsed."),
    }

    Ok(())
}
