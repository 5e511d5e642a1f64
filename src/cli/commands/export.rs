use crate::cli::parser::Commands;
use crate::cli::prompt::StdinConfirm;
use crate::config::Config;
use crate::core::boot::BootLogic;
use crate::core::diagnostics::record;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::panel::{ActionOutcome, PanelAction};
use crate::utils::date::today;
use crate::utils::path::resolve_output_path;

pub fn handle(cmd: &Commands, cfg: &mut Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        stdout,
        force,
    } = cmd
    {
        let mut controller = BootLogic::boot(cfg)?;
        let action = PanelAction::Export {
            format: *format,
            date: today(),
        };

        let mut confirm = StdinConfirm;
        let ActionOutcome::Exported(artifact) = controller.dispatch(action, cfg, &mut confirm)?
        else {
            return Ok(());
        };

        if *stdout {
            println!("{}", artifact.content);
            return Ok(());
        }

        let cwd = std::env::current_dir()?;
        let path = resolve_output_path(file.as_deref(), &artifact.filename, &cwd);
        ExportLogic::write_to(&artifact, &path, *force, &mut confirm)?;

        record(
            controller.store().storage(),
            "export",
            format.as_str(),
            &format!(
                "Exported {} sessions to {}",
                controller.store().len(),
                path.display()
            ),
        );
    }
    Ok(())
}
