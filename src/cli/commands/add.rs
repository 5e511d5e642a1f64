use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::core::boot::BootLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        duration,
        kind,
        at,
        meta,
    } = cmd
    {
        // Validate the input before touching storage
        let rec = AddLogic::build_record(*duration, kind, at.as_deref(), meta)?;

        let mut controller = BootLogic::boot(cfg)?;
        AddLogic::apply(&mut controller, rec)?;
    }

    Ok(())
}
