use crate::cli::parser::Commands;
use crate::cli::prompt::StdinConfirm;
use crate::config::Config;
use crate::core::boot::BootLogic;
use crate::core::clear::ClearLogic;
use crate::errors::AppResult;
use crate::panel::AssumeYes;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { yes } = cmd {
        let mut controller = BootLogic::boot(cfg)?;

        if *yes {
            ClearLogic::apply(&mut controller, &mut AssumeYes);
        } else {
            ClearLogic::apply(&mut controller, &mut StdinConfirm);
        }
    }

    Ok(())
}
