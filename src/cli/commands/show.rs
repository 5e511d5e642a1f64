use crate::config::Config;
use crate::core::boot::BootLogic;
use crate::core::show::ShowLogic;
use crate::errors::AppResult;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let controller = BootLogic::boot(cfg)?;
    ShowLogic::print(controller.view(), controller.store().retention());
    Ok(())
}
