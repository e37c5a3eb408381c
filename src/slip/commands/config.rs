use crate::commands::{CmdMessage, CmdResult, SlipPaths};
use crate::config::SlipConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &SlipPaths, action: ConfigAction) -> Result<CmdResult> {
    let mut config = SlipConfig::load(&paths.home)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => return Ok(result.with_config(config)),
        ConfigAction::ShowKey(key) => match config.get(&key) {
            Ok(value) => result.add_message(CmdMessage::info(value)),
            Err(e) => result.add_message(CmdMessage::error(e)),
        },
        ConfigAction::Set(key, value) => {
            if let Err(e) = config.set(&key, &value) {
                return Ok(result.with_message(CmdMessage::error(e)));
            }
            config.save(&paths.home)?;
            let shown = config.get(&key).unwrap_or(value);
            result.add_message(CmdMessage::success(format!("{} set to {}", key, shown)));
            result = result.with_config(config);
        }
    }

    Ok(result)
}
