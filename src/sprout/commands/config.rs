use crate::commands::{CmdMessage, CmdResult, SproutPaths};
use crate::config::SproutConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &SproutPaths, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let config = SproutConfig::load(&paths.data)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = SproutConfig::load(&paths.data)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => {
                    result.add_message(CmdMessage::info(val));
                    Ok(result)
                }
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)));
                    Ok(result)
                }
            }
        }
        ConfigAction::Set(key, value) => {
            let mut config = SproutConfig::load(&paths.data)?;
            if let Err(e) = config.set(&key, &value) {
                let mut res = CmdResult::default();
                res.add_message(CmdMessage::error(e));
                return Ok(res);
            }
            config.save(&paths.data)?;
            let mut result = CmdResult::default().with_config(config.clone());
            let display_val = config.get(&key).unwrap_or(value);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(dir: &std::path::Path) -> SproutPaths {
        SproutPaths {
            data: dir.to_path_buf(),
        }
    }

    #[test]
    fn show_all_returns_defaults_when_unset() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(&paths(dir.path()), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config, Some(SproutConfig::default()));
    }

    #[test]
    fn set_persists_across_loads() {
        let dir = tempfile::tempdir().unwrap();
        run(
            &paths(dir.path()),
            ConfigAction::Set("names".to_string(), "Monstera,Cactus".to_string()),
        )
        .unwrap();

        let result = run(&paths(dir.path()), ConfigAction::ShowAll).unwrap();
        let config = result.config.unwrap();
        assert_eq!(config.names, vec!["Monstera", "Cactus"]);
    }

    #[test]
    fn unknown_key_reports_an_error_message() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(
            &paths(dir.path()),
            ConfigAction::ShowKey("nope".to_string()),
        )
        .unwrap();
        assert!(matches!(
            result.messages[0].level,
            crate::commands::MessageLevel::Error
        ));
    }
}
