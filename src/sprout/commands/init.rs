use crate::commands::{CmdMessage, CmdResult, SproutPaths};
use crate::error::Result;
use std::fs;

pub fn run(paths: &SproutPaths) -> Result<CmdResult> {
    fs::create_dir_all(&paths.data)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Initialized sprout data directory at {}",
        paths.data.display()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_the_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("sprout");
        run(&SproutPaths { data: data.clone() }).unwrap();
        assert!(data.is_dir());
    }
}
