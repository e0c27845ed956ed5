use std::{
    env,
    path::{Path, PathBuf},
};

use crate::error::Result;

pub fn normalize_path(path_str: &str) -> Result<PathBuf> {
    let path = Path::new(path_str);

    if path.is_relative() {
        let pwd = env::current_dir()?;

        Ok(pwd.join(path))
    } else {
        Ok(path.to_path_buf())
    }
}
