use crate::error::BoxedErrorTrait;

use serde::Deserialize;
use std::{fs, io};
use std::io::Read;
use std::path::Path;

pub const CONFIG_FILE_PATH: &'static str = "tableau.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// how many steps a single check may take, unbounded if absent
    pub step_limit: Option<usize>,
    /// print the evaluated tableau after each verdict
    pub show_tableau: bool,
    /// print responses as json instead of a verdict line
    pub json: bool,
}
impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Config, BoxedErrorTrait> {
        let mut file = fs::File::open(path)?;
        let mut buf = String::new();
        file.read_to_string(&mut buf)?;
        let config = toml::from_str(buf.as_str())?;
        Ok(config)
    }
    /// Like `load`, but a missing file gives the defaults
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Config, BoxedErrorTrait> {
        match Config::load(path.as_ref()) {
            Err(err) if is_not_found(err.as_ref()) => {
                debug!("no config at {}, using defaults", path.as_ref().display());
                Ok(Config::default())
            }
            result => result,
        }
    }
}

fn is_not_found(err: &(dyn std::error::Error + 'static)) -> bool {
    match err.downcast_ref::<io::Error>() {
        Some(err) => err.kind() == io::ErrorKind::NotFound,
        None => false,
    }
}
