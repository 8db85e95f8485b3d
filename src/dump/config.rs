use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{anyhow, Result};

pub const USAGE: &str = "\
Options:
  -h, --help                  Prints this message and exits
  -f, --save-file=FILENAME    Dumps a map from a named savefile.
  -o, --output=FILENAME       Also writes the map to a savefile.
      --config=FILENAME       Reads generation settings from FILENAME
                              (default: config.json).
      --seed=N                Overrides the configured terrain seed.
";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DumpConfig {
    pub help: bool,
    pub save_file: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub config_path: Option<PathBuf>,
    pub seed: Option<u32>,
}

impl DumpConfig {
    pub fn from_env_args() -> Result<Self> {
        Self::from_iter(std::env::args_os().skip(1))
    }

    pub fn from_iter<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut config = Self::default();

        let mut iter = args.into_iter();
        while let Some(arg) = iter.next() {
            let arg_str = arg.to_string_lossy().to_string();
            let (name, inline) = match arg_str.split_once('=') {
                Some((name, value)) if name.starts_with("--") => (name, Some(value.to_string())),
                _ => (arg_str.as_str(), None),
            };

            let mut value = |flag: &str| -> Result<String> {
                match inline.clone() {
                    Some(value) => Ok(value),
                    None => iter
                        .next()
                        .map(|v| v.to_string_lossy().to_string())
                        .ok_or_else(|| anyhow!("{flag} requires a value")),
                }
            };

            match name {
                "-h" | "--help" => config.help = true,
                "-f" | "--save-file" => config.save_file = Some(PathBuf::from(value(name)?)),
                "-o" | "--output" => config.output = Some(PathBuf::from(value(name)?)),
                "--config" => config.config_path = Some(PathBuf::from(value(name)?)),
                "--seed" => {
                    let raw = value(name)?;
                    let seed = raw
                        .parse()
                        .map_err(|_| anyhow!("--seed expects an unsigned integer, got '{raw}'"))?;
                    config.seed = Some(seed);
                }
                other => return Err(anyhow!("unrecognized option '{other}'")),
            }
        }

        Ok(config)
    }
}
