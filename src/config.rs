use std::path::PathBuf;

use clap::ArgMatches;

use crate::error::{Error, Result};
use crate::plot::{CANVAS_HEIGHT, CANVAS_WIDTH};

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub input: Option<PathBuf>,
    pub width: u32,
    pub height: u32,
    pub font: Option<PathBuf>,
    pub verbose: bool,
    pub profile: bool,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            input: None,
            width: CANVAS_WIDTH as u32,
            height: CANVAS_HEIGHT as u32,
            font: None,
            verbose: false,
            profile: false,
        }
    }
}

fn dimension(matches: &ArgMatches, name: &str, default: u32) -> Result<u32> {
    match matches.value_of(name) {
        None => Ok(default),
        Some(v) => match v.parse::<u32>() {
            Ok(px) if px > 0 => Ok(px),
            _ => Err(Error::Config(format!("{} must be a positive integer, got {:?}", name, v))),
        },
    }
}

impl Config {
    pub fn from_matches(matches: &ArgMatches) -> Result<Config> {
        let defaults = Config::default();
        Ok(Config {
            input: matches.value_of_os("INPUT").map(PathBuf::from),
            width: dimension(matches, "win-width", defaults.width)?,
            height: dimension(matches, "win-height", defaults.height)?,
            font: matches.value_of_os("font").map(PathBuf::from),
            verbose: matches.is_present("verbose"),
            profile: matches.is_present("profile"),
        })
    }
}
