//! Puzzle input loading.
//!
//! Inputs are cached as `src/inputs/NN.txt`. A missing cache file is filled by
//! downloading the input with the [`aoc-cli`](https://github.com/scarvalhojr/aoc-cli)
//! client, authenticated with the session cookie from [`FetchConfig`].

use std::{
    env, fs, io,
    path::{Path, PathBuf},
    process::Command,
};

use thiserror::Error;

use crate::debugln;

pub const DEFAULT_YEAR: u16 = 2025;

/// Environment variable holding the adventofcode.com session cookie.
pub const SESSION_VAR: &str = "AOC_SESSION";
/// Environment variable overriding the puzzle year.
pub const YEAR_VAR: &str = "AOC_YEAR";

/// Session variable understood by `aoc-cli`.
const CLI_SESSION_VAR: &str = "ADVENT_OF_CODE_SESSION";

#[derive(Debug, Error)]
pub enum InputError {
    #[error("no cached input at {}, and AOC_SESSION is not set to download it", .0.display())]
    MissingSession(PathBuf),

    #[error("could not access {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to spawn aoc-cli, is it installed? (cargo install aoc-cli)")]
    Spawn(#[source] io::Error),

    #[error("aoc-cli exited with {0}")]
    Download(std::process::ExitStatus),
}

pub type Result<T> = std::result::Result<T, InputError>;

/// Where and how to fetch puzzle inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    pub year: u16,
    pub session: Option<String>,
    pub cache_dir: PathBuf,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            year: DEFAULT_YEAR,
            session: None,
            cache_dir: PathBuf::from("src").join("inputs"),
        }
    }
}

impl FetchConfig {
    /// Reads [`SESSION_VAR`] and [`YEAR_VAR`]. An unparseable year falls back
    /// to [`DEFAULT_YEAR`].
    pub fn from_env() -> Self {
        let session = env::var(SESSION_VAR).ok().filter(|s| !s.trim().is_empty());
        let year = env::var(YEAR_VAR)
            .ok()
            .and_then(|y| y.trim().parse().ok())
            .unwrap_or(DEFAULT_YEAR);
        Self {
            year,
            session,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone)]
pub struct InputLoader {
    config: FetchConfig,
}

impl InputLoader {
    pub fn new(config: FetchConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    pub fn cache_path(&self, day: u8) -> PathBuf {
        self.config.cache_dir.join(format!("{day:02}.txt"))
    }

    /// Returns the input for `day`, downloading it first if it isn't cached.
    pub fn load(&self, day: u8) -> Result<String> {
        let path = self.cache_path(day);
        if !is_cached(&path) {
            self.fetch(day)?;
        }
        read(&path)
    }

    /// Same as [`load`](Self::load), split into trimmed lines.
    pub fn load_lines(&self, day: u8) -> Result<Vec<String>> {
        let input = self.load(day)?;
        Ok(input.lines().map(|line| line.trim().to_owned()).collect())
    }

    /// Downloads the input for `day` into the cache, replacing what's there.
    pub fn fetch(&self, day: u8) -> Result<PathBuf> {
        let path = self.cache_path(day);
        let Some(session) = &self.config.session else {
            return Err(InputError::MissingSession(path));
        };

        fs::create_dir_all(&self.config.cache_dir).map_err(|source| InputError::Io {
            path: self.config.cache_dir.clone(),
            source,
        })?;

        let args = self.download_args(day, &path);
        debugln!("aoc {}", args.join(" "));

        let status = Command::new("aoc")
            .args(&args)
            .env(CLI_SESSION_VAR, session)
            .status()
            .map_err(InputError::Spawn)?;

        if !status.success() {
            return Err(InputError::Download(status));
        }
        Ok(path)
    }

    fn download_args(&self, day: u8, path: &Path) -> Vec<String> {
        vec![
            "download".into(),
            "--overwrite".into(),
            "--input-only".into(),
            "--year".into(),
            self.config.year.to_string(),
            "--day".into(),
            day.to_string(),
            "--input-file".into(),
            path.to_string_lossy().into_owned(),
        ]
    }
}

// An empty file is what `scaffold` leaves behind, not a downloaded input.
fn is_cached(path: &Path) -> bool {
    fs::metadata(path)
        .map(|meta| meta.is_file() && meta.len() > 0)
        .unwrap_or(false)
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_owned(),
        source,
    })
}
