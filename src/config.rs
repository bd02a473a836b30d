//! Runtime configuration from environment variables.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `BLOC_SCORES_FILE` | `scores.txt` | High score file |
//! | `BLOC_SEED` | wall clock | Fixed piece RNG seed |
//! | `BLOC_AUDIO` | on | `0`, `false`, `off` or `no` silences the bell |

use std::env;
use std::path::PathBuf;

use crate::store::DEFAULT_SCORES_FILE;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub scores_file: PathBuf,
    /// `None` seeds from the clock at the start of each game
    pub seed: Option<u32>,
    pub audio: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            scores_file: PathBuf::from(DEFAULT_SCORES_FILE),
            seed: None,
            audio: true,
        }
    }
}

impl AppConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup. Invalid values keep their default and are
    /// reported on stderr.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let scores_file = lookup("BLOC_SCORES_FILE")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.scores_file);

        let seed = lookup("BLOC_SEED").and_then(|s| match s.trim().parse::<u32>() {
            Ok(seed) => Some(seed),
            Err(_) => {
                eprintln!("[Config] ignoring BLOC_SEED={s:?}: not a u32");
                None
            }
        });

        let audio = lookup("BLOC_AUDIO")
            .and_then(|s| match parse_flag(&s) {
                Some(flag) => Some(flag),
                None => {
                    eprintln!("[Config] ignoring BLOC_AUDIO={s:?}: expected on/off");
                    None
                }
            })
            .unwrap_or(defaults.audio);

        Self {
            scores_file,
            seed,
            audio,
        }
    }
}

fn parse_flag(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> AppConfig {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(config(&[]), AppConfig::default());
    }

    #[test]
    fn test_reads_every_variable() {
        let cfg = config(&[
            ("BLOC_SCORES_FILE", "/tmp/bloc.txt"),
            ("BLOC_SEED", "42"),
            ("BLOC_AUDIO", "off"),
        ]);
        assert_eq!(cfg.scores_file, PathBuf::from("/tmp/bloc.txt"));
        assert_eq!(cfg.seed, Some(42));
        assert!(!cfg.audio);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let cfg = config(&[
            ("BLOC_SCORES_FILE", "  "),
            ("BLOC_SEED", "-1"),
            ("BLOC_AUDIO", "loud"),
        ]);
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn test_from_env_does_not_panic() {
        let _config = AppConfig::from_env();
    }
}
