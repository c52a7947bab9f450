//! Interpretation of the positional `[directory] [max_depth]` tokens

use crate::error::{Result, TwigError};

/// Directory used when none is given.
pub const DEFAULT_DIR: &str = ".";

/// Depth used when none is given.
pub const DEFAULT_DEPTH: usize = 2;

/// Positional arguments after interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Positionals {
    pub directory: String,
    pub max_depth: usize,
}

impl Default for Positionals {
    fn default() -> Self {
        Self {
            directory: DEFAULT_DIR.to_string(),
            max_depth: DEFAULT_DEPTH,
        }
    }
}

/// Interpret up to two positional tokens.
///
/// - no tokens: defaults
/// - one token: a depth if it is numeric, otherwise a directory
/// - two tokens: directory, then depth (which must be numeric)
pub fn parse_positionals<S: AsRef<str>>(tokens: &[S]) -> Result<Positionals> {
    match tokens {
        [] => Ok(Positionals::default()),
        [only] => {
            let only = only.as_ref();
            if looks_numeric(only) {
                Ok(Positionals {
                    max_depth: parse_depth(only)?,
                    ..Default::default()
                })
            } else {
                Ok(Positionals {
                    directory: only.to_string(),
                    ..Default::default()
                })
            }
        }
        [dir, depth] => {
            let depth = depth.as_ref();
            if !looks_numeric(depth) {
                return Err(TwigError::argument(format!(
                    "depth must be a non-negative integer, got '{}'",
                    depth
                )));
            }
            Ok(Positionals {
                directory: dir.as_ref().to_string(),
                max_depth: parse_depth(depth)?,
            })
        }
        _ => Err(TwigError::argument(format!(
            "too many arguments: expected at most 2, got {}",
            tokens.len()
        ))),
    }
}

/// An optional minus sign followed by at least one ASCII digit.
fn looks_numeric(token: &str) -> bool {
    let digits = token.strip_prefix('-').unwrap_or(token);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn parse_depth(token: &str) -> Result<usize> {
    if token.starts_with('-') {
        return Err(TwigError::argument(format!(
            "depth must not be negative, got '{}'",
            token
        )));
    }
    token
        .parse()
        .map_err(|_| TwigError::argument(format!("depth is too large: '{}'", token)))
}
