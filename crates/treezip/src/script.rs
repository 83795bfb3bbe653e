//! Move scripts: the `--path` / `--from` language of `tz`.
//!
//! A script is a comma or whitespace separated list of moves, each
//! optionally repeated with a `*N` suffix:
//!
//! ```text
//! down,right*2,down
//! d r r d
//! ```

use std::fmt;

use anyhow::{Context, Result, bail};
use treezip_core::{ZipTree, Zipper};

/// A single zipper move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Down,
    Up,
    Left,
    Right,
    Leftmost,
    Rightmost,
    Next,
    Prev,
    Top,
}

impl Move {
    fn parse(word: &str) -> Option<Self> {
        Some(match word {
            "down" | "d" => Self::Down,
            "up" | "u" => Self::Up,
            "left" | "l" => Self::Left,
            "right" | "r" => Self::Right,
            "leftmost" => Self::Leftmost,
            "rightmost" => Self::Rightmost,
            "next" | "n" => Self::Next,
            "prev" | "p" => Self::Prev,
            "top" => Self::Top,
            _ => return None,
        })
    }

    /// Apply the move, or `None` when it has no target.
    pub fn apply<T: ZipTree>(self, z: &Zipper<T>) -> Option<Zipper<T>> {
        match self {
            Self::Down => z.down(),
            Self::Up => z.up(),
            Self::Left => z.left(),
            Self::Right => z.right(),
            Self::Leftmost => Some(z.leftmost()),
            Self::Rightmost => Some(z.rightmost()),
            Self::Next => z.next(),
            Self::Prev => z.prev(),
            Self::Top => Some(z.top()),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = match self {
            Self::Down => "down",
            Self::Up => "up",
            Self::Left => "left",
            Self::Right => "right",
            Self::Leftmost => "leftmost",
            Self::Rightmost => "rightmost",
            Self::Next => "next",
            Self::Prev => "prev",
            Self::Top => "top",
        };
        f.write_str(word)
    }
}

/// One script token: a move and how many times to repeat it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub mv: Move,
    pub times: usize,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.times == 1 {
            write!(f, "{}", self.mv)
        } else {
            write!(f, "{}*{}", self.mv, self.times)
        }
    }
}

/// Parse a move script. An empty script is valid and moves nowhere.
pub fn parse(script: &str) -> Result<Vec<Step>> {
    script
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(parse_step)
        .collect()
}

fn parse_step(token: &str) -> Result<Step> {
    let (word, times) = match token.split_once('*') {
        Some((word, count)) => {
            let times: usize = count
                .parse()
                .with_context(|| format!("bad repeat count in `{token}`"))?;
            if times == 0 {
                bail!("repeat count in `{token}` must be at least 1");
            }
            (word, times)
        }
        None => (token, 1),
    };
    let Some(mv) = Move::parse(&word.to_ascii_lowercase()) else {
        bail!("unknown move `{word}`");
    };
    Ok(Step { mv, times })
}

/// Run `steps` from `start`, failing on the first move with no target.
pub fn run<T: ZipTree>(start: Zipper<T>, steps: &[Step]) -> Result<Zipper<T>> {
    let mut z = start;
    for (idx, step) in steps.iter().enumerate() {
        for round in 0..step.times {
            z = match step.mv.apply(&z) {
                Some(next) => next,
                None => bail!(
                    "move {} (`{}`) has no target after {round} repetition(s)",
                    idx + 1,
                    step.mv
                ),
            };
        }
    }
    tracing::debug!(steps = steps.len(), depth = z.depth(), "move script applied");
    Ok(z)
}

/// The script that walks from the root to the position at `route`.
pub fn for_route(route: &[usize]) -> String {
    let mut steps = Vec::new();
    for &idx in route {
        steps.push(Step {
            mv: Move::Down,
            times: 1,
        });
        if idx > 0 {
            steps.push(Step {
                mv: Move::Right,
                times: idx,
            });
        }
    }
    steps
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use treezip_core::zip;

    // ── parse ──────────────────────────────────────────────────

    #[test]
    fn parses_long_short_and_repeats() {
        let steps = parse("down, r*2 up\tTOP").unwrap();
        assert_eq!(
            steps,
            vec![
                Step { mv: Move::Down, times: 1 },
                Step { mv: Move::Right, times: 2 },
                Step { mv: Move::Up, times: 1 },
                Step { mv: Move::Top, times: 1 },
            ]
        );
    }

    #[test]
    fn empty_script_is_no_moves() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse(" , ").unwrap().is_empty());
    }

    #[test]
    fn rejects_unknown_moves_and_bad_counts() {
        assert!(parse("sideways").is_err());
        assert!(parse("d*x").is_err());
        assert!(parse("d*0").is_err());
    }

    // ── run ────────────────────────────────────────────────────

    #[test]
    fn runs_against_json() {
        let doc = json!([1, [2, 3]]);
        let steps = parse("d,r,d,r").unwrap();
        let z = run(zip(doc), &steps).unwrap();
        assert_eq!(z.node(), &json!(3));
        assert_eq!(z.route(), vec![1, 1]);
    }

    #[test]
    fn reports_move_without_target() {
        let err = run(zip(json!([1])), &parse("d,r").unwrap()).unwrap_err();
        assert!(err.to_string().contains("move 2 (`right`)"), "{err}");
    }

    // ── for_route ──────────────────────────────────────────────

    #[test]
    fn route_script_round_trips() {
        let doc = json!([0, [1, 2, [3, 4]]]);
        let script = for_route(&[1, 2, 1]);
        assert_eq!(script, "down,right,down,right*2,down,right");
        let z = run(zip(doc), &parse(&script).unwrap()).unwrap();
        assert_eq!(z.node(), &json!(4));
    }

    #[test]
    fn root_route_is_empty_script() {
        assert_eq!(for_route(&[]), "");
    }
}
