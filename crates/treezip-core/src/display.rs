//! Debug rendering of a zipper.
//!
//! Only the focus is rendered, decorated with markers for where it sits:
//! `root` at the top of the tree, `‹` when siblings precede the focus and
//! `›` when siblings follow it. The path chain is never printed; it can be
//! arbitrarily large and is rarely what you want to look at.

use std::fmt::{self, Debug, Display};

use serde::{Deserialize, Serialize};

use crate::zipper::Zipper;

/// How the focus node is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    /// The node's `Display` output.
    #[default]
    Formatted,
    /// The node's `Debug` output.
    Raw,
}

impl std::str::FromStr for DisplayMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "formatted" => Ok(Self::Formatted),
            "raw" => Ok(Self::Raw),
            _ => Err(format!(
                "unknown display mode: {s}. Expected one of: formatted, raw"
            )),
        }
    }
}

/// Display adapter configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub mode: DisplayMode,
    /// Render the root / sibling markers.
    pub markers: bool,
    /// Truncate the rendered node to this many characters.
    pub max_width: Option<usize>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            mode: DisplayMode::Formatted,
            markers: true,
            max_width: None,
        }
    }
}

/// Borrowing `Display` adapter returned by [`Zipper::display`].
pub struct ZipperDisplay<'a, T> {
    zipper: &'a Zipper<T>,
    config: DisplayConfig,
}

impl<T> Zipper<T> {
    /// Render this zipper according to `config`.
    pub fn display(&self, config: &DisplayConfig) -> ZipperDisplay<'_, T> {
        ZipperDisplay {
            zipper: self,
            config: *config,
        }
    }
}

fn truncate(rendered: String, max_width: Option<usize>) -> String {
    match max_width {
        Some(width) if rendered.chars().count() > width => {
            let mut out: String = rendered.chars().take(width.saturating_sub(1)).collect();
            out.push('…');
            out
        }
        _ => rendered,
    }
}

impl<T: Debug + Display> Display for ZipperDisplay<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = match self.config.mode {
            DisplayMode::Formatted => self.zipper.node().to_string(),
            DisplayMode::Raw => format!("{:?}", self.zipper.node()),
        };
        let node = truncate(node, self.config.max_width);

        f.write_str("#Zipper<")?;
        if self.config.markers {
            if self.zipper.is_root() {
                f.write_str("root ")?;
            }
            if self.zipper.has_left() {
                f.write_str("‹ ")?;
            }
        }
        f.write_str(&node)?;
        if self.config.markers && self.zipper.has_right() {
            f.write_str(" ›")?;
        }
        f.write_str(">")
    }
}

impl<T: Debug> Debug for Zipper<T> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        fmt.debug_struct("Zipper")
            .field("node", self.node())
            .field("root", &self.is_root())
            .field("has_left", &self.has_left())
            .field("has_right", &self.has_right())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::Term;
    use crate::zipper::zip;

    fn sample() -> Term {
        Term::call(
            "Add",
            vec![
                Term::int(1),
                Term::call("Mul", vec![Term::int(2), Term::int(3)]),
            ],
        )
    }

    #[test]
    fn root_marker() {
        let z = zip(sample());
        assert_eq!(
            z.display(&DisplayConfig::default()).to_string(),
            "#Zipper<root Add(1, Mul(2, 3))>"
        );
    }

    #[test]
    fn sibling_markers() {
        let config = DisplayConfig::default();
        let first = zip(Term::list(vec![Term::int(1), Term::int(2), Term::int(3)]))
            .down()
            .unwrap();
        assert_eq!(first.display(&config).to_string(), "#Zipper<1 ›>");
        let middle = first.right().unwrap();
        assert_eq!(middle.display(&config).to_string(), "#Zipper<‹ 2 ›>");
        let last = middle.right().unwrap();
        assert_eq!(last.display(&config).to_string(), "#Zipper<‹ 3>");
    }

    #[test]
    fn markers_can_be_disabled() {
        let config = DisplayConfig {
            markers: false,
            ..DisplayConfig::default()
        };
        assert_eq!(
            zip(Term::int(5)).display(&config).to_string(),
            "#Zipper<5>"
        );
    }

    #[test]
    fn raw_mode_uses_debug() {
        let config = DisplayConfig {
            mode: DisplayMode::Raw,
            ..DisplayConfig::default()
        };
        assert_eq!(
            zip(Term::int(5)).display(&config).to_string(),
            "#Zipper<root Int(5)>"
        );
    }

    #[test]
    fn max_width_truncates_node() {
        let config = DisplayConfig {
            max_width: Some(6),
            ..DisplayConfig::default()
        };
        assert_eq!(
            zip(sample()).display(&config).to_string(),
            "#Zipper<root Add(1…>"
        );
    }

    #[test]
    fn display_does_not_affect_navigation() {
        let z = zip(sample()).down().unwrap();
        let _ = z.display(&DisplayConfig::default()).to_string();
        assert_eq!(z.right().unwrap().node().to_string(), "Mul(2, 3)");
    }

    #[test]
    fn debug_shows_focus_only() {
        let z = zip(sample()).down().unwrap();
        let debug = format!("{:?}", z);
        assert_eq!(
            debug,
            "Zipper { node: Int(1), root: false, has_left: false, has_right: true }"
        );
    }

    #[test]
    fn display_mode_from_str() {
        assert_eq!("raw".parse::<DisplayMode>().unwrap(), DisplayMode::Raw);
        assert_eq!("Formatted".parse::<DisplayMode>().unwrap(), DisplayMode::Formatted);
        assert!("fancy".parse::<DisplayMode>().is_err());
    }
}
