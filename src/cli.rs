//! Command-line move specifications.
//!
//! A move is written `FROM[,FROM...]:TO`, with every number in rest space (flat row minus one),
//! e.g. `2:3` or `0,5:5`.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq, Eq)]
/// One headless move: the rows to lift and where to drop them.
pub struct MoveSpec {
    /// Rest-space indices of the rows to move.
    pub from: BTreeSet<usize>,
    /// Rest-space offset, counted with the moved rows removed.
    pub to: usize,
}

impl FromStr for MoveSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (from, to) = s
            .split_once(':')
            .ok_or_else(|| format!("expected FROM:TO, got {s:?}"))?;

        let from = from
            .split(',')
            .map(str::trim)
            .filter(|index| !index.is_empty())
            .map(|index| {
                index
                    .parse::<usize>()
                    .map_err(|e| format!("bad source index {index:?}: {e}"))
            })
            .collect::<Result<BTreeSet<_>, _>>()?;
        let to = to
            .trim()
            .parse::<usize>()
            .map_err(|e| format!("bad target offset {to:?}: {e}"))?;

        Ok(Self { from, to })
    }
}

impl fmt::Display for MoveSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let from: Vec<String> = self.from.iter().map(ToString::to_string).collect();
        write!(f, "{}:{}", from.join(","), self.to)
    }
}

#[cfg(test)]
#[path = "tests/cli.rs"]
mod tests;
