//! Raw text to typed input
//!
//! Lists are comma separated with optional whitespace around entries:
//! `5, 3, 8, 1`. Edges are written `from-to` or `from-to:weight`.

use crate::error::{Error, Result};
use crate::structures::Edge;

/// Parse a comma-separated list of integers, accepting at most `max` entries.
pub fn parse_values(text: &str, max: usize) -> Result<Vec<i64>> {
    let entries: Vec<&str> = text
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .collect();

    if entries.is_empty() {
        return Err(Error::EmptyInput);
    }
    if entries.len() > max {
        return Err(Error::TooManyValues {
            got: entries.len(),
            max,
        });
    }

    entries
        .into_iter()
        .map(|entry| {
            entry.parse::<i64>().map_err(|_| Error::InvalidNumber {
                entry: entry.to_string(),
            })
        })
        .collect()
}

/// Parse a single integer, as used by `--value` and friends.
pub fn parse_number<T: std::str::FromStr>(flag: &str, text: &str) -> Result<T> {
    text.trim().parse().map_err(|_| Error::InvalidArgument {
        flag: flag.to_string(),
        value: text.to_string(),
    })
}

fn parse_edge(entry: &str) -> Result<Edge> {
    let invalid = || Error::InvalidEdge {
        entry: entry.to_string(),
    };

    let (pair, weight) = match entry.split_once(':') {
        Some((pair, weight)) => (pair, Some(weight.trim())),
        None => (entry, None),
    };
    let (from, to) = pair.split_once('-').ok_or_else(invalid)?;
    let from: usize = from.trim().parse().map_err(|_| invalid())?;
    let to: usize = to.trim().parse().map_err(|_| invalid())?;

    match weight {
        None => Ok(Edge::new(from, to)),
        Some(w) => {
            let w: u32 = w.parse().map_err(|_| invalid())?;
            Ok(Edge::weighted(from, to, w))
        }
    }
}

/// Parse a comma-separated edge list such as `0-1:4, 1-2`.
///
/// An empty string is an empty edge list.
pub fn parse_edges(text: &str) -> Result<Vec<Edge>> {
    text.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(parse_edge)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_with_whitespace() {
        assert_eq!(parse_values(" 5, 3 ,8,-1 ", 20).unwrap(), vec![5, 3, 8, -1]);
    }

    #[test]
    fn values_reject_bad_entries() {
        assert!(matches!(
            parse_values("1, x, 3", 20),
            Err(Error::InvalidNumber { entry }) if entry == "x"
        ));
        assert!(matches!(parse_values(" , ", 20), Err(Error::EmptyInput)));
        assert!(matches!(
            parse_values("1,2,3", 2),
            Err(Error::TooManyValues { got: 3, max: 2 })
        ));
    }

    #[test]
    fn edges_with_and_without_weights() {
        let edges = parse_edges("0-1:4, 1-2").unwrap();
        assert_eq!(edges, vec![Edge::weighted(0, 1, 4), Edge::new(1, 2)]);
        assert!(parse_edges("").unwrap().is_empty());
    }

    #[test]
    fn edges_reject_malformed_entries() {
        for bad in ["0", "a-1", "0-1:x", "0-1:-3"] {
            assert!(matches!(parse_edges(bad), Err(Error::InvalidEdge { .. })), "{bad}");
        }
    }

    #[test]
    fn numbers_report_flag() {
        let err = parse_number::<usize>("--position", "-2").unwrap_err();
        assert_eq!(err.to_string(), "invalid value '-2' for --position");
    }
}
