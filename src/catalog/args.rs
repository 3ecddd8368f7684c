//! Command-line parsing
//!
//! ```text
//! algoviz <algorithm> [--values 5,3,8] [--value N] [--position N]
//!         [--mode min|max] [--edges 0-1:4,1-2] [--edge 0-2] [--start N]
//!         [--target N] [--directed] [--speed MS] [--capacity N]
//!         [--max-values N] [--json]
//! algoviz <algorithm> --info [--json]
//! algoviz --list [--json]
//! ```
//!
//! Value lists are parsed only after every flag has been read, so
//! `--max-values` applies no matter where it appears.

use super::input::{parse_edges, parse_number, parse_values};
use super::{Algorithm, Request};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::structures::{EdgeMode, HeapMode};

pub const USAGE: &str = "\
Usage: algoviz <algorithm> [options]
       algoviz <algorithm> --info [--json]
       algoviz --list [--json]

Options:
  --values 5,3,8     Input values (comma separated)
  --value N          Value to search, insert or delete
  --position N       Array position for insert/delete
  --mode min|max     Heap ordering (default min)
  --edges 0-1:4,1-2  Graph edges, optional weight after ':'
  --edge 0-2         Edge to add for graph-add-edge
  --start N          Traversal start node (default 0)
  --target N         Dijkstra target node
  --directed         Follow edges in their given direction only
  --speed MS         Auto-play interval, 100-1500
  --capacity N       Stack and queue capacity (default 10)
  --max-values N     Largest accepted input list (default 20)
  --json             Print the steps as JSON instead of opening the viewer
  --info             Describe the algorithm instead of running it
  --list             List every algorithm with its complexity
  -h, --help         Show this help

Keys: ←/→ step, 1-9 jump, space play/pause, enter end, backspace start,
      +/- speed, tab switch pane, ↑/↓ scroll, q quit";

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// `None` when only `--list` or `--help` was given
    pub request: Option<Request>,
    pub list: bool,
    pub help: bool,
    /// Print the algorithm's reference card instead of running it
    pub info: bool,
    /// Print the steps as JSON instead of opening the viewer
    pub json: bool,
    pub config: Config,
}

/// Parse the arguments after the program name.
pub fn parse_args<I, A>(args: I) -> Result<Options>
where
    I: IntoIterator<Item = A>,
    A: Into<String>,
{
    let mut args = args.into_iter().map(Into::into);
    let mut config = Config::default();
    let mut algorithm: Option<Algorithm> = None;
    let mut list = false;
    let mut help = false;
    let mut info = false;
    let mut json = false;

    let mut values_text: Option<String> = None;
    let mut edges_text: Option<String> = None;
    let mut edge_text: Option<String> = None;
    let mut request_flags = RequestFlags::default();

    while let Some(arg) = args.next() {
        let mut take = |flag: &str| -> Result<String> {
            args.next().ok_or_else(|| Error::InvalidArgument {
                flag: flag.to_string(),
                value: String::new(),
            })
        };

        match arg.as_str() {
            "--list" => list = true,
            "--help" | "-h" => help = true,
            "--info" => info = true,
            "--json" => json = true,
            "--directed" => request_flags.edge_mode = EdgeMode::Directed,
            "--values" => values_text = Some(take("--values")?),
            "--edges" => edges_text = Some(take("--edges")?),
            "--edge" => edge_text = Some(take("--edge")?),
            "--value" => request_flags.value = Some(parse_number("--value", &take("--value")?)?),
            "--position" => {
                request_flags.position = Some(parse_number("--position", &take("--position")?)?)
            }
            "--start" => request_flags.start = parse_number("--start", &take("--start")?)?,
            "--target" => {
                request_flags.target = Some(parse_number("--target", &take("--target")?)?)
            }
            "--mode" => {
                let text = take("--mode")?;
                request_flags.mode =
                    text.parse::<HeapMode>()
                        .map_err(|_| Error::InvalidArgument {
                            flag: "--mode".to_string(),
                            value: text.clone(),
                        })?;
            }
            "--speed" => {
                let ms: u64 = parse_number("--speed", &take("--speed")?)?;
                config.playback.interval_ms = config.playback.normalize(ms);
            }
            "--capacity" => {
                let capacity: usize = parse_number("--capacity", &take("--capacity")?)?;
                config.stack_capacity = capacity;
                config.queue_capacity = capacity;
            }
            "--max-values" => {
                config.max_values = parse_number("--max-values", &take("--max-values")?)?;
            }
            flag if flag.starts_with('-') && flag.len() > 1 && !is_number(flag) => {
                return Err(Error::UnknownFlag(flag.to_string()));
            }
            id => {
                if algorithm.is_some() {
                    return Err(Error::UnknownFlag(id.to_string()));
                }
                algorithm = Some(id.parse()?);
            }
        }
    }

    let request = match algorithm {
        None => None,
        Some(algorithm) => {
            let values = values_text
                .as_deref()
                .map(|text| parse_values(text, config.max_values))
                .transpose()?;
            let edges = edges_text.as_deref().map(parse_edges).transpose()?.unwrap_or_default();
            let edge = match edge_text.as_deref().map(parse_edges).transpose()? {
                None => None,
                Some(mut parsed) if parsed.len() == 1 => parsed.pop(),
                Some(_) => {
                    return Err(Error::InvalidEdge {
                        entry: edge_text.unwrap_or_default(),
                    })
                }
            };
            Some(Request {
                values,
                edges,
                edge,
                value: request_flags.value,
                position: request_flags.position,
                mode: request_flags.mode,
                start: request_flags.start,
                target: request_flags.target,
                edge_mode: request_flags.edge_mode,
                ..Request::new(algorithm)
            })
        }
    };

    Ok(Options {
        help: help || (request.is_none() && !list),
        request,
        list,
        info,
        json,
        config,
    })
}

#[derive(Debug, Default)]
struct RequestFlags {
    value: Option<i64>,
    position: Option<usize>,
    mode: HeapMode,
    start: usize,
    target: Option<usize>,
    edge_mode: EdgeMode,
}

fn is_number(text: &str) -> bool {
    text.parse::<i64>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::Edge;

    fn parse(line: &str) -> Result<Options> {
        parse_args(line.split_whitespace())
    }

    #[test]
    fn full_request() {
        let options = parse("binary-search --values 1,3,5 --value 3 --json").unwrap();
        let request = options.request.unwrap();
        assert_eq!(request.algorithm, Algorithm::BinarySearch);
        assert_eq!(request.values, Some(vec![1, 3, 5]));
        assert_eq!(request.value, Some(3));
        assert!(options.json);
        assert!(!options.help);
    }

    #[test]
    fn max_values_applies_regardless_of_order() {
        let err = parse("bubble-sort --values 1,2,3 --max-values 2").unwrap_err();
        assert!(matches!(err, Error::TooManyValues { got: 3, max: 2 }));
    }

    #[test]
    fn graph_flags() {
        let options =
            parse("graph-dijkstra --edges 0-1:4,1-2 --start 0 --target 2 --directed").unwrap();
        let request = options.request.unwrap();
        assert_eq!(request.edges, vec![Edge::weighted(0, 1, 4), Edge::new(1, 2)]);
        assert_eq!(request.target, Some(2));
        assert_eq!(request.edge_mode, EdgeMode::Directed);
    }

    #[test]
    fn single_edge_flag() {
        let request = parse("graph-add-edge --edges 0-1 --edge 1-2:3")
            .unwrap()
            .request
            .unwrap();
        assert_eq!(request.edge, Some(Edge::weighted(1, 2, 3)));
        assert!(parse("graph-add-edge --edge 0-1,1-2").is_err());
    }

    #[test]
    fn negative_values_are_not_flags() {
        let request = parse("array-search --values 1,2 --value -4").unwrap().request.unwrap();
        assert_eq!(request.value, Some(-4));
    }

    #[test]
    fn config_overrides() {
        let options = parse("stack-push --value 1 --capacity 3 --speed 1240").unwrap();
        assert_eq!(options.config.stack_capacity, 3);
        assert_eq!(options.config.queue_capacity, 3);
        assert_eq!(options.config.playback.interval_ms, 1200);
    }

    #[test]
    fn list_and_help() {
        let options = parse("--list").unwrap();
        assert!(options.list);
        assert!(!options.help);
        assert!(parse("").unwrap().help);
    }

    #[test]
    fn info_flag() {
        let options = parse("heap-peek --info --json").unwrap();
        assert!(options.info && options.json && !options.help);
        assert_eq!(options.request.unwrap().algorithm, Algorithm::HeapPeek);
        assert!(!parse("heap-peek").unwrap().info);
    }

    #[test]
    fn rejects_unknowns() {
        assert!(matches!(parse("bubble-sort --fast"), Err(Error::UnknownFlag(f)) if f == "--fast"));
        assert!(matches!(parse("bogo-sort"), Err(Error::UnknownAlgorithm(_))));
        assert!(matches!(parse("heap-build --mode mid"), Err(Error::InvalidArgument { .. })));
        assert!(matches!(parse("bubble-sort --values"), Err(Error::InvalidArgument { .. })));
    }
}
