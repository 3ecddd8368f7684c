//! Reference card for each algorithm: name, description, pseudocode and
//! asymptotic costs, plus a plain-language note per complexity class.

use serde::Serialize;
use std::fmt;

/// Static description of one catalogue entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AlgorithmInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub family: &'static str,
    /// Flags the command line accepts for this algorithm
    pub usage: &'static str,
    pub description: &'static str,
    pub pseudocode: &'static [&'static str],
    #[serde(rename = "time_complexity")]
    pub time: &'static str,
    #[serde(rename = "space_complexity")]
    pub space: &'static str,
}

impl AlgorithmInfo {
    pub fn time_note(&self) -> ComplexityNote {
        explain(self.time, Measure::Time)
    }

    pub fn space_note(&self) -> ComplexityNote {
        explain(self.space, Measure::Space)
    }
}

impl fmt::Display for AlgorithmInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({})", self.name, self.id)?;
        writeln!(f, "Family: {}", self.family)?;
        writeln!(f, "Usage:  algoviz {} {}", self.id, self.usage)?;
        writeln!(f)?;
        writeln!(f, "{}", self.description)?;
        writeln!(f)?;
        writeln!(f, "Pseudocode:")?;
        for line in self.pseudocode {
            writeln!(f, "  {}", line)?;
        }
        writeln!(f)?;
        for (label, note) in [("Time: ", self.time_note()), ("Space:", self.space_note())] {
            writeln!(f, "{} {}  {}", label, note.complexity, note.title)?;
            writeln!(f, "       {}", note.explanation)?;
        }
        Ok(())
    }
}

/// Reference card with both complexity notes resolved, as printed by
/// `--info --json`.
#[derive(Debug, Clone, Serialize)]
pub struct InfoCard {
    #[serde(flatten)]
    pub info: AlgorithmInfo,
    pub time_note: ComplexityNote,
    pub space_note: ComplexityNote,
}

impl From<AlgorithmInfo> for InfoCard {
    fn from(info: AlgorithmInfo) -> Self {
        InfoCard {
            time_note: info.time_note(),
            space_note: info.space_note(),
            info,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Measure {
    Time,
    Space,
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Measure::Time => f.write_str("time"),
            Measure::Space => f.write_str("space"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComplexityNote {
    pub complexity: &'static str,
    pub title: String,
    pub explanation: String,
    pub example: String,
}

/// Describe a complexity class for the given measure.
///
/// Classes without a dedicated note fall back to a generic sentence.
pub fn explain(complexity: &'static str, measure: Measure) -> ComplexityNote {
    let time = measure == Measure::Time;
    let (title, explanation, example) = match complexity {
        "O(1)" => (
            "Constant Time/Space",
            format!(
                "{} in a fixed amount regardless of input size. Direct access or fixed allocation.",
                if time { "Operations execute" } else { "Memory usage remains" }
            ),
            "Array access by index, stack push/pop, variable assignment",
        ),
        "O(log n)" => (
            "Logarithmic Time/Space",
            format!(
                "{} grow logarithmically. Input is repeatedly divided (halved) at each step.",
                if time { "Operations" } else { "Space requirements" }
            ),
            "Binary Search: 1000 elements take about 10 comparisons",
        ),
        "O(√n)" => (
            "Square Root Time",
            "Work grows with the square root of the input. The data is covered in √n blocks \
             of √n elements each."
                .to_string(),
            "Jump Search: 10,000 elements take about 200 steps",
        ),
        "O(n)" => (
            "Linear Time/Space",
            format!(
                "{} each element once. Growth is directly proportional to input size.",
                if time { "Must process" } else { "Must store" }
            ),
            "Linear Search, array traversal: n = 1000 means 1000 operations",
        ),
        "O(n log n)" => (
            "Linearithmic Time/Space",
            "Combines linear and logarithmic growth. Common in divide-and-conquer algorithms \
             that split data log(n) times and process n elements at each level."
                .to_string(),
            "Merge Sort, Quick Sort: log(n) levels of n elements each",
        ),
        "O(n²)" => (
            "Quadratic Time/Space",
            format!(
                "{}. For each element, we process all elements again.",
                if time { "Nested iterations over data" } else { "Space grows quadratically" }
            ),
            "Bubble Sort nested loops: n = 100 means 10,000 operations",
        ),
        "O(n³)" => (
            "Cubic Time/Space",
            "Triple nested loops or operations. Very expensive for large datasets.".to_string(),
            "Matrix multiplication, certain graph algorithms",
        ),
        "O(2ⁿ)" => (
            "Exponential Time/Space",
            "Doubles with each additional element. Each element creates branching possibilities."
                .to_string(),
            "Recursive Fibonacci, brute force solutions",
        ),
        "O(n!)" => (
            "Factorial Time/Space",
            "Generates all permutations. Grows faster than exponential.".to_string(),
            "Traveling Salesman (brute force)",
        ),
        "O(h)" => (
            "Height-bound Time",
            format!(
                "{} with the height h of the tree: log n when balanced, n when degenerate.",
                if time { "Work grows" } else { "Memory grows" }
            ),
            "BST search follows one root-to-leaf path",
        ),
        "O(V + E)" => (
            "Linear in Graph Size",
            "Every vertex and every edge is handled a constant number of times.".to_string(),
            "Breadth-first and depth-first search",
        ),
        "O(V²)" => (
            "Quadratic in Vertices",
            "Each of the V rounds scans all vertices to pick the next one.".to_string(),
            "Dijkstra with a linear scan instead of a priority queue",
        ),
        "O(E)" => (
            "Linear in Edges",
            "Every existing edge is checked once.".to_string(),
            "Duplicate-edge check before inserting an edge",
        ),
        _ => {
            return ComplexityNote {
                complexity,
                title: complexity.to_string(),
                explanation: format!("This represents {} complexity of {}", measure, complexity),
                example: "Various algorithms may exhibit this complexity".to_string(),
            }
        }
    };

    ComplexityNote {
        complexity,
        title: title.to_string(),
        explanation,
        example: example.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wording_depends_on_measure() {
        let time = explain("O(n)", Measure::Time);
        let space = explain("O(n)", Measure::Space);
        assert_eq!(time.title, "Linear Time/Space");
        assert!(time.explanation.starts_with("Must process"));
        assert!(space.explanation.starts_with("Must store"));
    }

    #[test]
    fn unknown_class_falls_back() {
        let note = explain("O(n^4)", Measure::Space);
        assert_eq!(note.title, "O(n^4)");
        assert_eq!(note.explanation, "This represents space complexity of O(n^4)");
    }

    #[test]
    fn serialized_keys() {
        let info = AlgorithmInfo {
            id: "x",
            name: "X",
            family: "Sorting",
            usage: "--values",
            description: "d",
            pseudocode: &["a", "b"],
            time: "O(1)",
            space: "O(1)",
        };
        let json = serde_json::to_value(info).unwrap();
        assert_eq!(json["time_complexity"], "O(1)");
        assert_eq!(json["pseudocode"][1], "b");

        let card = serde_json::to_value(InfoCard::from(info)).unwrap();
        assert_eq!(card["name"], "X");
        assert_eq!(card["space_note"]["title"], "Constant Time/Space");
    }

    #[test]
    fn card_text_lists_pseudocode_and_costs() {
        let info = AlgorithmInfo {
            id: "demo",
            name: "Demo",
            family: "Heap",
            usage: "[--values]",
            description: "Does a thing.",
            pseudocode: &["function demo():", "  return"],
            time: "O(log n)",
            space: "O(1)",
        };
        let text = info.to_string();
        assert!(text.starts_with("Demo (demo)\n"));
        assert!(text.contains("Usage:  algoviz demo [--values]"));
        assert!(text.contains("\n    return\n"));
        assert!(text.contains("Time:  O(log n)  Logarithmic Time/Space"));
        assert!(text.contains("Space: O(1)  Constant Time/Space"));
    }
}
