//! Bridge-word selection.

use bridgewords_core::{Graph, Weight};

/// A word linking two neighbours together with the strength of that link.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Bridge {
    word: String,
    weight: Weight,
}

impl Bridge {
    /// Returns the bridge word.
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Returns `weight(from -> word) + weight(word -> to)`.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> Weight { self.weight }

    /// Consumes the bridge, returning the word.
    #[must_use]
    pub fn into_word(self) -> String {
        self.word
    }
}

/// Finds the word `b` maximising `weight(from -> b) + weight(b -> to)`.
///
/// Only words with an edge from `from` and an edge into `to` qualify. When
/// several candidates share the maximum, the first one met while iterating
/// `from`'s targets wins; that order is unspecified. Returns `None` when no
/// candidate exists.
///
/// # Examples
/// ```
/// use bridgewords_poet::{GraphKind, select_bridge};
///
/// let mut graph = GraphKind::Adjacency.empty::<String>();
/// graph.set("explore".into(), "strange".into(), 1)?;
/// graph.set("strange".into(), "new".into(), 1)?;
///
/// let bridge = select_bridge(graph.as_ref(), "explore", "new").expect("bridge exists");
/// assert_eq!(bridge.word(), "strange");
/// assert_eq!(bridge.weight(), 2);
/// assert!(select_bridge(graph.as_ref(), "new", "explore").is_none());
/// # Ok::<(), bridgewords_poet::GraphError>(())
/// ```
#[must_use]
pub fn select_bridge(graph: &dyn Graph<String>, from: &str, to: &str) -> Option<Bridge> {
    let outgoing = graph.targets(&from.to_owned());
    if outgoing.is_empty() {
        return None;
    }
    let incoming = graph.sources(&to.to_owned());

    let mut best: Option<Bridge> = None;
    for (candidate, first) in outgoing {
        let Some(second) = incoming.get(&candidate) else {
            continue;
        };
        let total = first.saturating_add(*second);
        if best.as_ref().is_none_or(|current| total > current.weight) {
            best = Some(Bridge {
                word: candidate,
                weight: total,
            });
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use bridgewords_core::GraphKind;
    use rstest::rstest;

    use super::*;

    fn graph_with(kind: GraphKind, edges: &[(&str, &str, Weight)]) -> Box<dyn Graph<String>> {
        let mut graph = kind.empty();
        for (source, target, weight) in edges {
            graph
                .set((*source).to_owned(), (*target).to_owned(), *weight)
                .expect("fixture weights are positive");
        }
        graph
    }

    #[rstest]
    fn strongest_candidate_wins(#[values(GraphKind::EdgeList, GraphKind::Adjacency)] kind: GraphKind) {
        let graph = graph_with(
            kind,
            &[
                ("a", "weak", 1),
                ("weak", "c", 1),
                ("a", "strong", 2),
                ("strong", "c", 3),
            ],
        );
        let bridge = select_bridge(graph.as_ref(), "a", "c").expect("bridge exists");
        assert_eq!(bridge.word(), "strong");
        assert_eq!(bridge.weight(), 5);
    }

    #[rstest]
    fn tie_picks_one_of_the_maxima(#[values(GraphKind::EdgeList, GraphKind::Adjacency)] kind: GraphKind) {
        let graph = graph_with(
            kind,
            &[("a", "x", 1), ("x", "c", 1), ("a", "y", 1), ("y", "c", 1)],
        );
        let bridge = select_bridge(graph.as_ref(), "a", "c").expect("bridge exists");
        assert!(matches!(bridge.word(), "x" | "y"), "got {}", bridge.word());
        assert_eq!(bridge.weight(), 2);
    }

    #[rstest]
    fn missing_second_hop_yields_nothing(
        #[values(GraphKind::EdgeList, GraphKind::Adjacency)] kind: GraphKind,
    ) {
        let graph = graph_with(kind, &[("a", "b", 4), ("c", "d", 1)]);
        assert_eq!(select_bridge(graph.as_ref(), "a", "d"), None);
        assert_eq!(select_bridge(graph.as_ref(), "unknown", "d"), None);
    }

    #[rstest]
    fn self_loop_can_bridge_a_word_to_itself(
        #[values(GraphKind::EdgeList, GraphKind::Adjacency)] kind: GraphKind,
    ) {
        let graph = graph_with(kind, &[("new", "new", 1)]);
        let bridge = select_bridge(graph.as_ref(), "new", "new").expect("loop bridges");
        assert_eq!(bridge.into_word(), "new");
    }

    #[test]
    fn saturates_instead_of_overflowing() {
        let graph = graph_with(
            GraphKind::Adjacency,
            &[("a", "b", Weight::MAX), ("b", "c", Weight::MAX)],
        );
        let bridge = select_bridge(graph.as_ref(), "a", "c").expect("bridge exists");
        assert_eq!(bridge.weight(), Weight::MAX);
    }
}
