//! In-memory rendering of the two artifacts

use serde::Serialize;
use std::fmt::Write as _;
use votegraph_application::EmitError;
use votegraph_domain::{AgreementEdge, AgreementGraph, Orientation, OutputFormat, Participation};

/// Turns a finalized graph into artifact contents.
pub trait ArtifactRenderer: Send + Sync {
    fn graph(&self, graph: &AgreementGraph) -> Result<String, EmitError>;
    fn participation(&self, graph: &AgreementGraph) -> Result<String, EmitError>;
}

/// Pick the renderer for a format.
pub fn renderer_for(format: OutputFormat) -> &'static dyn ArtifactRenderer {
    match format {
        OutputFormat::Text => &TextRenderer,
        OutputFormat::Json => &JsonRenderer,
    }
}

/// Whitespace-separated lines.
///
/// Graph: `"<nodes> <edges>"`, then `"<source> <target> <weight>"` per edge.
/// Participation: `"<voter> <count>"` per voter.
pub struct TextRenderer;

impl ArtifactRenderer for TextRenderer {
    fn graph(&self, graph: &AgreementGraph) -> Result<String, EmitError> {
        let mut out = String::new();
        writeln!(out, "{} {}", graph.node_count(), graph.edge_count())
            .map_err(|e| EmitError::Serialize(e.to_string()))?;
        for edge in &graph.edges {
            writeln!(out, "{} {} {}", edge.source, edge.target, edge.weight)
                .map_err(|e| EmitError::Serialize(e.to_string()))?;
        }
        Ok(out)
    }

    fn participation(&self, graph: &AgreementGraph) -> Result<String, EmitError> {
        let mut out = String::new();
        for entry in &graph.participation {
            writeln!(out, "{} {}", entry.voter, entry.roll_calls)
                .map_err(|e| EmitError::Serialize(e.to_string()))?;
        }
        Ok(out)
    }
}

#[derive(Serialize)]
struct GraphDocument<'a> {
    orientation: Orientation,
    roll_calls: usize,
    nodes: usize,
    edge_count: usize,
    edges: &'a [AgreementEdge],
}

#[derive(Serialize)]
struct ParticipationDocument<'a> {
    orientation: Orientation,
    roll_calls: usize,
    participation: &'a [Participation],
}

/// Pretty-printed JSON documents.
pub struct JsonRenderer;

impl ArtifactRenderer for JsonRenderer {
    fn graph(&self, graph: &AgreementGraph) -> Result<String, EmitError> {
        let doc = GraphDocument {
            orientation: graph.orientation,
            roll_calls: graph.roll_call_count,
            nodes: graph.node_count(),
            edge_count: graph.edge_count(),
            edges: &graph.edges,
        };
        to_json(&doc)
    }

    fn participation(&self, graph: &AgreementGraph) -> Result<String, EmitError> {
        let doc = ParticipationDocument {
            orientation: graph.orientation,
            roll_calls: graph.roll_call_count,
            participation: &graph.participation,
        };
        to_json(&doc)
    }
}

fn to_json<T: Serialize>(doc: &T) -> Result<String, EmitError> {
    let mut json =
        serde_json::to_string_pretty(doc).map_err(|e| EmitError::Serialize(e.to_string()))?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use votegraph_domain::{AgreementAggregator, Choice, VoteRecord, VoterKey, group_by_roll_call};

    fn sample(orientation: Orientation) -> AgreementGraph {
        let votes = vec![
            VoteRecord::new("R1".into(), VoterKey::from_display_name("Ana Paula"), Choice::Yes),
            VoteRecord::new("R1".into(), VoterKey::from_display_name("Bruno"), Choice::Yes),
            VoteRecord::new("R1".into(), VoterKey::from_display_name("Carla"), Choice::No),
        ];
        AgreementAggregator::aggregate(orientation, &group_by_roll_call(votes))
    }

    #[test]
    fn test_text_undirected() {
        let graph = sample(Orientation::Undirected);
        assert_eq!(TextRenderer.graph(&graph).unwrap(), "3 1\nAna_Paula Bruno 1\n");
        assert_eq!(
            TextRenderer.participation(&graph).unwrap(),
            "Ana_Paula 1\nBruno 1\nCarla 1\n"
        );
    }

    #[test]
    fn test_text_directed_lists_both_directions() {
        let graph = sample(Orientation::Directed);
        assert_eq!(
            TextRenderer.graph(&graph).unwrap(),
            "3 2\nAna_Paula Bruno 1\nBruno Ana_Paula 1\n"
        );
    }

    #[test]
    fn test_text_empty_graph() {
        let graph = AgreementAggregator::new(Orientation::Undirected).finish();
        assert_eq!(TextRenderer.graph(&graph).unwrap(), "0 0\n");
        assert_eq!(TextRenderer.participation(&graph).unwrap(), "");
    }

    #[test]
    fn test_json_graph_document() {
        let graph = sample(Orientation::Undirected);
        let json: serde_json::Value =
            serde_json::from_str(&JsonRenderer.graph(&graph).unwrap()).unwrap();

        assert_eq!(json["orientation"], "undirected");
        assert_eq!(json["nodes"], 3);
        assert_eq!(json["edge_count"], 1);
        assert_eq!(json["edges"][0]["source"], "Ana_Paula");
        assert_eq!(json["edges"][0]["weight"], 1);
    }

    #[test]
    fn test_json_participation_document() {
        let graph = sample(Orientation::Directed);
        let json: serde_json::Value =
            serde_json::from_str(&JsonRenderer.participation(&graph).unwrap()).unwrap();

        assert_eq!(json["participation"][2]["voter"], "Carla");
        assert_eq!(json["participation"][2]["roll_calls"], 1);
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let a = sample(Orientation::Directed);
        let b = sample(Orientation::Directed);
        assert_eq!(TextRenderer.graph(&a).unwrap(), TextRenderer.graph(&b).unwrap());
        assert_eq!(JsonRenderer.graph(&a).unwrap(), JsonRenderer.graph(&b).unwrap());
    }
}
