//! Console output formatter for build results

use colored::Colorize;
use serde_json::json;
use votegraph_application::BuildGraphOutput;
use votegraph_domain::DataQualityReport;

/// Formats build results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the run summary
    pub fn format(output: &BuildGraphOutput) -> String {
        let graph = &output.graph;
        let mut out = String::new();

        out.push_str(&format!("{}\n\n", "=== Agreement Graph ===".cyan().bold()));
        out.push_str(&Self::field("Source:", &output.source));
        out.push_str(&Self::field("Orientation:", graph.orientation.tag()));
        out.push_str(&Self::field("Roll-calls:", &graph.roll_call_count.to_string()));
        out.push_str(&Self::field("Legislators:", &graph.node_count().to_string()));
        out.push_str(&Self::field("Edges:", &graph.edge_count().to_string()));
        out.push_str(&Self::field("Pairs:", &graph.unordered_pair_count().to_string()));

        out.push('\n');
        out.push_str(&Self::format_quality(&output.quality));

        out.push_str(&format!("\n{}\n", "Written:".green().bold()));
        out.push_str(&format!("  {}\n", output.artifacts.graph.display()));
        out.push_str(&format!("  {}\n", output.artifacts.participation.display()));

        out
    }

    /// Format data-quality findings
    pub fn format_quality(quality: &DataQualityReport) -> String {
        if quality.is_clean() {
            return format!("{} {}\n", "Data quality:".cyan().bold(), "clean".green());
        }

        let mut out = format!("{}\n", "Data quality:".yellow().bold());
        if quality.excluded_total() > 0 {
            let breakdown: Vec<String> = quality
                .excluded_choices
                .iter()
                .map(|(choice, count)| format!("{}: {}", choice, count))
                .collect();
            out.push_str(&format!(
                "  * {} vote(s) not counted ({})\n",
                quality.excluded_total(),
                breakdown.join(", ")
            ));
        }
        if quality.duplicate_votes > 0 {
            out.push_str(&format!(
                "  * {} duplicate vote(s) ignored\n",
                quality.duplicate_votes
            ));
        }
        if quality.unnamed_voters > 0 {
            out.push_str(&format!(
                "  * {} vote(s) without a legislator name\n",
                quality.unnamed_voters
            ));
        }
        if !quality.name_collisions.is_empty() {
            let names: Vec<&str> = quality.name_collisions.iter().map(String::as_str).collect();
            out.push_str(&format!(
                "  * {} shared name key(s), votes merged: {}\n",
                names.len(),
                names.join(", ")
            ));
        }
        out
    }

    /// Format as JSON
    pub fn format_json(output: &BuildGraphOutput) -> String {
        let graph = &output.graph;
        let summary = json!({
            "source": output.source,
            "orientation": graph.orientation,
            "roll_calls": graph.roll_call_count,
            "nodes": graph.node_count(),
            "edges": graph.edge_count(),
            "pairs": graph.unordered_pair_count(),
            "quality": output.quality,
            "artifacts": {
                "graph": output.artifacts.graph.display().to_string(),
                "participation": output.artifacts.participation.display().to_string(),
            },
        });
        serde_json::to_string_pretty(&summary).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format a fatal error
    pub fn format_error(stage: &str, message: &str) -> String {
        format!(
            "{} {}",
            format!("error in {} stage:", stage).red().bold(),
            message
        )
    }

    fn field(label: &str, value: &str) -> String {
        format!("{:<13}{}\n", label.bold(), value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use votegraph_application::EmittedArtifacts;
    use votegraph_domain::{
        AgreementAggregator, Choice, Orientation, VoteRecord, VoterKey, group_by_roll_call,
    };

    fn sample(quality: DataQualityReport) -> BuildGraphOutput {
        let votes = vec![
            VoteRecord::new("R1".into(), VoterKey::from_display_name("A"), Choice::Yes),
            VoteRecord::new("R1".into(), VoterKey::from_display_name("B"), Choice::Yes),
        ];
        BuildGraphOutput {
            source: "tabular export votes.csv".to_string(),
            graph: AgreementAggregator::aggregate(
                Orientation::Directed,
                &group_by_roll_call(votes),
            ),
            quality,
            artifacts: EmittedArtifacts {
                graph: PathBuf::from("out/votes-directed-graph.txt"),
                participation: PathBuf::from("out/votes-directed-participation.txt"),
            },
        }
    }

    #[test]
    fn test_summary_lists_counts_and_files() {
        colored::control::set_override(false);
        let text = ConsoleFormatter::format(&sample(DataQualityReport::default()));

        assert!(text.contains("Orientation: directed"));
        assert!(text.contains("Legislators: 2"));
        assert!(text.contains("Edges:       2"));
        assert!(text.contains("Pairs:       1"));
        assert!(text.contains("Data quality: clean"));
        assert!(text.contains("out/votes-directed-participation.txt"));
    }

    #[test]
    fn test_quality_findings() {
        colored::control::set_override(false);
        let mut quality = DataQualityReport::default();
        quality.record_excluded("Obstrução");
        quality.record_excluded("Obstrução");
        quality.record_excluded("Artigo 17");
        quality.record_duplicates(1);
        quality.record_collision("Ana_Paula");

        let text = ConsoleFormatter::format_quality(&quality);

        assert!(text.contains("3 vote(s) not counted (Artigo 17: 1, Obstrução: 2)"));
        assert!(text.contains("1 duplicate vote(s) ignored"));
        assert!(text.contains("Ana_Paula"));
        assert!(!text.contains("without a legislator name"));
    }

    #[test]
    fn test_json_summary() {
        let json: serde_json::Value = serde_json::from_str(&ConsoleFormatter::format_json(
            &sample(DataQualityReport::default()),
        ))
        .unwrap();

        assert_eq!(json["orientation"], "directed");
        assert_eq!(json["nodes"], 2);
        assert_eq!(json["edges"], 2);
        assert_eq!(json["pairs"], 1);
        assert_eq!(json["artifacts"]["graph"], "out/votes-directed-graph.txt");
    }

    #[test]
    fn test_error_line() {
        colored::control::set_override(false);
        assert_eq!(
            ConsoleFormatter::format_error("discovery", "response has no 'last' link"),
            "error in discovery stage: response has no 'last' link"
        );
    }
}
