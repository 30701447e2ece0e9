//! Process flowchart assembled from methodology text.

use serde::{Deserialize, Serialize};

/// Node kind in the flowchart graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// Start/End marker node.
    Terminal,
    /// A process step.
    Step,
}

/// A node in the flowchart graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowNode {
    /// Node identifier ("Start", "S1" .. "Sn", "End").
    pub id: String,
    /// Display label.
    pub label: String,
    /// Node kind.
    pub kind: NodeKind,
}

/// A directed edge between two nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowEdge {
    /// Source node id.
    pub from: String,
    /// Target node id.
    pub to: String,
}

/// A linear process flowchart: Start → step 1 → … → step N → End.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flowchart {
    /// Step descriptions in process order.
    pub steps: Vec<String>,
    /// All graph nodes including the Start/End terminals.
    pub nodes: Vec<FlowNode>,
    /// Directed edges forming the linear chain.
    pub edges: Vec<FlowEdge>,
}

impl Flowchart {
    /// Build a linear flowchart from ordered step descriptions.
    pub fn linear(steps: Vec<String>) -> Self {
        let mut nodes = Vec::with_capacity(steps.len() + 2);
        nodes.push(FlowNode {
            id: "Start".to_string(),
            label: "Start".to_string(),
            kind: NodeKind::Terminal,
        });
        for (i, step) in steps.iter().enumerate() {
            nodes.push(FlowNode {
                id: format!("S{}", i + 1),
                label: step.clone(),
                kind: NodeKind::Step,
            });
        }
        nodes.push(FlowNode {
            id: "End".to_string(),
            label: "End".to_string(),
            kind: NodeKind::Terminal,
        });

        let ids: Vec<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
        let edges = ids
            .windows(2)
            .map(|pair| FlowEdge {
                from: pair[0].to_string(),
                to: pair[1].to_string(),
            })
            .collect();

        Self {
            steps,
            nodes,
            edges,
        }
    }

    /// Number of process steps (terminals excluded).
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Render as a Mermaid `graph TD` diagram.
    pub fn to_mermaid(&self) -> String {
        let mut out = String::from("graph TD\n");
        out.push_str("    Start([Start])\n");
        for (i, step) in self.steps.iter().enumerate() {
            let label = step.replace('"', "'").replace('\n', " ");
            out.push_str(&format!("    S{}[\"{}\"]\n", i + 1, label));
        }
        out.push_str("    End([End])\n");
        for edge in &self.edges {
            out.push_str(&format!("    {} --> {}\n", edge.from, edge.to));
        }
        out
    }
}
