use petgraph::graph::NodeIndex;
use petgraph::Directed;
use petgraph::Graph;
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

use tracing::info;

use crate::analysis::ContactBookAnalysis;
use crate::config::RenderConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Registered,
    Popular,
    Sparse,
}

impl Category {
    pub fn color<'a>(&self, config: &'a RenderConfig) -> &'a str {
        match self {
            Category::Registered => &config.palette.registered,
            Category::Popular => &config.palette.popular,
            Category::Sparse => &config.palette.sparse,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactNode {
    pub phone: String,
    pub category: Category,
    pub label: String,
    /// Values of the `id`, `name` and `phone` node attributes.
    pub account_id: String,
    pub name: String,
    pub shown_phone: String,
}

pub type ContactGraph = Graph<ContactNode, (), Directed>;

/// Registered beats popular beats sparse.
pub fn classify(phone: &str, analysis: &ContactBookAnalysis, config: &RenderConfig) -> ContactNode {
    if let Some(user) = analysis.registry.get(phone) {
        return ContactNode {
            phone: phone.to_string(),
            category: Category::Registered,
            label: user.display_name.clone(),
            account_id: user.account_id.clone(),
            name: user.display_name.clone(),
            shown_phone: phone.to_string(),
        };
    }

    let (category, shown_phone) =
        if analysis.degrees.degree(phone) >= config.connectivity_threshold {
            (Category::Popular, phone.to_string())
        } else {
            (Category::Sparse, config.truncate_phone(phone))
        };

    ContactNode {
        phone: phone.to_string(),
        category,
        label: config.unknown_label.clone(),
        account_id: String::new(),
        name: String::new(),
        shown_phone,
    }
}

/// One node per distinct phone in ascending phone order, then one edge per
/// adjacency occurrence in row order. Parallel edges are kept.
pub fn build_graph(analysis: &ContactBookAnalysis, config: &RenderConfig) -> ContactGraph {
    let mut graph = ContactGraph::new();

    let unique_phones: BTreeSet<&str> = analysis.rows.iter().flat_map(|row| row.phones()).collect();
    let mut nodes: HashMap<&str, NodeIndex> = HashMap::with_capacity(unique_phones.len());
    for phone in unique_phones {
        let node = graph.add_node(classify(phone, analysis, config));
        nodes.insert(phone, node);
    }

    for row in &analysis.rows {
        for (source, target) in row.edges() {
            graph.add_edge(nodes[source], nodes[target], ());
        }
    }

    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "built contact graph"
    );
    graph
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GraphSummary {
    pub registered: usize,
    pub popular: usize,
    pub sparse: usize,
    pub edges: usize,
}

impl GraphSummary {
    pub fn of(graph: &ContactGraph) -> Self {
        let mut summary = GraphSummary {
            edges: graph.edge_count(),
            ..Default::default()
        };
        for node in graph.node_weights() {
            match node.category {
                Category::Registered => summary.registered += 1,
                Category::Popular => summary.popular += 1,
                Category::Sparse => summary.sparse += 1,
            }
        }
        summary
    }

    pub fn nodes(&self) -> usize {
        self.registered + self.popular + self.sparse
    }
}
