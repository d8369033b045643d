use std::collections::{HashMap, HashSet};

use serde::Serialize;
use xer_parse::Model;

/// One node of the pruned WBS tree, with activity counts rolled up
/// from descendants. A derived view; nothing is written back into the
/// model's WBS records.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WbsTreeNode {
    pub id: String,
    pub name: String,
    pub short_name: String,
    pub sequence_number: f64,
    /// Activities attached directly to this node.
    pub direct_activities: usize,
    /// Activities attached to this node or any descendant.
    pub total_activities: usize,
    pub children: Vec<WbsTreeNode>,
}

/// Build the WBS tree for one project.
///
/// Parent links that would make a node its own ancestor are treated
/// as a data-integrity error: the link is severed (the node becomes a
/// root) and a warning is logged, so traversal always terminates.
/// Nodes with no descendant activities are pruned. Siblings are
/// ordered by sequence number.
pub fn wbs_hierarchy(model: &Model, project_id: &str) -> Vec<WbsTreeNode> {
    let nodes: Vec<_> = model
        .wbs_nodes
        .iter()
        .filter(|w| w.project_id == project_id)
        .collect();
    let by_id: HashMap<&str, &xer_parse::domain::WbsNode> =
        nodes.iter().map(|w| (w.id.as_str(), *w)).collect();

    // A parent link survives only if walking it upward never revisits
    // the starting node and ends inside this project's node set.
    let mut broken: HashSet<&str> = HashSet::new();
    for node in &nodes {
        let mut seen: HashSet<&str> = HashSet::new();
        seen.insert(node.id.as_str());
        let mut cursor = node.parent_id.as_deref();
        while let Some(parent_id) = cursor {
            if !seen.insert(parent_id) {
                // Detach only the nodes on the cycle itself; a node
                // hanging off a cycle keeps its own parent link.
                if parent_id == node.id {
                    tracing::warn!(wbs_id = %node.id, "cyclic wbs parent link, detaching node");
                    broken.insert(node.id.as_str());
                }
                break;
            }
            cursor = by_id.get(parent_id).and_then(|p| p.parent_id.as_deref());
        }
    }

    let mut children_of: HashMap<&str, Vec<&str>> = HashMap::new();
    let mut roots: Vec<&str> = Vec::new();
    for node in &nodes {
        let parent = node
            .parent_id
            .as_deref()
            .filter(|p| by_id.contains_key(p) && !broken.contains(node.id.as_str()));
        match parent {
            Some(parent_id) => children_of.entry(parent_id).or_default().push(&node.id),
            None => roots.push(&node.id),
        }
    }

    let mut direct: HashMap<&str, usize> = HashMap::new();
    for activity in model.activities_for(project_id) {
        if let Some(wbs_id) = &activity.wbs_id {
            *direct.entry(wbs_id.as_str()).or_insert(0) += 1;
        }
    }

    let mut tree: Vec<WbsTreeNode> = roots
        .iter()
        .filter_map(|id| build_node(id, &by_id, &children_of, &direct))
        .collect();
    tree.sort_by(|a, b| a.sequence_number.total_cmp(&b.sequence_number));
    tree
}

fn build_node(
    id: &str,
    by_id: &HashMap<&str, &xer_parse::domain::WbsNode>,
    children_of: &HashMap<&str, Vec<&str>>,
    direct: &HashMap<&str, usize>,
) -> Option<WbsTreeNode> {
    let node = by_id.get(id)?;

    let mut children: Vec<WbsTreeNode> = children_of
        .get(id)
        .into_iter()
        .flatten()
        .filter_map(|child| build_node(child, by_id, children_of, direct))
        .collect();
    children.sort_by(|a, b| a.sequence_number.total_cmp(&b.sequence_number));

    let direct_activities = direct.get(id).copied().unwrap_or(0);
    let total_activities =
        direct_activities + children.iter().map(|c| c.total_activities).sum::<usize>();

    // Prune branches that carry no activities anywhere below them.
    if total_activities == 0 {
        return None;
    }

    Some(WbsTreeNode {
        id: node.id.clone(),
        name: node.name.clone(),
        short_name: node.short_name.clone(),
        sequence_number: node.sequence_number,
        direct_activities,
        total_activities,
        children,
    })
}
