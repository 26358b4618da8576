//! Flat text persistence and the indented dump of a [`Tree`].
//!
//! The model format is one header line holding the node count, then one line per node in id
//! order:
//!
//! ```text
//! <id> L pf:[f1,f2,...] nijk:[f:v:c:count,...]
//! <id> D f:<split feature> ch:[<child id>,...]
//! ```
//!
//! Ids come from a post-order walk, so children always carry lower ids than their parent and
//! the root holds the highest id.

use crate::classifiers::hoeffding_tree::nodes::{LeafStatistics, LearningNode, Node, NodeId, SplitNode};
use crate::classifiers::hoeffding_tree::tree::Tree;
use crate::core::FeatureDomain;
use crate::error::{Result, VfdtError};
use crate::utils::file_parsing::{parse_usize_list, split_list, strip_bracketed};
use std::collections::HashSet;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use strum_macros::{Display, EnumString};
use tempfile::NamedTempFile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
enum NodeTag {
    #[strum(serialize = "L")]
    Leaf,
    #[strum(serialize = "D")]
    Decision,
}

type Cell = (usize, usize, usize, u64);

#[derive(Debug)]
enum ParsedKind {
    Leaf { features: Vec<usize>, cells: Vec<Cell> },
    Decision { feature: usize, children: Vec<usize> },
}

#[derive(Debug)]
struct ParsedNode {
    line: usize,
    kind: ParsedKind,
}

/// Arena ids in post-order: every node comes after all of its descendants.
fn post_order(tree: &Tree) -> Vec<NodeId> {
    fn visit(tree: &Tree, id: NodeId, order: &mut Vec<NodeId>) {
        if let Some(split) = tree.node(id).and_then(Node::as_split) {
            for &child in split.children() {
                visit(tree, child, order);
            }
        }
        order.push(id);
    }

    let mut order = Vec::with_capacity(tree.node_count());
    visit(tree, tree.root(), &mut order);
    order
}

fn join<T: ToString>(items: impl IntoIterator<Item = T>) -> String {
    items
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

pub fn save(tree: &Tree) -> String {
    let order = post_order(tree);
    let mut serial_ids = vec![0; tree.node_count()];
    for (serial, &id) in order.iter().enumerate() {
        serial_ids[id] = serial;
    }

    let mut out = format!("{}\n", order.len());
    for (serial, &id) in order.iter().enumerate() {
        let line = match tree.node(id) {
            Some(Node::Leaf(leaf)) => format!(
                "{serial} {} pf:[{}] nijk:[{}]",
                NodeTag::Leaf,
                join(leaf.possible_split_features()),
                join(
                    leaf.statistics()
                        .nonzero_counts()
                        .map(|(i, j, k, count)| format!("{i}:{j}:{k}:{count}"))
                ),
            ),
            Some(Node::Split(split)) => format!(
                "{serial} {} f:{} ch:[{}]",
                NodeTag::Decision,
                split.split_feature(),
                join(split.children().iter().map(|&child| serial_ids[child])),
            ),
            None => continue,
        };
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Parses a whole model. Nothing is built unless every line is valid.
pub fn load(text: &str, domain: Arc<FeatureDomain>) -> Result<Tree> {
    let mut lines = text.lines().enumerate().map(|(i, line)| (i + 1, line));
    let (_, header) = lines
        .next()
        .ok_or_else(|| VfdtError::format(1, "empty model"))?;
    let node_lines: Vec<(usize, &str)> = lines.filter(|(_, l)| !l.trim().is_empty()).collect();

    let header = header.trim();
    if header.is_empty() {
        log::warn!("model has no node count header; reading {} node lines", node_lines.len());
    } else {
        let declared: usize = header
            .parse()
            .map_err(|_| VfdtError::format(1, format!("bad node count '{header}'")))?;
        if declared != node_lines.len() {
            return Err(VfdtError::format(
                1,
                format!("header declares {declared} nodes, found {}", node_lines.len()),
            ));
        }
    }
    if node_lines.is_empty() {
        return Err(VfdtError::format(1, "model has no nodes"));
    }

    let count = node_lines.len();
    let mut slots: Vec<Option<ParsedNode>> = (0..count).map(|_| None).collect();
    for (line_no, line) in node_lines {
        let (id, node) = parse_line(line_no, line, count)?;
        if slots[id].is_some() {
            return Err(VfdtError::format(line_no, format!("duplicate node id {id}")));
        }
        slots[id] = Some(node);
    }
    // `count` distinct ids below `count` fill every slot.
    let parsed: Vec<ParsedNode> = slots.into_iter().flatten().collect();

    build(parsed, domain)
}

fn parse_line(line_no: usize, line: &str, count: usize) -> Result<(usize, ParsedNode)> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [id, tag, first, second] = tokens.as_slice() else {
        return Err(VfdtError::format(
            line_no,
            format!("expected 4 fields, found {}", tokens.len()),
        ));
    };

    let id: usize = id
        .parse()
        .map_err(|_| VfdtError::format(line_no, format!("bad node id '{id}'")))?;
    if id >= count {
        return Err(VfdtError::format(
            line_no,
            format!("node id {id} out of range for {count} nodes"),
        ));
    }
    let tag: NodeTag = tag
        .parse()
        .map_err(|_| VfdtError::format(line_no, format!("unknown node tag '{tag}'")))?;

    let kind = match tag {
        NodeTag::Leaf => {
            let features = bracketed_list(line_no, first, "pf:")?;
            let body = strip_bracketed(second, "nijk:")
                .ok_or_else(|| VfdtError::format(line_no, format!("expected nijk:[...], got '{second}'")))?;
            let cells = split_list(body)
                .map(|cell| parse_cell(line_no, cell))
                .collect::<Result<Vec<_>>>()?;
            let mut seen = HashSet::new();
            if let Some(&(i, j, k, _)) = cells.iter().find(|&&(i, j, k, _)| !seen.insert((i, j, k))) {
                return Err(VfdtError::format(
                    line_no,
                    format!("count {i}:{j}:{k} listed twice"),
                ));
            }
            ParsedKind::Leaf { features, cells }
        }
        NodeTag::Decision => {
            let feature = first
                .strip_prefix("f:")
                .and_then(|f| f.parse().ok())
                .ok_or_else(|| VfdtError::format(line_no, format!("expected f:<feature>, got '{first}'")))?;
            let children = bracketed_list(line_no, second, "ch:")?;
            ParsedKind::Decision { feature, children }
        }
    };
    Ok((id, ParsedNode { line: line_no, kind }))
}

fn bracketed_list(line_no: usize, token: &str, prefix: &str) -> Result<Vec<usize>> {
    strip_bracketed(token, prefix)
        .and_then(|body| parse_usize_list(body).ok())
        .ok_or_else(|| VfdtError::format(line_no, format!("expected {prefix}[...], got '{token}'")))
}

fn parse_cell(line_no: usize, cell: &str) -> Result<Cell> {
    let bad = || VfdtError::format(line_no, format!("bad count '{cell}'"));
    let parts: Vec<&str> = cell.split(':').collect();
    let [i, j, k, count] = parts.as_slice() else {
        return Err(bad());
    };
    Ok((
        i.parse().map_err(|_| bad())?,
        j.parse().map_err(|_| bad())?,
        k.parse().map_err(|_| bad())?,
        count.parse().map_err(|_| bad())?,
    ))
}

/// Checks the parsed nodes form a single tree over `domain` and assembles the arena.
fn build(parsed: Vec<ParsedNode>, domain: Arc<FeatureDomain>) -> Result<Tree> {
    let count = parsed.len();
    let root = count - 1;
    let mut nodes: Vec<Option<Node>> = (0..count).map(|_| None).collect();
    let mut reached = vec![false; count];
    reached[root] = true;

    let mut pending: Vec<(NodeId, Vec<usize>)> = vec![(root, Vec::new())];
    while let Some((id, used)) = pending.pop() {
        let ParsedNode { line, kind } = &parsed[id];
        let line = *line;
        match kind {
            ParsedKind::Decision { feature, children } => {
                let feature = *feature;
                let cardinality = domain.cardinality(feature).ok_or_else(|| {
                    VfdtError::format(line, format!("split feature {feature} outside the domain"))
                })?;
                if used.contains(&feature) {
                    return Err(VfdtError::format(
                        line,
                        format!("feature {feature} is already split on by an ancestor"),
                    ));
                }
                if children.len() != cardinality {
                    return Err(VfdtError::format(
                        line,
                        format!(
                            "feature {feature} has {cardinality} values but {} children",
                            children.len()
                        ),
                    ));
                }
                for &child in children {
                    if child >= id {
                        return Err(VfdtError::format(
                            line,
                            format!("child id {child} is not below parent id {id}"),
                        ));
                    }
                    if reached[child] {
                        return Err(VfdtError::format(
                            line,
                            format!("node {child} has more than one parent"),
                        ));
                    }
                    reached[child] = true;
                    let mut child_used = used.clone();
                    child_used.push(feature);
                    pending.push((child, child_used));
                }
                nodes[id] = Some(Node::Split(SplitNode::new(feature, children.clone())));
            }
            ParsedKind::Leaf { features, cells } => {
                let mut distinct = HashSet::new();
                for &f in features {
                    if !domain.contains_feature(f) {
                        return Err(VfdtError::format(line, format!("feature {f} outside the domain")));
                    }
                    if used.contains(&f) {
                        return Err(VfdtError::format(
                            line,
                            format!("feature {f} is already split on by an ancestor"),
                        ));
                    }
                    if !distinct.insert(f) {
                        return Err(VfdtError::format(line, format!("feature {f} listed twice")));
                    }
                }
                let statistics = LeafStatistics::from_counts(&domain, cells.iter().copied())
                    .map_err(|e| VfdtError::format(line, e.to_string()))?;
                if !statistics.is_consistent() {
                    return Err(VfdtError::format(
                        line,
                        "feature tables hold different example totals",
                    ));
                }
                nodes[id] = Some(Node::Leaf(LearningNode::with_statistics(
                    features.clone(),
                    statistics,
                )));
            }
        }
    }

    if let Some(orphan) = reached.iter().position(|&r| !r) {
        return Err(VfdtError::format(
            parsed[orphan].line,
            format!("node {orphan} is not reachable from the root"),
        ));
    }
    let nodes: Vec<Node> = nodes.into_iter().flatten().collect();
    Ok(Tree::from_parts(domain, nodes, root))
}

/// Indented dump: `<feature>=<value>:` per branch, `Leaf` per leaf, `| ` per level.
pub fn visualize(tree: &Tree) -> String {
    let mut out = String::new();
    visualize_node(tree, tree.root(), "", &mut out);
    out
}

fn visualize_node(tree: &Tree, id: NodeId, indent: &str, out: &mut String) {
    match tree.node(id) {
        Some(Node::Split(split)) => {
            let child_indent = format!("{indent}| ");
            for (value, &child) in split.children().iter().enumerate() {
                out.push_str(&format!("{indent}{}={value}:\n", split.split_feature()));
                visualize_node(tree, child, &child_indent, out);
            }
        }
        Some(Node::Leaf(_)) | None => {
            out.push_str(indent);
            out.push_str("Leaf\n");
        }
    }
}

/// Writes the model to a temporary file next to `path` and renames it into place.
pub fn write_model<P: AsRef<Path>>(tree: &Tree, path: P) -> Result<()> {
    let path = path.as_ref();
    let text = save(tree);
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(text.as_bytes())?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

pub fn read_model<P: AsRef<Path>>(path: P, domain: Arc<FeatureDomain>) -> Result<Tree> {
    let text = fs::read_to_string(path)?;
    load(&text, domain)
}
