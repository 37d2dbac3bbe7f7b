//! Elements export: serialize a derived model for a web graph renderer.
//!
//! Produces the flat `elements` array most browser graph libraries load
//! directly:
//!
//! ```text
//! DerivedGraph → export_elements_json() → [{"group": "nodes", "data": {...}}, ...]
//!   → hand to the renderer, which lays out and styles it
//! ```
//!
//! This is the render side of the boundary, so absent strings are filled
//! with `""` here and edges with a missing endpoint are dropped.

use std::io::Write;

use serde_json::{json, Value};
use tracing::warn;

use crate::model::*;
use crate::Result;

/// Write the model as a JSON elements array.
pub fn export_elements_json(graph: &DerivedGraph, writer: &mut dyn Write) -> Result<()> {
    serde_json::to_writer(&mut *writer, &export_elements_value(graph))?;
    writer.flush()?;
    Ok(())
}

/// Build the elements array as a JSON value.
pub fn export_elements_value(graph: &DerivedGraph) -> Value {
    let mut elements: Vec<Value> = graph.nodes.iter().map(node_element).collect();

    let mut skipped = 0usize;
    for edge in &graph.edges {
        if !graph.contains_node(edge.source) || !graph.contains_node(edge.target) {
            skipped += 1;
            continue;
        }
        elements.push(edge_element(edge));
    }
    if skipped > 0 {
        warn!(episode = graph.episode.0, skipped, "skipped edges with missing endpoints");
    }

    Value::Array(elements)
}

fn node_element(node: &DerivedNode) -> Value {
    let border_style = match node.border_style {
        Some(BorderStyle::Solid) => "solid",
        None => "",
    };
    let classes = if node.is_inactive { "inactive" } else { "" };
    json!({
        "group": "nodes",
        "data": {
            "id": node.id.to_string(),
            "label": node.label,
            "pictureURL": text(&node.picture_url),
            "bio": text(&node.bio),
            "borderColor": node.border_color.as_ref().map(Color::as_str).unwrap_or(""),
            "borderStyle": border_style,
            "deactivationEpisode": node.deactivation_episode.map(Episode::number),
            "isInactive": node.is_inactive,
        },
        "classes": classes,
    })
}

fn edge_element(edge: &DerivedEdge) -> Value {
    json!({
        "group": "edges",
        "data": {
            "id": edge.id.to_string(),
            "source": edge.source.to_string(),
            "target": edge.target.to_string(),
            "type": edge.kind.as_str(),
            "emoji": text(&edge.emoji),
            "context": text(&edge.context),
            "imageURL": text(&edge.image_url),
        },
    })
}

fn text(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::derive_graph;

    fn sample() -> DerivedGraph {
        let people = vec![
            PersonEntity::new(1, "Ana").arriving(1).deactivated(1),
            PersonEntity::new(2, "Ben").arriving(1).with_picture("ben.png"),
            PersonEntity::new(3, "Cy").arriving(9),
        ];
        let friendships = vec![FriendshipRelation::new(1, 2, 1).with_emoji("🤝")];
        let enmities = vec![EnmityRelation::new(2, 3, "😤", "future rival")];
        let pairings = vec![PairingRelation::new(1, 2, 1)];
        derive_graph(&people, &friendships, &enmities, &pairings, Episode(1))
    }

    #[test]
    fn test_dangling_edges_skipped() {
        let value = export_elements_value(&sample());
        let elements = value.as_array().unwrap();
        let edges: Vec<_> = elements.iter().filter(|e| e["group"] == "edges").collect();
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0]["data"]["type"], "friend");
    }

    #[test]
    fn test_absent_strings_become_empty() {
        let value = export_elements_value(&sample());
        let ana = &value[0]["data"];
        assert_eq!(ana["pictureURL"], "");
        assert_eq!(ana["bio"], "");
        assert_eq!(ana["isInactive"], true);
        assert_eq!(ana["borderStyle"], "solid");
        assert_eq!(value[0]["classes"], "inactive");
        assert_eq!(value[1]["data"]["pictureURL"], "ben.png");
        assert_eq!(value[2]["data"]["context"], "");
    }

    #[test]
    fn test_writer_output_parses() {
        let mut buf = Vec::new();
        export_elements_json(&sample(), &mut buf).unwrap();
        let parsed: Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 3);
    }
}
