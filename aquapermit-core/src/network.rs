//! Flow-node resolution
//!
//! A water course carries up to two endpoint nodes from the hydrology
//! network. For a water point on the course, the relevant flow statistics
//! are the ones measured at the nearer endpoint, so the resolver picks the
//! node at smaller planar distance from the point.

use geo::Point;

use crate::{geometry, models::WaterBodyNode};

/// Reference to a resolved flow node: register id plus the external node
/// identifier from the hydrology dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeRef {
    /// Register id of the node entity
    pub id: u64,
    /// External node identifier
    pub node_id: u64,
}

impl NodeRef {
    fn from_node(node: &WaterBodyNode) -> Self {
        Self {
            id: node.id,
            node_id: node.node_id,
        }
    }
}

/// Resolve the endpoint node closest to `reference`.
///
/// With both nodes present the nearer one wins; on an exact distance tie
/// `node1` is returned, so resolution is deterministic. With a single node
/// that node is returned regardless of distance. A node without geometry
/// cannot be compared and is treated as absent. Returns `None` when no
/// usable node remains.
pub fn closest_node(
    reference: &Point<f64>,
    node1: Option<&WaterBodyNode>,
    node2: Option<&WaterBodyNode>,
) -> Option<NodeRef> {
    // Nodes missing geometry drop out of consideration entirely.
    let node1 = node1.filter(|n| n.geom.is_some());
    let node2 = node2.filter(|n| n.geom.is_some());

    match (node1, node2) {
        (Some(n1), Some(n2)) => {
            let g1 = n1.geom.as_ref()?;
            let g2 = n2.geom.as_ref()?;

            let d1 = geometry::distance(reference, g1);
            let d2 = geometry::distance(reference, g2);

            if d1 <= d2 {
                Some(NodeRef::from_node(n1))
            } else {
                Some(NodeRef::from_node(n2))
            }
        }
        (Some(n), None) | (None, Some(n)) => Some(NodeRef::from_node(n)),
        (None, None) => None,
    }
}
