//! Read-only Sicht auf das bestehende Strassennetz eines Frames.
//!
//! Die Rechner greifen ausschliesslich ueber [`GeometryProvider`] auf Kanten,
//! Kurven und Knoten zu. Der Host liefert dafuer einen Adapter; fuer Tests
//! und den Replay-Treiber gibt es den serialisierbaren [`NetworkSnapshot`].

use glam::DVec3;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::curve::Bezier;

/// Identitaet eines Netz-Elements (Kante oder Knoten).
pub type ElementId = u64;

/// Kante mit Start- und End-Knoten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Start-Knoten
    pub start: ElementId,
    /// End-Knoten
    pub end: ElementId,
}

/// Knoten des bestehenden Netzes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NetNode {
    /// Weltposition des Knotens
    pub position: DVec3,
}

/// Aufgeloestes Snap-Ziel eines Pfadpunkts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnchorElement {
    /// Snap auf eine Kante (mit deren Kurve)
    Edge {
        id: ElementId,
        edge: Edge,
        curve: Bezier,
    },
    /// Snap auf einen Knoten (Ecke/Kreuzung)
    Node { id: ElementId, node: NetNode },
}

/// Read-only Geometrie-Zugriff auf das Netz (Zeitpunkt-Snapshot).
pub trait GeometryProvider {
    /// Kanten-Daten, falls `id` eine Kante ist.
    fn lookup_edge(&self, id: ElementId) -> Option<Edge>;
    /// Kurve einer Kante.
    fn lookup_curve(&self, id: ElementId) -> Option<Bezier>;
    /// Knoten-Daten, falls `id` ein Knoten ist.
    fn lookup_node(&self, id: ElementId) -> Option<NetNode>;
    /// Alle an einem Knoten haengenden Kanten. `None` ohne Kanten-Liste.
    fn connected_edges(&self, node: ElementId) -> Option<&[ElementId]>;

    /// Loest eine Element-ID in Kante oder Knoten auf.
    ///
    /// Kanten haben Vorrang; eine Kante ohne Kurve ist nicht verwertbar.
    fn resolve_anchor(&self, id: ElementId) -> Option<AnchorElement> {
        if let Some(edge) = self.lookup_edge(id) {
            return self
                .lookup_curve(id)
                .map(|curve| AnchorElement::Edge { id, edge, curve });
        }
        self.lookup_node(id)
            .map(|node| AnchorElement::Node { id, node })
    }
}

/// Kante inklusive Kurve, wie sie im Snapshot gespeichert wird.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeRecord {
    /// Start-Knoten
    pub start: ElementId,
    /// End-Knoten
    pub end: ElementId,
    /// Geometrie der Kante
    pub curve: Bezier,
}

/// Knoten inklusive verbundener Kanten, wie er im Snapshot gespeichert wird.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeRecord {
    /// Weltposition
    pub position: DVec3,
    /// Verbundene Kanten in Einfuege-Reihenfolge
    pub connected_edges: Vec<ElementId>,
}

/// Netz-Snapshot mit deterministischer Reihenfolge.
///
/// Serialisiert als flache Listen (`[[edges]]`, `[[nodes]]`); die
/// Knoten-Kanten-Zuordnung wird beim Laden aus den Kanten abgeleitet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "NetworkData", into = "NetworkData")]
pub struct NetworkSnapshot {
    /// Alle Kanten, indexiert nach ID
    pub edges: IndexMap<ElementId, EdgeRecord>,
    /// Alle Knoten, indexiert nach ID
    pub nodes: IndexMap<ElementId, NodeRecord>,
}

/// Serialisierte Form einer Kante.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct EdgeEntry {
    id: ElementId,
    start: ElementId,
    end: ElementId,
    curve: Bezier,
}

/// Serialisierte Form eines Knotens.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct NodeEntry {
    id: ElementId,
    position: DVec3,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct NetworkData {
    #[serde(default)]
    nodes: Vec<NodeEntry>,
    #[serde(default)]
    edges: Vec<EdgeEntry>,
}

impl From<NetworkData> for NetworkSnapshot {
    fn from(data: NetworkData) -> Self {
        let mut net = NetworkSnapshot::new();
        for node in data.nodes {
            net.add_node(node.id, node.position);
        }
        for edge in data.edges {
            net.add_edge(edge.id, edge.start, edge.end, edge.curve);
        }
        net
    }
}

impl From<NetworkSnapshot> for NetworkData {
    fn from(net: NetworkSnapshot) -> Self {
        Self {
            nodes: net
                .nodes
                .iter()
                .map(|(id, n)| NodeEntry {
                    id: *id,
                    position: n.position,
                })
                .collect(),
            edges: net
                .edges
                .iter()
                .map(|(id, e)| EdgeEntry {
                    id: *id,
                    start: e.start,
                    end: e.end,
                    curve: e.curve,
                })
                .collect(),
        }
    }
}

impl NetworkSnapshot {
    /// Erstellt einen leeren Snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fuegt einen Knoten hinzu bzw. aktualisiert dessen Position.
    pub fn add_node(&mut self, id: ElementId, position: DVec3) {
        self.nodes
            .entry(id)
            .and_modify(|n| n.position = position)
            .or_insert_with(|| NodeRecord {
                position,
                connected_edges: Vec::new(),
            });
    }

    /// Fuegt eine Kante hinzu und traegt sie bei beiden Endknoten ein.
    ///
    /// Fehlende Endknoten werden an den Kurvenenden angelegt.
    pub fn add_edge(&mut self, id: ElementId, start: ElementId, end: ElementId, curve: Bezier) {
        self.edges.insert(id, EdgeRecord { start, end, curve });
        for (node_id, position) in [(start, curve.a), (end, curve.d)] {
            let node = self.nodes.entry(node_id).or_insert_with(|| NodeRecord {
                position,
                connected_edges: Vec::new(),
            });
            if !node.connected_edges.contains(&id) {
                node.connected_edges.push(id);
            }
        }
    }

    /// Anzahl der Kanten.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Anzahl der Knoten.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

impl GeometryProvider for NetworkSnapshot {
    fn lookup_edge(&self, id: ElementId) -> Option<Edge> {
        self.edges.get(&id).map(|e| Edge {
            start: e.start,
            end: e.end,
        })
    }

    fn lookup_curve(&self, id: ElementId) -> Option<Bezier> {
        self.edges.get(&id).map(|e| e.curve)
    }

    fn lookup_node(&self, id: ElementId) -> Option<NetNode> {
        self.nodes.get(&id).map(|n| NetNode {
            position: n.position,
        })
    }

    fn connected_edges(&self, node: ElementId) -> Option<&[ElementId]> {
        self.nodes.get(&node).map(|n| n.connected_edges.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_edge_registers_at_both_nodes() {
        let mut net = NetworkSnapshot::new();
        net.add_node(1, DVec3::ZERO);
        net.add_edge(10, 1, 2, Bezier::line(DVec3::ZERO, DVec3::new(50.0, 0.0, 0.0)));
        net.add_edge(11, 2, 3, Bezier::line(DVec3::new(50.0, 0.0, 0.0), DVec3::new(50.0, 0.0, 50.0)));

        assert_eq!(net.edge_count(), 2);
        assert_eq!(net.node_count(), 3);
        assert_eq!(net.connected_edges(2), Some(&[10, 11][..]));
        assert_eq!(net.connected_edges(1), Some(&[10][..]));
        assert_eq!(
            net.lookup_node(3).map(|n| n.position),
            Some(DVec3::new(50.0, 0.0, 50.0))
        );
    }

    #[test]
    fn test_resolve_anchor_prefers_edges() {
        let mut net = NetworkSnapshot::new();
        net.add_edge(10, 1, 2, Bezier::line(DVec3::ZERO, DVec3::new(50.0, 0.0, 0.0)));

        assert!(matches!(
            net.resolve_anchor(10),
            Some(AnchorElement::Edge { id: 10, .. })
        ));
        assert!(matches!(
            net.resolve_anchor(1),
            Some(AnchorElement::Node { id: 1, .. })
        ));
        assert!(net.resolve_anchor(99).is_none());
    }
}
