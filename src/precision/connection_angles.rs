//! Anschlusswinkel zwischen neuem Pfad und bestehendem Netz.
//!
//! Nur der erste und der letzte Kontrollpunkt werden ausgewertet: dort
//! trifft das neue Segment auf eine Kante oder einen Knoten. Je Anschluss
//! entstehen Winkel und Ergaenzungswinkel (Summe 180°), weil je nach
//! Darstellung des Bau-Tools beide der sichtbare Winkel sein koennen.

use glam::{DVec2, DVec3};

use crate::core::vector_math::{
    angle_between, is_displayable_angle, planar_tangent_direction, safe_direction,
};
use crate::core::{AnchorElement, Bezier, Edge, ElementId, GeometryProvider, PathPoint};

use super::candidate::{AngleCandidate, CandidateSource};

/// Haengt alle Anschlusswinkel der End-Kontrollpunkte an `out` an.
pub fn collect_connection_angles<G: GeometryProvider + ?Sized>(
    points: &[PathPoint],
    geometry: &G,
    out: &mut Vec<AngleCandidate>,
) {
    for (index, point) in points.iter().enumerate() {
        let Some(anchor_id) = point.anchor else {
            continue;
        };
        let Some(anchor) = geometry.resolve_anchor(anchor_id) else {
            log::trace!("Snap-Ziel {} ist weder Kante noch Knoten", anchor_id);
            continue;
        };
        let Some(new_dir) = new_segment_direction(points, index) else {
            continue;
        };

        match anchor {
            AnchorElement::Edge { id, curve, .. } => {
                let tangent = nearest_end_tangent(&curve, point.position);
                push_angle_pair(
                    tangent,
                    new_dir,
                    point.position,
                    CandidateSource::EdgeConnection { edge: id },
                    out,
                );
            }
            AnchorElement::Node { id, .. } => {
                let Some(edges) = geometry.connected_edges(id) else {
                    continue;
                };
                for &edge_id in edges {
                    let (Some(edge), Some(curve)) =
                        (geometry.lookup_edge(edge_id), geometry.lookup_curve(edge_id))
                    else {
                        continue;
                    };
                    let tangent = node_tangent(id, &edge, &curve);
                    push_angle_pair(
                        tangent,
                        new_dir,
                        point.position,
                        CandidateSource::NodeConnection {
                            node: id,
                            edge: edge_id,
                        },
                        out,
                    );
                }
            }
        }
    }
}

/// Alle Anschlusswinkel als eigene Liste.
pub fn connection_angles<G: GeometryProvider + ?Sized>(
    points: &[PathPoint],
    geometry: &G,
) -> Vec<AngleCandidate> {
    let mut out = Vec::new();
    collect_connection_angles(points, geometry, &mut out);
    out
}

/// Richtung des neuen Segments an einem End-Kontrollpunkt.
///
/// Erster Punkt: vom Punkt zum Nachfolger. Letzter Punkt: vom Vorgaenger
/// zum Punkt. Innere Punkte liefern `None`.
fn new_segment_direction(points: &[PathPoint], index: usize) -> Option<DVec2> {
    let last = points.len().checked_sub(1)?;
    if index == 0 && points.len() > 1 {
        safe_direction(points[0].position, points[1].position)
    } else if index == last && index > 0 {
        safe_direction(points[index - 1].position, points[index].position)
    } else {
        None
    }
}

/// Nach aussen zeigende Tangente am naeheren Kurvenende.
///
/// Am Start die Start-Tangente, am Ende die negierte End-Tangente.
fn nearest_end_tangent(curve: &Bezier, position: DVec3) -> DVec3 {
    if position.distance(curve.a) < position.distance(curve.d) {
        curve.start_tangent()
    } else {
        -curve.end_tangent()
    }
}

/// Nach aussen zeigende Tangente einer Kante an einem ihrer Knoten.
fn node_tangent(node: ElementId, edge: &Edge, curve: &Bezier) -> DVec3 {
    if edge.start == node {
        curve.start_tangent()
    } else {
        -curve.end_tangent()
    }
}

/// Berechnet Winkel und Ergaenzungswinkel und haengt beide an.
///
/// Ein degenerierter Rohwinkel (fast 0° oder fast 180°) verwirft das Paar.
fn push_angle_pair(
    tangent: DVec3,
    new_dir: DVec2,
    vertex: DVec3,
    source: CandidateSource,
    out: &mut Vec<AngleCandidate>,
) {
    let Some(existing_dir) = planar_tangent_direction(tangent) else {
        log::trace!("Anschlusswinkel uebersprungen: Tangente ohne Richtung");
        return;
    };

    let angle = angle_between(existing_dir, new_dir);
    if !is_displayable_angle(angle) {
        return;
    }

    let supplement = 180.0 - angle;
    for degrees in [angle, supplement] {
        out.push(AngleCandidate {
            degrees,
            vertex,
            source,
        });
    }
}
