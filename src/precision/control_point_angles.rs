//! Innenwinkel zwischen aufeinanderfolgenden Kontrollpunkten.

use crate::core::vector_math::{angle_between, is_displayable_angle, safe_direction};
use crate::core::PathPoint;

use super::candidate::{AngleCandidate, CandidateSource};

/// Haengt die Innenwinkel aller Punkt-Tripel an `out` an.
///
/// Fuer jedes Tripel (P[i-2], P[i-1], P[i]) wird der Winkel am mittleren
/// Punkt zwischen der Rueckwaerts-Richtung zum Vorgaenger und der
/// Vorwaerts-Richtung zum Nachfolger gemessen. Zu kurze Segmente und fast
/// gerade oder fast null Grad grosse Winkel werden verworfen.
pub fn collect_interior_angles(points: &[PathPoint], out: &mut Vec<AngleCandidate>) {
    for triple in points.windows(3) {
        let [before, vertex, after] = triple else {
            continue;
        };

        let (Some(backward), Some(forward)) = (
            safe_direction(vertex.position, before.position),
            safe_direction(vertex.position, after.position),
        ) else {
            log::trace!("Innenwinkel uebersprungen: Segment zu kurz");
            continue;
        };

        let degrees = angle_between(backward, forward);
        if is_displayable_angle(degrees) {
            out.push(AngleCandidate {
                degrees,
                vertex: vertex.position,
                source: CandidateSource::Interior,
            });
        }
    }
}

/// Alle Innenwinkel als eigene Liste.
pub fn interior_angles(points: &[PathPoint]) -> Vec<AngleCandidate> {
    let mut out = Vec::with_capacity(points.len().saturating_sub(2));
    collect_interior_angles(points, &mut out);
    out
}
