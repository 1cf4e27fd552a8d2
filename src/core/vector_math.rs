//! 2D-Richtungs- und Winkel-Primitive fuer alle Winkel-Rechner.
//!
//! Alle Richtungen leben in der Draufsicht (x/z-Ebene); die Hoehe (y)
//! spielt fuer Winkel keine Rolle.

use glam::{DVec2, DVec3};

use crate::shared::options::{DEGENERATE_ANGLE_MAX, DEGENERATE_ANGLE_MIN, MIN_SEGMENT_LENGTH};

/// Projiziert eine Weltposition auf die horizontale Ebene (x, z).
#[inline]
pub fn planar(v: DVec3) -> DVec2 {
    DVec2::new(v.x, v.z)
}

/// Horizontaler Abstand zweier Weltpositionen.
#[inline]
pub fn planar_distance(a: DVec3, b: DVec3) -> f64 {
    planar(a).distance(planar(b))
}

/// Winkel zwischen zwei Richtungen in Grad, Ergebnis in [0, 180].
///
/// Die Eingaben muessen bereits normalisiert sein. Das Skalarprodukt wird
/// vor `acos` auf [-1, 1] geklemmt, damit Rundungsfehler kein NaN erzeugen.
pub fn angle_between(dir_a: DVec2, dir_b: DVec2) -> f64 {
    dir_a.dot(dir_b).clamp(-1.0, 1.0).acos().to_degrees()
}

/// Einheitsrichtung von `from` nach `to` in der Draufsicht.
///
/// `None`, wenn der horizontale Abstand nicht ueber `MIN_SEGMENT_LENGTH` liegt.
pub fn safe_direction(from: DVec3, to: DVec3) -> Option<DVec2> {
    let delta = planar(to) - planar(from);
    let length = delta.length();
    if length > MIN_SEGMENT_LENGTH {
        Some(delta / length)
    } else {
        None
    }
}

/// Normalisierte Draufsicht-Richtung eines 3D-Tangentenvektors.
pub fn planar_tangent_direction(tangent: DVec3) -> Option<DVec2> {
    planar(tangent).try_normalize()
}

/// `true`, wenn ein Rohwinkel anzeigbar ist (nicht fast gerade, nicht fast null).
#[inline]
pub fn is_displayable_angle(degrees: f64) -> bool {
    degrees > DEGENERATE_ANGLE_MIN && degrees < DEGENERATE_ANGLE_MAX
}
