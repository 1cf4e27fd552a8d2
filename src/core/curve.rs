//! Kubische Bézier-Kurve in 3D (Draufsicht x/z, Hoehe y).
//!
//! Liefert Position, Start-/End-Tangente, Teilstuecke und die
//! horizontale Bogenlaenge eines Teilbereichs.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use super::vector_math::planar_distance;

/// Stuetzstellen fuer die Bogenlaengen-Approximation.
pub const ARC_LENGTH_SAMPLES: usize = 128;

/// Kubische Bézier-Kurve mit vier Kontrollpunkten.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bezier {
    /// Startpunkt
    pub a: DVec3,
    /// Erster Steuerpunkt
    pub b: DVec3,
    /// Zweiter Steuerpunkt
    pub c: DVec3,
    /// Endpunkt
    pub d: DVec3,
}

impl Bezier {
    /// Erstellt eine Kurve aus vier Kontrollpunkten.
    pub fn new(a: DVec3, b: DVec3, c: DVec3, d: DVec3) -> Self {
        Self { a, b, c, d }
    }

    /// Gerade Strecke als Bézier (Steuerpunkte auf den Dritteln).
    pub fn line(start: DVec3, end: DVec3) -> Self {
        Self {
            a: start,
            b: start.lerp(end, 1.0 / 3.0),
            c: start.lerp(end, 2.0 / 3.0),
            d: end,
        }
    }

    /// B(t) = (1-t)³·A + 3(1-t)²t·B + 3(1-t)t²·C + t³·D
    pub fn position(&self, t: f64) -> DVec3 {
        let inv = 1.0 - t;
        let inv2 = inv * inv;
        let t2 = t * t;
        inv2 * inv * self.a + 3.0 * inv2 * t * self.b + 3.0 * inv * t2 * self.c + t2 * t * self.d
    }

    /// Tangente am Startpunkt (zeigt in Kurvenrichtung).
    ///
    /// Faellt auf den naechsten unterscheidbaren Kontrollpunkt zurueck,
    /// wenn Steuerpunkt und Startpunkt zusammenfallen.
    pub fn start_tangent(&self) -> DVec3 {
        [self.b, self.c, self.d]
            .into_iter()
            .map(|p| p - self.a)
            .find(|t| *t != DVec3::ZERO)
            .unwrap_or(DVec3::ZERO)
    }

    /// Tangente am Endpunkt (zeigt in Kurvenrichtung, also zum Endpunkt hin).
    pub fn end_tangent(&self) -> DVec3 {
        [self.c, self.b, self.a]
            .into_iter()
            .map(|p| self.d - p)
            .find(|t| *t != DVec3::ZERO)
            .unwrap_or(DVec3::ZERO)
    }

    /// Schneidet den Parameterbereich [t0, t1] als eigene Kurve heraus (de Casteljau).
    pub fn cut(&self, t0: f64, t1: f64) -> Self {
        if t0 == 0.0 && t1 == 1.0 {
            return *self;
        }
        // Hintere Haelfte ab t0, danach vordere Haelfte bis zum umgerechneten t1
        let tail = self.split(t0).1;
        if t0 >= 1.0 {
            return tail;
        }
        let local_t1 = (t1 - t0) / (1.0 - t0);
        tail.split(local_t1).0
    }

    /// Teilt die Kurve bei `t` in zwei Kurven.
    pub fn split(&self, t: f64) -> (Self, Self) {
        let ab = self.a.lerp(self.b, t);
        let bc = self.b.lerp(self.c, t);
        let cd = self.c.lerp(self.d, t);
        let abc = ab.lerp(bc, t);
        let bcd = bc.lerp(cd, t);
        let mid = abc.lerp(bcd, t);
        (
            Self::new(self.a, ab, abc, mid),
            Self::new(mid, bcd, cd, self.d),
        )
    }

    /// Horizontale Bogenlaenge (x/z) ueber Polylinien-Segmente.
    pub fn planar_length(&self) -> f64 {
        let mut length = 0.0;
        let mut prev = self.a;
        for i in 1..=ARC_LENGTH_SAMPLES {
            let t = i as f64 / ARC_LENGTH_SAMPLES as f64;
            let p = self.position(t);
            length += planar_distance(prev, p);
            prev = p;
        }
        length
    }

    /// Horizontale Bogenlaenge nur ueber den Teilbereich [t0, t1].
    pub fn planar_length_between(&self, t0: f64, t1: f64) -> f64 {
        let (lo, hi) = if t0 <= t1 { (t0, t1) } else { (t1, t0) };
        self.cut(lo, hi).planar_length()
    }
}
