//! Aggregation der platzierten Courses zu einer zusammenhaengenden Kette.
//!
//! Die Courses kommen ungeordnet an. Sie werden ueber exakte Positions-
//! Gleichheit von End- und Startpunkt zu einer Kette sortiert, danach werden
//! Laenge, Mittelpunkt und Steigung des Gesamtpfads abgeleitet.

use glam::DVec3;
use serde::Serialize;

use crate::core::PathSegmentRecord;
use crate::shared::options::{MIN_SLOPE_CURVE_LENGTH, SLOPE_SNAP_THRESHOLD};

/// Steigung und Mittelpunkt eines ausreichend langen Pfads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SlopeReport {
    /// Steigung in Prozent (kleine Betraege auf 0 gesetzt)
    pub slope_percent: f64,
    /// Weltposition auf halber platzierter Laenge
    pub midpoint: DVec3,
}

/// Kennzahlen einer Course-Kette.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CourseSummary {
    /// Anzahl gemessener Courses
    pub course_count: usize,
    /// Summe der platzierten Laengen
    pub total_length: f64,
    /// Summe der horizontalen Bogenlaengen ueber die jeweiligen Delta-Bereiche
    pub curve_length: f64,
    /// Hoehe am Start der Kette
    pub start_elevation: f64,
    /// Hoehe am Ende der Kette
    pub end_elevation: f64,
    /// Nur gesetzt, wenn `curve_length >= MIN_SLOPE_CURVE_LENGTH`
    pub slope: Option<SlopeReport>,
}

/// Baut die Kette pro Zyklus neu auf; der Puffer wird wiederverwendet.
#[derive(Debug, Clone, Default)]
pub struct CourseAggregator {
    chain: Vec<PathSegmentRecord>,
}

impl CourseAggregator {
    /// Erstellt einen Aggregator mit leerem Ketten-Puffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filtert, sortiert und misst die Courses dieses Zyklus.
    ///
    /// `None`, wenn kein Course an der Messung teilnimmt.
    pub fn aggregate(&mut self, records: &[PathSegmentRecord]) -> Option<CourseSummary> {
        self.chain.clear();
        self.chain
            .extend(records.iter().filter(|r| r.is_measured()).copied());
        if self.chain.is_empty() {
            return None;
        }

        sort_courses(&mut self.chain);

        let total_length: f64 = self.chain.iter().map(|c| c.length).sum();
        let curve_length: f64 = self.chain.iter().map(|c| c.curve_length()).sum();
        let start_elevation = self.chain[0].start.position.y;
        let end_elevation = self.chain[self.chain.len() - 1].end.position.y;

        let slope = slope_percent(start_elevation, end_elevation, curve_length).and_then(|slope| {
            position_at_distance(&self.chain, total_length / 2.0).map(|midpoint| SlopeReport {
                slope_percent: slope,
                midpoint,
            })
        });

        Some(CourseSummary {
            course_count: self.chain.len(),
            total_length,
            curve_length,
            start_elevation,
            end_elevation,
            slope,
        })
    }

    /// Die sortierte Kette des letzten Aufrufs.
    pub fn chain(&self) -> &[PathSegmentRecord] {
        &self.chain
    }
}

/// Sortiert Courses in Ketten-Reihenfolge (in place).
///
/// Der Course mit `is_first` am Start wandert an Position 0. Danach wird fuer
/// jede Position der Course gesucht, dessen Start exakt dem aktuellen Ende
/// entspricht, und dahinter getauscht. Ohne Nachfolger bleibt die restliche
/// Reihenfolge erhalten.
pub fn sort_courses(chain: &mut [PathSegmentRecord]) {
    if let Some(first) = chain.iter().position(|c| c.start.flags.is_first) {
        chain.swap(0, first);
    }

    for i in 0..chain.len().saturating_sub(1) {
        let end = chain[i].end.position;
        if let Some(offset) = chain[i + 1..]
            .iter()
            .position(|c| c.start.position == end)
        {
            chain.swap(i + 1, i + 1 + offset);
        }
    }
}

/// Course-Index und Kurvenparameter auf der Distanz `distance` entlang der Kette.
///
/// Die Distanz wird ueber die platzierten Laengen akkumuliert; innerhalb
/// des getroffenen Course wird der Parameter linear zwischen Start- und
/// End-Delta interpoliert. `None` jenseits der Gesamtlaenge.
pub fn parameter_at_distance(chain: &[PathSegmentRecord], distance: f64) -> Option<(usize, f64)> {
    let mut accumulated = -distance;
    for (index, course) in chain.iter().enumerate() {
        accumulated += course.length;
        if accumulated >= 0.0 && course.length != 0.0 {
            let fraction = 1.0 - accumulated / course.length;
            let t = lerp(course.start.course_delta, course.end.course_delta, fraction);
            return Some((index, t));
        }
    }
    None
}

/// Weltposition auf der Distanz `distance` entlang der Kette.
///
/// Jenseits der Gesamtlaenge wird die Endposition des letzten Course geliefert.
pub fn position_at_distance(chain: &[PathSegmentRecord], distance: f64) -> Option<DVec3> {
    match parameter_at_distance(chain, distance) {
        Some((index, t)) => Some(chain[index].curve.position(t)),
        None => chain.last().map(|course| course.end.position),
    }
}

/// Steigung in Prozent: `100 · Δh / curve_length`.
///
/// `None` unterhalb von `MIN_SLOPE_CURVE_LENGTH` (Grenze inklusiv);
/// Betraege unter `SLOPE_SNAP_THRESHOLD` werden exakt 0.
pub fn slope_percent(start_elevation: f64, end_elevation: f64, curve_length: f64) -> Option<f64> {
    if curve_length.is_nan() || curve_length < MIN_SLOPE_CURVE_LENGTH {
        return None;
    }
    let slope = 100.0 * (end_elevation - start_elevation) / curve_length;
    if slope.abs() < SLOPE_SNAP_THRESHOLD {
        Some(0.0)
    } else {
        Some(slope)
    }
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests;
