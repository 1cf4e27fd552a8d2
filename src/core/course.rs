//! Bereits platzierte Teilstuecke ("Courses") eines mehrteiligen Pfads.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use super::curve::Bezier;
use super::network::ElementId;

/// Flags eines Course-Endpunkts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CoursePosFlags {
    /// Erstes Stueck der Kette
    pub is_first: bool,
    /// Letztes Stueck der Kette
    pub is_last: bool,
    /// Paralleles Duplikat (z.B. zweite Fahrbahn), zaehlt nicht zur Messung
    pub is_parallel: bool,
}

/// Lebenszyklus-Flags eines Course.
///
/// Jedes gesetzte Flag schliesst den Course von der Messung aus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreationFlags {
    pub permanent: bool,
    pub delete: bool,
    pub upgrade: bool,
    pub invert: bool,
    pub align: bool,
}

impl CreationFlags {
    /// `true`, wenn keines der ausschliessenden Flags gesetzt ist.
    pub fn is_none(&self) -> bool {
        !(self.permanent || self.delete || self.upgrade || self.invert || self.align)
    }
}

/// Start- oder Endpunkt eines Course.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentEndpoint {
    /// Weltposition
    pub position: DVec3,
    /// Parameter auf der Course-Kurve (0..1)
    pub course_delta: f64,
    /// Endpunkt-Flags
    #[serde(default)]
    pub flags: CoursePosFlags,
}

impl SegmentEndpoint {
    /// Endpunkt ohne Flags.
    pub fn new(position: DVec3, course_delta: f64) -> Self {
        Self {
            position,
            course_delta,
            flags: CoursePosFlags::default(),
        }
    }
}

/// Ein platziertes Teilstueck des Pfads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathSegmentRecord {
    /// Startpunkt
    pub start: SegmentEndpoint,
    /// Endpunkt
    pub end: SegmentEndpoint,
    /// Zugrundeliegende Kurve (kann laenger sein als das Teilstueck)
    pub curve: Bezier,
    /// Platzierte Laenge (kann nach dem Zuschneiden von der Kurvenlaenge abweichen)
    pub length: f64,
    /// Lebenszyklus-Flags
    #[serde(default)]
    pub creation: CreationFlags,
    /// Bestehendes Element, das dieser Course ersetzt/aufwertet
    #[serde(default)]
    pub original: Option<ElementId>,
}

impl PathSegmentRecord {
    /// Course ueber die gesamte Kurve (Delta 0..1) mit horizontaler Kurvenlaenge.
    pub fn from_curve(curve: Bezier) -> Self {
        Self {
            start: SegmentEndpoint::new(curve.a, 0.0),
            end: SegmentEndpoint::new(curve.d, 1.0),
            curve,
            length: curve.planar_length(),
            creation: CreationFlags::default(),
            original: None,
        }
    }

    /// Markiert den Course als erstes Stueck der Kette.
    pub fn first(mut self) -> Self {
        self.start.flags.is_first = true;
        self
    }

    /// Nimmt der Course an der Pfad-Messung teil?
    ///
    /// Ausgeschlossen sind Courses mit Original-Element, mit gesetzten
    /// Lebenszyklus-Flags oder mit parallelem Startpunkt.
    pub fn is_measured(&self) -> bool {
        self.original.is_none() && self.creation.is_none() && !self.start.flags.is_parallel
    }

    /// Horizontale Bogenlaenge nur ueber den eigenen Delta-Bereich.
    pub fn curve_length(&self) -> f64 {
        self.curve
            .planar_length_between(self.start.course_delta, self.end.course_delta)
    }
}
