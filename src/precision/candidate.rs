//! Praeziser Winkel-Kandidat inklusive Herkunft.

use glam::DVec3;
use serde::Serialize;

use crate::core::ElementId;

/// Woher ein Winkel-Kandidat stammt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateSource {
    /// Innenwinkel zwischen zwei aufeinanderfolgenden Pfad-Segmenten
    Interior,
    /// Anschluss an eine bestehende Kante
    EdgeConnection { edge: ElementId },
    /// Anschluss an einen Knoten, gemessen gegen eine seiner Kanten
    NodeConnection { node: ElementId, edge: ElementId },
}

/// Ein praeziser Winkel, unabhaengig vom gerundeten Referenz-Renderer berechnet.
///
/// Die Position bindet den Kandidaten nicht an einen Referenz-Tooltip; sie
/// wird nur im `ShowAllCandidates`-Modus zur Platzierung genutzt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AngleCandidate {
    /// Winkel in Grad
    pub degrees: f64,
    /// Scheitelpunkt in Weltkoordinaten
    pub vertex: DVec3,
    /// Herkunft
    pub source: CandidateSource,
}
