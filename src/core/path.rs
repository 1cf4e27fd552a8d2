//! Kontrollpunkte des gerade gezeichneten Pfads.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use super::network::ElementId;

/// Ein Kontrollpunkt des Pfads, optional auf ein Netz-Element gesnappt.
///
/// Die Reihenfolge in der Punktliste entspricht der Zeichenrichtung.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathPoint {
    /// Weltposition (x/z Draufsicht, y Hoehe)
    pub position: DVec3,
    /// Snap-Ziel (Kante oder Knoten), `None` fuer freie Punkte
    #[serde(default)]
    pub anchor: Option<ElementId>,
}

impl PathPoint {
    /// Freier Punkt ohne Snap.
    pub fn free(position: DVec3) -> Self {
        Self {
            position,
            anchor: None,
        }
    }

    /// Auf ein Netz-Element gesnappter Punkt.
    pub fn anchored(position: DVec3, anchor: ElementId) -> Self {
        Self {
            position,
            anchor: Some(anchor),
        }
    }
}
