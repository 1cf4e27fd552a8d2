//! Tooltip-Eingaben (gerundete Referenz) und -Ausgaben (praezise Werte).

use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

/// Kategorie eines gerundeten Referenz-Tooltips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceCategory {
    Angle,
    Length,
}

/// Vom externen Renderer erzeugter, gerundeter Mess-Tooltip (read-only).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceTooltip {
    /// Winkel oder Laenge
    pub category: ReferenceCategory,
    /// Wert, auf dem die gerundete Anzeige basiert
    pub value: f64,
    /// Weltposition, an der der Referenz-Renderer den Tooltip verankert
    pub position: DVec3,
}

/// Kategorie eines praezisen Tooltips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TooltipCategory {
    Angle,
    Length,
    Slope,
}

impl TooltipCategory {
    /// Einheiten-Suffix fuer die Anzeige.
    pub fn unit_suffix(self) -> &'static str {
        match self {
            TooltipCategory::Angle => "°",
            TooltipCategory::Length => "m",
            TooltipCategory::Slope => "%",
        }
    }

    /// Icon-Pfad des Overlays.
    pub fn icon(self) -> &'static str {
        match self {
            TooltipCategory::Angle => "Media/Glyphs/Angle.svg",
            TooltipCategory::Length => "Media/Glyphs/Length.svg",
            TooltipCategory::Slope => "Media/Glyphs/Slope.svg",
        }
    }
}

impl From<ReferenceCategory> for TooltipCategory {
    fn from(category: ReferenceCategory) -> Self {
        match category {
            ReferenceCategory::Angle => TooltipCategory::Angle,
            ReferenceCategory::Length => TooltipCategory::Length,
        }
    }
}

/// Stabiler Schluessel eines Tooltips ueber Zyklen hinweg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TooltipKey {
    /// Verfeinerter Referenz-Tooltip (Index in der Referenzliste)
    Guide(usize),
    /// Freier Kandidat im `ShowAllCandidates`-Modus
    Candidate(usize),
    /// Gesamtlaenge des Pfads
    CourseLength,
    /// Steigung des Pfads
    CourseSlope,
}

/// Wo der Tooltip erscheinen soll.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TooltipAnchor {
    /// Feste Bildschirmposition in Pixeln
    Screen { position: DVec2, visible: bool },
    /// Am Mauszeiger (Ziel liegt ausserhalb des Bildschirms)
    Pointer,
}

/// Ausgabe des Kerns: praeziser Wert plus Darstellungsdaten.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RefinedTooltip {
    pub key: TooltipKey,
    pub category: TooltipCategory,
    /// Praeziser Wert (ungerundet)
    pub value: f64,
    /// Effektive Nachkommastellen fuer die Anzeige
    pub decimal_places: u8,
    pub anchor: TooltipAnchor,
    /// Kennung, die den Tooltip vom gerundeten Original unterscheidet
    pub display_tag: &'static str,
    /// Icon-Pfad der Kategorie
    pub icon: &'static str,
    /// Fertig formatierter Anzeigetext, z.B. `[P] 89.73°`
    pub label: String,
}
