//! Zentrale Konfiguration fuer das Praezisions-Overlay.
//!
//! `PrecisionOptions` enthaelt alle zur Laufzeit aenderbaren Werte.
//! Die `const`-Werte sind feste Schwellwerte der Geometrie-Rechner.

use serde::{Deserialize, Serialize};

// ── Geometrie ───────────────────────────────────────────────────────

/// Minimale horizontale Segmentlaenge fuer eine Richtungsberechnung.
pub const MIN_SEGMENT_LENGTH: f64 = 0.01;
/// Untere Grenze (exklusiv) fuer anzeigbare Winkel in Grad.
pub const DEGENERATE_ANGLE_MIN: f64 = 0.1;
/// Obere Grenze (exklusiv) fuer anzeigbare Winkel in Grad.
pub const DEGENERATE_ANGLE_MAX: f64 = 179.9;

// ── Steigung ────────────────────────────────────────────────────────

/// Mindest-Kurvenlaenge (inklusiv), ab der Steigung und Mittelpunkt gemeldet werden.
pub const MIN_SLOPE_CURVE_LENGTH: f64 = 12.0;
/// Steigungen (in %) mit kleinerem Betrag werden auf exakt 0 gesetzt.
pub const SLOPE_SNAP_THRESHOLD: f64 = 0.05;

// ── Anzeige ─────────────────────────────────────────────────────────

/// Maximale Nachkommastellen.
pub const MAX_DECIMAL_PLACES: u8 = 4;
/// Standard-Nachkommastellen fuer Distanz und Winkel.
pub const DEFAULT_DECIMAL_PLACES: u8 = 2;
/// Kennung der praezisen Tooltips (unterscheidet sie von den gerundeten).
pub const DISPLAY_TAG: &str = "[P]";
/// Vertikaler Versatz der Hilfslinien-Tooltips in Pixeln.
pub const GUIDE_TOOLTIP_OFFSET_Y: f64 = 55.0;
/// Horizontaler Versatz der Pfad-Tooltips (Laenge/Steigung) in Pixeln.
pub const COURSE_TOOLTIP_OFFSET_X: f64 = 300.0;

// ── Polling ─────────────────────────────────────────────────────────

/// Einstellungen werden nur in jedem n-ten Zyklus neu gelesen.
pub const SETTINGS_CHECK_INTERVAL: u32 = 60;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Darstellung der Winkel-Tooltips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AngleDisplayMode {
    /// Praeziser Wert nur, wenn er auf den gerundeten Referenzwert passt; sonst unterdrueckt
    #[default]
    MatchOrSuppress,
    /// Jeder praezise Kandidat als eigener Tooltip am Scheitelpunkt (ohne Abgleich)
    ShowAllCandidates,
}

/// Alle zur Laufzeit aenderbaren Overlay-Optionen.
/// Wird als `road_precision.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrecisionOptions {
    /// Nachkommastellen fuer Laengen (0..=4)
    pub distance_decimal_places: u8,
    /// Nachkommastellen fuer Winkel und Steigung (0..=4)
    pub angle_decimal_places: u8,
    /// Laengen mit Nachkommastellen anzeigen (aus = ganzzahlig)
    pub enable_float_distance: bool,
    /// Winkel mit Nachkommastellen anzeigen (aus = ganzzahlig)
    pub enable_float_angle: bool,
    /// Abgleich-Strategie fuer Winkel-Tooltips
    pub angle_display_mode: AngleDisplayMode,
}

impl Default for PrecisionOptions {
    fn default() -> Self {
        Self {
            distance_decimal_places: DEFAULT_DECIMAL_PLACES,
            angle_decimal_places: DEFAULT_DECIMAL_PLACES,
            enable_float_distance: true,
            enable_float_angle: true,
            angle_display_mode: AngleDisplayMode::default(),
        }
    }
}

impl PrecisionOptions {
    /// Laedt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.clamped()
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("road-precision"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("road_precision.toml")
    }

    /// Begrenzt die Nachkommastellen auf den Slider-Bereich 0..=4.
    pub fn clamped(mut self) -> Self {
        self.distance_decimal_places = self.distance_decimal_places.min(MAX_DECIMAL_PLACES);
        self.angle_decimal_places = self.angle_decimal_places.min(MAX_DECIMAL_PLACES);
        self
    }
}
