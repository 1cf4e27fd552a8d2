//! Aufgezeichnete Zyklus-Eingaben fuer Replay und Tests (TOML).

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::TopDownCamera;

use super::snapshot::FrameSnapshot;

/// Ein gespeicherter Frame plus Kamera.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scenario {
    /// Kamera fuer die Platzierung; ohne Kamera wird nichts platziert
    #[serde(default)]
    pub camera: Option<TopDownCamera>,
    /// Eingaben des Zyklus
    #[serde(default)]
    pub frame: FrameSnapshot,
}

impl Scenario {
    /// Parst ein Szenario aus TOML-Text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let scenario: Self = toml::from_str(content).context("Szenario ist kein gueltiges TOML")?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Laedt ein Szenario aus einer Datei.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Szenario nicht lesbar: {}", path.display()))?;
        let scenario = Self::from_toml(&content)
            .with_context(|| format!("Fehler beim Laden von {}", path.display()))?;
        log::info!(
            "Szenario geladen: {} Kontrollpunkte, {} Courses, {} Referenzen, {} Kanten",
            scenario.frame.control_points.len(),
            scenario.frame.courses.len(),
            scenario.frame.references.len(),
            scenario.frame.network.edge_count()
        );
        Ok(scenario)
    }

    fn validate(&self) -> Result<()> {
        if let Some(camera) = &self.camera {
            if !(camera.zoom.is_finite() && camera.zoom > 0.0) {
                bail!("Kamera-Zoom muss positiv sein");
            }
        }
        if let Some(index) = self
            .frame
            .references
            .iter()
            .position(|r| !r.value.is_finite())
        {
            bail!("Referenz {} hat keinen endlichen Wert", index);
        }
        Ok(())
    }
}
