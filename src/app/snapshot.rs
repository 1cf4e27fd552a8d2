//! Eingaben eines Zyklus und deren (ggf. nebenlaeufige) Bereitstellung.

use std::thread::JoinHandle;

use serde::{Deserialize, Serialize};

use crate::core::{GeometryProvider, NetworkSnapshot, PathPoint, PathSegmentRecord, ReferenceTooltip};

/// Modus des Bau-Tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolMode {
    /// Neue Strasse bauen
    #[default]
    Create,
    /// Bestehende Strasse ersetzen (keine Pfad-Messung)
    Replace,
    /// Sonstige Modi
    Other,
}

/// Zustand des Bau-Tools im aktuellen Zyklus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolState {
    /// Tool ist aktiv
    pub active: bool,
    /// Aktueller Modus
    pub mode: ToolMode,
}

impl ToolState {
    /// Aktives Tool im Bau-Modus.
    pub fn creating() -> Self {
        Self {
            active: true,
            mode: ToolMode::Create,
        }
    }

    /// Werden praezise Winkel-Kandidaten berechnet?
    pub fn computes_angles(&self) -> bool {
        self.active
    }

    /// Nimmt der Pfad an der Laengen-/Steigungsmessung teil?
    pub fn measures_courses(&self) -> bool {
        self.active && self.mode != ToolMode::Replace
    }
}

/// Read-only Sicht auf alle Eingaben eines Zyklus.
#[derive(Clone, Copy)]
pub struct FrameInput<'a> {
    /// Zustand des Bau-Tools
    pub tool: ToolState,
    /// Kontrollpunkte in Zeichenrichtung
    pub control_points: &'a [PathPoint],
    /// Geometrie-Zugriff auf das bestehende Netz
    pub geometry: &'a dyn GeometryProvider,
    /// Platzierte Courses (ungeordnet)
    pub courses: &'a [PathSegmentRecord],
    /// Gerundete Referenz-Tooltips dieses Zyklus
    pub references: &'a [ReferenceTooltip],
}

/// Besitzende, serialisierbare Variante der Zyklus-Eingaben.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameSnapshot {
    pub tool: ToolState,
    pub network: NetworkSnapshot,
    pub control_points: Vec<PathPoint>,
    pub courses: Vec<PathSegmentRecord>,
    pub references: Vec<ReferenceTooltip>,
}

impl FrameSnapshot {
    /// Leiht den Snapshot als Zyklus-Eingabe aus.
    pub fn as_input(&self) -> FrameInput<'_> {
        FrameInput {
            tool: self.tool,
            control_points: &self.control_points,
            geometry: &self.network,
            courses: &self.courses,
            references: &self.references,
        }
    }
}

/// Ein Snapshot, der bereits vorliegt oder noch im Hintergrund gebaut wird.
pub enum PendingSnapshot<T> {
    /// Sofort lesbar
    Ready(T),
    /// Wird in einem eigenen Thread gebaut
    Building(JoinHandle<T>),
}

impl<T: Send + 'static> PendingSnapshot<T> {
    /// Bereits fertiger Snapshot.
    pub fn ready(value: T) -> Self {
        Self::Ready(value)
    }

    /// Startet den Aufbau in einem Hintergrund-Thread.
    pub fn spawn<F>(build: F) -> Self
    where
        F: FnOnce() -> T + Send + 'static,
    {
        Self::Building(std::thread::spawn(build))
    }

    /// Liegt der Snapshot ohne Warten vor?
    pub fn is_ready(&self) -> bool {
        match self {
            Self::Ready(_) => true,
            Self::Building(handle) => handle.is_finished(),
        }
    }

    /// Blockiert bis der Snapshot fertig ist.
    pub fn complete(self) -> anyhow::Result<T> {
        match self {
            Self::Ready(value) => Ok(value),
            Self::Building(handle) => handle
                .join()
                .map_err(|_| anyhow::anyhow!("Snapshot-Aufbau ist abgebrochen (Thread-Panic)")),
        }
    }
}
