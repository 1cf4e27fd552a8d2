//! Application-Layer: Zyklus-Treiber, Einstellungs-Polling, Snapshots und Szenarien.

pub mod overlay;
pub mod scenario;
pub mod settings;
pub mod snapshot;

pub use overlay::PrecisionOverlay;
pub use scenario::Scenario;
pub use settings::{AppliedSettings, SettingsPoller};
pub use snapshot::{FrameInput, FrameSnapshot, PendingSnapshot, ToolMode, ToolState};
