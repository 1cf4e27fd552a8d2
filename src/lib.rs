//! Road Precision: praezise Winkel-, Laengen- und Steigungs-Tooltips fuer
//! ein Strassenbau-Tool.
//! Core-Funktionalitaet als Library exportiert fuer Host-Adapter, Tests und Replay.

pub mod app;
pub mod core;
pub mod precision;
pub mod shared;

pub use app::{
    FrameInput, FrameSnapshot, PendingSnapshot, PrecisionOverlay, Scenario, ToolMode, ToolState,
};
pub use core::{
    Bezier, GeometryProvider, NetworkSnapshot, PathPoint, PathSegmentRecord, ReferenceTooltip,
    RefinedTooltip, ScreenProjector, TopDownCamera,
};
pub use precision::{AngleCandidate, CourseSummary, EffectiveDecimals};
pub use shared::{AngleDisplayMode, PrecisionOptions};
