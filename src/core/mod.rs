//! Core-Domaenentypen: Kurven, Netz-Snapshot, Pfad, Courses, Tooltips, Kamera.

pub mod camera;
pub mod course;
pub mod curve;
pub mod network;
pub mod path;
pub mod tooltip;
pub mod vector_math;

pub use camera::{ProjectedPoint, ScreenProjector, TopDownCamera};
pub use course::{CoursePosFlags, CreationFlags, PathSegmentRecord, SegmentEndpoint};
pub use curve::Bezier;
pub use network::{
    AnchorElement, Edge, EdgeRecord, ElementId, GeometryProvider, NetNode, NetworkSnapshot,
    NodeRecord,
};
pub use path::PathPoint;
pub use tooltip::{
    ReferenceCategory, ReferenceTooltip, RefinedTooltip, TooltipAnchor, TooltipCategory, TooltipKey,
};
