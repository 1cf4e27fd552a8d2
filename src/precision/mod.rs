//! Praezisions-Rechner: Winkel-Kandidaten, Referenz-Abgleich, Pfad-Aggregation
//! und Formatierung. Reine Funktionen ohne Host-Zustand.

pub mod candidate;
pub mod connection_angles;
pub mod control_point_angles;
pub mod course_aggregator;
pub mod formatter;
pub mod matcher;

pub use candidate::{AngleCandidate, CandidateSource};
pub use connection_angles::{collect_connection_angles, connection_angles};
pub use control_point_angles::{collect_interior_angles, interior_angles};
pub use course_aggregator::{
    parameter_at_distance, position_at_distance, slope_percent, sort_courses, CourseAggregator,
    CourseSummary, SlopeReport,
};
pub use formatter::{effective_decimal_places, format_label, format_value, EffectiveDecimals};
pub use matcher::{match_angle, reference_round, refine_reference};

use crate::core::{GeometryProvider, PathPoint};

/// Fuellt `out` mit allen Kandidaten eines Zyklus (Innenwinkel, dann Anschluesse).
///
/// Der Puffer wird vorher geleert.
pub fn collect_candidates<G: GeometryProvider + ?Sized>(
    points: &[PathPoint],
    geometry: &G,
    out: &mut Vec<AngleCandidate>,
) {
    out.clear();
    collect_interior_angles(points, out);
    collect_connection_angles(points, geometry, out);
}
