//! Pro-Zyklus-Treiber des Praezisions-Overlays.
//!
//! Ein Aufruf von [`PrecisionOverlay::refresh`] fuehrt die gesamte Pipeline
//! synchron aus: Einstellungen pruefen, Kandidaten berechnen, Referenzen
//! verfeinern, Courses aggregieren und die Tooltips platzieren. Alle Puffer
//! gehoeren dem Overlay und werden pro Zyklus geleert und neu gefuellt.

use glam::{DVec2, DVec3};

use crate::core::{
    ProjectedPoint, ReferenceCategory, RefinedTooltip, ScreenProjector, TooltipAnchor,
    TooltipCategory, TooltipKey,
};
use crate::precision::{
    collect_candidates, format_label, refine_reference, AngleCandidate, CourseAggregator,
    CourseSummary,
};
use crate::shared::options::{COURSE_TOOLTIP_OFFSET_X, DISPLAY_TAG, GUIDE_TOOLTIP_OFFSET_Y};
use crate::shared::{AngleDisplayMode, PrecisionOptions};

use super::settings::{AppliedSettings, SettingsPoller};
use super::snapshot::FrameInput;

/// Besitzt Einstellungs-Cache und alle Ausgabe-Puffer.
#[derive(Debug, Clone)]
pub struct PrecisionOverlay {
    poller: SettingsPoller,
    candidates: Vec<AngleCandidate>,
    aggregator: CourseAggregator,
    summary: Option<CourseSummary>,
    output: Vec<RefinedTooltip>,
}

impl PrecisionOverlay {
    /// Erstellt das Overlay mit den Start-Optionen.
    pub fn new(options: &PrecisionOptions) -> Self {
        Self {
            poller: SettingsPoller::new(options),
            candidates: Vec::new(),
            aggregator: CourseAggregator::new(),
            summary: None,
            output: Vec::new(),
        }
    }

    /// Fuehrt einen Zyklus aus und liefert die Tooltips dieses Zyklus.
    ///
    /// Ohne `projector` (keine Kamera) werden nur die Kandidaten berechnet;
    /// platziert wird dann nichts.
    pub fn refresh(
        &mut self,
        frame: &FrameInput<'_>,
        options: &PrecisionOptions,
        projector: Option<&dyn ScreenProjector>,
    ) -> &[RefinedTooltip] {
        self.poller.tick(options);
        let settings = self.poller.applied();

        self.output.clear();
        self.candidates.clear();
        self.summary = None;

        if frame.tool.computes_angles() {
            collect_candidates(frame.control_points, frame.geometry, &mut self.candidates);
        }

        let Some(projector) = projector else {
            log::trace!("Keine Projektion verfuegbar, Tooltips uebersprungen");
            return &self.output;
        };

        self.emit_guides(frame, settings, projector);
        if settings.angle_display_mode == AngleDisplayMode::ShowAllCandidates {
            self.emit_all_candidates(settings, projector);
        }

        if frame.tool.measures_courses() {
            self.summary = self.aggregator.aggregate(frame.courses);
            if let Some(summary) = self.summary {
                self.emit_course(&summary, settings, projector);
            }
        }

        &self.output
    }

    /// Tooltips des letzten Zyklus.
    pub fn tooltips(&self) -> &[RefinedTooltip] {
        &self.output
    }

    /// Praezise Kandidaten des letzten Zyklus.
    pub fn candidates(&self) -> &[AngleCandidate] {
        &self.candidates
    }

    /// Pfad-Kennzahlen des letzten Zyklus, falls gemessen.
    pub fn course_summary(&self) -> Option<&CourseSummary> {
        self.summary.as_ref()
    }

    /// Aktuell angewendete Einstellungen.
    pub fn settings(&self) -> AppliedSettings {
        self.poller.applied()
    }

    /// Verfeinert die Referenz-Tooltips (Hilfslinien).
    fn emit_guides(
        &mut self,
        frame: &FrameInput<'_>,
        settings: AppliedSettings,
        projector: &dyn ScreenProjector,
    ) {
        for (index, reference) in frame.references.iter().enumerate() {
            let value = match reference.category {
                ReferenceCategory::Length => reference.value,
                ReferenceCategory::Angle => {
                    // Im Fallback-Modus stehen die Kandidaten fuer sich
                    if settings.angle_display_mode == AngleDisplayMode::ShowAllCandidates
                        || self.candidates.is_empty()
                    {
                        continue;
                    }
                    match refine_reference(reference, &self.candidates) {
                        Some(value) => value,
                        None => continue,
                    }
                }
            };
            let Some(anchor) = guide_anchor(projector, reference.position) else {
                continue;
            };
            self.push(
                TooltipKey::Guide(index),
                reference.category.into(),
                value,
                anchor,
                settings,
            );
        }
    }

    /// Jeder Kandidat als eigener Winkel-Tooltip an seinem Scheitelpunkt.
    fn emit_all_candidates(&mut self, settings: AppliedSettings, projector: &dyn ScreenProjector) {
        let candidates = std::mem::take(&mut self.candidates);
        for (index, candidate) in candidates.iter().enumerate() {
            let Some(anchor) = guide_anchor(projector, candidate.vertex) else {
                continue;
            };
            self.push(
                TooltipKey::Candidate(index),
                TooltipCategory::Angle,
                candidate.degrees,
                anchor,
                settings,
            );
        }
        self.candidates = candidates;
    }

    /// Laenge und Steigung des Gesamtpfads als Gruppe.
    ///
    /// Zu kurze Pfade (ohne Steigung) bekommen keine Tooltips.
    fn emit_course(
        &mut self,
        summary: &CourseSummary,
        settings: AppliedSettings,
        projector: &dyn ScreenProjector,
    ) {
        let Some(slope) = summary.slope else {
            return;
        };
        let anchor = course_anchor(projector, slope.midpoint);
        self.push(
            TooltipKey::CourseLength,
            TooltipCategory::Length,
            summary.curve_length,
            anchor,
            settings,
        );
        self.push(
            TooltipKey::CourseSlope,
            TooltipCategory::Slope,
            slope.slope_percent,
            anchor,
            settings,
        );
    }

    fn push(
        &mut self,
        key: TooltipKey,
        category: TooltipCategory,
        value: f64,
        anchor: TooltipAnchor,
        settings: AppliedSettings,
    ) {
        let decimal_places = settings.decimals.for_category(category);
        self.output.push(RefinedTooltip {
            key,
            category,
            value,
            decimal_places,
            anchor,
            display_tag: DISPLAY_TAG,
            icon: category.icon(),
            label: format_label(value, decimal_places, category),
        });
    }
}

/// Hilfslinien-Tooltip: projizierte Position, nach unten versetzt.
fn guide_anchor(projector: &dyn ScreenProjector, world: DVec3) -> Option<TooltipAnchor> {
    let ProjectedPoint { position, visible } = projector.world_to_screen(world)?;
    Some(TooltipAnchor::Screen {
        position: position + DVec2::new(0.0, GUIDE_TOOLTIP_OFFSET_Y),
        visible,
    })
}

/// Pfad-Gruppe: sichtbarer Mittelpunkt nach rechts versetzt, sonst am Mauszeiger.
fn course_anchor(projector: &dyn ScreenProjector, midpoint: DVec3) -> TooltipAnchor {
    match projector.world_to_screen(midpoint) {
        Some(ProjectedPoint {
            position,
            visible: true,
        }) => TooltipAnchor::Screen {
            position: position + DVec2::new(COURSE_TOOLTIP_OFFSET_X, 0.0),
            visible: true,
        },
        _ => TooltipAnchor::Pointer,
    }
}
