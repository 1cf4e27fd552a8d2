//! Abgleich praeziser Kandidaten mit gerundeten Referenzwerten.
//!
//! Die Referenz-Tooltips werden unabhaengig von den Kandidaten erzeugt und
//! sind nicht index-gleich mit ihnen. Zugeordnet wird deshalb ueber den
//! gerundeten Wert: nur ein Kandidat, der exakt auf die Referenz rundet,
//! darf deren Nachkommastellen liefern.

use crate::core::{ReferenceCategory, ReferenceTooltip};

use super::candidate::AngleCandidate;

/// Rundung wie beim Referenz-Renderer (Halbwerte zur geraden Zahl).
#[inline]
pub fn reference_round(value: f64) -> f64 {
    value.round_ties_even()
}

/// Waehlt den Kandidaten, der auf `reference` rundet und ihm am naechsten liegt.
///
/// Bei Gleichstand gewinnt der zuerst berechnete Kandidat. `None`, wenn
/// kein Kandidat auf denselben Wert rundet.
pub fn match_angle(reference: f64, candidates: &[AngleCandidate]) -> Option<&AngleCandidate> {
    let rounded = reference_round(reference);
    candidates
        .iter()
        .filter(|c| reference_round(c.degrees) == rounded)
        .min_by(|a, b| {
            (a.degrees - reference)
                .abs()
                .total_cmp(&(b.degrees - reference).abs())
        })
}

/// Praeziser Wert fuer einen Referenz-Tooltip, `None` = Tooltip unterdruecken.
///
/// Laengen tragen bereits volle Praezision und werden direkt uebernommen;
/// Winkel brauchen einen passenden Kandidaten.
pub fn refine_reference(reference: &ReferenceTooltip, candidates: &[AngleCandidate]) -> Option<f64> {
    match reference.category {
        ReferenceCategory::Length => Some(reference.value),
        ReferenceCategory::Angle => {
            let matched = match_angle(reference.value, candidates);
            if matched.is_none() {
                log::debug!(
                    "Kein praeziser Winkel rundet auf {}° ({} Kandidaten), Tooltip unterdrueckt",
                    reference_round(reference.value),
                    candidates.len()
                );
            }
            matched.map(|c| c.degrees)
        }
    }
}
