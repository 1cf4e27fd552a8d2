//! Nachkommastellen und Anzeigetext der praezisen Tooltips.

use serde::Serialize;

use crate::core::TooltipCategory;
use crate::shared::options::{DISPLAY_TAG, MAX_DECIMAL_PLACES};
use crate::shared::PrecisionOptions;

/// Tatsaechlich verwendete Nachkommastellen je Wertart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct EffectiveDecimals {
    /// Fuer Laengen
    pub distance: u8,
    /// Fuer Winkel und Steigung
    pub angle: u8,
}

impl EffectiveDecimals {
    /// Leitet die effektiven Stellen aus den Optionen ab.
    pub fn from_options(options: &PrecisionOptions) -> Self {
        Self {
            distance: effective_decimal_places(
                options.enable_float_distance,
                options.distance_decimal_places,
            ),
            angle: effective_decimal_places(options.enable_float_angle, options.angle_decimal_places),
        }
    }

    /// Stellen fuer eine Tooltip-Kategorie (Steigung folgt den Winkel-Stellen).
    pub fn for_category(&self, category: TooltipCategory) -> u8 {
        match category {
            TooltipCategory::Length => self.distance,
            TooltipCategory::Angle | TooltipCategory::Slope => self.angle,
        }
    }
}

/// 0 bei ausgeschaltetem Float-Schalter, sonst die konfigurierte Zahl (max. 4).
pub fn effective_decimal_places(enable_float: bool, configured: u8) -> u8 {
    if enable_float {
        configured.min(MAX_DECIMAL_PLACES)
    } else {
        0
    }
}

/// Formatiert mit fester Stellenzahl; `-0.00` wird zu `0.00`.
pub fn format_value(value: f64, decimals: u8) -> String {
    let text = format!("{:.*}", decimals as usize, value);
    match text.strip_prefix('-') {
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_string(),
        _ => text,
    }
}

/// Kompletter Anzeigetext, z.B. `[P] 12.35m`.
pub fn format_label(value: f64, decimals: u8, category: TooltipCategory) -> String {
    format!(
        "{} {}{}",
        DISPLAY_TAG,
        format_value(value, decimals),
        category.unit_suffix()
    )
}
