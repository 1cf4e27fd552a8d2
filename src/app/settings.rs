//! Periodische Erkennung von Einstellungs-Aenderungen.
//!
//! Die Optionen werden nicht abonniert, sondern alle
//! `SETTINGS_CHECK_INTERVAL` Zyklen mit dem zuletzt angewendeten Stand
//! verglichen. Zwischen zwei Pruefpunkten gilt der alte Stand weiter.

use crate::precision::EffectiveDecimals;
use crate::shared::options::SETTINGS_CHECK_INTERVAL;
use crate::shared::{AngleDisplayMode, PrecisionOptions};

/// Zuletzt angewendete Anzeige-Einstellungen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedSettings {
    /// Effektive Nachkommastellen
    pub decimals: EffectiveDecimals,
    /// Abgleich-Strategie fuer Winkel
    pub angle_display_mode: AngleDisplayMode,
}

impl AppliedSettings {
    fn from_options(options: &PrecisionOptions) -> Self {
        Self {
            decimals: EffectiveDecimals::from_options(options),
            angle_display_mode: options.angle_display_mode,
        }
    }
}

/// Zaehler plus Vergleich gegen den zuletzt angewendeten Stand.
#[derive(Debug, Clone)]
pub struct SettingsPoller {
    frame_counter: u32,
    applied: AppliedSettings,
}

impl SettingsPoller {
    /// Uebernimmt die Startwerte sofort.
    pub fn new(options: &PrecisionOptions) -> Self {
        let applied = AppliedSettings::from_options(options);
        log::info!(
            "Praezisions-Overlay: {} Stellen Distanz, {} Stellen Winkel, Modus {:?}",
            applied.decimals.distance,
            applied.decimals.angle,
            applied.angle_display_mode
        );
        Self {
            frame_counter: 0,
            applied,
        }
    }

    /// Zaehlt einen Zyklus; am Pruefpunkt werden die Optionen verglichen.
    ///
    /// Gibt `true` zurueck, wenn an diesem Pruefpunkt eine Aenderung
    /// uebernommen wurde.
    pub fn tick(&mut self, options: &PrecisionOptions) -> bool {
        self.frame_counter += 1;
        if self.frame_counter < SETTINGS_CHECK_INTERVAL {
            return false;
        }
        self.frame_counter = 0;

        let current = AppliedSettings::from_options(options);
        if current == self.applied {
            return false;
        }

        log::info!(
            "Einstellungen geaendert: Distanz {} → {}, Winkel {} → {}, Modus {:?} → {:?}",
            self.applied.decimals.distance,
            current.decimals.distance,
            self.applied.decimals.angle,
            current.decimals.angle,
            self.applied.angle_display_mode,
            current.angle_display_mode
        );
        self.applied = current;
        true
    }

    /// Aktuell gueltige Einstellungen.
    pub fn applied(&self) -> AppliedSettings {
        self.applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_is_detected_only_at_checkpoint() {
        let mut options = PrecisionOptions::default();
        let mut poller = SettingsPoller::new(&options);

        options.distance_decimal_places = 4;
        for _ in 0..SETTINGS_CHECK_INTERVAL - 1 {
            assert!(!poller.tick(&options));
            assert_eq!(poller.applied().decimals.distance, 2);
        }
        assert!(poller.tick(&options));
        assert_eq!(poller.applied().decimals.distance, 4);
    }

    #[test]
    fn test_unchanged_options_report_nothing() {
        let options = PrecisionOptions::default();
        let mut poller = SettingsPoller::new(&options);
        for _ in 0..3 * SETTINGS_CHECK_INTERVAL {
            assert!(!poller.tick(&options));
        }
    }

    #[test]
    fn test_float_toggle_changes_effective_places() {
        let mut options = PrecisionOptions::default();
        let mut poller = SettingsPoller::new(&options);
        options.enable_float_angle = false;
        let changed = (0..SETTINGS_CHECK_INTERVAL).any(|_| poller.tick(&options));
        assert!(changed);
        assert_eq!(poller.applied().decimals.angle, 0);
    }
}
