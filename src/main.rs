//! Road Precision Replay.
//!
//! Spielt ein aufgezeichnetes Szenario durch das Praezisions-Overlay und gibt
//! die erzeugten Tooltips als JSON aus.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use road_precision::app::PrecisionOverlay;
use road_precision::core::ScreenProjector;
use road_precision::precision::{AngleCandidate, CourseSummary};
use road_precision::{PendingSnapshot, PrecisionOptions, RefinedTooltip, Scenario};
use serde::Serialize;

const USAGE: &str = "Aufruf: road-precision <szenario.toml> [--cycles N] [--options pfad]";

/// Kommandozeilen-Argumente des Replays.
#[derive(Debug)]
struct ReplayArgs {
    scenario: PathBuf,
    cycles: u32,
    options: Option<PathBuf>,
}

impl ReplayArgs {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self> {
        let mut scenario = None;
        let mut cycles = 1;
        let mut options = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--cycles" => {
                    let value = args.next().context("--cycles erwartet eine Zahl")?;
                    cycles = value
                        .parse::<u32>()
                        .with_context(|| format!("Ungueltige Zyklenzahl: {}", value))?;
                }
                "--options" => {
                    options = Some(PathBuf::from(
                        args.next().context("--options erwartet einen Pfad")?,
                    ));
                }
                "-h" | "--help" => bail!("{}", USAGE),
                _ if scenario.is_none() => scenario = Some(PathBuf::from(arg)),
                _ => bail!("Unerwartetes Argument: {}\n{}", arg, USAGE),
            }
        }

        let Some(scenario) = scenario else {
            bail!("{}", USAGE);
        };
        if cycles == 0 {
            bail!("--cycles muss mindestens 1 sein");
        }
        Ok(Self {
            scenario,
            cycles,
            options,
        })
    }
}

/// JSON-Ausgabe eines Replays.
#[derive(Serialize)]
struct ReplayReport<'a> {
    cycles: u32,
    tooltips: &'a [RefinedTooltip],
    candidates: &'a [AngleCandidate],
    course: Option<&'a CourseSummary>,
}

fn main() -> Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Road Precision Replay v{} startet...", env!("CARGO_PKG_VERSION"));

    let args = ReplayArgs::parse(std::env::args().skip(1))?;
    let options_path = args
        .options
        .clone()
        .unwrap_or_else(PrecisionOptions::config_path);
    let options = PrecisionOptions::load_from_file(&options_path);

    // Szenario im Hintergrund laden, der Zyklus wartet darauf
    let scenario_path = args.scenario.clone();
    let pending = PendingSnapshot::spawn(move || Scenario::load_from_file(&scenario_path));
    let scenario = pending.complete()??;

    let mut overlay = PrecisionOverlay::new(&options);
    let input = scenario.frame.as_input();
    let projector = scenario
        .camera
        .as_ref()
        .map(|camera| camera as &dyn ScreenProjector);
    if projector.is_none() {
        log::warn!("Szenario ohne Kamera: es werden keine Tooltips platziert");
    }

    for _ in 0..args.cycles {
        overlay.refresh(&input, &options, projector);
    }
    log::info!(
        "{} Zyklen ausgefuehrt: {} Tooltips, {} Kandidaten",
        args.cycles,
        overlay.tooltips().len(),
        overlay.candidates().len()
    );

    let report = ReplayReport {
        cycles: args.cycles,
        tooltips: overlay.tooltips(),
        candidates: overlay.candidates(),
        course: overlay.course_summary(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
