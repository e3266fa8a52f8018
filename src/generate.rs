//! Random show generation for demos and tests.

use qtty::{Hour, Quantity};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::show::Show;

/// Band-name pool for generated line-ups.
const BAND_NAMES: [&str; 55] = [
    "The Demi-Conductors",
    "Molten Salt 'n Pepper",
    "Electrolyzer Boys II H₂",
    "CryoJazz Quartet: Kelvin & the Degrees",
    "Qubit & The Entanglers",
    "Biopsy Bot Bi-Metal",
    "Servo Skynet Funk",
    "SMR Metalcore Reactor",
    "Thorizon Thunderlords",
    "Hydrogenated Groove Machine",
    "OptoMech Overload",
    "MechaTronic BoomBap",
    "Cleanroom Crooners",
    "DICE Rollers",
    "Plasma Etch Ninjas",
    "Stack Pressure Funk Collective",
    "Vapor Deposition Devotees",
    "Superfluid Funkadelic",
    "Rotor & The Cryostats",
    "Kelvinators of Love",
    "Overlapocalypse Now",
    "Flux Capacitor Leakage",
    "Servo Servo Go!",
    "Chip Placement Misfits",
    "Magnetic Resonance Rockers",
    "Needle Drive & The Scanner Bots",
    "Hydride & Seek",
    "Robolap Partners",
    "QCryo & The Coolants",
    "MiniModular Menace",
    "Bionic Stagecraft",
    "The DemCon-Artists",
    "DeMCONic Force Five",
    "DemConfidential Rappers",
    "GrindCore XY Stage",
    "Pulse Tube Troubadours",
    "Leak Test Lounge Lizards",
    "Servo Sirens",
    "True Grit & Grippers",
    "Ampere Time Machine",
    "Proton Pump Funk Unit",
    "SaltCore Grinder",
    "ThoriZoners",
    "Quantum Flippin' Bits",
    "Femtosecond Headbang",
    "AlgorithmiX & the Min-Heaps",
    "Hydrogen Rage Machine",
    "Cryogenics & Roses",
    "Cobot Cabal Choir",
    "Valve Body Voodoo",
    "OptoElectro Swingers",
    "SMRizing Demolition",
    "Servo Serpents",
    "Luer & Order",
    "Coolant Flow Ragga",
];

/// Parameters for random show generation. Times are in hours.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomShowsConfig {
    pub count: usize,
    pub start_hour: f64,
    pub end_hour: f64,
    pub min_duration: f64,
    pub max_duration: f64,
}

impl Default for RandomShowsConfig {
    fn default() -> Self {
        Self {
            count: 20,
            start_hour: 0.0,
            end_hour: 24.0,
            min_duration: 0.5,
            max_duration: 3.0,
        }
    }
}

impl RandomShowsConfig {
    pub fn with_count(count: usize) -> Self {
        Self {
            count,
            ..Self::default()
        }
    }
}

/// Generates `config.count` random shows drawn from the band-name pool.
///
/// Names are sampled without replacement while the pool lasts, then reused.
/// Every generated show satisfies `start < end` and fits inside the
/// `[start_hour, end_hour]` window; times are rounded to two decimals.
///
/// # Panics
///
/// Panics if the window cannot fit `min_duration`
/// (`end_hour - start_hour < min_duration`) or `max_duration < min_duration`.
pub fn random_shows<R: Rng>(config: &RandomShowsConfig, rng: &mut R) -> Vec<Show<Hour>> {
    let sampled = config.count.min(BAND_NAMES.len());
    let mut names: Vec<&str> = BAND_NAMES
        .choose_multiple(rng, sampled)
        .copied()
        .collect();
    while names.len() < config.count {
        names.push(BAND_NAMES[rng.gen_range(0..BAND_NAMES.len())]);
    }

    let mut shows = Vec::with_capacity(config.count);
    for name in names {
        let start = rng.gen_range(config.start_hour..=config.end_hour - config.min_duration);
        let longest = config.max_duration.min(config.end_hour - start);
        let duration = rng.gen_range(config.min_duration..=longest);
        // Round for readable times, clamping back inside the window.
        let start = round2(start).max(config.start_hour);
        let end = round2(start + duration).min(config.end_hour);
        shows.push(Show::new(
            name,
            Quantity::new(start),
            Quantity::new(end),
        ));
    }
    shows
}

/// Rounds to two decimal places, matching the generated line-up format.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
