use std::time::{SystemTime, UNIX_EPOCH};

use log::warn;

use crate::constants::DEFAULT_RENDER_FPS;

pub const FPS_VAR: &str = "STREET_CASH_FPS";
pub const SEED_VAR: &str = "STREET_CASH_SEED";
pub const RADIO_VAR: &str = "STREET_CASH_RADIO";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub render_fps: u64,
    pub seed: u64,
    pub radio: bool,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let render_fps = match lookup(FPS_VAR) {
            None => DEFAULT_RENDER_FPS,
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(v) if v > 0 => v,
                _ => {
                    warn!("ignoring {FPS_VAR}={raw:?}, using {DEFAULT_RENDER_FPS}");
                    DEFAULT_RENDER_FPS
                }
            },
        };

        let seed = match lookup(SEED_VAR) {
            None => clock_seed(),
            Some(raw) => raw.trim().parse::<u64>().unwrap_or_else(|_| {
                warn!("ignoring {SEED_VAR}={raw:?}, seeding from the clock");
                clock_seed()
            }),
        };

        let radio = match lookup(RADIO_VAR).as_deref().map(str::trim) {
            None => true,
            Some("on") | Some("1") | Some("true") => true,
            Some("off") | Some("0") | Some("false") => false,
            Some(other) => {
                warn!("ignoring {RADIO_VAR}={other:?}, radio stays on");
                true
            }
        };

        Self {
            render_fps,
            seed,
            radio,
        }
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
