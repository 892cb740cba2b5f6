use std::env;
use std::path::PathBuf;

/// Physics and pacing knobs. Velocities are in cells per frame.
pub mod tunables {
    pub const GRAVITY: f64 = 1.0;
    pub const FRICTION: f64 = 0.5;
    pub const MAX_VEL_X: f64 = 5.0;
    pub const MAX_VEL_Y: f64 = 8.0;
    pub const JUMP_VELOCITY: f64 = -5.0;
    pub const STRAFE_IMPULSE: f64 = 3.0;

    /// Horizontal radius is always the vertical radius times this,
    /// terminal cells being roughly twice as tall as they are wide.
    pub const BALL_ASPECT_RATIO: f32 = 2.0;
    pub const BALL_START_Y: i32 = 10;

    pub const START_FRAME_DELAY_US: u64 = 50_000;
    pub const SPEEDUP_STEP_US: u64 = 1_000;
    pub const SPEEDUP_SCORE_MULTIPLE: u32 = 300;
    pub const MIN_FRAME_DELAY_US: u64 = 5_000;

    pub const FIRST_BULLET_THRESHOLD: u32 = 100;
    /// Side-launched bullets pick a row in [offset, rows + offset).
    pub const PATTERN_B_ROW_OFFSET: i32 = 15;
}

const SEED_VAR: &str = "DODGEBALL_SEED";
const LOG_VAR: &str = "DODGEBALL_LOG";

/// Startup bracket picked from the terminal size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tier {
    Small,
    Medium,
    Large,
}

impl Tier {
    pub fn for_viewport(cols: u16, rows: u16) -> Tier {
        if cols < 20 || rows < 10 {
            Tier::Small
        } else if cols < 100 || rows < 35 {
            Tier::Medium
        } else {
            Tier::Large
        }
    }

    pub fn bullet_count(&self) -> usize {
        match self {
            Tier::Small => 2,
            Tier::Medium => 3,
            Tier::Large => 5,
        }
    }

    pub fn start_radius(&self) -> f32 {
        match self {
            Tier::Small => 3.0,
            Tier::Medium => 4.0,
            Tier::Large => 5.0,
        }
    }
}

/// Settings read once from the environment at launch.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LaunchOptions {
    pub seed: Option<u64>,
    /// Raw seed text that failed to parse, kept so it can be reported
    /// once logging is up.
    pub rejected_seed: Option<String>,
    pub log_file: Option<PathBuf>,
}

impl LaunchOptions {
    pub fn from_env() -> Self {
        Self::from_vars(env::var(SEED_VAR).ok(), env::var_os(LOG_VAR).map(PathBuf::from))
    }

    fn from_vars(seed: Option<String>, log_file: Option<PathBuf>) -> Self {
        let mut opts = Self { log_file, ..Self::default() };
        if let Some(raw) = seed {
            match raw.trim().parse::<u64>() {
                Ok(seed) => opts.seed = Some(seed),
                Err(_) => opts.rejected_seed = Some(raw),
            }
        }
        opts
    }
}
