mod engine;

pub use engine::{
    TimerEngine, TimerState, DEFAULT_DURATION_MIN, MAX_CUSTOM_MINUTES, MIN_CUSTOM_MINUTES,
    PRESET_MINUTES,
};
