// Seed loaded at cold boot
pub const INITIAL_SEED: u16 = 1000;
pub const INITIAL_PREVIOUS_SEED: u16 = 0;

// Length of one spin tick in microseconds. The seed grows by one per tick
pub const SPIN_TICK_US: u32 = 800;
// Amount of spin ticks each frame of the spin sequence stays on the leds
pub const SPIN_FRAME_TICKS: u16 = 32;

// Length of one throw tick in microseconds. Flip delays are counted in these
pub const THROW_TICK_US: u32 = 1000;
// The throw stops once the flip delay reaches
// STOP_AT_BASE + (seed % STOP_AT_SPREAD) * STOP_AT_MULTIPLIER
pub const STOP_AT_BASE: u16 = 250;
pub const STOP_AT_SPREAD: u16 = 128;
pub const STOP_AT_MULTIPLIER: u16 = 4;
// Delay growth divisor is picked from 1..=QUOTIENT_SPREAD
pub const QUOTIENT_SPREAD: u16 = 6;
// Longer holds than this do not speed up the throw any further
pub const MAX_HOLD_TICKS: u16 = 1023;
// Flip delay after a zero length hold
pub const INITIAL_DELAY: u16 = 68;
pub const FLIP_BEEP_MS: u32 = 3;
pub const REST_BEEP_MS: u32 = 20;

// Decoration led stays fully lit this long before fading out
pub const FADE_HOLD_MS: u32 = 500;
pub const FADE_DURATION_MS: u32 = 1200;

pub const WAIT_BEFORE_SLEEP_MS: u32 = 10_000;
// Software PWM used to dim the dice before going to sleep
pub const IDLE_FADE_STEPS: u8 = 127;
pub const IDLE_FADE_LEVELS: u8 = 32;
pub const IDLE_FADE_SLICE_US: u32 = 255;

pub const WELCOME_FIGURE: u8 = 0b0111_1111;
pub const WELCOME_BEEP_MS: u32 = 200;
