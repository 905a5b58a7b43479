use crate::dice_config::{FADE_DURATION_MS, FADE_HOLD_MS};
use crate::dice_faces::{INTENSITY_STEPS, INTENSITY_TABLE};
use crate::dice_hardware::DiceHardware;

// Time each intensity step is held
const FADE_STEP_MS: u32 = FADE_DURATION_MS / INTENSITY_STEPS as u32;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FadeOutcome {
    Completed,
    Interrupted,
}

/// Fades the decoration led out after a finished throw.
pub fn fade<H: DiceHardware>(hardware: &mut H) -> FadeOutcome {
    hardware.enable_decoration();
    hardware.set_decoration_duty(0xff);

    let outcome = run_fade(hardware);

    hardware.disable_decoration();

    outcome
}

fn run_fade<H: DiceHardware>(hardware: &mut H) -> FadeOutcome {
    if hardware.wait_ms_or_pressed(FADE_HOLD_MS) {
        return FadeOutcome::Interrupted;
    }

    for intensity in INTENSITY_TABLE.iter().rev() {
        hardware.set_decoration_duty(*intensity);

        if hardware.wait_ms_or_pressed(FADE_STEP_MS) {
            return FadeOutcome::Interrupted;
        }
    }

    FadeOutcome::Completed
}
