use crate::dice_config::*;
use crate::dice_hardware::DiceHardware;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IdleOutcome {
    /// Button went down before the dice dimmed out
    Pressed,
    /// Nothing happened for the whole idle window, time to sleep
    TimedOut,
}

/// Waits for the button, dimming the leds once the idle window runs out.
pub fn wait_before_sleep<H: DiceHardware>(hardware: &mut H) -> IdleOutcome {
    if wait_for_press(hardware, WAIT_BEFORE_SLEEP_MS) || idle_fade(hardware) {
        return IdleOutcome::Pressed;
    }

    IdleOutcome::TimedOut
}

fn wait_for_press<H: DiceHardware>(hardware: &mut H, ms: u32) -> bool {
    for _ in 0..ms {
        if hardware.button_down() {
            return true;
        }

        hardware.delay_us(1000);
    }

    false
}

/// Dims whatever is on the leds with a cheap software PWM.
/// Returns `true` if the button was pressed meanwhile.
pub fn idle_fade<H: DiceHardware>(hardware: &mut H) -> bool {
    let figure = hardware.current_figure();

    for step in 0..IDLE_FADE_STEPS {
        let duty = IDLE_FADE_LEVELS - step / ((IDLE_FADE_STEPS + 1) / IDLE_FADE_LEVELS);

        hardware.display_figure(figure);
        hardware.delay_us(duty as u32 * IDLE_FADE_SLICE_US);
        hardware.display_figure(0);
        hardware.delay_us((IDLE_FADE_LEVELS - duty) as u32 * IDLE_FADE_SLICE_US);

        if hardware.button_down() {
            return true;
        }
    }

    false
}

/// Powers down until the button wakes the dice up again.
pub fn sleep<H: DiceHardware>(hardware: &mut H) {
    dice_log!("sleeping");

    hardware.clear_outputs();
    hardware.power_down();

    dice_log!("woke up");
}
