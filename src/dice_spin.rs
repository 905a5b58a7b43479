use crate::dice_config::{SPIN_FRAME_TICKS, SPIN_TICK_US};
use crate::dice_faces::spin_frame;
use crate::dice_hardware::DiceHardware;

/// Spins the dice for as long as the button is held.
///
/// The seed grows by one every `SPIN_TICK_US`, wrapping around, so the
/// returned value carries the hold time measured against human reaction.
pub fn spin<H: DiceHardware>(hardware: &mut H, mut seed: u16) -> u16 {
    while hardware.button_down() {
        hardware.display_figure(spin_frame(seed, SPIN_FRAME_TICKS));
        hardware.delay_us(SPIN_TICK_US);
        seed = seed.wrapping_add(1);
    }

    seed
}
