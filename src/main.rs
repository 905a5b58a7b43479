#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]
// Off the device only the dice logic and its tests are built
#![cfg_attr(not(target_os = "none"), allow(dead_code))]

#[cfg(target_os = "none")]
use panic_reset as _;

#[macro_use]
mod dice_log;

mod dice_config;
mod dice_controller;
mod dice_fade;
mod dice_faces;
mod dice_hardware;
#[cfg(test)]
mod dice_mock;
mod dice_power;
mod dice_spin;
mod dice_state;
#[cfg(target_os = "none")]
mod dice_stm32;
mod dice_throw;
mod dice_wake;

#[cfg(target_os = "none")]
#[cortex_m_rt::entry]
fn main() -> ! {
    let dp = stm32f1xx_hal::pac::Peripherals::take().unwrap();
    let cp = cortex_m::Peripherals::take().unwrap();

    let board = dice_stm32::DiceStm32::new(dp, cp);
    let mut controller = dice_controller::DiceController::new(board);

    controller.run()
}

#[cfg(not(target_os = "none"))]
fn main() {
    eprintln!("dice-firmware runs on the STM32F103, build it with --target thumbv7m-none-eabi");
}
