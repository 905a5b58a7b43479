use crate::dice_config::*;
use crate::dice_fade::fade;
use crate::dice_hardware::DiceHardware;
use crate::dice_power::{sleep, wait_before_sleep, IdleOutcome};
use crate::dice_spin::spin;
use crate::dice_state::DicePhase;
use crate::dice_throw::{throw, ThrowOutcome};

/// Drives the dice through welcome, wait-or-sleep, spin, throw and fade.
///
/// Owns the board and the only state that survives between throws: the seed
/// and the seed the previous throw started from.
pub struct DiceController<H: DiceHardware> {
    hardware: H,
    phase: DicePhase,
    seed: u16,
    previous_seed: u16,
    last_throw: Option<ThrowOutcome>,
}

impl<H: DiceHardware> DiceController<H> {
    pub fn new(hardware: H) -> Self {
        DiceController {
            hardware,
            phase: DicePhase::Welcome,
            seed: INITIAL_SEED,
            previous_seed: INITIAL_PREVIOUS_SEED,
            last_throw: None,
        }
    }

    pub fn run(&mut self) -> ! {
        loop {
            self.tick();
        }
    }

    /// Runs the current phase to its end and moves on to the next one.
    pub fn tick(&mut self) {
        let next = self.step();

        dice_log!("{:?} -> {:?} (active: {})", self.phase, next, next.is_active());

        self.phase = next;
    }

    fn step(&mut self) -> DicePhase {
        match self.phase {
            DicePhase::Welcome => {
                welcome(&mut self.hardware);
                DicePhase::WaitOrSleep
            }
            DicePhase::WaitOrSleep => match wait_before_sleep(&mut self.hardware) {
                IdleOutcome::Pressed => DicePhase::Spinning,
                IdleOutcome::TimedOut => DicePhase::Sleeping,
            },
            DicePhase::Sleeping => {
                sleep(&mut self.hardware);
                DicePhase::WaitOrSleep
            }
            DicePhase::Spinning => {
                self.seed = spin(&mut self.hardware, self.seed);
                DicePhase::Throwing
            }
            DicePhase::Throwing => {
                let outcome = throw(&mut self.hardware, self.seed, self.previous_seed);
                self.last_throw = Some(outcome);

                match outcome {
                    ThrowOutcome::Landed(face) => {
                        dice_log!("seed {} landed on {}", self.seed, face.value());
                        DicePhase::Fading
                    }
                    ThrowOutcome::Interrupted => {
                        // Button is down again, waiting returns at once
                        self.previous_seed = self.seed;
                        DicePhase::WaitOrSleep
                    }
                }
            }
            DicePhase::Fading => {
                fade(&mut self.hardware);
                self.previous_seed = self.seed;
                DicePhase::WaitOrSleep
            }
        }
    }

    pub fn phase(&self) -> DicePhase {
        self.phase
    }

    pub fn seed(&self) -> u16 {
        self.seed
    }

    pub fn previous_seed(&self) -> u16 {
        self.previous_seed
    }

    pub fn last_throw(&self) -> Option<ThrowOutcome> {
        self.last_throw
    }

    pub fn hardware(&self) -> &H {
        &self.hardware
    }
}

/// Played once when the battery is plugged in.
pub fn welcome<H: DiceHardware>(hardware: &mut H) {
    hardware.display_figure(WELCOME_FIGURE);
    hardware.beep(WELCOME_BEEP_MS);
    hardware.display_figure(0);
}
