use crate::dice_config::*;
use crate::dice_faces::Face;
use crate::dice_hardware::DiceHardware;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThrowOutcome {
    /// The dice came to rest showing this face
    Landed(Face),
    /// The button was pressed before the dice stopped
    Interrupted,
}

impl ThrowOutcome {
    pub fn is_interrupted(&self) -> bool {
        *self == ThrowOutcome::Interrupted
    }
}

/// Everything a throw needs, derived from the seed alone.
///
/// All of the arithmetic is `u16` and wrapping. Only the low bits of the
/// seed are consulted, so wrapping is harmless.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThrowParameters {
    pub face: Face,
    pub stop_at: u16,
    pub quotient: u16,
    pub hold_ticks: u16,
    pub initial_delay: u16,
}

impl ThrowParameters {
    pub fn new(seed: u16, previous_seed: u16) -> Self {
        let stop_at = STOP_AT_BASE + (seed % STOP_AT_SPREAD) * STOP_AT_MULTIPLIER;
        let quotient = 1 + (seed / 4) % QUOTIENT_SPREAD;

        // The seed advanced once per spin tick, so this is the hold time
        let hold_ticks = seed.wrapping_sub(previous_seed).min(MAX_HOLD_TICKS);

        // Longer hold, faster start
        let initial_delay = INITIAL_DELAY - hold_ticks * 64 / 1024;

        Self {
            face: Face::from_seed(seed),
            stop_at,
            quotient,
            hold_ticks,
            initial_delay,
        }
    }

    pub fn schedule(&self) -> DecelerationSchedule {
        DecelerationSchedule {
            delay: self.initial_delay,
            quotient: self.quotient,
            stop_at: self.stop_at,
        }
    }
}

/// Yields the delay before each face flip, in throw ticks.
///
/// Every step adds `3 + delay / quotient`, so the delay grows by at least 3
/// per flip and the schedule always ends once it reaches `stop_at`.
#[derive(Clone, Debug)]
pub struct DecelerationSchedule {
    delay: u16,
    quotient: u16,
    stop_at: u16,
}

impl Iterator for DecelerationSchedule {
    type Item = u16;

    fn next(&mut self) -> Option<u16> {
        if self.delay >= self.stop_at {
            return None;
        }

        self.delay = self
            .delay
            .wrapping_add(3)
            .wrapping_add(self.delay / self.quotient);

        Some(self.delay)
    }
}

/// Tosses the dice, flipping faces slower and slower until it rests.
pub fn throw<H: DiceHardware>(hardware: &mut H, seed: u16, previous_seed: u16) -> ThrowOutcome {
    let parameters = ThrowParameters::new(seed, previous_seed);
    let mut face = parameters.face;
    let mut resting = face;

    for delay in parameters.schedule() {
        for _ in 0..delay {
            if hardware.tick_pressed(THROW_TICK_US) {
                return ThrowOutcome::Interrupted;
            }
        }

        hardware.display_figure(face.pattern());
        hardware.beep(FLIP_BEEP_MS);

        resting = face;
        face = face.next();
    }

    hardware.beep(REST_BEEP_MS);

    ThrowOutcome::Landed(resting)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice_faces::{FACES, FACE_PATTERNS};
    use crate::dice_mock::MockDice;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn parameters_for_seed_1000() {
        let parameters = ThrowParameters::new(1000, 0);

        assert_eq!(
            parameters,
            ThrowParameters {
                face: Face::from_seed(4),
                stop_at: 666,
                quotient: 5,
                hold_ticks: 1000,
                initial_delay: 6,
            }
        );
    }

    #[rstest]
    #[case(0, 0, 68)]
    #[case(1023, 0, 5)]
    #[case(60_000, 0, 5)]
    // Seed wrapped past zero since the previous throw
    #[case(10, u16::MAX - 9, 68 - 20 * 64 / 1024)]
    fn initial_delay_shrinks_with_hold(
        #[case] seed: u16,
        #[case] previous_seed: u16,
        #[case] initial_delay: u16,
    ) {
        assert_eq!(ThrowParameters::new(seed, previous_seed).initial_delay, initial_delay);
    }

    #[test]
    fn schedule_for_seed_1000() {
        let delays: Vec<u16> = ThrowParameters::new(1000, 0).schedule().collect();

        assert_eq!(
            delays,
            vec![
                10, 15, 21, 28, 36, 46, 58, 72, 89, 109, 133, 162, 197, 239, 289, 349, 421, 508,
                612, 737
            ]
        );
    }

    #[test]
    fn every_schedule_increases_and_ends() {
        for seed in (0..=u16::MAX).step_by(7) {
            for previous_seed in [0u16, seed, seed.wrapping_sub(300)].iter().copied() {
                let parameters = ThrowParameters::new(seed, previous_seed);
                let mut last = parameters.initial_delay;
                let mut flips = 0;

                for delay in parameters.schedule() {
                    assert!(delay > last);
                    last = delay;
                    flips += 1;
                    assert!(flips < 200);
                }

                assert!(last >= parameters.stop_at);
                assert!(parameters.face.index() < FACES);
            }
        }
    }

    #[test]
    fn uninterrupted_throw_rests_on_last_shown_face() {
        let mut mock = MockDice::new();

        let outcome = throw(&mut mock, 1000, 0);

        assert_eq!(outcome, ThrowOutcome::Landed(Face::from_seed(5)));
        assert_eq!(mock.figures.len(), 20);
        assert_eq!(mock.figures[0], FACE_PATTERNS[4]);
        assert_eq!(mock.current_figure(), FACE_PATTERNS[5]);

        let mut beeps = vec![FLIP_BEEP_MS as u64; 20];
        beeps.push(REST_BEEP_MS as u64);
        assert_eq!(mock.beeps_ms(), beeps);
    }

    #[test]
    fn shown_faces_advance_by_one() {
        let mut mock = MockDice::new();
        throw(&mut mock, 1000, 0);

        let mut face = Face::from_seed(1000);
        for figure in mock.figures.iter() {
            assert_eq!(*figure, face.pattern());
            face = face.next();
        }
    }

    #[test]
    fn press_interrupts_throw() {
        // Press lands during the wait before the eighth flip
        let mut mock = MockDice::with_presses_ms(&[(300, 400)]);

        assert!(throw(&mut mock, 1000, 0).is_interrupted());
        assert_eq!(mock.figures.len(), 7);
        assert!(mock.now_us() >= 300_000);
        assert!(mock.now_us() <= 301_000);
        assert_eq!(mock.beeps_ms(), vec![FLIP_BEEP_MS as u64; 7]);
    }
}
