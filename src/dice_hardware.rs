/// Everything the dice logic needs from the board.
///
/// The provided methods build the timing primitives used by every animation
/// on top of `delay_us` and `button_down`. Each of them polls the button once
/// per time unit, which is the only debouncing and the only way an animation
/// gets cancelled.
pub trait DiceHardware {
    fn button_down(&mut self) -> bool;

    /// Lights exactly the leds set in `figure`, in one write.
    fn display_figure(&mut self, figure: u8);
    fn current_figure(&self) -> u8;

    fn set_beeper(&mut self, on: bool);

    fn enable_decoration(&mut self);
    fn set_decoration_duty(&mut self, duty: u8);
    fn disable_decoration(&mut self);

    fn delay_us(&mut self, us: u32);

    /// Arms the button wake source and halts until it fires.
    fn power_down(&mut self);

    fn delay_ms(&mut self, ms: u32) {
        for _ in 0..ms {
            self.delay_us(1000);
        }
    }

    fn beep(&mut self, ms: u32) {
        self.set_beeper(true);
        self.delay_ms(ms);
        self.set_beeper(false);
    }

    /// Lets one time unit pass and reports whether the button is down after it.
    fn tick_pressed(&mut self, us: u32) -> bool {
        self.delay_us(us);
        self.button_down()
    }

    /// Waits `ms` milliseconds. Returns early with `true` on a press.
    fn wait_ms_or_pressed(&mut self, ms: u32) -> bool {
        for _ in 0..ms {
            if self.tick_pressed(1000) {
                return true;
            }
        }

        false
    }

    fn clear_outputs(&mut self) {
        self.display_figure(0);
        self.set_beeper(false);
        self.disable_decoration();
    }
}
