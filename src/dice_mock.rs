use crate::dice_hardware::DiceHardware;

/// Board stand-in running on a virtual microsecond clock.
///
/// The button is down during each scripted `[start, end)` interval.
/// Powering down jumps the clock to the start of the next press, which is
/// what the wake interrupt does on the real board.
pub struct MockDice {
    now_us: u64,
    presses: Vec<(u64, u64)>,
    figure: u8,
    pub figures: Vec<u8>,
    beeper_since: Option<u64>,
    pub beeps_us: Vec<u64>,
    pub decoration_enabled: bool,
    pub decoration_duties: Vec<u8>,
    pub power_downs: u32,
    pub figure_at_power_down: Option<u8>,
    pub beeper_on_at_power_down: bool,
}

impl MockDice {
    pub fn new() -> Self {
        Self {
            now_us: 0,
            presses: Vec::new(),
            figure: 0,
            figures: Vec::new(),
            beeper_since: None,
            beeps_us: Vec::new(),
            decoration_enabled: false,
            decoration_duties: Vec::new(),
            power_downs: 0,
            figure_at_power_down: None,
            beeper_on_at_power_down: false,
        }
    }

    /// Presses given as `(start, end)` in milliseconds.
    pub fn with_presses_ms(presses: &[(u64, u64)]) -> Self {
        let mut mock = Self::new();
        mock.presses = presses
            .iter()
            .map(|&(start, end)| (start * 1000, end * 1000))
            .collect();
        mock
    }

    pub fn press_us(&mut self, start: u64, end: u64) {
        self.presses.push((start, end));
    }

    pub fn now_us(&self) -> u64 {
        self.now_us
    }

    pub fn beeps_ms(&self) -> Vec<u64> {
        self.beeps_us.iter().map(|us| us / 1000).collect()
    }
}

impl DiceHardware for MockDice {
    fn button_down(&mut self) -> bool {
        let now = self.now_us;
        self.presses
            .iter()
            .any(|&(start, end)| start <= now && now < end)
    }

    fn display_figure(&mut self, figure: u8) {
        self.figure = figure;
        self.figures.push(figure);
    }

    fn current_figure(&self) -> u8 {
        self.figure
    }

    fn set_beeper(&mut self, on: bool) {
        match (on, self.beeper_since) {
            (true, None) => self.beeper_since = Some(self.now_us),
            (false, Some(since)) => {
                self.beeps_us.push(self.now_us - since);
                self.beeper_since = None;
            }
            _ => {}
        }
    }

    fn enable_decoration(&mut self) {
        self.decoration_enabled = true;
    }

    fn set_decoration_duty(&mut self, duty: u8) {
        self.decoration_duties.push(duty);
    }

    fn disable_decoration(&mut self) {
        self.decoration_enabled = false;
    }

    fn delay_us(&mut self, us: u32) {
        self.now_us += us as u64;
    }

    fn power_down(&mut self) {
        self.power_downs += 1;
        self.figure_at_power_down = Some(self.figure);
        self.beeper_on_at_power_down = self.beeper_since.is_some();

        let now = self.now_us;
        let wake = self
            .presses
            .iter()
            .map(|&(start, _)| start)
            .filter(|&start| start > now)
            .min();

        if let Some(start) = wake {
            self.now_us = start;
        }
    }
}
