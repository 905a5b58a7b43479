use core::convert::Infallible;

use cortex_m::peripheral::{NVIC, SCB};
use embedded_hal::blocking::delay::DelayUs;
use embedded_hal::digital::v2::{InputPin, OutputPin};
use embedded_hal::Pwm as _;
use stm32f1xx_hal::delay::Delay;
use stm32f1xx_hal::gpio::gpioa::{PA0, PA1, PA2, PA3, PA4, PA5, PA6};
use stm32f1xx_hal::gpio::gpiob::{PB0, PB1, PB6};
use stm32f1xx_hal::gpio::{Alternate, Edge, ExtiPin, Input, Output, PullDown, PushPull};
use stm32f1xx_hal::pac::{Peripherals, EXTI, GPIOA, PWR, RCC, TIM4};
use stm32f1xx_hal::prelude::*;
use stm32f1xx_hal::pwm::{Channel, Pwm, C1};
use stm32f1xx_hal::stm32::{interrupt, Interrupt};
use stm32f1xx_hal::timer::{Tim4NoRemap, Timer};

use crate::dice_hardware::DiceHardware;
use crate::dice_wake::WAKE_LATCH;

// Frequency of the decoration led PWM
const DECORATION_PWM_FREQUENCY_HZ: u32 = 1_000;
// PA0 - PA6 drive the seven dice leds
const LED_MASK: u32 = 0x7f;

type DiceLeds = (
    PA0<Output<PushPull>>,
    PA1<Output<PushPull>>,
    PA2<Output<PushPull>>,
    PA3<Output<PushPull>>,
    PA4<Output<PushPull>>,
    PA5<Output<PushPull>>,
    PA6<Output<PushPull>>,
);
type DecorationPwm = Pwm<TIM4, Tim4NoRemap, C1, PB6<Alternate<PushPull>>>;

pub struct DiceStm32 {
    // Held only so nothing else can reconfigure the led pins
    _leds: DiceLeds,
    figure: u8,
    button: PB1<Input<PullDown>>,
    beeper: PB0<Output<PushPull>>,
    decoration: DecorationPwm,
    delay: Delay,
    exti: EXTI,
    scb: SCB,
}

impl DiceStm32 {
    pub fn new(dp: Peripherals, cp: cortex_m::Peripherals) -> Self {
        // Stop mode needs the power interface clocked
        unsafe {
            (*RCC::ptr()).apb1enr.modify(|_r, w| w.pwren().set_bit());
        }
        Self::configure_stop_mode(&dp.PWR);

        let mut flash = dp.FLASH.constrain();
        let mut rcc = dp.RCC.constrain();

        // Plain HSI, which is also what the core runs on after leaving stop mode
        let clocks = rcc.cfgr.freeze(&mut flash.acr);

        let mut afio = dp.AFIO.constrain(&mut rcc.apb2);
        let mut gpioa = dp.GPIOA.split(&mut rcc.apb2);
        let mut gpiob = dp.GPIOB.split(&mut rcc.apb2);

        let leds = (
            gpioa.pa0.into_push_pull_output(&mut gpioa.crl),
            gpioa.pa1.into_push_pull_output(&mut gpioa.crl),
            gpioa.pa2.into_push_pull_output(&mut gpioa.crl),
            gpioa.pa3.into_push_pull_output(&mut gpioa.crl),
            gpioa.pa4.into_push_pull_output(&mut gpioa.crl),
            gpioa.pa5.into_push_pull_output(&mut gpioa.crl),
            gpioa.pa6.into_push_pull_output(&mut gpioa.crl),
        );

        let beeper = gpiob.pb0.into_push_pull_output(&mut gpiob.crl);

        let mut button = gpiob.pb1.into_pull_down_input(&mut gpiob.crl);
        button.make_interrupt_source(&mut afio);
        button.trigger_on_edge(&dp.EXTI, Edge::RISING);

        let decoration_pin = gpiob.pb6.into_alternate_push_pull(&mut gpiob.crl);
        let mut decoration = Timer::tim4(dp.TIM4, &clocks, &mut rcc.apb1)
            .pwm::<Tim4NoRemap, _, _, _>(
                decoration_pin,
                &mut afio.mapr,
                DECORATION_PWM_FREQUENCY_HZ.hz(),
            );
        decoration.disable(Channel::C1);

        let delay = Delay::new(cp.SYST, clocks);

        unsafe {
            // For waking up from stop mode
            NVIC::unmask(Interrupt::EXTI1);
        }

        DiceStm32 {
            _leds: leds,
            figure: 0,
            button,
            beeper,
            decoration,
            delay,
            exti: dp.EXTI,
            scb: cp.SCB,
        }
    }

    fn configure_stop_mode(pwr: &PWR) {
        // Deep sleep enters stop mode (not standby) with the regulator in low power
        pwr.cr.modify(|_r, w| w.pdds().clear_bit().lpds().set_bit());
    }
}

impl DiceHardware for DiceStm32 {
    fn button_down(&mut self) -> bool {
        infallible(self.button.is_high())
    }

    fn display_figure(&mut self, figure: u8) {
        let set = figure as u32 & LED_MASK;
        let reset = !(figure as u32) & LED_MASK;

        // Set and reset in a single write so no in-between pattern shows up
        unsafe {
            (*GPIOA::ptr()).bsrr.write(|w| w.bits(set | reset << 16));
        }

        self.figure = figure;
    }

    fn current_figure(&self) -> u8 {
        self.figure
    }

    fn set_beeper(&mut self, on: bool) {
        if on {
            infallible(self.beeper.set_high());
        } else {
            infallible(self.beeper.set_low());
        }
    }

    fn enable_decoration(&mut self) {
        self.decoration.enable(Channel::C1);
    }

    fn set_decoration_duty(&mut self, duty: u8) {
        let max_duty = self.decoration.get_max_duty() as u32;
        self.decoration
            .set_duty(Channel::C1, (max_duty * duty as u32 / 0xff) as u16);
    }

    fn disable_decoration(&mut self) {
        self.decoration.set_duty(Channel::C1, 0);
        self.decoration.disable(Channel::C1);
    }

    fn delay_us(&mut self, us: u32) {
        self.delay.delay_us(us);
    }

    fn power_down(&mut self) {
        WAKE_LATCH.arm();
        self.button.clear_interrupt_pending_bit();
        self.button.enable_interrupt(&self.exti);
        self.scb.set_sleepdeep();

        loop {
            // With interrupts masked a wake edge can't slip in between the
            // check and wfi; it stays pending and wfi returns straight away
            cortex_m::interrupt::disable();

            if !WAKE_LATCH.is_armed() {
                unsafe { cortex_m::interrupt::enable() };
                break;
            }

            cortex_m::asm::wfi();
            unsafe { cortex_m::interrupt::enable() };
        }

        self.scb.clear_sleepdeep();
    }
}

fn infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

#[interrupt]
fn EXTI1() {
    let exti = unsafe { &*EXTI::ptr() };

    // Mask the line so a bouncing button can't fire again before the next sleep
    exti.imr.modify(|_r, w| w.mr1().clear_bit());
    exti.pr.write(|w| w.pr1().set_bit());

    WAKE_LATCH.fire();
}
