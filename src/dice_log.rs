// Debug output over semihosting. Only enabled with the `semihosting` feature
// because the core halts on the first print when no debugger is attached.

#[cfg(all(target_os = "none", feature = "semihosting"))]
macro_rules! dice_log {
    ($($arg:tt)*) => {
        // Nothing sensible to do if the debugger went away
        let _ = cortex_m_semihosting::hprintln!($($arg)*);
    };
}

#[cfg(not(all(target_os = "none", feature = "semihosting")))]
macro_rules! dice_log {
    ($($arg:tt)*) => {
        let _ = format_args!($($arg)*);
    };
}
