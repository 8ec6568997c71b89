/// Browser console logging with a millisecond timestamp prefix.
/// These call into the JS console, so only use them from code that runs in the browser;
/// shared logic logs through `tracing` instead.
#[doc(hidden)]
#[macro_export]
macro_rules! console_stamped {
    ($level:ident, $($arg:tt)*) => {
        gloo_console::$level!(format!("[{}] {}", js_sys::Date::now(), format!($($arg)*)))
    };
}

#[macro_export]
macro_rules! console_info {
    ($($arg:tt)*) => {
        $crate::console_stamped!(info, $($arg)*)
    };
}

#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {
        $crate::console_stamped!(warn, $($arg)*)
    };
}

#[macro_export]
macro_rules! console_error {
    ($($arg:tt)*) => {
        $crate::console_stamped!(error, $($arg)*)
    };
}
