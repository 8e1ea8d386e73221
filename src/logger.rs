//! Tagged status lines for the terminal.
//!
//! Informational lines go to stdout, failures to stderr. Each
//! line carries a bracketed tag so it stays distinguishable when color is off.

pub use colored::Colorize;

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {{
        use $crate::logger::Colorize as _;
        println!("{}", format!("{} {}", $crate::constants::INFO_TAG, format!($($arg)*)).blue());
    }};
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {{
        use $crate::logger::Colorize as _;
        eprintln!("{}", format!("{} {}", $crate::constants::FAILED_TAG, format!($($arg)*)).red());
    }};
}
