//! Colorized console output

use std::{
    fmt,
    io::{
        self,
        Write,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Default,
    Red,
    Green,
    Yellow,
    Blue,
    Purple,
    Cyan,
}

impl Color {
    fn code(self) -> &'static str {
        match self {
            Color::Default => "\x1b[0m",
            Color::Red => "\x1b[31m",
            Color::Green => "\x1b[32m",
            Color::Yellow => "\x1b[33m",
            Color::Blue => "\x1b[34m",
            Color::Purple => "\x1b[35m",
            Color::Cyan => "\x1b[36m",
        }
    }
}

const RESET: &str = "\x1b[0m";

/// `text` wrapped in the escape codes of `color` when `ansi` is set.
pub fn colored(
    color: Color,
    text: impl fmt::Display,
    ansi: bool,
) -> String {
    if ansi && color != Color::Default {
        format!("{}{text}{RESET}", color.code())
    } else {
        text.to_string()
    }
}

/// Write formatted output in `color`.
pub fn write_colored(
    out: &mut impl Write,
    color: Color,
    ansi: bool,
    args: fmt::Arguments<'_>,
) -> io::Result<()> {
    if ansi && color != Color::Default {
        write!(out, "{}{args}{RESET}", color.code())
    } else {
        out.write_fmt(args)
    }
}

/// `printf`-style colored output to stdout.
#[macro_export]
macro_rules! colored_print {
    ($color:expr, $($arg:tt)*) => {
        $crate::report::write_colored(
            &mut ::std::io::stdout(),
            $color,
            true,
            format_args!($($arg)*),
        )
    };
}
