use std::sync::Mutex;

use once_cell::sync::Lazy;

#[derive(Clone, Copy)]
pub enum Color {
    Green,
    Red,
    Gold,
    Gray,
}

impl Color {
    fn ansi(self) -> &'static str {
        match self {
            Color::Green => "\x1b[92m",
            Color::Red => "\x1b[91m",
            Color::Gold => "\x1b[93m",
            Color::Gray => "\x1b[90m",
        }
    }
}

#[macro_export]
macro_rules! notify {
    () => {};

    ($($arg:tt)*) => {{
        let mut logger = $crate::LOGGER.lock().unwrap();

        logger.append(
            format!(
                $($arg)*
            ),
            $crate::Color::Green,
        );
    }};
}

#[macro_export]
macro_rules! strong {
    () => {};

    ($($arg:tt)*) => {{
        let mut logger = $crate::LOGGER.lock().unwrap();

        logger.append(
            format!(
                $($arg)*
            ),
            $crate::Color::Red,
        );
    }};
}

#[macro_export]
macro_rules! warn {
    () => {};

    ($($arg:tt)*) => {{
        let mut logger = $crate::LOGGER.lock().unwrap();

        logger.append(
            format!(
                $($arg)*
            ),
            $crate::Color::Gold,
        );
    }};
}

#[macro_export]
macro_rules! trace {
    () => {};

    ($($arg:tt)*) => {{
        let mut logger = $crate::LOGGER.lock().unwrap();

        logger.append(
            format!(
                $($arg)*
            ),
            $crate::Color::Gray,
        );
    }};
}

pub static LOGGER: Lazy<Mutex<Logger<300>>> = Lazy::new(|| Mutex::new(Logger::new()));

pub struct Logger<const N: usize> {
    lines: [(String, Color); N],
    head: usize,
    len: usize,
}

impl<const N: usize> Logger<N> {
    fn new() -> Self {
        Self {
            lines: std::array::from_fn(|_| (String::new(), Color::Gray)),
            head: 0,
            len: 0,
        }
    }

    pub fn append(&mut self, line: String, color: Color) {
        self.lines[self.head] = (line + "\n", color);
        self.head = (self.head + 1) % N;
        self.len += 1;
    }

    pub fn clear(&mut self) {
        self.head = 0;
        self.len = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn lines(&self) -> (&[(String, Color)], &[(String, Color)]) {
        if self.len < N {
            (&self.lines[0..self.len], &[])
        } else {
            // wrapped around, so we need to return two slices
            let (a, b) = self.lines.split_at(self.head);

            (b, a)
        }
    }

    /// Buffered lines as one string, oldest first.
    pub fn format(&self, colored: bool) -> String {
        let mut out = String::new();
        let lines = self.lines();

        for (line, color) in lines.0.iter().chain(lines.1) {
            if colored {
                out.push_str(color.ansi());
                out.push_str(line);
                out.push_str("\x1b[0m");
            } else {
                out.push_str(line);
            }
        }

        out
    }
}
