//! Colors used for rendering annotated text on the terminal.
use std::borrow::Cow;

/// 24-bit color, rendered as an ANSI truecolor escape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Currently used global colorscheme
pub type Colors = IBM;

pub trait ColorScheme {
    fn delimiter() -> &'static Color;
    fn comment() -> &'static Color;
    fn item() -> &'static Color;

    fn spacing() -> &'static Color {
        &colors::WHITE
    }

    fn annotation() -> &'static Color {
        Self::item()
    }

    fn special() -> &'static Color {
        Self::item()
    }

    fn expr() -> &'static Color;
    fn opcode() -> &'static Color;
    fn immediate() -> &'static Color;
    fn address() -> &'static Color;
}

pub struct IBM;

impl ColorScheme for IBM {
    fn delimiter() -> &'static Color {
        &colors::GRAY20
    }

    fn comment() -> &'static Color {
        &colors::GRAY20
    }

    fn item() -> &'static Color {
        &colors::MAGENTA
    }

    fn annotation() -> &'static Color {
        &colors::BLUE
    }

    fn special() -> &'static Color {
        &colors::RED
    }

    fn expr() -> &'static Color {
        &colors::GRAY99
    }

    fn opcode() -> &'static Color {
        &colors::WHITE
    }

    fn immediate() -> &'static Color {
        &colors::BLUE
    }

    fn address() -> &'static Color {
        &colors::GREEN
    }
}

pub mod colors {
    //! IBM inspired colors.

    use super::Color;

    pub const WHITE: Color = Color::from_rgb(0xff, 0xff, 0xff);
    pub const BLUE: Color = Color::from_rgb(0x0f, 0x62, 0xfe);
    pub const MAGENTA: Color = Color::from_rgb(0xf5, 0x12, 0x81);
    pub const RED: Color = Color::from_rgb(0xff, 0x00, 0x0b);
    pub const GREEN: Color = Color::from_rgb(0x02, 0xed, 0x6e);
    pub const GRAY20: Color = Color::from_rgb(0x20, 0x20, 0x20);
    pub const GRAY40: Color = Color::from_rgb(0x40, 0x40, 0x40);
    pub const GRAY99: Color = Color::from_rgb(0x99, 0x99, 0x99);
}

#[derive(Debug, Clone)]
pub struct Token<'txt> {
    pub text: Cow<'txt, str>,
    pub color: &'static Color,
}

impl<'txt> Token<'txt> {
    pub fn from_string(text: String, color: &'static Color) -> Self {
        Self {
            text: Cow::Owned(text),
            color,
        }
    }

    pub fn from_str(text: &'static str, color: &'static Color) -> Self {
        Self {
            text: Cow::Borrowed(text),
            color,
        }
    }

    /// Render with the ANSI truecolor escape for this token's color.
    pub fn ansi(&self) -> String {
        let Color { r, g, b } = *self.color;
        format!("\x1b[38;2;{r};{g};{b}m{}\x1b[0m", self.text)
    }
}

/// Concatenate tokens into one line, colored or plain.
pub fn render(tokens: &[Token], colored: bool) -> String {
    let mut line = String::new();
    for token in tokens {
        if colored {
            line.push_str(&token.ansi());
        } else {
            line.push_str(&token.text);
        }
    }
    line
}
