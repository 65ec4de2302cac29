//! Annotates a raw memory dump with Thumb / Thumb-2 encoding names.

use decoder::{Decodable, Decoded, Reader};
use thumb::{Decoder, Encoding, Instruction};
use tokenizing::{render, ColorScheme, Colors, Token};

mod args;

#[macro_export]
macro_rules! exit {
    () => {{
        std::process::exit(0);
    }};

    ($($arg:tt)*) => {{
        eprintln!($($arg)*);
        std::process::exit(1);
    }};
}

#[macro_export]
macro_rules! assert_exit {
    ($cond:expr $(,)?) => {{
        if !($cond) {
            $crate::exit!();
        }
    }};

    ($cond:expr, $($arg:tt)+) => {{
        if !($cond) {
            $crate::exit!($($arg)*);
        }
    }};
}

/// One annotated line: address, raw bytes, encoding name and, on request,
/// the pattern's binary and hex forms.
fn annotate(addr: u32, bytes: &[u8], inst: &Instruction, show_bits: bool) -> Vec<Token<'static>> {
    let mut tokens = Vec::with_capacity(8);

    tokens.push(Token::from_string(format!("{addr:08x}"), Colors::address()));
    tokens.push(Token::from_str(": ", Colors::spacing()));

    let mut raw = String::with_capacity(13);
    for byte in bytes {
        raw.push_str(&format!("{byte:02x} "));
    }
    // widest pattern is four bytes; pad so the names line up
    while raw.len() < 13 {
        raw.push(' ');
    }
    tokens.push(Token::from_string(raw, Colors::expr()));

    tokens.extend(inst.tokens());

    if show_bits {
        let bits = bytes.len() * 8;
        let nibbles = bytes.len() * 2;
        let pattern = inst.raw;
        tokens.push(Token::from_string(
            format!("  0b{pattern:0bits$b} 0x{pattern:0nibbles$X}"),
            Colors::immediate(),
        ));
    }

    tokens
}

fn main() {
    let args = args::Cli::new();

    let data = match std::fs::read(&args.dump) {
        Ok(data) => data,
        Err(err) => exit!("Failed to read '{}': {err}", args.dump.display()),
    };

    let colored = !args.no_color;
    let decoder = Decoder;
    let mut reader = Reader::new(&data);

    let mut concrete = 0usize;
    let mut sentinels = 0usize;

    while let Ok(inst) = decoder.decode(&mut reader) {
        let end = reader.total_offset();
        let start = end - inst.width();
        let addr = args.base + start as u32;

        if inst.encoding.is_sentinel() {
            sentinels += 1;
        } else {
            concrete += 1;
        }

        if inst.encoding == Encoding::INVALID {
            log::warn!("{addr:08x}: wide instruction cut off at the end of the dump");
        }

        let tokens = annotate(addr, &data[start..end], &inst, args.bits);
        println!("{}", render(&tokens, colored));
    }

    if !reader.is_empty() {
        let addr = args.base + reader.total_offset() as u32;
        log::warn!("{addr:08x}: trailing byte does not form a half-word");
    }

    log::notify!(
        "{}: {concrete} instructions, {sentinels} sentinel patterns",
        args.dump.display()
    );

    eprint!("{}", log::LOGGER.lock().unwrap().format(colored));
}
