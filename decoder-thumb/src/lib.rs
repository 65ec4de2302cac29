//! Thumb / Thumb-2 instruction-encoding classifier.
//!
//! Classifies raw bit patterns into the closed [`Encoding`] catalog: 16-bit
//! half-words through [`decode_narrow`], 32-bit words through
//! [`decode_wide`]. Both are pure, total functions; the four sentinel
//! catalog values are ordinary results, never errors. [`Decoder`] layers the
//! half-word stream handling on top for callers that walk a byte buffer.

use decoder::{Decodable, Decoded, Error, ErrorKind, Reader, ToTokens, TokenStream};
use tokenizing::{ColorScheme, Colors};

mod encoding;
mod thumb16;
mod thumb32;

pub use encoding::Encoding;
pub use thumb16::decode_narrow;
pub use thumb32::decode_wide;

/// Whether a half-word opens a 32-bit instruction.
///
/// The wide encodings begin with a half-word whose top five bits are one of
/// `11101`, `11110` or `11111`; every other half-word stands alone as a
/// 16-bit instruction.
pub fn is_wide_prefix(hword: u16) -> bool {
    (hword & 0xE000) == 0xE000 && (hword & 0x1800) != 0
}

/// One classified instruction boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub encoding: Encoding,
    /// The raw pattern; for a 16-bit instruction only the low half-word is
    /// meaningful.
    pub raw: u32,
    width: usize,
}

impl Decoded for Instruction {
    fn width(&self) -> usize {
        self.width
    }
}

impl ToTokens for Instruction {
    fn tokenize(&self, stream: &mut TokenStream) {
        if self.encoding.is_sentinel() {
            stream.push(self.encoding.display_name(), Colors::special());
        } else {
            stream.push(self.encoding.display_name(), Colors::opcode());
        }
    }
}

impl std::fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.encoding.display_name())
    }
}

/// Stream-level decoder: assembles little-endian half-words from a reader
/// and classifies each instruction boundary.
#[derive(Debug, Default, Clone, Copy)]
pub struct Decoder;

impl Decodable for Decoder {
    type Instruction = Instruction;

    fn decode(&self, words: &mut Reader) -> Result<Instruction, Error> {
        let first = words
            .next_hword()
            .ok_or_else(|| Error::new(ErrorKind::ExhaustedInput, 0))?;

        if is_wide_prefix(first) {
            match words.next_hword() {
                Some(second) => {
                    let word = (u32::from(first) << 16) | u32::from(second);
                    Ok(Instruction {
                        encoding: decode_wide(word, false),
                        raw: word,
                        width: 4,
                    })
                }
                // the trailing half-word opens a wide instruction the buffer
                // cannot complete; report it rather than failing the stream
                None => {
                    let word = u32::from(first) << 16;
                    Ok(Instruction {
                        encoding: decode_wide(word, true),
                        raw: word,
                        width: 2,
                    })
                }
            }
        } else {
            Ok(Instruction {
                encoding: decode_narrow(first),
                raw: u32::from(first),
                width: 2,
            })
        }
    }

    fn max_width(&self) -> usize {
        4
    }
}
