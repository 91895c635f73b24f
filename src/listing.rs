use serde::Serialize;

use crate::decoder::{Decoded, Decoder};
use crate::disasm::fmt_decoded;
use crate::isa::simp::SimpDecoder;

/// Why a raw line does not hold an instruction word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum WordError {
    #[error("expected 32 binary digits, got {0}")]
    BadLength(usize),
    #[error("invalid binary digit {0:?}")]
    BadDigit(char),
}

/// Parse a line as a 32-bit binary word, ignoring surrounding whitespace.
pub fn parse_word(line: &str) -> Result<u32, WordError> {
    let s = line.trim();
    if s.len() != 32 {
        return Err(WordError::BadLength(s.len()));
    }
    s.chars().try_fold(0u32, |w, c| match c {
        '0' => Ok(w << 1),
        '1' => Ok(w << 1 | 1),
        other => Err(WordError::BadDigit(other)),
    })
}

/// One element of a decoded listing.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Entry {
    /// A decoded instruction; `line` is the index of its first input line.
    Insn {
        line: usize,
        decoded: Decoded,
        text: String,
    },
    /// An inline annotation for a failed bigimm continuation.
    Error { line: usize, message: String },
}

impl Entry {
    /// Render the entry the way the listing prints it.
    pub fn render(&self) -> String {
        match self {
            Entry::Insn { text, .. } => text.clone(),
            Entry::Error { message, .. } => format!("; ERROR: {message}"),
        }
    }
}

/// Scan raw input lines into listing entries.
///
/// Lines that are not 32 binary digits after trimming are skipped. A word
/// with the bigimm bit set consumes the following line as its full 32-bit
/// immediate: if input ends before that line the scan stops there, if the
/// line is malformed the scan annotates it and moves on.
pub fn scan<S: AsRef<str>>(lines: &[S]) -> Vec<Entry> {
    let dec = SimpDecoder::new();
    let mut entries = Vec::new();
    let mut i = 0;
    while i < lines.len() {
        let word = match parse_word(lines[i].as_ref()) {
            Ok(w) => w,
            Err(err) => {
                tracing::trace!(line = i, %err, "skipping line");
                i += 1;
                continue;
            }
        };
        let d = dec.decode(word);
        if !d.bigimm {
            entries.push(Entry::Insn {
                line: i,
                decoded: d,
                text: fmt_decoded(&d),
            });
            i += 1;
            continue;
        }
        let Some(low) = lines.get(i + 1) else {
            entries.push(Entry::Error {
                line: i,
                message: format!("bigimm=1 at line {i}, but no low-word found"),
            });
            break;
        };
        match parse_word(low.as_ref()) {
            Ok(low) => {
                // Reinterpret the low word as signed 32-bit two's-complement
                let d = Decoded {
                    imm: low as i32,
                    ..d
                };
                entries.push(Entry::Insn {
                    line: i,
                    decoded: d,
                    text: fmt_decoded(&d),
                });
            }
            Err(err) => {
                tracing::debug!(line = i + 1, %err, "bad bigimm low word");
                entries.push(Entry::Error {
                    line: i + 1,
                    message: format!("invalid low-word binary at line {}", i + 1),
                });
            }
        }
        i += 2;
    }
    entries
}

/// Decode raw input lines straight to printable text, one string per
/// instruction or annotation.
pub fn decode_lines<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    scan(lines).iter().map(Entry::render).collect()
}
