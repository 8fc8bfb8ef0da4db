/*
 * emojikit - codepoint mod.
 *
 * Copyright 2024 Manos Pitsidianakis
 *
 * This file is part of emojikit.
 *
 * emojikit is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * emojikit is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with emojikit. If not, see <http://www.gnu.org/licenses/>.
 */

//! Conversions between text and codepoint identifiers.
//!
//! A codepoint identifier is the lowercase hexadecimal value of every scalar
//! of a string, zero padded to at least four digits and joined with `-`:
//!
//! ```text
//! 😀              1f600
//! ❤️              2764-fe0f
//! 👨‍👩‍👧‍👦         1f468-200d-1f469-200d-1f467-200d-1f466
//! ```
//!
//! Identifiers are the keys of the codepoint index of
//! [`EmojiTable`](crate::EmojiTable) and the image file names used by
//! [`image`](crate::image).

mod utf16;

use std::fmt::Write;

pub use self::utf16::{CodepointIdError, MAX_SCALAR};
use crate::error::{Result, ResultIntoError};

/// Returns the codepoint identifier of `text`.
///
/// ```rust
/// assert_eq!(emojikit::codepoint::to_codepoint_id("😀"), "1f600");
/// assert_eq!(emojikit::codepoint::to_codepoint_id("❤️"), "2764-fe0f");
/// ```
pub fn to_codepoint_id(text: &str) -> String {
    utf16::format_codepoint_id(text.scalars().map(|(scalar, _)| scalar))
}

/// Returns the codepoint identifier of a UTF-16 code unit sequence.
///
/// A high surrogate followed by a low surrogate is one scalar; every other
/// unit, including an unpaired surrogate, is a scalar of its own.
pub fn to_codepoint_id_utf16(units: &[u16]) -> String {
    utf16::format_codepoint_id(char::decode_utf16(units.iter().copied()).map(
        |r| match r {
            Ok(c) => c as u32,
            Err(err) => u32::from(err.unpaired_surrogate()),
        },
    ))
}

/// Returns the UTF-16 code units for a codepoint identifier.
///
/// Scalars up to `0xFFFF` are emitted verbatim, supplementary scalars as
/// surrogate pairs.
pub fn to_utf16(id: &str) -> Result<Vec<u16>> {
    utf16::codepoint_id_to_utf16(id)
        .chain_err_summary(|| format!("Could not encode codepoint id `{}`", id))
}

/// Returns the string a codepoint identifier stands for.
///
/// ```rust
/// assert_eq!(emojikit::codepoint::from_codepoint_id("1f600").unwrap(), "😀");
/// assert!(emojikit::codepoint::from_codepoint_id("110000").is_err());
/// ```
///
/// Fails for malformed tokens, scalars beyond `U+10FFFF` and lone surrogate
/// scalars, which cannot be part of a `String`.
pub fn from_codepoint_id(id: &str) -> Result<String> {
    let units = to_utf16(id)?;
    String::from_utf16(&units)
        .chain_err_summary(|| format!("Codepoint id `{}` is not well-formed UTF-16", id))
}

/// Returns the code units of a codepoint identifier as `\uXXXX` escapes.
///
/// ```rust
/// assert_eq!(
///     emojikit::codepoint::to_surrogate_literal("1f600").unwrap(),
///     r"\ud83d\ude00"
/// );
/// ```
pub fn to_surrogate_literal(id: &str) -> Result<String> {
    let units = to_utf16(id)?;
    let mut ret = String::with_capacity(units.len() * 6);
    for unit in units {
        let _ = write!(ret, "\\u{:04x}", unit);
    }
    Ok(ret)
}

/// Iterator over the scalars of a string and the text each one spans.
pub struct ScalarsIterator<'a> {
    rest: std::str::CharIndices<'a>,
    text: &'a str,
}

impl<'a> Iterator for ScalarsIterator<'a> {
    type Item = (u32, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let (idx, c) = self.rest.next()?;
        Some((c as u32, &self.text[idx..idx + c.len_utf8()]))
    }
}

pub trait Scalars {
    fn scalars(&self) -> ScalarsIterator<'_>;
}

impl Scalars for str {
    fn scalars(&self) -> ScalarsIterator<'_> {
        ScalarsIterator {
            rest: self.char_indices(),
            text: self,
        }
    }
}
