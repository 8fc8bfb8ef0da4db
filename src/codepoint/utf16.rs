/*
 * emojikit - codepoint identifiers and UTF-16 code units.
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

/* This file is also `include!`d by build.rs, so it must only depend on std
 * and must not contain inner attributes or inner doc comments. */

/// Largest Unicode scalar value.
pub const MAX_SCALAR: u32 = 0x10FFFF;

const SURROGATE_OFFSET: u32 = 0x10000;
const HIGH_SURROGATE_START: u32 = 0xD800;
const LOW_SURROGATE_START: u32 = 0xDC00;

/// Why a codepoint identifier could not be turned into code units.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CodepointIdError {
    /// A `-` separated token is empty or is not a hexadecimal number that fits
    /// in 32 bits.
    InvalidToken(String),
    /// The token parsed but is above U+10FFFF.
    OutOfRange(u32),
}

impl std::fmt::Display for CodepointIdError {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::InvalidToken(token) => {
                write!(fmt, "`{}` is not a hexadecimal code point", token)
            }
            Self::OutOfRange(scalar) => {
                write!(fmt, "unsupported code point: 0x{:X}", scalar)
            }
        }
    }
}

impl std::error::Error for CodepointIdError {}

/// Renders scalars as lowercase hex with at least four digits, joined by `-`.
pub fn format_codepoint_id<I: IntoIterator<Item = u32>>(scalars: I) -> String {
    let mut ret = String::new();
    for (i, scalar) in scalars.into_iter().enumerate() {
        if i > 0 {
            ret.push('-');
        }
        ret.push_str(&format!("{:04x}", scalar));
    }
    ret
}

/// Splits a codepoint identifier on `-` and parses every token as hex.
pub fn parse_codepoint_id(id: &str) -> std::result::Result<Vec<u32>, CodepointIdError> {
    id.split('-')
        .map(|token| {
            if token.is_empty() || !token.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(CodepointIdError::InvalidToken(token.to_string()));
            }
            u32::from_str_radix(token, 16)
                .map_err(|_| CodepointIdError::InvalidToken(token.to_string()))
        })
        .collect()
}

/// Appends the UTF-16 encoding of `scalar` to `out`.
///
/// Values up to `0xFFFF` are pushed as a single unit as they are, surrogate
/// range included; supplementary values become a high/low surrogate pair.
pub fn push_utf16(scalar: u32, out: &mut Vec<u16>) -> std::result::Result<(), CodepointIdError> {
    if scalar <= 0xFFFF {
        out.push(scalar as u16);
    } else if scalar <= MAX_SCALAR {
        // leaves 20 bits
        let v = scalar - SURROGATE_OFFSET;
        out.push(((v >> 10) + HIGH_SURROGATE_START) as u16);
        out.push(((v & 0x3FF) + LOW_SURROGATE_START) as u16);
    } else {
        return Err(CodepointIdError::OutOfRange(scalar));
    }
    Ok(())
}

/// Code units of every scalar in `id`, concatenated in order.
pub fn codepoint_id_to_utf16(id: &str) -> std::result::Result<Vec<u16>, CodepointIdError> {
    let scalars = parse_codepoint_id(id)?;
    let mut ret = Vec::with_capacity(scalars.len() * 2);
    for scalar in scalars {
        push_utf16(scalar, &mut ret)?;
    }
    Ok(ret)
}
