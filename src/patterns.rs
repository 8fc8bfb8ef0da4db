/*
 * emojikit - matching patterns
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

//! The three emoji [`Scanner`]s: ascii emoticons, raw emoji and shortcodes.

use crate::{error::Result, scanner::Scanner, tables};

/// Pattern fragments: each one is an alternation of escaped literals, except
/// `ignore` which is a complete expression.
#[derive(Clone, Copy, Debug)]
pub struct Fragments<'a> {
    pub ascii: &'a str,
    pub raw: &'a str,
    pub shortcode: &'a str,
    pub ignore: &'a str,
}

impl Fragments<'static> {
    /// The fragments generated from the bundled emoji data.
    pub const fn generated() -> Self {
        Self {
            ascii: tables::ASCII_PATTERN,
            raw: tables::RAW_PATTERN,
            shortcode: tables::SHORTCODE_PATTERN,
            ignore: tables::IGNORE_PATTERN,
        }
    }
}

/// An alternation that can never match, used in place of an empty fragment.
const NEVER: &str = r"[^\s\S]";

fn or_never(fragment: &str) -> &str {
    if fragment.is_empty() {
        NEVER
    } else {
        fragment
    }
}

#[derive(Clone, Debug)]
pub struct PatternSet {
    /// Ascii emoticons, only when preceded by whitespace or the start of text
    /// and followed by whitespace, the end of text, `!`, `,` or `.`.
    pub ascii: Scanner,
    /// Raw emoji strings.
    pub raw: Scanner,
    /// Shortcodes, case-insensitively.
    pub shortcode: Scanner,
}

impl PatternSet {
    pub fn new(fragments: Fragments<'_>) -> Result<Self> {
        let ascii = Scanner::new(
            fragments.ignore,
            &format!(
                r"(?:^|\s)(?P<payload>{})(?:[\s!,.]|$)",
                or_never(fragments.ascii)
            ),
            false,
        )?;
        let raw = Scanner::new(
            fragments.ignore,
            &format!("(?P<payload>{})", or_never(fragments.raw)),
            false,
        )?;
        let shortcode = Scanner::new(
            fragments.ignore,
            &format!("(?P<payload>{})", or_never(fragments.shortcode)),
            true,
        )?;
        log::debug!(
            "Compiled emoji patterns: ascii {} bytes, raw {} bytes, shortcode {} bytes",
            fragments.ascii.len(),
            fragments.raw.len(),
            fragments.shortcode.len()
        );
        Ok(Self {
            ascii,
            raw,
            shortcode,
        })
    }
}
