/*
 * emojikit - emoji classification
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

//! Deciding whether a text consists of emoji only.
//!
//! This is not grapheme segmentation. Text is walked one scalar at a time and
//! only the composition rules that matter for counting emoji are applied:
//!
//! - whitespace (`\n`, `\r`, `\t`, space) is skipped,
//! - skin tone modifiers, variation selector 16 and the combining enclosing
//!   keycap never count,
//! - the scalar following a zero width joiner never counts,
//! - a digit, `#` or `*` counts but must be followed by variation selector
//!   16, as does any scalar that is not an emoji on its own,
//! - U+FFFC OBJECT REPLACEMENT CHARACTER is never part of an emoji.

use crate::{codepoint::Scalars, table::EmojiTable};

const VARIATION_SELECTOR_16: u32 = 0xFE0F;
const ZERO_WIDTH_JOINER: u32 = 0x200D;
const OBJECT_REPLACEMENT_CHARACTER: u32 = 0xFFFC;
const COMBINING_ENCLOSING_KEYCAP: u32 = 0x20E3;
const SKIN_TONE_MODIFIERS: std::ops::RangeInclusive<u32> = 0x1F3FB..=0x1F3FF;

#[derive(Debug, Default)]
struct State {
    next_must_be_vs16: bool,
    ignore_next: bool,
    count: usize,
}

/// Returns `true` if `text` holds at least one and at most `max` emoji and
/// nothing else but whitespace.
pub fn is_emoji(table: &EmojiTable, text: &str, max: usize) -> bool {
    let mut state = State::default();
    for (scalar, raw) in text.scalars() {
        if matches!(raw, "\n" | "\r" | "\t" | " ") {
            continue;
        }
        if state.next_must_be_vs16 {
            state.next_must_be_vs16 = false;
            if scalar != VARIATION_SELECTOR_16 {
                log::trace!("{:?}: expected VS16 before U+{:04X}", text, scalar);
                return false;
            }
        }
        match scalar {
            s if SKIN_TONE_MODIFIERS.contains(&s) => {}
            ZERO_WIDTH_JOINER => state.ignore_next = true,
            VARIATION_SELECTOR_16 => {}
            OBJECT_REPLACEMENT_CHARACTER => {
                log::trace!("{:?}: object replacement character", text);
                return false;
            }
            COMBINING_ENCLOSING_KEYCAP => {}
            _ if state.ignore_next => state.ignore_next = false,
            _ => {
                state.count += 1;
                if state.count > max {
                    log::trace!("{:?}: more than {} emoji", text, max);
                    return false;
                }
                if matches!(raw.as_bytes(), [b'0'..=b'9' | b'#' | b'*']) {
                    state.next_must_be_vs16 = true;
                } else if table.by_raw(raw).is_none() {
                    // may still be the text form of an emoji with a
                    // presentation selector
                    state.next_must_be_vs16 = true;
                }
            }
        }
    }
    if state.next_must_be_vs16 {
        log::trace!("{:?}: missing trailing VS16", text);
        return false;
    }
    state.count > 0 && state.count <= max
}
