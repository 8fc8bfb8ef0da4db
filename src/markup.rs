/*
 * emojikit - HTML markup
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

//! `<img>` and `<span>` tags for emoji.

use crate::{conf::MarkupSettings, table::EmojiRecord};

/// `<img class="{css}" alt="{raw}" title="{shortcode}" src="{path}{codepoint}{ext}" />`
///
/// The image file name is the base codepoint id of the emoji. Settings
/// values are inserted as they are.
pub fn image(emoji: &EmojiRecord, settings: &MarkupSettings) -> String {
    format!(
        r#"<img class="{css}" alt="{raw}" title="{title}" src="{path}{codepoint}{ext}" />"#,
        css = settings.css,
        raw = emoji.raw,
        title = emoji.primary_shortcode(),
        path = settings.path,
        codepoint = emoji.base_codepoint(),
        ext = settings.ext,
    )
}

/// `<span class="{css}" title="{shortcode}">{raw}</span>`
pub fn span(emoji: &EmojiRecord, settings: &MarkupSettings) -> String {
    format!(
        r#"<span class="{css}" title="{title}">{raw}</span>"#,
        css = settings.css,
        title = emoji.primary_shortcode(),
        raw = emoji.raw,
    )
}
