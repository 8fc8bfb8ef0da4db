/*
 * emojikit - lib.rs
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

#![deny(
    rustdoc::redundant_explicit_links,
    unsafe_code,
    /* groups */
    clippy::correctness,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::style,
    /* restriction */
    clippy::dbg_macro,
    clippy::as_underscore,
    /* rustdoc */
    rustdoc::broken_intra_doc_links,
    /* pedantic */
    clippy::doc_markdown,
    clippy::expect_fun_call,
    clippy::or_fun_call,
    clippy::unused_enumerate_index,
    clippy::manual_hash_one,
)]
#![allow(clippy::missing_const_for_fn)]
#![doc = include_str!("../README.md")]
//!
//! ## Description
//!
//! - Look up an [`EmojiRecord`] by shortcode, ascii emoticon or raw string
//!   (see [`get`] and [`EmojiTable`])
//! - Convert text between shortcodes, ascii emoticons and raw emoji (see
//!   [`emojify`], [`demojify`] and [`asciify`])
//! - Render emoji as HTML (see [`imagify`], [`spanify`] and
//!   [`MarkupSettings`])
//! - Tell whether a text is made only of emoji (see [`is_emoji`])
//! - Convert between text, UTF-16 and codepoint identifiers (see module
//!   [`codepoint`])
//!
//! The free functions use a process-wide [`Emojis`] instance built from the
//! bundled emoji data on first use (see [`emojis`]).

#[macro_use]
extern crate serde_derive;
pub extern crate log;

pub mod classify;
pub mod codepoint;
pub mod conf;
pub use conf::MarkupSettings;
pub mod error;
pub use error::{Error, ErrorKind, Result};
pub mod markup;
pub mod patterns;
pub mod scanner;
pub mod table;
pub use table::{EmojiRecord, EmojiTable};
pub mod tables;
pub mod transform;
pub use transform::Emojis;

use std::{borrow::Cow, sync::OnceLock};

/// The process-wide [`Emojis`] built from the bundled emoji data.
///
/// The value is lazily initialized on first access.
///
/// # Panics
///
/// If the bundled data has duplicate keys or its patterns do not compile.
/// Both are checked by this crate's tests.
pub fn emojis() -> &'static Emojis {
    static EMOJIS: OnceLock<Emojis> = OnceLock::new();
    EMOJIS.get_or_init(|| {
        Emojis::bundled()
            .unwrap_or_else(|err| panic!("Bundled emoji data is invalid: {}", err))
    })
}

/// Looks up a shortcode, an ascii emoticon or a raw emoji string.
///
/// ```rust
/// assert_eq!(emojikit::get(":smile:").unwrap().raw, "😄");
/// assert_eq!(emojikit::get(":D").unwrap().raw, "😄");
/// assert_eq!(emojikit::get("😄").unwrap().shortcodes, &[":smile:"]);
/// ```
pub fn get(value: &str) -> Option<&'static EmojiRecord> {
    emojis().get(value)
}

/// First ascii emoticon of the emoji `value` refers to.
pub fn ascii(value: &str) -> Option<&'static str> {
    emojis().ascii(value)
}

/// Raw emoji string of the emoji `value` refers to.
pub fn raw(value: &str) -> Option<&'static str> {
    emojis().raw(value)
}

/// Primary shortcode of the emoji `value` refers to.
pub fn shortcode(value: &str) -> Option<&'static str> {
    emojis().shortcode(value)
}

/// `<img>` tag for the emoji `value` refers to.
pub fn image(value: &str, settings: &MarkupSettings) -> Option<String> {
    emojis().image(value, settings)
}

/// `<span>` tag for the emoji `value` refers to.
pub fn span(value: &str, settings: &MarkupSettings) -> Option<String> {
    emojis().span(value, settings)
}

/// Emoji whose name, category, shortcodes or tags contain `query`.
pub fn find(query: &str) -> impl Iterator<Item = &'static EmojiRecord> + '_ {
    emojis().find(query)
}

pub fn is_emoji(text: &str) -> bool {
    emojis().is_emoji(text)
}

pub fn is_emoji_with_limit(text: &str, max: usize) -> bool {
    emojis().is_emoji_with_limit(text, max)
}

pub fn asciify(text: &str) -> Cow<'_, str> {
    emojis().asciify(text)
}

pub fn emojify(text: &str, ascii: bool) -> Cow<'_, str> {
    emojis().emojify(text, ascii)
}

pub fn demojify(text: &str) -> Cow<'_, str> {
    emojis().demojify(text)
}

pub fn imagify<'t>(text: &'t str, ascii: bool, settings: &MarkupSettings) -> Cow<'t, str> {
    emojis().imagify(text, ascii, settings)
}

pub fn spanify<'t>(text: &'t str, ascii: bool, settings: &MarkupSettings) -> Cow<'t, str> {
    emojis().spanify(text, ascii, settings)
}
