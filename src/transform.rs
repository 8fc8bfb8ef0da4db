/*
 * emojikit - text transforms
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

//! The [`Emojis`] type: lookups and text transforms over one table and its
//! patterns.

use std::borrow::Cow;

use crate::{
    classify,
    conf::MarkupSettings,
    error::Result,
    markup,
    patterns::{Fragments, PatternSet},
    scanner::Scanner,
    table::{EmojiRecord, EmojiTable},
};

/// Runs `scanner` over the result of a previous pass, keeping the previous
/// allocation when the second pass changes nothing.
fn chain<'t, F, R>(text: Cow<'t, str>, scanner: &Scanner, resolve: F) -> Cow<'t, str>
where
    F: FnMut(&str) -> Option<R>,
    R: AsRef<str>,
{
    match text {
        Cow::Borrowed(text) => scanner.replace(text, resolve),
        Cow::Owned(text) => {
            let replaced = match scanner.replace(&text, resolve) {
                Cow::Owned(replaced) => Some(replaced),
                Cow::Borrowed(_) => None,
            };
            Cow::Owned(replaced.unwrap_or(text))
        }
    }
}

#[derive(Clone, Debug)]
pub struct Emojis {
    table: EmojiTable,
    patterns: PatternSet,
}

impl Emojis {
    pub fn new(table: EmojiTable, patterns: PatternSet) -> Self {
        Self { table, patterns }
    }

    /// Builds the table and compiles the patterns of the bundled emoji data.
    pub fn bundled() -> Result<Self> {
        Ok(Self::new(
            EmojiTable::new(crate::tables::ALL)?,
            PatternSet::new(Fragments::generated())?,
        ))
    }

    pub fn table(&self) -> &EmojiTable {
        &self.table
    }

    /// Looks up a shortcode, an ascii emoticon or a raw emoji string.
    pub fn get(&self, value: &str) -> Option<&'static EmojiRecord> {
        self.table.get(value)
    }

    /// First ascii emoticon of the emoji `value` refers to.
    pub fn ascii(&self, value: &str) -> Option<&'static str> {
        self.get(value)?.primary_ascii()
    }

    /// Raw emoji string of the emoji `value` refers to.
    pub fn raw(&self, value: &str) -> Option<&'static str> {
        self.get(value).map(|e| e.raw)
    }

    /// Primary shortcode of the emoji `value` refers to.
    pub fn shortcode(&self, value: &str) -> Option<&'static str> {
        self.get(value).map(EmojiRecord::primary_shortcode)
    }

    pub fn image(&self, value: &str, settings: &MarkupSettings) -> Option<String> {
        self.get(value).map(|e| markup::image(e, settings))
    }

    pub fn span(&self, value: &str, settings: &MarkupSettings) -> Option<String> {
        self.get(value).map(|e| markup::span(e, settings))
    }

    pub fn find<'q>(&self, query: &'q str) -> impl Iterator<Item = &'static EmojiRecord> + 'q {
        self.table.find(query)
    }

    pub fn is_emoji(&self, text: &str) -> bool {
        self.is_emoji_with_limit(text, usize::MAX)
    }

    /// Like [`Emojis::is_emoji`], but also fails if there are more than
    /// `max` emoji.
    pub fn is_emoji_with_limit(&self, text: &str, max: usize) -> bool {
        classify::is_emoji(&self.table, text, max)
    }

    /// Replaces shortcodes and raw emoji with their ascii emoticon, where
    /// they have one.
    pub fn asciify<'t>(&self, text: &'t str) -> Cow<'t, str> {
        let text = self
            .patterns
            .shortcode
            .replace(text, |m| self.ascii(m));
        chain(text, &self.patterns.raw, |m| self.ascii(m))
    }

    /// Replaces shortcodes and, if `ascii` is set, ascii emoticons with raw
    /// emoji.
    pub fn emojify<'t>(&self, text: &'t str, ascii: bool) -> Cow<'t, str> {
        let text = self.patterns.shortcode.replace(text, |m| self.raw(m));
        if !ascii {
            return text;
        }
        chain(text, &self.patterns.ascii, |m| {
            self.table.by_ascii(m).map(|e| e.raw)
        })
    }

    /// Replaces raw emoji with their primary shortcode.
    pub fn demojify<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.patterns.raw.replace(text, |m| self.shortcode(m))
    }

    /// [`Emojis::emojify`], then replaces raw emoji with `<img>` tags.
    pub fn imagify<'t>(
        &self,
        text: &'t str,
        ascii: bool,
        settings: &MarkupSettings,
    ) -> Cow<'t, str> {
        chain(self.emojify(text, ascii), &self.patterns.raw, |m| {
            self.image(m, settings)
        })
    }

    /// [`Emojis::emojify`], then replaces raw emoji with `<span>` tags.
    pub fn spanify<'t>(
        &self,
        text: &'t str,
        ascii: bool,
        settings: &MarkupSettings,
    ) -> Cow<'t, str> {
        chain(self.emojify(text, ascii), &self.patterns.raw, |m| {
            self.span(m, settings)
        })
    }
}
