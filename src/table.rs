/*
 * emojikit - emoji table
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

//! Emoji records and their lookup indices.

use std::collections::{hash_map::Entry, HashMap};

use crate::{
    codepoint,
    error::{Error, ErrorKind, Result},
};

/// One emoji, as described by the emoji metadata.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct EmojiRecord {
    /// The fully-qualified string of the emoji.
    pub raw: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    /// `[base]`, or `[base, fully_qualified]` when they differ.
    pub codepoints: &'static [&'static str],
    /// Primary shortcode first, then aliases.
    pub shortcodes: &'static [&'static str],
    pub ascii: Option<&'static [&'static str]>,
    pub tags: Option<&'static [&'static str]>,
    /// Unicode version the emoji was introduced in.
    pub version: &'static str,
}

impl EmojiRecord {
    pub fn primary_shortcode(&self) -> &'static str {
        self.shortcodes[0]
    }

    /// Codepoint identifier without variation selectors and joiners; used
    /// for image file names.
    pub fn base_codepoint(&self) -> &'static str {
        self.codepoints[0]
    }

    pub fn fully_qualified_codepoint(&self) -> &'static str {
        self.codepoints[self.codepoints.len() - 1]
    }

    /// First ascii emoticon for this emoji, if any.
    pub fn primary_ascii(&self) -> Option<&'static str> {
        self.ascii.and_then(|a| a.first().copied())
    }

    /// Whether `query` is a substring of the name, the category, a shortcode
    /// or a tag.
    pub fn matches(&self, query: &str) -> bool {
        self.name.contains(query)
            || self.category.contains(query)
            || self.shortcodes.iter().any(|s| s.contains(query))
            || self
                .tags
                .map(|tags| tags.iter().any(|t| t.contains(query)))
                .unwrap_or(false)
    }

    fn validate(&self) -> Result<()> {
        if self.codepoints.is_empty() || self.codepoints.len() > 2 {
            return Err(Error::new(format!(
                "Emoji `{}` must have one or two codepoint ids, found {}",
                self.name,
                self.codepoints.len()
            ))
            .set_kind(ErrorKind::InvalidArgument));
        }
        if self.shortcodes.is_empty() {
            return Err(Error::new(format!("Emoji `{}` has no shortcodes", self.name))
                .set_kind(ErrorKind::InvalidArgument));
        }
        if codepoint::to_codepoint_id(self.raw) != self.fully_qualified_codepoint() {
            return Err(Error::new(format!(
                "Emoji `{}`: raw string {:?} does not match codepoint id {}",
                self.name,
                self.raw,
                self.fully_qualified_codepoint()
            ))
            .set_kind(ErrorKind::InvalidArgument));
        }
        Ok(())
    }
}

/// An immutable list of [`EmojiRecord`]s with ascii, codepoint and shortcode
/// indices.
#[derive(Clone, Debug)]
pub struct EmojiTable {
    records: &'static [EmojiRecord],
    ascii: HashMap<&'static str, usize>,
    codepoints: HashMap<&'static str, usize>,
    shortcodes: HashMap<&'static str, usize>,
}

fn insert_unique(
    map: &mut HashMap<&'static str, usize>,
    index_name: &str,
    key: &'static str,
    idx: usize,
) -> Result<()> {
    match map.entry(key) {
        Entry::Occupied(_) => Err(Error::new(format!(
            "Duplicate {} `{}` in emoji data",
            index_name, key
        ))
        .set_kind(ErrorKind::DataIntegrity)),
        Entry::Vacant(e) => {
            e.insert(idx);
            Ok(())
        }
    }
}

impl EmojiTable {
    /// Builds the indices for `records`.
    ///
    /// Fails if an ascii token, shortcode or codepoint id appears twice, or if
    /// a record breaks its own invariants.
    pub fn new(records: &'static [EmojiRecord]) -> Result<Self> {
        let mut ret = Self {
            records,
            ascii: HashMap::default(),
            codepoints: HashMap::with_capacity(records.len()),
            shortcodes: HashMap::with_capacity(records.len()),
        };
        for (idx, record) in records.iter().enumerate() {
            record.validate()?;
            for &ascii in record.ascii.unwrap_or_default() {
                insert_unique(&mut ret.ascii, "ascii emoticon", ascii, idx)?;
            }
            for &cp in record.codepoints {
                insert_unique(&mut ret.codepoints, "codepoint id", cp, idx)?;
            }
            for &shortcode in record.shortcodes {
                insert_unique(&mut ret.shortcodes, "shortcode", shortcode, idx)?;
            }
        }
        log::debug!(
            "Built emoji table: {} records, {} codepoint ids, {} shortcodes, {} ascii emoticons",
            ret.records.len(),
            ret.codepoints.len(),
            ret.shortcodes.len(),
            ret.ascii.len()
        );
        Ok(ret)
    }

    /// All records in table order.
    pub fn records(&self) -> &'static [EmojiRecord] {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn by_shortcode(&self, shortcode: &str) -> Option<&'static EmojiRecord> {
        self.shortcodes.get(shortcode).map(|&idx| &self.records[idx])
    }

    pub fn by_ascii(&self, ascii: &str) -> Option<&'static EmojiRecord> {
        self.ascii.get(ascii).map(|&idx| &self.records[idx])
    }

    pub fn by_codepoint_id(&self, id: &str) -> Option<&'static EmojiRecord> {
        self.codepoints.get(id).map(|&idx| &self.records[idx])
    }

    /// Looks up a raw emoji string, base or fully-qualified.
    pub fn by_raw(&self, raw: &str) -> Option<&'static EmojiRecord> {
        self.by_codepoint_id(&codepoint::to_codepoint_id(raw))
    }

    /// Resolves a shortcode, an ascii emoticon or a raw emoji string, in that
    /// order.
    pub fn get(&self, value: &str) -> Option<&'static EmojiRecord> {
        if value.starts_with(':') {
            if let Some(record) = self.by_shortcode(value) {
                return Some(record);
            }
        }
        self.by_ascii(value).or_else(|| self.by_raw(value))
    }

    /// Every record with `query` in its name, category, shortcodes or tags,
    /// in table order.
    pub fn find<'q>(&self, query: &'q str) -> impl Iterator<Item = &'static EmojiRecord> + 'q {
        self.records.iter().filter(move |r| r.matches(query))
    }
}
