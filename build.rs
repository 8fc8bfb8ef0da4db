/*
 * emojikit - build.rs
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

//! Generates the emoji record table and the matching pattern fragments from
//! `data/emoji.json` into `$OUT_DIR/tables.rs`.

extern crate serde;
#[macro_use]
extern crate serde_derive;

use std::{
    fmt::Write as _,
    fs::File,
    io::{BufReader, Write as _},
    path::Path,
};

use indexmap::IndexMap;

#[allow(dead_code)]
mod utf16 {
    include!("src/codepoint/utf16.rs");
}

const DATA_PATH: &str = "data/emoji.json";
const UTF16_PATH: &str = "src/codepoint/utf16.rs";

/// Single ascii characters that have an emoji presentation. They are dropped
/// from the table so plain digits and symbols in text are never matched.
const ASCII_SYMBOLS: &str = "0123456789#*";

const IGNORE_PATTERN: &str = "<object[^>]*>.*?</object>|<span[^>]*>.*?</span>|<(?:object|embed|svg|img|div|span|p|a)[^>]*>";

#[derive(Debug, Deserialize)]
struct CodePoints {
    base: String,
    fully_qualified: String,
}

#[derive(Debug, Deserialize)]
struct Metadata {
    name: String,
    category: String,
    shortname: String,
    #[serde(default)]
    shortname_alternates: Vec<String>,
    #[serde(default)]
    ascii: Vec<String>,
    code_points: CodePoints,
    #[serde(default)]
    keywords: Vec<String>,
    unicode_version: serde_json::Value,
}

impl Metadata {
    fn version(&self) -> String {
        match &self.unicode_version {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }

    fn codepoints(&self) -> Vec<&str> {
        if self.code_points.base == self.code_points.fully_qualified {
            vec![self.code_points.base.as_str()]
        } else {
            vec![
                self.code_points.base.as_str(),
                self.code_points.fully_qualified.as_str(),
            ]
        }
    }

    fn shortcodes(&self) -> Vec<&str> {
        std::iter::once(self.shortname.as_str())
            .chain(self.shortname_alternates.iter().map(String::as_str))
            .collect()
    }
}

fn from_codepoint_id(id: &str) -> Result<String, Box<dyn std::error::Error>> {
    let units = utf16::codepoint_id_to_utf16(id)?;
    Ok(String::from_utf16(&units)?)
}

fn str_slice<S: AsRef<str>>(items: &[S]) -> String {
    let mut ret = String::from("&[");
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            ret.push_str(", ");
        }
        let _ = write!(ret, "{:?}", item.as_ref());
    }
    ret.push(']');
    ret
}

fn opt_str_slice<S: AsRef<str>>(items: &[S]) -> String {
    if items.is_empty() {
        "None".to_string()
    } else {
        format!("Some({})", str_slice(items))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed={}", DATA_PATH);
    println!("cargo:rerun-if-changed={}", UTF16_PATH);

    let reader = BufReader::new(File::open(DATA_PATH)?);
    let mut metadata: IndexMap<String, Metadata> = serde_json::from_reader(reader)?;
    for c in ASCII_SYMBOLS.chars() {
        metadata.shift_remove(&utf16::format_codepoint_id([c as u32]));
    }

    let version_marker = regex::Regex::new(r"uc\d+")?;

    let mut records = String::new();
    let mut ascii_pattern: Vec<String> = vec![];
    let mut raw_literals: Vec<(usize, String)> = vec![];
    let mut shortcode_pattern: Vec<String> = vec![];
    for emoji in metadata.values() {
        let raw = from_codepoint_id(&emoji.code_points.fully_qualified)?;
        let codepoints = emoji.codepoints();
        let shortcodes = emoji.shortcodes();
        let tags = emoji
            .keywords
            .iter()
            .filter(|k| !version_marker.is_match(k))
            .collect::<Vec<_>>();

        ascii_pattern.extend(emoji.ascii.iter().map(|a| regex::escape(a)));
        for cp in &codepoints {
            raw_literals.push((cp.len(), regex::escape(&from_codepoint_id(cp)?)));
        }
        shortcode_pattern.extend(shortcodes.iter().map(|s| regex::escape(s)));

        writeln!(
            records,
            "    EmojiRecord {{ raw: {raw:?}, name: {name:?}, category: {category:?}, codepoints: \
             {codepoints}, shortcodes: {shortcodes}, ascii: {ascii}, tags: {tags}, version: \
             {version:?} }},",
            raw = raw,
            name = emoji.name,
            category = emoji.category,
            codepoints = str_slice(&codepoints),
            shortcodes = str_slice(&shortcodes),
            ascii = opt_str_slice(&emoji.ascii),
            tags = opt_str_slice(&tags),
            version = emoji.version(),
        )?;
    }
    // Longer sequences must be tried first so that a prefix such as a base
    // emoji does not shadow its modified or joined forms.
    raw_literals.sort_by(|a, b| b.0.cmp(&a.0));
    let raw_pattern = raw_literals
        .into_iter()
        .map(|(_, l)| l)
        .collect::<Vec<_>>()
        .join("|");

    let out_dir = std::env::var("OUT_DIR")?;
    let mut file = File::create(Path::new(&out_dir).join("tables.rs"))?;
    writeln!(file, "/// Every emoji, in data file order.")?;
    writeln!(file, "pub static ALL: &[EmojiRecord] = &[")?;
    file.write_all(records.as_bytes())?;
    writeln!(file, "];")?;
    writeln!(file)?;
    writeln!(file, "/// Alternation of every ascii emoticon.")?;
    writeln!(file, "pub const ASCII_PATTERN: &str = {:?};", ascii_pattern.join("|"))?;
    writeln!(file)?;
    writeln!(
        file,
        "/// Alternation of every raw emoji string, longest codepoint id first."
    )?;
    writeln!(file, "pub const RAW_PATTERN: &str = {:?};", raw_pattern)?;
    writeln!(file)?;
    writeln!(file, "/// Alternation of every shortcode and alias.")?;
    writeln!(
        file,
        "pub const SHORTCODE_PATTERN: &str = {:?};",
        shortcode_pattern.join("|")
    )?;
    writeln!(file)?;
    writeln!(file, "/// Markup where emoji must be left alone.")?;
    writeln!(file, "pub const IGNORE_PATTERN: &str = {:?};", IGNORE_PATTERN)?;
    Ok(())
}
