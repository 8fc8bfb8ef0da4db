/*
 * emojikit - scanner
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

//! Left-to-right scanning of text for substitution candidates outside of
//! ignored markup.
//!
//! A [`Scanner`] holds two expressions: one for spans that must be copied
//! verbatim (HTML elements and tags) and one for candidates. The candidate
//! expression must have a capture group named `payload`; only that group is
//! handed to the resolver and substituted, the rest of the match is context.
//! At every step the leftmost of the two matches wins, with ignored spans
//! winning ties, and scanning resumes right after the winning span or
//! payload.

use std::{borrow::Cow, ops::Range};

use regex::{Regex, RegexBuilder};

use crate::error::{Error, ErrorKind, Result, ResultIntoError};

/// Name of the capture group that holds the substitutable part of a
/// candidate match.
pub const PAYLOAD_GROUP: &str = "payload";

/// Generated alternations compile to large automata.
const SIZE_LIMIT: usize = 64 * (1 << 20);

fn compile(pattern: &str, case_insensitive: bool) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(case_insensitive)
        .size_limit(SIZE_LIMIT)
        .build()
        .chain_err_summary(|| {
            let mut preview = pattern.chars().take(64).collect::<String>();
            if preview.len() < pattern.len() {
                preview.push_str("...");
            }
            format!("Could not compile regular expression `{}`", preview)
        })
}

#[derive(Clone, Debug)]
pub struct Scanner {
    ignore: Regex,
    candidate: Regex,
}

/// A span of the scanned text that [`Scanner::segments`] stopped at.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Segment {
    /// Markup that must be left untouched.
    Ignored(Range<usize>),
    /// The `payload` range of a candidate match.
    Candidate(Range<usize>),
}

impl Scanner {
    /// Compiles `ignore` and `candidate`. `candidate` must contain a
    /// `(?P<payload>...)` group. Empty payloads are never reported.
    pub fn new(ignore: &str, candidate: &str, case_insensitive: bool) -> Result<Self> {
        let ignore = compile(ignore, case_insensitive)?;
        let candidate = compile(candidate, case_insensitive)?;
        if !candidate
            .capture_names()
            .any(|name| name == Some(PAYLOAD_GROUP))
        {
            return Err(Error::new(format!(
                "Candidate expression `{}` has no `{}` group",
                candidate.as_str(),
                PAYLOAD_GROUP
            ))
            .set_kind(ErrorKind::Pattern));
        }
        Ok(Self { ignore, candidate })
    }

    pub fn segments<'s, 't>(&'s self, text: &'t str) -> Segments<'s, 't> {
        Segments {
            scanner: self,
            text,
            pos: 0,
            ignore: Lookahead::Unknown,
            candidate: Lookahead::Unknown,
        }
    }

    /// Replaces every candidate payload for which `resolve` returns a value.
    ///
    /// Text that is not part of a resolved payload is copied verbatim. If
    /// nothing is replaced the input is returned borrowed.
    pub fn replace<'t, F, R>(&self, text: &'t str, mut resolve: F) -> Cow<'t, str>
    where
        F: FnMut(&str) -> Option<R>,
        R: AsRef<str>,
    {
        let mut ret: Option<String> = None;
        let mut last = 0;
        for segment in self.segments(text) {
            let Segment::Candidate(payload) = segment else {
                continue;
            };
            let matched = &text[payload.clone()];
            if let Some(replacement) = resolve(matched) {
                let replacement = replacement.as_ref();
                log::trace!("replacing {:?} with {:?}", matched, replacement);
                let out = ret.get_or_insert_with(|| String::with_capacity(text.len()));
                out.push_str(&text[last..payload.start]);
                out.push_str(replacement);
                last = payload.end;
            }
        }
        match ret {
            None => Cow::Borrowed(text),
            Some(mut out) => {
                out.push_str(&text[last..]);
                Cow::Owned(out)
            }
        }
    }
}

/// A match found ahead of the scanning position.
#[derive(Clone, Debug)]
struct Found {
    /// Start of the whole match, context included.
    start: usize,
    span: Range<usize>,
}

#[derive(Clone, Debug)]
enum Lookahead {
    Unknown,
    Exhausted,
    Found(Found),
}

impl Lookahead {
    /// Drops a cached match that starts before `pos`. A match starting at or
    /// after `pos` is exactly what a fresh search from `pos` would return.
    fn invalidate_before(&mut self, pos: usize) {
        if matches!(self, Self::Found(found) if found.start < pos) {
            *self = Self::Unknown;
        }
    }
}

/// Iterator over the [`Segment`]s of a text, in order.
pub struct Segments<'s, 't> {
    scanner: &'s Scanner,
    text: &'t str,
    pos: usize,
    ignore: Lookahead,
    candidate: Lookahead,
}

impl Segments<'_, '_> {
    fn next_ignore(&mut self) -> Option<&Found> {
        self.ignore.invalidate_before(self.pos);
        if matches!(self.ignore, Lookahead::Unknown) {
            self.ignore = match self.scanner.ignore.find_at(self.text, self.pos) {
                Some(m) => Lookahead::Found(Found {
                    start: m.start(),
                    span: m.range(),
                }),
                None => Lookahead::Exhausted,
            };
        }
        match &self.ignore {
            Lookahead::Found(found) => Some(found),
            _ => None,
        }
    }

    fn next_candidate(&mut self) -> Option<&Found> {
        self.candidate.invalidate_before(self.pos);
        if matches!(self.candidate, Lookahead::Unknown) {
            self.candidate = self
                .scanner
                .candidate
                .captures_at(self.text, self.pos)
                .and_then(|caps| {
                    let start = caps.get(0)?.start();
                    let payload = caps.name(PAYLOAD_GROUP)?;
                    Some(Found {
                        start,
                        span: payload.range(),
                    })
                })
                .map_or(Lookahead::Exhausted, Lookahead::Found);
        }
        match &self.candidate {
            Lookahead::Found(found) => Some(found),
            _ => None,
        }
    }
}

impl Iterator for Segments<'_, '_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        while self.pos < self.text.len() {
            let ignore = self.next_ignore().map(|f| f.span.clone());
            let candidate = self.next_candidate().map(|f| f.span.clone());
            let segment = match (ignore, candidate) {
                (None, None) => return None,
                (Some(ignore), Some(candidate)) if ignore.start <= candidate.start => {
                    Segment::Ignored(ignore)
                }
                (Some(ignore), None) => Segment::Ignored(ignore),
                (_, Some(candidate)) if candidate.is_empty() => {
                    // an empty payload would never advance the scan
                    self.pos = self.text[candidate.end..]
                        .chars()
                        .next()
                        .map_or(self.text.len(), |c| candidate.end + c.len_utf8());
                    continue;
                }
                (_, Some(candidate)) => Segment::Candidate(candidate),
            };
            self.pos = match &segment {
                Segment::Ignored(span) | Segment::Candidate(span) => span.end,
            };
            return Some(segment);
        }
        None
    }
}
