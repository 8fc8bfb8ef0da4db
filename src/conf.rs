/*
 * emojikit - configuration
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

//! Configuration for rendering emoji as HTML markup.

use std::borrow::Cow;

pub const DEFAULT_CSS: &str = "emoji";
pub const DEFAULT_PATH: &str = "/emoji/";
pub const DEFAULT_EXT: &str = ".png";

fn default_css() -> Cow<'static, str> {
    Cow::Borrowed(DEFAULT_CSS)
}

fn default_path() -> Cow<'static, str> {
    Cow::Borrowed(DEFAULT_PATH)
}

fn default_ext() -> Cow<'static, str> {
    Cow::Borrowed(DEFAULT_EXT)
}

/// Settings for `<img>` and `<span>` emoji tags.
///
/// ```rust
/// let settings = emojikit::MarkupSettings::default().with_path("https://cdn.example.com/emoji/");
/// assert_eq!(settings.css, "emoji");
/// assert_eq!(settings.ext, ".png");
/// ```
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MarkupSettings {
    /// CSS class of generated tags.
    /// Default: "emoji"
    #[serde(default = "default_css", alias = "class")]
    pub css: Cow<'static, str>,
    /// Path (url) of the image folder, prepended to the image file name.
    /// Default: "/emoji/"
    #[serde(default = "default_path", alias = "image-path")]
    pub path: Cow<'static, str>,
    /// Image file extension, appended to the image file name.
    /// Default: ".png"
    #[serde(default = "default_ext", alias = "extension")]
    pub ext: Cow<'static, str>,
}

impl Default for MarkupSettings {
    fn default() -> Self {
        Self {
            css: default_css(),
            path: default_path(),
            ext: default_ext(),
        }
    }
}

impl MarkupSettings {
    pub fn with_css<S: Into<Cow<'static, str>>>(mut self, css: S) -> Self {
        self.css = css.into();
        self
    }

    pub fn with_path<S: Into<Cow<'static, str>>>(mut self, path: S) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_ext<S: Into<Cow<'static, str>>>(mut self, ext: S) -> Self {
        self.ext = ext.into();
        self
    }
}
