/*
 * emojikit - integration tests
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

use std::borrow::Cow;

use emojikit::{asciify, demojify, emojify, imagify, spanify, MarkupSettings};

fn img(raw: &str, shortcode: &str, codepoint: &str) -> String {
    format!(
        r#"<img class="emoji" alt="{}" title="{}" src="/emoji/{}.png" />"#,
        raw, shortcode, codepoint
    )
}

fn span(raw: &str, shortcode: &str) -> String {
    format!(r#"<span class="emoji" title="{}">{}</span>"#, shortcode, raw)
}

#[test]
fn test_asciify() {
    assert_eq!(asciify(":poop: :slight_smile: 😉 😄"), ":poop: :) ;) :D");
    assert_eq!(asciify("😉 :wink:"), ";) ;)");
    assert_eq!(asciify("poop:)"), "poop:)");
    let text = r#"Emoji in <img alt="😄" src="/img.png" /> should not be replaced"#;
    assert_eq!(asciify(text), text);
}

#[test]
fn test_demojify() {
    let cases = [
        ("Hello world! 😄 :smile:", "Hello world! :smile: :smile:"),
        ("🐌", ":snail:"),
        (
            "👽 is not :alien: and 저 is not 👽 or 👽",
            ":alien: is not :alien: and 저 is not :alien: or :alien:",
        ),
        ("💃\n💃", ":dancer:\n:dancer:"),
        ("9⃣", ":nine:"),
        (
            "The 🦄 is the official mascot.",
            "The :unicorn: is the official mascot.",
        ),
        (
            "The 🦄, is the official mascot.",
            "The :unicorn:, is the official mascot.",
        ),
        ("🐌 mail.", ":snail: mail."),
        ("🐌's are cool!", ":snail:'s are cool!"),
        ("The official mascot is 🦄.", "The official mascot is :unicorn:."),
        ("The official mascot is 🦄!", "The official mascot is :unicorn:!"),
        ("The official mascot: 🦄", "The official mascot: :unicorn:"),
        ("#️⃣", ":hash:"),
        ("❤️ and ♥️", ":heart: and :hearts:"),
        ("❤ and ♥", ":heart: and :hearts:"),
        ("🇺🇸", ":flag_us:"),
    ];
    for (text, expected) in cases {
        assert_eq!(demojify(text), expected, "{:?}", text);
    }
    let text = r#"The <img class="emoji" alt="🦄" src="/emoji/1f984.png" /> is the official mascot"#;
    assert_eq!(demojify(text), text);
    let text = r#"<span class="emoji">🦄</span> 🦄"#;
    assert_eq!(
        demojify(text),
        r#"<span class="emoji">🦄</span> :unicorn:"#
    );
}

#[test]
fn test_demojify_symbols_and_digits() {
    let text = r##" !"#$%&'()*+,-./0123456789:;<=>?@"##;
    assert!(matches!(demojify(text), Cow::Borrowed(_)));
}

#[test]
fn test_emojify() {
    let cases = [
        ("Hello world! 😄 :smile:", "Hello world! 😄 😄"),
        (":snail:", "🐌"),
        (
            "The :unicorn:, is the official mascot.",
            "The 🦄, is the official mascot.",
        ),
        (":snail: mail.", "🐌 mail."),
        (":snail:'s are cool!", "🐌's are cool!"),
        (":invalid:snail:", ":invalid🐌"),
        (
            ":alien: is 👽 and 저 is not :alien: or :alien: also :randomy: is not emoji",
            "👽 is 👽 and 저 is not 👽 or 👽 also :randomy: is not emoji",
        ),
        (":dancer:\n:dancer:", "💃\n💃"),
        (":blush::ok_hand::two_hearts:", "😊👌💕"),
        (
            "The official mascot is :unicorn:.",
            "The official mascot is 🦄.",
        ),
        (
            "The official mascot is :unicorn:!",
            "The official mascot is 🦄!",
        ),
        ("The official mascot: :unicorn:", "The official mascot: 🦄"),
        (":nine:", "9️⃣"),
        (":poo:", "💩"),
        (":+1: :thumbup_tone5:", "👍 👍🏿"),
        (":man_shrugging:", "🤷‍♂️"),
        ("it's raining :cat:s and :dog:s!", "it's raining 🐱s and 🐶s!"),
    ];
    for (text, expected) in cases {
        assert_eq!(emojify(text, false), expected, "{:?}", text);
    }
    let text =
        r#"The <img class="emoji" alt=":unicorn:" src="/emoji/1f984.png" /> is the official mascot."#;
    assert_eq!(emojify(text, false), text);
    // ascii emoticons are opt-in
    assert_eq!(emojify(":D", false), ":D");
}

#[test]
fn test_emojify_case_insensitive_shortcodes() {
    // matched regardless of case, but only resolved when exact
    assert_eq!(emojify(":SNAIL: :snail:", false), ":SNAIL: 🐌");
}

#[test]
fn test_emojify_ascii() {
    let cases = [
        (":D", "😄"),
        (":d", ":d"),
        (";) :P :* :)", "😉 😛 😘 🙂"),
        (r":\ is our confused smiley.", "😕 is our confused smiley."),
        (
            "Our smiley to represent joy is :')",
            "Our smiley to represent joy is 😂",
        ),
        (
            "The reverse to the joy smiley is the cry smiley :'(.",
            "The reverse to the joy smiley is the cry smiley 😢.",
        ),
        (
            r#"This is the "flushed" smiley: :$."#,
            r#"This is the "flushed" smiley: 😳."#,
        ),
        (
            "Please log-in with user:pass as your credentials :P.",
            "Please log-in with user:pass as your credentials 😛.",
        ),
        ("Check out http://www.example.com", "Check out http://www.example.com"),
        ("😄 :smile: :D", "😄 😄 😄"),
        ("I <3 you, :)", "I ❤️ you, 🙂"),
        (":):)", ":):)"),
        ("x:) :)x", "x:) :)x"),
    ];
    for (text, expected) in cases {
        assert_eq!(emojify(text, true), expected, "{:?}", text);
    }
    let text = r#"Smile <img class="emoji" alt=":)" src="/emoji/1f604.png" /> because it's going to be a good day."#;
    assert_eq!(emojify(text, true), text);
}

#[test]
fn test_emojify_idempotent() {
    for text in [
        "Hello :smile: world :D <3",
        ":invalid:snail:",
        ":blush::ok_hand::two_hearts:",
        "user:pass :P.",
    ] {
        let once = emojify(text, true).into_owned();
        assert_eq!(emojify(&once, true), once, "{:?}", text);
        assert!(matches!(emojify(&once, true), Cow::Borrowed(_)));
    }
}

#[test]
fn test_imagify() {
    let settings = MarkupSettings::default();
    let smile = img("😄", ":smile:", "1f604");
    assert_eq!(
        imagify("Hello 😄 :smile: world :D", true, &settings),
        format!("Hello {smile} {smile} world {smile}")
    );
    assert_eq!(
        imagify(":snail:'s are cool!", false, &settings),
        format!("{}'s are cool!", img("🐌", ":snail:", "1f40c"))
    );
    assert_eq!(
        imagify(":invalid:snail:", false, &settings),
        format!(":invalid{}", img("🐌", ":snail:", "1f40c"))
    );
    let alien = img("👽", ":alien:", "1f47d");
    assert_eq!(
        imagify(
            ":alien: is 👽 and 저 is not :alien: or :alien: also :randomy: is not emoji",
            false,
            &settings
        ),
        format!(
            "{alien} is {alien} and 저 is not {alien} or {alien} also :randomy: is not emoji"
        )
    );
    let dancer = img("💃", ":dancer:", "1f483");
    assert_eq!(
        imagify(":dancer:\n:dancer:", false, &settings),
        format!("{dancer}\n{dancer}")
    );
    assert_eq!(
        imagify(":blush::ok_hand::two_hearts:", false, &settings),
        format!(
            "{}{}{}",
            img("😊", ":blush:", "1f60a"),
            img("👌", ":ok_hand:", "1f44c"),
            img("💕", ":two_hearts:", "1f495")
        )
    );
    assert_eq!(
        imagify("it's raining :cat:s and 🐶s!", false, &settings),
        format!(
            "it's raining {}s and {}s!",
            img("🐱", ":cat:", "1f431"),
            img("🐶", ":dog:", "1f436")
        )
    );
    // already rendered emoji are left alone
    let rendered = imagify(":snail:", false, &settings).into_owned();
    assert_eq!(imagify(&rendered, false, &settings), rendered);
}

#[test]
fn test_imagify_settings() {
    let settings = MarkupSettings::default()
        .with_css("e")
        .with_path("https://cdn.example.com/")
        .with_ext(".svg");
    assert_eq!(
        imagify("a :cat:", false, &settings),
        r#"a <img class="e" alt="🐱" title=":cat:" src="https://cdn.example.com/1f431.svg" />"#
    );
}

#[test]
fn test_spanify() {
    let settings = MarkupSettings::default();
    let smile = span("😄", ":smile:");
    assert_eq!(
        spanify("Hello 😄 :smile: world :D", true, &settings),
        format!("Hello {smile} {smile} world {smile}")
    );
    assert_eq!(
        spanify(":snail:'s are cool!", false, &settings),
        format!("{}'s are cool!", span("🐌", ":snail:"))
    );
    assert_eq!(
        spanify(":invalid:snail:", false, &settings),
        format!(":invalid{}", span("🐌", ":snail:"))
    );
    let dancer = span("💃", ":dancer:");
    assert_eq!(
        spanify(":dancer:\n:dancer:", false, &settings),
        format!("{dancer}\n{dancer}")
    );
    assert_eq!(
        spanify(":blush::ok_hand::two_hearts:", false, &settings),
        format!(
            "{}{}{}",
            span("😊", ":blush:"),
            span("👌", ":ok_hand:"),
            span("💕", ":two_hearts:")
        )
    );
    assert_eq!(
        spanify("it's raining :cat:s and 🐶s!", false, &settings),
        format!(
            "it's raining {}s and {}s!",
            span("🐱", ":cat:"),
            span("🐶", ":dog:")
        )
    );
    // spans are ignored as a whole, so spanify is idempotent
    let rendered = spanify(":snail: :cat:", false, &settings).into_owned();
    assert_eq!(spanify(&rendered, false, &settings), rendered);
    assert_eq!(
        spanify(":snail:", false, &settings.with_css("big")),
        span("🐌", ":snail:").replace("\"emoji\"", "\"big\"")
    );
}

#[test]
fn test_transform_unchanged_is_borrowed() {
    let settings = MarkupSettings::default();
    let text = "nothing to see here";
    assert!(matches!(asciify(text), Cow::Borrowed(_)));
    assert!(matches!(emojify(text, true), Cow::Borrowed(_)));
    assert!(matches!(demojify(text), Cow::Borrowed(_)));
    assert!(matches!(imagify(text, true, &settings), Cow::Borrowed(_)));
    assert!(matches!(spanify(text, true, &settings), Cow::Borrowed(_)));
    assert!(matches!(emojify("", true), Cow::Borrowed("")));
}
