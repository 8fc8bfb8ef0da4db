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

use std::sync::{Arc, Barrier};

use emojikit::Emojis;

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_emojis_send_sync() {
    assert_send_sync::<Emojis>();
    assert_send_sync::<&'static Emojis>();
}

#[test]
fn test_concurrent_first_access() {
    const THREADS: usize = 8;
    let barrier = Arc::new(Barrier::new(THREADS));
    let handles = (0..THREADS)
        .map(|_| {
            let barrier = Arc::clone(&barrier);
            std::thread::spawn(move || {
                barrier.wait();
                (
                    emojikit::demojify("🐌").into_owned(),
                    emojikit::emojis() as *const Emojis as usize,
                )
            })
        })
        .collect::<Vec<_>>();
    let results = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .collect::<Vec<_>>();
    for (text, _) in &results {
        assert_eq!(text, ":snail:");
    }
    // every thread sees the same instance
    assert!(results.windows(2).all(|w| w[0].1 == w[1].1));
}

#[test]
fn test_shared_instance_across_threads() {
    let emojis = Arc::new(Emojis::bundled().unwrap());
    let handles = ["😄 :wink:", ":snail: :)", "plain"]
        .into_iter()
        .map(|text| {
            let emojis = Arc::clone(&emojis);
            std::thread::spawn(move || emojis.emojify(text, true).into_owned())
        })
        .collect::<Vec<_>>();
    let results = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .collect::<Vec<_>>();
    assert_eq!(results, vec!["😄 😉", "🐌 🙂", "plain"]);
}
