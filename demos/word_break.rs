//! Example: segmenting strings into dictionary words.
//!
//! Run with:
//! `cargo run --example word_break`

use rolling_dp::Dictionary;

fn main() {
    let cases: [(&str, &[&str]); 5] = [
        ("leetcode", &["leet", "code"]),
        ("applepenapple", &["apple", "pen"]),
        ("catsandog", &["cats", "dog", "sand", "and", "cat"]),
        ("", &["a"]),
        ("aaaaaaa", &["aaaa", "aaa"]),
    ];

    for (text, words) in cases {
        let dict = Dictionary::new(words.iter().copied());
        let found = dict.segment(text);
        println!(
            "Input: {text:?}, words: {words:?} -> {}",
            found.is_some()
        );
        if let Some(parts) = found {
            if !parts.is_empty() {
                println!("  split: {}", parts.join(" | "));
            }
        }
    }
}
