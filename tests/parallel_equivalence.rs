#![cfg(feature = "parallel")]

use rolling_dp::{
    batch::{can_segment_many, count_paths_many},
    count_paths, Dictionary,
};
use proptest::prelude::*;
use rayon::prelude::*;

#[test]
fn concurrent_calls_share_a_dictionary() {
    let dict = Dictionary::new(["cats", "dog", "sand", "and", "cat", "s"]);
    let texts: Vec<String> = (0..512)
        .map(|i| match i % 3 {
            0 => "catsanddog".repeat(i % 7 + 1),
            1 => format!("{}og", "catsand".repeat(i % 5 + 1)),
            _ => "cats".repeat(i % 11),
        })
        .collect();
    let serial: Vec<bool> = texts.iter().map(|t| dict.can_segment(t)).collect();
    let parallel: Vec<bool> = texts.par_iter().map(|t| dict.can_segment(t)).collect();
    assert_eq!(serial, parallel);
    assert_eq!(can_segment_many(&texts, &dict), serial);
}

#[test]
fn batch_grid_matches_serial() {
    let dims: Vec<(usize, usize)> = (0..70).flat_map(|m| (0..70).map(move |n| (m, n))).collect();
    let serial: Vec<_> = dims.iter().map(|&(m, n)| count_paths(m, n)).collect();
    assert_eq!(count_paths_many(&dims), serial);
}

proptest! {
    #[test]
    fn batch_word_break_matches_serial(
        texts in proptest::collection::vec("[ab]{0,12}", 0..20),
        words in proptest::collection::vec("[ab]{1,3}", 0..5),
    ) {
        let dict = Dictionary::new(&words);
        let serial: Vec<bool> = texts.iter().map(|t| dict.can_segment(t)).collect();
        prop_assert_eq!(can_segment_many(&texts, &dict), serial);
    }
}
