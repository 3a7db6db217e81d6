use proptest::prelude::*;

use pact_rank::{rank_users, Period};
use test_fixtures::user;

proptest! {
    #[test]
    fn ranks_form_a_contiguous_sequence_ordered_by_score_then_streak(
        inputs in proptest::collection::vec((0u32..500, 0u32..60), 1..20),
    ) {
        let users: Vec<_> = inputs
            .iter()
            .enumerate()
            .map(|(i, (score, streak))| {
                let mut u = user(&format!("u{i}"));
                u.score = f64::from(*score);
                u.streak = *streak;
                u
            })
            .collect();
        let count = users.len();

        let ranked = rank_users(users, Period::AllTime);

        // Dense contiguous 1..N, no duplicates.
        let ranks: Vec<u32> = ranked.iter().map(|u| u.rank).collect();
        prop_assert_eq!(&ranks, &(1..=count as u32).collect::<Vec<_>>());

        // Strict total order by (score desc, streak desc).
        for pair in ranked.windows(2) {
            let (higher, lower) = (&pair[0], &pair[1]);
            prop_assert!(
                higher.score > lower.score
                    || (higher.score == lower.score && higher.streak >= lower.streak)
            );
        }
    }
}
