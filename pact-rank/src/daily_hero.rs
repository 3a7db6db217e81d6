//! Daily hero selection.
//!
//! Runs at most once per group per calendar day, guarded by the group's
//! `last_hero_selection_date`. A member qualifies when their honesty
//! score clears the bar, they had at least one public active resolution
//! created on/before yesterday, and every such resolution was
//! `Completed` yesterday — all or nothing. Winner: highest score, then
//! highest streak, then first encountered.

use chrono::{DateTime, NaiveDate, Utc};
use tracing::info;

use pact_core::calendar;
use pact_core::config::defaults::DEFAULT_HONESTY_SCORE;
use pact_core::config::HeroConfig;
use pact_core::model::{FeedEvent, FeedEventKind, Group, Resolution, ResolutionStatus, User};
use pact_core::traits::{FeedSink, TrustSource};

/// Refresh the group's daily hero for `today`.
///
/// No-op (returning the cached hero) when today's selection already ran.
/// Clears the hero when nobody qualifies. Emits a `Hero` feed event for
/// a winner — the one externally visible side effect in the engine.
///
/// `today`/`now`: current day and timestamp (injectable for testing).
#[allow(clippy::too_many_arguments)]
pub fn refresh_daily_hero(
    group: &mut Group,
    members: &[User],
    resolutions: &[Resolution],
    config: &HeroConfig,
    today: NaiveDate,
    now: DateTime<Utc>,
    trust: &dyn TrustSource,
    feed: &mut dyn FeedSink,
) -> Option<String> {
    if group.last_hero_selection_date == Some(today) {
        return group.daily_hero_id.clone();
    }

    let yesterday = calendar::yesterday(today);
    let mut best: Option<&User> = None;

    for member in members.iter().filter(|m| group.member_ids.contains(&m.id)) {
        let honesty = trust
            .honesty_score(&member.id)
            .unwrap_or(DEFAULT_HONESTY_SCORE);
        if honesty < config.min_honesty_score {
            continue;
        }

        let relevant: Vec<&Resolution> = resolutions
            .iter()
            .filter(|r| {
                r.owner_id == member.id && r.scoreable() && r.created_on() <= yesterday
            })
            .collect();
        if relevant.is_empty() {
            continue;
        }

        let all_completed = relevant
            .iter()
            .all(|r| r.history.get(&yesterday) == Some(&ResolutionStatus::Completed));
        if !all_completed {
            continue;
        }

        best = match best {
            None => Some(member),
            Some(current)
                if member.score > current.score
                    || (member.score == current.score && member.streak > current.streak) =>
            {
                Some(member)
            }
            Some(current) => Some(current),
        };
    }

    let winner = best.map(|u| u.id.clone());
    group.daily_hero_id = winner.clone();
    group.last_hero_selection_date = Some(today);

    if let Some(ref hero_id) = winner {
        info!(group_id = %group.id, hero_id = %hero_id, %today, "daily hero selected");
        feed.emit(FeedEvent::new(
            FeedEventKind::Hero,
            hero_id.clone(),
            format!("{hero_id} is today's daily hero"),
            now,
        ));
    }
    winner
}

#[cfg(test)]
mod tests {
    use pact_core::traits::{MemoryFeedSink, StaticTrust};
    use test_fixtures::{day, group, instant, resolution, user};

    use super::*;

    fn today() -> NaiveDate {
        day(2024, 3, 15)
    }

    fn completed_yesterday(id: &str, owner: &str) -> Resolution {
        let mut res = resolution(id, owner, 3, instant(2024, 3, 1));
        res.history
            .insert(day(2024, 3, 14), ResolutionStatus::Completed);
        res
    }

    fn scored_user(id: &str, score: f64, streak: u32) -> User {
        let mut u = user(id);
        u.score = score;
        u.streak = streak;
        u
    }

    #[test]
    fn picks_highest_score_among_full_completers() {
        let mut g = group("g1", &["a", "b"]);
        let members = [scored_user("a", 10.0, 0), scored_user("b", 30.0, 0)];
        let resolutions = [completed_yesterday("r1", "a"), completed_yesterday("r2", "b")];
        let mut feed = MemoryFeedSink::new();

        let hero = refresh_daily_hero(
            &mut g,
            &members,
            &resolutions,
            &HeroConfig::default(),
            today(),
            instant(2024, 3, 15),
            &StaticTrust::new(),
            &mut feed,
        );
        assert_eq!(hero.as_deref(), Some("b"));
        assert_eq!(g.daily_hero_id.as_deref(), Some("b"));
        assert_eq!(feed.events().len(), 1);
        assert_eq!(feed.events()[0].kind, FeedEventKind::Hero);
    }

    #[test]
    fn score_tie_breaks_by_streak() {
        let mut g = group("g1", &["a", "b"]);
        let members = [scored_user("a", 10.0, 2), scored_user("b", 10.0, 6)];
        let resolutions = [completed_yesterday("r1", "a"), completed_yesterday("r2", "b")];
        let mut feed = MemoryFeedSink::new();

        let hero = refresh_daily_hero(
            &mut g,
            &members,
            &resolutions,
            &HeroConfig::default(),
            today(),
            instant(2024, 3, 15),
            &StaticTrust::new(),
            &mut feed,
        );
        assert_eq!(hero.as_deref(), Some("b"));
    }

    #[test]
    fn one_incomplete_resolution_disqualifies_the_member() {
        let mut g = group("g1", &["a"]);
        let members = [scored_user("a", 50.0, 3)];
        let done = completed_yesterday("r1", "a");
        let not_done = resolution("r2", "a", 2, instant(2024, 3, 1));
        let mut feed = MemoryFeedSink::new();

        let hero = refresh_daily_hero(
            &mut g,
            &members,
            &[done, not_done],
            &HeroConfig::default(),
            today(),
            instant(2024, 3, 15),
            &StaticTrust::new(),
            &mut feed,
        );
        assert_eq!(hero, None);
        assert_eq!(g.daily_hero_id, None);
        assert!(feed.events().is_empty());
    }

    #[test]
    fn low_honesty_members_are_excluded() {
        let mut g = group("g1", &["a"]);
        let members = [scored_user("a", 50.0, 3)];
        let resolutions = [completed_yesterday("r1", "a")];
        let trust = StaticTrust::new().with_score("a", 60);
        let mut feed = MemoryFeedSink::new();

        let hero = refresh_daily_hero(
            &mut g,
            &members,
            &resolutions,
            &HeroConfig::default(),
            today(),
            instant(2024, 3, 15),
            &trust,
            &mut feed,
        );
        assert_eq!(hero, None);
    }

    #[test]
    fn resolutions_created_today_do_not_count_against_members() {
        // A brand-new resolution has no yesterday to complete; the member
        // still qualifies on the strength of the older ones.
        let mut g = group("g1", &["a"]);
        let members = [scored_user("a", 10.0, 1)];
        let older = completed_yesterday("r1", "a");
        let brand_new = resolution("r2", "a", 2, instant(2024, 3, 15));
        let mut feed = MemoryFeedSink::new();

        let hero = refresh_daily_hero(
            &mut g,
            &members,
            &[older, brand_new],
            &HeroConfig::default(),
            today(),
            instant(2024, 3, 15),
            &StaticTrust::new(),
            &mut feed,
        );
        assert_eq!(hero.as_deref(), Some("a"));
    }

    #[test]
    fn selection_runs_at_most_once_per_day() {
        let mut g = group("g1", &["a"]);
        let members = [scored_user("a", 10.0, 1)];
        let resolutions = [completed_yesterday("r1", "a")];
        let mut feed = MemoryFeedSink::new();

        for _ in 0..3 {
            refresh_daily_hero(
                &mut g,
                &members,
                &resolutions,
                &HeroConfig::default(),
                today(),
                instant(2024, 3, 15),
                &StaticTrust::new(),
                &mut feed,
            );
        }
        assert_eq!(feed.events().len(), 1, "guard suppresses reruns");
    }

    #[test]
    fn stale_hero_is_cleared_when_nobody_qualifies() {
        let mut g = group("g1", &["a"]);
        g.daily_hero_id = Some("a".into());
        g.last_hero_selection_date = Some(day(2024, 3, 14));
        let members = [scored_user("a", 10.0, 1)];
        let mut feed = MemoryFeedSink::new();

        let hero = refresh_daily_hero(
            &mut g,
            &members,
            &[],
            &HeroConfig::default(),
            today(),
            instant(2024, 3, 15),
            &StaticTrust::new(),
            &mut feed,
        );
        assert_eq!(hero, None);
        assert_eq!(g.daily_hero_id, None);
        assert_eq!(g.last_hero_selection_date, Some(today()));
    }
}
