//! LineupSelector: 리스크 등급별 쿼터로 11명 선발
//!
//! Pipeline: season filter → must-include pass → per-tier ranking → quota fill → truncate

use std::borrow::Borrow;
use std::cmp::Ordering;

use tracing::debug;

use crate::models::{
    Lineup, Player, QuotaTable, RankingPreference, RiskTier, SelectionRequest, LINEUP_SIZE,
};

/// Season whose records are preferred when present in the pool
pub const CURRENT_SEASON: &str = "2024";

/// Ranking score of a player under the requested preference
pub fn ranking_score(player: &Player, ranking: RankingPreference) -> f64 {
    match ranking {
        RankingPreference::Consistency => player.consistency,
        RankingPreference::Upside => player.upside,
        RankingPreference::TotalPoints => player.total_points,
    }
}

/// Descending score, then ascending full name
fn compare_for_ranking(a: &Player, b: &Player, ranking: RankingPreference) -> Ordering {
    ranking_score(b, ranking)
        .total_cmp(&ranking_score(a, ranking))
        .then_with(|| a.full_name.cmp(&b.full_name))
}

/// Current-season records, or the whole pool when there are none
fn season_pool<'a, P: Borrow<Player>>(pool: &'a [P]) -> Vec<&'a Player> {
    let all = pool.iter().map(<P as Borrow<Player>>::borrow);
    let current: Vec<&Player> = all.clone().filter(|p| p.season == CURRENT_SEASON).collect();

    if current.is_empty() {
        debug!("no {} records in pool of {}, using all seasons", CURRENT_SEASON, pool.len());
        all.collect()
    } else {
        current
    }
}

/// Pick the best XI from `pool` for `request`
///
/// Must-include players come first, in pool order, and each one releases a
/// slot of its tier's quota. The rest of the lineup is filled tier by tier
/// (Low, Medium, High) with the highest-ranked remaining players. A pool too
/// small for the quotas gives a shorter lineup; the result never exceeds
/// [`LINEUP_SIZE`].
pub fn select_lineup<P: Borrow<Player>>(pool: &[P], request: &SelectionRequest) -> Lineup {
    let mut quota = QuotaTable::for_preference(request.risk);
    let candidates = season_pool(pool);

    let (forced, remaining): (Vec<&Player>, Vec<&Player>) =
        candidates.into_iter().partition(|p| request.must_include.contains(&p.full_name));

    for player in &forced {
        quota.decrement(player.risk);
    }

    debug!(
        forced = forced.len(),
        remaining = remaining.len(),
        ?quota,
        "must-include pass complete"
    );

    let mut selected: Vec<&Player> = forced;

    for &tier in RiskTier::all() {
        let mut bucket: Vec<&Player> = remaining.iter().copied().filter(|p| p.risk == tier).collect();
        bucket.sort_by(|a, b| compare_for_ranking(a, b, request.ranking));

        let take = quota.get(tier);
        if bucket.len() < take {
            debug!(%tier, wanted = take, available = bucket.len(), "tier short of quota");
        }
        selected.extend(bucket.into_iter().take(take));
    }

    selected.truncate(LINEUP_SIZE);

    Lineup::new(selected.into_iter().cloned().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RiskPreference;

    fn player(name: &str, risk: RiskTier, points: f64) -> Player {
        Player::new(name, "Team", "BAT", risk, CURRENT_SEASON).with_scores(0.0, 0.0, points)
    }

    /// 6 Low, 3 Medium, 2 High players, points shuffled within each tier
    fn exact_pool() -> Vec<Player> {
        vec![
            player("L1", RiskTier::Low, 30.0),
            player("L2", RiskTier::Low, 90.0),
            player("M1", RiskTier::Medium, 10.0),
            player("L3", RiskTier::Low, 60.0),
            player("H1", RiskTier::High, 5.0),
            player("L4", RiskTier::Low, 10.0),
            player("M2", RiskTier::Medium, 40.0),
            player("L5", RiskTier::Low, 75.0),
            player("H2", RiskTier::High, 50.0),
            player("L6", RiskTier::Low, 20.0),
            player("M3", RiskTier::Medium, 25.0),
        ]
    }

    /// 10 players per tier with distinct scores
    fn deep_pool() -> Vec<Player> {
        let mut pool = Vec::new();
        for (t, &tier) in RiskTier::all().iter().enumerate() {
            for i in 0..10 {
                let score = (i * 7 % 10) as f64;
                pool.push(
                    Player::new(format!("{tier}-{i}"), "Team", "AR", tier, CURRENT_SEASON)
                        .with_scores(score, 10.0 - score, (t * 10 + i) as f64),
                );
            }
        }
        pool
    }

    #[test]
    fn test_exact_pool_sorted_by_points() {
        let lineup = select_lineup(&exact_pool(), &SelectionRequest::default());

        assert_eq!(
            lineup.names(),
            vec!["L2", "L5", "L3", "L1", "L6", "L4", "M2", "M3", "M1", "H2", "H1"]
        );
    }

    #[test]
    fn test_tier_counts_follow_quota() {
        let pool = deep_pool();
        for risk in [RiskPreference::Low, RiskPreference::Medium, RiskPreference::High] {
            let request = SelectionRequest::new(risk, RankingPreference::TotalPoints);
            let lineup = select_lineup(&pool, &request);

            assert_eq!(lineup.len(), LINEUP_SIZE);
            assert_eq!(lineup.tier_counts(), QuotaTable::for_preference(risk));
        }
    }

    #[test]
    fn test_ranking_preferences() {
        let pool = deep_pool();

        let by_consistency = select_lineup(
            &pool,
            &SelectionRequest::new(RiskPreference::Low, RankingPreference::Consistency),
        );
        let first = &by_consistency.players[0];
        assert_eq!(first.risk, RiskTier::Low);
        assert_eq!(first.consistency, 9.0);

        let by_upside = select_lineup(
            &pool,
            &SelectionRequest::new(RiskPreference::Low, RankingPreference::Upside),
        );
        assert_eq!(by_upside.players[0].upside, 10.0);

        let by_points = select_lineup(&pool, &SelectionRequest::default());
        assert_eq!(by_points.players[0].full_name, "Low-9");
    }

    #[test]
    fn test_must_include_present() {
        let pool = deep_pool();
        let request = SelectionRequest::default().must_include(["Low-0", "High-3"]);
        let lineup = select_lineup(&pool, &request);

        assert_eq!(lineup.len(), LINEUP_SIZE);
        assert_eq!(&lineup.names()[..2], &["Low-0", "High-3"]);
        assert_eq!(lineup.tier_counts(), QuotaTable::new(6, 3, 2));
    }

    #[test]
    fn test_must_include_high_releases_high_slot() {
        let pool = deep_pool();
        let request = SelectionRequest::default().must_include(["High-0"]);
        let lineup = select_lineup(&pool, &request);

        let high: Vec<_> =
            lineup.iter().filter(|p| p.risk == RiskTier::High).map(|p| p.full_name.as_str()).collect();
        // forced High-0 plus one filled High slot
        assert_eq!(high, vec!["High-0", "High-9"]);
    }

    #[test]
    fn test_must_include_absent_is_ignored() {
        let pool = deep_pool();
        let plain = select_lineup(&pool, &SelectionRequest::default());
        let with_ghost =
            select_lineup(&pool, &SelectionRequest::default().must_include(["Nobody"]));

        assert_eq!(plain, with_ghost);
    }

    #[test]
    fn test_must_include_over_quota_keeps_quota_at_zero() {
        let pool = deep_pool();
        let names: Vec<String> = (0..4).map(|i| format!("High-{i}")).collect();
        let lineup = select_lineup(&pool, &SelectionRequest::default().must_include(names));

        assert_eq!(lineup.len(), LINEUP_SIZE);
        // 4 forced High, quota High floored at 0, Low 6 + Medium 3 = 13 → truncated
        assert_eq!(lineup.tier_counts(), QuotaTable::new(6, 1, 4));
    }

    #[test]
    fn test_truncates_when_forced_exceed_lineup() {
        let pool = deep_pool();
        let names: Vec<String> = (0..10)
            .map(|i| format!("Medium-{i}"))
            .chain((0..3).map(|i| format!("Low-{i}")))
            .collect();
        let lineup = select_lineup(&pool, &SelectionRequest::default().must_include(names));

        assert_eq!(lineup.len(), LINEUP_SIZE);
        assert!(lineup.iter().all(|p| p.risk != RiskTier::High));
    }

    #[test]
    fn test_small_pool_is_not_padded() {
        let pool: Vec<Player> = exact_pool().into_iter().take(5).collect();
        let lineup = select_lineup(&pool, &SelectionRequest::default());
        assert_eq!(lineup.len(), 5);
    }

    #[test]
    fn test_empty_pool() {
        let pool: Vec<Player> = Vec::new();
        assert!(select_lineup(&pool, &SelectionRequest::default()).is_empty());
    }

    #[test]
    fn test_prefers_current_season() {
        let mut pool = exact_pool();
        pool.push(
            Player::new("Veteran", "Team", "BAT", RiskTier::Low, "2023").with_scores(0.0, 0.0, 999.0),
        );
        let lineup = select_lineup(&pool, &SelectionRequest::default());

        assert!(!lineup.contains("Veteran"));

        // a must-include name only present in an old season is skipped too
        let lineup = select_lineup(&pool, &SelectionRequest::default().must_include(["Veteran"]));
        assert!(!lineup.contains("Veteran"));
    }

    #[test]
    fn test_falls_back_to_all_seasons() {
        let pool: Vec<Player> = exact_pool()
            .into_iter()
            .map(|mut p| {
                p.season = "2023".to_string();
                p
            })
            .collect();
        let lineup = select_lineup(&pool, &SelectionRequest::default());
        assert_eq!(lineup.len(), LINEUP_SIZE);
    }

    #[test]
    fn test_ties_broken_by_name() {
        let pool = vec![
            player("Zed", RiskTier::Low, 10.0),
            player("Amy", RiskTier::Low, 10.0),
            player("Max", RiskTier::Low, 10.0),
        ];
        let lineup = select_lineup(&pool, &SelectionRequest::default());
        assert_eq!(lineup.names(), vec!["Amy", "Max", "Zed"]);
    }

    #[test]
    fn test_accepts_borrowed_pool() {
        let pool = exact_pool();
        let refs: Vec<&Player> = pool.iter().collect();
        assert_eq!(
            select_lineup(&refs, &SelectionRequest::default()),
            select_lineup(&pool, &SelectionRequest::default())
        );
    }
}
