use crate::fixture::MatchTeams;
use crate::models::Player;

/// Players currently on either team, in pool order
pub fn players_for_teams<'a>(pool: &'a [Player], team_a: &str, team_b: &str) -> Vec<&'a Player> {
    pool.iter().filter(|p| p.team == team_a || p.team == team_b).collect()
}

/// [`players_for_teams`] for a parsed fixture
pub fn players_for_match<'a>(pool: &'a [Player], teams: &MatchTeams) -> Vec<&'a Player> {
    players_for_teams(pool, &teams.home, &teams.away)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RiskTier;

    fn pool() -> Vec<Player> {
        vec![
            Player::new("A", "Mumbai Indians", "BAT", RiskTier::Low, "2024"),
            Player::new("B", "Gujarat Titans", "BOWL", RiskTier::Low, "2024"),
            Player::new("C", "Chennai Super Kings", "AR", RiskTier::High, "2024"),
            Player::new("D", "Mumbai Indians", "WK", RiskTier::Medium, "2023"),
        ]
    }

    #[test]
    fn test_filter_keeps_pool_order() {
        let pool = pool();
        let players = players_for_teams(&pool, "Chennai Super Kings", "Mumbai Indians");
        let names: Vec<_> = players.iter().map(|p| p.full_name.as_str()).collect();
        assert_eq!(names, vec!["A", "C", "D"]);
    }

    #[test]
    fn test_filter_no_match() {
        let pool = pool();
        assert!(players_for_teams(&pool, "Delhi Capitals", "Punjab Kings").is_empty());
        assert!(players_for_teams(&[], "Mumbai Indians", "Gujarat Titans").is_empty());
    }

    #[test]
    fn test_filter_is_exact() {
        let pool = pool();
        assert!(players_for_teams(&pool, "mumbai indians", "Mumbai").is_empty());
    }

    #[test]
    fn test_filter_by_fixture() {
        let pool = pool();
        let teams = MatchTeams::new("Gujarat Titans", "Mumbai Indians");
        assert_eq!(players_for_match(&pool, &teams).len(), 3);
    }
}
