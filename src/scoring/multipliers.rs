use crate::config::settings::ScoringSettings;
use crate::domain::{AgeGroup, FormatType, Gender, MatchOutcome, MatchType, PlayerRef};

use super::types::AppliedMultiplier;

pub const TOURNAMENT: &str = "tournament";
pub const FEMALE_DEVELOPMENT: &str = "female_development";
pub const MIXED_TEAM_DEVELOPMENT: &str = "mixed_team_development";
pub const AGE_BRACKET: &str = "age_bracket";

pub fn tournament_multiplier(
    match_type: MatchType,
    settings: &ScoringSettings,
) -> AppliedMultiplier {
    let factor = match match_type {
        MatchType::Tournament => settings.tournament_multiplier,
        MatchType::Casual => 1.0,
    };
    AppliedMultiplier::new(TOURNAMENT, factor)
}

/// Development bonuses reward under-represented participation and only
/// apply below the elite threshold. A female player gets the female bonus;
/// otherwise a player on a mixed-gender doubles team gets the team bonus.
pub fn development_bonus(
    outcome: &MatchOutcome,
    player: &PlayerRef,
    settings: &ScoringSettings,
) -> AppliedMultiplier {
    if player.is_elite(settings.elite_threshold) {
        return AppliedMultiplier::new(FEMALE_DEVELOPMENT, 1.0);
    }

    if player.gender == Gender::Female {
        return AppliedMultiplier::new(FEMALE_DEVELOPMENT, settings.female_development_bonus);
    }

    if outcome.format_type == FormatType::Doubles && is_mixed_team(outcome, player) {
        return AppliedMultiplier::new(
            MIXED_TEAM_DEVELOPMENT,
            settings.mixed_team_development_bonus,
        );
    }

    AppliedMultiplier::new(MIXED_TEAM_DEVELOPMENT, 1.0)
}

fn is_mixed_team(outcome: &MatchOutcome, player: &PlayerRef) -> bool {
    let team = outcome.team_of(player.id);
    team.iter().any(|p| p.gender == Gender::Male) && team.iter().any(|p| p.gender == Gender::Female)
}

pub fn age_multiplier(age_group: AgeGroup, settings: &ScoringSettings) -> AppliedMultiplier {
    let table = &settings.age_multipliers;
    let factor = match age_group {
        AgeGroup::Open => table.open,
        AgeGroup::ThirtyFivePlus => table.thirty_five_plus,
        AgeGroup::FiftyPlus => table.fifty_plus,
        AgeGroup::SixtyPlus => table.sixty_plus,
        AgeGroup::SeventyPlus => table.seventy_plus,
    };
    AppliedMultiplier::new(AGE_BRACKET, factor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PlayerId;
    use chrono::Utc;

    fn settings() -> ScoringSettings {
        ScoringSettings::default()
    }

    fn player(id: PlayerId, points: u32, gender: Gender) -> PlayerRef {
        PlayerRef {
            id,
            name: format!("player-{}", id),
            current_ranking_points: points,
            age_group: AgeGroup::Open,
            gender,
        }
    }

    fn doubles(participants: Vec<PlayerRef>, winner_ids: Vec<PlayerId>) -> MatchOutcome {
        MatchOutcome {
            match_type: MatchType::Casual,
            format_type: FormatType::Doubles,
            participants,
            winner_ids,
            recorded_at: Utc::now(),
        }
    }

    fn singles(participants: Vec<PlayerRef>, winner_ids: Vec<PlayerId>) -> MatchOutcome {
        MatchOutcome {
            match_type: MatchType::Casual,
            format_type: FormatType::Singles,
            participants,
            winner_ids,
            recorded_at: Utc::now(),
        }
    }

    #[test]
    fn tournament_matches_double_casual_does_not() {
        let s = settings();
        assert_eq!(tournament_multiplier(MatchType::Tournament, &s).factor, 2.0);
        assert_eq!(tournament_multiplier(MatchType::Casual, &s).factor, 1.0);
    }

    #[test]
    fn female_development_bonus_below_threshold() {
        let s = settings();
        let p = player(1, 900, Gender::Female);
        let outcome = singles(vec![p.clone(), player(2, 900, Gender::Male)], vec![1]);
        let bonus = development_bonus(&outcome, &p, &s);
        assert_eq!(bonus.name, FEMALE_DEVELOPMENT);
        assert_eq!(bonus.factor, 1.15);
    }

    #[test]
    fn elite_players_get_no_development_bonus() {
        let s = settings();
        let p = player(1, 1000, Gender::Female); // boundary: exactly at threshold
        let outcome = singles(vec![p.clone(), player(2, 900, Gender::Male)], vec![1]);
        assert_eq!(development_bonus(&outcome, &p, &s).factor, 1.0);
    }

    #[test]
    fn mixed_team_bonus_applies_to_male_development_partner() {
        let s = settings();
        let male = player(1, 500, Gender::Male);
        let female = player(2, 600, Gender::Female);
        let outcome = doubles(
            vec![
                male.clone(),
                female.clone(),
                player(3, 500, Gender::Male),
                player(4, 500, Gender::Male),
            ],
            vec![1, 2],
        );

        let male_bonus = development_bonus(&outcome, &male, &s);
        assert_eq!(male_bonus.name, MIXED_TEAM_DEVELOPMENT);
        assert_eq!(male_bonus.factor, 1.075);

        // Female bonus takes precedence over the team bonus.
        let female_bonus = development_bonus(&outcome, &female, &s);
        assert_eq!(female_bonus.name, FEMALE_DEVELOPMENT);
        assert_eq!(female_bonus.factor, 1.15);
    }

    #[test]
    fn same_gender_team_gets_no_mixed_bonus() {
        let s = settings();
        let p = player(3, 500, Gender::Male);
        let outcome = doubles(
            vec![
                player(1, 500, Gender::Male),
                player(2, 600, Gender::Female),
                p.clone(),
                player(4, 500, Gender::Male),
            ],
            vec![1, 2],
        );
        assert_eq!(development_bonus(&outcome, &p, &s).factor, 1.0);
    }

    #[test]
    fn singles_never_has_a_mixed_team() {
        let s = settings();
        let p = player(1, 500, Gender::Male);
        let outcome = singles(vec![p.clone(), player(2, 500, Gender::Female)], vec![1]);
        assert_eq!(development_bonus(&outcome, &p, &s).factor, 1.0);
    }

    #[test]
    fn age_multiplier_follows_the_table() {
        let s = settings();
        assert_eq!(age_multiplier(AgeGroup::Open, &s).factor, 1.0);
        assert_eq!(age_multiplier(AgeGroup::ThirtyFivePlus, &s).factor, 1.2);
        assert_eq!(age_multiplier(AgeGroup::FiftyPlus, &s).factor, 1.3);
        assert_eq!(age_multiplier(AgeGroup::SixtyPlus, &s).factor, 1.5);
        assert_eq!(age_multiplier(AgeGroup::SeventyPlus, &s).factor, 1.6);
    }
}
