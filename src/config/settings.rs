use log::info;

/// Every constant of the System B scoring rules.
/// Passed explicitly (Dependency Injection) rather than read from globals.
#[derive(Debug, Clone)]
pub struct ScoringSettings {
    pub base_win_points: u32,
    pub base_loss_points: u32,
    pub tournament_multiplier: f64,
    pub elite_threshold: u32,
    pub female_development_bonus: f64,
    pub mixed_team_development_bonus: f64,
    pub age_multipliers: AgeMultipliers,
    pub pickle_conversion_rate: f64,
    pub winner_pickle_bonus: u32,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            base_win_points: 3,
            base_loss_points: 1,
            tournament_multiplier: 2.0,
            elite_threshold: 1000,
            female_development_bonus: 1.15,
            mixed_team_development_bonus: 1.075,
            age_multipliers: AgeMultipliers::default(),
            pickle_conversion_rate: 1.5,
            winner_pickle_bonus: 2,
        }
    }
}

/// Monotonic step function over age brackets.
#[derive(Debug, Clone)]
pub struct AgeMultipliers {
    pub open: f64,
    pub thirty_five_plus: f64,
    pub fifty_plus: f64,
    pub sixty_plus: f64,
    pub seventy_plus: f64,
}

impl Default for AgeMultipliers {
    fn default() -> Self {
        Self {
            open: 1.0,
            thirty_five_plus: 1.2,
            fifty_plus: 1.3,
            sixty_plus: 1.5,
            seventy_plus: 1.6,
        }
    }
}

impl AgeMultipliers {
    pub fn as_table(&self) -> [(&'static str, f64); 5] {
        [
            ("open", self.open),
            ("35+", self.thirty_five_plus),
            ("50+", self.fifty_plus),
            ("60+", self.sixty_plus),
            ("70+", self.seventy_plus),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub scoring: ScoringSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        let mut config = Self {
            scoring: ScoringSettings::default(),
        };

        // The authoritative conversion rate lives with the operator, not here.
        if let Ok(raw) = std::env::var("PICKLE_CONVERSION_RATE") {
            match raw.parse::<f64>() {
                Ok(rate) if rate > 0.0 => {
                    info!("Using pickle conversion rate override: {}", rate);
                    config.scoring.pickle_conversion_rate = rate;
                }
                _ => info!("Ignoring unparseable PICKLE_CONVERSION_RATE: {}", raw),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_age_multipliers_are_monotonic() {
        let table = AgeMultipliers::default().as_table();
        for pair in table.windows(2) {
            assert!(pair[0].1 <= pair[1].1);
        }
    }

    #[test]
    fn default_multipliers_never_reduce_points() {
        let settings = ScoringSettings::default();
        assert!(settings.tournament_multiplier >= 1.0);
        assert!(settings.female_development_bonus >= 1.0);
        assert!(settings.mixed_team_development_bonus >= 1.0);
        for (_, factor) in settings.age_multipliers.as_table() {
            assert!(factor >= 1.0);
        }
    }
}
