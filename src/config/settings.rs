#[derive(Debug, Clone)]
pub struct ScoringSettings {
    pub half_life_days: f64,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            // Score contribution halves every 45 days
            half_life_days: 45.0,
        }
    }
}

impl ScoringSettings {
    /// Same settings with another half-life, ignoring non-positive values
    pub fn with_half_life(&self, half_life_days: Option<f64>) -> Self {
        match half_life_days {
            Some(days) if days > 0.0 && days.is_finite() => Self { half_life_days: days },
            _ => self.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StoreSettings {
    pub database_path: String,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            database_path: "penalty_tracker.db".to_string(),
        }
    }
}

impl StoreSettings {
    pub fn from_env() -> Self {
        std::env::var("DATABASE_PATH")
            .map(|database_path| Self { database_path })
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub default_port: u16,
    pub decay_chart_days: u32,
    pub decay_chart_step: u32,
    pub max_decay_chart_days: u32,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            default_port: 3000,
            decay_chart_days: 180,
            decay_chart_step: 15,
            max_decay_chart_days: 3650,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub scoring: ScoringSettings,
    pub store: StoreSettings,
    pub server: ServerSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            scoring: ScoringSettings::default(),
            store: StoreSettings::from_env(),
            server: ServerSettings::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_half_life_ignores_invalid_values() {
        let base = ScoringSettings::default();

        assert_eq!(base.with_half_life(Some(30.0)).half_life_days, 30.0);
        assert_eq!(base.with_half_life(Some(0.0)).half_life_days, 45.0);
        assert_eq!(base.with_half_life(Some(-5.0)).half_life_days, 45.0);
        assert_eq!(base.with_half_life(None).half_life_days, 45.0);
    }
}
