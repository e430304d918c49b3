use crate::{
    error::{Error, Result},
    geo::TravelEstimator,
    search::{HeuristicName, SearchLimits},
};
use serde::{Deserialize, Deserializer, Serialize};
use std::{path::Path, time::Duration};

/// Settings for planning tours. Every field has a default, so an empty file
/// is a valid config.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct PlannerConfig {
    /// Assumed speed between stops, used for leg time estimates.
    #[serde(default = "default_average_speed_kmh")]
    pub average_speed_kmh: f64,
    /// No leg is estimated to take less than this.
    #[serde(default = "default_min_leg_minutes")]
    pub min_leg_minutes: u32,
    /// Time spent at each stop.
    #[serde(default = "default_dwell_minutes")]
    pub dwell_minutes: u32,
    /// Speed used for the arrival windows of nearby listings.
    #[serde(default = "default_eta_speed_kmh")]
    pub eta_speed_kmh: f64,
    #[serde(default)]
    pub heuristic: HeuristicName,
    /// Wall clock limit for one search, written like `"500ms"` or `"2s"`.
    #[serde(
        default,
        deserialize_with = "deserialize_duration",
        serialize_with = "serialize_duration",
        skip_serializing_if = "Option::is_none"
    )]
    pub time_limit: Option<Duration>,
    #[serde(
        default = "default_max_expansions",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_expansions: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_limit_mb: Option<usize>,
}

fn default_average_speed_kmh() -> f64 {
    30.0
}

fn default_min_leg_minutes() -> u32 {
    5
}

fn default_dwell_minutes() -> u32 {
    30
}

fn default_eta_speed_kmh() -> f64 {
    20.0
}

fn default_max_expansions() -> Option<u64> {
    Some(2_000_000)
}

fn deserialize_duration<'de, D>(deserializer: D) -> std::result::Result<Option<Duration>, D::Error>
where
    D: Deserializer<'de>,
{
    let text: Option<String> = Option::deserialize(deserializer)?;
    text.map(|text| humantime::parse_duration(&text).map_err(serde::de::Error::custom))
        .transpose()
}

fn serialize_duration<S>(duration: &Option<Duration>, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match duration {
        Some(duration) => serializer.serialize_some(&humantime::format_duration(*duration).to_string()),
        None => serializer.serialize_none(),
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            average_speed_kmh: default_average_speed_kmh(),
            min_leg_minutes: default_min_leg_minutes(),
            dwell_minutes: default_dwell_minutes(),
            eta_speed_kmh: default_eta_speed_kmh(),
            heuristic: HeuristicName::default(),
            time_limit: None,
            max_expansions: default_max_expansions(),
            memory_limit_mb: None,
        }
    }
}

impl PlannerConfig {
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_text(&contents)
    }

    pub fn from_text(text: &str) -> Result<Self> {
        let config: PlannerConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.average_speed_kmh.is_finite() && self.average_speed_kmh > 0.0) {
            return Err(Error::config("average-speed-kmh must be positive"));
        }
        if !(self.eta_speed_kmh.is_finite() && self.eta_speed_kmh > 0.0) {
            return Err(Error::config("eta-speed-kmh must be positive"));
        }
        Ok(())
    }

    pub fn search_limits(&self) -> SearchLimits {
        SearchLimits {
            time_limit: self.time_limit,
            max_expansions: self.max_expansions,
            memory_limit_mb: self.memory_limit_mb,
        }
    }

    pub fn travel_estimator(&self) -> TravelEstimator {
        TravelEstimator::new(self.average_speed_kmh, self.min_leg_minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_config_uses_defaults() {
        let config = PlannerConfig::from_text("").unwrap();
        assert_eq!(config, PlannerConfig::default());
        assert_eq!(config.average_speed_kmh, 30.0);
        assert_eq!(config.min_leg_minutes, 5);
        assert_eq!(config.dwell_minutes, 30);
        assert_eq!(config.heuristic, HeuristicName::NearestPending);
        assert_eq!(config.search_limits().max_expansions, Some(2_000_000));
        assert_eq!(config.search_limits().time_limit, None);
    }

    #[test]
    fn parses_all_fields() {
        let config = PlannerConfig::from_text(
            r#"
            average-speed-kmh = 12.5
            min-leg-minutes = 2
            dwell-minutes = 45
            eta-speed-kmh = 15.0
            heuristic = "zero"
            time-limit = "1s 500ms"
            max-expansions = 1000
            memory-limit-mb = 256
            "#,
        )
        .unwrap();
        assert_eq!(config.average_speed_kmh, 12.5);
        assert_eq!(config.min_leg_minutes, 2);
        assert_eq!(config.dwell_minutes, 45);
        assert_eq!(config.eta_speed_kmh, 15.0);
        assert_eq!(config.heuristic, HeuristicName::ZeroHeuristic);
        assert_eq!(config.time_limit, Some(Duration::from_millis(1500)));
        assert_eq!(config.max_expansions, Some(1000));
        assert_eq!(config.memory_limit_mb, Some(256));
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            PlannerConfig::from_text("average-speed-kmh = 0.0"),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            PlannerConfig::from_text("time-limit = \"soon\""),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            PlannerConfig::from_text("colour = true"),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn serialised_config_round_trips() {
        let config = PlannerConfig {
            time_limit: Some(Duration::from_secs(3)),
            ..Default::default()
        };
        let text = toml::to_string(&config).unwrap();
        assert_eq!(PlannerConfig::from_text(&text).unwrap(), config);
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "dwell-minutes = 10").unwrap();
        let config = PlannerConfig::from_path(file.path()).unwrap();
        assert_eq!(config.dwell_minutes, 10);

        let missing = PlannerConfig::from_path(Path::new("/definitely/not/here.toml"));
        assert!(matches!(missing, Err(Error::Io(_))));
    }
}
