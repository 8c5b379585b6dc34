use crate::medals::*;

use log::debug;
use medal_ranking::{GradeVocabulary, RankingRules, SumMismatchMode, MEDAL_GRADE_COUNT};
use serde::{Deserialize, Serialize};
use serde_json::Value as JSValue;
use snafu::prelude::*;
use std::fs;

/// The medal cutoff of the original comparison runs.
pub const DEFAULT_MIN_MEDALS: u64 = 5;

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(rename = "contestName")]
    pub contest_name: String,
    #[serde(rename = "outputDirectory")]
    pub output_directory: Option<String>,
    #[serde(rename = "contestDate")]
    pub contest_date: Option<String>,
}

/// The header block of the summary JSON.
#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub contest: String,
    pub date: Option<String>,
    #[serde(rename = "minMedals")]
    pub min_medals: u64,
    #[serde(rename = "maxTotal")]
    pub max_total: u64,
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct FileSource {
    pub provider: String,
    #[serde(rename = "filePath")]
    pub file_path: String,
    #[serde(rename = "worksheetName")]
    pub worksheet_name: Option<String>,
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct MedalRules {
    /// Grade labels, best first. Exactly four for the medal pipeline.
    #[serde(rename = "gradeLabels")]
    pub grade_labels: Option<Vec<String>>,
    #[serde(rename = "minMedals")]
    pub min_medals: Option<u64>,
    /// When true, a medal-sum mismatch aborts the run instead of warning.
    #[serde(rename = "strictMedalSum")]
    pub strict_medal_sum: Option<bool>,
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct MedalConfig {
    #[serde(rename = "outputSettings")]
    pub output_settings: OutputSettings,
    #[serde(rename = "medalFileSources", default)]
    pub sources: Vec<FileSource>,
    pub rules: MedalRules,
}

impl MedalConfig {
    /// The configuration used when no file is given: the 2024 contest with
    /// the standard grades and cutoff.
    pub fn default_config() -> MedalConfig {
        MedalConfig {
            output_settings: OutputSettings {
                contest_name: "Olympics 2024".to_string(),
                output_directory: None,
                contest_date: None,
            },
            sources: Vec::new(),
            rules: MedalRules {
                grade_labels: None,
                min_medals: None,
                strict_medal_sum: None,
            },
        }
    }
}

pub fn read_config(path: &str) -> MedalResult<MedalConfig> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu {
        path: path.to_string(),
    })?;
    let config: MedalConfig =
        serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu {})?;
    Ok(config)
}

pub fn read_summary(path: &str) -> MedalResult<JSValue> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu {
        path: path.to_string(),
    })?;
    debug!("read content: {:?}", contents);
    let js: JSValue = serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu {})?;
    Ok(js)
}

/// Turns the run configuration plus overrides into core ranking rules.
pub fn validate_rules(config: &MedalConfig, min_override: Option<u64>) -> MedalResult<RankingRules> {
    let vocabulary = match &config.rules.grade_labels {
        Some(labels) => match GradeVocabulary::new(labels) {
            Ok(v) if v.len() == MEDAL_GRADE_COUNT => v,
            Ok(v) => {
                whatever!(
                    "gradeLabels must hold exactly {} entries, got {}",
                    MEDAL_GRADE_COUNT,
                    v.len()
                )
            }
            Err(e) => {
                whatever!("Cannot use the configured grade labels: {}", e)
            }
        },
        None => GradeVocabulary::medal_default(),
    };
    let min_total = min_override
        .or(config.rules.min_medals)
        .unwrap_or(DEFAULT_MIN_MEDALS);
    let sum_mismatch = match config.rules.strict_medal_sum {
        Some(true) => SumMismatchMode::Strict,
        _ => SumMismatchMode::Warn,
    };
    Ok(RankingRules {
        vocabulary,
        min_total,
        sum_mismatch,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_round_trips_through_json() {
        let raw = r#"{
            "outputSettings": {"contestName": "Olympics 2024", "contestDate": "2024-08-11 18:00"},
            "medalFileSources": [{"provider": "csv", "filePath": "medal_data.csv"}],
            "rules": {"minMedals": 3, "strictMedalSum": true}
        }"#;
        let config: MedalConfig = serde_json::from_str(raw).unwrap();
        assert_eq!(config.sources.len(), 1);
        let rules = validate_rules(&config, None).unwrap();
        assert_eq!(rules.min_total, 3);
        assert_eq!(rules.sum_mismatch, SumMismatchMode::Strict);
        assert_eq!(rules.vocabulary.len(), MEDAL_GRADE_COUNT);
    }

    #[test]
    fn wrong_grade_count_is_rejected() {
        let mut config = MedalConfig::default_config();
        config.rules.grade_labels = Some(vec!["Gold".to_string(), "Rest".to_string()]);
        let res = validate_rules(&config, None);
        assert!(matches!(res, Err(MedalError::Whatever { .. })));
    }
}
