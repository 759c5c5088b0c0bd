use serde::{Serialize, Deserialize};

use crate::outcome_policy::PolicyKind;
use crate::shared_reveal_flow::FlowVariant;

/// Which flow runs and how each mini-game decides its outcome.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct RevealConfig {
    pub variant: FlowVariant,
    pub slot_policy: PolicyKind,
    pub wheel_policy: PolicyKind,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            variant: FlowVariant::TwoStage,
            slot_policy: PolicyKind::scripted(),
            wheel_policy: PolicyKind::fair(),
        }
    }
}

fn parse_policy(value: &str) -> Option<PolicyKind> {
    match value {
        "scripted" | "rigged" => Some(PolicyKind::scripted()),
        "fair" => Some(PolicyKind::fair()),
        _ => None,
    }
}

impl RevealConfig {
    /// Reads `variant`, `slot` and `wheel` from a URL query string such as
    /// `?variant=three-stage&slot=fair`. Unknown keys and values are ignored.
    pub fn from_query(query: &str) -> Self {
        let mut config = Self::default();
        let query = query.trim_start_matches('?');

        for pair in query.split('&').filter(|pair| !pair.is_empty()) {
            let (key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
            let value = match urlencoding::decode(raw_value) {
                Ok(value) => value.into_owned(),
                Err(e) => {
                    log::warn!("Ignoring undecodable query value for {}: {}", key, e);
                    continue;
                }
            };

            match (key, value.as_str()) {
                ("variant", "three-stage") => config.variant = FlowVariant::ThreeStage,
                ("variant", "two-stage") => config.variant = FlowVariant::TwoStage,
                ("slot", policy) => {
                    if let Some(kind) = parse_policy(policy) {
                        config.slot_policy = kind;
                    }
                }
                ("wheel", policy) => {
                    if let Some(kind) = parse_policy(policy) {
                        config.wheel_policy = kind;
                    }
                }
                _ => log::debug!("Unrecognised query parameter: {}", pair),
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_rigged_two_stage() {
        let config = RevealConfig::default();
        assert_eq!(config.variant, FlowVariant::TwoStage);
        assert_eq!(config.slot_policy, PolicyKind::Scripted { win_on_attempt: 3 });
        assert_eq!(config.wheel_policy, PolicyKind::Fair { win_probability: 0.5 });
    }

    #[test]
    fn test_from_query_reads_known_keys() {
        let config = RevealConfig::from_query("?variant=three-stage&slot=fair");
        assert_eq!(config.variant, FlowVariant::ThreeStage);
        assert_eq!(config.slot_policy, PolicyKind::fair());
        assert_eq!(config.wheel_policy, PolicyKind::fair());

        let config = RevealConfig::from_query("wheel=scripted&utm_source=x");
        assert_eq!(config.variant, FlowVariant::TwoStage);
        assert_eq!(config.wheel_policy, PolicyKind::scripted());
    }

    #[test]
    fn test_from_query_ignores_garbage() {
        assert_eq!(RevealConfig::from_query(""), RevealConfig::default());
        assert_eq!(RevealConfig::from_query("?variant=five&slot"), RevealConfig::default());
        assert_eq!(RevealConfig::from_query("&&"), RevealConfig::default());
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let json = r#"{"variant":"three-stage","slot_policy":{"kind":"scripted","win_on_attempt":2},"wheel_policy":{"kind":"fair","win_probability":0.25}}"#;
        let config: RevealConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.variant, FlowVariant::ThreeStage);
        assert_eq!(config.slot_policy, PolicyKind::Scripted { win_on_attempt: 2 });
        assert_eq!(config.wheel_policy, PolicyKind::Fair { win_probability: 0.25 });
    }
}
