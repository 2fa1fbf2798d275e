//! Per-source presentation metrics.
//!
//! Tonality dimensions are scored 1..5 and authenticity ratios 0..1; both are
//! mapped onto percentages and a [`Tone`] for display.

use crate::models::{AuthenticityValue, Source, Tone};

/// Maximum number of stars shown for a tier.
pub const MAX_TIER_STARS: u32 = 4;

/// Authenticity metric for which a higher ratio is better.
const VERBATIM_MATCH: &str = "verbatim_match";

/// Tonality score on the 1..5 scale as a percentage.
pub fn tonality_percentage(score: u8) -> f64 {
    f64::from(score) / 5.0 * 100.0
}

pub fn tonality_tone(score: u8) -> Tone {
    if score >= 4 {
        Tone::Danger
    } else if score >= 2 {
        Tone::Warning
    } else {
        Tone::Success
    }
}

/// Authenticity ratio as a percentage.
pub fn authenticity_percentage(ratio: f64) -> f64 {
    ratio * 100.0
}

/// Tone of an authenticity ratio. `verbatim_match` is better when high,
/// every other ratio is worse when high.
pub fn authenticity_tone(metric: &str, ratio: f64) -> Tone {
    if metric == VERBATIM_MATCH {
        if ratio >= 0.7 {
            Tone::Success
        } else if ratio >= 0.4 {
            Tone::Warning
        } else {
            Tone::Danger
        }
    } else if ratio >= 0.8 {
        Tone::Danger
    } else if ratio >= 0.5 {
        Tone::Warning
    } else {
        Tone::Success
    }
}

/// Stars shown for a tier, capped at [`MAX_TIER_STARS`]. Tiers below 1 get
/// no stars.
pub fn tier_stars(tier: i64) -> u32 {
    tier.clamp(0, i64::from(MAX_TIER_STARS)) as u32
}

/// Tone of a source in the source list.
pub fn step_tone(source: &Source) -> Tone {
    if source.is_target() {
        return Tone::Primary;
    }
    match source.source_tier {
        1 => Tone::Success,
        2 => Tone::Primary,
        3 => Tone::Warning,
        _ => Tone::Neutral,
    }
}

/// A metric ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricReading {
    pub name: String,
    /// Percentage for numeric metrics, `None` for categorical ones.
    pub percentage: Option<f64>,
    pub label: String,
    pub tone: Tone,
}

/// Tonality readings of a source, ordered by dimension name.
pub fn tonality_readings(source: &Source) -> Vec<MetricReading> {
    source
        .tonality
        .iter()
        .map(|(name, score)| MetricReading {
            name: name.clone(),
            percentage: Some(tonality_percentage(*score)),
            label: format!("{}/5", score),
            tone: tonality_tone(*score),
        })
        .collect()
}

/// Authenticity readings of a source, ordered by metric name.
pub fn authenticity_readings(source: &Source) -> Vec<MetricReading> {
    source
        .authenticity
        .iter()
        .map(|(name, value)| match value {
            AuthenticityValue::Ratio(ratio) => MetricReading {
                name: name.clone(),
                percentage: Some(authenticity_percentage(*ratio)),
                label: format!("{:.0}%", authenticity_percentage(*ratio)),
                tone: authenticity_tone(name, *ratio),
            },
            AuthenticityValue::Label(label) => MetricReading {
                name: name.clone(),
                percentage: None,
                label: label.clone(),
                tone: Tone::Neutral,
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SourceKind;

    #[test]
    fn test_tonality() {
        assert_eq!(tonality_percentage(5), 100.0);
        assert_eq!(tonality_percentage(1), 20.0);
        assert_eq!(tonality_tone(5), Tone::Danger);
        assert_eq!(tonality_tone(4), Tone::Danger);
        assert_eq!(tonality_tone(3), Tone::Warning);
        assert_eq!(tonality_tone(2), Tone::Warning);
        assert_eq!(tonality_tone(1), Tone::Success);
    }

    #[test]
    fn test_authenticity_tone_direction() {
        assert_eq!(authenticity_tone("verbatim_match", 0.9), Tone::Success);
        assert_eq!(authenticity_tone("verbatim_match", 0.5), Tone::Warning);
        assert_eq!(authenticity_tone("verbatim_match", 0.1), Tone::Danger);

        assert_eq!(authenticity_tone("omission_rate", 0.9), Tone::Danger);
        assert_eq!(authenticity_tone("omission_rate", 0.6), Tone::Warning);
        assert_eq!(authenticity_tone("novelty_ratio", 0.2), Tone::Success);
    }

    #[test]
    fn test_tier_stars_capped() {
        assert_eq!(tier_stars(1), 1);
        assert_eq!(tier_stars(4), 4);
        assert_eq!(tier_stars(9), 4);
        assert_eq!(tier_stars(0), 0);
        assert_eq!(tier_stars(-1), 0);
    }

    #[test]
    fn test_step_tone() {
        let target = Source {
            kind: SourceKind::Target,
            ..Source::new("https://example.com", 4)
        };
        assert_eq!(step_tone(&target), Tone::Primary);
        assert_eq!(step_tone(&Source::new("https://a.org", 1)), Tone::Success);
        assert_eq!(step_tone(&Source::new("https://a.org", 3)), Tone::Warning);
        assert_eq!(step_tone(&Source::new("https://a.org", 7)), Tone::Neutral);
        assert_eq!(step_tone(&Source::new("https://a.org", -1)), Tone::Neutral);
    }

    #[test]
    fn test_readings() {
        let mut source = Source::new("https://example.com", 2);
        source.tonality.insert("dramatization".to_string(), 4);
        source
            .authenticity
            .insert("verbatim_match".to_string(), AuthenticityValue::Ratio(0.75));
        source.authenticity.insert(
            "temporal_consistency".to_string(),
            AuthenticityValue::Label("Valid".to_string()),
        );

        let tonality = tonality_readings(&source);
        assert_eq!(tonality.len(), 1);
        assert_eq!(tonality[0].label, "4/5");
        assert_eq!(tonality[0].tone, Tone::Danger);

        let authenticity = authenticity_readings(&source);
        assert_eq!(authenticity[0].name, "temporal_consistency");
        assert_eq!(authenticity[0].percentage, None);
        assert_eq!(authenticity[1].label, "75%");
        assert_eq!(authenticity[1].tone, Tone::Success);
    }
}
