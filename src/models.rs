//! Data models for fact-check reports.
//!
//! This module contains the report, claim and source structures as they are
//! delivered by the analysis service, plus the derived claim summary.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// One of the four verdicts a claim can receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    True,
    False,
    Misleading,
    Unverifiable,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 4] = [
        Category::True,
        Category::False,
        Category::Misleading,
        Category::Unverifiable,
    ];

    /// The label used on the wire and in reports.
    pub fn label(&self) -> &'static str {
        match self {
            Category::True => "True",
            Category::False => "False",
            Category::Misleading => "Misleading",
            Category::Unverifiable => "Unverifiable",
        }
    }

    /// Parses an exact wire label.
    pub fn from_label(label: &str) -> Option<Self> {
        Category::ALL.into_iter().find(|c| c.label() == label)
    }

    /// Display tone of the category.
    pub fn tone(&self) -> Tone {
        match self {
            Category::True => Tone::Success,
            Category::False => Tone::Danger,
            Category::Misleading => Tone::Warning,
            Category::Unverifiable => Tone::Neutral,
        }
    }

    /// Returns an emoji representation of the category.
    pub fn emoji(&self) -> &'static str {
        match self {
            Category::True => "✅",
            Category::False => "❌",
            Category::Misleading => "⚠️",
            Category::Unverifiable => "❔",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Qualitative colour bucket shared by verdicts, tiers and source metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Success,
    Primary,
    Warning,
    Danger,
    Neutral,
}

impl Tone {
    /// Returns an emoji representation of the tone.
    pub fn emoji(&self) -> &'static str {
        match self {
            Tone::Success => "🟢",
            Tone::Primary => "🔵",
            Tone::Warning => "🟡",
            Tone::Danger => "🔴",
            Tone::Neutral => "⚪",
        }
    }
}

/// Verdict attached to a claim.
///
/// Labels outside the four known categories are kept verbatim in
/// `Unknown` so they survive a round trip and still count toward totals.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Verdict {
    Known(Category),
    Unknown(String),
}

impl Verdict {
    /// The known category, if any.
    pub fn category(&self) -> Option<Category> {
        match self {
            Verdict::Known(category) => Some(*category),
            Verdict::Unknown(_) => None,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Verdict::Known(category) => category.label(),
            Verdict::Unknown(label) => label,
        }
    }

    pub fn tone(&self) -> Tone {
        self.category().map_or(Tone::Neutral, |c| c.tone())
    }
}

impl From<Category> for Verdict {
    fn from(category: Category) -> Self {
        Verdict::Known(category)
    }
}

impl From<&str> for Verdict {
    fn from(s: &str) -> Self {
        match Category::from_label(s) {
            Some(category) => Verdict::Known(category),
            None => Verdict::Unknown(s.to_string()),
        }
    }
}

impl From<String> for Verdict {
    fn from(s: String) -> Self {
        match Category::from_label(&s) {
            Some(category) => Verdict::Known(category),
            None => Verdict::Unknown(s),
        }
    }
}

impl From<Verdict> for String {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Known(category) => category.label().to_string(),
            Verdict::Unknown(label) => label,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Role of a source within a report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SourceKind {
    /// The article being fact-checked.
    Target,
    /// A source used to corroborate or refute claims.
    #[default]
    Corroborating,
    Other(String),
}

impl SourceKind {
    pub fn is_target(&self) -> bool {
        matches!(self, SourceKind::Target)
    }
}

impl From<String> for SourceKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "target" => SourceKind::Target,
            "corroborating" | "verification" => SourceKind::Corroborating,
            _ => SourceKind::Other(s),
        }
    }
}

impl From<SourceKind> for String {
    fn from(kind: SourceKind) -> Self {
        match kind {
            SourceKind::Target => "target".to_string(),
            SourceKind::Corroborating => "corroborating".to_string(),
            SourceKind::Other(s) => s,
        }
    }
}

/// Bias indicators of a source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bias {
    #[serde(default)]
    pub institutional_affiliations: BTreeSet<String>,
    #[serde(default)]
    pub commercial_interests: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub political_leaning: Option<String>,
}

/// An authenticity metric: either a 0..1 ratio or a categorical label
/// such as `"Verified"` or `"Anomalous"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AuthenticityValue {
    Ratio(f64),
    Label(String),
}

impl AuthenticityValue {
    pub fn ratio(&self) -> Option<f64> {
        match self {
            AuthenticityValue::Ratio(r) => Some(*r),
            AuthenticityValue::Label(_) => None,
        }
    }
}

impl fmt::Display for AuthenticityValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthenticityValue::Ratio(r) => write!(f, "{}", r),
            AuthenticityValue::Label(s) => write!(f, "{}", s),
        }
    }
}

/// A cited source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    /// Upstream identifier, when the source comes from a verification list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    // verification records name it `article_url`
    #[serde(alias = "article_url")]
    pub url: String,
    /// Evidence excerpts. Upstream sends either a string or a list.
    #[serde(default, deserialize_with = "one_or_many")]
    pub relevant_evidence_excerpt: Vec<String>,
    #[serde(default)]
    pub domain_name: String,
    #[serde(rename = "type", default)]
    pub kind: SourceKind,
    /// Credibility tier, 1 being the most credible. Values below 1 are
    /// kept as received and treated as unranked.
    #[serde(default = "default_tier", deserialize_with = "lenient_tier")]
    pub source_tier: i64,
    #[serde(default)]
    pub content_type: String,
    #[serde(default)]
    pub bias: Bias,
    #[serde(default)]
    pub bias_summary: String,
    /// Tonality dimensions scored 1..5.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub tonality: BTreeMap<String, u8>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub authenticity: BTreeMap<String, AuthenticityValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish_time: Option<String>,
}

fn default_tier() -> i64 {
    1
}

/// Tier as sent upstream: usually an integer, occasionally a float,
/// a numeric string or null.
#[derive(Deserialize)]
#[serde(untagged)]
enum TierRepr {
    Int(i64),
    Float(f64),
    Text(String),
    Other(serde::de::IgnoredAny),
}

/// Unreadable tiers become 0, which ranks after every valid tier.
fn lenient_tier<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<TierRepr>::deserialize(deserializer)? {
        Some(TierRepr::Int(tier)) => tier,
        Some(TierRepr::Float(tier)) if tier.is_finite() => tier.trunc() as i64,
        Some(TierRepr::Text(tier)) => tier.trim().parse().unwrap_or(0),
        _ => 0,
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(s) => vec![s],
        OneOrMany::Many(v) => v,
    })
}

impl Source {
    /// Creates a corroborating source with default metadata.
    pub fn new(url: impl Into<String>, source_tier: i64) -> Self {
        Self {
            id: None,
            url: url.into(),
            relevant_evidence_excerpt: Vec::new(),
            domain_name: String::new(),
            kind: SourceKind::Corroborating,
            source_tier,
            content_type: String::new(),
            bias: Bias::default(),
            bias_summary: String::new(),
            tonality: BTreeMap::new(),
            authenticity: BTreeMap::new(),
            publish_time: None,
        }
    }

    pub fn is_target(&self) -> bool {
        self.kind.is_target()
    }

    /// Whether the tier is a positive ranking.
    pub fn has_valid_tier(&self) -> bool {
        self.source_tier >= 1
    }
}

/// Manipulation marker attached to a claim by the analysis service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ManipulationFlag {
    #[serde(default)]
    pub manipulation_flag: bool,
    // upstream misspells the field
    #[serde(default, alias = "summay")]
    pub summary: String,
}

/// A single factual assertion and its verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    /// The assertion text.
    pub claim: String,
    pub fact_check_category: Verdict,
    #[serde(default)]
    pub sources: Vec<Source>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub raw_content: Vec<String>,
    #[serde(
        default,
        alias = "manipuation",
        skip_serializing_if = "Option::is_none"
    )]
    pub manipulation: Option<ManipulationFlag>,
}

impl Claim {
    /// Creates a claim without sources.
    pub fn new(claim: impl Into<String>, verdict: impl Into<Verdict>) -> Self {
        Self {
            claim: claim.into(),
            fact_check_category: verdict.into(),
            sources: Vec::new(),
            raw_content: Vec::new(),
            manipulation: None,
        }
    }

    pub fn with_sources(mut self, sources: Vec<Source>) -> Self {
        self.sources = sources;
        self
    }

    pub fn category(&self) -> Option<Category> {
        self.fact_check_category.category()
    }
}

/// A fact-check report as produced by the analysis service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Report {
    #[serde(default)]
    pub claims: Vec<Claim>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall_category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Per-category claim counts of a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimCountSummary {
    #[serde(rename = "True")]
    pub true_count: usize,
    #[serde(rename = "False")]
    pub false_count: usize,
    #[serde(rename = "Misleading")]
    pub misleading_count: usize,
    #[serde(rename = "Unverifiable")]
    pub unverifiable_count: usize,
    /// Number of claims, including those with an unknown verdict.
    pub total: usize,
}

impl ClaimCountSummary {
    pub fn get(&self, category: Category) -> usize {
        match category {
            Category::True => self.true_count,
            Category::False => self.false_count,
            Category::Misleading => self.misleading_count,
            Category::Unverifiable => self.unverifiable_count,
        }
    }

    pub(crate) fn increment(&mut self, category: Category) {
        match category {
            Category::True => self.true_count += 1,
            Category::False => self.false_count += 1,
            Category::Misleading => self.misleading_count += 1,
            Category::Unverifiable => self.unverifiable_count += 1,
        }
    }

    /// Sum of the four known categories.
    pub fn known(&self) -> usize {
        Category::ALL.iter().map(|c| self.get(*c)).sum()
    }

    /// Claims whose verdict is not one of the four categories.
    pub fn unknown(&self) -> usize {
        self.total.saturating_sub(self.known())
    }

    /// Categories with at least one claim, in display order.
    pub fn nonzero(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .into_iter()
            .map(|c| (c, self.get(c)))
            .filter(|(_, count)| *count > 0)
            .collect()
    }
}
