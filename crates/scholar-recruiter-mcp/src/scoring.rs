//! Recruiting score heuristics.
//!
//! All weights live in [`ScoringWeights`] so tests can substitute them. Every
//! score is a fixed linear combination of capped signals, clamped to `0..=100`.

use serde::Serialize;

/// A capped linear term: `min(value / divisor, cap)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SignalWeight {
    /// Value that earns one point.
    pub divisor: f64,

    /// Maximum points this signal can contribute.
    pub cap: f64,
}

impl SignalWeight {
    /// Create a new weight.
    #[must_use]
    pub const fn new(divisor: f64, cap: f64) -> Self {
        Self { divisor, cap }
    }

    /// Points earned for `value`.
    #[must_use]
    pub fn points(self, value: f64) -> f64 {
        if self.divisor <= 0.0 || !value.is_finite() {
            return 0.0;
        }
        (value / self.divisor).clamp(0.0, self.cap.max(0.0))
    }
}

/// Weight table for the GitHub activity score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ActivityWeights {
    pub followers: SignalWeight,
    pub stars: SignalWeight,
    pub repos: SignalWeight,
    pub recent_events: SignalWeight,
    pub push_events: SignalWeight,
    /// Flat bonus for a filled-in bio.
    pub bio_bonus: f64,
}

impl Default for ActivityWeights {
    fn default() -> Self {
        Self {
            followers: SignalWeight::new(10.0, 20.0),
            stars: SignalWeight::new(50.0, 25.0),
            repos: SignalWeight::new(5.0, 15.0),
            recent_events: SignalWeight::new(10.0, 20.0),
            push_events: SignalWeight::new(5.0, 10.0),
            bio_bonus: 10.0,
        }
    }
}

/// Weight table for the academic score: `h_index * h_index_factor + citations / citation_divisor`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AcademicWeights {
    pub h_index_factor: f64,
    pub citation_divisor: f64,
}

impl Default for AcademicWeights {
    fn default() -> Self {
        Self { h_index_factor: 3.0, citation_divisor: 100.0 }
    }
}

/// All scoring constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoringWeights {
    pub activity: ActivityWeights,
    pub academic: AcademicWeights,
    /// Share of the composite score taken by the academic score.
    pub composite_academic_share: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            activity: ActivityWeights::default(),
            academic: AcademicWeights::default(),
            composite_academic_share: 0.6,
        }
    }
}

/// Raw GitHub signals feeding the activity score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivitySignals {
    pub followers: u64,
    pub total_stars: u64,
    pub public_repos: u64,
    pub recent_events: u64,
    pub push_events: u64,
    pub has_bio: bool,
}

/// Qualitative tier for a 0-100 activity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityRating {
    Excellent,
    Good,
    Moderate,
    Low,
    Minimal,
}

impl ActivityRating {
    /// Tier for a score.
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        match score {
            80.. => Self::Excellent,
            60..=79 => Self::Good,
            40..=59 => Self::Moderate,
            20..=39 => Self::Low,
            _ => Self::Minimal,
        }
    }

    /// Human-readable description.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent - highly active, influential developer",
            Self::Good => "Good - active developer with solid presence",
            Self::Moderate => "Moderate - shows regular activity",
            Self::Low => "Low - limited public activity",
            Self::Minimal => "Minimal - very limited public presence",
        }
    }
}

/// Qualitative tier for an academic score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AcademicTier {
    Strong,
    Moderate,
    EarlyCareer,
}

impl AcademicTier {
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        match score {
            50.. => Self::Strong,
            20..=49 => Self::Moderate,
            _ => Self::EarlyCareer,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Strong => "Strong",
            Self::Moderate => "Moderate",
            Self::EarlyCareer => "Early career",
        }
    }
}

fn clamp_score(raw: f64) -> u8 {
    // NaN casts to 0.
    raw.floor().clamp(0.0, 100.0) as u8
}

/// GitHub activity score in `0..=100`.
#[must_use]
pub fn activity_score(signals: &ActivitySignals, weights: &ActivityWeights) -> u8 {
    let mut raw = weights.followers.points(signals.followers as f64)
        + weights.stars.points(signals.total_stars as f64)
        + weights.repos.points(signals.public_repos as f64)
        + weights.recent_events.points(signals.recent_events as f64)
        + weights.push_events.points(signals.push_events as f64);
    if signals.has_bio {
        raw += weights.bio_bonus.max(0.0);
    }
    clamp_score(raw)
}

/// Academic score in `0..=100` from h-index and total citations.
#[must_use]
pub fn academic_score(h_index: i32, citations: i64, weights: &AcademicWeights) -> u8 {
    let h_part = f64::from(h_index.max(0)) * weights.h_index_factor;
    let c_part = if weights.citation_divisor > 0.0 {
        citations.max(0) as f64 / weights.citation_divisor
    } else {
        0.0
    };
    clamp_score(h_part + c_part)
}

/// Composite of the academic and (optional) GitHub scores.
#[must_use]
pub fn composite_score(academic: u8, github: Option<u8>, weights: &ScoringWeights) -> u8 {
    match github {
        Some(gh) => {
            let share = weights.composite_academic_share.clamp(0.0, 1.0);
            clamp_score((f64::from(academic) * share + f64::from(gh) * (1.0 - share)).round())
        }
        None => academic,
    }
}

/// Rising-star ranking score: recent citations relative to career stage.
#[must_use]
pub fn rising_star_score(recent_citations: i64, h_index: i32) -> f64 {
    recent_citations.max(0) as f64 / (f64::from(h_index.max(0)) + 1.0)
}
