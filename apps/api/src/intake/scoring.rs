//! Candidate scoring: measures free-text experience against a role's keyword lists.
//!
//! `KeywordScorer` is the only backend. `AppState` carries it as
//! `Arc<dyn CandidateScorer>` so handlers never name the concrete type.
//!
//! Algorithm:
//! 1. Normalize the candidate text.
//! 2. skill_score = required skills found as substrings / number of required skills
//! 3. experience_score = experience keywords found / number of keywords (0 when none)
//! 4. overall_score = round2(0.7 × skill_score + 0.3 × experience_score)
//! 5. SHORTLISTED when overall_score ≥ minimum_score
//!
//! Rounding is half away from zero at two decimals, and the threshold is
//! compared against the rounded overall score.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::intake::catalog::RoleRequirements;
use crate::intake::normalize::normalize;

pub const SKILL_WEIGHT: f64 = 0.7;
pub const EXPERIENCE_WEIGHT: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Recommendation {
    Shortlisted,
    NotShortlisted,
}

impl Recommendation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::Shortlisted => "SHORTLISTED",
            Recommendation::NotShortlisted => "NOT_SHORTLISTED",
        }
    }
}

/// Outcome of scoring one candidate against one role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub overall_score: f64,    // 0.0 – 1.0
    pub skill_score: f64,      // 0.0 – 1.0
    pub experience_score: f64, // 0.0 – 1.0
    pub matched_skills: usize,
    pub matched_experience: usize,
    pub recommendation: Recommendation,
}

#[derive(Debug, Error, PartialEq)]
pub enum ScoringError {
    #[error("Role '{role_id}' has no required skills")]
    InvalidRequirements { role_id: String },
}

pub trait CandidateScorer: Send + Sync {
    fn score(
        &self,
        candidate_text: &str,
        requirements: &RoleRequirements,
    ) -> Result<ScoreResult, ScoringError>;
}

/// Substring keyword scorer. Pure and deterministic.
pub struct KeywordScorer;

impl CandidateScorer for KeywordScorer {
    fn score(
        &self,
        candidate_text: &str,
        requirements: &RoleRequirements,
    ) -> Result<ScoreResult, ScoringError> {
        score_candidate(candidate_text, requirements)
    }
}

pub fn score_candidate(
    candidate_text: &str,
    requirements: &RoleRequirements,
) -> Result<ScoreResult, ScoringError> {
    if requirements.required_skills.is_empty() {
        return Err(ScoringError::InvalidRequirements {
            role_id: requirements.role_id.clone(),
        });
    }

    let text = normalize(candidate_text);

    let matched_skills = count_matches(&text, &requirements.required_skills);
    let skill_score = matched_skills as f64 / requirements.required_skills.len() as f64;

    let matched_experience = count_matches(&text, &requirements.experience_keywords);
    let experience_score = if requirements.experience_keywords.is_empty() {
        0.0
    } else {
        matched_experience as f64 / requirements.experience_keywords.len() as f64
    };

    let overall_score = round2(SKILL_WEIGHT * skill_score + EXPERIENCE_WEIGHT * experience_score);

    let recommendation = if overall_score >= requirements.minimum_score {
        Recommendation::Shortlisted
    } else {
        Recommendation::NotShortlisted
    };

    Ok(ScoreResult {
        overall_score,
        skill_score: round2(skill_score),
        experience_score: round2(experience_score),
        matched_skills,
        matched_experience,
        recommendation,
    })
}

/// Counts keywords that occur as contiguous substrings of `text`.
/// Phrases must appear in order: "prompt engineering" does not match
/// "engineering prompts".
fn count_matches(text: &str, keywords: &[String]) -> usize {
    keywords
        .iter()
        .filter(|keyword| text.contains(keyword.as_str()))
        .count()
}

/// Rounds half away from zero to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
