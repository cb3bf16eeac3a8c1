//! Role catalog: declarative role requirements and trigger words, loaded once
//! at startup and read-only afterwards.
//!
//! Keywords are passed through `normalize` on load so they live in the same
//! alphabet as the text they are matched against ("model fine-tuning" is
//! stored as "model finetuning"). A keyword written with digits or
//! punctuation can therefore match where a raw comparison against
//! normalized text never would, which raises scores for such text compared
//! with matching the configured strings verbatim.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::intake::intent::TriggerSets;
use crate::intake::normalize::normalize;

/// Catalog compiled into the binary, used when no path is configured.
const BUNDLED_CATALOG: &str = include_str!("../../config/catalog.json");

fn default_minimum_score() -> f64 {
    0.6
}

/// Requirements a candidate is scored against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleRequirements {
    /// Filled from the catalog key on load.
    #[serde(default)]
    pub role_id: String,
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub experience_keywords: Vec<String>,
    #[serde(default = "default_minimum_score")]
    pub minimum_score: f64,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Catalog defines no roles")]
    NoRoles,

    #[error("Role '{0}' has no required skills")]
    NoRequiredSkills(String),

    #[error("Role '{role_id}' has minimum_score {value} outside 0.0..=1.0")]
    MinimumScoreOutOfRange { role_id: String, value: f64 },

    #[error("Role '{role_id}' has a keyword with no letters: {keyword:?}")]
    EmptyKeyword { role_id: String, keyword: String },

    #[error("Trigger word for '{category}' has no letters: {word:?}")]
    EmptyTrigger { category: String, word: String },

    #[error("Default role '{0}' is not defined in the catalog")]
    UnknownDefaultRole(String),
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    roles: BTreeMap<String, RoleRequirements>,
    #[serde(default)]
    triggers: TriggerSets,
}

/// Validated role requirements keyed by role id.
#[derive(Debug, Clone)]
pub struct RoleCatalog {
    roles: BTreeMap<String, RoleRequirements>,
    default_role: String,
}

impl RoleCatalog {
    pub fn get(&self, role_id: &str) -> Option<&RoleRequirements> {
        self.roles.get(role_id)
    }

    /// Resolves an optional role id, falling back to the default role.
    pub fn resolve(&self, role_id: Option<&str>) -> Option<&RoleRequirements> {
        match role_id.map(str::trim).filter(|id| !id.is_empty()) {
            Some(id) => self.get(id),
            None => self.get(&self.default_role),
        }
    }

    pub fn default_role(&self) -> &str {
        &self.default_role
    }

    /// Roles in id order.
    pub fn roles(&self) -> impl Iterator<Item = &RoleRequirements> {
        self.roles.values()
    }
}

/// Everything loaded from one catalog source.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub roles: RoleCatalog,
    pub triggers: TriggerSets,
}

impl Catalog {
    /// Loads from `path` when given, otherwise the bundled catalog.
    pub fn load(path: Option<&Path>, default_role: &str) -> Result<Self, CatalogError> {
        match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
                let catalog = Self::from_json(&raw, default_role)?;
                info!("Loaded role catalog from {}", path.display());
                Ok(catalog)
            }
            None => {
                let catalog = Self::from_json(BUNDLED_CATALOG, default_role)?;
                info!("Loaded bundled role catalog");
                Ok(catalog)
            }
        }
    }

    pub fn from_json(raw: &str, default_role: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(raw)?;

        if file.roles.is_empty() {
            return Err(CatalogError::NoRoles);
        }

        let mut roles = BTreeMap::new();
        for (role_id, requirements) in file.roles {
            let requirements = validate_role(role_id.clone(), requirements)?;
            roles.insert(role_id, requirements);
        }

        if !roles.contains_key(default_role) {
            return Err(CatalogError::UnknownDefaultRole(default_role.to_string()));
        }

        let triggers = normalize_triggers(file.triggers)?;

        Ok(Catalog {
            roles: RoleCatalog {
                roles,
                default_role: default_role.to_string(),
            },
            triggers,
        })
    }
}

fn validate_role(
    role_id: String,
    requirements: RoleRequirements,
) -> Result<RoleRequirements, CatalogError> {
    if requirements.required_skills.is_empty() {
        return Err(CatalogError::NoRequiredSkills(role_id));
    }

    if !(0.0..=1.0).contains(&requirements.minimum_score) {
        return Err(CatalogError::MinimumScoreOutOfRange {
            role_id,
            value: requirements.minimum_score,
        });
    }

    let required_skills = normalize_keywords(&role_id, requirements.required_skills)?;
    let experience_keywords = normalize_keywords(&role_id, requirements.experience_keywords)?;

    Ok(RoleRequirements {
        role_id,
        required_skills,
        experience_keywords,
        minimum_score: requirements.minimum_score,
    })
}

// An empty keyword is a substring of every text, so it would always match.
fn normalize_keywords(
    role_id: &str,
    keywords: Vec<String>,
) -> Result<Vec<String>, CatalogError> {
    keywords
        .into_iter()
        .map(|keyword| {
            let normalized = normalize(&keyword);
            if normalized.is_empty() {
                Err(CatalogError::EmptyKeyword {
                    role_id: role_id.to_string(),
                    keyword,
                })
            } else {
                Ok(normalized)
            }
        })
        .collect()
}

fn normalize_triggers(triggers: TriggerSets) -> Result<TriggerSets, CatalogError> {
    if let Some((category, word)) = triggers
        .iter()
        .find(|(_, word)| normalize(word).is_empty())
    {
        return Err(CatalogError::EmptyTrigger {
            category: category.as_str().to_string(),
            word: word.to_string(),
        });
    }

    fn clean(words: Vec<String>) -> Vec<String> {
        words.iter().map(|w| normalize(w)).collect()
    }

    Ok(TriggerSets {
        greeting: clean(triggers.greeting),
        application: clean(triggers.application),
        experience_inquiry: clean(triggers.experience_inquiry),
        technical: clean(triggers.technical),
        help: clean(triggers.help),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const DEFAULT_ROLE: &str = "prompt_engineer";

    #[test]
    fn test_bundled_catalog_loads() {
        let catalog = Catalog::load(None, DEFAULT_ROLE).unwrap();
        let role = catalog.roles.resolve(None).unwrap();
        assert_eq!(role.role_id, "prompt_engineer");
        assert_eq!(role.required_skills.len(), 12);
        assert_eq!(role.experience_keywords.len(), 7);
        assert_eq!(role.minimum_score, 0.6);
        assert_eq!(catalog.triggers, TriggerSets::default());
    }

    #[test]
    fn test_keywords_are_normalized_on_load() {
        let catalog = Catalog::load(None, DEFAULT_ROLE).unwrap();
        let role = catalog.roles.get("prompt_engineer").unwrap();
        assert!(role
            .experience_keywords
            .contains(&"model finetuning".to_string()));
    }

    #[test]
    fn test_hyphenated_keyword_matches_after_normalization() {
        use crate::intake::scoring::score_candidate;

        let catalog = Catalog::load(None, DEFAULT_ROLE).unwrap();
        let role = catalog.roles.resolve(None).unwrap();
        let result = score_candidate("Model fine-tuning at scale", role).unwrap();
        assert_eq!(result.matched_experience, 1);
    }

    #[test]
    fn test_resolve_by_id_and_unknown() {
        let raw = r#"{"roles": {
            "a": {"required_skills": ["rust"]},
            "b": {"required_skills": ["go"], "minimum_score": 0.3}
        }}"#;
        let catalog = Catalog::from_json(raw, "a").unwrap();
        assert_eq!(catalog.roles.resolve(Some("b")).unwrap().minimum_score, 0.3);
        assert_eq!(catalog.roles.resolve(Some("  ")).unwrap().role_id, "a");
        assert!(catalog.roles.resolve(Some("missing")).is_none());
        assert_eq!(catalog.roles.default_role(), "a");
    }

    #[test]
    fn test_minimum_score_defaults_to_0_6() {
        let catalog = Catalog::from_json(r#"{"roles": {"a": {"required_skills": ["rust"]}}}"#, "a")
            .unwrap();
        let role = catalog.roles.get("a").unwrap();
        assert_eq!(role.minimum_score, 0.6);
        assert!(role.experience_keywords.is_empty());
    }

    #[test]
    fn test_roles_iterate_in_id_order() {
        let raw = r#"{"roles": {
            "zeta": {"required_skills": ["x"]},
            "alpha": {"required_skills": ["y"]}
        }}"#;
        let catalog = Catalog::from_json(raw, "zeta").unwrap();
        let ids: Vec<&str> = catalog.roles.roles().map(|r| r.role_id.as_str()).collect();
        assert_eq!(ids, vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_empty_required_skills_rejected() {
        let err = Catalog::from_json(r#"{"roles": {"a": {"required_skills": []}}}"#, "a")
            .unwrap_err();
        assert!(matches!(err, CatalogError::NoRequiredSkills(id) if id == "a"));
    }

    #[test]
    fn test_no_roles_rejected() {
        let err = Catalog::from_json(r#"{"roles": {}}"#, "a").unwrap_err();
        assert!(matches!(err, CatalogError::NoRoles));
    }

    #[test]
    fn test_unknown_default_role_rejected() {
        let err = Catalog::from_json(r#"{"roles": {"a": {"required_skills": ["x"]}}}"#, "b")
            .unwrap_err();
        assert!(matches!(err, CatalogError::UnknownDefaultRole(id) if id == "b"));
    }

    #[test]
    fn test_minimum_score_out_of_range_rejected() {
        let raw = r#"{"roles": {"a": {"required_skills": ["x"], "minimum_score": 1.5}}}"#;
        let err = Catalog::from_json(raw, "a").unwrap_err();
        assert!(matches!(err, CatalogError::MinimumScoreOutOfRange { .. }));
    }

    #[test]
    fn test_keyword_without_letters_rejected() {
        let raw = r#"{"roles": {"a": {"required_skills": ["rust", "123"]}}}"#;
        let err = Catalog::from_json(raw, "a").unwrap_err();
        assert!(matches!(err, CatalogError::EmptyKeyword { keyword, .. } if keyword == "123"));
    }

    #[test]
    fn test_trigger_without_letters_rejected() {
        let raw = r#"{"roles": {"a": {"required_skills": ["x"]}}, "triggers": {"help": ["?"]}}"#;
        let err = Catalog::from_json(raw, "a").unwrap_err();
        assert!(matches!(err, CatalogError::EmptyTrigger { category, .. } if category == "help"));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = Catalog::from_json("{not json", "a").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"roles": {{"data_analyst": {{"required_skills": ["SQL", "Excel"]}}}},
                "triggers": {{"greeting": ["Howdy"]}}}}"#
        )
        .unwrap();

        let catalog = Catalog::load(Some(file.path()), "data_analyst").unwrap();
        let role = catalog.roles.resolve(None).unwrap();
        assert_eq!(role.required_skills, vec!["sql".to_string(), "excel".to_string()]);
        assert_eq!(catalog.triggers.greeting, vec!["howdy".to_string()]);
        assert_eq!(catalog.triggers.help, TriggerSets::default().help);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Catalog::load(Some(Path::new("/nonexistent/catalog.json")), "a").unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }
}
