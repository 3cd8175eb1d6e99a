//! Freelance profile driving the work item templates.
//!
//! Every field is optional. Missing values are replaced by fixed defaults at
//! the point of use, and the defaults may differ from one template to another.

use crate::constants::{DEFAULT_OBJECTIVE, DEFAULT_TARGET_INCOME};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Flat profile record, serialized with the French keys used by the forms
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "nom", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "objectif", default, skip_serializing_if = "Option::is_none")]
    pub objective: Option<String>,
    #[serde(rename = "competences", default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    #[serde(rename = "revenu_cible", default, skip_serializing_if = "Option::is_none")]
    pub target_income: Option<f64>,
    #[serde(rename = "secteur", default, skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
}

impl Profile {
    /// Pre-filled profile used by the demo mode
    pub fn demo() -> Self {
        Self {
            name: Some("Sophie Martin".to_string()),
            objective: Some(Objective::LaunchActivity.label().to_string()),
            skills: Some(Self::parse_competences(
                "Développement web, React, Node.js, UX/UI Design",
            )),
            experience: Some(
                "5 ans en tant que développeuse full-stack dans une startup".to_string(),
            ),
            target_income: Some(5000.0),
            sector: Some(Sector::TechDigital.label().to_string()),
        }
    }

    /// Splits a comma separated skills field, trimming every entry
    pub fn parse_competences(raw: &str) -> Vec<String> {
        raw.split(',').map(|s| s.trim().to_string()).collect()
    }

    pub fn name_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.name.as_deref().unwrap_or(default)
    }

    pub fn objective(&self) -> &str {
        self.objective.as_deref().unwrap_or(DEFAULT_OBJECTIVE)
    }

    pub fn skills(&self) -> &[String] {
        self.skills.as_deref().unwrap_or(&[])
    }

    pub fn experience(&self) -> &str {
        self.experience.as_deref().unwrap_or("")
    }

    pub fn target_income(&self) -> f64 {
        self.target_income.unwrap_or(DEFAULT_TARGET_INCOME)
    }

    pub fn sector_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.sector.as_deref().unwrap_or(default)
    }
}

/// Main objectives offered by the profile form
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Objective {
    LaunchActivity,
    FirstClients,
    GrowRevenue,
    Specialize,
}

impl Objective {
    pub fn label(&self) -> &'static str {
        match self {
            Objective::LaunchActivity => "Lancer mon activité",
            Objective::FirstClients => "Trouver mes premiers clients",
            Objective::GrowRevenue => "Augmenter mon CA",
            Objective::Specialize => "Me spécialiser",
        }
    }

    #[cfg(test)]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::value_variants().iter().copied().find(|o| o.label() == label)
    }
}

/// Business sectors offered by the profile form
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Sector {
    TechDigital,
    MarketingCommunication,
    ConsultingTraining,
    DesignCreative,
    Other,
}

impl Sector {
    pub fn label(&self) -> &'static str {
        match self {
            Sector::TechDigital => "Tech & Digital",
            Sector::MarketingCommunication => "Marketing & Communication",
            Sector::ConsultingTraining => "Conseil & Formation",
            Sector::DesignCreative => "Design & Créatif",
            Sector::Other => "Autre",
        }
    }

    #[cfg(test)]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::value_variants().iter().copied().find(|s| s.label() == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_apply_to_empty_profile() {
        let profile = Profile::default();
        assert_eq!(profile.name_or("Freelance"), "Freelance");
        assert_eq!(profile.objective(), "Lancer mon activité");
        assert!(profile.skills().is_empty());
        assert_eq!(profile.experience(), "");
        assert_eq!(profile.target_income(), 4000.0);
        assert_eq!(profile.sector_or("tech"), "tech");
    }

    #[test]
    fn test_deserialize_french_keys() {
        let profile: Profile = serde_json::from_str(
            r#"{"nom": "Ana", "revenu_cible": 6000, "competences": ["SEO", "Rédaction"]}"#,
        )
        .unwrap();
        assert_eq!(profile.name.as_deref(), Some("Ana"));
        assert_eq!(profile.target_income(), 6000.0);
        assert_eq!(profile.skills(), ["SEO", "Rédaction"]);
        assert_eq!(profile.objective(), "Lancer mon activité");
    }

    #[test]
    fn test_parse_competences_trims_entries() {
        assert_eq!(
            Profile::parse_competences("Python,  Data Science , SQL"),
            vec!["Python", "Data Science", "SQL"]
        );
    }

    #[test]
    fn test_demo_profile_uses_form_labels() {
        let demo = Profile::demo();
        assert_eq!(
            Objective::from_label(demo.objective()),
            Some(Objective::LaunchActivity)
        );
        assert_eq!(
            Sector::from_label(demo.sector_or("")),
            Some(Sector::TechDigital)
        );
        assert_eq!(demo.skills().len(), 4);
    }
}
