use crate::config::load_profile;
use crate::crew::{AgentType, Role};
use crate::errors::ConfigError;
use crate::profile::{Objective, Profile, Sector};
use crate::service::FreelanceCrew;
use clap::Parser;

/// Command line interface for the application
#[derive(Parser, Debug)]
#[command(name = "freelance-copilot", about = "Multi-agent assistant for freelancers")]
pub struct Cli {
    /// Agent type to run: positioning, finance, marketing, or all to run
    /// the three of them one after another
    #[arg(short, long, default_value = "all")]
    pub agent: AgentType,

    /// YAML or JSON file holding the profile
    #[arg(short, long)]
    pub profile: Option<String>,

    /// Start from the demo profile
    #[arg(long)]
    pub demo: bool,

    /// Name
    #[arg(long)]
    pub nom: Option<String>,

    /// Main objective
    #[arg(long, value_enum)]
    pub objectif: Option<Objective>,

    /// Skills, comma separated
    #[arg(long)]
    pub competences: Option<String>,

    /// Professional background
    #[arg(long)]
    pub experience: Option<String>,

    /// Monthly income target in euros
    #[arg(long, value_parser = clap::value_parser!(u32).range(1000..=20000))]
    pub revenu_cible: Option<u32>,

    /// Business sector
    #[arg(long, value_enum)]
    pub secteur: Option<Sector>,

    /// Path to the YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Directory the results are written to
    #[arg(short, long)]
    pub output_dir: Option<String>,

    /// Start the HTTP API instead of running agents
    #[arg(long)]
    pub serve: bool,

    /// Port of the HTTP API, overrides the configuration
    #[arg(long)]
    pub api_port: Option<u16>,

    /// Sets the logging verbosity level for the application
    /// Possible values: "error", "warn", "info", "debug", "trace"
    #[arg(long, default_value_t = String::from("info"))]
    pub logging_level: String,

    /// Also write logs to a daily rotating file under logs/
    #[arg(long)]
    pub log_file: bool,
}

impl Cli {
    /// Builds the profile from the profile file or the demo, then applies the field flags
    pub fn build_profile(&self) -> Result<Profile, ConfigError> {
        let mut profile = match (&self.profile, self.demo) {
            (Some(path), _) => load_profile(path)?,
            (None, true) => Profile::demo(),
            (None, false) => Profile::default(),
        };

        if let Some(nom) = &self.nom {
            profile.name = Some(nom.clone());
        }
        if let Some(objectif) = self.objectif {
            profile.objective = Some(objectif.label().to_string());
        }
        if let Some(competences) = &self.competences {
            profile.skills = Some(Profile::parse_competences(competences));
        }
        if let Some(experience) = &self.experience {
            profile.experience = Some(experience.clone());
        }
        if let Some(revenu) = self.revenu_cible {
            profile.target_income = Some(f64::from(revenu));
        }
        if let Some(secteur) = self.secteur {
            profile.sector = Some(secteur.label().to_string());
        }

        Ok(profile)
    }
}

/// One result displayed, and optionally saved, by the CLI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutput {
    pub title: &'static str,
    pub file_prefix: &'static str,
    pub text: String,
}

impl RunOutput {
    fn new(role: Role, text: String) -> Self {
        RunOutput {
            title: role.title(),
            file_prefix: role.file_prefix(),
            text,
        }
    }
}

/// Runs the requested agents: a single role gives one result, `all` runs
/// positioning, finance and marketing separately and gives one result each
pub async fn dispatch(crew: &FreelanceCrew, profile: &Profile, agent: AgentType) -> Vec<RunOutput> {
    match agent {
        AgentType::Single(role) => vec![RunOutput::new(role, crew.run(profile, role.key()).await)],
        AgentType::All => crew
            .run_all(profile)
            .await
            .into_iter()
            .map(|(role, text)| RunOutput::new(role, text))
            .collect(),
    }
}
