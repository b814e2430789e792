//! CLI command implementations

pub mod coverage;
pub mod fingerprint;
pub mod generate;
pub mod select;
pub mod validate;

use clap::Args;
use habitus_types::{Intent, Profile, SupportLevel};

/// Onboarding answers given on the command line
#[derive(Debug, Clone, Args)]
pub struct ProfileArgs {
    /// Intent (faithBased, wellness, both)
    #[arg(short, long, value_parser = parse_intent)]
    pub intent: Intent,

    /// Spiritual maturity (new, growing, mature, passionate)
    #[arg(short, long)]
    pub maturity: Option<String>,

    /// Motivation, repeatable; order matters
    #[arg(long = "motivation", required = true)]
    pub motivations: Vec<String>,

    /// Biggest challenge
    #[arg(short, long)]
    pub challenge: String,

    /// Support level (weak, normal, strong)
    #[arg(short, long, value_parser = parse_support, default_value = "normal")]
    pub support: SupportLevel,
}

impl ProfileArgs {
    pub fn into_profile(self) -> Profile {
        let profile = Profile::new(self.intent, self.motivations, self.challenge)
            .with_support(self.support);
        match self.maturity {
            Some(maturity) => profile.with_maturity(maturity),
            None => profile,
        }
    }
}

fn parse_intent(s: &str) -> Result<Intent, String> {
    s.parse().map_err(|e: habitus_types::HabitusError| e.to_string())
}

fn parse_support(s: &str) -> Result<SupportLevel, String> {
    s.parse().map_err(|e: habitus_types::HabitusError| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_values() {
        assert_eq!(parse_intent("faithBased"), Ok(Intent::FaithBased));
        assert_eq!(parse_support("weak"), Ok(SupportLevel::Weak));
        assert!(parse_intent("faith").is_err());
    }

    #[test]
    fn builds_profile() {
        let args = ProfileArgs {
            intent: Intent::Both,
            maturity: Some("growing".into()),
            motivations: vec!["closerToGod".into(), "betterSleep".into()],
            challenge: "lackOfTime".into(),
            support: SupportLevel::Weak,
        };
        let profile = args.into_profile();
        assert_eq!(profile.maturity(), Some("growing"));
        assert_eq!(profile.motivations, ["closerToGod", "betterSleep"]);
        assert!(profile.support_level.is_weak());
    }
}
