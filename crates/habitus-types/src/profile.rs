use crate::error::{HabitusError, HabitusResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Why the user wants to build habits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Intent {
    FaithBased,
    Wellness,
    Both,
}

impl Intent {
    pub const ALL: [Intent; 3] = [Intent::FaithBased, Intent::Wellness, Intent::Both];

    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::FaithBased => "faithBased",
            Intent::Wellness => "wellness",
            Intent::Both => "both",
        }
    }

    /// Whether profiles with this intent carry a spiritual maturity.
    pub fn involves_faith(&self) -> bool {
        !matches!(self, Intent::Wellness)
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Intent {
    type Err = HabitusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Intent::ALL
            .into_iter()
            .find(|i| i.as_str() == s)
            .ok_or_else(|| HabitusError::UnknownValue {
                kind: "intent",
                value: s.to_string(),
            })
    }
}

/// Self-reported social support.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportLevel {
    Weak,
    #[default]
    Normal,
    Strong,
}

impl SupportLevel {
    pub const ALL: [SupportLevel; 3] = [
        SupportLevel::Weak,
        SupportLevel::Normal,
        SupportLevel::Strong,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SupportLevel::Weak => "weak",
            SupportLevel::Normal => "normal",
            SupportLevel::Strong => "strong",
        }
    }

    pub fn is_weak(&self) -> bool {
        matches!(self, SupportLevel::Weak)
    }
}

impl fmt::Display for SupportLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SupportLevel {
    type Err = HabitusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SupportLevel::ALL
            .into_iter()
            .find(|l| l.as_str() == s)
            .ok_or_else(|| HabitusError::UnknownValue {
                kind: "support level",
                value: s.to_string(),
            })
    }
}

/// Onboarding answers a template is generated for.
///
/// `motivations` is an ordered sequence, not a set: its order feeds the
/// fingerprint. The serialized form uses the mobile client's field names.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Profile {
    pub intent: Intent,
    pub motivations: Vec<String>,
    pub challenge: String,
    #[serde(rename = "supportLevel", default)]
    pub support_level: SupportLevel,
    #[serde(rename = "spiritualMaturity", alias = "maturity", default)]
    pub maturity: Option<String>,
}

impl Profile {
    pub fn new(
        intent: Intent,
        motivations: impl IntoIterator<Item = impl Into<String>>,
        challenge: impl Into<String>,
    ) -> Self {
        Self {
            intent,
            motivations: motivations.into_iter().map(Into::into).collect(),
            challenge: challenge.into(),
            support_level: SupportLevel::default(),
            maturity: None,
        }
    }

    pub fn with_maturity(mut self, maturity: impl Into<String>) -> Self {
        self.maturity = Some(maturity.into());
        self
    }

    pub fn with_support(mut self, level: SupportLevel) -> Self {
        self.support_level = level;
        self
    }

    /// Spiritual maturity, with an empty string treated as absent.
    pub fn maturity(&self) -> Option<&str> {
        self.maturity.as_deref().filter(|m| !m.is_empty())
    }

    /// Reject malformed profiles before any scoring runs.
    pub fn validate(&self) -> HabitusResult<()> {
        if self.motivations.is_empty() {
            return Err(HabitusError::InvalidProfile(
                "at least one motivation is required".into(),
            ));
        }
        if let Some(pos) = self.motivations.iter().position(|m| m.trim().is_empty()) {
            return Err(HabitusError::InvalidProfile(format!(
                "motivation #{pos} is blank"
            )));
        }
        if self.challenge.trim().is_empty() {
            return Err(HabitusError::InvalidProfile("challenge is blank".into()));
        }
        match (self.intent.involves_faith(), self.maturity()) {
            (true, None) => Err(HabitusError::InvalidProfile(format!(
                "intent {} requires a spiritual maturity",
                self.intent
            ))),
            (false, Some(m)) => Err(HabitusError::InvalidProfile(format!(
                "intent {} must not carry a spiritual maturity (got {m})",
                self.intent
            ))),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn faith() -> Profile {
        Profile::new(Intent::FaithBased, ["closerToGod"], "lackOfTime").with_maturity("new")
    }

    #[test]
    fn valid_profiles_pass() {
        assert!(faith().validate().is_ok());
        assert!(Profile::new(Intent::Wellness, ["betterSleep"], "givingUp")
            .validate()
            .is_ok());
    }

    #[test]
    fn empty_motivations_rejected() {
        let p = Profile::new(Intent::Wellness, Vec::<String>::new(), "givingUp");
        assert!(matches!(p.validate(), Err(HabitusError::InvalidProfile(_))));
    }

    #[test]
    fn blank_challenge_rejected() {
        let mut p = faith();
        p.challenge = "  ".into();
        assert!(p.validate().is_err());
    }

    #[test]
    fn maturity_must_agree_with_intent() {
        let missing = Profile::new(Intent::Both, ["closerToGod"], "lackOfTime");
        assert!(missing.validate().is_err());

        let empty = Profile::new(Intent::Both, ["closerToGod"], "lackOfTime").with_maturity("");
        assert!(empty.validate().is_err());

        let extra =
            Profile::new(Intent::Wellness, ["reduceStress"], "lackOfTime").with_maturity("new");
        assert!(extra.validate().is_err());

        let wellness_empty =
            Profile::new(Intent::Wellness, ["reduceStress"], "lackOfTime").with_maturity("");
        assert!(wellness_empty.validate().is_ok());
        assert_eq!(wellness_empty.maturity(), None);
    }

    #[test]
    fn serializes_client_field_names() {
        let value = serde_json::to_value(faith().with_support(SupportLevel::Weak)).unwrap();
        assert_eq!(value["intent"], "faithBased");
        assert_eq!(value["supportLevel"], "weak");
        assert_eq!(value["spiritualMaturity"], "new");
    }

    #[test]
    fn accepts_maturity_alias_and_defaults_support() {
        let p: Profile = serde_json::from_str(
            r#"{"intent":"both","motivations":["a","b"],"challenge":"givingUp","maturity":"growing"}"#,
        )
        .unwrap();
        assert_eq!(p.maturity(), Some("growing"));
        assert_eq!(p.support_level, SupportLevel::Normal);
        assert_eq!(p.motivations, vec!["a", "b"]);
    }

    #[test]
    fn intent_parses() {
        assert_eq!("faithBased".parse::<Intent>().unwrap(), Intent::FaithBased);
        assert!("faith".parse::<Intent>().is_err());
        assert_eq!("weak".parse::<SupportLevel>().unwrap(), SupportLevel::Weak);
    }
}
