//! Configuration for the neonfolio terminal portfolio.
//!
//! Loads `neonfolio.toml` from the platform config directory. A missing
//! file is not an error: the embedded defaults carry a complete profile
//! and skill catalog. Core types are not serde-aware, so this crate
//! deserializes its own raw document and converts at the boundary.

use std::fmt;
use std::io::ErrorKind;

use directories::ProjectDirs;
use neonfolio_core::{AnimationSpeed, Rgba, SkillItem};
use serde::Deserialize;

/// Identity shown in the header panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub title: String,
}

/// One titled group of skills with its accent color.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillGroup {
    pub title: String,
    pub accent: Rgba,
    pub skills: Vec<SkillItem>,
}

/// Backdrop tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackgroundSettings {
    pub speed: AnimationSpeed,
    /// Fixed RNG seed; omit for entropy seeding.
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub profile: Profile,
    pub background: BackgroundSettings,
    pub groups: Vec<SkillGroup>,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    BadColor { group: String, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "failed to read config: {e}"),
            Self::Parse(e) => write!(f, "failed to parse config: {e}"),
            Self::BadColor { group, value } => {
                write!(f, "bad accent color {value:?} in skill group {group:?}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::BadColor { .. } => None,
        }
    }
}

impl Config {
    /// Load from the platform config directory, falling back to the
    /// embedded defaults when no file exists.
    pub fn load() -> Result<Self, ConfigError> {
        let Some(dirs) = ProjectDirs::from("", "", "neonfolio") else {
            return Ok(Self::default());
        };
        let path = dirs.config_dir().join("neonfolio.toml");
        match std::fs::read_to_string(&path) {
            Ok(text) => Self::from_toml(&text),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("no config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(ConfigError::Io(e)),
        }
    }

    /// Parse a config document. Sections and fields are all optional and
    /// default individually; an empty document equals the defaults.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(text).map_err(ConfigError::Parse)?;
        raw.try_into()
    }
}

impl Default for Config {
    fn default() -> Self {
        let group = |title: &str, accent: Rgba, skills: &[(&str, u8)]| SkillGroup {
            title: title.to_string(),
            accent,
            skills: skills
                .iter()
                .map(|&(name, level)| SkillItem::new(name, level))
                .collect(),
        };
        Self {
            profile: Profile {
                name: "Neo Vega".to_string(),
                title: "Creative Technologist".to_string(),
            },
            background: BackgroundSettings {
                speed: AnimationSpeed::Medium,
                seed: None,
            },
            groups: vec![
                group(
                    "Frontend",
                    Rgba::rgb8(34, 211, 238),
                    &[
                        ("React/Next.js", 95),
                        ("TypeScript", 90),
                        ("Three.js/WebGL", 85),
                        ("Tailwind CSS", 92),
                        ("Framer Motion", 88),
                    ],
                ),
                group(
                    "Backend",
                    Rgba::rgb8(244, 114, 182),
                    &[
                        ("Node.js", 90),
                        ("Python", 88),
                        ("PostgreSQL", 85),
                        ("MongoDB", 82),
                        ("GraphQL", 80),
                    ],
                ),
                group(
                    "Tools",
                    Rgba::rgb8(52, 211, 153),
                    &[
                        ("Docker", 85),
                        ("AWS/GCP", 80),
                        ("Git/GitHub", 95),
                        ("Figma", 75),
                        ("Blender", 70),
                    ],
                ),
                group(
                    "AI/ML",
                    Rgba::rgb8(167, 139, 250),
                    &[
                        ("TensorFlow", 85),
                        ("PyTorch", 80),
                        ("OpenCV", 82),
                        ("Hugging Face", 78),
                        ("LangChain", 75),
                    ],
                ),
            ],
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    #[serde(default)]
    profile: Option<RawProfile>,
    #[serde(default)]
    background: Option<RawBackground>,
    #[serde(default, rename = "skill_group")]
    skill_groups: Vec<RawGroup>,
}

#[derive(Debug, Deserialize)]
struct RawProfile {
    name: Option<String>,
    title: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawBackground {
    speed: Option<RawSpeed>,
    seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
enum RawSpeed {
    Slow,
    Medium,
    Fast,
}

impl From<RawSpeed> for AnimationSpeed {
    fn from(raw: RawSpeed) -> Self {
        match raw {
            RawSpeed::Slow => Self::Slow,
            RawSpeed::Medium => Self::Medium,
            RawSpeed::Fast => Self::Fast,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawGroup {
    title: String,
    accent: String,
    #[serde(default)]
    skills: Vec<RawSkill>,
}

#[derive(Debug, Deserialize)]
struct RawSkill {
    name: String,
    level: u8,
}

impl TryFrom<RawConfig> for Config {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, ConfigError> {
        let defaults = Config::default();

        let profile = match raw.profile {
            Some(p) => Profile {
                name: p.name.unwrap_or(defaults.profile.name),
                title: p.title.unwrap_or(defaults.profile.title),
            },
            None => defaults.profile,
        };

        let background = match raw.background {
            Some(b) => BackgroundSettings {
                speed: b.speed.map(Into::into).unwrap_or(AnimationSpeed::Medium),
                seed: b.seed,
            },
            None => defaults.background,
        };

        let groups = if raw.skill_groups.is_empty() {
            defaults.groups
        } else {
            raw.skill_groups
                .into_iter()
                .map(|g| {
                    let accent =
                        Rgba::from_hex(&g.accent).ok_or_else(|| ConfigError::BadColor {
                            group: g.title.clone(),
                            value: g.accent.clone(),
                        })?;
                    Ok(SkillGroup {
                        title: g.title,
                        accent,
                        skills: g
                            .skills
                            .into_iter()
                            .map(|s| SkillItem::new(s.name, s.level))
                            .collect(),
                    })
                })
                .collect::<Result<_, ConfigError>>()?
        };

        Ok(Config {
            profile,
            background,
            groups,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_equals_defaults() {
        let c = Config::from_toml("").unwrap();
        assert_eq!(c, Config::default());
    }

    #[test]
    fn full_document_round_trips() {
        let c = Config::from_toml(
            r##"
            [profile]
            name = "Ada"
            title = "Engineer"

            [background]
            speed = "fast"
            seed = 42

            [[skill_group]]
            title = "Systems"
            accent = "#ff0080"
            skills = [
                { name = "Rust", level = 93 },
                { name = "C", level = 80 },
            ]
            "##,
        )
        .unwrap();

        assert_eq!(c.profile.name, "Ada");
        assert_eq!(c.background.speed, AnimationSpeed::Fast);
        assert_eq!(c.background.seed, Some(42));
        assert_eq!(c.groups.len(), 1);
        assert_eq!(c.groups[0].skills[0], SkillItem::new("Rust", 93));
        assert_eq!(c.groups[0].accent, Rgba::from_hex("#ff0080").unwrap());
    }

    #[test]
    fn partial_profile_keeps_default_title() {
        let c = Config::from_toml("[profile]\nname = \"Ada\"\n").unwrap();
        assert_eq!(c.profile.name, "Ada");
        assert_eq!(c.profile.title, Config::default().profile.title);
    }

    #[test]
    fn bad_accent_color_is_an_error() {
        let err = Config::from_toml(
            "[[skill_group]]\ntitle = \"X\"\naccent = \"neon\"\nskills = []\n",
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::BadColor { .. }));
        assert!(err.to_string().contains("neon"));
    }

    #[test]
    fn unknown_speed_is_a_parse_error() {
        let err = Config::from_toml("[background]\nspeed = \"ludicrous\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn default_catalog_is_complete() {
        let c = Config::default();
        assert_eq!(c.groups.len(), 4);
        assert!(c.groups.iter().all(|g| g.skills.len() == 5));
        assert!(c
            .groups
            .iter()
            .flat_map(|g| &g.skills)
            .all(|s| s.level <= 100));
    }
}
