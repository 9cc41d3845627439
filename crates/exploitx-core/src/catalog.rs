//! Challenge catalog.
//!
//! The catalog is static display data embedded at compile time. Flags are
//! parsed so the catalog can be validated, but they are never serialized.

use std::collections::HashSet;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

/// Prefix every flag in the event starts with.
pub const FLAG_PREFIX: &str = "ISTEHITSC{";

fn builtin_catalog_toml() -> &'static str {
    include_str!("../challenges.toml")
}

/// A single challenge entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Challenge {
    pub id: u32,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing)]
    pub flag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    pub point: u32,
}

impl Challenge {
    /// Attachment path, if the challenge ships an image or a file.
    pub fn attachment(&self) -> Option<&str> {
        self.img.as_deref().or(self.file.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    challenge: Vec<Challenge>,
}

/// Ordered list of challenges.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    challenges: Vec<Challenge>,
}

impl Catalog {
    /// Loads the catalog shipped with the binary.
    pub fn builtin() -> Result<Self> {
        Self::parse(builtin_catalog_toml()).context("Failed to parse built-in challenge catalog")
    }

    /// Parses and validates a catalog document.
    pub fn parse(contents: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(contents)?;
        let mut seen = HashSet::new();
        for challenge in &file.challenge {
            if !seen.insert(challenge.id) {
                bail!("Duplicate challenge id {}", challenge.id);
            }
            if !(challenge.flag.starts_with(FLAG_PREFIX) && challenge.flag.ends_with('}')) {
                bail!(
                    "Challenge {} ({}) has a flag outside the {FLAG_PREFIX}...}} format",
                    challenge.id,
                    challenge.title
                );
            }
        }
        Ok(Self {
            challenges: file.challenge,
        })
    }

    pub fn challenges(&self) -> &[Challenge] {
        &self.challenges
    }

    pub fn get(&self, id: u32) -> Option<&Challenge> {
        self.challenges.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.challenges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.challenges.is_empty()
    }

    pub fn total_points(&self) -> u32 {
        self.challenges.iter().map(|c| c.point).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_loads_in_order() {
        let catalog = Catalog::builtin().unwrap();
        let ids: Vec<u32> = catalog.challenges().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(catalog.total_points(), 220);
        assert_eq!(catalog.get(4).unwrap().title, "Cryptic Legacy");
    }

    #[test]
    fn test_attachment_prefers_image() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(
            catalog.get(1).unwrap().attachment(),
            Some("/assets/BehindTheJPG/hii.jpg")
        );
        assert_eq!(
            catalog.get(4).unwrap().attachment(),
            Some("/assets/InsideTheFolder/unlockIt.zip")
        );
        assert_eq!(catalog.get(2).unwrap().attachment(), None);
    }

    #[test]
    fn test_serialized_catalog_hides_flags() {
        let catalog = Catalog::builtin().unwrap();
        let json = serde_json::to_string(catalog.challenges()).unwrap();
        assert!(!json.contains(FLAG_PREFIX));
        assert!(json.contains("BehindTheJPG"));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let doc = r#"
[[challenge]]
id = 1
title = "a"
description = "a"
flag = "ISTEHITSC{a}"
point = 1

[[challenge]]
id = 1
title = "b"
description = "b"
flag = "ISTEHITSC{b}"
point = 1
"#;
        let err = Catalog::parse(doc).unwrap_err();
        assert!(err.to_string().contains("Duplicate challenge id 1"));
    }

    #[test]
    fn test_bad_flag_format_rejected() {
        let doc = r#"
[[challenge]]
id = 1
title = "a"
description = "a"
flag = "flag{a}"
point = 1
"#;
        assert!(Catalog::parse(doc).is_err());
    }
}
