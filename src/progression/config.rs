use std::fs;

use bevy::prelude::*;
use serde::Deserialize;

use crate::core::config::config_path;

use super::{
    milestones::{Milestone, MilestoneTable},
    tiers::{default_tier_names, TierName, TierTable, DEFAULT_BAND_WIDTH},
};

const CONFIG_FILE: &str = "progression.toml";

#[derive(Debug, Clone, Deserialize)]
struct RawProgressionConfig {
    #[serde(default)]
    tiers: RawTiers,
    #[serde(default = "default_raw_milestones")]
    milestones: Vec<RawMilestone>,
}

impl Default for RawProgressionConfig {
    fn default() -> Self {
        Self {
            tiers: RawTiers::default(),
            milestones: default_raw_milestones(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawTiers {
    band_width: u64,
    names: Vec<RawTierName>,
}

impl Default for RawTiers {
    fn default() -> Self {
        Self {
            band_width: DEFAULT_BAND_WIDTH,
            names: default_tier_names()
                .into_iter()
                .map(|tier| RawTierName {
                    name: tier.name,
                    description: tier.description,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct RawTierName {
    name: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Clone, Deserialize)]
struct RawMilestone {
    name: String,
    #[serde(default)]
    description: String,
    level: u64,
}

fn default_raw_milestones() -> Vec<RawMilestone> {
    MilestoneTable::default()
        .iter()
        .map(|milestone| RawMilestone {
            name: milestone.name.clone(),
            description: milestone.description.clone(),
            level: milestone.required_level,
        })
        .collect()
}

/// Runtime labelling tables derived from `config/progression.toml`.
#[derive(Resource, Debug, Clone, Default)]
pub struct ProgressionConfig {
    pub tiers: TierTable,
    pub milestones: MilestoneTable,
}

impl ProgressionConfig {
    pub fn load_or_default() -> Self {
        let path = config_path(CONFIG_FILE);
        match fs::read_to_string(&path) {
            Ok(raw) => match toml::from_str::<RawProgressionConfig>(&raw) {
                Ok(parsed) => parsed.into(),
                Err(err) => {
                    warn!(
                        "Failed to parse {} ({}). Falling back to defaults.",
                        path.display(),
                        err
                    );
                    RawProgressionConfig::default().into()
                }
            },
            Err(err) => {
                warn!(
                    "Failed to read {} ({}). Falling back to defaults.",
                    path.display(),
                    err
                );
                RawProgressionConfig::default().into()
            }
        }
    }
}

impl From<RawProgressionConfig> for ProgressionConfig {
    fn from(value: RawProgressionConfig) -> Self {
        let names: Vec<TierName> = value
            .tiers
            .names
            .into_iter()
            .filter_map(|tier| {
                let name = tier.name.trim();
                if name.is_empty() {
                    None
                } else {
                    Some(TierName::new(name, tier.description.trim()))
                }
            })
            .collect();

        let milestones = value
            .milestones
            .into_iter()
            .filter(|milestone| !milestone.name.trim().is_empty())
            .map(|milestone| {
                Milestone::new(
                    milestone.name.trim(),
                    milestone.description.trim(),
                    milestone.level,
                )
            })
            .collect();

        Self {
            tiers: TierTable::new(value.tiers.band_width, names),
            milestones: MilestoneTable::new(milestones),
        }
    }
}
