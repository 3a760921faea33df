//! Level milestones (avatar achievements).
use serde::Serialize;

const DEFAULT_MILESTONES: [(&str, &str, u64); 5] = [
    ("First Steps", "Complete your first task", 1),
    ("Getting Serious", "Reach level 5", 5),
    ("Startup Hustler", "Reach level 10", 10),
    ("Business Leader", "Reach level 20", 20),
    ("Industry Legend", "Reach level 40", 40),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Milestone {
    pub name: String,
    pub description: String,
    pub required_level: u64,
}

impl Milestone {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        required_level: u64,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            required_level: required_level.max(1),
        }
    }

    pub fn is_unlocked_at(&self, level: u64) -> bool {
        level >= self.required_level
    }
}

/// Milestones ordered by required level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MilestoneTable {
    milestones: Vec<Milestone>,
}

impl MilestoneTable {
    pub fn new(mut milestones: Vec<Milestone>) -> Self {
        milestones.sort_by_key(|milestone| milestone.required_level);
        Self { milestones }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Milestone> {
        self.milestones.iter()
    }

    pub fn unlocked(&self, level: u64) -> Vec<Milestone> {
        self.milestones
            .iter()
            .filter(|milestone| milestone.is_unlocked_at(level))
            .cloned()
            .collect()
    }

    /// Milestones unlocked by moving from `previous_level` to `new_level`.
    pub fn crossed(&self, previous_level: u64, new_level: u64) -> Vec<Milestone> {
        self.milestones
            .iter()
            .filter(|milestone| {
                !milestone.is_unlocked_at(previous_level) && milestone.is_unlocked_at(new_level)
            })
            .cloned()
            .collect()
    }
}

impl Default for MilestoneTable {
    fn default() -> Self {
        Self::new(
            DEFAULT_MILESTONES
                .iter()
                .map(|(name, description, level)| Milestone::new(*name, *description, *level))
                .collect(),
        )
    }
}
