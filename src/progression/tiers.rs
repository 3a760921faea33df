//! Named tier bands used to label levels (avatar evolution titles).
use serde::Serialize;

pub const DEFAULT_BAND_WIDTH: u64 = 10;

const DEFAULT_TIERS: [(&str, &str); 6] = [
    (
        "Student Builder",
        "Just starting your entrepreneurial journey",
    ),
    (
        "Startup Hustler",
        "Grinding hard to make your dreams reality",
    ),
    ("Startup Founder", "Ready to launch and scale your business"),
    (
        "CEO & Founder",
        "Leading a successful company to new heights",
    ),
    (
        "Venture Capitalist",
        "Now funding the next generation of startups",
    ),
    (
        "Startup Legend",
        "The ultimate entrepreneur - a legend in the startup world",
    ),
];

/// Display label for one tier band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierName {
    pub name: String,
    pub description: String,
}

impl TierName {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Classification of a level into a tier band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierDescriptor {
    pub index: usize,
    pub name: String,
    pub description: String,
    pub min_level: u64,
    /// `None` for the open-ended last tier.
    pub max_level: Option<u64>,
}

impl TierDescriptor {
    pub fn is_final(&self) -> bool {
        self.max_level.is_none()
    }
}

/// Fixed-width, non-overlapping level bands starting at level 1.
///
/// The last entry catches every level past the highest defined band.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierTable {
    band_width: u64,
    tiers: Vec<TierName>,
}

impl TierTable {
    /// Builds a table, falling back to the defaults for an empty name list
    /// and to a width of one for a zero band width.
    pub fn new(band_width: u64, tiers: Vec<TierName>) -> Self {
        let tiers = if tiers.is_empty() {
            default_tier_names()
        } else {
            tiers
        };
        Self {
            band_width: band_width.max(1),
            tiers,
        }
    }

    pub fn band_width(&self) -> u64 {
        self.band_width
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    /// Tier for `level`. Level 0 is treated as level 1.
    pub fn tier_for(&self, level: u64) -> TierDescriptor {
        let band = level.saturating_sub(1) / self.band_width;
        let last = self.tiers.len() - 1;
        let index = usize::try_from(band).map_or(last, |band| band.min(last));
        self.descriptor(index)
    }

    /// The tier a user at `level` evolves into next, or `None` in the final tier.
    pub fn next_tier_preview(&self, level: u64) -> Option<TierDescriptor> {
        let current = self.tier_for(level);
        if current.is_final() {
            None
        } else {
            Some(self.descriptor(current.index + 1))
        }
    }

    fn descriptor(&self, index: usize) -> TierDescriptor {
        let tier = &self.tiers[index];
        let min_level = (index as u64)
            .saturating_mul(self.band_width)
            .saturating_add(1);
        let max_level = if index + 1 == self.tiers.len() {
            None
        } else {
            Some(min_level.saturating_add(self.band_width - 1))
        };

        TierDescriptor {
            index,
            name: tier.name.clone(),
            description: tier.description.clone(),
            min_level,
            max_level,
        }
    }
}

impl Default for TierTable {
    fn default() -> Self {
        Self::new(DEFAULT_BAND_WIDTH, default_tier_names())
    }
}

pub fn default_tier_names() -> Vec<TierName> {
    DEFAULT_TIERS
        .iter()
        .map(|(name, description)| TierName::new(*name, *description))
        .collect()
}

/// Classifies `level` with the default tier table.
#[cfg_attr(not(test), allow(dead_code))]
pub fn level_tier(level: u64) -> TierDescriptor {
    TierTable::default().tier_for(level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_ten_levels_share_the_first_tier() {
        let first = level_tier(1);
        assert_eq!(first.index, 0);
        assert_eq!(first.name, "Student Builder");
        assert_eq!(first.min_level, 1);
        assert_eq!(first.max_level, Some(10));

        for level in 2..=10 {
            assert_eq!(level_tier(level), first);
        }

        let second = level_tier(11);
        assert_eq!(second.index, 1);
        assert_eq!(second.name, "Startup Hustler");
        assert_eq!(second.min_level, 11);
    }

    #[test]
    fn levels_past_the_last_band_use_the_catch_all() {
        let legend = level_tier(51);
        assert_eq!(legend.name, "Startup Legend");
        assert!(legend.is_final());

        assert_eq!(level_tier(10_000), legend);
        assert_eq!(level_tier(u64::MAX), legend);
    }

    #[test]
    fn level_zero_maps_to_first_tier() {
        assert_eq!(level_tier(0).index, 0);
    }

    #[test]
    fn next_tier_preview_stops_at_final_tier() {
        let table = TierTable::default();
        let preview = table.next_tier_preview(3).expect("not final");
        assert_eq!(preview.name, "Startup Hustler");
        assert!(table.next_tier_preview(60).is_none());
    }

    #[test]
    fn custom_table_sanitises_inputs() {
        let table = TierTable::new(0, Vec::new());
        assert_eq!(table.band_width(), 1);
        assert_eq!(table.len(), DEFAULT_TIERS.len());
        assert_eq!(table.tier_for(2).index, 1);

        let table = TierTable::new(
            5,
            vec![TierName::new("Rookie", ""), TierName::new("Pro", "")],
        );
        assert_eq!(table.tier_for(5).name, "Rookie");
        assert_eq!(table.tier_for(6).name, "Pro");
        assert_eq!(table.tier_for(600).name, "Pro");
    }
}
