//! Deciding which percentage applies to a record, and scaling values by it.

use crate::config::{CategoryModifiers, ModConfig};
use crate::record::{RitpowNames, Ritual};

/// What to do with one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// The record would come out unchanged, so it is left out of the mod.
    Skip,
    /// Scale the record's values to this percentage.
    Apply(u32),
}

impl Decision {
    fn from_percent(percent: u32) -> Self {
        if percent == 100 {
            Decision::Skip
        } else {
            Decision::Apply(percent)
        }
    }
}

/// Combine a category percentage with a level percentage. The result is rounded down.
#[allow(clippy::integer_division)]
pub fn combine(category: u32, level: u32) -> u32 {
    let combined = u64::from(category) * u64::from(level) / 100;
    u32::try_from(combined).unwrap_or(u32::MAX)
}

/// Scale `value` to `percent` of itself, rounding up. The result is never less than 1.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn scale(value: u32, percent: f64) -> u32 {
    let scaled = (f64::from(value) * percent / 100.0).ceil();
    if scaled < 1.0 {
        1
    } else if scaled >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        scaled as u32
    }
}

/// Works out the percentages for records, according to one configuration.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    config: &'a ModConfig,
    ritpows: &'a RitpowNames,
}

impl<'a> Resolver<'a> {
    pub fn new(config: &'a ModConfig, ritpows: &'a RitpowNames) -> Self {
        Resolver { config, ritpows }
    }

    pub fn config(&self) -> &'a ModConfig {
        self.config
    }

    /// The percentage for the ritual's category, before the level is taken into account.
    pub fn category_percent(&self, ritual: &Ritual) -> u32 {
        match &self.config.categories {
            CategoryModifiers::Flat { default, ritpow_modifiers } => ritual
                .ritpow
                .and_then(|id| ritpow_modifiers.get(&id))
                .copied()
                .unwrap_or(*default),
            CategoryModifiers::Tiered { tiers, class_tiers } => ritual
                .ritpow
                .and_then(|id| self.ritpows.get(id))
                .and_then(|class| class_tiers.get(class))
                .and_then(|tier| tiers.get(tier))
                .copied()
                .unwrap_or(100),
        }
    }

    pub fn level_percent(&self, ritual: &Ritual) -> u32 {
        ritual
            .level
            .and_then(|level| self.config.level_modifiers.get(&level))
            .copied()
            .unwrap_or(100)
    }

    pub fn effective_percent(&self, ritual: &Ritual) -> u32 {
        combine(self.category_percent(ritual), self.level_percent(ritual))
    }

    pub fn ritual(&self, ritual: &Ritual) -> Decision {
        Decision::from_percent(self.effective_percent(ritual))
    }

    /// All monsters share one spawn percentage.
    pub fn spawn(&self) -> Decision {
        Decision::from_percent(self.config.spawn_modifier)
    }
}
