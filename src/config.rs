use thiserror::Error;

use crate::rule_set::RuleSet;
use crate::rule_set::RuleSetError;

/// Rulestring to simulate, like `B3/S23`
pub const RULE_VAR: &str = "LIFE_RULE";

/// Starting cell size, in pixels. Must be one of [`Config::cell_sizes`]
pub const CELL_SIZE_VAR: &str = "LIFE_CELL_SIZE";

/// Starting speed, in generations per second. Must be one of [`Config::speeds`]
pub const SPEED_VAR: &str = "LIFE_SPEED";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid LIFE_RULE: {0}")]
    Rule(#[from] RuleSetError),

    #[error("Invalid {var}: expected one of {choices:?}, got \"{got}\"")]
    NotAChoice {
        var: &'static str,
        choices: Vec<usize>,
        got: String,
    },

    #[error("At least one {0} is required")]
    Empty(&'static str),

    #[error("{what} must be greater than zero")]
    Zero { what: &'static str },

    #[error("{what} index {index} is out of range for {len} choices")]
    IndexOutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },

    #[error("A stroke of {stroke} would hide cells of size {cell_size}")]
    StrokeTooWide { stroke: usize, cell_size: usize },
}

/// Everything a [`crate::simulation::Simulation`] needs to start.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// `(width, height)` of the drawing area, in pixels
    pub display: (usize, usize),

    /// Selectable cell sizes in pixels, smallest first
    pub cell_sizes: Vec<usize>,
    pub cell_size_index: usize,

    /// Selectable speeds in generations per second, slowest first
    pub speeds: Vec<u32>,
    pub speed_index: usize,

    /// Gap in pixels left between neighboring cells when drawn
    pub stroke: usize,

    pub rule: RuleSet,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // An 80x24 terminal, less the title line, in braille dots
            display: (160, 92),
            // At least 4 dots, the height of one terminal character, so a click can reach every
            // row of cells
            cell_sizes: vec![4, 6, 8, 12, 16],
            cell_size_index: 0,
            speeds: vec![1, 3, 5, 10, 20, 30],
            speed_index: 1,
            stroke: 1,
            rule: RuleSet::default(),
        }
    }
}

impl Config {
    /// Defaults, overridden by the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults, overridden by whatever `lookup` returns for [`RULE_VAR`], [`CELL_SIZE_VAR`] and
    /// [`SPEED_VAR`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(rule) = lookup(RULE_VAR) {
            config.rule = rule.parse()?;
        }

        if let Some(size) = lookup(CELL_SIZE_VAR) {
            config.cell_size_index = choice(CELL_SIZE_VAR, &config.cell_sizes, &size)?;
        }

        if let Some(speed) = lookup(SPEED_VAR) {
            let speeds: Vec<usize> = config.speeds.iter().map(|&s| s as usize).collect();
            config.speed_index = choice(SPEED_VAR, &speeds, &speed)?;
        }

        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_sizes.is_empty() {
            return Err(ConfigError::Empty("cell size"));
        }

        if self.speeds.is_empty() {
            return Err(ConfigError::Empty("speed"));
        }

        if self.cell_sizes.contains(&0) {
            return Err(ConfigError::Zero { what: "Cell size" });
        }

        if self.speeds.contains(&0) {
            return Err(ConfigError::Zero { what: "Speed" });
        }

        if self.cell_size_index >= self.cell_sizes.len() {
            return Err(ConfigError::IndexOutOfRange {
                what: "Cell size",
                index: self.cell_size_index,
                len: self.cell_sizes.len(),
            });
        }

        if self.speed_index >= self.speeds.len() {
            return Err(ConfigError::IndexOutOfRange {
                what: "Speed",
                index: self.speed_index,
                len: self.speeds.len(),
            });
        }

        if let Some(&cell_size) = self.cell_sizes.iter().find(|&&s| s <= self.stroke) {
            return Err(ConfigError::StrokeTooWide {
                stroke: self.stroke,
                cell_size,
            });
        }

        Ok(())
    }
}

/// Index of `got` in `choices`
fn choice(var: &'static str, choices: &[usize], got: &str) -> Result<usize, ConfigError> {
    let not_a_choice = || ConfigError::NotAChoice {
        var,
        choices: choices.to_vec(),
        got: got.to_string(),
    };

    let n: usize = got.trim().parse().map_err(|_| not_a_choice())?;

    choices.iter().position(|&c| c == n).ok_or_else(not_a_choice)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::CELL_SIZE_VAR;
    use super::Config;
    use super::ConfigError;
    use super::RULE_VAR;
    use super::SPEED_VAR;
    use crate::rule_set::B3S23;

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        let vars: HashMap<_, _> = vars.iter().copied().collect();

        move |key: &str| vars.get(key).map(|v| v.to_string())
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();

        assert!(config.validate().is_ok());
        assert_eq!(config.rule, B3S23);
        assert_eq!(config.cell_sizes[config.cell_size_index], 4);
        assert_eq!(config.speeds[config.speed_index], 3);
    }

    #[test]
    fn test_no_overrides() -> anyhow::Result<()> {
        assert_eq!(Config::from_lookup(lookup(&[]))?, Config::default());

        Ok(())
    }

    #[test]
    fn test_overrides() -> anyhow::Result<()> {
        let config = Config::from_lookup(lookup(&[
            (RULE_VAR, "B36/S23"),
            (CELL_SIZE_VAR, "16"),
            (SPEED_VAR, " 10 "),
        ]))?;

        assert_eq!(config.rule.to_string(), "B36/S23");
        assert_eq!(config.cell_size_index, 4);
        assert_eq!(config.speed_index, 3);

        Ok(())
    }

    #[test]
    fn test_bad_overrides() {
        let res = Config::from_lookup(lookup(&[(CELL_SIZE_VAR, "5")]));
        assert!(matches!(res, Err(ConfigError::NotAChoice { got, .. }) if got == "5"));

        let res = Config::from_lookup(lookup(&[(SPEED_VAR, "fast")]));
        assert!(matches!(res, Err(ConfigError::NotAChoice { .. })));

        let res = Config::from_lookup(lookup(&[(RULE_VAR, "23/3")]));
        assert!(matches!(res, Err(ConfigError::Rule(_))));
    }

    #[test]
    fn test_validate() {
        let config = Config {
            stroke: 4,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::StrokeTooWide {
                stroke: 4,
                cell_size: 4
            })
        ));

        let config = Config {
            speeds: vec![],
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Empty("speed"))));

        let config = Config {
            cell_size_index: 9,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::IndexOutOfRange { index: 9, .. })
        ));

        let config = Config {
            cell_sizes: vec![0, 4],
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Zero { .. })));
    }
}
