use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

use crate::grid::Grid;

pub type Rgb = (u8, u8, u8);

const MIN_CELLS: u32 = 5;
const MAX_CELLS: u32 = 200;
const MAX_TICKS_PER_SECOND: u32 = 60;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: Rgb,
    pub border: Rgb,
    pub food: Rgb,
    pub snake: Rgb,
    pub head: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            background: (0, 0, 0),
            border: (93, 216, 228),
            food: (255, 0, 0),
            snake: (0, 255, 0),
            head: (0, 200, 0),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub screen_width: u32,
    pub screen_height: u32,
    pub cell_size: u32,
    pub ticks_per_second: u32,
    /// Keep food off the snake's body when relocating it.
    pub food_avoids_snake: bool,
    pub seed: Option<u64>,
    pub palette: Palette,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            screen_width: 640,
            screen_height: 480,
            cell_size: 20,
            ticks_per_second: 8,
            food_avoids_snake: false,
            seed: None,
            palette: Palette::default(),
        }
    }
}

impl Settings {
    pub fn from_yaml(content: &str) -> Result<Self> {
        let settings: Settings =
            serde_yaml_ng::from_str(content).context("Failed to deserialize settings")?;
        settings
            .validate()
            .map_err(|e| anyhow!("Settings validation error: {}", e))?;
        Ok(settings)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        Self::from_yaml(&content)
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml_ng::to_string(self).context("Failed to serialize settings")
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_yaml()?)
            .with_context(|| format!("Failed to write settings file {}", path.display()))
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.cell_size == 0 {
            return Err("Cell size must be at least 1".to_string());
        }
        let (w, h) = (self.screen_width / self.cell_size, self.screen_height / self.cell_size);
        if !(MIN_CELLS..=MAX_CELLS).contains(&w) || !(MIN_CELLS..=MAX_CELLS).contains(&h) {
            return Err(format!(
                "Board must be between {min} and {max} cells on each side, got {w}x{h}",
                min = MIN_CELLS,
                max = MAX_CELLS,
            ));
        }
        if !(1..=MAX_TICKS_PER_SECOND).contains(&self.ticks_per_second) {
            return Err(format!(
                "Ticks per second must be between 1 and {}",
                MAX_TICKS_PER_SECOND
            ));
        }
        Ok(())
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.screen_width, self.screen_height, self.cell_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_board() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        let grid = settings.grid();
        assert_eq!((grid.width(), grid.height()), (32, 24));
        assert_eq!(settings.ticks_per_second, 8);
        assert!(!settings.food_avoids_snake);
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let yaml = "ticks_per_second: 12\nseed: 77\npalette:\n  food: [1, 2, 3]\n";
        let settings = Settings::from_yaml(yaml).unwrap();
        assert_eq!(settings.ticks_per_second, 12);
        assert_eq!(settings.seed, Some(77));
        assert_eq!(settings.palette.food, (1, 2, 3));
        assert_eq!(settings.palette.border, (93, 216, 228));
        assert_eq!(settings.screen_width, 640);
    }

    #[test]
    fn empty_yaml_is_default() {
        assert_eq!(Settings::from_yaml("{}").unwrap(), Settings::default());
    }

    #[test]
    fn written_settings_load_back() {
        let settings = Settings {
            ticks_per_second: 10,
            food_avoids_snake: true,
            seed: Some(9),
            ..Settings::default()
        };
        let yaml = settings.to_yaml().unwrap();
        assert!(yaml.contains("food_avoids_snake: true"));
        assert_eq!(Settings::from_yaml(&yaml).unwrap(), settings);
    }

    #[test]
    fn rejects_bad_values() {
        let mut settings = Settings { cell_size: 0, ..Settings::default() };
        assert!(settings.validate().is_err());

        settings = Settings { cell_size: 200, ..Settings::default() };
        assert!(settings.validate().is_err());

        settings = Settings { ticks_per_second: 0, ..Settings::default() };
        assert!(settings.validate().is_err());

        settings = Settings { ticks_per_second: 61, ..Settings::default() };
        assert!(settings.validate().is_err());

        assert!(Settings::from_yaml("cell_size: 0").is_err());
        assert!(Settings::from_yaml("cell_size: [").is_err());
    }
}
