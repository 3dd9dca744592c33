use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub title: String,
    pub toast_duration_ms: u64,
    pub chip_elevation: f32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            title: "Compose Chip Groups".to_string(),
            toast_duration_ms: 2_000,
            chip_elevation: 2.0,
        }
    }
}

impl AppSettings {
    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }

    /// Elevation with negative values clamped to a flat surface.
    pub fn elevation(&self) -> f32 {
        self.chip_elevation.max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let s: AppSettings = serde_json::from_str(r#"{ "title": "Fruit" }"#).unwrap();
        assert_eq!(s.title, "Fruit");
        assert_eq!(s.toast_duration(), Duration::from_secs(2));
        assert_eq!(s.chip_elevation, 2.0);
    }

    #[test]
    fn negative_elevation_is_flattened() {
        let s = AppSettings {
            chip_elevation: -3.0,
            ..Default::default()
        };
        assert_eq!(s.elevation(), 0.0);
    }
}
