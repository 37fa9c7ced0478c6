//! Tunables for the star map: camera limits, parallax weights, layout radii
//! and the text-generation endpoint.

/// Smallest allowed camera scale.
pub const MIN_SCALE: f64 = 0.5;
/// Largest allowed camera scale.
pub const MAX_SCALE: f64 = 3.0;
/// Scale change per wheel delta unit.
pub const WHEEL_SENSITIVITY: f64 = 0.001;
/// Scale change per zoom button press.
pub const BUTTON_ZOOM_STEP: f64 = 0.2;

// Parallax weights applied at draw time.
pub const GALAXY_PAN_WEIGHT: f64 = 0.2;
pub const GALAXY_SCALE_WEIGHT: f64 = 0.5;
pub const DUST_PAN_WEIGHT: f64 = 0.5;
/// Galaxy rotation in radians per millisecond of wall-clock time.
pub const GALAXY_SPIN_PER_MS: f64 = 0.000_05;

pub const DUST_PARTICLE_COUNT: usize = 400;
/// Dust lives in a square of this side length centred on the world origin.
pub const DUST_FIELD_EXTENT: f64 = 4000.0;
pub const DUST_MAX_SIZE: f64 = 1.5;
pub const DUST_MAX_ALPHA: f64 = 0.8;

pub const GALAXY_ARMS: usize = 3;
pub const GALAXY_SPOTS_PER_ARM: usize = 5;

pub const SKY_BASE: &str = "#020617";
pub const SKY_INNER: &str = "#0f172a";
pub const SKY_OUTER: &str = "#000000";

/// Viewport widths (CSS px) separating narrow / medium / wide layouts.
pub const NARROW_MAX_WIDTH: f64 = 640.0;
pub const MEDIUM_MAX_WIDTH: f64 = 1024.0;

/// Distance (in % of the viewport) from the centre to each cluster centre.
pub const CLUSTER_CENTER_RADIUS: [f64; 3] = [22.0, 28.0, 32.0];
/// Distance (in %) from a cluster centre to its members.
pub const CLUSTER_MEMBER_RADIUS: [f64; 3] = [10.0, 12.0, 14.0];

/// Fraction of ambient stars shown per viewport bucket.
pub const AMBIENT_DENSITY: [f64; 3] = [0.6, 0.8, 1.0];
pub const HIGH_DPR_THRESHOLD: f64 = 1.5;
pub const HIGH_DPR_DENSITY: f64 = 0.85;
pub const AMBIENT_STAR_COUNT: usize = 40;

pub const QUOTE_ROTATE_MS: u32 = 8000;
pub const QUOTE_FADE_MS: u32 = 800;

const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Where and how to reach the text-generation service.
#[derive(Clone, Debug, PartialEq)]
pub struct TextGenConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub endpoint: String,
}

impl TextGenConfig {
    /// Resolve from the build environment. `GEMINI_API_KEY` wins over `API_KEY`.
    pub fn from_build_env() -> Self {
        let key = option_env!("GEMINI_API_KEY").or(option_env!("API_KEY"));
        Self::with_key(key)
    }

    pub fn with_key(key: Option<&str>) -> Self {
        let api_key = key
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_owned);
        Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    pub fn generate_url(&self, key: &str) -> String {
        format!(
            "{}/{}:generateContent?key={}",
            self.endpoint.trim_end_matches('/'),
            self.model,
            key
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_key_counts_as_missing() {
        assert_eq!(TextGenConfig::with_key(Some("   ")).api_key, None);
        assert_eq!(TextGenConfig::with_key(None).api_key, None);
        assert_eq!(
            TextGenConfig::with_key(Some(" abc ")).api_key.as_deref(),
            Some("abc")
        );
    }

    #[test]
    fn url_names_model_and_key() {
        let cfg = TextGenConfig::with_key(Some("k"));
        assert_eq!(
            cfg.generate_url("k"),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent?key=k"
        );
    }
}
