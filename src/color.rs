use palette::{Hsl, IntoColor, Srgb};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    /// Classic green phosphor radar
    #[default]
    Phosphor,
    Amber,
    Ice,
    Monochrome,
}

impl FromStr for ColorScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "phosphor" | "green" => Ok(Self::Phosphor),
            "amber" => Ok(Self::Amber),
            "ice" => Ok(Self::Ice),
            "mono" | "monochrome" => Ok(Self::Monochrome),
            _ => Err(format!("Unknown color scheme: {}", s)),
        }
    }
}

impl ColorScheme {
    fn base_hue(&self) -> f32 {
        match self {
            ColorScheme::Phosphor => 120.0,
            ColorScheme::Amber => 40.0,
            ColorScheme::Ice => 195.0,
            ColorScheme::Monochrome => 0.0,
        }
    }

    fn saturation(&self) -> f32 {
        match self {
            ColorScheme::Monochrome => 0.0,
            _ => 0.85,
        }
    }

    /// Sweep circle color for a given intensity (0.0 dim to 1.0 bright).
    pub fn sweep_color(&self, intensity: f32) -> (u8, u8, u8) {
        self.shade(0.25 + intensity.clamp(0.0, 1.0) * 0.4)
    }

    /// Range rings and spokes.
    pub fn grid_color(&self) -> (u8, u8, u8) {
        self.shade(0.22)
    }

    /// Axis labels and key hints.
    pub fn dim_color(&self) -> (u8, u8, u8) {
        self.shade(0.35)
    }

    /// Plotted points. Red in every scheme except monochrome, matching the
    /// marker color used on the exported map.
    pub fn point_color(&self) -> (u8, u8, u8) {
        match self {
            ColorScheme::Monochrome => (255, 255, 255),
            _ => (235, 60, 50),
        }
    }

    /// The origin dot at the center of the chart.
    pub fn origin_color(&self) -> (u8, u8, u8) {
        match self {
            ColorScheme::Monochrome => (200, 200, 200),
            _ => (60, 220, 90),
        }
    }

    fn shade(&self, lightness: f32) -> (u8, u8, u8) {
        let hsl = Hsl::new(self.base_hue(), self.saturation(), lightness);
        let rgb: Srgb = hsl.into_color();
        (
            (rgb.red * 255.0) as u8,
            (rgb.green * 255.0) as u8,
            (rgb.blue * 255.0) as u8,
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            ColorScheme::Phosphor => "phosphor",
            ColorScheme::Amber => "amber",
            ColorScheme::Ice => "ice",
            ColorScheme::Monochrome => "monochrome",
        }
    }

    pub fn all() -> &'static [ColorScheme] {
        &[
            ColorScheme::Phosphor,
            ColorScheme::Amber,
            ColorScheme::Ice,
            ColorScheme::Monochrome,
        ]
    }

    pub fn next(&self) -> Self {
        let all = Self::all();
        let current = all.iter().position(|c| c == self).unwrap_or(0);
        all[(current + 1) % all.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_names() {
        assert_eq!("phosphor".parse::<ColorScheme>(), Ok(ColorScheme::Phosphor));
        assert_eq!("MONO".parse::<ColorScheme>(), Ok(ColorScheme::Monochrome));
        assert!("plasma".parse::<ColorScheme>().is_err());
    }

    #[test]
    fn next_cycles_through_all_schemes() {
        let mut scheme = ColorScheme::Phosphor;
        for _ in 0..ColorScheme::all().len() {
            scheme = scheme.next();
        }
        assert_eq!(scheme, ColorScheme::Phosphor);
    }

    #[test]
    fn sweep_brightens_with_intensity() {
        let dim = ColorScheme::Phosphor.sweep_color(0.0);
        let bright = ColorScheme::Phosphor.sweep_color(1.0);
        assert!(bright.1 > dim.1);
    }
}
