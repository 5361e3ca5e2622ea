//! Configuration types for graph layout and rendering.
//!
//! All types implement [`serde::Deserialize`] and default every missing
//! field, so partial configuration files are accepted.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout and style settings.
//! - [`LayoutConfig`] - Selects the [`LayoutStrategy`] and holds its parameters.
//! - [`StyleConfig`] - Colors used by the SVG preview.
//!
//! # Example
//!
//! ```
//! # use archgraph::config::AppConfig;
//! # use archgraph::strategy::LayoutStrategy;
//! let config = AppConfig::default();
//! assert_eq!(config.layout().strategy(), LayoutStrategy::Circular);
//! assert!(config.style().background_color().is_ok());
//! ```

use serde::Deserialize;

use archgraph_core::{
    color::Color,
    geometry::{Point, Size},
    strategy::LayoutStrategy,
};

use crate::layout::{Engine, circular::DEFAULT_RADIUS_FACTOR, grid::GridOptions};

/// Top-level configuration combining layout and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and style configurations.
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns a copy of this configuration using `strategy` for layout.
    pub fn with_strategy(mut self, strategy: LayoutStrategy) -> Self {
        self.layout.strategy = strategy;
        self
    }
}

/// Layout strategy selection and parameters.
///
/// `width`/`height` describe the canvas. The circular strategy centers on
/// it; the grid strategy ignores it and starts from `start_x`/`start_y`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    strategy: LayoutStrategy,
    width: f32,
    height: f32,
    radius_factor: f32,
    columns_per_row: usize,
    horizontal_spacing: f32,
    vertical_spacing: f32,
    start_x: f32,
    start_y: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        let grid = GridOptions::default();
        Self {
            strategy: LayoutStrategy::default(),
            width: 800.0,
            height: 800.0,
            radius_factor: DEFAULT_RADIUS_FACTOR,
            columns_per_row: grid.columns_per_row,
            horizontal_spacing: grid.horizontal_spacing,
            vertical_spacing: grid.vertical_spacing,
            start_x: grid.origin.x(),
            start_y: grid.origin.y(),
        }
    }
}

impl LayoutConfig {
    /// Creates a layout configuration with default parameters for `strategy`.
    pub fn new(strategy: LayoutStrategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    /// Sets the canvas size.
    pub fn with_canvas(mut self, canvas: Size) -> Self {
        self.width = canvas.width();
        self.height = canvas.height();
        self
    }

    /// Returns the selected [`LayoutStrategy`].
    pub fn strategy(&self) -> LayoutStrategy {
        self.strategy
    }

    /// Returns the canvas size.
    pub fn canvas(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Builds a layout [`Engine`] carrying these parameters.
    pub fn engine(&self) -> Engine {
        Engine::new()
            .with_radius_factor(self.radius_factor)
            .with_columns_per_row(self.columns_per_row)
            .with_horizontal_spacing(self.horizontal_spacing)
            .with_vertical_spacing(self.vertical_spacing)
            .with_origin(Point::new(self.start_x, self.start_y))
    }
}

/// Visual styling configuration for the SVG preview.
///
/// Every color is a CSS color string. Unset colors fall back to a dark
/// theme.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    #[serde(default)]
    background_color: Option<String>,

    #[serde(default)]
    node_color: Option<String>,

    #[serde(default)]
    edge_color: Option<String>,

    #[serde(default)]
    text_color: Option<String>,
}

impl StyleConfig {
    /// Returns the parsed background [`Color`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn background_color(&self) -> Result<Color, String> {
        parse_color("background_color", self.background_color.as_deref(), "black")
    }

    /// Returns the parsed node fill [`Color`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn node_color(&self) -> Result<Color, String> {
        parse_color("node_color", self.node_color.as_deref(), "#1a1a1a")
    }

    /// Returns the parsed edge and node outline [`Color`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn edge_color(&self) -> Result<Color, String> {
        parse_color("edge_color", self.edge_color.as_deref(), "white")
    }

    /// Returns the parsed label [`Color`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn text_color(&self) -> Result<Color, String> {
        parse_color("text_color", self.text_color.as_deref(), "white")
    }
}

fn parse_color(field: &str, configured: Option<&str>, fallback: &str) -> Result<Color, String> {
    Color::new(configured.unwrap_or(fallback))
        .map_err(|err| format!("Invalid {field} in config: {err}"))
}
