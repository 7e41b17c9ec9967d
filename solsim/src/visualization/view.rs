//! Camera state for the 2D viewer
//!
//! `View` owns the meters-to-pixels scale and maps simulation positions to
//! canvas and Bevy coordinates. Physics never reads it.

use bevy::prelude::{Resource, Vec2};

use crate::configuration::config::ViewConfig;
use crate::simulation::params::AU;
use crate::simulation::states::NVec2;

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct View {
    pub scale: f64, // pixels per meter
    pub zoom_factor: f64, // multiplier applied per zoom tick
    pub width: f32, // canvas width
    pub height: f32, // canvas height
}

impl View {
    pub fn from_config(cfg: &ViewConfig) -> Self {
        Self {
            scale: cfg.au_pixels / AU,
            zoom_factor: cfg.zoom_factor,
            width: cfg.width,
            height: cfg.height,
        }
    }

    pub fn zoom_in(&mut self) {
        self.scale *= self.zoom_factor;
    }

    pub fn zoom_out(&mut self) {
        self.scale /= self.zoom_factor;
    }

    /// Pixels per astronomical unit at the current zoom
    pub fn au_pixels(&self) -> f64 {
        self.scale * AU
    }

    /// Canvas coordinates, origin top-left and y pointing down:
    /// `world * scale + canvas_center`
    pub fn to_canvas(&self, p: &NVec2) -> (f64, f64) {
        (
            p.x * self.scale + f64::from(self.width) / 2.0,
            p.y * self.scale + f64::from(self.height) / 2.0,
        )
    }

    /// Bevy 2D world coordinates (origin at the window center, y up) of the
    /// canvas point for `p`
    pub fn to_screen(&self, p: &NVec2) -> Vec2 {
        let (cx, cy) = self.to_canvas(p);
        Vec2::new(cx as f32 - self.width / 2.0, self.height / 2.0 - cy as f32)
    }
}

/// Distance annotation in whole kilometers; reads "0 Km" before the first
/// force pass has measured anything
pub fn distance_label(distance: Option<f64>) -> String {
    format!("{} Km", (distance.unwrap_or(0.0) / 1000.0).round())
}
