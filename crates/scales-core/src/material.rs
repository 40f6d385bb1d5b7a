//! The three shared surface materials.
//!
//! Meshes refer to a material through [`MaterialId`] rather than owning a
//! copy, so a color change on one material is seen by every mesh using it.

use crate::color::Rgb;
use crate::constants::{BASE_DARK_HEX, GOLD_HEX, SILVER_HEX};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MaterialId {
    Gold,
    Silver,
    Base,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    pub color: Rgb,
    pub metalness: f32,
    pub roughness: f32,
}

impl Material {
    pub fn new(color: Rgb, metalness: f32, roughness: f32) -> Self {
        Self {
            color,
            metalness,
            roughness,
        }
    }
}

/// Fixed set of exactly three materials; there is no way to add or drop one.
#[derive(Clone, Debug)]
pub struct Materials {
    gold: Material,
    silver: Material,
    base: Material,
}

impl Materials {
    pub fn standard() -> Self {
        Self {
            gold: Material::new(gold(), 0.9, 0.2),
            silver: Material::new(silver(), 0.8, 0.2),
            base: Material::new(Rgb::from_hex(BASE_DARK_HEX), 0.5, 0.7),
        }
    }

    pub fn get(&self, id: MaterialId) -> &Material {
        match id {
            MaterialId::Gold => &self.gold,
            MaterialId::Silver => &self.silver,
            MaterialId::Base => &self.base,
        }
    }

    pub fn get_mut(&mut self, id: MaterialId) -> &mut Material {
        match id {
            MaterialId::Gold => &mut self.gold,
            MaterialId::Silver => &mut self.silver,
            MaterialId::Base => &mut self.base,
        }
    }
}

impl Default for Materials {
    fn default() -> Self {
        Self::standard()
    }
}

/// Canonical gold tone.
pub fn gold() -> Rgb {
    Rgb::from_hex(GOLD_HEX)
}

/// Canonical silver tone.
pub fn silver() -> Rgb {
    Rgb::from_hex(SILVER_HEX)
}
