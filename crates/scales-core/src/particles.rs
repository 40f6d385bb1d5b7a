use glam::{Mat4, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Fixed cloud of points spun as a whole.
///
/// Positions are drawn once and never change; only the aggregate yaw moves.
#[derive(Clone, Debug)]
pub struct ParticleField {
    positions: Vec<Vec3>,
    pub rotation_y: f32,
}

impl ParticleField {
    /// Draw `count` points uniformly inside a cube of side `spread` centred on
    /// the origin.
    pub fn generate(count: usize, spread: f32, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut coord = || (rng.gen::<f32>() - 0.5) * spread;
        let positions = (0..count)
            .map(|_| Vec3::new(coord(), coord(), coord()))
            .collect();
        Self {
            positions,
            rotation_y: 0.0,
        }
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_y(self.rotation_y)
    }
}
