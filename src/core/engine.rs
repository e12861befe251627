use crate::math::{Transform, Vector3};
use crate::Result;
use nalgebra::DVector;

/// Query and mutation surface of a multibody engine.
///
/// Link 0 is the root. Generalized coordinates and velocities have `dof()`
/// entries each.
pub trait MultibodyEngine {
    /// Number of links, including the root
    fn link_count(&self) -> usize;

    /// Number of generalized coordinates
    fn dof(&self) -> usize;

    /// Bounding radius of the link's collision geometry, or `None` if the
    /// link has no geometry
    fn bounding_radius(&self, link: usize) -> Option<f64>;

    /// Pose of the link in the global frame for the current configuration
    fn link_transform(&self, link: usize) -> Result<Transform>;

    /// Current generalized coordinates
    fn configuration(&self) -> DVector<f64>;

    /// Current generalized velocity
    fn velocity(&self) -> DVector<f64>;

    fn set_configuration(&mut self, q: &DVector<f64>) -> Result<()>;

    fn set_velocity(&mut self, qd: &DVector<f64>) -> Result<()>;

    /// Maps a point expressed in the link frame into the global frame
    fn point_to_global(&self, link: usize, local: Vector3) -> Result<Vector3> {
        Ok(self.link_transform(link)?.transform_point(local))
    }
}

/// What a running simulation exposes to per-step observers
pub trait SimulationHost {
    /// Current simulated time
    fn current_time(&self) -> f64;

    /// Total kinetic energy of the observed body
    fn kinetic_energy(&self) -> f64;

    /// Generalized coordinates of the observed body
    fn generalized_coordinates(&self) -> DVector<f64>;
}
