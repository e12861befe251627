use crate::bodies::SerialChain;
use crate::core::MultibodyEngine;
use crate::error::HarnessError;
use crate::math::{Direction, Quaternion, Transform, Vector3, UNIT_TOLERANCE};
use crate::Result;
use nalgebra::DVector;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Half-width of the interval initial joint rates are drawn from
pub const JOINT_SPEED_LIMIT: f64 = 10.0;

/// A random test scenario for one trial
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    /// Generalized coordinates to start from
    pub configuration: DVector<f64>,

    /// Generalized velocity held for the step
    pub velocity: DVector<f64>,

    /// Global direction along which displacement is measured
    pub direction: Direction,

    /// Sampled non-root link
    pub link: usize,

    /// Material point in the link frame
    pub point: Vector3,

    /// Bounding radius of the link's geometry
    pub radius: f64,
}

/// Draws random scenarios.
///
/// Generic over the random source so that a seeded `StdRng` reproduces a run
/// exactly.
#[derive(Debug, Clone)]
pub struct ScenarioSampler<R: Rng> {
    rng: R,
}

impl ScenarioSampler<StdRng> {
    /// Creates a sampler over a `StdRng` seeded with `seed`
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ScenarioSampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// A vector of `len` independent uniforms in [-1, 1]
    pub fn sample_vector(&mut self, len: usize) -> DVector<f64> {
        let rng = &mut self.rng;
        DVector::from_fn(len, |_, _| rng.gen_range(-1.0..=1.0))
    }

    /// Three uniforms in [-1, 1], normalized. Draws no longer than
    /// `UNIT_TOLERANCE` are redrawn.
    pub fn sample_direction(&mut self) -> Direction {
        loop {
            let v = Vector3::new(
                self.rng.gen_range(-1.0..=1.0),
                self.rng.gen_range(-1.0..=1.0),
                self.rng.gen_range(-1.0..=1.0),
            );
            if v.length() <= UNIT_TOLERANCE {
                continue;
            }
            if let Ok(direction) = Direction::try_new(v) {
                return direction;
            }
        }
    }

    /// A link index uniform over `1..link_count`
    pub fn sample_link(&mut self, link_count: usize) -> Result<usize> {
        if link_count < 2 {
            return Err(HarnessError::InvalidTopology { links: link_count });
        }
        Ok(self.rng.gen_range(1..link_count))
    }

    /// A point with each coordinate uniform in [-radius, radius]
    pub fn sample_point(&mut self, radius: f64) -> Vector3 {
        let r = radius.abs();
        Vector3::new(
            self.rng.gen_range(-r..=r),
            self.rng.gen_range(-r..=r),
            self.rng.gen_range(-r..=r),
        )
    }

    /// Draws a full scenario for `engine` without touching its state.
    ///
    /// Fails with `InvalidTopology` for fewer than two links and with
    /// `MissingGeometry` when the drawn link has no collision geometry.
    pub fn sample(&mut self, engine: &dyn MultibodyEngine) -> Result<Scenario> {
        let links = engine.link_count();
        if links < 2 {
            return Err(HarnessError::InvalidTopology { links });
        }

        let dof = engine.dof();
        let configuration = self.sample_vector(dof);
        let velocity = self.sample_vector(dof);
        let direction = self.sample_direction();
        let link = self.sample_link(links)?;
        let radius = engine
            .bounding_radius(link)
            .ok_or(HarnessError::MissingGeometry { link })?;
        let point = self.sample_point(radius);

        Ok(Scenario {
            configuration,
            velocity,
            direction,
            link,
            point,
            radius,
        })
    }

    /// A random rigid pose: position in [-1, 1]^3 and a normalized random
    /// quaternion
    pub fn sample_pose(&mut self) -> Transform {
        let position = Vector3::new(
            self.rng.gen_range(-1.0..=1.0),
            self.rng.gen_range(-1.0..=1.0),
            self.rng.gen_range(-1.0..=1.0),
        );
        let rotation = Quaternion::new(
            self.rng.gen_range(-1.0..=1.0),
            self.rng.gen_range(-1.0..=1.0),
            self.rng.gen_range(-1.0..=1.0),
            self.rng.gen_range(-1.0..=1.0),
        )
        .normalize();
        Transform::new(position, rotation)
    }

    /// `len` joint rates, each uniform in [-JOINT_SPEED_LIMIT, JOINT_SPEED_LIMIT]
    pub fn sample_joint_rates(&mut self, len: usize) -> DVector<f64> {
        let rng = &mut self.rng;
        DVector::from_fn(len, |_, _| rng.gen_range(-JOINT_SPEED_LIMIT..=JOINT_SPEED_LIMIT))
    }

    /// A uniform chain started from a random state.
    ///
    /// The base takes a random pose raised by `lift` along y, joint angles
    /// come from `sample_vector` and joint rates from `sample_joint_rates`,
    /// drawn in that order.
    pub fn sample_chain(&mut self, moving_links: usize, length: f64, radius: f64, lift: f64) -> Result<SerialChain> {
        let mut base = self.sample_pose();
        base.position.y += lift;

        let mut chain = SerialChain::uniform_on(base, moving_links, length, radius);
        let dof = chain.dof();
        chain.set_configuration(&self.sample_vector(dof))?;
        chain.set_velocity(&self.sample_joint_rates(dof))?;
        Ok(chain)
    }
}
