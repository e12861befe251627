use crate::core::{BodyHandle, Constraint, MultibodyEngine};
use crate::error::HarnessError;
use crate::math::{Quaternion, Rotation, Transform, Vector3};
use crate::shapes::Shape;
use crate::Result;
use nalgebra::DVector;
use std::sync::Arc;

/// One link of a serial chain and the revolute joint attaching it to its parent
#[derive(Debug, Clone)]
pub struct ChainLink {
    /// Joint position in the parent link's frame
    pub offset: Vector3,

    /// Joint axis in the parent link's frame
    pub axis: Vector3,

    /// Collision geometry, if any
    pub shape: Option<Arc<dyn Shape>>,
}

impl ChainLink {
    /// Creates a link with a revolute joint about `axis` at `offset`
    pub fn revolute(offset: Vector3, axis: Vector3) -> Self {
        Self {
            offset,
            axis: axis.normalize(),
            shape: None,
        }
    }

    pub fn with_shape(mut self, shape: Arc<dyn Shape>) -> Self {
        self.shape = Some(shape);
        self
    }
}

/// A fixed-base serial chain of revolute joints.
///
/// Link 0 is the root, welded to `base`. Link `i >= 1` rotates about its
/// joint by the generalized coordinate `q[i - 1]`, so the chain has one
/// degree of freedom per non-root link.
#[derive(Debug, Clone)]
pub struct SerialChain {
    base: Transform,
    root_shape: Option<Arc<dyn Shape>>,
    links: Vec<ChainLink>,
    q: DVector<f64>,
    qd: DVector<f64>,
    poses: Vec<Transform>,
}

impl SerialChain {
    /// Returns a builder for a chain rooted at `base`
    pub fn builder(base: Transform) -> SerialChainBuilder {
        SerialChainBuilder::new(base)
    }

    /// A chain of `moving_links` equal links spaced `length` apart along x.
    /// Joint axes alternate between z and y, each link carries a sphere of
    /// `radius`.
    pub fn uniform(moving_links: usize, length: f64, radius: f64) -> Self {
        Self::uniform_on(Transform::identity(), moving_links, length, radius)
    }

    /// Like `uniform`, with the root welded to `base`
    pub fn uniform_on(base: Transform, moving_links: usize, length: f64, radius: f64) -> Self {
        let mut builder = SerialChainBuilder::new(base);
        for i in 0..moving_links {
            let axis = if i % 2 == 0 { Vector3::unit_z() } else { Vector3::unit_y() };
            let offset = if i == 0 { Vector3::zero() } else { Vector3::new(length, 0.0, 0.0) };
            builder = builder.link(
                ChainLink::revolute(offset, axis)
                    .with_shape(Arc::new(crate::shapes::Sphere::new(radius))),
            );
        }
        builder.build()
    }

    /// The body handle used for `link` in contact constraints
    pub fn body_handle(&self, link: usize) -> BodyHandle {
        BodyHandle::new(link as u32)
    }

    /// Collision geometry of a link
    pub fn shape(&self, link: usize) -> Option<&Arc<dyn Shape>> {
        if link == 0 {
            self.root_shape.as_ref()
        } else {
            self.links.get(link - 1).and_then(|l| l.shape.as_ref())
        }
    }

    /// World-frame rotation axis of the joint driving `link` (>= 1)
    pub fn joint_axis(&self, link: usize) -> Result<Vector3> {
        self.check_link(link)?;
        if link == 0 {
            return Err(HarnessError::InvalidParameter("the root link has no joint".to_string()));
        }
        Ok(self.poses[link - 1].rotation.rotate_vector(self.links[link - 1].axis))
    }

    /// Velocity of a point given in `link`'s frame, from the current
    /// generalized velocity
    pub fn point_velocity(&self, link: usize, local: Vector3) -> Result<Vector3> {
        let p = self.point_to_global(link, local)?;
        let mut v = Vector3::zero();
        for j in 1..=link {
            let origin = self.poses[j].position;
            v += self.joint_axis(j)?.cross(&(p - origin)) * self.qd[j - 1];
        }
        Ok(v)
    }

    /// Kinetic energy treating each link as a unit point mass at its origin
    pub fn kinetic_energy(&self) -> f64 {
        (1..self.link_count())
            .filter_map(|link| {
                let v = self.point_velocity(link, Vector3::zero()).ok()?;
                Some(0.5 * v.length_squared())
            })
            .sum()
    }

    /// One contact constraint per touching feature between a link's geometry
    /// and the ground plane `y = height`
    pub fn ground_contacts(&self, height: f64) -> Vec<Constraint> {
        let mut constraints = Vec::new();
        for (link, pose) in self.poses.iter().enumerate() {
            if let Some(shape) = self.shape(link) {
                let count = shape.ground_contacts(pose, height);
                for _ in 0..count {
                    constraints.push(Constraint::contact(self.body_handle(link), BodyHandle::GROUND));
                }
            }
        }
        constraints
    }

    fn check_link(&self, link: usize) -> Result<()> {
        if link >= self.poses.len() {
            return Err(HarnessError::LinkOutOfRange {
                link,
                links: self.poses.len(),
            });
        }
        Ok(())
    }

    fn check_dimension(&self, v: &DVector<f64>) -> Result<()> {
        if v.len() != self.links.len() {
            return Err(HarnessError::DimensionMismatch {
                expected: self.links.len(),
                actual: v.len(),
            });
        }
        Ok(())
    }

    // forward kinematics for the current q
    fn update_poses(&mut self) {
        self.poses.clear();
        self.poses.push(self.base);
        for (i, link) in self.links.iter().enumerate() {
            let joint = Transform::new(link.offset, Quaternion::from_axis_angle(link.axis, self.q[i]));
            let pose = self.poses[i].combine(&joint);
            self.poses.push(pose);
        }
    }
}

impl MultibodyEngine for SerialChain {
    fn link_count(&self) -> usize {
        self.links.len() + 1
    }

    fn dof(&self) -> usize {
        self.links.len()
    }

    fn bounding_radius(&self, link: usize) -> Option<f64> {
        self.shape(link).map(|s| s.bounding_radius())
    }

    fn link_transform(&self, link: usize) -> Result<Transform> {
        self.check_link(link)?;
        Ok(self.poses[link])
    }

    fn configuration(&self) -> DVector<f64> {
        self.q.clone()
    }

    fn velocity(&self) -> DVector<f64> {
        self.qd.clone()
    }

    fn set_configuration(&mut self, q: &DVector<f64>) -> Result<()> {
        self.check_dimension(q)?;
        self.q.copy_from(q);
        self.update_poses();
        Ok(())
    }

    fn set_velocity(&mut self, qd: &DVector<f64>) -> Result<()> {
        self.check_dimension(qd)?;
        self.qd.copy_from(qd);
        Ok(())
    }
}

/// Builds a `SerialChain` link by link, root first
pub struct SerialChainBuilder {
    base: Transform,
    root_shape: Option<Arc<dyn Shape>>,
    links: Vec<ChainLink>,
}

impl SerialChainBuilder {
    pub fn new(base: Transform) -> Self {
        Self {
            base,
            root_shape: None,
            links: Vec::new(),
        }
    }

    /// Attaches collision geometry to the root link
    pub fn root_shape(mut self, shape: Arc<dyn Shape>) -> Self {
        self.root_shape = Some(shape);
        self
    }

    /// Appends a link below the previous one
    pub fn link(mut self, link: ChainLink) -> Self {
        self.links.push(link);
        self
    }

    /// Builds the chain at the zero configuration, at rest
    pub fn build(self) -> SerialChain {
        let n = self.links.len();
        let mut chain = SerialChain {
            base: self.base,
            root_shape: self.root_shape,
            links: self.links,
            q: DVector::zeros(n),
            qd: DVector::zeros(n),
            poses: Vec::with_capacity(n + 1),
        };
        chain.update_poses();
        chain
    }
}
