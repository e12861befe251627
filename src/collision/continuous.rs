use crate::core::{MultibodyEngine, StepModel};
use crate::error::HarnessError;
use crate::math::Direction;
use crate::Result;

/// A conservative-advancement oracle.
///
/// Implementations claim that no point within `radius` of `link`'s origin
/// moves further than the returned distance along `direction` while the
/// engine integrates one step of `step` from its current configuration and
/// velocity. The verification harness measures whether that claim holds.
pub trait AdvancementBound {
    fn max_displacement(
        &self,
        engine: &dyn MultibodyEngine,
        link: usize,
        direction: &Direction,
        radius: f64,
        step: &StepModel,
    ) -> Result<f64>;

    /// Returns the name of the oracle
    fn name(&self) -> &str;
}

/// Conservative advancement bound for fixed-base serial chains of revolute
/// joints, where coordinate `i - 1` drives link `i`.
///
/// Along the straight path `q(t) = q + t h qd`, a point on link `k` moves with
/// speed at most `sum_j |qd_j| * R_j`, where `R_j` bounds the distance from
/// joint `j` to the point. `R_j` is the sum of the fixed joint-to-joint
/// distances from `j` to `k` plus the reach of the point from link `k`'s
/// origin. Points are taken anywhere in the cube of half-width `radius`,
/// which contains the bounding sphere, so the reach is `sqrt(3) * radius`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChainAdvancementBound;

impl ChainAdvancementBound {
    pub fn new() -> Self {
        Self
    }
}

impl AdvancementBound for ChainAdvancementBound {
    fn max_displacement(
        &self,
        engine: &dyn MultibodyEngine,
        link: usize,
        _direction: &Direction,
        radius: f64,
        step: &StepModel,
    ) -> Result<f64> {
        let links = engine.link_count();
        if link == 0 || link >= links {
            return Err(HarnessError::LinkOutOfRange { link, links });
        }
        let qd = engine.velocity();
        if qd.len() + 1 != links {
            return Err(HarnessError::DimensionMismatch {
                expected: links - 1,
                actual: qd.len(),
            });
        }

        let point_reach = 3.0_f64.sqrt() * radius.max(0.0);
        let mut reach = point_reach;
        let mut bound = 0.0;
        // walk from link k back to the first joint, accumulating R_j
        for j in (1..=link).rev() {
            if j < link {
                let inner = engine.link_transform(j)?.position;
                let outer = engine.link_transform(j + 1)?.position;
                reach += inner.distance(&outer);
            }
            bound += qd[j - 1].abs() * reach;
        }

        Ok(bound * step.step())
    }

    fn name(&self) -> &str {
        "ChainAdvancementBound"
    }
}

/// An oracle that always answers zero. Any motion at all violates it, which
/// makes it useful for checking that violations are reported.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroBound;

impl AdvancementBound for ZeroBound {
    fn max_displacement(
        &self,
        _engine: &dyn MultibodyEngine,
        _link: usize,
        _direction: &Direction,
        _radius: f64,
        _step: &StepModel,
    ) -> Result<f64> {
        Ok(0.0)
    }

    fn name(&self) -> &str {
        "ZeroBound"
    }
}
