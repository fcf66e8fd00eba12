use log::{debug, trace, warn};

use crate::api::{FlatWorldApi, NarrowphaseApi};
use crate::body::FlatBody;
use crate::config::BodyLimits;
use crate::error::Result;
use crate::narrowphase::Narrowphase;
use crate::types::*;
use crate::vector::FlatVector;

/// Owns the validation bounds and the bodies created against them.
///
/// Overlap resolution is a plain all-pairs scan, O(n²) per call. There is no
/// broad phase; keep body counts in the tens.
pub struct FlatWorld {
    limits: BodyLimits,
    bodies: Vec<FlatBody>,
}

impl FlatWorld {
    pub fn new(limits: BodyLimits) -> Self {
        Self {
            limits,
            bodies: Vec::new(),
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(BodyLimits::default())
    }

    pub fn limits(&self) -> &BodyLimits {
        &self.limits
    }

    pub fn bodies(&self) -> &[FlatBody] {
        &self.bodies
    }

    pub fn body(&self, id: BodyId) -> Option<&FlatBody> {
        self.bodies.get(id.0)
    }

    pub fn body_mut(&mut self, id: BodyId) -> Option<&mut FlatBody> {
        self.bodies.get_mut(id.0)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    fn insert(&mut self, created: Result<FlatBody>) -> Result<BodyId> {
        match created {
            Ok(body) => {
                let id = BodyId(self.bodies.len());
                debug!(
                    "added {} body {:?} at ({}) mass={}",
                    body.shape_type(),
                    id,
                    body.position(),
                    body.mass()
                );
                self.bodies.push(body);
                Ok(id)
            }
            Err(err) => {
                debug!("rejected body: {err}");
                Err(err)
            }
        }
    }
}

impl FlatWorldApi for FlatWorld {
    fn add_circle(
        &mut self,
        radius: f32,
        position: FlatVector,
        density: f32,
        is_static: bool,
        restitution: f32,
    ) -> Result<BodyId> {
        let created = FlatBody::create_circle_body(
            radius,
            position,
            density,
            is_static,
            restitution,
            &self.limits,
        );
        self.insert(created)
    }

    fn add_box(
        &mut self,
        width: f32,
        height: f32,
        position: FlatVector,
        density: f32,
        is_static: bool,
        restitution: f32,
    ) -> Result<BodyId> {
        let created = FlatBody::create_box_body(
            width,
            height,
            position,
            density,
            is_static,
            restitution,
            &self.limits,
        );
        self.insert(created)
    }

    fn move_body(&mut self, id: BodyId, delta: FlatVector) -> bool {
        match self.body_mut(id) {
            Some(body) => {
                body.move_by(delta);
                true
            }
            None => false,
        }
    }

    fn resolve_overlaps(&mut self) -> ResolveStats {
        let mut stats = ResolveStats::default();
        let n = self.bodies.len();
        // Sequential i < j so later pairs see earlier corrections.
        for i in 0..n {
            for j in (i + 1)..n {
                let (head, tail) = self.bodies.split_at_mut(j);
                let a = &mut head[i];
                let b = &mut tail[0];
                if a.shape_type() != ShapeType::Circle || b.shape_type() != ShapeType::Circle {
                    continue;
                }
                stats.pairs_tested += 1;
                match Narrowphase::intersect_circles(a.position(), a.radius(), b.position(), b.radius()) {
                    Ok(Some(contact)) => {
                        let (push_a, push_b) = contact.corrections();
                        a.move_by(push_a);
                        b.move_by(push_b);
                        stats.contacts += 1;
                        trace!("separated {i} and {j}: depth={} normal=({})", contact.depth, contact.normal);
                    }
                    Ok(None) => {}
                    // Coincident centers are the only failure.
                    Err(err) => {
                        stats.degenerate += 1;
                        warn!("skipping pair {i}/{j}: {err}");
                    }
                }
            }
        }
        if stats.contacts > 0 || stats.degenerate > 0 {
            debug!(
                "resolve: pairs={} contacts={} degenerate={}",
                stats.pairs_tested, stats.contacts, stats.degenerate
            );
        }
        stats
    }
}
