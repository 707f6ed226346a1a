use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use crate::shape::Triangle;
use alloc::vec::Vec;

/// Indicated an inconsistency while building a collision mesh.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum CollisionMeshError {
    /// A collision mesh must contain at least one triangle.
    #[error("A collision mesh must contain at least one triangle.")]
    Empty,
    /// The number of vertices is not a multiple of three.
    #[error("the vertex buffer has {len} vertices, which is not a multiple of 3.")]
    IncompleteTriangle {
        /// The offending number of vertices.
        len: usize,
    },
}

/// A triangle soup used as static collision geometry.
///
/// Vertices are stored flat, each group of three consecutive vertices forming one
/// triangle. Triangles are not indexed nor shared: this is the layout produced by
/// concatenating the vertex buffers of every collidable model of a scene.
///
/// The mesh caches the [`Aabb`] of each triangle as well as the region enclosing
/// all of them.
#[derive(Clone, Debug)]
pub struct CollisionMesh {
    vertices: Vec<Point<Real>>,
    triangle_aabbs: Vec<Aabb>,
    aabb: Aabb,
}

impl CollisionMesh {
    /// Creates a collision mesh from a flat list of triangle vertices.
    pub fn new(vertices: Vec<Point<Real>>) -> Result<Self, CollisionMeshError> {
        check_vertex_count(vertices.len())?;

        let mut result = CollisionMesh {
            vertices: Vec::new(),
            triangle_aabbs: Vec::new(),
            aabb: Aabb::new_invalid(),
        };
        result.extend_unchecked(&vertices);
        Ok(result)
    }

    /// Appends the triangles of another model to this mesh.
    ///
    /// On error, `self` is left unmodified.
    pub fn append(&mut self, vertices: &[Point<Real>]) -> Result<(), CollisionMeshError> {
        check_vertex_count(vertices.len())?;
        self.extend_unchecked(vertices);
        Ok(())
    }

    fn extend_unchecked(&mut self, vertices: &[Point<Real>]) {
        let first_new = self.num_triangles();
        self.vertices.extend_from_slice(vertices);
        self.triangle_aabbs.reserve(vertices.len() / 3);

        for i in first_new..self.num_triangles() {
            let tri = self.triangle(i);

            if tri.is_degenerate() {
                log::debug!(
                    "Collision mesh triangle {} has a zero area and will never report any contact.",
                    i
                );
            }

            let aabb = tri.local_aabb();
            self.aabb.merge(&aabb);
            self.triangle_aabbs.push(aabb);
        }
    }

    /// The number of triangles of this mesh.
    #[inline]
    pub fn num_triangles(&self) -> usize {
        self.vertices.len() / 3
    }

    /// The `i`-th triangle of this mesh.
    ///
    /// Panics if `i >= self.num_triangles()`.
    #[inline]
    pub fn triangle(&self, i: usize) -> Triangle {
        Triangle::new(
            self.vertices[i * 3],
            self.vertices[i * 3 + 1],
            self.vertices[i * 3 + 2],
        )
    }

    /// An iterator through all the triangles of this mesh.
    pub fn triangles(&self) -> impl ExactSizeIterator<Item = Triangle> + '_ {
        self.vertices
            .chunks_exact(3)
            .map(|pts| Triangle::new(pts[0], pts[1], pts[2]))
    }

    /// The [`Aabb`] of the `i`-th triangle.
    #[inline]
    pub fn triangle_aabb(&self, i: usize) -> &Aabb {
        &self.triangle_aabbs[i]
    }

    /// The region enclosing every vertex of this mesh.
    #[inline]
    pub fn aabb(&self) -> &Aabb {
        &self.aabb
    }
}

fn check_vertex_count(len: usize) -> Result<(), CollisionMeshError> {
    if len == 0 {
        Err(CollisionMeshError::Empty)
    } else if len % 3 != 0 {
        Err(CollisionMeshError::IncompleteTriangle { len })
    } else {
        Ok(())
    }
}
