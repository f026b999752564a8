//! Tesseract (4D Hypercube) topology
//!
//! A tesseract has 16 vertices (all combinations of ±s for x,y,z,w),
//! 32 edges, 24 faces (squares), and 8 cells (cubes).
//!
//! Vertices are generated by repeated sign flipping from the seed
//! `(s, s, s, s)`: negate axis 0 on a copy of every vertex so far, then
//! axis 1, then 2, then 3. Bit `k` of a vertex index is therefore set iff
//! coordinate `k` of that vertex is negative.

use std::fmt;

use crate::vec4::{Vec4, AXIS_COUNT};

/// Number of tesseract vertices
pub const VERTEX_COUNT: usize = 16;
/// Number of tesseract edges
pub const EDGE_COUNT: usize = 32;
/// Number of cubic cells
pub const CELL_COUNT: usize = 8;

/// An edge between two vertices, `a < b`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    /// Lower vertex index
    pub a: usize,
    /// Higher vertex index
    pub b: usize,
}

impl Edge {
    /// The axis along which the two endpoints differ
    #[inline]
    pub fn axis(&self) -> usize {
        (self.a ^ self.b).trailing_zeros() as usize
    }
}

/// One of the 8 cubic cells of a tesseract
///
/// Cell `i` holds the vertices whose coordinate on axis `i % 4` is positive
/// for `i < 4` and negative for `i >= 4`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CubeFace(u8);

impl CubeFace {
    /// All 8 cells in index order
    pub const ALL: [CubeFace; CELL_COUNT] = [
        CubeFace(0), CubeFace(1), CubeFace(2), CubeFace(3),
        CubeFace(4), CubeFace(5), CubeFace(6), CubeFace(7),
    ];

    /// Cell by index, `None` if `index >= 8`
    #[inline]
    pub fn new(index: usize) -> Option<Self> {
        (index < CELL_COUNT).then(|| CubeFace(index as u8))
    }

    /// Cell index in `0..8`
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The axis held fixed across this cell
    #[inline]
    pub fn axis(self) -> usize {
        self.index() % AXIS_COUNT
    }

    /// Whether the fixed coordinate is positive
    #[inline]
    pub fn is_positive(self) -> bool {
        self.index() < AXIS_COUNT
    }

    /// Whether `v` lies in this cell
    #[inline]
    pub fn contains(self, v: &Vec4) -> bool {
        let c = v.axis(self.axis());
        if self.is_positive() { c > 0.0 } else { c < 0.0 }
    }
}

impl fmt::Display for CubeFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [char; AXIS_COUNT] = ['x', 'y', 'z', 'w'];
        let sign = if self.is_positive() { '+' } else { '-' };
        write!(f, "{}{}", sign, NAMES[self.axis()])
    }
}

/// A tesseract (4D hypercube) - pure geometry without colors
#[derive(Clone, Debug)]
pub struct Tesseract4D {
    /// Coordinate magnitude (half the side length)
    scale: f32,
    /// The 16 vertices of the tesseract
    vertices: [Vec4; VERTEX_COUNT],
    /// The 32 edges, in lexicographic order
    edges: [Edge; EDGE_COUNT],
}

impl Tesseract4D {
    /// Create a new tesseract centered at origin with coordinates ±`scale`
    ///
    /// Returns `None` unless `scale` is finite and positive.
    pub fn new(scale: f32) -> Option<Self> {
        (scale.is_finite() && scale > 0.0).then(|| Self::build(scale))
    }

    fn build(scale: f32) -> Self {
        let vertices = Self::compute_vertices(scale);
        let edges = Self::compute_edges(&vertices);
        Self { scale, vertices, edges }
    }

    /// Coordinate magnitude of every vertex
    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// All vertices
    #[inline]
    pub fn vertices(&self) -> &[Vec4; VERTEX_COUNT] {
        &self.vertices
    }

    /// All edges
    #[inline]
    pub fn edges(&self) -> &[Edge; EDGE_COUNT] {
        &self.edges
    }

    /// Indices of the 8 vertices lying in `cell`
    pub fn cell_vertices(&self, cell: CubeFace) -> impl Iterator<Item = usize> + '_ {
        self.vertices
            .iter()
            .enumerate()
            .filter(move |(_, v)| cell.contains(v))
            .map(|(i, _)| i)
    }

    /// Sign-flip generation from the all-positive seed
    fn compute_vertices(scale: f32) -> [Vec4; VERTEX_COUNT] {
        let mut vertices = [Vec4::ZERO; VERTEX_COUNT];
        vertices[0] = Vec4::splat(scale);
        let mut count = 1;
        for axis in 0..AXIS_COUNT {
            for i in 0..count {
                vertices[count + i] = vertices[i].flip_axis(axis);
            }
            count *= 2;
        }
        vertices
    }

    /// Vertex pairs differing in exactly one coordinate
    fn compute_edges(vertices: &[Vec4; VERTEX_COUNT]) -> [Edge; EDGE_COUNT] {
        let mut edges = [Edge { a: 0, b: 0 }; EDGE_COUNT];
        let mut n = 0;
        for i in 0..VERTEX_COUNT {
            for j in (i + 1)..VERTEX_COUNT {
                if vertices[i].differing_axes(&vertices[j]) == 1 {
                    edges[n] = Edge { a: i, b: j };
                    n += 1;
                }
            }
        }
        debug_assert_eq!(n, EDGE_COUNT);
        edges
    }
}

impl Default for Tesseract4D {
    /// Unit tesseract with coordinates ±1
    fn default() -> Self {
        Self::build(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_tesseract_vertex_count() {
        let t = Tesseract4D::new(1.0).unwrap();
        assert_eq!(t.vertices().len(), VERTEX_COUNT);
    }

    #[test]
    fn test_vertices_are_all_sign_combinations() {
        for scale in [0.5, 1.0, 3.0] {
            let t = Tesseract4D::new(scale).unwrap();
            let mut seen = HashSet::new();
            for v in t.vertices() {
                for axis in 0..4 {
                    assert!(v.axis(axis) == scale || v.axis(axis) == -scale);
                }
                let key = v.to_array().map(f32::to_bits);
                assert!(seen.insert(key), "duplicate vertex {:?}", v);
            }
            assert_eq!(seen.len(), 16);
        }
    }

    #[test]
    fn test_index_bits_encode_signs() {
        let t = Tesseract4D::new(2.0).unwrap();
        for (i, v) in t.vertices().iter().enumerate() {
            for axis in 0..4 {
                let negative = (i >> axis) & 1 == 1;
                assert_eq!(v.axis(axis) < 0.0, negative, "vertex {} axis {}", i, axis);
            }
        }
        assert_eq!(t.vertices()[0], Vec4::splat(2.0));
        assert_eq!(t.vertices()[15], Vec4::splat(-2.0));
    }

    #[test]
    fn test_edges_are_hamming_neighbours() {
        let t = Tesseract4D::new(1.0).unwrap();
        let edges: HashSet<(usize, usize)> = t.edges().iter().map(|e| (e.a, e.b)).collect();
        assert_eq!(edges.len(), EDGE_COUNT);

        for i in 0..16 {
            for j in (i + 1)..16 {
                let neighbours = t.vertices()[i].differing_axes(&t.vertices()[j]) == 1;
                assert_eq!(edges.contains(&(i, j)), neighbours, "pair ({}, {})", i, j);
            }
        }
    }

    #[test]
    fn test_every_vertex_has_degree_four() {
        let t = Tesseract4D::new(1.0).unwrap();
        for i in 0..16 {
            let incident: Vec<&Edge> = t.edges().iter().filter(|e| e.a == i || e.b == i).collect();
            let axes: HashSet<usize> = incident.iter().map(|e| e.axis()).collect();
            assert_eq!(incident.len(), 4);
            assert_eq!(axes.len(), 4, "vertex {} should have one edge per axis", i);
        }
    }

    #[test]
    fn test_edges_are_ordered() {
        let t = Tesseract4D::new(1.0).unwrap();
        for pair in t.edges().windows(2) {
            assert!(pair[0].a < pair[0].b);
            assert!((pair[0].a, pair[0].b) < (pair[1].a, pair[1].b));
        }
    }

    #[test]
    fn test_edge_axis() {
        assert_eq!(Edge { a: 1, b: 5 }.axis(), 2);
        assert_eq!(Edge { a: 7, b: 15 }.axis(), 3);
    }

    #[test]
    fn test_cube_face_index_range() {
        assert!(CubeFace::new(7).is_some());
        assert!(CubeFace::new(8).is_none());
        assert_eq!(CubeFace::ALL.len(), 8);
    }

    #[test]
    fn test_cube_face_axis_and_sign() {
        let face = CubeFace::new(0).unwrap();
        assert_eq!((face.axis(), face.is_positive()), (0, true));
        let face = CubeFace::new(4).unwrap();
        assert_eq!((face.axis(), face.is_positive()), (0, false));
        let face = CubeFace::new(7).unwrap();
        assert_eq!((face.axis(), face.is_positive()), (3, false));
        assert_eq!(face.to_string(), "-w");
    }

    #[test]
    fn test_each_cell_has_eight_vertices() {
        let t = Tesseract4D::new(1.0).unwrap();
        for cell in CubeFace::ALL {
            assert_eq!(t.cell_vertices(cell).count(), 8, "cell {}", cell);
        }
    }

    #[test]
    fn test_opposite_cells_partition_vertices() {
        let t = Tesseract4D::new(1.0).unwrap();
        for axis in 0..4 {
            let pos: HashSet<usize> = t.cell_vertices(CubeFace::ALL[axis]).collect();
            let neg: HashSet<usize> = t.cell_vertices(CubeFace::ALL[axis + 4]).collect();
            assert!(pos.is_disjoint(&neg));
            assert_eq!(pos.len() + neg.len(), 16);
        }
    }

    #[test]
    fn test_tesseract_scale() {
        let t = Tesseract4D::new(2.0).unwrap();
        assert_eq!(t.scale(), 2.0);
        assert_eq!(Tesseract4D::default().scale(), 1.0);
    }

    #[test]
    fn test_invalid_scale_is_rejected() {
        for scale in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            assert!(Tesseract4D::new(scale).is_none(), "scale {}", scale);
        }
    }
}
