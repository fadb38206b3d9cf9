//! Static terrain surface
//!
//! A world-space triangle soup with a coarse XZ column grid. Ground probes
//! are vertical, so a probe only has to test the triangles whose footprint
//! overlaps the grid cell under the query point.

use wanderer_math::{Ray3, Triangle, Vec3};

/// Upper bound on grid cells per axis
const MAX_GRID_CELLS: usize = 256;

/// Collidable terrain mesh
#[derive(Debug)]
pub struct TerrainMesh {
    triangles: Vec<Triangle>,
    grid: ColumnGrid,
}

impl TerrainMesh {
    /// Build a terrain from world-space triangles
    pub fn new(triangles: Vec<Triangle>) -> Self {
        let grid = ColumnGrid::build(&triangles);
        Self { triangles, grid }
    }

    /// Number of triangles in the surface
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Component-wise bounds of the surface, if it has any triangles
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        self.triangles.iter().map(Triangle::bounds).reduce(|(amin, amax), (bmin, bmax)| {
            (amin.min_components(bmin), amax.max_components(bmax))
        })
    }

    /// Nearest hit of an arbitrary ray within `max_distance`
    ///
    /// Tests every triangle; use [`raycast_down`](Self::raycast_down) for
    /// ground probes.
    pub fn raycast(&self, ray: &Ray3, max_distance: f32) -> Option<f32> {
        nearest(self.triangles.iter(), ray, max_distance)
    }

    /// Nearest surface straight below `origin` within `max_distance`
    pub fn raycast_down(&self, origin: Vec3, max_distance: f32) -> Option<f32> {
        let ray = Ray3::down(origin);
        let candidates = self
            .grid
            .column(origin.x, origin.z)
            .iter()
            .map(|&index| &self.triangles[index as usize]);
        nearest(candidates, &ray, max_distance)
    }
}

fn nearest<'a>(
    triangles: impl Iterator<Item = &'a Triangle>,
    ray: &Ray3,
    max_distance: f32,
) -> Option<f32> {
    triangles
        .filter_map(|tri| tri.intersect(ray))
        .filter(|&t| t < max_distance)
        .reduce(f32::min)
}

/// Uniform XZ bucket grid of triangle indices
#[derive(Debug, Default)]
struct ColumnGrid {
    min_x: f32,
    min_z: f32,
    cell_w: f32,
    cell_d: f32,
    cols: usize,
    rows: usize,
    cells: Vec<Vec<u32>>,
}

impl ColumnGrid {
    fn build(triangles: &[Triangle]) -> Self {
        let Some((min, max)) = triangles.iter().map(Triangle::bounds).reduce(|(amin, amax), (bmin, bmax)| {
            (amin.min_components(bmin), amax.max_components(bmax))
        }) else {
            return Self::default();
        };

        let per_axis = ((triangles.len() as f32).sqrt().ceil() as usize).clamp(1, MAX_GRID_CELLS);
        let mut grid = Self {
            min_x: min.x,
            min_z: min.z,
            cell_w: ((max.x - min.x) / per_axis as f32).max(f32::EPSILON),
            cell_d: ((max.z - min.z) / per_axis as f32).max(f32::EPSILON),
            cols: per_axis,
            rows: per_axis,
            cells: vec![Vec::new(); per_axis * per_axis],
        };

        for (index, tri) in triangles.iter().enumerate() {
            let (tmin, tmax) = tri.bounds();
            let (c0, r0) = grid.clamped_cell(tmin.x, tmin.z);
            let (c1, r1) = grid.clamped_cell(tmax.x, tmax.z);
            for row in r0..=r1 {
                for col in c0..=c1 {
                    grid.cells[row * grid.cols + col].push(index as u32);
                }
            }
        }

        grid
    }

    fn clamped_cell(&self, x: f32, z: f32) -> (usize, usize) {
        let col = ((x - self.min_x) / self.cell_w).floor().max(0.0) as usize;
        let row = ((z - self.min_z) / self.cell_d).floor().max(0.0) as usize;
        (col.min(self.cols - 1), row.min(self.rows - 1))
    }

    /// Triangle indices whose footprint may cover (x, z)
    fn column(&self, x: f32, z: f32) -> &[u32] {
        if self.cells.is_empty() {
            return &[];
        }
        let fx = (x - self.min_x) / self.cell_w;
        let fz = (z - self.min_z) / self.cell_d;
        // Points just on the max edge still belong to the last cell
        if !(0.0..=self.cols as f32).contains(&fx) || !(0.0..=self.rows as f32).contains(&fz) {
            return &[];
        }
        let (col, row) = self.clamped_cell(x, z);
        &self.cells[row * self.cols + col]
    }
}

/// Two-triangle square centered on the origin at height `y`
///
/// Handy for tests and as a stand-in surface.
pub fn flat_quad(half_extent: f32, y: f32) -> Vec<Triangle> {
    let a = Vec3::new(-half_extent, y, -half_extent);
    let b = Vec3::new(half_extent, y, -half_extent);
    let c = Vec3::new(half_extent, y, half_extent);
    let d = Vec3::new(-half_extent, y, half_extent);
    vec![Triangle::new(a, b, c), Triangle::new(a, c, d)]
}
