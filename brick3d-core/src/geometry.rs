/// Indexed triangle meshes and the generators for the demo's two shapes
use nalgebra::{Point3, Vector2, Vector3};
use std::collections::HashMap;
use std::f32::consts::PI;

use crate::error::{RenderError, Result};

/// Vertex attributes a mesh can carry, named as the shaders declare them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Position,
    Normal,
    Uv,
}

impl Attribute {
    pub fn name(self) -> &'static str {
        match self {
            Attribute::Position => "position",
            Attribute::Normal => "normal",
            Attribute::Uv => "uv",
        }
    }

    /// Number of float components per vertex
    pub fn size(self) -> i32 {
        match self {
            Attribute::Position | Attribute::Normal => 3,
            Attribute::Uv => 2,
        }
    }
}

/// An indexed triangle mesh. `normals` and `uvs` are either empty or
/// parallel to `positions`.
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    pub positions: Vec<Point3<f32>>,
    pub normals: Vec<Vector3<f32>>,
    pub uvs: Vec<Vector2<f32>>,
    pub cells: Vec<[u32; 3]>,
}

impl MeshData {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.cells.len()
    }

    /// Attributes present on this mesh, position first
    pub fn attributes(&self) -> Vec<Attribute> {
        let mut attributes = vec![Attribute::Position];
        if !self.normals.is_empty() {
            attributes.push(Attribute::Normal);
        }
        if !self.uvs.is_empty() {
            attributes.push(Attribute::Uv);
        }
        attributes
    }

    /// Flatten one attribute into a tightly packed float array
    pub fn attribute_data(&self, attribute: Attribute) -> Vec<f32> {
        match attribute {
            Attribute::Position => self.positions.iter().flat_map(|p| [p.x, p.y, p.z]).collect(),
            Attribute::Normal => self.normals.iter().flat_map(|n| [n.x, n.y, n.z]).collect(),
            Attribute::Uv => self.uvs.iter().flat_map(|uv| [uv.x, uv.y]).collect(),
        }
    }

    /// Flatten the cells into 16-bit indices
    pub fn index_data(&self) -> Result<Vec<u16>> {
        if self.positions.len() > usize::from(u16::MAX) + 1 {
            return Err(RenderError::MeshTooLarge {
                vertices: self.positions.len(),
            });
        }
        Ok(self
            .cells
            .iter()
            .flat_map(|cell| cell.map(|i| i as u16))
            .collect())
    }
}

/// Unit sphere built by repeatedly subdividing an icosahedron.
///
/// Level 0 is the icosahedron itself; every level splits each triangle into
/// four, so a level `n` sphere has `20 * 4^n` triangles. Only positions are
/// produced.
pub fn icosphere(subdivisions: u32) -> MeshData {
    let t = (1.0 + 5f32.sqrt()) / 2.0;

    let mut positions: Vec<Point3<f32>> = [
        (-1.0, t, 0.0),
        (1.0, t, 0.0),
        (-1.0, -t, 0.0),
        (1.0, -t, 0.0),
        (0.0, -1.0, t),
        (0.0, 1.0, t),
        (0.0, -1.0, -t),
        (0.0, 1.0, -t),
        (t, 0.0, -1.0),
        (t, 0.0, 1.0),
        (-t, 0.0, -1.0),
        (-t, 0.0, 1.0),
    ]
    .iter()
    .map(|&(x, y, z)| Point3::from(Vector3::new(x, y, z).normalize()))
    .collect();

    let mut cells: Vec<[u32; 3]> = vec![
        [0, 11, 5],
        [0, 5, 1],
        [0, 1, 7],
        [0, 7, 10],
        [0, 10, 11],
        [1, 5, 9],
        [5, 11, 4],
        [11, 10, 2],
        [10, 7, 6],
        [7, 1, 8],
        [3, 9, 4],
        [3, 4, 2],
        [3, 2, 6],
        [3, 6, 8],
        [3, 8, 9],
        [4, 9, 5],
        [2, 4, 11],
        [6, 2, 10],
        [8, 6, 7],
        [9, 8, 1],
    ];

    for _ in 0..subdivisions {
        // Edges are shared by two faces; reuse their midpoints
        let mut midpoints: HashMap<(u32, u32), u32> = HashMap::new();
        let mut midpoint = |a: u32, b: u32, positions: &mut Vec<Point3<f32>>| -> u32 {
            let key = (a.min(b), a.max(b));
            *midpoints.entry(key).or_insert_with(|| {
                let mid = nalgebra::center(&positions[a as usize], &positions[b as usize]);
                positions.push(Point3::from(mid.coords.normalize()));
                (positions.len() - 1) as u32
            })
        };

        let mut next = Vec::with_capacity(cells.len() * 4);
        for &[a, b, c] in &cells {
            let ab = midpoint(a, b, &mut positions);
            let bc = midpoint(b, c, &mut positions);
            let ca = midpoint(c, a, &mut positions);
            next.push([a, ab, ca]);
            next.push([b, bc, ab]);
            next.push([c, ca, bc]);
            next.push([ab, bc, ca]);
        }
        cells = next;
    }

    MeshData {
        positions,
        normals: Vec::new(),
        uvs: Vec::new(),
        cells,
    }
}

/// Torus tessellation parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TorusOptions {
    pub major_radius: f32,
    pub minor_radius: f32,
    pub major_segments: u32,
    pub minor_segments: u32,
    /// Sweep of the ring in radians
    pub arc: f32,
}

impl Default for TorusOptions {
    fn default() -> Self {
        Self {
            major_radius: 1.0,
            minor_radius: 0.25,
            major_segments: 64,
            minor_segments: 64,
            arc: PI * 2.0,
        }
    }
}

/// Torus around the Z axis with positions, normals and uvs.
///
/// The seam vertices are duplicated so uvs run 0..=1 in both directions;
/// the grid is `(major_segments + 1) * (minor_segments + 1)` vertices.
pub fn torus(options: &TorusOptions) -> MeshData {
    let TorusOptions {
        major_radius,
        minor_radius,
        major_segments,
        minor_segments,
        arc,
    } = *options;

    let row = major_segments + 1;
    let vertex_count = (row * (minor_segments + 1)) as usize;
    let mut mesh = MeshData {
        positions: Vec::with_capacity(vertex_count),
        normals: Vec::with_capacity(vertex_count),
        uvs: Vec::with_capacity(vertex_count),
        cells: Vec::with_capacity((major_segments * minor_segments * 2) as usize),
    };

    for j in 0..=minor_segments {
        for i in 0..=major_segments {
            let s = i as f32 / major_segments as f32;
            let t = j as f32 / minor_segments as f32;
            let u = s * arc;
            let v = t * PI * 2.0;

            let center = Point3::new(u.cos() * major_radius, u.sin() * major_radius, 0.0);
            let ring = major_radius + minor_radius * v.cos();
            let position = Point3::new(ring * u.cos(), ring * u.sin(), minor_radius * v.sin());

            mesh.normals.push((position - center).normalize());
            mesh.positions.push(position);
            mesh.uvs.push(Vector2::new(s, t));
        }
    }

    for j in 1..=minor_segments {
        for i in 1..=major_segments {
            let a = row * j + i - 1;
            let b = row * (j - 1) + i - 1;
            let c = row * (j - 1) + i;
            let d = row * j + i;
            mesh.cells.push([a, b, d]);
            mesh.cells.push([b, c, d]);
        }
    }

    mesh
}
