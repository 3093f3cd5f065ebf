//! Mesh builder for the `o`/`v`/`f` subset of OBJ.
//!
//! An `o` record closes the open section once it holds vertices and faces;
//! a closed section becomes a [`Mesh`]. Vertices are axis-remapped on ingestion and UVs are a planar
//! projection onto the horizontal (x, z) plane.

use std::{
    fs,
    io::Read,
    mem,
    path::Path,
};

use anyhow::{Context, Result};
use corelib::{Vec2, Vec3, vec2};

use crate::{
    error::{ObjError, ObjResult},
    mesh::Mesh,
    record::{self, FaceIndices, Line, Record},
};

/// How `o` records split the input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SectionMode {
    /// One mesh per object section.
    #[default]
    PerObject,
    /// `o` is ignored and the whole stream becomes exactly one mesh.
    SingleMesh,
}

/// What to do with 4-index faces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QuadPolicy {
    /// Split `(a, b, c, d)` into `(a, b, c)` and `(a, c, d)`.
    #[default]
    Triangulate,
    /// Keep only `(a, b, c)`.
    Truncate,
    /// Store the quad verbatim in [`Mesh::quads`].
    Preserve,
}

/// Importer configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ImportOptions {
    pub sections: SectionMode,
    pub quads: QuadPolicy,
    /// Rotation (radians) applied to every UV about the origin. Off by default.
    pub uv_rotation: Option<f32>,
}

impl ImportOptions {
    pub fn with_sections(mut self, sections: SectionMode) -> Self {
        self.sections = sections;
        self
    }

    pub fn with_quads(mut self, quads: QuadPolicy) -> Self {
        self.quads = quads;
        self
    }

    pub fn with_uv_rotation(mut self, radians: f32) -> Self {
        self.uv_rotation = Some(radians);
        self
    }
}

/// Load meshes from a file path.
pub fn load_meshes_from_path(path: impl AsRef<Path>, options: &ImportOptions) -> Result<Vec<Mesh>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read OBJ file: {}", path.display()))?;
    let meshes = build_meshes(&text, options)
        .with_context(|| format!("Failed to import OBJ file: {}", path.display()))?;
    log::info!("Loaded {} mesh(es) from {}", meshes.len(), path.display());
    Ok(meshes)
}

/// Load meshes from any [`Read`] implementation. The input is read in full first.
pub fn load_meshes_from_reader<R: Read>(mut reader: R, options: &ImportOptions) -> Result<Vec<Mesh>> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .context("Failed to read OBJ input")?;
    Ok(build_meshes(&text, options)?)
}

/// Build meshes from OBJ text. Any malformed record fails the whole call.
pub fn build_meshes(text: &str, options: &ImportOptions) -> ObjResult<Vec<Mesh>> {
    let mut meshes = Vec::new();
    let mut open = Section::default();

    for line in record::lines(text) {
        match line.record()? {
            Record::Object(name) => {
                if options.sections == SectionMode::SingleMesh {
                    continue;
                }
                if open.is_closable() {
                    let done = mem::replace(&mut open, Section::named(name));
                    meshes.push(done.close(options));
                } else if open.vertices.is_empty() {
                    open = Section::named(name);
                }
            }
            Record::Vertex(raw) => open.push_vertex(&line, record::remap_axes(raw))?,
            Record::Face(face) => open.push_face(&line, face, options.quads)?,
        }
    }

    match options.sections {
        SectionMode::PerObject if open.vertices.is_empty() => {}
        _ => meshes.push(open.close(options)),
    }
    Ok(meshes)
}

/// Planar projection of a remapped vertex onto the horizontal plane.
#[inline]
pub fn planar_uv(v: Vec3, rotation: Option<f32>) -> Vec2 {
    let uv = vec2(v.x, v.z);
    match rotation {
        Some(angle) => Vec2::from_angle(angle).rotate(uv),
        None => uv,
    }
}

#[derive(Debug, Default)]
struct Section {
    name: Option<String>,
    vertices: Vec<Vec3>,
    indices: Vec<u32>,
    quads: Vec<[u32; 4]>,
}

impl Section {
    fn named(name: &str) -> Self {
        Self {
            name: (!name.is_empty()).then(|| name.to_owned()),
            ..Self::default()
        }
    }

    fn has_faces(&self) -> bool {
        !self.indices.is_empty() || !self.quads.is_empty()
    }

    /// An `o` marker only closes a section holding both vertices and faces.
    /// Anything less stays open and its vertices remain addressable.
    fn is_closable(&self) -> bool {
        !self.vertices.is_empty() && self.has_faces()
    }

    fn push_vertex(&mut self, line: &Line<'_>, v: Vec3) -> ObjResult<()> {
        if u32::try_from(self.vertices.len()).is_err() {
            return Err(ObjError::TooManyVertices { line: line.number });
        }
        self.vertices.push(v);
        Ok(())
    }

    fn push_face(&mut self, line: &Line<'_>, face: FaceIndices, quads: QuadPolicy) -> ObjResult<()> {
        match face {
            FaceIndices::Triangle(raw) => {
                let [a, b, c] = raw.map(|i| self.resolve(line, i));
                self.indices.extend([a?, b?, c?]);
            }
            FaceIndices::Quad([a, b, c, _]) if quads == QuadPolicy::Truncate => {
                let [a, b, c] = [a, b, c].map(|i| self.resolve(line, i));
                self.indices.extend([a?, b?, c?]);
            }
            FaceIndices::Quad(raw) => {
                let [a, b, c, d] = raw.map(|i| self.resolve(line, i));
                let (a, b, c, d) = (a?, b?, c?, d?);
                if quads == QuadPolicy::Preserve {
                    self.quads.push([a, b, c, d]);
                } else {
                    self.indices.extend([a, b, c, a, c, d]);
                }
            }
        }
        Ok(())
    }

    /// 1-based index into this section's vertices, checked against what has
    /// been read so far.
    fn resolve(&self, line: &Line<'_>, raw: i64) -> ObjResult<u32> {
        let available = self.vertices.len();
        usize::try_from(raw)
            .ok()
            .filter(|&i| (1..=available).contains(&i))
            .and_then(|i| u32::try_from(i - 1).ok())
            .ok_or(ObjError::DanglingIndex {
                line: line.number,
                index: raw,
                available,
            })
    }

    fn close(self, options: &ImportOptions) -> Mesh {
        let uvs = self
            .vertices
            .iter()
            .map(|&v| planar_uv(v, options.uv_rotation))
            .collect();
        log::debug!(
            "Closed section {:?}: {} vertices, {} triangles, {} quads",
            self.name.as_deref().unwrap_or("<unnamed>"),
            self.vertices.len(),
            self.indices.len() / 3,
            self.quads.len()
        );
        Mesh {
            name: self.name,
            vertices: self.vertices,
            indices: self.indices,
            quads: self.quads,
            uvs,
        }
    }
}
