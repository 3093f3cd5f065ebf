//! Asset loading: the `o`/`v`/`f` OBJ subset used for road geometry.
//! Meshes (one per object section) and anchor pairs (paired vertex markers).

pub mod anchor;
pub mod error;
pub mod mesh;
pub mod obj;
pub mod record;

pub use anchor::{extract_anchors, extract_anchors_strict, load_anchors_from_path};
pub use error::{ObjError, ObjResult};
pub use mesh::{AnchorPair, Mesh};
pub use obj::{
    ImportOptions, QuadPolicy, SectionMode, build_meshes, load_meshes_from_path,
    load_meshes_from_reader,
};
