use asset::{
    AnchorPair, ImportOptions, ObjError, QuadPolicy, SectionMode, build_meshes, extract_anchors,
};
use corelib::{Axis, Extent, extent, vec3};
use quickcheck_macros::quickcheck;

type SectionSpec = (Vec<(i16, i16, i16)>, Vec<(u16, u16, u16, Option<u16>)>);

/// Renders sections as OBJ text; face indices are folded into range.
fn render(sections: &[SectionSpec]) -> String {
    let mut out = String::new();
    for (n, (verts, faces)) in sections.iter().enumerate() {
        out.push_str(&format!("o section_{n}\n"));
        for (x, y, z) in verts {
            out.push_str(&format!("v {x} {y} {z}\n"));
        }
        if verts.is_empty() {
            continue;
        }
        let idx = |i: u16| usize::from(i) % verts.len() + 1;
        for &(a, b, c, d) in faces {
            match d {
                Some(d) => out.push_str(&format!("f {} {} {} {}\n", idx(a), idx(b), idx(c), idx(d))),
                None => out.push_str(&format!("f {} {} {}\n", idx(a), idx(b), idx(c))),
            }
        }
    }
    out
}

#[test]
fn two_object_sections() {
    let text = "o a\nv 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\no b\nv 2 2 2\nv 3 2 2\nv 2 3 2\nf 1 2 3\n";
    let meshes = build_meshes(text, &ImportOptions::default()).unwrap();
    assert_eq!(meshes.len(), 2);
    for mesh in &meshes {
        assert_eq!(mesh.vertices.len(), 3);
        assert_eq!(mesh.triangles().collect::<Vec<_>>(), vec![[0, 1, 2]]);
    }
}

#[test]
fn adjacent_markers_emit_no_empty_mesh() {
    let text = "o a\no b\nv 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n";
    let meshes = build_meshes(text, &ImportOptions::default()).unwrap();
    assert_eq!(meshes.len(), 1);
    assert!(meshes.iter().all(|m| m.is_valid()));
}

#[test]
fn non_numeric_face_fails_whole_import() {
    let text = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 a 3\n";
    let result = build_meshes(text, &ImportOptions::default());
    assert!(matches!(result, Err(ObjError::MalformedNumericField { line: 4, .. })));
}

#[test]
fn single_anchor_pair() {
    let pairs = extract_anchors("v 1 2 3\nv 4 5 6\n").unwrap();
    assert_eq!(
        pairs,
        vec![AnchorPair::new(vec3(1.0, 3.0, -2.0), vec3(4.0, 6.0, -5.0))]
    );
}

#[test]
fn extent_example() {
    let pts = [vec3(1.0, 0.0, 0.0), vec3(-1.0, 0.0, 0.0), vec3(0.0, 5.0, 0.0)];
    assert_eq!(extent(&pts, Axis::X), Some(Extent::new(-1.0, 1.0)));
    assert_eq!(extent(&pts, Axis::Y), Some(Extent::new(0.0, 5.0)));
    assert_eq!(extent(&[], Axis::X), None);
}

#[test]
fn mesh_bounds_use_remapped_axes() {
    let text = "v 0 0 0\nv 2 4 6\nv 1 1 1\nf 1 2 3\n";
    let mesh = &build_meshes(text, &ImportOptions::default()).unwrap()[0];
    let bounds = mesh.bounds().unwrap();
    assert_eq!(bounds.min, vec3(0.0, 0.0, -4.0));
    assert_eq!(bounds.max, vec3(2.0, 6.0, 0.0));
}

#[quickcheck]
fn indices_stay_in_range(sections: Vec<SectionSpec>) -> bool {
    let text = render(&sections);
    [QuadPolicy::Triangulate, QuadPolicy::Truncate, QuadPolicy::Preserve]
        .into_iter()
        .all(|quads| {
            let opts = ImportOptions::default().with_quads(quads);
            let meshes = build_meshes(&text, &opts).unwrap();
            meshes.iter().all(|m| {
                let n = m.vertices.len() as u32;
                m.indices.len() % 3 == 0
                    && m.indices.iter().all(|&i| i < n)
                    && m.quads.iter().flatten().all(|&i| i < n)
                    && m.uvs.len() == m.vertices.len()
            })
        })
}

#[quickcheck]
fn faceless_sections_merge_forward(sections: Vec<SectionSpec>) -> bool {
    // Mirror the section rules: a marker closes only vertices-with-faces,
    // end of input closes anything holding vertices.
    let (mut expected, mut vertices, mut faced) = (0, 0, false);
    for (v, f) in &sections {
        if vertices > 0 && faced {
            expected += 1;
            vertices = 0;
            faced = false;
        }
        vertices += v.len();
        faced |= !v.is_empty() && !f.is_empty();
    }
    if vertices > 0 {
        expected += 1;
    }
    let meshes = build_meshes(&render(&sections), &ImportOptions::default()).unwrap();
    let total: usize = sections.iter().map(|(v, _)| v.len()).sum();
    meshes.len() == expected && meshes.iter().map(|m| m.vertices.len()).sum::<usize>() == total
}

#[test]
fn faceless_object_feeds_the_next_one() {
    let text = "o points\nv 9 9 9\no tri\nv 0 0 0\nv 1 0 0\nf 1 2 3\n";
    let meshes = build_meshes(text, &ImportOptions::default()).unwrap();
    assert_eq!(meshes.len(), 1);
    assert_eq!(meshes[0].vertices[0], vec3(9.0, 9.0, -9.0));
    assert_eq!(meshes[0].indices, vec![0, 1, 2]);
}

#[test]
fn vertices_without_faces_still_make_a_mesh() {
    let meshes = build_meshes("v 0 0 0\nv 1 0 0\n", &ImportOptions::default()).unwrap();
    assert_eq!(meshes.len(), 1);
    assert_eq!(meshes[0].uvs.len(), 2);
    assert_eq!(meshes[0].triangle_count(), 0);
}

#[quickcheck]
fn import_is_deterministic(sections: Vec<SectionSpec>) -> bool {
    let text = render(&sections);
    let opts = ImportOptions::default().with_uv_rotation(0.3);
    build_meshes(&text, &opts) == build_meshes(&text, &opts)
}

#[quickcheck]
fn axis_remap_is_permutation_and_flip(verts: Vec<(i16, i16, i16)>) -> bool {
    let text = render(&[(verts.clone(), Vec::new())]);
    let opts = ImportOptions::default().with_sections(SectionMode::SingleMesh);
    let mesh = &build_meshes(&text, &opts).unwrap()[0];
    mesh.vertices.len() == verts.len()
        && mesh.vertices.iter().zip(&verts).all(|(v, &(a, b, c))| {
            v.x == f32::from(a) && v.y == f32::from(c) && v.z == -f32::from(b)
        })
}
