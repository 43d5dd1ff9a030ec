//! Invariants every generated mesh must satisfy.

use std::collections::HashMap;

use glam::Vec3;
use shape_mesh::math::{Angle, AngularRange};
use shape_mesh::primitives::*;
use shape_mesh::{
    ConeSubdivision, CylinderSubdivision, SphereSubdivision, SphericalGrid, Submesh, TorusSubdivision,
};

fn arc(begin: f32, extent: f32) -> AngularRange {
    AngularRange::new(Angle::from_degrees(begin), Angle::from_degrees(extent))
}

/// One mesh per generator variant, with a mix of ranges and paddings.
fn corpus() -> Vec<(&'static str, Submesh)> {
    let cylinder = CylinderSubdivision::both(10, 2);
    let cone = ConeSubdivision::both(10, 2);
    let torus = TorusSubdivision::both(10, 6);
    let partial = arc(20.0, 135.0);
    vec![
        ("plane surface", generate_plane_surface(2.0, 1.0)),
        ("plane box", generate_plane_box(1.0, 2.0, 3.0)),
        ("cube", generate_cube(1.0, 1.0, 1.0)),
        ("plane volume", generate_plane_volume(1.0, 1.0, 0.002, 0.01)),
        ("volumetric plane", generate_volumetric_plane(1.0, 1.0, -0.01)),
        ("sphere grid", generate_sphere(1.5, 0.0, SphereSubdivision::default())),
        ("sphere octahedron", generate_sphere(1.5, 0.1, SphereSubdivision::recursive())),
        ("cylindrical surface", generate_cylindrical_surface(1.0, 2.0, partial, cylinder)),
        ("cylinder", generate_cylinder(1.0, 2.0, 0.05, partial, cylinder)),
        (
            "volumetric cylindrical surface",
            generate_volumetric_cylindrical_surface(1.0, 2.0, -0.05, partial, cylinder),
        ),
        ("conical surface", generate_conical_surface(0.0, 1.0, 2.0, partial, cone)),
        ("cone", generate_cone(0.3, 1.0, 2.0, -0.05, partial, cone)),
        (
            "volumetric conical surface",
            generate_volumetric_conical_surface(0.3, 1.0, 2.0, 0.05, AngularRange::FULL, cone),
        ),
        ("toric surface", generate_toric_surface(2.0, 0.5, partial, torus)),
        ("torus", generate_torus(2.0, 0.5, 0.05, partial, torus)),
        (
            "volumetric toric surface",
            generate_volumetric_toric_surface(2.0, 0.5, 0.05, partial, torus),
        ),
    ]
}

#[test]
fn attributes_match_and_indices_are_in_range() {
    for (name, mesh) in corpus() {
        assert_eq!(mesh.positions().len(), mesh.normals().len(), "{name}");
        assert_eq!(mesh.positions().len(), mesh.texcoords().len(), "{name}");
        assert_eq!(mesh.indices().len() % 3, 0, "{name}");
        assert!(
            mesh.indices().iter().all(|&i| (i as usize) < mesh.vertex_count()),
            "{name}"
        );
        assert!(mesh.validate().is_ok(), "{name}");
        assert!(!mesh.is_empty(), "{name}");
    }
}

/// Signed count of directed edges per undirected edge, after welding
/// vertices closer than `1e-5`. A closed, consistently wound mesh pairs every
/// edge with its reverse, leaving no non-zero entry.
fn unpaired_edges(mesh: &Submesh) -> usize {
    let mut welded: Vec<Vec3> = Vec::new();
    let ids: Vec<usize> = mesh
        .positions()
        .iter()
        .map(|p| match welded.iter().position(|q| q.distance(*p) < 1e-5) {
            Some(id) => id,
            None => {
                welded.push(*p);
                welded.len() - 1
            }
        })
        .collect();

    let mut balance: HashMap<(usize, usize), i32> = HashMap::new();
    for [a, b, c] in mesh.triangles() {
        let corners = [ids[a as usize], ids[b as usize], ids[c as usize]];
        for k in 0..3 {
            let (from, to) = (corners[k], corners[(k + 1) % 3]);
            if from != to {
                *balance.entry((from.min(to), from.max(to))).or_default() += if from < to { 1 } else { -1 };
            }
        }
    }
    balance.values().filter(|count| **count != 0).count()
}

#[test]
fn partial_sweeps_are_closed_with_lateral_rows() {
    let cylinder = CylinderSubdivision::both(10, 3);
    let cone = ConeSubdivision::both(10, 3);
    let partial = arc(20.0, 135.0);
    let closed = [
        ("cylinder", generate_cylinder(1.0, 2.0, 0.0, partial, cylinder)),
        ("padded cylinder", generate_cylinder(1.0, 2.0, 0.05, partial, cylinder)),
        (
            "volumetric cylindrical surface",
            generate_volumetric_cylindrical_surface(1.0, 2.0, 0.05, partial, cylinder),
        ),
        (
            "inset cylindrical shell",
            generate_volumetric_cylindrical_surface(1.0, 2.0, -0.1, partial, cylinder),
        ),
        ("true cone", generate_cone(0.0, 1.0, 2.0, 0.0, partial, cone)),
        ("frustum", generate_cone(0.3, 1.0, 2.0, 0.0, partial, cone)),
        (
            "volumetric conical surface",
            generate_volumetric_conical_surface(0.3, 1.0, 2.0, 0.05, partial, cone),
        ),
    ];
    for (name, mesh) in closed {
        assert_eq!(unpaired_edges(&mesh), 0, "{name}");
    }

    let open = generate_cylindrical_surface(1.0, 2.0, partial, cylinder);
    assert!(unpaired_edges(&open) > 0);
}

#[test]
fn double_inversion_is_identity() {
    for (name, mesh) in corpus() {
        let once = mesh.inverted();
        assert_ne!(once.winding(), mesh.winding(), "{name}");
        assert_eq!(once.inverted(), mesh, "{name}");
    }
}

#[test]
fn concatenation_offsets_indices() {
    let meshes = corpus();
    let (_, a) = &meshes[1];
    let (_, b) = &meshes[13];
    let joined = a.clone() + b.clone();

    let mut positions = a.positions().to_vec();
    positions.extend_from_slice(b.positions());
    assert_eq!(joined.positions(), positions.as_slice());

    let offset = a.vertex_count() as u32;
    assert_eq!(&joined.indices()[..a.indices().len()], a.indices());
    for (joined_index, b_index) in joined.indices()[a.indices().len()..].iter().zip(b.indices()) {
        assert_eq!(*joined_index, b_index + offset);
    }
}

#[test]
fn sphere_vertices_lie_on_sphere() {
    let subdivisions = [
        SphereSubdivision::SphericalCoordinates(SphericalGrid::both(7, 13)),
        SphereSubdivision::RecursiveSubdivision { level: 3 },
    ];
    for radius in [0.25_f32, 1.0, 3.0] {
        for subdivision in subdivisions {
            let mesh = generate_sphere(radius, 0.0, subdivision);
            for (p, n) in mesh.positions().iter().zip(mesh.normals()) {
                assert!((p.length() - radius).abs() < 1e-5 * radius.max(1.0));
                assert!(n.abs_diff_eq(p.normalize(), 1e-5));
            }
        }
    }
}

#[test]
fn reflections_keep_faces_along_normals() {
    let faces_against_normals = |mesh: &Submesh| {
        let p = mesh.positions();
        mesh.triangles()
            .filter(|[a, b, c]| {
                let face = (p[*b as usize] - p[*a as usize]).cross(p[*c as usize] - p[*a as usize]);
                face.dot(mesh.normals()[*a as usize]) < 0.0
            })
            .count()
    };
    let sphere = generate_sphere(1.0, 0.0, SphereSubdivision::RecursiveSubdivision { level: 3 });
    assert_eq!(faces_against_normals(&sphere), 0);

    let reflected = [
        sphere.clone().scaled_uniform(-1.0),
        sphere.clone().scaled(Vec3::new(-1.0, 1.0, 1.0)),
        sphere.clone().transformed(glam::Mat4::from_scale(Vec3::new(1.0, -1.0, 1.0))),
    ];
    for mesh in reflected {
        assert_eq!(faces_against_normals(&mesh), 0);
        assert_eq!(mesh.winding(), sphere.winding());
    }
}

#[test]
fn cone_with_equal_radii_is_a_cylinder() {
    for range in [AngularRange::FULL, arc(-30.0, 100.0)] {
        let cone = generate_conical_surface(0.7, 0.7, 1.3, range, ConeSubdivision::both(9, 2));
        let cylinder = generate_cylindrical_surface(0.7, 1.3, range, CylinderSubdivision::both(9, 2));
        assert_eq!(cone.vertex_count(), cylinder.vertex_count());
        for (a, b) in cone.positions().iter().zip(cylinder.positions()) {
            assert!(a.abs_diff_eq(*b, 1e-5));
        }
    }
}

#[test]
fn torus_full_arc_is_seamless_and_partial_arc_is_capped() {
    let subdivision = TorusSubdivision::both(16, 8);
    let full = generate_torus(1.0, 0.3, 0.0, arc(0.0, 360.0), subdivision);
    assert_eq!(full.triangle_count(), 16 * 8 * 2);
    assert_eq!(full.vertex_count(), 17 * 9);

    let partial = generate_torus(1.0, 0.3, 0.0, arc(0.0, 90.0), subdivision);
    // four toroidal segments
    let tube_vertices = 5 * 9;
    assert_eq!(partial.triangle_count(), 4 * 8 * 2 + 2 * 8);
    let positions = partial.positions();
    let begin_loop = &positions[..8];
    let end_loop = &positions[4 * 9..4 * 9 + 8];
    assert_eq!(&positions[tube_vertices + 1..tube_vertices + 9], begin_loop);
    assert_eq!(&positions[tube_vertices + 10..tube_vertices + 18], end_loop);
}

#[test]
fn four_by_one_cylinder() {
    let mesh = generate_cylinder(1.0, 2.0, 0.0, AngularRange::FULL, CylinderSubdivision::both(4, 1));
    assert_eq!(mesh.triangle_count(), 16);
    assert_eq!(mesh.indices().len(), 48);

    let lateral = generate_cylindrical_surface(1.0, 2.0, AngularRange::FULL, CylinderSubdivision::both(4, 1));
    assert_eq!(lateral.triangle_count(), 8);
    for p in lateral.positions() {
        assert!((Vec3::new(p.x, 0.0, p.z).length() - 1.0).abs() < 1e-6);
        assert!(p.y == -1.0 || p.y == 1.0);
    }
}

#[test]
fn apex_collapses_to_one_point() {
    for bottom_radius in [0.01_f32, 0.5, 4.0, 100.0] {
        let mesh = generate_conical_surface(0.0, bottom_radius, 1.0, AngularRange::FULL, ConeSubdivision::both(24, 3));
        let apex = mesh.positions()[0];
        // meridian-major layout: the first vertex of each meridian is the apex
        for meridian in mesh.positions().chunks(4) {
            assert!(meridian[0].distance(apex) < 1e-5);
        }
    }
}
