//! Tests for mesh assembly and change tracking.

use super::*;
use crate::math::{Angle, AngularRange};
use crate::subdivision::{CylinderSubdivision, TorusSubdivision};
use crate::submesh::Winding;
use approx::assert_abs_diff_eq;

fn cylinder() -> ShapeIntrinsics {
    CylinderIntrinsics {
        radius: 1.0,
        length: 2.0,
        subdivision: CylinderSubdivision::both(12, 1),
        ..Default::default()
    }
    .into()
}

fn half() -> AngularRange {
    AngularRange::new(Angle::ZERO, Angle::from_degrees(180.0))
}

// =============================================================================
// ASSEMBLY
// =============================================================================

#[test]
fn test_assemble_volume_slots() {
    let config = GlobalConfig::default();
    let slots = assemble(&cylinder(), &config);
    assert_eq!(slots.wireframe, slots.surface);
    assert_eq!(slots.wireframe, cylinder().generate(0.0));

    let (_, occlusion_max) = slots.occlusion.bounding_box().unwrap();
    let (_, outline_max) = slots.outline.bounding_box().unwrap();
    assert_abs_diff_eq!(occlusion_max.x, 1.0 - config.occlusion_inset, epsilon = 1e-6);
    assert_abs_diff_eq!(outline_max.x, 1.0 + config.outline_width, epsilon = 1e-6);
}

#[test]
fn test_outline_is_inside_out() {
    let config = GlobalConfig::default();
    let slots = assemble(&cylinder(), &config);
    assert_eq!(slots.outline.winding(), Winding::Clockwise);
    assert_eq!(slots.wireframe.winding(), Winding::CounterClockwise);
    let outset = cylinder().generate(config.outline_width);
    for (flipped, original) in slots.outline.normals().iter().zip(outset.normals()) {
        assert_eq!(*flipped, -*original);
    }
}

#[test]
fn test_shape_outline_width_overrides_config() {
    let shape = cylinder().with_outline_width(Some(0.1));
    let slots = assemble(&shape, &GlobalConfig::default());
    let (_, max) = slots.outline.bounding_box().unwrap();
    assert_abs_diff_eq!(max.x, 1.1, epsilon = 1e-6);
}

#[test]
fn test_surface_shape_has_open_body_and_closed_shells() {
    let shape: ShapeIntrinsics = CylinderIntrinsics {
        shape: BodyShape::Surface,
        subdivision: CylinderSubdivision::both(12, 1),
        ..Default::default()
    }
    .into();
    let slots = assemble(&shape, &GlobalConfig::default());
    // open band only
    assert_eq!(slots.surface.triangle_count(), 12 * 2);
    // two walls and two covers
    assert_eq!(slots.occlusion.triangle_count(), 4 * 12 * 2);
    assert_eq!(slots.outline.triangle_count(), 4 * 12 * 2);
}

#[test]
fn test_plane_shapes() {
    let volume: ShapeIntrinsics = PlaneIntrinsics::default().into();
    assert_eq!(volume.generate(0.0).triangle_count(), 12);
    let (min, max) = volume.generate(0.0).bounding_box().unwrap();
    assert_abs_diff_eq!(max.z - min.z, config::constants::PLANE_VOLUME_THICKNESS, epsilon = 1e-7);

    let surface: ShapeIntrinsics = PlaneIntrinsics {
        shape: BodyShape::Surface,
        ..Default::default()
    }
    .into();
    assert_eq!(surface.generate(0.0).triangle_count(), 2);
    assert_eq!(surface.generate(0.01).triangle_count(), 12);
}

#[test]
fn test_torus_shapes() {
    let subdivision = TorusSubdivision::both(12, 8);
    let torus = |shape| -> ShapeIntrinsics {
        TorusIntrinsics {
            mean_radius: 2.0,
            tube_radius: 0.5,
            shape,
            subdivision,
            ..Default::default()
        }
        .into()
    };
    assert_eq!(torus(TorusShape::Volume).generate(0.0).triangle_count(), 12 * 8 * 2);
    assert_eq!(
        torus(TorusShape::PartialSurface(half())).generate(0.0).triangle_count(),
        6 * 8 * 2
    );
    assert_eq!(
        torus(TorusShape::PartialVolume(half())).generate(0.0).triangle_count(),
        6 * 8 * 2 + 2 * 8
    );
    // a full arc renders as the seamless ring
    let full = torus(TorusShape::PartialVolume(AngularRange::FULL)).generate(0.0);
    assert_eq!(full, torus(TorusShape::Volume).generate(0.0));
}

#[test]
fn test_every_kind_generates_valid_meshes() {
    let shapes: [ShapeIntrinsics; 5] = [
        PlaneIntrinsics::default().into(),
        SphereIntrinsics::default().into(),
        CylinderIntrinsics::default().into(),
        ConeIntrinsics::default().into(),
        TorusIntrinsics::default().into(),
    ];
    for shape in shapes {
        let slots = assemble(&shape, &GlobalConfig::default());
        for mesh in [&slots.occlusion, &slots.wireframe, &slots.surface, &slots.outline] {
            assert!(mesh.validate().is_ok(), "{}", shape.kind());
            assert!(!mesh.is_empty(), "{}", shape.kind());
        }
    }
}

// =============================================================================
// CHANGE TRACKING
// =============================================================================

#[test]
fn test_change_classification() {
    let old = cylinder();
    assert_eq!(Change::between(&old, &old), Change::Unchanged);

    let outline = old.with_outline_width(Some(0.01));
    assert_eq!(Change::between(&old, &outline), Change::OutlineOnly);

    let (wider, change) = old.updated(|shape| {
        if let ShapeIntrinsics::Cylinder(cylinder) = shape {
            cylinder.radius = 2.0;
        }
    });
    assert_eq!(change, Change::Geometry);
    assert_ne!(wider, old);

    let sphere: ShapeIntrinsics = SphereIntrinsics::default().into();
    assert_eq!(Change::between(&old, &sphere), Change::Geometry);
}

#[test]
fn test_updated_leaves_original_untouched() {
    let old = cylinder();
    let copy = old;
    let (_, change) = old.updated(|shape| *shape = shape.with_outline_width(Some(1.0)));
    assert_eq!(change, Change::OutlineOnly);
    assert_eq!(old, copy);
}

#[test]
fn test_model_regenerates_outline_only() {
    let mut model = ShapeModel::new(cylinder(), GlobalConfig::default());
    let before = model.representations().clone();

    let change = model.update(|shape| *shape = shape.with_outline_width(Some(0.05)));
    assert_eq!(change, Change::OutlineOnly);
    let after = model.representations();
    assert_eq!(after.wireframe, before.wireframe);
    assert_eq!(after.occlusion, before.occlusion);
    assert_ne!(after.outline, before.outline);
    assert_eq!(model.intrinsics().outline_width(), Some(0.05));
}

#[test]
fn test_model_regenerates_geometry() {
    let mut model = ShapeModel::new(cylinder(), GlobalConfig::default());
    let before = model.representations().clone();
    let change = model.replace(ConeIntrinsics::default().into());
    assert_eq!(change, Change::Geometry);
    assert_ne!(model.representations().wireframe, before.wireframe);
    assert_eq!(model.intrinsics().kind(), ShapeKind::Cone);

    assert_eq!(model.update(|_| {}), Change::Unchanged);
}

// =============================================================================
// PERSISTENCE
// =============================================================================

#[test]
fn test_intrinsics_survive_json() {
    let shapes: [ShapeIntrinsics; 3] = [
        TorusIntrinsics {
            shape: TorusShape::PartialSurface(half()),
            outline_width: Some(0.01),
            ..Default::default()
        }
        .into(),
        ConeIntrinsics {
            range: half(),
            shape: BodyShape::Surface,
            ..Default::default()
        }
        .into(),
        SphereIntrinsics {
            subdivision: crate::subdivision::SphereSubdivision::recursive(),
            ..Default::default()
        }
        .into(),
    ];
    for shape in shapes {
        let json = serde_json::to_string(&shape).unwrap();
        assert!(json.contains(&format!("\"kind\":\"{}\"", shape.kind())));
        let restored: ShapeIntrinsics = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, shape);
    }
}
