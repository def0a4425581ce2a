use serde::{Deserialize, Serialize};

use crate::quaternion::Quaternion;

/// A full `{w, i, j, k}` component mapping, the interchange form of a
/// [`Quaternion`].
///
/// All four fields are required on the wire. Converting back into a
/// [`Quaternion`] runs the same finiteness screen as a sparse update, so a
/// non-finite field falls back to the identity's value for that slot.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Debug)]
pub struct QuatParts {
    pub w: f64,
    pub i: f64,
    pub j: f64,
    pub k: f64,
}
impl Default for QuatParts {
    fn default() -> Self {
        Self { w: 1.0, i: 0.0, j: 0.0, k: 0.0 }
    }
}

/// A sparse component patch: only the present fields are applied, and only
/// when finite. Absent fields are omitted from the wire form.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Default, Debug)]
pub struct QuatUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub w: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub i: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub j: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub k: Option<f64>,
}
impl QuatUpdate {
    /// True when no field is present and applying the patch cannot change
    /// anything.
    pub fn is_empty(&self) -> bool {
        self.w.is_none() && self.i.is_none() && self.j.is_none() && self.k.is_none()
    }
}

impl From<QuatParts> for QuatUpdate {
    fn from(parts: QuatParts) -> QuatUpdate {
        QuatUpdate {
            w: Some(parts.w),
            i: Some(parts.i),
            j: Some(parts.j),
            k: Some(parts.k),
        }
    }
}

impl From<Quaternion> for QuatParts {
    fn from(q: Quaternion) -> QuatParts {
        q.to_parts()
    }
}

impl From<QuatParts> for Quaternion {
    fn from(parts: QuatParts) -> Quaternion {
        Quaternion::from_parts(parts)
    }
}

impl From<QuatParts> for [f64; 4] {
    fn from(parts: QuatParts) -> [f64; 4] {
        [parts.w, parts.i, parts.j, parts.k]
    }
}

#[test]
fn parts_round_trip() {
    let q = Quaternion::new(1.5, -2.0, 0.25, 4.0);
    let parts = q.to_parts();
    assert_eq!(parts, QuatParts { w: 1.5, i: -2.0, j: 0.25, k: 4.0 });
    assert_eq!(Quaternion::from_parts(parts), q);

    // the From pair walks the same path
    assert_eq!(Quaternion::from(QuatParts::from(q)), q);
}

#[test]
fn default_parts_are_the_identity() {
    assert_eq!(Quaternion::from_parts(QuatParts::default()), Quaternion::identity());
}

#[test]
fn non_finite_parts_fall_back_to_identity_slots() {
    let parts = QuatParts { w: f64::NAN, i: 2.0, j: f64::INFINITY, k: 4.0 };
    let q = Quaternion::from_parts(parts);
    assert_eq!(q.values(), [1.0, 2.0, 0.0, 4.0]);
}

#[test]
fn parts_back_through_an_array() {
    let q = Quaternion::new(2.0, 3.0, 4.0, 5.0);
    let arr: [f64; 4] = q.to_parts().into();
    assert_eq!(arr, q.values());
    assert_eq!(Quaternion::from_array(&arr), q);
}

#[test]
fn full_patch_from_parts() {
    let patch = QuatUpdate::from(QuatParts { w: 5.0, i: 6.0, j: 7.0, k: 8.0 });
    assert!(!patch.is_empty());

    let mut q = Quaternion::identity();
    q.update(&patch);
    assert_eq!(q.values(), [5.0, 6.0, 7.0, 8.0]);
}

#[test]
fn sparse_update_touches_only_present_fields() {
    let mut q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    q.update(&QuatUpdate { k: Some(9.0), ..QuatUpdate::default() });
    assert_eq!(q.values(), [1.0, 2.0, 3.0, 9.0]);

    let empty = QuatUpdate::default();
    assert!(empty.is_empty());
    q.update(&empty);
    assert_eq!(q.values(), [1.0, 2.0, 3.0, 9.0]);
}

#[test]
fn non_finite_update_fields_are_skipped() {
    let mut q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    q.update(&QuatUpdate {
        w: Some(f64::NAN),
        i: Some(f64::INFINITY),
        j: Some(-7.0),
        k: Some(f64::NEG_INFINITY),
    });
    assert_eq!(q.values(), [1.0, 2.0, -7.0, 4.0]);
}

#[test]
fn parts_serialize_with_all_fields() {
    let parts = QuatParts { w: 1.0, i: 0.5, j: -2.0, k: 0.0 };
    let json = serde_json::to_string(&parts).unwrap();
    assert_eq!(json, r#"{"w":1.0,"i":0.5,"j":-2.0,"k":0.0}"#);

    let back: QuatParts = serde_json::from_str(&json).unwrap();
    assert_eq!(back, parts);
}

#[test]
fn update_omits_absent_fields_on_the_wire() {
    let patch = QuatUpdate { w: Some(2.0), ..QuatUpdate::default() };
    assert_eq!(serde_json::to_string(&patch).unwrap(), r#"{"w":2.0}"#);

    let empty = QuatUpdate::default();
    assert_eq!(serde_json::to_string(&empty).unwrap(), "{}");
}

#[test]
fn update_deserializes_from_partial_json() {
    let patch: QuatUpdate = serde_json::from_str(r#"{"i":1.5,"k":-3.0}"#).unwrap();
    assert_eq!(patch, QuatUpdate { w: None, i: Some(1.5), j: None, k: Some(-3.0) });

    let empty: QuatUpdate = serde_json::from_str("{}").unwrap();
    assert!(empty.is_empty());
}

#[test]
fn quaternion_state_survives_a_json_hop() {
    let q = Quaternion::new(0.5, 0.5, 0.5, 0.5);
    let json = serde_json::to_string(&q.to_parts()).unwrap();
    let parts: QuatParts = serde_json::from_str(&json).unwrap();
    assert_eq!(Quaternion::from_parts(parts), q);
}
