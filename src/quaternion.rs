use std::fmt;
use std::ops::{AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use log::trace;

use crate::error::{QuatError, QuatResult};
use crate::parts::{QuatParts, QuatUpdate};

/// Near-zero threshold for every division, inversion and normalization guard.
/// Denominators smaller than this in magnitude are never inverted; the
/// operation substitutes a safe factor instead of raising.
pub const ZERO_TOLERANCE: f64 = 1e-10;

/// Reciprocal substituted when a rotation axis is too short to normalize.
/// Degenerate axes produce a degenerate (but finite) result rather than an
/// error or a division by zero.
pub const DEGENERATE_AXIS_SCALE: f64 = 1e5;

/// `sin θ` magnitude below which slerp switches to a linear component blend,
/// avoiding the 0/0 in the sine-ratio weights for nearly colinear operands.
pub const SLERP_LINEAR_THRESHOLD: f64 = 1e-3;

/// A quaternion with real part `w` and imaginary parts `i`, `j`, `k`, held
/// as `f64` components.
///
/// Components are stored in `(w, i, j, k)` order and are only reachable
/// through copying accessors, so a value can change only via its mutating
/// operations. Every mutating operation has a value-returning counterpart
/// (an operator impl or an `-ed`/`-se` form); arguments are taken by value
/// and are never modified.
///
/// Degenerate numeric input does not raise. Near-zero denominators fall back
/// to the documented constants ([`ZERO_TOLERANCE`], [`DEGENERATE_AXIS_SCALE`])
/// and the affected operation keeps going; the `try_*` variants report the
/// same situations as [`QuatError`] instead.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Quaternion {
    q: [f64; 4],
}
impl Quaternion {
    /// The multiplicative identity `(1, 0, 0, 0)`.
    pub const IDENTITY: Quaternion = Quaternion { q: [1.0, 0.0, 0.0, 0.0] };

    pub fn new(w: f64, i: f64, j: f64, k: f64) -> Self {
        Self { q: [w, i, j, k] }
    }

    pub fn identity() -> Self {
        Self::IDENTITY
    }

    /// A copy of the four components in `(w, i, j, k)` order.
    pub fn values(&self) -> [f64; 4] {
        self.q
    }

    pub fn w(&self) -> f64 {
        self.q[0]
    }

    pub fn i(&self) -> f64 {
        self.q[1]
    }

    pub fn j(&self) -> f64 {
        self.q[2]
    }

    pub fn k(&self) -> f64 {
        self.q[3]
    }

    /// Overwrite the components from a slice.
    ///
    /// Three values are taken as `(i, j, k)` with `w` forced to `1.0`; four or
    /// more replace all components in `(w, i, j, k)` order, extras ignored.
    /// Fewer than three values leave the quaternion unchanged.
    pub fn set_from_array(&mut self, values: &[f64]) {
        if values.len() < 3 {
            trace!("set_from_array: got {} values, need 3, value unchanged", values.len());
            return;
        }
        if values.len() == 3 {
            self.q = [1.0, values[0], values[1], values[2]];
        }
        else {
            self.q = [values[0], values[1], values[2], values[3]];
        }
    }

    /// Build a quaternion from a slice, starting from the identity.
    pub fn from_array(values: &[f64]) -> Self {
        let mut q = Self::identity();
        q.set_from_array(values);
        q
    }

    /// Apply a sparse update: each present, finite field replaces its
    /// component; absent or non-finite fields leave the component unchanged.
    pub fn update(&mut self, patch: &QuatUpdate) {
        set_finite(&mut self.q[0], patch.w, "w");
        set_finite(&mut self.q[1], patch.i, "i");
        set_finite(&mut self.q[2], patch.j, "j");
        set_finite(&mut self.q[3], patch.k, "k");
    }

    /// The full `{w, i, j, k}` mapping for the current components (a copy,
    /// not a live view).
    pub fn to_parts(&self) -> QuatParts {
        QuatParts {
            w: self.q[0],
            i: self.q[1],
            j: self.q[2],
            k: self.q[3],
        }
    }

    /// Build a quaternion from a full mapping; non-finite fields keep the
    /// identity's value for that slot.
    pub fn from_parts(parts: QuatParts) -> Self {
        let mut q = Self::identity();
        q.update(&QuatUpdate::from(parts));
        q
    }

    /// Pure rotation of `angle` radians about the x axis.
    ///
    /// The half-angle sine and cosine land in the first and last slot; the
    /// placement differs per axis constructor and is part of the contract
    /// (`from_x_rotation(π)` is `(1, 0, 0, 0)`). Non-finite angles rotate
    /// by zero.
    pub fn from_x_rotation(angle: f64) -> Self {
        let a = half_angle(angle, "from_x_rotation");
        Self { q: [a.sin(), 0.0, 0.0, a.cos()] }
    }

    /// Pure rotation of `angle` radians about the y axis.
    pub fn from_y_rotation(angle: f64) -> Self {
        let a = half_angle(angle, "from_y_rotation");
        Self { q: [0.0, a.sin(), 0.0, a.cos()] }
    }

    /// Pure rotation of `angle` radians about the z axis.
    pub fn from_z_rotation(angle: f64) -> Self {
        let a = half_angle(angle, "from_z_rotation");
        Self { q: [0.0, 0.0, a.sin(), a.cos()] }
    }

    /// Rotation of `angle` about an arbitrary axis, normalized internally.
    ///
    /// An axis of other than three elements or of magnitude below
    /// [`ZERO_TOLERANCE`] cannot be normalized; the reciprocal is replaced by
    /// [`DEGENERATE_AXIS_SCALE`] and the result is degenerate but finite.
    pub fn from_axis_rotation(axis: &[f64], angle: f64) -> Self {
        let l = if axis.len() == 3 {
            (axis[0] * axis[0] + axis[1] * axis[1] + axis[2] * axis[2]).sqrt()
        }
        else {
            0.0
        };
        let d = if l.abs() < ZERO_TOLERANCE {
            trace!("from_axis_rotation: axis magnitude {l}, scaling by {DEGENERATE_AXIS_SCALE}");
            DEGENERATE_AXIS_SCALE
        }
        else {
            1.0 / l
        };

        let a = 0.5 * angle;
        let c = a.cos();
        let s = a.sin() * d;

        let x = axis.first().copied().unwrap_or(0.0);
        let y = axis.get(1).copied().unwrap_or(0.0);
        let z = axis.get(2).copied().unwrap_or(0.0);

        Self { q: [c, s * x, s * y, s * z] }
    }

    /// Overwrite the components from an equivalent 3x3 rotation matrix, using
    /// the largest diagonal entry for numerical stability. Anything other
    /// than exactly three rows leaves the quaternion unchanged.
    pub fn set_from_rotation_matrix(&mut self, m: &[[f64; 3]]) {
        if m.len() != 3 {
            trace!("set_from_rotation_matrix: got {} rows, need 3, value unchanged", m.len());
            return;
        }

        // u is the index of the largest diagonal entry, (u, v, w) an even
        // permutation of (0, 1, 2)
        let (u, v, w) = if m[0][0] > m[1][1] && m[0][0] > m[2][2] {
            (0, 1, 2)
        }
        else if m[1][1] > m[0][0] && m[1][1] > m[2][2] {
            (1, 2, 0)
        }
        else {
            (2, 0, 1)
        };

        let r = (1.0 + m[u][u] - m[v][v] - m[w][w]).sqrt();
        self.q[u] = 0.5 * r;

        let r = 0.5 / r;
        self.q[v] = r * (m[v][u] + m[u][v]);
        self.q[w] = r * (m[u][w] + m[w][u]);
        self.q[3] = r * (m[v][w] - m[w][v]);
    }

    /// Build a quaternion from a 3x3 rotation matrix, starting from the
    /// identity.
    pub fn from_rotation_matrix(m: &[[f64; 3]]) -> Self {
        let mut q = Self::identity();
        q.set_from_rotation_matrix(m);
        q
    }

    /// The 3x3 rotation matrix for the current quaternion, computed from its
    /// normalized outer-product form. A squared norm within
    /// [`ZERO_TOLERANCE`] of zero returns an empty matrix (no rows).
    pub fn to_rotation_matrix(&self) -> Vec<[f64; 3]> {
        let [qw, qx, qy, qz] = self.q;

        let ww = qw * qw;
        let wx = qw * qx;
        let wy = qw * qy;
        let wz = qw * qz;
        let xx = qx * qx;
        let xy = qx * qy;
        let xz = qx * qz;
        let yy = qy * qy;
        let yz = qy * qz;
        let zz = qz * qz;

        let d = ww + xx + yy + zz;
        if d.abs() <= ZERO_TOLERANCE {
            trace!("to_rotation_matrix: squared norm {d}, empty matrix");
            return Vec::new();
        }

        let d = 1.0 / d;
        let d2 = d + d;

        vec![
            [d * (ww + xx - yy - zz), d2 * (wz + xy), d2 * (xz - wy)],
            [d2 * (xy - wz), d * (ww - xx + yy - zz), d2 * (wx + yz)],
            [d2 * (wy + xz), d2 * (yz - wx), d * (ww - xx - yy + zz)],
        ]
    }
}

/// Algebra. Each mutating method has a value-returning counterpart: the
/// corresponding operator impl, or the `inverse`/`normalized` forms.
impl Quaternion {
    /// Componentwise sum, into self.
    #[allow(clippy::should_implement_trait)]
    pub fn add(&mut self, q: Quaternion) {
        self.q[0] += q.q[0];
        self.q[1] += q.q[1];
        self.q[2] += q.q[2];
        self.q[3] += q.q[3];
    }

    /// Add a scalar to the real component only, into self.
    pub fn add_scalar(&mut self, a: f64) {
        self.q[0] += a;
    }

    /// Componentwise difference, into self.
    pub fn subtract(&mut self, q: Quaternion) {
        self.q[0] -= q.q[0];
        self.q[1] -= q.q[1];
        self.q[2] -= q.q[2];
        self.q[3] -= q.q[3];
    }

    /// Subtract a scalar from the real component only, into self.
    pub fn subtract_scalar(&mut self, a: f64) {
        self.q[0] -= a;
    }

    /// Hamilton product `self * q`, into self.
    pub fn multiply(&mut self, q: Quaternion) {
        let [aw, ax, ay, az] = self.q;
        let [bw, bx, by, bz] = q.q;

        self.q[0] = aw * bw - ax * bx - ay * by - az * bz;
        self.q[1] = aw * bx + ax * bw + ay * bz - az * by;
        self.q[2] = aw * by - ax * bz + ay * bw + az * bx;
        self.q[3] = aw * bz + ax * by - ay * bx + az * bw;
    }

    /// Scale all four components, into self.
    pub fn multiply_by_scalar(&mut self, a: f64) {
        self.q[0] *= a;
        self.q[1] *= a;
        self.q[2] *= a;
        self.q[3] *= a;
    }

    /// Multiply by `q`'s [`inverse`](Self::inverse), into self.
    pub fn divide(&mut self, q: Quaternion) {
        self.multiply(q.inverse());
    }

    /// Scale by `1/a`, into self. A divisor within [`ZERO_TOLERANCE`] of zero
    /// substitutes factor `1.0`, leaving the value unchanged.
    pub fn divide_by_scalar(&mut self, a: f64) {
        let k = if a.abs() < ZERO_TOLERANCE {
            trace!("divide_by_scalar: divisor {a}, value unchanged");
            1.0
        }
        else {
            1.0 / a
        };
        self.multiply_by_scalar(k);
    }

    /// Divide the scalar `a` by self, into self:
    /// `(-a·w, -a·i, -a·j, a·k) / ‖q‖²`, with factor `1.0` substituted for a
    /// squared norm within [`ZERO_TOLERANCE`] of zero.
    pub fn divide_scalar_by(&mut self, a: f64) {
        let d = self.inverse_scale("divide_scalar_by");
        let [w, i, j, k] = self.q;
        self.q = [-a * w * d, -a * i * d, -a * j * d, a * k * d];
    }

    /// Invert into self: `(-w, -i, -j, k) / ‖q‖²`.
    ///
    /// The sign convention negates three components and not the fourth.
    /// Applying `invert` twice restores the original value. Same near-zero
    /// guard as [`divide_scalar_by`](Self::divide_scalar_by).
    pub fn invert(&mut self) {
        let d = self.inverse_scale("invert");
        let [w, i, j, k] = self.q;
        self.q = [-w * d, -i * d, -j * d, k * d];
    }

    /// The inverse as a new quaternion; self is unchanged.
    pub fn inverse(&self) -> Quaternion {
        let mut q = *self;
        q.invert();
        q
    }

    /// Euclidean norm of the 4-tuple.
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    pub fn length_squared(&self) -> f64 {
        let [w, i, j, k] = self.q;
        w * w + i * i + j * j + k * k
    }

    /// Scale to unit length, into self. A length within [`ZERO_TOLERANCE`] of
    /// zero substitutes factor `1.0`, leaving the value unchanged.
    pub fn normalize(&mut self) {
        let l = self.length();
        let d = if l.abs() < ZERO_TOLERANCE {
            trace!("normalize: length {l}, value unchanged");
            1.0
        }
        else {
            1.0 / l
        };
        self.multiply_by_scalar(d);
    }

    /// The unit quaternion pointing the same way, as a new value.
    pub fn normalized(&self) -> Quaternion {
        let mut q = *self;
        q.normalize();
        q
    }

    /// Componentwise inner product.
    pub fn dot(&self, q: Quaternion) -> f64 {
        self.q[0] * q.q[0] + self.q[1] * q.q[1] + self.q[2] * q.q[2] + self.q[3] * q.q[3]
    }

    /// `1 / ‖q‖²` with the near-zero substitute, shared by the inverse-like
    /// operations.
    fn inverse_scale(&self, op: &str) -> f64 {
        let l = self.length_squared();
        if l.abs() < ZERO_TOLERANCE {
            trace!("{op}: squared norm {l}, factor 1 substituted");
            1.0
        }
        else {
            1.0 / l
        }
    }
}

/// Interpolation.
impl Quaternion {
    /// Spherical linear interpolation from self toward `q` at `t`, clamped to
    /// `[0, 1]`, as a new quaternion.
    ///
    /// Interpolates along the shorter arc (the second operand is negated when
    /// the inner product is negative). Numerically identical or antipodal
    /// operands return self as-is. Nearly colinear operands (`sin θ` below
    /// [`SLERP_LINEAR_THRESHOLD`]) blend linearly at `t` instead of by sine
    /// ratios, which avoids the 0/0 in the slerp weights at the cost of
    /// constant angular velocity. Output length follows the inputs; unit
    /// inputs give unit output.
    pub fn slerp(&self, q: Quaternion, t: f64) -> Quaternion {
        let t = t.clamp(0.0, 1.0);

        let [aw, ax, ay, az] = self.q;
        let [mut bw, mut bx, mut by, mut bz] = q.q;

        // cos of the half-angle between the quaternions
        let mut ctheta = self.dot(q);

        if ctheta.abs() >= 1.0 {
            return *self;
        }
        if ctheta < 0.0 {
            // avoid the long way around
            bw = -bw;
            bx = -bx;
            by = -by;
            bz = -bz;
            ctheta = -ctheta;
        }

        let half_theta = ctheta.acos();
        let sin_half_theta = (1.0 - ctheta * ctheta).sqrt();

        if sin_half_theta.abs() < SLERP_LINEAR_THRESHOLD {
            trace!("slerp: sin theta {sin_half_theta}, linear blend");
            let t1 = 1.0 - t;
            return Quaternion {
                q: [aw * t1 + bw * t, ax * t1 + bx * t, ay * t1 + by * t, az * t1 + bz * t],
            };
        }

        let ra = ((1.0 - t) * half_theta).sin() / sin_half_theta;
        let rb = (t * half_theta).sin() / sin_half_theta;

        Quaternion {
            q: [aw * ra + bw * rb, ax * ra + bx * rb, ay * ra + by * rb, az * ra + bz * rb],
        }
    }

    /// Normalized linear interpolation from self toward `q` at `t`, clamped
    /// to `[0, 1]`, as a new quaternion.
    ///
    /// When the inner product is negative the interpolation parameter of the
    /// second operand is negated (shortest-path correction); the blend
    /// `self·(1-t) + q·t` is then normalized. Cheaper than slerp,
    /// commutative, not constant-velocity. Neither operand is modified.
    pub fn nlerp(&self, q: Quaternion, t: f64) -> Quaternion {
        let mut t = t.clamp(0.0, 1.0);
        let t1 = 1.0 - t;

        if self.dot(q) < 0.0 {
            t = -t;
        }

        let mut qt = *self;
        qt.multiply_by_scalar(t1);

        let mut qb = q;
        qb.multiply_by_scalar(t);

        qt.add(qb);
        qt.normalize();

        qt
    }
}

/// Strict variants. Same semantics as the silent operations on valid input;
/// degenerate input returns [`QuatError`] and leaves the receiver untouched
/// (where the silent form would have applied its fallback instead).
impl Quaternion {
    pub fn try_set_from_array(&mut self, values: &[f64]) -> QuatResult<()> {
        if values.len() < 3 {
            return Err(QuatError::ArrayTooShort(values.len()));
        }
        self.set_from_array(values);
        Ok(())
    }

    /// Atomic form of [`update`](Self::update): a present but non-finite
    /// field fails the whole patch.
    pub fn try_update(&mut self, patch: &QuatUpdate) -> QuatResult<()> {
        for (value, name) in [(patch.w, "w"), (patch.i, "i"), (patch.j, "j"), (patch.k, "k")] {
            if let Some(v) = value {
                if !v.is_finite() {
                    return Err(QuatError::NonFinite(name));
                }
            }
        }
        self.update(patch);
        Ok(())
    }

    pub fn try_from_x_rotation(angle: f64) -> QuatResult<Quaternion> {
        finite_angle(angle)?;
        Ok(Self::from_x_rotation(angle))
    }

    pub fn try_from_y_rotation(angle: f64) -> QuatResult<Quaternion> {
        finite_angle(angle)?;
        Ok(Self::from_y_rotation(angle))
    }

    pub fn try_from_z_rotation(angle: f64) -> QuatResult<Quaternion> {
        finite_angle(angle)?;
        Ok(Self::from_z_rotation(angle))
    }

    pub fn try_from_axis_rotation(axis: &[f64], angle: f64) -> QuatResult<Quaternion> {
        if axis.len() != 3 {
            return Err(QuatError::DegenerateAxis(0.0));
        }
        let l = (axis[0] * axis[0] + axis[1] * axis[1] + axis[2] * axis[2]).sqrt();
        if l.abs() < ZERO_TOLERANCE {
            return Err(QuatError::DegenerateAxis(l));
        }
        Ok(Self::from_axis_rotation(axis, angle))
    }

    pub fn try_set_from_rotation_matrix(&mut self, m: &[[f64; 3]]) -> QuatResult<()> {
        if m.len() != 3 {
            return Err(QuatError::NotThreeByThree(m.len()));
        }
        self.set_from_rotation_matrix(m);
        Ok(())
    }

    /// Fixed-shape form of [`to_rotation_matrix`](Self::to_rotation_matrix).
    pub fn try_to_rotation_matrix(&self) -> QuatResult<[[f64; 3]; 3]> {
        let l = self.length_squared();
        if l.abs() <= ZERO_TOLERANCE {
            return Err(QuatError::NormNearZero(l));
        }
        let m = self.to_rotation_matrix();
        Ok([m[0], m[1], m[2]])
    }

    pub fn try_invert(&mut self) -> QuatResult<()> {
        self.checked_norm()?;
        self.invert();
        Ok(())
    }

    pub fn try_inverse(&self) -> QuatResult<Quaternion> {
        let mut q = *self;
        q.try_invert()?;
        Ok(q)
    }

    pub fn try_divide(&mut self, q: Quaternion) -> QuatResult<()> {
        q.checked_norm()?;
        self.divide(q);
        Ok(())
    }

    pub fn try_divide_by_scalar(&mut self, a: f64) -> QuatResult<()> {
        if a.abs() < ZERO_TOLERANCE {
            return Err(QuatError::DivisorNearZero(a));
        }
        self.divide_by_scalar(a);
        Ok(())
    }

    pub fn try_divide_scalar_by(&mut self, a: f64) -> QuatResult<()> {
        self.checked_norm()?;
        self.divide_scalar_by(a);
        Ok(())
    }

    pub fn try_normalize(&mut self) -> QuatResult<()> {
        let l = self.length();
        if l.abs() < ZERO_TOLERANCE {
            return Err(QuatError::NormNearZero(l));
        }
        self.normalize();
        Ok(())
    }

    pub fn try_normalized(&self) -> QuatResult<Quaternion> {
        let mut q = *self;
        q.try_normalize()?;
        Ok(q)
    }

    fn checked_norm(&self) -> QuatResult<f64> {
        let l = self.length_squared();
        if l.abs() < ZERO_TOLERANCE {
            return Err(QuatError::NormNearZero(l));
        }
        Ok(l)
    }
}

fn set_finite(slot: &mut f64, value: Option<f64>, name: &str) {
    if let Some(v) = value {
        if v.is_finite() {
            *slot = v;
        }
        else {
            trace!("update: non-finite {name} ignored");
        }
    }
}

fn half_angle(angle: f64, op: &str) -> f64 {
    if angle.is_finite() {
        0.5 * angle
    }
    else {
        trace!("{op}: non-finite angle treated as 0");
        0.0
    }
}

fn finite_angle(angle: f64) -> QuatResult<()> {
    if angle.is_finite() {
        Ok(())
    }
    else {
        Err(QuatError::NonFinite("angle"))
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl AddAssign for Quaternion {
    fn add_assign(&mut self, q: Self) {
        self.add(q);
    }
}

impl AddAssign<f64> for Quaternion {
    fn add_assign(&mut self, a: f64) {
        self.add_scalar(a);
    }
}

impl SubAssign for Quaternion {
    fn sub_assign(&mut self, q: Self) {
        self.subtract(q);
    }
}

impl SubAssign<f64> for Quaternion {
    fn sub_assign(&mut self, a: f64) {
        self.subtract_scalar(a);
    }
}

impl MulAssign for Quaternion {
    fn mul_assign(&mut self, q: Self) {
        self.multiply(q);
    }
}

impl MulAssign<f64> for Quaternion {
    fn mul_assign(&mut self, a: f64) {
        self.multiply_by_scalar(a);
    }
}

impl DivAssign for Quaternion {
    fn div_assign(&mut self, q: Self) {
        self.divide(q);
    }
}

impl DivAssign<f64> for Quaternion {
    fn div_assign(&mut self, a: f64) {
        self.divide_by_scalar(a);
    }
}

// std::ops::Add stays out of the use list above: with the trait name in
// scope, method lookup's by-value pick resolves `q.add(r)` to the trait
// method and the inherent mutating `add` is never reached.
impl std::ops::Add for Quaternion {
    type Output = Self;

    fn add(mut self, q: Self) -> Self::Output {
        self += q;
        self
    }
}

impl std::ops::Add<f64> for Quaternion {
    type Output = Self;

    fn add(mut self, a: f64) -> Self::Output {
        self += a;
        self
    }
}

impl Sub for Quaternion {
    type Output = Self;

    fn sub(mut self, q: Self) -> Self::Output {
        self -= q;
        self
    }
}

impl Sub<f64> for Quaternion {
    type Output = Self;

    fn sub(mut self, a: f64) -> Self::Output {
        self -= a;
        self
    }
}

impl Mul for Quaternion {
    type Output = Self;

    fn mul(mut self, q: Self) -> Self::Output {
        self *= q;
        self
    }
}

impl Mul<f64> for Quaternion {
    type Output = Self;

    fn mul(mut self, a: f64) -> Self::Output {
        self *= a;
        self
    }
}

impl Div for Quaternion {
    type Output = Self;

    fn div(mut self, q: Self) -> Self::Output {
        self /= q;
        self
    }
}

impl Div<f64> for Quaternion {
    type Output = Self;

    fn div(mut self, a: f64) -> Self::Output {
        self /= a;
        self
    }
}

/// `a / q`, the scalar-over-quaternion form of
/// [`divide_scalar_by`](Quaternion::divide_scalar_by).
impl Div<Quaternion> for f64 {
    type Output = Quaternion;

    fn div(self, mut q: Quaternion) -> Self::Output {
        q.divide_scalar_by(self);
        q
    }
}

impl Neg for Quaternion {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        self.multiply_by_scalar(-1.0);
        self
    }
}

impl From<[f64; 4]> for Quaternion {
    fn from(values: [f64; 4]) -> Quaternion {
        Quaternion { q: values }
    }
}

impl From<[f64; 3]> for Quaternion {
    fn from(values: [f64; 3]) -> Quaternion {
        Quaternion { q: [1.0, values[0], values[1], values[2]] }
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [w, i, j, k] = self.q;
        write!(f, "{w} + {i}i + {j}j + {k}k")
    }
}

#[cfg(test)]
fn approx(a: Quaternion, b: Quaternion, eps: f64) -> bool {
    let x = a.values();
    let y = b.values();
    x.iter().zip(y.iter()).all(|(p, q)| (p - q).abs() < eps)
}

#[cfg(test)]
fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn identity_components() {
    assert_eq!(Quaternion::identity().values(), [1.0, 0.0, 0.0, 0.0]);
    assert_eq!(Quaternion::default(), Quaternion::IDENTITY);
    assert_eq!(Quaternion::new(1.0, 0.0, 0.0, 0.0), Quaternion::identity());
}

#[test]
fn component_getters() {
    let q = Quaternion::new(1.5, -2.5, 3.5, -4.5);
    assert_eq!((q.w(), q.i(), q.j(), q.k()), (1.5, -2.5, 3.5, -4.5));
    assert_eq!(q.values(), [1.5, -2.5, 3.5, -4.5]);

    // values() hands out a copy, not a view
    let v = q.values();
    let mut r = q;
    r.add_scalar(1.0);
    assert_eq!(v, q.values());
    assert_eq!(r.w(), 2.5);
}

#[test]
fn from_array_full_replace() {
    let q = Quaternion::from_array(&[2.0, 3.0, 4.0, 5.0]);
    assert_eq!(q.values(), [2.0, 3.0, 4.0, 5.0]);

    // extras beyond four are ignored
    let q = Quaternion::from_array(&[2.0, 3.0, 4.0, 5.0, 6.0]);
    assert_eq!(q.values(), [2.0, 3.0, 4.0, 5.0]);
}

#[test]
fn from_array_three_values_forces_unit_real() {
    let q = Quaternion::from_array(&[3.0, 4.0, 5.0]);
    assert_eq!(q.values(), [1.0, 3.0, 4.0, 5.0]);
}

#[test]
fn array_conversions_follow_the_slice_rules() {
    let q = Quaternion::from([2.0, 3.0, 4.0, 5.0]);
    assert_eq!(q.values(), [2.0, 3.0, 4.0, 5.0]);
    assert_eq!(q, Quaternion::from_array(&[2.0, 3.0, 4.0, 5.0]));

    let q: Quaternion = [3.0, 4.0, 5.0].into();
    assert_eq!(q.values(), [1.0, 3.0, 4.0, 5.0]);
    assert_eq!(q, Quaternion::from_array(&[3.0, 4.0, 5.0]));
}

#[test]
fn short_array_leaves_value_unchanged() {
    init_logs();
    let mut q = Quaternion::new(9.0, 8.0, 7.0, 6.0);
    q.set_from_array(&[1.0, 2.0]);
    assert_eq!(q.values(), [9.0, 8.0, 7.0, 6.0]);

    q.set_from_array(&[]);
    assert_eq!(q.values(), [9.0, 8.0, 7.0, 6.0]);
}

#[test]
fn axis_constructor_placement() {
    use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_2, PI};

    // half-angle sine walks the first three slots, cosine stays in the last
    assert!(approx(Quaternion::from_x_rotation(PI), Quaternion::new(1.0, 0.0, 0.0, 0.0), 1e-9));
    assert!(approx(Quaternion::from_y_rotation(PI), Quaternion::new(0.0, 1.0, 0.0, 0.0), 1e-9));
    assert!(approx(Quaternion::from_z_rotation(PI), Quaternion::new(0.0, 0.0, 1.0, 0.0), 1e-9));

    let q = Quaternion::from_x_rotation(FRAC_PI_2);
    assert!(approx(q, Quaternion::new(FRAC_1_SQRT_2, 0.0, 0.0, FRAC_1_SQRT_2), 1e-12));
}

#[test]
fn non_finite_rotation_angle_rotates_by_zero() {
    init_logs();
    let zero = Quaternion::new(0.0, 0.0, 0.0, 1.0);
    assert_eq!(Quaternion::from_x_rotation(f64::NAN), zero);
    assert_eq!(Quaternion::from_y_rotation(f64::INFINITY), zero);
    assert_eq!(Quaternion::from_z_rotation(f64::NEG_INFINITY), zero);
}

#[test]
fn axis_rotation_normalizes_axis() {
    let a = Quaternion::from_axis_rotation(&[0.0, 0.0, 1.0], 1.25);
    let b = Quaternion::from_axis_rotation(&[0.0, 0.0, 2.0], 1.25);
    assert!(approx(a, b, 1e-12));

    let c = Quaternion::from_axis_rotation(&[1.0, 1.0, 1.0], 0.75);
    assert!((c.length() - 1.0).abs() < 1e-12);
}

#[test]
fn degenerate_axis_scales_instead_of_failing() {
    init_logs();
    let a = 0.5 * 1.25_f64;

    // zero axis: the large factor multiplies zero components
    let q = Quaternion::from_axis_rotation(&[0.0, 0.0, 0.0], 1.25);
    assert_eq!(q.values(), [a.cos(), 0.0, 0.0, 0.0]);

    // wrong length: magnitude is taken as zero, present components scale
    let q = Quaternion::from_axis_rotation(&[1.0], 1.25);
    assert_eq!(q.values(), [a.cos(), a.sin() * DEGENERATE_AXIS_SCALE, 0.0, 0.0]);
    assert!(q.values().iter().all(|c| c.is_finite()));
}

#[test]
fn rotation_matrix_extraction_largest_diagonal_first() {
    use std::f64::consts::FRAC_1_SQRT_2;

    // largest diagonal at (0,0)
    let m = [[1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]];
    let q = Quaternion::from_rotation_matrix(&m);
    assert!(approx(q, Quaternion::new(FRAC_1_SQRT_2, 0.0, 0.0, -FRAC_1_SQRT_2), 1e-12));
}

#[test]
fn rotation_matrix_extraction_middle_diagonal() {
    use std::f64::consts::FRAC_1_SQRT_2;

    // largest diagonal at (1,1)
    let m = [[0.0, 0.0, 1.0], [0.0, 1.0, 0.0], [-1.0, 0.0, 0.0]];
    let q = Quaternion::from_rotation_matrix(&m);
    assert!(approx(q, Quaternion::new(0.0, FRAC_1_SQRT_2, 0.0, -FRAC_1_SQRT_2), 1e-12));
}

#[test]
fn rotation_matrix_extraction_last_diagonal() {
    use std::f64::consts::FRAC_1_SQRT_2;

    // largest diagonal at (2,2), also the tie branch
    let m = [[0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]];
    let q = Quaternion::from_rotation_matrix(&m);
    assert!(approx(q, Quaternion::new(0.0, 0.0, FRAC_1_SQRT_2, -FRAC_1_SQRT_2), 1e-12));
}

#[test]
fn wrong_row_count_leaves_value_unchanged() {
    init_logs();
    let mut q = Quaternion::new(2.0, 3.0, 4.0, 5.0);
    q.set_from_rotation_matrix(&[[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]);
    assert_eq!(q.values(), [2.0, 3.0, 4.0, 5.0]);
}

#[test]
fn rotation_matrix_of_identity() {
    let m = Quaternion::identity().to_rotation_matrix();
    assert_eq!(m, vec![[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
}

#[test]
fn rotation_matrix_of_zero_quaternion_is_empty() {
    init_logs();
    let m = Quaternion::new(0.0, 0.0, 0.0, 0.0).to_rotation_matrix();
    assert!(m.is_empty());
}

#[test]
fn rotation_matrix_is_scale_invariant() {
    let expect = vec![[1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, -1.0, 0.0]];
    assert_eq!(Quaternion::new(1.0, 1.0, 0.0, 0.0).to_rotation_matrix(), expect);
    assert_eq!(Quaternion::new(2.0, 2.0, 0.0, 0.0).to_rotation_matrix(), expect);
}

#[test]
fn hamilton_product() {
    let mut a = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    a.multiply(Quaternion::new(5.0, 6.0, 7.0, 8.0));
    assert_eq!(a.values(), [-60.0, 12.0, 30.0, 24.0]);
}

#[test]
fn unit_basis_products() {
    let i = Quaternion::new(0.0, 1.0, 0.0, 0.0);
    let j = Quaternion::new(0.0, 0.0, 1.0, 0.0);
    let k = Quaternion::new(0.0, 0.0, 0.0, 1.0);

    assert_eq!(i * j, k);
    assert_eq!(i * i, Quaternion::new(-1.0, 0.0, 0.0, 0.0));
}

#[test]
fn identity_times_identity_is_identity() {
    let mut q = Quaternion::identity();
    q.multiply(Quaternion::identity());
    assert_eq!(q, Quaternion::identity());
}

#[test]
fn scalar_ops_touch_only_the_real_component() {
    let mut q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    q.add_scalar(2.5);
    assert_eq!(q.values(), [3.5, 2.0, 3.0, 4.0]);

    q.subtract_scalar(1.5);
    assert_eq!(q.values(), [2.0, 2.0, 3.0, 4.0]);

    q.multiply_by_scalar(2.0);
    assert_eq!(q.values(), [4.0, 4.0, 6.0, 8.0]);

    q.divide_by_scalar(4.0);
    assert_eq!(q.values(), [1.0, 1.0, 1.5, 2.0]);
}

#[test]
fn add_and_subtract_componentwise() {
    let a = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    let b = Quaternion::new(0.5, -1.0, 2.0, -3.0);

    let mut sum = a;
    sum.add(b);
    assert_eq!(sum.values(), [1.5, 1.0, 5.0, 1.0]);

    let mut diff = a;
    diff.subtract(b);
    assert_eq!(diff.values(), [0.5, 3.0, 1.0, 7.0]);
}

#[test]
fn add_mutates_an_owned_receiver() {
    // a plain method call on an owned value must hit the in-place add, not
    // the operator's by-value form with a discarded result
    let mut q = Quaternion::identity();
    q.add(Quaternion::new(0.0, 1.0, 0.0, 0.0));
    assert_eq!(q.values(), [1.0, 1.0, 0.0, 0.0]);

    let mut q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    q.add_scalar(1.0);
    q.add(Quaternion::new(0.5, 0.5, 0.5, 0.5));
    assert_eq!(q.values(), [2.5, 2.5, 3.5, 4.5]);
}

#[test]
fn operators_agree_with_methods() {
    let a = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    let b = Quaternion::new(5.0, 6.0, 7.0, 8.0);

    let mut m = a;
    m.add(b);
    assert_eq!(a + b, m);

    let mut m = a;
    m.subtract(b);
    assert_eq!(a - b, m);

    let mut m = a;
    m.multiply(b);
    assert_eq!(a * b, m);

    let mut m = a;
    m.divide(b);
    assert_eq!(a / b, m);

    let mut m = a;
    m.add_scalar(2.0);
    assert_eq!(a + 2.0, m);

    let mut m = a;
    m.subtract_scalar(2.0);
    assert_eq!(a - 2.0, m);

    let mut m = a;
    m.multiply_by_scalar(2.0);
    assert_eq!(a * 2.0, m);

    let mut m = a;
    m.divide_by_scalar(2.0);
    assert_eq!(a / 2.0, m);

    let mut m = a;
    m.divide_scalar_by(3.0);
    assert_eq!(3.0 / a, m);

    let mut m = a;
    m.multiply_by_scalar(-1.0);
    assert_eq!(-a, m);
}

#[test]
fn compound_assignment_operators() {
    let a = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    let b = Quaternion::new(5.0, 6.0, 7.0, 8.0);

    let mut q = a;
    q += b;
    q -= b;
    assert_eq!(q, a);

    let mut q = a;
    q *= 2.0;
    q /= 2.0;
    assert_eq!(q, a);

    let mut q = a;
    q *= b;
    assert_eq!(q, a * b);

    let mut q = a;
    q /= b;
    assert_eq!(q, a / b);

    let mut q = a;
    q += 1.0;
    q -= 1.0;
    assert_eq!(q, a);
}

#[test]
fn inverse_follows_the_sign_convention() {
    // three components negate, the fourth does not
    let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    let inv = q.inverse();
    assert!(approx(
        inv,
        Quaternion::new(-1.0 / 30.0, -2.0 / 30.0, -3.0 / 30.0, 4.0 / 30.0),
        1e-12,
    ));
    // the receiver is untouched by the value-returning form
    assert_eq!(q.values(), [1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn invert_is_an_involution() {
    let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    let mut r = q;
    r.invert();
    r.invert();
    assert!(approx(r, q, 1e-9));

    let unit = Quaternion::new(0.5, 0.5, 0.5, 0.5);
    assert!(approx(unit.inverse().inverse(), unit, 1e-12));
}

#[test]
fn asymmetric_inverse_is_not_multiplicative() {
    // the sign convention restores itself under double application, but
    // q * q⁻¹ is not the identity
    let q = Quaternion::new(0.5, 0.5, 0.5, 0.5);
    let p = q * q.inverse();
    assert_eq!(p.values(), [0.0, 0.0, -1.0, 0.0]);
}

#[test]
fn divide_equals_multiply_by_inverse() {
    let a = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    let b = Quaternion::new(-2.0, 1.0, 0.5, 3.0);

    let mut lhs = a;
    lhs.divide(b);

    let mut rhs = a;
    rhs.multiply(b.inverse());

    // same formula path, so exactly equal
    assert_eq!(lhs, rhs);
}

#[test]
fn divide_by_near_zero_scalar_is_a_noop() {
    init_logs();
    let mut q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    q.divide_by_scalar(0.0);
    assert_eq!(q.values(), [1.0, 2.0, 3.0, 4.0]);

    q.divide_by_scalar(1e-11);
    assert_eq!(q.values(), [1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn divide_scalar_by_values() {
    let mut q = Quaternion::new(1.0, 0.0, 0.0, 0.0);
    q.divide_scalar_by(2.0);
    assert_eq!(q.values(), [-2.0, 0.0, 0.0, 0.0]);

    let mut q = Quaternion::new(0.0, 0.0, 0.0, 2.0);
    q.divide_scalar_by(4.0);
    assert_eq!(q.values(), [0.0, 0.0, 0.0, 2.0]);
}

#[test]
fn length_and_normalize() {
    let mut q = Quaternion::new(1.0, 2.0, 2.0, 0.0);
    assert_eq!(q.length(), 3.0);
    assert_eq!(q.length_squared(), 9.0);

    q.normalize();
    assert!(approx(q, Quaternion::new(1.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0, 0.0), 1e-12));
    assert!((q.length() - 1.0).abs() < 1e-12);
}

#[test]
fn normalize_is_idempotent_on_unit_values() {
    let unit = Quaternion::new(0.5, 0.5, 0.5, 0.5);
    let once = unit.normalized();
    let twice = once.normalized();
    assert!(approx(once, twice, 1e-15));
}

#[test]
fn normalize_of_zero_is_a_noop() {
    init_logs();
    let mut q = Quaternion::new(0.0, 0.0, 0.0, 0.0);
    q.normalize();
    assert_eq!(q.values(), [0.0, 0.0, 0.0, 0.0]);
}

#[test]
fn dot_product() {
    let a = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    let b = Quaternion::new(5.0, 6.0, 7.0, 8.0);
    assert_eq!(a.dot(b), 70.0);
}

#[test]
fn slerp_endpoints() {
    use std::f64::consts::FRAC_1_SQRT_2;

    let a = Quaternion::new(FRAC_1_SQRT_2, 0.0, 0.0, FRAC_1_SQRT_2);
    let b = Quaternion::new(FRAC_1_SQRT_2, 0.0, FRAC_1_SQRT_2, 0.0);

    assert!(approx(a.slerp(b, 0.0), a, 1e-12));
    assert!(approx(a.slerp(b, 1.0), b, 1e-12));
}

#[test]
fn slerp_halfway_bisects_the_arc() {
    use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_8};

    let a = Quaternion::identity();
    let b = Quaternion::new(FRAC_1_SQRT_2, 0.0, 0.0, FRAC_1_SQRT_2);

    let mid = a.slerp(b, 0.5);
    let expect = Quaternion::new(FRAC_PI_8.cos(), 0.0, 0.0, FRAC_PI_8.sin());
    assert!(approx(mid, expect, 1e-9));
}

#[test]
fn slerp_takes_the_shorter_arc() {
    use std::f64::consts::FRAC_1_SQRT_2;

    let a = Quaternion::identity();
    let b = Quaternion::new(FRAC_1_SQRT_2, 0.0, 0.0, FRAC_1_SQRT_2);

    // -b is the same rotation; the path must match b's
    let mid = a.slerp(-b, 0.5);
    assert!(approx(mid, a.slerp(b, 0.5), 1e-12));

    // and the far endpoint lands on the negated operand's flip
    assert!(approx(a.slerp(-b, 1.0), b, 1e-12));
}

#[test]
fn slerp_of_identical_operands_returns_self() {
    let q = Quaternion::new(0.0, 0.0, 1.0, 0.0);
    assert_eq!(q.slerp(q, 0.37), q);
}

#[test]
fn slerp_clamps_the_parameter() {
    use std::f64::consts::FRAC_1_SQRT_2;

    let a = Quaternion::new(FRAC_1_SQRT_2, 0.0, 0.0, FRAC_1_SQRT_2);
    let b = Quaternion::new(FRAC_1_SQRT_2, 0.0, FRAC_1_SQRT_2, 0.0);

    assert_eq!(a.slerp(b, -3.0), a.slerp(b, 0.0));
    assert_eq!(a.slerp(b, 7.0), a.slerp(b, 1.0));
}

#[test]
fn slerp_blends_linearly_near_colinear() {
    init_logs();
    let half = 5e-4_f64;
    let a = Quaternion::identity();
    let b = Quaternion::new(half.cos(), 0.0, 0.0, half.sin());

    // inside the linear window the blend is weighted by t, not fixed
    let q = a.slerp(b, 0.25);
    let expect = Quaternion::new(0.75 + 0.25 * half.cos(), 0.0, 0.0, 0.25 * half.sin());
    assert!(approx(q, expect, 1e-15));
}

#[test]
fn nlerp_output_is_unit_length() {
    let a = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    let b = Quaternion::new(-2.0, 1.0, 0.5, 3.0);

    for t in [0.0, 0.25, 0.5, 0.75, 1.0] {
        let q = a.nlerp(b, t);
        assert!((q.length() - 1.0).abs() < 1e-12);
    }
}

#[test]
fn nlerp_blend_ratio() {
    let a = Quaternion::new(1.0, 0.0, 0.0, 0.0);
    let b = Quaternion::new(0.0, 0.0, 0.0, 1.0);

    let q = a.nlerp(b, 0.25);
    assert!((q.length() - 1.0).abs() < 1e-12);
    assert!((q.w() - 3.0 * q.k()).abs() < 1e-12);
}

#[test]
fn nlerp_midpoint_with_negative_dot_operands() {
    use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_8};

    let a = Quaternion::identity();
    let b = Quaternion::new(-FRAC_1_SQRT_2, FRAC_1_SQRT_2, 0.0, 0.0);

    // dot < 0 flips only the second weight, so the midpoint bisects toward
    // -b; the first weight stays 1 - t
    let q = a.nlerp(b, 0.5);
    let expect = Quaternion::new(FRAC_PI_8.cos(), -FRAC_PI_8.sin(), 0.0, 0.0);
    assert!(approx(q, expect, 1e-12));
}

#[test]
fn nlerp_negates_the_parameter_for_antipodal_operands() {
    use std::f64::consts::FRAC_1_SQRT_2;

    let a = Quaternion::new(FRAC_1_SQRT_2, 0.0, 0.0, FRAC_1_SQRT_2);

    // -a is the same rotation; the parameter flip keeps the blend from
    // cancelling to zero
    let q = a.nlerp(-a, 0.3);
    assert!(approx(q, a, 1e-12));
}

#[test]
fn nlerp_leaves_operands_unchanged() {
    let a = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    let b = Quaternion::new(-5.0, -6.0, -7.0, -8.0);

    let _ = a.nlerp(b, 0.5);
    assert_eq!(a.values(), [1.0, 2.0, 3.0, 4.0]);
    assert_eq!(b.values(), [-5.0, -6.0, -7.0, -8.0]);
}

#[test]
fn strict_errors_leave_the_value_untouched() {
    init_logs();
    let mut q = Quaternion::new(1e-6, 2e-6, 0.0, 0.0);

    // the silent form would still apply its sign flips with factor 1
    assert_eq!(q.try_invert(), Err(QuatError::NormNearZero(q.length_squared())));
    assert_eq!(q.values(), [1e-6, 2e-6, 0.0, 0.0]);

    let mut silent = q;
    silent.invert();
    assert_eq!(silent.values(), [-1e-6, -2e-6, 0.0, 0.0]);

    let mut q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(q.try_divide_by_scalar(0.0), Err(QuatError::DivisorNearZero(0.0)));
    assert_eq!(q.values(), [1.0, 2.0, 3.0, 4.0]);

    assert_eq!(q.try_set_from_array(&[1.0]), Err(QuatError::ArrayTooShort(1)));
    assert_eq!(q.values(), [1.0, 2.0, 3.0, 4.0]);

    let rows = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
    assert_eq!(q.try_set_from_rotation_matrix(&rows), Err(QuatError::NotThreeByThree(2)));
    assert_eq!(q.values(), [1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn strict_update_is_atomic() {
    let mut q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    let patch = QuatUpdate {
        w: Some(f64::NAN),
        j: Some(9.0),
        ..QuatUpdate::default()
    };

    assert_eq!(q.try_update(&patch), Err(QuatError::NonFinite("w")));
    assert_eq!(q.values(), [1.0, 2.0, 3.0, 4.0]);

    // the silent form applies the finite fields and skips the rest
    q.update(&patch);
    assert_eq!(q.values(), [1.0, 2.0, 9.0, 4.0]);
}

#[test]
fn strict_constructors_reject_degenerate_input() {
    assert_eq!(Quaternion::try_from_x_rotation(f64::NAN), Err(QuatError::NonFinite("angle")));
    assert_eq!(Quaternion::try_from_y_rotation(f64::INFINITY), Err(QuatError::NonFinite("angle")));
    assert_eq!(
        Quaternion::try_from_axis_rotation(&[0.0, 0.0, 0.0], 1.0),
        Err(QuatError::DegenerateAxis(0.0)),
    );
    assert_eq!(
        Quaternion::try_from_axis_rotation(&[1.0, 2.0], 1.0),
        Err(QuatError::DegenerateAxis(0.0)),
    );

    let ok = Quaternion::try_from_z_rotation(0.5).unwrap();
    assert_eq!(ok, Quaternion::from_z_rotation(0.5));

    let ok = Quaternion::try_from_axis_rotation(&[0.0, 1.0, 0.0], 0.5).unwrap();
    assert_eq!(ok, Quaternion::from_axis_rotation(&[0.0, 1.0, 0.0], 0.5));
}

#[test]
fn strict_division_and_normalization() {
    let zero = Quaternion::new(0.0, 0.0, 0.0, 0.0);

    let mut q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(q.try_divide(zero), Err(QuatError::NormNearZero(0.0)));
    assert_eq!(q.values(), [1.0, 2.0, 3.0, 4.0]);

    let b = Quaternion::new(-2.0, 1.0, 0.5, 3.0);
    let mut strict = q;
    strict.try_divide(b).unwrap();
    let mut silent = q;
    silent.divide(b);
    assert_eq!(strict, silent);

    let mut z = zero;
    assert_eq!(z.try_normalize(), Err(QuatError::NormNearZero(0.0)));
    assert_eq!(z, zero);
    assert_eq!(zero.try_normalized(), Err(QuatError::NormNearZero(0.0)));

    assert_eq!(q.try_normalized().unwrap(), q.normalized());

    let mut z = zero;
    assert_eq!(z.try_divide_scalar_by(2.0), Err(QuatError::NormNearZero(0.0)));
    assert_eq!(z, zero);

    assert_eq!(zero.try_inverse(), Err(QuatError::NormNearZero(0.0)));
    assert_eq!(q.try_inverse().unwrap(), q.inverse());
}

#[test]
fn strict_ok_paths_agree_with_the_silent_forms() {
    let base = Quaternion::new(1.0, 2.0, 3.0, 4.0);

    let mut strict = base;
    strict.try_set_from_array(&[5.0, 6.0, 7.0]).unwrap();
    let mut silent = base;
    silent.set_from_array(&[5.0, 6.0, 7.0]);
    assert_eq!(strict, silent);
    assert_eq!(strict.values(), [1.0, 5.0, 6.0, 7.0]);

    let patch = QuatUpdate { i: Some(-1.5), ..QuatUpdate::default() };
    let mut strict = base;
    strict.try_update(&patch).unwrap();
    let mut silent = base;
    silent.update(&patch);
    assert_eq!(strict, silent);
    assert_eq!(strict.values(), [1.0, -1.5, 3.0, 4.0]);

    let m = [[1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]];
    let mut strict = base;
    strict.try_set_from_rotation_matrix(&m).unwrap();
    let mut silent = base;
    silent.set_from_rotation_matrix(&m);
    assert_eq!(strict, silent);

    let mut strict = base;
    strict.try_divide_by_scalar(2.0).unwrap();
    let mut silent = base;
    silent.divide_by_scalar(2.0);
    assert_eq!(strict, silent);
    assert_eq!(strict.values(), [0.5, 1.0, 1.5, 2.0]);

    let mut strict = base;
    strict.try_divide_scalar_by(3.0).unwrap();
    let mut silent = base;
    silent.divide_scalar_by(3.0);
    assert_eq!(strict, silent);
}

#[test]
fn strict_rotation_matrix_round_trip() {
    let q = Quaternion::new(1.0, 1.0, 0.0, 0.0);
    let fixed = q.try_to_rotation_matrix().unwrap();
    let rows = q.to_rotation_matrix();
    assert_eq!(fixed.to_vec(), rows);

    let zero = Quaternion::new(0.0, 0.0, 0.0, 0.0);
    assert_eq!(zero.try_to_rotation_matrix(), Err(QuatError::NormNearZero(0.0)));
}

#[test]
fn display_reads_algebraically() {
    let q = Quaternion::new(1.0, -2.0, 3.5, 0.0);
    assert_eq!(q.to_string(), "1 + -2i + 3.5j + 0k");
}
