use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq};

use crate::Matrix;

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        match self.get(row, col) {
            Ok(elem) => elem,
            Err(err) => panic!("{err}"),
        }
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        match self.get_mut(row, col) {
            Ok(elem) => elem,
            Err(err) => panic!("{err}"),
        }
    }
}

/// Exact elementwise equality. For tolerance-based comparison see
/// [`Matrix::eq_approx`] and the [`AbsDiffEq`]/[`RelativeEq`] impls.
impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows && self.cols == other.cols && self.data == other.data
    }
}

impl AbsDiffEq for Matrix {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| f64::abs_diff_eq(a, b, epsilon))
    }
}

impl RelativeEq for Matrix {
    fn default_max_relative() -> f64 {
        f64::EPSILON
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| f64::relative_eq(a, b, epsilon, max_relative))
    }
}

/// Matrix + Matrix. Panics on mismatched dimensions; see [`Matrix::try_add`]
/// for the non-panicking form.
impl Add<&Matrix> for &Matrix {
    type Output = Matrix;

    fn add(self, rhs: &Matrix) -> Matrix {
        match self.try_add(rhs) {
            Ok(out) => out,
            Err(err) => panic!("{err}"),
        }
    }
}

impl Add for Matrix {
    type Output = Matrix;

    fn add(mut self, rhs: Matrix) -> Matrix {
        match self.try_add_assign(&rhs) {
            Ok(()) => self,
            Err(err) => panic!("{err}"),
        }
    }
}

impl AddAssign<&Matrix> for Matrix {
    fn add_assign(&mut self, rhs: &Matrix) {
        if let Err(err) = self.try_add_assign(rhs) {
            panic!("{err}");
        }
    }
}

impl AddAssign for Matrix {
    fn add_assign(&mut self, rhs: Matrix) {
        *self += &rhs;
    }
}

/// Matrix - Matrix. Panics on mismatched dimensions; see [`Matrix::try_sub`]
/// for the non-panicking form.
impl Sub<&Matrix> for &Matrix {
    type Output = Matrix;

    fn sub(self, rhs: &Matrix) -> Matrix {
        match self.try_sub(rhs) {
            Ok(out) => out,
            Err(err) => panic!("{err}"),
        }
    }
}

impl Sub for Matrix {
    type Output = Matrix;

    fn sub(mut self, rhs: Matrix) -> Matrix {
        match self.try_sub_assign(&rhs) {
            Ok(()) => self,
            Err(err) => panic!("{err}"),
        }
    }
}

impl SubAssign<&Matrix> for Matrix {
    fn sub_assign(&mut self, rhs: &Matrix) {
        if let Err(err) = self.try_sub_assign(rhs) {
            panic!("{err}");
        }
    }
}

impl SubAssign for Matrix {
    fn sub_assign(&mut self, rhs: Matrix) {
        *self -= &rhs;
    }
}

/// Matrix * Matrix. Panics unless the left operand has as many columns as the
/// right has rows; see [`Matrix::try_mul`] for the non-panicking form.
impl Mul<&Matrix> for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: &Matrix) -> Matrix {
        match self.try_mul(rhs) {
            Ok(out) => out,
            Err(err) => panic!("{err}"),
        }
    }
}

impl Mul for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Matrix) -> Matrix {
        &self * &rhs
    }
}

impl MulAssign<&Matrix> for Matrix {
    fn mul_assign(&mut self, rhs: &Matrix) {
        if let Err(err) = self.try_mul_assign(rhs) {
            panic!("{err}");
        }
    }
}

impl MulAssign for Matrix {
    fn mul_assign(&mut self, rhs: Matrix) {
        *self *= &rhs;
    }
}

/// Matrix * Scalar.
impl Mul<f64> for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: f64) -> Matrix {
        let mut out = self.clone();
        out.scale(rhs);
        out
    }
}

impl Mul<f64> for Matrix {
    type Output = Matrix;

    fn mul(mut self, rhs: f64) -> Matrix {
        self.scale(rhs);
        self
    }
}

impl MulAssign<f64> for Matrix {
    fn mul_assign(&mut self, rhs: f64) {
        self.scale(rhs);
    }
}
