// This file is part of Nitrogen.
//
// Nitrogen is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// Nitrogen is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with Nitrogen.  If not, see <http://www.gnu.org/licenses/>.
use crate::{Dimension, DimensionUnit, Scalar, UnitRef};
use approx::{AbsDiffEq, RelativeEq};
use num_traits::AsPrimitive;
use ordered_float::OrderedFloat;
use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

/// A value in a unit that was picked at runtime, as opposed to the statically united
/// quantities like `Length<Meters>`.
///
/// Comparison looks at the value after normalizing to the dimension's base unit, so
/// `1km == 1_000m` even though the two carry different units.
#[derive(Clone, Copy, Debug)]
pub struct Measure<D: Dimension> {
    v: OrderedFloat<f64>, // in unit
    unit: UnitRef<D>,
}

impl<D: Dimension> Measure<D> {
    pub fn new<V>(v: V, unit: UnitRef<D>) -> Self
    where
        V: AsPrimitive<f64>,
    {
        Self {
            v: OrderedFloat(v.as_()),
            unit,
        }
    }

    pub fn in_units<U, V>(v: V) -> Self
    where
        U: DimensionUnit<D>,
        V: AsPrimitive<f64>,
    {
        Self::new(v, UnitRef::of::<U>())
    }

    pub fn in_base_unit<V>(v: V) -> Self
    where
        V: AsPrimitive<f64>,
    {
        Self::new(v, UnitRef::base())
    }

    pub fn f64(&self) -> f64 {
        self.v.0
    }

    pub fn unit(&self) -> UnitRef<D> {
        self.unit
    }

    pub fn base_f64(&self) -> f64 {
        self.unit.to_base(self.v.0)
    }

    /// The value of this measure if it were expressed in `unit`.
    pub fn in_unit(&self, unit: UnitRef<D>) -> f64 {
        if unit == self.unit {
            self.v.0
        } else {
            unit.from_base(self.base_f64())
        }
    }

    pub fn to_unit(&self, unit: UnitRef<D>) -> Self {
        Self {
            v: OrderedFloat(self.in_unit(unit)),
            unit,
        }
    }

    pub fn to<U>(&self) -> Self
    where
        U: DimensionUnit<D>,
    {
        self.to_unit(UnitRef::of::<U>())
    }

    /// Dimensionless ratio of two measures of the same kind.
    pub fn ratio(&self, other: &Self) -> f64 {
        self.v.0 / other.in_unit(self.unit)
    }

    fn base(&self) -> OrderedFloat<f64> {
        OrderedFloat(self.base_f64())
    }
}

impl<D: Dimension> fmt::Display for Measure<D> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.v.0, f)?;
        fmt::Display::fmt(&self.unit, f)
    }
}

impl<D: Dimension> PartialEq for Measure<D> {
    fn eq(&self, other: &Self) -> bool {
        self.base() == other.base()
    }
}

impl<D: Dimension> Eq for Measure<D> {}

impl<D: Dimension> PartialOrd for Measure<D> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<D: Dimension> Ord for Measure<D> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.base().cmp(&other.base())
    }
}

impl<D: Dimension> Hash for Measure<D> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.base().hash(state);
    }
}

impl<D: Dimension> AbsDiffEq for Measure<D> {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.base_f64().abs_diff_eq(&other.base_f64(), epsilon)
    }
}

impl<D: Dimension> RelativeEq for Measure<D> {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.base_f64()
            .relative_eq(&other.base_f64(), epsilon, max_relative)
    }
}

impl<D: Dimension> Add<Measure<D>> for Measure<D> {
    type Output = Measure<D>;

    fn add(self, other: Measure<D>) -> Self {
        Self {
            v: self.v + other.in_unit(self.unit),
            unit: self.unit,
        }
    }
}

impl<D: Dimension> AddAssign<Measure<D>> for Measure<D> {
    fn add_assign(&mut self, other: Measure<D>) {
        self.v += other.in_unit(self.unit);
    }
}

impl<D: Dimension> Sub<Measure<D>> for Measure<D> {
    type Output = Measure<D>;

    fn sub(self, other: Measure<D>) -> Self {
        Self {
            v: self.v - other.in_unit(self.unit),
            unit: self.unit,
        }
    }
}

impl<D: Dimension> SubAssign<Measure<D>> for Measure<D> {
    fn sub_assign(&mut self, other: Measure<D>) {
        self.v -= other.in_unit(self.unit);
    }
}

impl<D: Dimension> Neg for Measure<D> {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        self.v = -self.v;
        self
    }
}

impl<D: Dimension> Mul<Scalar> for Measure<D> {
    type Output = Measure<D>;

    fn mul(self, s: Scalar) -> Self {
        Self {
            v: self.v * s.f64(),
            unit: self.unit,
        }
    }
}

impl<D: Dimension> MulAssign<Scalar> for Measure<D> {
    fn mul_assign(&mut self, s: Scalar) {
        self.v *= s.f64();
    }
}

impl<D: Dimension> Div<Scalar> for Measure<D> {
    type Output = Measure<D>;

    fn div(self, s: Scalar) -> Self {
        Self {
            v: self.v / s.f64(),
            unit: self.unit,
        }
    }
}

impl<D: Dimension> DivAssign<Scalar> for Measure<D> {
    fn div_assign(&mut self, s: Scalar) {
        self.v /= s.f64();
    }
}
