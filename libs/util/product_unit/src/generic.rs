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
/// Everything a statically united quantity needs, given its unit parameters and dimension:
///
/// ```ignore
/// supports_quantity!(Length[A: LengthUnit] as A => LengthDim);
/// supports_quantity!(Velocity[A: LengthUnit, B: TimeUnit] as (A, B) => VelocityDim);
/// ```
///
/// The type after `as` is the unit the quantity is measured in. All conversions, including
/// mixed-unit `+` and `-`, go through a `Measure` in that unit.
///
/// The quantity must be a struct with exactly `v: OrderedFloat<f64>` and `phantom` fields.
#[macro_export]
macro_rules! supports_quantity {
    ($Type:ident[$($P:ident: $Bound:path),+] as $Unit:ty => $Dim:ty) => {
        impl<$($P: $Bound),+> $Type<$($P),+> {
            pub fn unit_ref() -> $crate::UnitRef<$Dim> {
                $crate::UnitRef::<$Dim>::of::<$Unit>()
            }

            pub fn as_measure(&self) -> $crate::Measure<$Dim> {
                $crate::Measure::new(self.v.0, Self::unit_ref())
            }

            pub fn f64(self) -> f64 {
                self.v.0
            }

            fn from_f64(v: f64) -> Self {
                Self {
                    v: $crate::ordered_float::OrderedFloat(v),
                    phantom: std::marker::PhantomData,
                }
            }
        }

        impl<$($P: $Bound),+> From<&$crate::Measure<$Dim>> for $Type<$($P),+> {
            fn from(m: &$crate::Measure<$Dim>) -> Self {
                Self::from_f64(m.in_unit(Self::unit_ref()))
            }
        }

        impl<$($P: $Bound),+> From<$Type<$($P),+>> for $crate::Measure<$Dim> {
            fn from(v: $Type<$($P),+>) -> Self {
                v.as_measure()
            }
        }

        $crate::supports_quantity!(@number $Type[$($P: $Bound),+] f64);
        $crate::supports_quantity!(@number $Type[$($P: $Bound),+] f32);
        $crate::supports_quantity!(@number $Type[$($P: $Bound),+] i64);
        $crate::supports_quantity!(@number $Type[$($P: $Bound),+] i32);

        // Anything that becomes a measure of the same dimension can be added; the result stays
        // in the left hand unit.
        impl<$($P: $Bound),+, Rhs> std::ops::Add<Rhs> for $Type<$($P),+>
        where
            Rhs: Into<$crate::Measure<$Dim>>,
        {
            type Output = Self;

            fn add(self, rhs: Rhs) -> Self {
                Self::from(&(self.as_measure() + rhs.into()))
            }
        }

        impl<$($P: $Bound),+, Rhs> std::ops::Sub<Rhs> for $Type<$($P),+>
        where
            Rhs: Into<$crate::Measure<$Dim>>,
        {
            type Output = Self;

            fn sub(self, rhs: Rhs) -> Self {
                Self::from(&(self.as_measure() - rhs.into()))
            }
        }

        impl<$($P: $Bound),+> std::ops::Mul<$crate::Scalar> for $Type<$($P),+> {
            type Output = Self;

            fn mul(self, s: $crate::Scalar) -> Self {
                Self::from_f64(self.v.0 * s.f64())
            }
        }

        impl<$($P: $Bound),+> std::ops::Div<$crate::Scalar> for $Type<$($P),+> {
            type Output = Self;

            fn div(self, s: $crate::Scalar) -> Self {
                Self::from_f64(self.v.0 / s.f64())
            }
        }

        impl<$($P: $Bound),+> $crate::approx::AbsDiffEq for $Type<$($P),+> {
            type Epsilon = f64;

            fn default_epsilon() -> f64 {
                f64::EPSILON
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
                (self.v.0 - other.v.0).abs() <= epsilon
            }
        }
    };

    (@number $Type:ident[$($P:ident: $Bound:path),+] $Num:ty) => {
        impl<$($P: $Bound),+> From<$Num> for $Type<$($P),+> {
            fn from(v: $Num) -> Self {
                Self::from_f64(v as f64)
            }
        }

        impl<$($P: $Bound),+> From<&$Num> for $Type<$($P),+> {
            fn from(v: &$Num) -> Self {
                Self::from_f64(*v as f64)
            }
        }
    };
}
