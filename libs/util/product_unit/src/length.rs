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
use crate::{
    impl_product, supports_quantity, Dimension, DimensionUnit, Feet, Hours, Kilometers, Measure,
    Meters, Miles, NauticalMiles, ProductOf, Seconds, Time, TimeDim, TimeUnit, Unit, UnitMapping,
    Velocity, VelocityDim,
};
use once_cell::sync::Lazy;
use ordered_float::OrderedFloat;
use std::{fmt, fmt::Debug, marker::PhantomData, ops::Div};

pub trait LengthUnit: Unit + Copy + Debug + Eq + PartialEq + 'static {
    const METERS_IN_UNIT: f64;
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct LengthDim;
impl Dimension for LengthDim {
    const DIMENSION_NAME: &'static str = "length";
    type BaseUnit = Meters;
}

impl<U> DimensionUnit<LengthDim> for U
where
    U: LengthUnit,
{
    const BASE_UNITS_IN_UNIT: f64 = U::METERS_IN_UNIT;

    fn fmt_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(U::UNIT_NAME)
    }

    fn fmt_suffix(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(U::UNIT_SHORT_NAME)
    }
}

static VELOCITY_TIME_MAPPINGS: Lazy<[UnitMapping<VelocityDim, TimeDim, LengthDim>; 4]> =
    Lazy::new(|| {
        [
            UnitMapping::of::<(Kilometers, Hours), Hours, Kilometers>(),
            UnitMapping::of::<(Miles, Hours), Hours, Miles>(),
            UnitMapping::of::<(NauticalMiles, Hours), Hours, NauticalMiles>(),
            UnitMapping::of::<(Feet, Seconds), Seconds, Feet>(),
        ]
    });

impl ProductOf<VelocityDim, TimeDim> for LengthDim {
    fn default_mapping() -> UnitMapping<VelocityDim, TimeDim, Self> {
        UnitMapping::of::<(Meters, Seconds), Seconds, Meters>()
    }

    fn preferred_mappings() -> &'static [UnitMapping<VelocityDim, TimeDim, Self>] {
        VELOCITY_TIME_MAPPINGS.as_slice()
    }
}
impl_product!(VelocityDim, TimeDim => LengthDim);

#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct Length<Unit: LengthUnit> {
    v: OrderedFloat<f64>, // in Unit
    phantom: PhantomData<Unit>,
}
supports_quantity!(Length[A: LengthUnit] as A => LengthDim);

impl<Unit> fmt::Display for Length<Unit>
where
    Unit: LengthUnit,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:0.4}{}", self.v.0, Unit::UNIT_SUFFIX)
    }
}

impl<A, B> From<&Length<A>> for Length<B>
where
    A: LengthUnit,
    B: LengthUnit,
{
    fn from(v: &Length<A>) -> Self {
        Self::from(&v.as_measure())
    }
}

impl<LA, LB> Div<Length<LB>> for Length<LA>
where
    LA: LengthUnit,
    LB: LengthUnit,
{
    type Output = f64;

    fn div(self, other: Length<LB>) -> Self::Output {
        self.v.0 / Length::<LA>::from(&other).f64()
    }
}

impl<L, LV, TV> Div<Velocity<LV, TV>> for Length<L>
where
    L: LengthUnit,
    LV: LengthUnit,
    TV: TimeUnit,
{
    type Output = Measure<TimeDim>;

    fn div(self, other: Velocity<LV, TV>) -> Self::Output {
        self.as_measure() / other.as_measure()
    }
}

impl<L, T> Div<Time<T>> for Length<L>
where
    L: LengthUnit,
    T: TimeUnit,
{
    type Output = Measure<VelocityDim>;

    fn div(self, other: Time<T>) -> Self::Output {
        self.as_measure() / other.as_measure()
    }
}

#[cfg(test)]
mod test {
    use crate::{
        feet, feet_per_second, hours, kilometers, kilometers_per_hour, meters, meters_per_second,
        minutes, scalar, seconds, Feet, Hours, Kilometers, Meters, Seconds,
    };
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_meters_to_feet() {
        let m = meters!(1);
        println!("m : {}", m);
        println!("ft: {}", feet!(m));
        assert_abs_diff_eq!(feet!(m), feet!(3.280_84), epsilon = 0.000_01);
    }

    #[test]
    fn test_length_shift() {
        let m = meters!(100) + feet!(100);
        assert_abs_diff_eq!(m, meters!(130.48), epsilon = 0.000_001);
    }

    #[test]
    fn test_length_scalar() {
        assert_abs_diff_eq!(meters!(2) * scalar!(2), meters!(4));
    }

    #[test]
    fn test_length_cancel() {
        assert_abs_diff_eq!(4., kilometers!(2) / meters!(500))
    }

    #[test]
    fn test_length_over_velocity() {
        let t = feet!(300) / feet_per_second!(30);
        assert!(t.unit().is::<Seconds>());
        assert_abs_diff_eq!(t.f64(), 10.);

        let t = kilometers!(500) / kilometers_per_hour!(125);
        assert!(t.unit().is::<Hours>());
        assert_abs_diff_eq!(hours!(t), hours!(4));

        // Mixed units land in the default mapping's time unit.
        let t = kilometers!(1) / meters_per_second!(10);
        assert!(t.unit().is::<Seconds>());
        assert_abs_diff_eq!(seconds!(t), seconds!(100), epsilon = 0.000_001);
    }

    #[test]
    fn test_length_over_time() {
        let v = feet!(300) / seconds!(10);
        assert!(v.unit().is::<(Feet, Seconds)>());
        assert_abs_diff_eq!(feet_per_second!(v), feet_per_second!(30));

        let v = kilometers!(3) / minutes!(1);
        assert!(v.unit().is::<(Meters, Seconds)>());
        assert_abs_diff_eq!(meters_per_second!(v), meters_per_second!(50));
        assert_abs_diff_eq!(
            kilometers_per_hour!(v),
            kilometers_per_hour!(180),
            epsilon = 0.000_001
        );
    }

    #[test]
    fn test_measure_round_trip() {
        let km = kilometers!(1.5);
        let m = km.as_measure();
        assert!(m.unit().is::<Kilometers>());
        assert_abs_diff_eq!(meters!(m), meters!(1_500));
        let back: crate::Length<Meters> = (&m).into();
        assert_abs_diff_eq!(back, meters!(1_500));
    }
}
