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
    supports_quantity, Dimension, DimensionUnit, EnergyDim, LengthDim, LengthUnit, Measure, Power,
    PowerUnit, Seconds, Unit, Velocity,
};
use ordered_float::OrderedFloat;
use std::{fmt, fmt::Debug, marker::PhantomData, ops::Mul};

pub trait TimeUnit: Unit + Copy + Debug + Eq + PartialEq + 'static {
    const SECONDS_IN_UNIT: f64;
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct TimeDim;
impl Dimension for TimeDim {
    const DIMENSION_NAME: &'static str = "time";
    type BaseUnit = Seconds;
}

impl<U> DimensionUnit<TimeDim> for U
where
    U: TimeUnit,
{
    const BASE_UNITS_IN_UNIT: f64 = U::SECONDS_IN_UNIT;

    fn fmt_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(U::UNIT_NAME)
    }

    fn fmt_suffix(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(U::UNIT_SHORT_NAME)
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct Time<Unit: TimeUnit> {
    v: OrderedFloat<f64>, // in Unit
    phantom: PhantomData<Unit>,
}
supports_quantity!(Time[A: TimeUnit] as A => TimeDim);

impl<Unit> fmt::Display for Time<Unit>
where
    Unit: TimeUnit,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:0.4}{}", self.v.0, Unit::UNIT_SHORT_NAME)
    }
}

impl<A, B> From<&Time<A>> for Time<B>
where
    A: TimeUnit,
    B: TimeUnit,
{
    fn from(v: &Time<A>) -> Self {
        Self::from(&v.as_measure())
    }
}

impl<T, LV, TV> Mul<Velocity<LV, TV>> for Time<T>
where
    T: TimeUnit,
    LV: LengthUnit,
    TV: TimeUnit,
{
    type Output = Measure<LengthDim>;

    fn mul(self, other: Velocity<LV, TV>) -> Self::Output {
        self.as_measure() * other.as_measure()
    }
}

impl<T, P> Mul<Power<P>> for Time<T>
where
    T: TimeUnit,
    P: PowerUnit,
{
    type Output = Measure<EnergyDim>;

    fn mul(self, other: Power<P>) -> Self::Output {
        self.as_measure() * other.as_measure()
    }
}

#[cfg(test)]
mod test {
    use crate::{hours, kilometers_per_hour, meters, minutes, scalar, seconds, Kilometers};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_time() {
        let h = hours!(1);
        println!("h: {}", h);
        println!("s: {}", seconds!(h));
        assert_abs_diff_eq!(seconds!(h), seconds!(3_600));
        assert_abs_diff_eq!(minutes!(h), minutes!(60));
    }

    #[test]
    fn test_time_scalar() {
        assert_abs_diff_eq!(seconds!(2) * scalar!(2), seconds!(4));
    }

    #[test]
    fn test_time_shift() {
        assert_abs_diff_eq!(hours!(1) + minutes!(30), hours!(1.5));
    }

    #[test]
    fn test_time_times_velocity() {
        let d = hours!(2) * kilometers_per_hour!(32);
        assert!(d.unit().is::<Kilometers>());
        assert_abs_diff_eq!(d.f64(), 64.);
        assert_eq!(d, kilometers_per_hour!(32) * hours!(2));
        assert_abs_diff_eq!(meters!(d), meters!(64_000));
    }
}
