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
    supports_quantity, Dimension, DimensionUnit, EnergyDim, Measure, Time, TimeUnit, Unit, Watts,
};
use ordered_float::OrderedFloat;
use std::{fmt, fmt::Debug, marker::PhantomData, ops::Mul};

pub trait PowerUnit: Unit + Copy + Debug + Eq + PartialEq + 'static {
    const WATTS_IN_UNIT: f64;
}

/// energy / time
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct PowerDim;
impl Dimension for PowerDim {
    const DIMENSION_NAME: &'static str = "power";
    type BaseUnit = Watts;
}

impl<U> DimensionUnit<PowerDim> for U
where
    U: PowerUnit,
{
    const BASE_UNITS_IN_UNIT: f64 = U::WATTS_IN_UNIT;

    fn fmt_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(U::UNIT_NAME)
    }

    fn fmt_suffix(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(U::UNIT_SHORT_NAME)
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct Power<Unit: PowerUnit> {
    v: OrderedFloat<f64>, // in Unit
    phantom: PhantomData<Unit>,
}
supports_quantity!(Power[A: PowerUnit] as A => PowerDim);

impl<Unit> fmt::Display for Power<Unit>
where
    Unit: PowerUnit,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.v.0, f)?;
        write!(f, "{}", Unit::UNIT_SHORT_NAME)
    }
}

impl<A, B> From<&Power<A>> for Power<B>
where
    A: PowerUnit,
    B: PowerUnit,
{
    fn from(v: &Power<A>) -> Self {
        Self::from(&v.as_measure())
    }
}

impl<P, T> Mul<Time<T>> for Power<P>
where
    P: PowerUnit,
    T: TimeUnit,
{
    type Output = Measure<EnergyDim>;

    fn mul(self, other: Time<T>) -> Self::Output {
        self.as_measure() * other.as_measure()
    }
}
