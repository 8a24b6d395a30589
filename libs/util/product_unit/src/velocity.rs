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
    supports_quantity, Dimension, DimensionUnit, Feet, Hours, Kilometers, LengthDim, LengthUnit,
    Measure, Meters, Miles, NauticalMiles, Seconds, Time, TimeUnit,
};
use ordered_float::OrderedFloat;
use std::{
    fmt,
    fmt::Debug,
    marker::PhantomData,
    ops::{Div, Mul},
};

pub type MetersPerSecond = (Meters, Seconds);
pub type FeetPerSecond = (Feet, Seconds);
pub type KilometersPerHour = (Kilometers, Hours);
pub type MilesPerHour = (Miles, Hours);
pub type Knots = (NauticalMiles, Hours);

/// length / time
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct VelocityDim;
impl Dimension for VelocityDim {
    const DIMENSION_NAME: &'static str = "velocity";
    type BaseUnit = MetersPerSecond;
}

// Velocity units are named by their length and time parts; the pair is the identity.
impl<L, T> DimensionUnit<VelocityDim> for (L, T)
where
    L: LengthUnit,
    T: TimeUnit,
{
    const BASE_UNITS_IN_UNIT: f64 = L::METERS_IN_UNIT / T::SECONDS_IN_UNIT;

    fn fmt_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", L::UNIT_NAME, T::UNIT_NAME)
    }

    fn fmt_suffix(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", L::UNIT_SHORT_NAME, T::UNIT_SHORT_NAME)
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct Velocity<UnitLength: LengthUnit, UnitTime: TimeUnit> {
    v: OrderedFloat<f64>, // in UnitLength / UnitTime
    phantom: PhantomData<(UnitLength, UnitTime)>,
}
supports_quantity!(Velocity[A: LengthUnit, B: TimeUnit] as (A, B) => VelocityDim);

impl<L, T> fmt::Display for Velocity<L, T>
where
    L: LengthUnit,
    T: TimeUnit,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.v.0, f)?;
        write!(f, "{}/{}", L::UNIT_SHORT_NAME, T::UNIT_SHORT_NAME)
    }
}

impl<LA, TA, LB, TB> From<&Velocity<LA, TA>> for Velocity<LB, TB>
where
    LA: LengthUnit,
    TA: TimeUnit,
    LB: LengthUnit,
    TB: TimeUnit,
{
    fn from(v: &Velocity<LA, TA>) -> Self {
        Self::from(&v.as_measure())
    }
}

impl<LA, TA, TB> Mul<Time<TB>> for Velocity<LA, TA>
where
    LA: LengthUnit,
    TA: TimeUnit,
    TB: TimeUnit,
{
    type Output = Measure<LengthDim>;

    fn mul(self, other: Time<TB>) -> Self::Output {
        self.as_measure() * other.as_measure()
    }
}

impl<LA, TA, LB, TB> Div<Velocity<LB, TB>> for Velocity<LA, TA>
where
    LA: LengthUnit,
    TA: TimeUnit,
    LB: LengthUnit,
    TB: TimeUnit,
{
    type Output = f64;

    fn div(self, other: Velocity<LB, TB>) -> Self::Output {
        self.v.0 / Velocity::<LA, TA>::from(&other).f64()
    }
}
