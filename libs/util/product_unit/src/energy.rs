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
    impl_product, supports_quantity, Dimension, DimensionUnit, Hours, Joules, KilowattHours,
    Kilowatts, Measure, Power, PowerDim, PowerUnit, ProductOf, Seconds, Time, TimeDim, TimeUnit,
    Unit, UnitMapping, WattHours, Watts,
};
use once_cell::sync::Lazy;
use ordered_float::OrderedFloat;
use std::{fmt, fmt::Debug, marker::PhantomData, ops::Div};

pub trait EnergyUnit: Unit + Copy + Debug + Eq + PartialEq + 'static {
    const JOULES_IN_UNIT: f64;
}

/// power * time
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct EnergyDim;
impl Dimension for EnergyDim {
    const DIMENSION_NAME: &'static str = "energy";
    type BaseUnit = Joules;
}

impl<U> DimensionUnit<EnergyDim> for U
where
    U: EnergyUnit,
{
    const BASE_UNITS_IN_UNIT: f64 = U::JOULES_IN_UNIT;

    fn fmt_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(U::UNIT_NAME)
    }

    fn fmt_suffix(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(U::UNIT_SHORT_NAME)
    }
}

static POWER_TIME_MAPPINGS: Lazy<[UnitMapping<PowerDim, TimeDim, EnergyDim>; 2]> =
    Lazy::new(|| {
        [
            UnitMapping::of::<Kilowatts, Hours, KilowattHours>(),
            UnitMapping::of::<Watts, Hours, WattHours>(),
        ]
    });

impl ProductOf<PowerDim, TimeDim> for EnergyDim {
    fn default_mapping() -> UnitMapping<PowerDim, TimeDim, Self> {
        UnitMapping::of::<Watts, Seconds, Joules>()
    }

    fn preferred_mappings() -> &'static [UnitMapping<PowerDim, TimeDim, Self>] {
        POWER_TIME_MAPPINGS.as_slice()
    }
}
impl_product!(PowerDim, TimeDim => EnergyDim);

#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct Energy<Unit: EnergyUnit> {
    v: OrderedFloat<f64>, // in Unit
    phantom: PhantomData<Unit>,
}
supports_quantity!(Energy[A: EnergyUnit] as A => EnergyDim);

impl<Unit> fmt::Display for Energy<Unit>
where
    Unit: EnergyUnit,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.v.0, f)?;
        write!(f, "{}", Unit::UNIT_SHORT_NAME)
    }
}

impl<A, B> From<&Energy<A>> for Energy<B>
where
    A: EnergyUnit,
    B: EnergyUnit,
{
    fn from(v: &Energy<A>) -> Self {
        Self::from(&v.as_measure())
    }
}

impl<E, P> Div<Power<P>> for Energy<E>
where
    E: EnergyUnit,
    P: PowerUnit,
{
    type Output = Measure<TimeDim>;

    fn div(self, other: Power<P>) -> Self::Output {
        self.as_measure() / other.as_measure()
    }
}

impl<E, T> Div<Time<T>> for Energy<E>
where
    E: EnergyUnit,
    T: TimeUnit,
{
    type Output = Measure<PowerDim>;

    fn div(self, other: Time<T>) -> Self::Output {
        self.as_measure() / other.as_measure()
    }
}
