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
pub(crate) mod dimension;
pub(crate) mod energy;
pub(crate) mod generic;
pub(crate) mod length;
pub(crate) mod measure;
pub(crate) mod power;
pub mod product;
pub(crate) mod time;
pub(crate) mod unit;
pub(crate) mod unit_ref;
pub(crate) mod velocity;

pub use crate::{
    dimension::{Dimension, DimensionUnit},
    energy::{Energy, EnergyDim, EnergyUnit},
    length::{Length, LengthDim, LengthUnit},
    measure::Measure,
    power::{Power, PowerDim, PowerUnit},
    product::{check_mappings, DivBy, MulBy, ProductOf, UnitMapping},
    time::{Time, TimeDim, TimeUnit},
    unit::{
        feet::Feet, hours::Hours, joules::Joules, kilometers::Kilometers,
        kilowatt_hours::KilowattHours, kilowatts::Kilowatts, meters::Meters, miles::Miles,
        minutes::Minutes, nautical_miles::NauticalMiles, scalar::Scalar, seconds::Seconds,
        watt_hours::WattHours, watts::Watts, Unit,
    },
    unit_ref::UnitRef,
    velocity::{
        FeetPerSecond, KilometersPerHour, Knots, MetersPerSecond, MilesPerHour, Velocity,
        VelocityDim,
    },
};

pub use approx;
pub use ordered_float;
