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
use crate::{EnergyUnit, Unit};

#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct KilowattHours;
impl Unit for KilowattHours {
    const UNIT_NAME: &'static str = "kilowatt hours";
    const UNIT_SHORT_NAME: &'static str = "kWh";
    const UNIT_SUFFIX: &'static str = "kWh";
}
impl EnergyUnit for KilowattHours {
    const JOULES_IN_UNIT: f64 = 3_600_000.;
}

#[macro_export]
macro_rules! kilowatt_hours {
    ($num:expr) => {
        $crate::Energy::<$crate::KilowattHours>::from(&$num)
    };
}
