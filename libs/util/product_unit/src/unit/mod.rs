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
use std::fmt::Debug;

/// Names shared by every unit marker, regardless of what it measures.
pub trait Unit: Copy + Debug + Eq + PartialEq + 'static {
    const UNIT_NAME: &'static str;
    const UNIT_SHORT_NAME: &'static str;
    const UNIT_SUFFIX: &'static str;
}

// Unitless
pub(crate) mod scalar;

// Distance
pub(crate) mod feet;
pub(crate) mod kilometers;
pub(crate) mod meters;
pub(crate) mod miles;
pub(crate) mod nautical_miles;

// Time
pub(crate) mod hours;
pub(crate) mod minutes;
pub(crate) mod seconds;

// Power
pub(crate) mod kilowatts;
pub(crate) mod watts;

// Energy
pub(crate) mod joules;
pub(crate) mod kilowatt_hours;
pub(crate) mod watt_hours;
