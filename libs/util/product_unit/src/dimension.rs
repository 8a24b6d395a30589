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
use std::{
    fmt::{self, Debug},
    hash::Hash,
};

/// A kind of physical quantity, like length or duration. Each has exactly one base unit that
/// all of its values are normalized through.
pub trait Dimension: Copy + Debug + Default + Eq + Ord + Hash + Send + Sync + 'static {
    const DIMENSION_NAME: &'static str;

    type BaseUnit: DimensionUnit<Self>;
}

/// A unit belonging to the dimension `D`.
///
/// Conversion is linear: `value_in_base = value * BASE_UNITS_IN_UNIT`.
pub trait DimensionUnit<D>: Copy + Debug + 'static {
    const BASE_UNITS_IN_UNIT: f64;

    fn fmt_name(f: &mut fmt::Formatter<'_>) -> fmt::Result;
    fn fmt_suffix(f: &mut fmt::Formatter<'_>) -> fmt::Result;
}
