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
use crate::{Dimension, DimensionUnit};
use std::{
    any::TypeId,
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
};

type FmtFn = fn(&mut fmt::Formatter<'_>) -> fmt::Result;

struct Formatted(FmtFn);

impl fmt::Display for Formatted {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        (self.0)(f)
    }
}

/// A runtime handle on one unit of the dimension `D`.
///
/// Handles compare and hash by the identity of the unit type they were made from, never by
/// conversion coefficient: two units that share a coefficient are still different units.
/// The coefficient is only used when moving values in and out of the base unit.
#[derive(Clone, Copy)]
pub struct UnitRef<D: Dimension> {
    id: TypeId,
    base_units_in_unit: f64,
    fmt_name: FmtFn,
    fmt_suffix: FmtFn,
    phantom: PhantomData<D>,
}

impl<D: Dimension> UnitRef<D> {
    pub fn of<U>() -> Self
    where
        U: DimensionUnit<D>,
    {
        Self {
            id: TypeId::of::<U>(),
            base_units_in_unit: <U as DimensionUnit<D>>::BASE_UNITS_IN_UNIT,
            fmt_name: <U as DimensionUnit<D>>::fmt_name,
            fmt_suffix: <U as DimensionUnit<D>>::fmt_suffix,
            phantom: PhantomData,
        }
    }

    pub fn base() -> Self {
        Self::of::<D::BaseUnit>()
    }

    pub fn is<U: 'static>(&self) -> bool {
        self.id == TypeId::of::<U>()
    }

    pub fn is_base(&self) -> bool {
        self.is::<D::BaseUnit>()
    }

    pub fn base_units_in_unit(&self) -> f64 {
        self.base_units_in_unit
    }

    pub fn to_base(&self, v: f64) -> f64 {
        v * self.base_units_in_unit
    }

    pub fn from_base(&self, v: f64) -> f64 {
        v / self.base_units_in_unit
    }

    pub fn name(&self) -> String {
        Formatted(self.fmt_name).to_string()
    }

    pub fn suffix(&self) -> String {
        Formatted(self.fmt_suffix).to_string()
    }
}

impl<D: Dimension> PartialEq for UnitRef<D> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<D: Dimension> Eq for UnitRef<D> {}

impl<D: Dimension> Hash for UnitRef<D> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<D: Dimension> fmt::Display for UnitRef<D> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        (self.fmt_suffix)(f)
    }
}

impl<D: Dimension> fmt::Debug for UnitRef<D> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("UnitRef")
            .field("dimension", &D::DIMENSION_NAME)
            .field("unit", &format_args!("{}", Formatted(self.fmt_name)))
            .field("base_units_in_unit", &self.base_units_in_unit)
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{Hours, Kilometers, LengthDim, Meters, Seconds, TimeDim, VelocityDim};
    use std::collections::HashSet;

    #[test]
    fn test_identity() {
        assert_eq!(UnitRef::<LengthDim>::of::<Meters>(), UnitRef::base());
        assert_ne!(
            UnitRef::<LengthDim>::of::<Meters>(),
            UnitRef::<LengthDim>::of::<Kilometers>()
        );
        assert!(UnitRef::<VelocityDim>::of::<(Kilometers, Hours)>().is::<(Kilometers, Hours)>());
        assert!(!UnitRef::<VelocityDim>::of::<(Kilometers, Hours)>().is_base());
    }

    #[test]
    fn test_hash_by_identity() {
        let units: HashSet<UnitRef<TimeDim>> = [
            UnitRef::of::<Seconds>(),
            UnitRef::of::<Hours>(),
            UnitRef::of::<Seconds>(),
        ]
        .into_iter()
        .collect();
        assert_eq!(units.len(), 2);
    }

    #[test]
    fn test_names() {
        let kph = UnitRef::<VelocityDim>::of::<(Kilometers, Hours)>();
        assert_eq!(kph.suffix(), "km/h");
        assert_eq!(kph.name(), "kilometers/hours");
        assert_eq!(format!("{}", UnitRef::<TimeDim>::of::<Hours>()), "h");
        println!("{:?}", kph);
    }

    #[test]
    fn test_base_conversion() {
        let km = UnitRef::<LengthDim>::of::<Kilometers>();
        assert_eq!(km.to_base(2.), 2_000.);
        assert_eq!(km.from_base(2_000.), 2.);
    }
}
