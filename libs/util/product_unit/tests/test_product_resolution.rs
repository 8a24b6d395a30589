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
use anyhow::Result;
use approx::{assert_abs_diff_eq, assert_relative_eq};
use product_unit::{
    check_mappings, hours, impl_product, kilometers, kilometers_per_hour, meters,
    meters_per_second, product, seconds, Dimension, DimensionUnit, FeetPerSecond, Hours,
    Kilometers, KilometersPerHour, Knots, LengthDim, Measure, Meters, MetersPerSecond,
    MilesPerHour, Minutes, ProductOf, Seconds, TimeDim, UnitMapping, UnitRef, VelocityDim,
};
use rand::{thread_rng, Rng};
use std::fmt;

macro_rules! fixture_dimension {
    ($Dim:ident, $Base:ident) => {
        #[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
        struct $Dim;
        impl Dimension for $Dim {
            const DIMENSION_NAME: &'static str = stringify!($Dim);
            type BaseUnit = $Base;
        }
    };
}

macro_rules! fixture_unit {
    ($Unit:ident, $Dim:ty, $coefficient:expr) => {
        #[derive(Clone, Copy, Debug)]
        struct $Unit;
        impl DimensionUnit<$Dim> for $Unit {
            const BASE_UNITS_IN_UNIT: f64 = $coefficient;

            fn fmt_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(stringify!($Unit))
            }

            fn fmt_suffix(f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(stringify!($Unit))
            }
        }
    };
}

fixture_dimension!(Factor1, OneA);
fixture_unit!(OneA, Factor1, 1.);
fixture_unit!(KiloA, Factor1, 1_000.);
// Same coefficient as KiloA, but a different unit.
fixture_unit!(ThousandA, Factor1, 1_000.);
fixture_unit!(SevenA, Factor1, 7.);

fixture_dimension!(Factor2, OneB);
fixture_unit!(OneB, Factor2, 1.);
fixture_unit!(HundredB, Factor2, 100.);
fixture_unit!(ThreeB, Factor2, 3.);

fixture_dimension!(Product, OneP);
fixture_unit!(OneP, Product, 1.);
fixture_unit!(LakhP, Product, 100_000.);
fixture_unit!(FiveP, Product, 5.);

impl ProductOf<Factor1, Factor2> for Product {
    fn default_mapping() -> UnitMapping<Factor1, Factor2, Self> {
        UnitMapping::of::<OneA, OneB, OneP>()
    }

    fn preferred_mappings() -> &'static [UnitMapping<Factor1, Factor2, Self>] {
        static MAPPINGS: once_cell::sync::Lazy<[UnitMapping<Factor1, Factor2, Product>; 2]> =
            once_cell::sync::Lazy::new(|| {
                [
                    UnitMapping::of::<KiloA, HundredB, LakhP>(),
                    // 7 * 3 / 5: every product through this mapping is rescaled.
                    UnitMapping::of::<SevenA, ThreeB, FiveP>(),
                ]
            });
        MAPPINGS.as_slice()
    }
}
impl_product!(Factor1, Factor2 => Product);

// Only a default mapping.
fixture_dimension!(Plain, OneP2);
fixture_unit!(OneP2, Plain, 1.);
fixture_unit!(KiloP2, Plain, 1_000.);

impl ProductOf<Factor1, Factor2> for Plain {
    fn default_mapping() -> UnitMapping<Factor1, Factor2, Self> {
        UnitMapping::of::<KiloA, OneB, KiloP2>()
    }
}

// Two preferred mappings for the same operand pair.
fixture_dimension!(Twin, OneP3);
fixture_unit!(OneP3, Twin, 1.);
fixture_unit!(LakhP3, Twin, 100_000.);

impl ProductOf<Factor1, Factor2> for Twin {
    fn default_mapping() -> UnitMapping<Factor1, Factor2, Self> {
        UnitMapping::of::<OneA, OneB, OneP3>()
    }

    fn preferred_mappings() -> &'static [UnitMapping<Factor1, Factor2, Self>] {
        static MAPPINGS: once_cell::sync::Lazy<[UnitMapping<Factor1, Factor2, Twin>; 2]> =
            once_cell::sync::Lazy::new(|| {
                [
                    UnitMapping::of::<KiloA, HundredB, LakhP3>(),
                    UnitMapping::of::<KiloA, HundredB, OneP3>(),
                ]
            });
        MAPPINGS.as_slice()
    }
}

// A unit that cannot be converted.
fixture_dimension!(Broken, OneP4);
fixture_unit!(OneP4, Broken, 1.);
fixture_unit!(ZeroP4, Broken, 0.);

impl ProductOf<Factor1, Factor2> for Broken {
    fn default_mapping() -> UnitMapping<Factor1, Factor2, Self> {
        UnitMapping::of::<OneA, OneB, ZeroP4>()
    }
}

#[test]
fn test_default_pairing() {
    let d = meters_per_second!(10) * seconds!(5);
    assert!(d.unit().is::<Meters>());
    assert_eq!(d, Measure::<LengthDim>::in_units::<Meters, _>(50));
    assert_eq!(d.f64(), 50.);
}

#[test]
fn test_preferred_pairing() {
    let d = kilometers_per_hour!(32) * hours!(2);
    assert_eq!(d.unit(), UnitRef::of::<Kilometers>());
    assert_eq!(d.f64(), 64.);
    assert_eq!(d, kilometers!(64).as_measure());
}

#[test]
fn test_mixed_units_fall_back_to_default() {
    let d = kilometers_per_hour!(32) * seconds!(3_600);
    assert_eq!(d.unit(), UnitRef::of::<Meters>());
    assert_abs_diff_eq!(d, kilometers!(32).as_measure(), epsilon = 0.000_001);
}

#[test]
fn test_default_quotient() {
    let t = meters!(20) / meters_per_second!(10);
    assert!(t.unit().is::<Seconds>());
    assert_abs_diff_eq!(t, seconds!(2).as_measure());
}

#[test]
fn test_preferred_quotient() {
    let t = kilometers!(500) / kilometers_per_hour!(125);
    assert_eq!(t.unit(), UnitRef::of::<Hours>());
    assert_eq!(t.f64(), 4.);
}

#[test]
fn test_exact_preferred_match() {
    let p = Measure::<Factor1>::in_units::<KiloA, _>(3)
        * Measure::<Factor2>::in_units::<HundredB, _>(7);
    assert!(p.unit().is::<LakhP>());
    assert_eq!(p.f64(), 21.);
}

#[test]
fn test_exact_match_with_rescaling() {
    let mapping = product::product_mapping::<Factor1, Factor2, Product>(
        UnitRef::of::<SevenA>(),
        UnitRef::of::<ThreeB>(),
    );
    assert!(!mapping.is_coherent());
    assert_relative_eq!(mapping.scale(), 4.2);

    let a = Measure::<Factor1>::in_units::<SevenA, _>(2);
    let b = Measure::<Factor2>::in_units::<ThreeB, _>(5);
    let p = a * b;
    assert!(p.unit().is::<FiveP>());
    assert_relative_eq!(p.f64(), 42.);
    assert_relative_eq!(p.base_f64(), 210.);
    assert_eq!(p.unit(), (b * a).unit());

    let q = p / a;
    assert!(q.unit().is::<ThreeB>());
    assert_relative_eq!(q.f64(), 5.);

    let q = p / b;
    assert!(q.unit().is::<SevenA>());
    assert_relative_eq!(q.f64(), 2.);
}

#[test]
fn test_identity_not_coefficient() {
    // ThousandA converts exactly like KiloA, but is not the unit the preferred mapping names.
    let p = Measure::<Factor1>::in_units::<ThousandA, _>(3)
        * Measure::<Factor2>::in_units::<HundredB, _>(7);
    assert!(p.unit().is::<OneP>());
    assert_relative_eq!(p.f64(), 2_100_000.);
    assert_relative_eq!(p, Measure::<Product>::in_units::<LakhP, _>(21));
}

#[test]
fn test_partial_match_is_not_a_match() {
    let p = Measure::<Factor1>::in_units::<KiloA, _>(3)
        * Measure::<Factor2>::in_units::<OneB, _>(7);
    assert!(p.unit().is::<OneP>());
    assert_relative_eq!(p.f64(), 21_000.);

    let p = Measure::<Factor1>::in_units::<OneA, _>(3)
        * Measure::<Factor2>::in_units::<HundredB, _>(7);
    assert!(p.unit().is::<OneP>());
    assert_relative_eq!(p.f64(), 2_100.);
}

#[test]
fn test_fixture_quotients() {
    let p = Measure::<Product>::in_units::<LakhP, _>(21);
    let b = p / Measure::<Factor1>::in_units::<KiloA, _>(3);
    assert!(b.unit().is::<HundredB>());
    assert_eq!(b.f64(), 7.);

    let a = p / Measure::<Factor2>::in_units::<HundredB, _>(7);
    assert!(a.unit().is::<KiloA>());
    assert_eq!(a.f64(), 3.);

    let b = p / Measure::<Factor1>::in_units::<ThousandA, _>(3);
    assert!(b.unit().is::<OneB>());
    assert_relative_eq!(b.f64(), 700.);
}

#[test]
fn test_empty_preferred_list() {
    assert!(<Plain as ProductOf<Factor1, Factor2>>::preferred_mappings().is_empty());
    let p = product::multiply::<Factor1, Factor2, Plain>(
        &Measure::in_units::<KiloA, _>(3),
        &Measure::in_units::<HundredB, _>(7),
    );
    assert!(p.unit().is::<KiloP2>());
    assert_relative_eq!(p.f64(), 2_100.);

    let p = product::multiply::<Factor1, Factor2, Plain>(
        &Measure::in_units::<KiloA, _>(3),
        &Measure::in_units::<OneB, _>(7),
    );
    assert!(p.unit().is::<KiloP2>());
    assert_eq!(p.f64(), 21.);
}

#[test]
fn test_first_registration_wins() {
    let mapping = product::product_mapping::<Factor1, Factor2, Twin>(
        UnitRef::of::<KiloA>(),
        UnitRef::of::<HundredB>(),
    );
    assert!(mapping.product().is::<LakhP3>());
    assert!(check_mappings::<Factor1, Factor2, Twin>().is_err());
}

#[test]
fn test_check_mappings() {
    assert!(check_mappings::<Factor1, Factor2, Product>().is_ok());
    assert!(check_mappings::<Factor1, Factor2, Plain>().is_ok());
    let err = check_mappings::<Factor1, Factor2, Broken>().unwrap_err();
    assert!(err.to_string().contains("ZeroP4"));
}

#[test]
fn test_builtin_tables() -> Result<()> {
    check_mappings::<VelocityDim, TimeDim, LengthDim>()?;
    for mapping in <LengthDim as ProductOf<VelocityDim, TimeDim>>::preferred_mappings() {
        assert!(mapping.is_coherent(), "{}", mapping);
    }
    Ok(())
}

fn velocity_units() -> [UnitRef<VelocityDim>; 5] {
    [
        UnitRef::of::<MetersPerSecond>(),
        UnitRef::of::<KilometersPerHour>(),
        UnitRef::of::<MilesPerHour>(),
        UnitRef::of::<Knots>(),
        UnitRef::of::<FeetPerSecond>(),
    ]
}

fn time_units() -> [UnitRef<TimeDim>; 3] {
    [
        UnitRef::of::<Seconds>(),
        UnitRef::of::<Minutes>(),
        UnitRef::of::<Hours>(),
    ]
}

#[test]
fn test_commutative() {
    let mut rng = thread_rng();
    for _ in 0..1_000 {
        let v = Measure::new(
            rng.gen_range(-1_000.0..1_000.0),
            velocity_units()[rng.gen_range(0..5)],
        );
        let t = Measure::new(rng.gen_range(0.0..1_000.0), time_units()[rng.gen_range(0..3)]);
        assert_eq!(v * t, t * v);
        assert_eq!((v * t).unit(), (t * v).unit());
    }
}

#[test]
fn test_division_inverts_multiplication() {
    let mut rng = thread_rng();
    for _ in 0..1_000 {
        let v = Measure::new(
            rng.gen_range(0.1..1_000.0),
            velocity_units()[rng.gen_range(0..5)],
        );
        let t = Measure::new(rng.gen_range(0.1..1_000.0), time_units()[rng.gen_range(0..3)]);
        let d = v * t;
        assert_relative_eq!(d / v, t, max_relative = 0.000_000_001);
        assert_relative_eq!(d / t, v, max_relative = 0.000_000_001);
    }
}
