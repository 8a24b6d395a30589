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
//! Resolution of the unit that a product or quotient of two measures lands in.
//!
//! A product dimension `P = F1 * F2` registers one default `UnitMapping` and, optionally, an
//! ordered list of preferred mappings through `ProductOf`. Multiplying a measure in unit `a`
//! by one in unit `b` lands in the product unit of the first preferred mapping that names
//! exactly `(a, b)`, or in the default mapping's product unit when none does. Division runs
//! the same search keyed on the product unit and the known factor unit.
//!
//! Matching is on unit identity only. A mapping that matches just one of the operands is never
//! used; mixed units always fall through to the default.
use crate::{Dimension, DimensionUnit, Measure, UnitRef};
use anyhow::{bail, Result};
use approx::relative_eq;
use log::{trace, warn};
use std::{
    fmt,
    ops::{Div, Mul},
};

/// One `factor1 * factor2 => product` unit triple.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnitMapping<F1: Dimension, F2: Dimension, P: Dimension> {
    factor1: UnitRef<F1>,
    factor2: UnitRef<F2>,
    product: UnitRef<P>,
    // product value per factor1 value per factor2 value, when all three units are as named
    scale: f64,
}

impl<F1, F2, P> UnitMapping<F1, F2, P>
where
    F1: Dimension,
    F2: Dimension,
    P: Dimension,
{
    pub fn new(factor1: UnitRef<F1>, factor2: UnitRef<F2>, product: UnitRef<P>) -> Self {
        let scale = factor1.base_units_in_unit() * factor2.base_units_in_unit()
            / product.base_units_in_unit();
        // Coherent triples (km/h * h => km) multiply the raw values with no conversion at all.
        let scale = if relative_eq!(scale, 1.) { 1. } else { scale };
        Self {
            factor1,
            factor2,
            product,
            scale,
        }
    }

    pub fn of<U1, U2, UP>() -> Self
    where
        U1: DimensionUnit<F1>,
        U2: DimensionUnit<F2>,
        UP: DimensionUnit<P>,
    {
        Self::new(UnitRef::of::<U1>(), UnitRef::of::<U2>(), UnitRef::of::<UP>())
    }

    pub fn factor1(&self) -> UnitRef<F1> {
        self.factor1
    }

    pub fn factor2(&self) -> UnitRef<F2> {
        self.factor2
    }

    pub fn product(&self) -> UnitRef<P> {
        self.product
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn is_coherent(&self) -> bool {
        self.scale == 1.
    }

    fn units(&self) -> [(&'static str, f64); 3] {
        [
            (F1::DIMENSION_NAME, self.factor1.base_units_in_unit()),
            (F2::DIMENSION_NAME, self.factor2.base_units_in_unit()),
            (P::DIMENSION_NAME, self.product.base_units_in_unit()),
        ]
    }
}

impl<F1, F2, P> fmt::Display for UnitMapping<F1, F2, P>
where
    F1: Dimension,
    F2: Dimension,
    P: Dimension,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} * {} => {}", self.factor1, self.factor2, self.product)
    }
}

/// Registration of the unit tables for a product dimension `Self = F1 * F2`.
///
/// Tables are expected to be static: the resolver reads them on every operation and assumes
/// they never change.
pub trait ProductOf<F1: Dimension, F2: Dimension>: Dimension {
    /// Where results land when no preferred mapping names both operand units.
    fn default_mapping() -> UnitMapping<F1, F2, Self>;

    /// Searched in order; the first match wins.
    fn preferred_mappings() -> &'static [UnitMapping<F1, F2, Self>] {
        &[]
    }
}

/// Dimensions that can be multiplied by a measure of `Rhs`.
pub trait MulBy<Rhs: Dimension>: Dimension {
    type Output: Dimension;

    fn multiply(lhs: &Measure<Self>, rhs: &Measure<Rhs>) -> Measure<Self::Output>;
}

/// Dimensions that can be divided by a measure of `Rhs`.
pub trait DivBy<Rhs: Dimension>: Dimension {
    type Output: Dimension;

    fn divide(lhs: &Measure<Self>, rhs: &Measure<Rhs>) -> Measure<Self::Output>;
}

impl<A, B> Mul<Measure<B>> for Measure<A>
where
    A: MulBy<B>,
    B: Dimension,
{
    type Output = Measure<A::Output>;

    fn mul(self, rhs: Measure<B>) -> Self::Output {
        A::multiply(&self, &rhs)
    }
}

impl<A, B> Div<Measure<B>> for Measure<A>
where
    A: DivBy<B>,
    B: Dimension,
{
    type Output = Measure<A::Output>;

    fn div(self, rhs: Measure<B>) -> Self::Output {
        A::divide(&self, &rhs)
    }
}

/// Wires `F1 * F2`, `F2 * F1`, `P / F1` and `P / F2` on `Measure` through the tables that
/// `P: ProductOf<F1, F2>` registers. `F1` and `F2` must be different dimensions.
#[macro_export]
macro_rules! impl_product {
    ($Factor1:ty, $Factor2:ty => $Product:ty) => {
        impl $crate::MulBy<$Factor2> for $Factor1 {
            type Output = $Product;

            fn multiply(
                lhs: &$crate::Measure<$Factor1>,
                rhs: &$crate::Measure<$Factor2>,
            ) -> $crate::Measure<$Product> {
                $crate::product::multiply::<$Factor1, $Factor2, $Product>(lhs, rhs)
            }
        }

        impl $crate::MulBy<$Factor1> for $Factor2 {
            type Output = $Product;

            fn multiply(
                lhs: &$crate::Measure<$Factor2>,
                rhs: &$crate::Measure<$Factor1>,
            ) -> $crate::Measure<$Product> {
                $crate::product::multiply::<$Factor1, $Factor2, $Product>(rhs, lhs)
            }
        }

        impl $crate::DivBy<$Factor1> for $Product {
            type Output = $Factor2;

            fn divide(
                lhs: &$crate::Measure<$Product>,
                rhs: &$crate::Measure<$Factor1>,
            ) -> $crate::Measure<$Factor2> {
                $crate::product::divide_by_factor1::<$Factor1, $Factor2, $Product>(lhs, rhs)
            }
        }

        impl $crate::DivBy<$Factor2> for $Product {
            type Output = $Factor1;

            fn divide(
                lhs: &$crate::Measure<$Product>,
                rhs: &$crate::Measure<$Factor2>,
            ) -> $crate::Measure<$Factor1> {
                $crate::product::divide_by_factor2::<$Factor1, $Factor2, $Product>(lhs, rhs)
            }
        }
    };
}

fn find_or_default<F1, F2, P>(
    what: fmt::Arguments<'_>,
    pred: impl Fn(&UnitMapping<F1, F2, P>) -> bool,
) -> UnitMapping<F1, F2, P>
where
    F1: Dimension,
    F2: Dimension,
    P: ProductOf<F1, F2>,
{
    P::preferred_mappings()
        .iter()
        .find(|mapping| pred(mapping))
        .copied()
        .unwrap_or_else(|| {
            let mapping = P::default_mapping();
            trace!(
                "no preferred {} mapping for {}; using default {}",
                P::DIMENSION_NAME,
                what,
                mapping
            );
            mapping
        })
}

/// The mapping that a product of measures in `factor1` and `factor2` resolves through.
pub fn product_mapping<F1, F2, P>(
    factor1: UnitRef<F1>,
    factor2: UnitRef<F2>,
) -> UnitMapping<F1, F2, P>
where
    F1: Dimension,
    F2: Dimension,
    P: ProductOf<F1, F2>,
{
    find_or_default(format_args!("{} * {}", factor1, factor2), |m| {
        m.factor1 == factor1 && m.factor2 == factor2
    })
}

/// The mapping that `product / factor1` resolves through; the result is in its `factor2` unit.
pub fn quotient_mapping_for_factor1<F1, F2, P>(
    product: UnitRef<P>,
    factor1: UnitRef<F1>,
) -> UnitMapping<F1, F2, P>
where
    F1: Dimension,
    F2: Dimension,
    P: ProductOf<F1, F2>,
{
    find_or_default(format_args!("{} / {}", product, factor1), |m| {
        m.product == product && m.factor1 == factor1
    })
}

/// The mapping that `product / factor2` resolves through; the result is in its `factor1` unit.
pub fn quotient_mapping_for_factor2<F1, F2, P>(
    product: UnitRef<P>,
    factor2: UnitRef<F2>,
) -> UnitMapping<F1, F2, P>
where
    F1: Dimension,
    F2: Dimension,
    P: ProductOf<F1, F2>,
{
    find_or_default(format_args!("{} / {}", product, factor2), |m| {
        m.product == product && m.factor2 == factor2
    })
}

pub fn multiply<F1, F2, P>(lhs: &Measure<F1>, rhs: &Measure<F2>) -> Measure<P>
where
    F1: Dimension,
    F2: Dimension,
    P: ProductOf<F1, F2>,
{
    let mapping = product_mapping::<F1, F2, P>(lhs.unit(), rhs.unit());
    let v = if mapping.factor1 == lhs.unit() && mapping.factor2 == rhs.unit() {
        lhs.f64() * rhs.f64() * mapping.scale
    } else {
        mapping.product.from_base(lhs.base_f64() * rhs.base_f64())
    };
    Measure::new(v, mapping.product)
}

pub fn divide_by_factor1<F1, F2, P>(product: &Measure<P>, factor1: &Measure<F1>) -> Measure<F2>
where
    F1: Dimension,
    F2: Dimension,
    P: ProductOf<F1, F2>,
{
    let mapping = quotient_mapping_for_factor1::<F1, F2, P>(product.unit(), factor1.unit());
    let v = if mapping.product == product.unit() && mapping.factor1 == factor1.unit() {
        product.f64() / factor1.f64() / mapping.scale
    } else {
        mapping
            .factor2
            .from_base(product.base_f64() / factor1.base_f64())
    };
    Measure::new(v, mapping.factor2)
}

pub fn divide_by_factor2<F1, F2, P>(product: &Measure<P>, factor2: &Measure<F2>) -> Measure<F1>
where
    F1: Dimension,
    F2: Dimension,
    P: ProductOf<F1, F2>,
{
    let mapping = quotient_mapping_for_factor2::<F1, F2, P>(product.unit(), factor2.unit());
    let v = if mapping.product == product.unit() && mapping.factor2 == factor2.unit() {
        product.f64() / factor2.f64() / mapping.scale
    } else {
        mapping
            .factor1
            .from_base(product.base_f64() / factor2.base_f64())
    };
    Measure::new(v, mapping.factor1)
}

/// Sanity check the tables registered for `P = F1 * F2`.
///
/// Fails on units with a zero, negative or non-finite coefficient and on preferred mappings
/// that can never be selected because an earlier one names the same factor units. Mappings
/// that only collide for division still work, first-wins, and are just logged.
pub fn check_mappings<F1, F2, P>() -> Result<()>
where
    F1: Dimension,
    F2: Dimension,
    P: ProductOf<F1, F2>,
{
    let default = P::default_mapping();
    let preferred = P::preferred_mappings();
    for mapping in std::iter::once(&default).chain(preferred.iter()) {
        for (dimension, coefficient) in mapping.units() {
            if !coefficient.is_finite() || coefficient <= 0. {
                bail!(
                    "{} mapping {} has a {} unit with coefficient {}",
                    P::DIMENSION_NAME,
                    mapping,
                    dimension,
                    coefficient
                );
            }
        }
    }
    for (i, later) in preferred.iter().enumerate() {
        for earlier in &preferred[..i] {
            if earlier.factor1 == later.factor1 && earlier.factor2 == later.factor2 {
                bail!(
                    "{} mapping {} is shadowed by earlier mapping {}",
                    P::DIMENSION_NAME,
                    later,
                    earlier
                );
            }
            if earlier.product == later.product && earlier.factor1 == later.factor1 {
                warn!(
                    "{} mapping {} never serves {} / {}; {} comes first",
                    P::DIMENSION_NAME,
                    later,
                    later.product,
                    later.factor1,
                    earlier
                );
            }
            if earlier.product == later.product && earlier.factor2 == later.factor2 {
                warn!(
                    "{} mapping {} never serves {} / {}; {} comes first",
                    P::DIMENSION_NAME,
                    later,
                    later.product,
                    later.factor2,
                    earlier
                );
            }
        }
    }
    Ok(())
}
