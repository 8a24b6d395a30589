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
use log::info;
use product_unit::{
    check_mappings, Dimension, EnergyDim, LengthDim, PowerDim, ProductOf, TimeDim, VelocityDim,
};
use structopt::StructOpt;

/// Print the unit tables that products and quotients of measures resolve through
#[derive(Debug, StructOpt)]
struct Opt {
    /// Fail if any table is malformed before printing
    #[structopt(short, long)]
    check: bool,
}

fn dump<F1, F2, P>(check: bool) -> Result<()>
where
    F1: Dimension,
    F2: Dimension,
    P: ProductOf<F1, F2>,
{
    if check {
        check_mappings::<F1, F2, P>()?;
        info!("{} tables ok", P::DIMENSION_NAME);
    }
    println!(
        "{} = {} * {}",
        P::DIMENSION_NAME,
        F1::DIMENSION_NAME,
        F2::DIMENSION_NAME
    );
    println!("  default:   {}", P::default_mapping());
    for (i, mapping) in P::preferred_mappings().iter().enumerate() {
        println!("  preferred: {} (#{})", mapping, i);
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let opt = Opt::from_args();
    dump::<VelocityDim, TimeDim, LengthDim>(opt.check)?;
    dump::<PowerDim, TimeDim, EnergyDim>(opt.check)?;
    Ok(())
}
