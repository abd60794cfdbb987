//! Writes one curve in every model and maps a point and a sum along.

use std::error::Error;

use curves::{Curve, CurveForm, PrimeField};

fn main() -> Result<(), Box<dyn Error>> {
    let field = PrimeField::from_u64(1009)?;
    let curve = Curve::from_params(
        CurveForm::ShortWeierstrass,
        field.element(866u32),
        field.element(208u32),
    )?;
    let p = curve.point(field.element(353u32), field.element(449u32))?;
    let q = curve.point(field.element(924u32), field.element(356u32))?;
    let r = p.add(&q)?;

    println!("{curve}: {} points", curve.order());
    println!("  P = {p}, Q = {q}, P + Q = {r}");

    for form in CurveForm::ALL {
        if form == curve.form() {
            continue;
        }
        let map = curve.map_to(form)?;
        let (p2, q2) = (map.map(&p)?, map.map(&q)?);
        println!("{}: {}", map.edge(), map.codomain());
        println!("  P = {p2}, Q = {q2}, P + Q = {}", p2.add(&q2)?);
        assert_eq!(map.map(&r)?, p2.add(&q2)?);
    }
    Ok(())
}
