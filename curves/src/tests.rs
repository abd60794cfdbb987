use super::*;
use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::SeedableRng;

fn curve(form: CurveForm, p: u64, p1: u64, p2: u64) -> Curve {
    let field = PrimeField::from_u64(p).unwrap();
    Curve::from_params(form, field.element(p1), field.element(p2)).unwrap()
}

fn point(curve: &Curve, x: u64, y: u64) -> Point {
    let field = curve.field();
    curve.point(field.element(x), field.element(y)).unwrap()
}

fn f101_scenarios() -> Vec<(Curve, Point, Point, Point, Point)> {
    // (curve, P, Q, 6P, P + Q)
    [
        (CurveForm::ShortWeierstrass, (1, 2), (77, 30), (17, 36), (18, 14), (6, 74)),
        (CurveForm::Montgomery, (49, 51), (39, 15), (9, 18), (60, 7), (54, 37)),
        (CurveForm::TwistedEdwards, (1, 94), (51, 21), (43, 6), (39, 13), (97, 23)),
        (CurveForm::Edwards, (36, 55), (29, 100), (46, 17), (93, 85), (10, 80)),
    ]
    .into_iter()
    .map(|(form, (p1, p2), p, q, six_p, sum)| {
        let c = curve(form, 101, p1, p2);
        let points = (
            point(&c, p.0, p.1),
            point(&c, q.0, q.1),
            point(&c, six_p.0, six_p.1),
            point(&c, sum.0, sum.1),
        );
        (c, points.0, points.1, points.2, points.3)
    })
    .collect()
}

#[test]
fn test_f101_scenarios() {
    for (c, p, q, six_p, sum) in f101_scenarios() {
        assert_eq!(p.mul_i64(6).unwrap(), six_p, "{c}");
        assert_eq!(p.add(&q).unwrap(), sum, "{c}");
        assert_eq!(q.add(&p).unwrap(), sum, "{c}");
    }
}

#[test]
fn test_identity_laws() {
    for (c, p, q, _, _) in f101_scenarios() {
        let o = c.infinity();
        assert!(o.is_identity());
        assert_eq!(p.add(&o).unwrap(), p, "{c}");
        assert_eq!(o.add(&q).unwrap(), q, "{c}");
        assert!(p.add(&p.negate()).unwrap().is_identity(), "{c}");
        assert!(p.sub(&p).unwrap().is_identity(), "{c}");
        assert_eq!(o.negate(), o, "{c}");
    }
}

#[test]
fn test_scalar_multiplication_laws() {
    for (c, p, _, six_p, _) in f101_scenarios() {
        assert!(p.mul_i64(0).unwrap().is_identity(), "{c}");
        assert_eq!(p.mul_i64(1).unwrap(), p, "{c}");
        assert_eq!(p.mul_i64(2).unwrap(), p.double().unwrap(), "{c}");
        assert_eq!(p.mul_i64(-6).unwrap(), six_p.negate(), "{c}");
        assert_eq!(-&p, p.mul_i64(-1).unwrap(), "{c}");

        let three_p = p.mul_i64(3).unwrap();
        assert_eq!(three_p.double().unwrap(), six_p, "{c}");
        assert_eq!(three_p.add(&three_p).unwrap(), six_p, "{c}");
    }
}

#[test]
fn test_order_annihilates_every_point() {
    for (c, _, _, _, _) in f101_scenarios() {
        let order = BigInt::from(c.order());
        for p in c.points() {
            assert!(p.scalar_mul(&order).unwrap().is_identity(), "{c}: {p}");
        }
    }
}

#[test]
fn test_random_associativity() {
    let mut rng = StdRng::seed_from_u64(42);
    for (c, _, _, _, _) in f101_scenarios() {
        for _ in 0..20 {
            let p = c.points().choose(&mut rng).unwrap();
            let q = c.points().choose(&mut rng).unwrap();
            let r = c.points().choose(&mut rng).unwrap();
            let Ok(left) = p.add(&q).and_then(|pq| pq.add(&r)) else {
                continue;
            };
            let Ok(right) = q.add(&r).and_then(|qr| p.add(&qr)) else {
                continue;
            };
            assert_eq!(left, right, "{c}: {p} {q} {r}");
        }
    }
}

#[test]
fn test_all_models_have_equal_order() {
    for (c, _, _, _, _) in f101_scenarios() {
        for form in CurveForm::ALL {
            let image = c.to_form(form).unwrap();
            assert_eq!(image.order(), c.order(), "{c} -> {form}");
        }
    }
}

fn f1009_scenario() -> Vec<(Curve, [Point; 3])> {
    // P, Q and R = P + Q on each model of the same curve
    [
        (CurveForm::ShortWeierstrass, (866, 208), [(353, 449), (924, 356), (542, 665)]),
        (CurveForm::Montgomery, (32, 733), [(98, 183), (915, 626), (402, 98)]),
        (CurveForm::TwistedEdwards, (519, 636), [(188, 480), (593, 435), (766, 677)]),
        (CurveForm::Edwards, (480, 141), [(188, 348), (593, 946), (766, 62)]),
    ]
    .into_iter()
    .map(|(form, (p1, p2), pts)| {
        let c = curve(form, 1009, p1, p2);
        let pts = pts.map(|(x, y)| point(&c, x, y));
        (c, pts)
    })
    .collect()
}

#[test]
fn test_f1009_cross_model() {
    let models = f1009_scenario();
    for (domain, [p, q, r]) in &models {
        assert_eq!(&p.add(q).unwrap(), r, "{domain}");
        for (codomain, images) in &models {
            let map = domain.map_to(codomain.form()).unwrap();
            assert_eq!(map.codomain(), codomain, "{}", map.edge());
            for (source, image) in [p, q, r].into_iter().zip(images) {
                assert_eq!(&map.map(source).unwrap(), image, "{}: {source}", map.edge());
            }
        }
    }
}

#[test]
fn test_maps_are_homomorphisms() {
    let models = f1009_scenario();
    for (domain, [p, q, _]) in &models {
        for form in CurveForm::ALL {
            let map = domain.map_to(form).unwrap();
            let sum = map.map(&p.add(q).unwrap()).unwrap();
            let mapped = map.map(p).unwrap().add(&map.map(q).unwrap()).unwrap();
            assert_eq!(sum, mapped, "{}", map.edge());

            let six_p = map.map(&p.mul_i64(6).unwrap()).unwrap();
            assert_eq!(six_p, map.map(p).unwrap().mul_i64(6).unwrap(), "{}", map.edge());
        }
    }
}

#[test]
fn test_round_trips() {
    let mut rng = StdRng::seed_from_u64(7);
    for (domain, _) in f1009_scenario() {
        for form in CurveForm::ALL {
            let map = domain.map_to(form).unwrap();
            let back = map.inverse();
            assert_eq!(back.codomain(), &domain);
            assert_eq!(map.codomain().to_form(domain.form()).unwrap(), domain);

            for p in domain.points().choose_multiple(&mut rng, 25) {
                match map.map(&p) {
                    Ok(image) => assert_eq!(back.map(&image).unwrap(), p, "{}: {p}", map.edge()),
                    Err(CurveError::ExceptionalPoint { .. }) => {}
                    Err(e) => panic!("{}: {p}: {e}", map.edge()),
                }
            }
        }
    }
}
