use proptest::prelude::*;

use muller::codes::{interpolate, Monomials};
use muller::{
    BinaryReedMullerCode, Encoder, Error, F2m, FiniteField, Fp, MPoly, ReedMullerCode, Ring, F2,
};

type F3 = Fp<3>;
type F5 = Fp<5>;
type F4 = F2m<2>;

fn f3(values: &[u64]) -> Vec<F3> {
    values.iter().map(|&v| F3::new(v)).collect()
}

/// Polynomial with the given coefficients on the code's monomial basis.
fn from_basis<F: FiniteField>(code: &ReedMullerCode<F>, coeffs: &[F]) -> MPoly<F> {
    MPoly::from_terms(
        code.number_of_variables(),
        code.monomials().zip(coeffs.iter().copied()),
    )
}

fn arb_coeffs<F: FiniteField + 'static>(len: usize) -> impl Strategy<Value = Vec<F>> {
    prop::collection::vec((0..F::ORDER).prop_map(F::from_index), len)
}

#[test]
fn gf3_scenarios() {
    let code = ReedMullerCode::<F3>::new(2, 2).unwrap();
    assert_eq!((code.length(), code.dimension()), (9, 6));

    let encoder = code.polynomial_encoder();
    let ring = encoder.polynomial_ring();
    let (x0, x1) = (ring.gen(0).unwrap(), ring.gen(1).unwrap());
    let p = ring.one() + x0.clone() + x1.clone() + x1.clone() * &x1 + x0 * &x1;

    let word = encoder.encode(&p).unwrap();
    assert_eq!(word, f3(&[1, 2, 0, 0, 2, 1, 1, 1, 1]));
    assert!(code.contains(&word));
    assert_eq!(encoder.unencode_nocheck(&word).unwrap(), p);
    assert_eq!(encoder.unencode(&word).unwrap(), p);
}

#[test]
fn binary_scenario() {
    let code = BinaryReedMullerCode::new(2, 4).unwrap();
    assert_eq!(code.minimum_distance(), 4);
    assert_eq!(code.dimension(), 1 + 4 + 6);
    assert_eq!(code.length(), 16);
}

#[test]
fn negative_scenarios() {
    assert!(matches!(
        ReedMullerCode::<F3>::new(4, 2),
        Err(Error::OrderTooLarge { order: 4, .. })
    ));
    assert!(matches!(
        BinaryReedMullerCode::new(3, 2),
        Err(Error::OrderTooLarge { order: 3, .. })
    ));
}

#[test]
fn encoders_agree() {
    let code = ReedMullerCode::<F5>::new(3, 2).unwrap();
    let coeffs: Vec<F5> = (0..code.dimension() as u64).map(F5::new).collect();
    let by_vector = code.vector_encoder().encode(&coeffs).unwrap();
    let by_poly = code
        .polynomial_encoder()
        .encode(&from_basis(&code, &coeffs))
        .unwrap();
    assert_eq!(by_vector, by_poly);
}

#[test]
fn generator_matrix_has_full_rank() {
    let cases: [(usize, usize); 4] = [(0, 2), (1, 3), (2, 2), (4, 2)];
    for (r, m) in cases {
        let encoder = ReedMullerCode::<F5>::new(r, m).unwrap().vector_encoder();
        let g = encoder.generator_matrix();
        assert_eq!(g.rank(), encoder.code().dimension(), "r={} m={}", r, m);
        assert_eq!(g.ncols(), encoder.code().length());
    }
    let binary = BinaryReedMullerCode::new(3, 5).unwrap().vector_encoder();
    assert_eq!(binary.generator_matrix().rank(), 26);
}

#[test]
fn single_error_is_detected() {
    let code = BinaryReedMullerCode::new(1, 3).unwrap();
    let encoder = code.vector_encoder();
    let mut word = encoder
        .encode(&vec![F2::ONE, F2::ZERO, F2::ONE, F2::ONE])
        .unwrap();
    assert!(code.contains(&word));

    word[5] = word[5] + F2::ONE;
    assert!(!code.contains(&word));
    assert_eq!(encoder.unencode(&word), Err(Error::NotACodeword));
}

#[test]
fn order_zero_is_constant_word() {
    let code = ReedMullerCode::<F4>::new(0, 3).unwrap();
    let a = F4::new(0b11);
    let word = code.vector_encoder().encode(&vec![a]).unwrap();
    assert_eq!(word, vec![a; 64]);
}

#[test]
fn basis_polynomials_are_the_generator_rows() {
    let code = ReedMullerCode::<F3>::new(2, 2).unwrap();
    let encoder = code.polynomial_encoder();
    let g = code.vector_encoder().generator_matrix().clone();
    for (exponents, row) in Monomials::new(2, 2, 3).zip(g.rows()) {
        let word = encoder.encode(&MPoly::term(exponents, F3::ONE)).unwrap();
        assert_eq!(word, row);
    }
}

#[cfg(feature = "rand")]
#[test]
fn random_messages_round_trip() {
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    let mut rng = SmallRng::seed_from_u64(7);
    let code = ReedMullerCode::<F5>::new(3, 3).unwrap();
    let poly_encoder = code.polynomial_encoder();
    let vector_encoder = code.vector_encoder();
    for _ in 0..10 {
        let p = poly_encoder.random_message(&mut rng);
        assert!(p.total_degree().map_or(true, |d| d <= 3));
        let word = poly_encoder.encode(&p).unwrap();
        assert_eq!(poly_encoder.unencode(&word).unwrap(), p);

        let v = vector_encoder.random_message(&mut rng);
        assert_eq!(v.len(), code.dimension());
        let word = vector_encoder.encode(&v).unwrap();
        assert_eq!(vector_encoder.unencode(&word).unwrap(), v);
    }
}

proptest! {
    #[test]
    fn gf3_polynomial_round_trip(coeffs in arb_coeffs::<F3>(10)) {
        let code = ReedMullerCode::<F3>::new(2, 3).unwrap();
        let p = from_basis(&code, &coeffs);
        let encoder = code.polynomial_encoder();
        let word = encoder.encode(&p).unwrap();
        prop_assert_eq!(encoder.unencode_nocheck(&word).unwrap(), p);
    }

    #[test]
    fn gf4_polynomial_round_trip(coeffs in arb_coeffs::<F4>(10)) {
        let code = ReedMullerCode::<F4>::new(3, 2).unwrap();
        let p = from_basis(&code, &coeffs);
        let encoder = code.polynomial_encoder();
        let word = encoder.encode(&p).unwrap();
        prop_assert!(code.contains(&word));
        prop_assert_eq!(encoder.unencode(&word).unwrap(), p);
    }

    #[test]
    fn binary_vector_round_trip(coeffs in arb_coeffs::<F2>(11)) {
        let encoder = BinaryReedMullerCode::new(2, 4).unwrap().vector_encoder();
        let word = encoder.encode(&coeffs).unwrap();
        prop_assert_eq!(encoder.unencode_nocheck(&word).unwrap(), coeffs);
    }

    #[test]
    fn decoding_is_deterministic_and_bounded(word in arb_coeffs::<F5>(25)) {
        let p = interpolate(&word, 2, 2).unwrap();
        prop_assert!(p.total_degree().map_or(true, |d| d <= 2));
        prop_assert_eq!(interpolate(&word, 2, 2).unwrap(), p);
    }

    #[test]
    fn encoding_is_linear(a in arb_coeffs::<F5>(6), b in arb_coeffs::<F5>(6)) {
        let encoder = ReedMullerCode::<F5>::new(2, 2).unwrap().vector_encoder();
        let sum: Vec<F5> = a.iter().zip(&b).map(|(&x, &y)| x + y).collect();
        let wa = encoder.encode(&a).unwrap();
        let wb = encoder.encode(&b).unwrap();
        let expected: Vec<F5> = wa.iter().zip(&wb).map(|(&x, &y)| x + y).collect();
        prop_assert_eq!(encoder.encode(&sum).unwrap(), expected);
    }
}
