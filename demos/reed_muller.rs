//! Reed-Muller Codes
//!
//! Builds a few codes, prints their parameters and generator matrix, then
//! encodes and decodes with both encoders.
//!
//! Run with: RUST_LOG=debug cargo run --example reed_muller

use muller::codes::Grid;
use muller::{BinaryReedMullerCode, Encoder, F2m, Fp, ReedMullerCode, Ring};

type F3 = Fp<3>;

fn main() -> muller::Result<()> {
    env_logger::init();

    println!("=== Reed-Muller Codes ===\n");

    parameters()?;
    generator_matrix()?;
    polynomial_round_trip()?;
    error_detection()?;
    Ok(())
}

fn parameters() -> muller::Result<()> {
    println!("--- Parameters ---\n");

    let q_ary = ReedMullerCode::<Fp<59>>::new(2, 4)?;
    let binary = BinaryReedMullerCode::new(2, 4)?;
    let ext = ReedMullerCode::<F2m<3>>::new(4, 2)?;

    for (name, p) in [
        (q_ary.to_string(), q_ary.parameters()),
        (binary.to_string(), binary.parameters()),
        (ext.to_string(), ext.parameters()),
    ] {
        println!(
            "{}\n  [n, k, d] = [{}, {}, {}]",
            name, p.length, p.dimension, p.minimum_distance
        );
    }

    match ReedMullerCode::<F3>::new(4, 2) {
        Ok(code) => println!("unexpectedly built {}", code),
        Err(err) => println!("GF(3), order 4: {}", err),
    }
    println!();
    Ok(())
}

fn generator_matrix() -> muller::Result<()> {
    println!("--- Generator matrix of RM_3(2, 2) ---\n");

    let code = ReedMullerCode::<F3>::new(2, 2)?;
    let encoder = code.vector_encoder();
    let ring = code.polynomial_encoder().polynomial_ring().clone();

    let points: Vec<String> = Grid::<F3>::new(2)
        .map(|p| format!("({},{})", p[0], p[1]))
        .collect();
    println!("points: {}", points.join(" "));

    for (exponents, row) in code.monomials().zip(encoder.generator_matrix().rows()) {
        let monomial = muller::MPoly::term(exponents, F3::ONE);
        let row: Vec<String> = row.iter().map(|x| x.to_string()).collect();
        println!("{:>6}: [{}]", ring.format(&monomial).to_string(), row.join(" "));
    }
    println!();
    Ok(())
}

fn polynomial_round_trip() -> muller::Result<()> {
    println!("--- Polynomial encoding ---\n");

    let code = ReedMullerCode::<F3>::new(2, 2)?;
    let encoder = code.polynomial_encoder();
    let ring = encoder.polynomial_ring();
    let gens = ring.gens();
    let (x0, x1) = (&gens[0], &gens[1]);

    let p = ring.one() + x0.clone() + x1.clone() + x1.clone() * x1 + x0.clone() * x1;
    let word = encoder.encode(&p)?;
    println!("p = {}", p);
    println!("encode(p) = {:?}", word.iter().map(|x| x.value()).collect::<Vec<_>>());
    println!("decoded   = {}", encoder.unencode(&word)?);
    println!();
    Ok(())
}

fn error_detection() -> muller::Result<()> {
    println!("--- Error detection ---\n");

    let code = ReedMullerCode::<F3>::new(2, 2)?;
    let encoder = code.polynomial_encoder();

    let received: Vec<F3> = [1, 2, 0, 0, 2, 1, 0, 1, 1].iter().map(|&v| F3::new(v)).collect();
    println!("received in code? {}", code.contains(&received));

    let guess = encoder.unencode_nocheck(&received)?;
    println!("unchecked decode  = {}", guess);
    println!(
        "re-encoded        = {:?}",
        encoder.encode(&guess)?.iter().map(|x| x.value()).collect::<Vec<_>>()
    );
    match encoder.unencode(&received) {
        Ok(p) => println!("checked decode    = {}", p),
        Err(err) => println!("checked decode    failed: {}", err),
    }
    Ok(())
}
