//! Finite Field Basics
//!
//! This example walks through the fields codes are built over:
//! - Prime field arithmetic in `Fp<P>`
//! - Binary extension fields `F2m<K>`
//! - The canonical element order and successor
//! - Univariate Lagrange interpolation
//!
//! Run with: cargo run --example field_basics

use muller::{F2m, Field, FiniteField, Fp, LagrangeBasis, Poly, Ring};

type F17 = Fp<17>;
type F8 = F2m<3>;

fn main() {
    println!("=== Finite Field Basics ===\n");

    prime_field();
    binary_field();
    canonical_order();
    interpolation();
}

fn prime_field() {
    println!("--- Arithmetic in F_17 ---\n");

    let a = F17::new(5);
    let b = F17::new(9);

    println!("a = {}, b = {}", a, b);
    println!("a + b = {}", a + b);
    println!("a - b = {}", a - b);
    println!("a * b = {}", a * b);
    println!("a^3 = {}", a.pow(3));

    let a_inv = a.inverse().unwrap();
    println!("a^(-1) = {} (a * a^(-1) = {})", a_inv, a * a_inv);
    println!("a / b = {}", a / b);
    println!("a^16 = {} (Fermat's little theorem)", a.pow(16));

    match Fp::<15>::validate_prime() {
        Ok(()) => println!("F_15 is a field?!"),
        Err(reason) => println!("Fp<15> rejected: {}", reason),
    }
    println!();
}

fn binary_field() {
    println!("--- Arithmetic in GF(8) = F_2[α]/(α^3 + α + 1) ---\n");

    let alpha = F8::new(0b010);
    let mut power = F8::ONE;
    for i in 0..7 {
        println!("α^{} = {:03b}", i, power.bits());
        power = power * alpha;
    }
    println!("α^7 = {:03b} (the multiplicative group has order 7)", power.bits());

    let x = F8::new(0b110);
    println!("{:?} + {:?} = {:?}", x, alpha, x + alpha);
    println!("{:?}^(-1) = {:?}", x, x.inverse().unwrap());
    println!();
}

fn canonical_order() {
    println!("--- Canonical element order ---\n");

    let elems: Vec<String> = F2m::<2>::elements().map(|e| e.to_string()).collect();
    println!("GF(4) elements: [{}]", elems.join(", "));

    let mut e = Fp::<5>::first();
    print!("GF(5) by successor: {}", e);
    while let Some(next) = e.next() {
        print!(" -> {}", next);
        e = next;
    }
    println!(" (last = {})", Fp::<5>::last());
    println!();
}

fn interpolation() {
    println!("--- Lagrange interpolation over F_17 ---\n");

    let points: Vec<(F17, F17)> = [(1, 3), (2, 5), (4, 0)]
        .iter()
        .map(|&(x, y)| (F17::new(x), F17::new(y)))
        .collect();
    let p = Poly::interpolate(&points).unwrap();
    println!("through {:?}: p(x) = {}", points, p);
    for (x, y) in &points {
        println!("  p({}) = {} (expected {})", x, p.eval(*x), y);
    }

    // One basis, many value vectors
    let nodes: Vec<F17> = F17::elements().take(3).collect();
    let basis = LagrangeBasis::new(&nodes).unwrap();
    for values in [[1, 1, 1], [0, 1, 2], [0, 1, 4]] {
        let values: Vec<F17> = values.iter().map(|&v| F17::new(v)).collect();
        println!("values {:?} on nodes 0, 1, 2 -> {}", values, basis.interpolate(&values));
    }
}
