// Solves the 3x3 system
//    2x +  y -  z =   8
//   -3x -  y + 2z = -11
//   -2x +  y + 2z =  -3
// with Gaussian elimination, Gauss-Jordan and LU, then prints the L and U
// factors. All three should print x = [2, 3, -1].

use numana::linalg::{gauss_jordan_solve, gauss_solve, lu_decompose, lu_extract, lu_solve};

const AUGMENTED: [f64; 12] = [
    2.0, 1.0, -1.0, 8.0, //
    -3.0, -1.0, 2.0, -11.0, //
    -2.0, 1.0, 2.0, -3.0,
];

fn print_matrix(label: &str, n: usize, data: &[f64], stride: usize) {
    println!("{label}:");
    for row in data.chunks(stride).take(n) {
        let cells: Vec<String> = row[..n].iter().map(|v| format!("{v:>9.4}")).collect();
        println!("  [{}]", cells.join(" "));
    }
}

fn main() {
    let n = 3;

    let mut a = AUGMENTED;
    let mut x = [0.0_f64; 3];
    gauss_solve(n, &mut a, n + 1, &mut x).expect("gaussian elimination failed");
    println!("gauss:        x = {x:?}");

    let mut a = AUGMENTED;
    let mut x = [0.0_f64; 3];
    gauss_jordan_solve(n, &mut a, n + 1, &mut x).expect("gauss-jordan failed");
    println!("gauss-jordan: x = {x:?}");

    // LU works on the square part; the right-hand side is the last column.
    let mut lu = [0.0_f64; 9];
    let mut b = [0.0_f64; 3];
    for (i, row) in AUGMENTED.chunks(n + 1).enumerate() {
        lu[i * n..(i + 1) * n].copy_from_slice(&row[..n]);
        b[i] = row[n];
    }
    let mut piv = [0usize; 3];
    let even = lu_decompose(n, &mut lu, n, &mut piv).expect("lu decomposition failed");
    let mut x = [0.0_f64; 3];
    lu_solve(n, &lu, n, &piv, &b, &mut x).expect("lu solve failed");
    println!("lu:           x = {x:?}");
    println!("permutation {piv:?} ({} swaps)", if even { "even" } else { "odd" });

    let mut l = [0.0_f64; 9];
    let mut u = [0.0_f64; 9];
    lu_extract(n, &lu, n, &mut l, n, &mut u, n).expect("lu extract failed");
    print_matrix("L", n, &l, n);
    print_matrix("U", n, &u, n);
}
