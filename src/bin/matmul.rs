//! Multiplies the two fixed demo matrices and prints the result.

use intbench::{matmul, Mat, MAT_DIM};

/// Row i filled with the value i + 1.
fn demo_matrix() -> Mat<i32> {
    let mut m = [[0i32; MAT_DIM]; MAT_DIM];
    for (i, row) in m.iter_mut().enumerate() {
        row.fill(i as i32 + 1);
    }
    m
}

fn main() {
    let a = demo_matrix();
    let b = demo_matrix();
    let mut c = [[0i32; MAT_DIM]; MAT_DIM];

    matmul(&a, &b, &mut c);

    println!("Result matrix is ");
    for row in &c {
        for value in row {
            print!("{value} ");
        }
        println!();
    }
}
