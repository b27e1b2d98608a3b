//! Kernel Gallery Demo
//!
//! Evaluates every kernel in the catalog on the same small histogram dataset
//! and prints the resulting Gram matrices along with each kernel's category
//! and feature-space dimension.
//!
//! Run with `RUST_LOG=debug cargo run --example kernel_gallery` to see the
//! lazily resolved bandwidths.

use env_logger::Env;
use log::{error, info};
use ndarray::array;
use rskernels::{Kernel, KernelSpec};

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    println!("🔬 Kernel Gallery");
    println!("=================\n");

    // Three 4-bin histograms
    let data = array![
        [4.0, 2.0, 1.0, 0.0],
        [3.0, 3.0, 1.0, 0.5],
        [0.0, 1.0, 2.0, 4.0]
    ];
    info!("Dataset shape: {:?}", data.dim());

    for spec in KernelSpec::all() {
        let kernel = spec.build();

        println!(
            "{} (category: {:?}, dim: {})",
            kernel.name(),
            kernel.category(),
            kernel.dim()
        );

        match kernel.gram(data.view()) {
            Ok(gram) => {
                for row in gram.rows() {
                    let cells: Vec<String> = row.iter().map(|v| format!("{v:>10.4}")).collect();
                    println!("  [{}]", cells.join(" "));
                }
            }
            Err(e) => error!("{} failed: {}", kernel.name(), e),
        }
        println!();
    }

    // Positive-only kernels refuse negative data
    let signed = array![[1.0, -1.0, 0.0, 2.0]];
    for spec in [KernelSpec::Min, KernelSpec::GeneralizedHistogramIntersection { alpha: None }] {
        let kernel = spec.build();
        match kernel.gram(signed.view()) {
            Ok(gram) => println!("✅ {} on signed data: {}", kernel.name(), gram[[0, 0]]),
            Err(e) => println!("❌ {} on signed data: {}", kernel.name(), e),
        }
    }
}
