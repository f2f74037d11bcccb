//! Invert a matrix, reuse the cached inverse, then switch to a vector solve.
//!
//! Run with `RUST_LOG=debug` to see misses as well as cache hits.

use tensor4all_cachedsolve::{from_vec2d, solve, LinearSystemCache, LuOptions, Operand};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let opts = LuOptions::default();
    let mut cache = LinearSystemCache::inverse(from_vec2d(vec![vec![1.0, 2.0], vec![3.0, 4.0]]));

    let inv = solve(&mut cache, &opts)?;
    println!("inverse:        {:?}", inv);
    let again = solve(&mut cache, &opts)?;
    println!("inverse again:  {:?}", again);

    cache.set_coefficients(from_vec2d(vec![vec![2.0, 0.0], vec![0.0, 2.0]]));
    println!("after update:   cached = {}", cache.is_cached());
    println!("new inverse:    {:?}", solve(&mut cache, &opts)?);

    cache.set_coefficients(from_vec2d(vec![vec![1.0, 2.0], vec![3.0, 4.0]]));
    cache.set_rhs(Some(Operand::Vector(vec![1.0, 1.0])));
    println!("x for b=[1,1]:  {:?}", solve(&mut cache, &opts)?);

    Ok(())
}
