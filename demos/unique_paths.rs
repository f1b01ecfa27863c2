//! Example: counting monotone paths across a grid.
//!
//! Run with:
//! `cargo run --example unique_paths`

use rolling_dp::{count_paths, problems::grid_paths::GridPaths, RollingEngineBuilder};

fn main() {
    for (rows, cols) in [(3, 7), (3, 2), (1, 1), (10, 10)] {
        match count_paths(rows, cols) {
            Ok(paths) => println!("Unique paths in {rows}x{cols} grid: {paths}"),
            Err(err) => println!("Unique paths in {rows}x{cols} grid: error: {err}"),
        }
    }

    match count_paths(0, 4) {
        Ok(paths) => println!("Unique paths in 0x4 grid: {paths}"),
        Err(err) => println!("Unique paths in 0x4 grid: error: {err}"),
    }

    // Each checkpoint row holds the path counts for one grid row.
    let Ok(problem) = GridPaths::new(6, 6) else {
        return;
    };
    let engine = RollingEngineBuilder::new(problem).with_block_size(1).build();
    if let Ok((_, checkpoints)) = engine.run_with_checkpoints() {
        println!("Path counts per cell of a 6x6 grid:");
        for checkpoint in checkpoints {
            let cells: Vec<String> = checkpoint
                .frontier
                .counts
                .iter()
                .map(|c| format!("{c:>4}"))
                .collect();
            println!("  {}", cells.join(""));
        }
    }
}
