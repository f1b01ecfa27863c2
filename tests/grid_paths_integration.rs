use rolling_dp::{
    count_paths, problems::grid_paths::GridPaths, utils::binomial, DpError, RollingEngine,
    RollingEngineBuilder,
};

#[test]
fn grid_paths_literal_integration() {
    assert_eq!(count_paths(3, 7), Ok(28));
    assert_eq!(count_paths(3, 2), Ok(3));
    assert_eq!(count_paths(1, 1), Ok(1));
    assert_eq!(count_paths(10, 10), Ok(48620));
}

#[test]
fn invalid_dimensions_never_reach_the_engine() {
    assert!(matches!(
        GridPaths::new(0, 0),
        Err(DpError::InvalidArgument { name: "rows", .. })
    ));
    assert!(matches!(
        count_paths(4, 0),
        Err(DpError::InvalidArgument { name: "cols", .. })
    ));
}

#[test]
fn checkpoints_are_pascal_rows() {
    let problem = GridPaths::new(8, 5).unwrap();
    let engine = RollingEngine::with_block_size(problem, 1);
    let (paths, checkpoints) = engine.run_with_checkpoints().unwrap();
    assert_eq!(checkpoints.len(), 8);
    for checkpoint in &checkpoints {
        let row = checkpoint.layer as u64;
        for (col, &count) in checkpoint.frontier.counts.iter().enumerate() {
            assert_eq!(Some(count), binomial(row + col as u64, row));
        }
    }
    assert_eq!(Some(paths), binomial(11, 7));
}

#[test]
fn tall_and_wide_grids_agree() {
    let tall = RollingEngineBuilder::new(GridPaths::new(400, 3).unwrap())
        .with_checkpoint_count(7)
        .build()
        .run();
    let wide = RollingEngine::new(GridPaths::new(3, 400).unwrap()).run();
    assert_eq!(tall, wide);
    assert_eq!(tall, Ok(80_200));
}

#[test]
fn overflow_is_reported_not_wrapped() {
    let err = count_paths(100, 100).unwrap_err();
    assert!(matches!(err, DpError::Overflow { .. }));
    assert!(err.to_string().contains("overflowed u128"));
}
