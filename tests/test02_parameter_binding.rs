use sql_batch_binder::prelude::*;

#[test]
fn extracts_positional_count_and_names() -> Result<(), SqlBatchError> {
    let markers = extract_markers("SELECT ?, :name, ?")?;
    assert_eq!(markers.positional, 2);
    assert_eq!(markers.names.len(), 1);
    assert!(markers.names.contains("name"));
    Ok(())
}

#[test]
fn explicit_positional_index_is_unsupported() {
    assert!(matches!(
        extract_markers("SELECT ?5"),
        Err(SqlBatchError::UnsupportedIndexedPositional { .. })
    ));
}

#[test]
fn marker_with_unknown_sigil_is_rejected() {
    let err = extract_markers("SELECT #bad").unwrap_err();
    assert!(matches!(
        err,
        SqlBatchError::InvalidNamedParameterPrefix { ref marker, .. } if marker == "#bad"
    ));
    assert!(err.to_string().contains("#bad"));
}

#[test]
fn positional_values_flow_across_statements() -> Result<(), SqlBatchError> {
    let params = ParameterSet::Positional(vec![SqlValue::Int(10), SqlValue::Int(20)]);
    let statements = ["INSERT INTO t VALUES (?)", "INSERT INTO t VALUES (?)"];

    let (first, offset) = bind_statement(statements[0], &params, 0)?;
    assert_eq!(first, StatementParams::Positional(&[SqlValue::Int(10)]));
    assert_eq!(offset, 1);

    let (second, offset) = bind_statement(statements[1], &params, offset)?;
    assert_eq!(second, StatementParams::Positional(&[SqlValue::Int(20)]));
    assert_eq!(offset, 2);
    Ok(())
}

#[test]
fn named_statement_receives_only_its_names() -> Result<(), SqlBatchError> {
    let params = ParameterSet::from_args(&[
        NamedArg::named("a", 1, 1),
        NamedArg::named("b", 2, 2),
        NamedArg::named("c", 3, 3),
    ])?;
    let (bound, _) = bind_statement("SELECT :a + @b", &params, 0)?;
    let expected: ParameterSet = [("a", SqlValue::Int(1)), ("b", SqlValue::Int(2))]
        .into_iter()
        .collect();
    assert_eq!(bound.to_parameter_set(), expected);
    Ok(())
}

#[test]
fn mixing_positional_and_named_fails() {
    let err = ParameterSet::from_args(&[NamedArg::positional(1, 1), NamedArg::named("x", 2, 2)])
        .unwrap_err();
    assert!(matches!(err, SqlBatchError::MixedParameterKinds));
}

#[test]
fn shortage_of_positional_values_fails() {
    let params = ParameterSet::Positional(vec![SqlValue::Int(1)]);
    assert!(matches!(
        bind_statement("SELECT ?, ?", &params, 0),
        Err(SqlBatchError::MissingPositionalParameters {
            required: 2,
            available: 1,
            ..
        })
    ));
}

#[test]
fn whole_batch_binds_in_source_order() -> Result<(), SqlBatchError> {
    let params = ParameterSet::from_args(&[
        NamedArg::positional(1, "a"),
        NamedArg::positional(2, "b"),
        NamedArg::positional(3, "c"),
    ])?;
    let batch = plan_batch(
        "SELECT ? /* ? */, '?'; SELECT 'x;y', ?, ?",
        &params,
        &BatchOptions::default(),
    )?;
    assert_eq!(batch.len(), 2);
    assert_eq!(batch[0].sql, "SELECT ? /* ? */, '?'");
    assert_eq!(batch[0].params, StatementParams::Positional(&[SqlValue::from("a")]));
    assert_eq!(
        batch[1].params,
        StatementParams::Positional(&[SqlValue::from("b"), SqlValue::from("c")])
    );
    Ok(())
}

#[test]
fn empty_parameters_satisfy_marker_free_statements() -> Result<(), SqlBatchError> {
    let params = ParameterSet::from_args(&[])?;
    let batch = plan_batch("SELECT 1; SELECT 2", &params, &BatchOptions::default())?;
    assert!(batch.iter().all(|stmt| stmt.params.is_empty()));
    Ok(())
}

#[test]
fn missing_named_parameter_timing_depends_on_mode() -> Result<(), SqlBatchError> {
    let params = ParameterSet::from_args(&[NamedArg::named("id", 1, 7)])?;
    let sql = "SELECT * FROM t WHERE id = :id AND owner = :owner";

    let lazy = plan_batch(sql, &params, &BatchOptions::default())?;
    assert_eq!(lazy[0].params.len(), 1);

    let strict = BatchOptions::builder().strict_named(true).finish();
    let err = plan_batch(sql, &params, &strict).unwrap_err();
    assert!(matches!(
        err,
        SqlBatchError::MissingNamedParameter { ref name, .. } if name == "owner"
    ));
    Ok(())
}
