// File: crates/graph-core/tests/project.rs
// Purpose: Validate row projection, numeric validation, and row caps.

use graph_core::{
    extract_selected, project_rows, resolve_columns, AxisSelection, ExtractError, RowLimits,
};

fn headers() -> Vec<String> {
    ["Date", "Price", "Volume"]
        .iter()
        .map(|name| name.to_string())
        .collect()
}

fn rows(cells: &[[&str; 3]]) -> Vec<Vec<String>> {
    cells
        .iter()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect()
}

#[test]
fn projects_selected_columns_in_order() {
    let rows = rows(&[
        ["2024-01-01", "10.5", "100"],
        ["2024-01-02", "11.0", "200"],
    ]);
    let selection = AxisSelection::xy("Date", "Volume");
    let projection = extract_selected(&headers(), &rows, &selection, &RowLimits::none()).unwrap();

    assert_eq!(projection.header, vec!["Date", "Volume"]);
    assert_eq!(
        projection.rows,
        vec![
            vec!["2024-01-01".to_string(), "100".to_string()],
            vec!["2024-01-02".to_string(), "200".to_string()],
        ]
    );
}

#[test]
fn invalid_y_cell_aborts_with_row_and_value() {
    let rows = rows(&[
        ["2024-01-01", "10.5", "100"],
        ["2024-01-02", "abc", "200"],
    ]);
    let selection = AxisSelection::xy("Date", "Price");
    let err = extract_selected(&headers(), &rows, &selection, &RowLimits::none()).unwrap_err();

    // The whole extraction fails; no prior valid rows are returned.
    assert_eq!(
        err,
        ExtractError::InvalidNumericValue {
            row: 2,
            value: "abc".to_string(),
        }
    );
}

#[test]
fn x_cells_are_never_validated() {
    let rows = rows(&[["not a number", "1.0", "2"]]);
    let selection = AxisSelection::xy("Date", "Price");

    assert!(extract_selected(&headers(), &rows, &selection, &RowLimits::none()).is_ok());
}

#[test]
fn z_cells_are_validated_for_3d_selection() {
    let rows = rows(&[["2024-01-01", "1.0", "n/a"]]);
    let selection = AxisSelection::xyz("Date", "Price", "Volume");
    let err = extract_selected(&headers(), &rows, &selection, &RowLimits::none()).unwrap_err();

    assert_eq!(
        err,
        ExtractError::InvalidNumericValue {
            row: 1,
            value: "n/a".to_string(),
        }
    );
}

#[test]
fn row_cap_bounds_output_positionally() {
    let rows: Vec<Vec<String>> = (0..10)
        .map(|i| vec![format!("d{i}"), format!("{i}"), "0".to_string()])
        .collect();
    let selection = AxisSelection::xy("Date", "Price");
    let projection =
        extract_selected(&headers(), &rows, &selection, &RowLimits::x(3)).unwrap();

    assert_eq!(projection.rows.len(), 3);
    assert_eq!(projection.rows[0][0], "d0");
    assert_eq!(projection.rows[2][0], "d2");
}

#[test]
fn rows_past_the_cap_are_never_scanned() {
    // The third row would fail validation, but the cap stops before it.
    let rows = rows(&[
        ["a", "1", "0"],
        ["b", "2", "0"],
        ["c", "boom", "0"],
    ]);
    let selection = AxisSelection::xy("Date", "Price");

    assert!(extract_selected(&headers(), &rows, &selection, &RowLimits::x(2)).is_ok());
}

#[test]
fn zero_or_missing_limit_means_no_cap() {
    let rows: Vec<Vec<String>> = (0..10)
        .map(|i| vec![format!("d{i}"), format!("{i}"), "0".to_string()])
        .collect();
    let selection = AxisSelection::xy("Date", "Price");

    let uncapped =
        extract_selected(&headers(), &rows, &selection, &RowLimits::none()).unwrap();
    assert_eq!(uncapped.rows.len(), 10);

    let zero = extract_selected(&headers(), &rows, &selection, &RowLimits::x(0)).unwrap();
    assert_eq!(zero.rows.len(), 10);

    let negative = extract_selected(&headers(), &rows, &selection, &RowLimits::x(-5)).unwrap();
    assert_eq!(negative.rows.len(), 10);
}

#[test]
fn limit_above_input_size_returns_all_rows() {
    let rows: Vec<Vec<String>> = (0..10)
        .map(|i| vec![format!("d{i}"), format!("{i}"), "0".to_string()])
        .collect();
    let selection = AxisSelection::xy("Date", "Price");
    let projection =
        extract_selected(&headers(), &rows, &selection, &RowLimits::x(1000)).unwrap();

    assert_eq!(projection.rows.len(), 10);
}

#[test]
fn only_the_x_limit_key_is_consulted() {
    let rows: Vec<Vec<String>> = (0..10)
        .map(|i| vec![format!("d{i}"), format!("{i}"), "0".to_string()])
        .collect();
    let selection = AxisSelection::xy("Date", "Price");

    let mut limits = RowLimits::none();
    limits.insert("Y", 3);
    limits.insert("Z", 1);
    let projection = extract_selected(&headers(), &rows, &selection, &limits).unwrap();

    assert_eq!(projection.rows.len(), 10);
}

#[test]
fn projection_is_idempotent() {
    let rows = rows(&[
        ["2024-01-01", "10.5", "100"],
        ["2024-01-02", "11.0", "200"],
    ]);
    let selection = AxisSelection::xy("Date", "Price");
    let limits = RowLimits::x(5);

    let indices = resolve_columns(&headers(), &selection).unwrap();
    let first = project_rows(indices, &rows, &limits).unwrap();
    let second = project_rows(indices, &rows, &limits).unwrap();

    assert_eq!(first, second);
}

#[test]
fn synthetic_header_carries_z_name_for_3d() {
    let rows = rows(&[["1", "2", "3"]]);
    let selection = AxisSelection::xyz("Date", "Price", "Volume");
    let projection = extract_selected(&headers(), &rows, &selection, &RowLimits::none()).unwrap();

    assert_eq!(projection.header, vec!["Date", "Price", "Volume"]);
    assert_eq!(projection.rows, vec![vec!["1", "2", "3"]]);

    let matrix = projection.into_matrix();
    assert_eq!(matrix.len(), 2);
    assert_eq!(matrix[0], vec!["Date", "Price", "Volume"]);
}
