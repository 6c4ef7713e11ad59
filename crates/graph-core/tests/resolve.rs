// File: crates/graph-core/tests/resolve.rs
// Purpose: Validate axis-to-column resolution semantics.

use graph_core::{resolve_columns, AxisRole, AxisSelection, ExtractError};

fn headers(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

#[test]
fn resolves_requested_axes_to_indices() {
    let headers = headers(&["Date", "Price", "Volume"]);
    let indices = resolve_columns(&headers, &AxisSelection::xy("Volume", "Price")).unwrap();

    assert_eq!(indices.x, 2);
    assert_eq!(indices.y, 1);
    assert_eq!(indices.z, None);
}

#[test]
fn resolves_three_axes_for_3d_selection() {
    let headers = headers(&["a", "b", "c", "d"]);
    let indices = resolve_columns(&headers, &AxisSelection::xyz("d", "a", "c")).unwrap();

    assert_eq!((indices.x, indices.y, indices.z), (3, 0, Some(2)));
}

#[test]
fn duplicate_header_names_resolve_to_first_occurrence() {
    let headers = headers(&["Price", "Date", "Price"]);
    let indices = resolve_columns(&headers, &AxisSelection::xy("Date", "Price")).unwrap();

    assert_eq!(indices.x, 1);
    assert_eq!(indices.y, 0);
}

#[test]
fn coinciding_axis_names_share_a_column() {
    // X and Y bound to the same header is allowed; both land on its first
    // occurrence.
    let headers = headers(&["Date", "Price"]);
    let indices = resolve_columns(&headers, &AxisSelection::xy("Price", "Price")).unwrap();

    assert_eq!(indices.x, 1);
    assert_eq!(indices.y, 1);
}

#[test]
fn missing_axis_fails_with_axis_not_found() {
    let headers = headers(&["Date", "Price"]);
    let err = resolve_columns(&headers, &AxisSelection::xy("Date", "Volume")).unwrap_err();

    assert_eq!(
        err,
        ExtractError::AxisNotFound {
            axis: AxisRole::Y,
            name: "Volume".to_string(),
        }
    );
}

#[test]
fn missing_z_axis_fails_only_when_requested() {
    let headers = headers(&["Date", "Price"]);

    // 2D selection never checks Z.
    assert!(resolve_columns(&headers, &AxisSelection::xy("Date", "Price")).is_ok());

    let err = resolve_columns(&headers, &AxisSelection::xyz("Date", "Price", "Depth")).unwrap_err();
    assert_eq!(
        err,
        ExtractError::AxisNotFound {
            axis: AxisRole::Z,
            name: "Depth".to_string(),
        }
    );
}

#[test]
fn no_partial_resolution_on_failure() {
    // X would resolve, but the call fails as a whole.
    let headers = headers(&["Date"]);
    assert!(resolve_columns(&headers, &AxisSelection::xy("Date", "Price")).is_err());
}
