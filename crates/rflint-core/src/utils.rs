/// Canonical key used to decide whether two keyword or test names are the
/// same: lowercase, without spaces or underscores.
///
/// `Smoke Test`, `Smoke_Test` and `SmokeTest` all map to `smoketest`.
pub fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| *c != ' ' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Case-insensitive equality for the first cell of a settings row.
pub fn eq_ignore_case(cell: &str, expected: &str) -> bool {
    cell.to_lowercase() == expected
}
