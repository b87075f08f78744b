/// Formats every value with six decimals, comma separated.
pub fn render(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| format!("{v:.6}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Formats the last `n` values, or all of them if there are fewer.
pub fn tail(values: &[f64], n: usize) -> String {
    let start = values.len().saturating_sub(n);
    render(&values[start..])
}
