/// Fractional digits of every committed cell value.
pub const DECIMALS: usize = 5;

/// Format a number for display and for storage back into the grid.
pub fn format_value(n: f64) -> String {
    format!("{:.*}", DECIMALS, n)
}

/// Read back a value previously written by [`format_value`].
pub fn parse_value(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok()
}
