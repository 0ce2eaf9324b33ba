#[derive(Debug, Default, Clone, Copy)]
pub struct Config {
    /// Output verbosity reduction.
    ///
    /// `0` prints headers and separators, `1` drops the decoration,
    /// `2` also drops per-shape details and keeps only comparison results.
    pub quiet: u8,
}
