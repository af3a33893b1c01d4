quantity!(
    /// A whole number of chargeable days.
    ///
    /// Negative or fractional day counts are unrepresentable, so every boundary that
    /// produces a `Days` (CLI flags, date arithmetic, backend payloads) has already
    /// rejected them.
    Days, via: u32, suffix: "d"
);
