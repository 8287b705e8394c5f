//! Analysis configuration.

/// Knobs for a single analysis run.
///
/// Typically loaded from a JSON file by the application crate and passed to
/// the analyzer.  None of these change which roads are selected; they only
/// affect how much work is done and how results are rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AnalysisConfig {
    /// Stop each shortest-path search as soon as the target settles instead
    /// of growing the full tree.  The reported routes are identical either way.
    pub stop_at_target: bool,

    /// Decimal places used when rendering the two ratios.  Default: 2.
    /// The report writer clamps this to 12.
    pub ratio_decimals: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            stop_at_target: true,
            ratio_decimals: 2,
        }
    }
}
