/// Order in which files are listed in the text summary
///
/// The document is always sorted by path. The summary follows the
/// dependency map's own order unless `Sorted` is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SummaryOrder {
    /// Map iteration order (default)
    #[default]
    Map,
    /// Case-insensitive path order, same as the document
    Sorted,
}

impl std::str::FromStr for SummaryOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "map" => Ok(SummaryOrder::Map),
            "sorted" => Ok(SummaryOrder::Sorted),
            _ => Err(format!(
                "Invalid summary order: {}. Please specify 'map' or 'sorted'",
                s
            )),
        }
    }
}

impl std::fmt::Display for SummaryOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SummaryOrder::Map => write!(f, "map"),
            SummaryOrder::Sorted => write!(f, "sorted"),
        }
    }
}
