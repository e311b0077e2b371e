use std::fmt;

/// The marketing category driving an audit run.
///
/// The four known categories map onto the category-specific metric
/// augmentation and explanation documents. Anything else is carried as
/// `Other` and still produces the base metric bundle.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    /// Acquisition sources and costs (CPA-centric).
    CustomerAcquisition,
    /// CSAT scores and ad/content relevance.
    CustomerSatisfaction,
    /// Revenue trends and return on ad spend.
    RevenueGrowth,
    /// Churn and retention volume.
    CustomerRetention,
    /// Unrecognized category: accepted, yields base metrics only.
    Other(String),
}

impl Category {
    /// The four known categories, in presentation order.
    pub const KNOWN: [Category; 4] = [
        Category::CustomerAcquisition,
        Category::CustomerSatisfaction,
        Category::RevenueGrowth,
        Category::CustomerRetention,
    ];

    /// Parse user input into a category.
    ///
    /// Matching is case-insensitive on the display name. Unrecognized
    /// input never fails; it becomes `Other` and downstream code falls
    /// back to the generic summary path.
    pub fn from_input(input: &str) -> Category {
        let trimmed = input.trim();
        for known in &Category::KNOWN {
            if known.name().eq_ignore_ascii_case(trimmed) {
                return known.clone();
            }
        }
        Category::Other(trimmed.to_string())
    }

    /// Human-readable display name.
    pub fn name(&self) -> &str {
        match self {
            Category::CustomerAcquisition => "Customer Acquisition",
            Category::CustomerSatisfaction => "Customer Satisfaction",
            Category::RevenueGrowth => "Revenue Growth",
            Category::CustomerRetention => "Customer Retention",
            Category::Other(name) => name,
        }
    }

    /// File slug for the category's explanation document.
    ///
    /// `None` for unrecognized categories, which use the generic document.
    pub fn slug(&self) -> Option<&'static str> {
        match self {
            Category::CustomerAcquisition => Some("customer_acquisition"),
            Category::CustomerSatisfaction => Some("customer_satisfaction"),
            Category::RevenueGrowth => Some("revenue_growth"),
            Category::CustomerRetention => Some("customer_retention"),
            Category::Other(_) => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
