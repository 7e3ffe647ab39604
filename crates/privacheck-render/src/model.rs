use privacheck_types::Category;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableStatus {
    Pass,
    Warn,
    Fail,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableVerdict {
    Pass,
    Warn,
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableCitation {
    pub article: String,
    pub url: String,
    pub explanation: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableCheck {
    pub id: String,
    pub title: String,
    pub status: RenderableStatus,
    pub priority: String,
    pub category: Category,
    pub description: String,
    pub details: Vec<String>,
    pub fix: Option<String>,
    pub citation: Option<RenderableCitation>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableViolation {
    pub name: String,
    pub citation_label: String,
    pub min_fine: u64,
    pub max_fine: u64,
}

/// Amounts are in millions of euros.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableRisk {
    pub violations: Vec<RenderableViolation>,
    pub min_exposure: u64,
    pub max_exposure: u64,
    pub average_exposure: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderableCounts {
    pub pass: u32,
    pub warn: u32,
    pub fail: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableReport {
    pub verdict: RenderableVerdict,
    pub score: u8,
    pub grade: String,
    pub weighting: String,
    pub counts: RenderableCounts,
    /// In evaluation order.
    pub checks: Vec<RenderableCheck>,
    pub risk: Option<RenderableRisk>,
}
