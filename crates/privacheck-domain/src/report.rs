use privacheck_types::{Check, CheckCounts, FinancialRisk, Grade, PrivacheckData, Verdict};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomainReport {
    pub verdict: Verdict,
    pub grade: Grade,
    pub score: u8,
    pub counts: CheckCounts,
    pub checks: Vec<Check>,
    pub financial_risk: Option<FinancialRisk>,
    pub data: PrivacheckData,
}
