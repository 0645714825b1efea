//! Immutable metric aggregate returned by the engine.

use std::fmt;

use serde::{Serialize, Serializer};

use super::significance::PValue;

/// JSON has no representation for IEEE infinities, so they are written as strings.
fn extended_f64<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else if value.is_nan() {
        serializer.serialize_str("NaN")
    } else if value.is_sign_positive() {
        serializer.serialize_str("Infinity")
    } else {
        serializer.serialize_str("-Infinity")
    }
}

/// Point estimate with a 95% confidence interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IntervalEstimate {
    pub value: f64,
    #[serde(serialize_with = "extended_f64")]
    pub lower: f64,
    #[serde(serialize_with = "extended_f64")]
    pub upper: f64,
}

/// Ratio measure (relative risk, odds ratio) estimated on the log scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatioEstimate {
    pub value: f64,
    #[serde(serialize_with = "extended_f64")]
    pub lower: f64,
    #[serde(serialize_with = "extended_f64")]
    pub upper: f64,
    pub p_value: PValue,
    #[serde(serialize_with = "extended_f64")]
    pub z_stat: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImpactLabel {
    AbsoluteRiskIncrease,
    RelativeRiskIncrease,
    AbsoluteRiskReduction,
    RelativeRiskReduction,
    AbsoluteBenefitIncrease,
    RelativeBenefitIncrease,
    AbsoluteBenefitReduction,
    RelativeBenefitReduction,
}

impl ImpactLabel {
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Self::AbsoluteRiskIncrease => "ARI",
            Self::RelativeRiskIncrease => "RRI",
            Self::AbsoluteRiskReduction => "ARR",
            Self::RelativeRiskReduction => "RRR",
            Self::AbsoluteBenefitIncrease => "ABI",
            Self::RelativeBenefitIncrease => "RBI",
            Self::AbsoluteBenefitReduction => "ABR",
            Self::RelativeBenefitReduction => "RBR",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::AbsoluteRiskIncrease => "Absolute Risk Increase",
            Self::RelativeRiskIncrease => "Relative Risk Increase",
            Self::AbsoluteRiskReduction => "Absolute Risk Reduction",
            Self::RelativeRiskReduction => "Relative Risk Reduction",
            Self::AbsoluteBenefitIncrease => "Absolute Benefit Increase",
            Self::RelativeBenefitIncrease => "Relative Benefit Increase",
            Self::AbsoluteBenefitReduction => "Absolute Benefit Reduction",
            Self::RelativeBenefitReduction => "Relative Benefit Reduction",
        }
    }
}

impl fmt::Display for ImpactLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.abbreviation())
    }
}

impl Serialize for ImpactLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ImpactMeasure {
    pub label: ImpactLabel,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ImpactMeasures {
    pub absolute: ImpactMeasure,
    pub relative: ImpactMeasure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NntKind {
    Benefit,
    Harm,
}

impl NntKind {
    /// Short tag used in reports: NNT for benefit, NNH for harm.
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Self::Benefit => "NNT",
            Self::Harm => "NNH",
        }
    }
}

impl fmt::Display for NntKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Benefit => f.write_str("Benefit"),
            Self::Harm => f.write_str("Harm"),
        }
    }
}

/// Number needed to treat (or harm).
///
/// `lower`/`upper` are the reciprocals of the risk-difference bounds taken in
/// the same order, so they may be infinite or have `lower > upper`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NumberNeeded {
    pub value: f64,
    #[serde(rename = "type")]
    pub kind: NntKind,
    #[serde(serialize_with = "extended_f64")]
    pub lower: f64,
    #[serde(serialize_with = "extended_f64")]
    pub upper: f64,
}

/// Post-hoc power sub-result before it is flattened into [`MetricsResult`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerAnalysis {
    pub power: Option<f64>,
    pub type1_error: f64,
    pub type2_error: Option<f64>,
}

/// Every metric the engine reports for one table; `None` means not calculable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsResult {
    pub absolute_risk_exposed: Option<f64>,
    pub absolute_risk_control: Option<f64>,
    pub risk_difference: Option<IntervalEstimate>,
    pub relative_risk: Option<RatioEstimate>,
    pub odds_ratio: Option<RatioEstimate>,
    pub impact_measures: Option<ImpactMeasures>,
    pub nnt: Option<NumberNeeded>,
    pub power: Option<f64>,
    pub type1_error: Option<f64>,
    pub type2_error: Option<f64>,
}

impl MetricsResult {
    pub fn builder() -> MetricsResultBuilder {
        MetricsResultBuilder::default()
    }
}

/// Assembles a [`MetricsResult`] from independently computed sub-results.
#[derive(Debug, Default)]
pub struct MetricsResultBuilder {
    inner: MetricsResult,
}

impl MetricsResultBuilder {
    pub fn risks(mut self, exposed: f64, control: f64) -> Self {
        self.inner.absolute_risk_exposed = Some(exposed);
        self.inner.absolute_risk_control = Some(control);
        self
    }

    pub fn risk_difference(mut self, estimate: Option<IntervalEstimate>) -> Self {
        self.inner.risk_difference = estimate;
        self
    }

    pub fn relative_risk(mut self, estimate: Option<RatioEstimate>) -> Self {
        self.inner.relative_risk = estimate;
        self
    }

    pub fn odds_ratio(mut self, estimate: Option<RatioEstimate>) -> Self {
        self.inner.odds_ratio = estimate;
        self
    }

    pub fn impact_measures(mut self, measures: Option<ImpactMeasures>) -> Self {
        self.inner.impact_measures = measures;
        self
    }

    pub fn nnt(mut self, nnt: Option<NumberNeeded>) -> Self {
        self.inner.nnt = nnt;
        self
    }

    pub fn power(mut self, analysis: Option<PowerAnalysis>) -> Self {
        if let Some(analysis) = analysis {
            self.inner.power = analysis.power;
            self.inner.type1_error = Some(analysis.type1_error);
            self.inner.type2_error = analysis.type2_error;
        }
        self
    }

    pub fn build(self) -> MetricsResult {
        self.inner
    }
}
