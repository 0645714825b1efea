//! Incidence-based measures: absolute risks, risk difference, impact labels and NNT.

use super::{
    result::{ImpactLabel, ImpactMeasure, ImpactMeasures, IntervalEstimate, NntKind, NumberNeeded},
    table::{ContingencyTable, CorrectedTable, StudyGoal},
    Z_CRITICAL,
};

/// Observed outcome risks in each arm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Risks {
    pub exposed: f64,
    pub control: f64,
}

impl Risks {
    /// Point estimates from the raw table; `None` if either arm is empty.
    pub fn from_table(table: &ContingencyTable) -> Option<Self> {
        let exposed_total = table.exposed_total();
        let control_total = table.control_total();
        if exposed_total == 0.0 || control_total == 0.0 {
            return None;
        }
        Some(Self {
            exposed: table.a as f64 / exposed_total,
            control: table.c as f64 / control_total,
        })
    }

    pub fn difference(&self) -> f64 {
        self.exposed - self.control
    }
}

/// Risk difference with a Wald interval built from the corrected table.
pub fn risk_difference(risks: &Risks, corrected: &CorrectedTable) -> IntervalEstimate {
    let rd = risks.difference();
    let re = corrected.risk_exposed();
    let rc = corrected.risk_control();
    let se = (re * (1.0 - re) / corrected.exposed_total()
        + rc * (1.0 - rc) / corrected.control_total())
    .sqrt();
    IntervalEstimate {
        value: rd,
        lower: rd - Z_CRITICAL * se,
        upper: rd + Z_CRITICAL * se,
    }
}

/// Absolute/relative labels for a goal and the direction of the difference.
pub fn impact_labels(goal: StudyGoal, increase: bool) -> (ImpactLabel, ImpactLabel) {
    use ImpactLabel::*;
    match (goal, increase) {
        (StudyGoal::Undesirable, true) => (AbsoluteRiskIncrease, RelativeRiskIncrease),
        (StudyGoal::Undesirable, false) => (AbsoluteRiskReduction, RelativeRiskReduction),
        (StudyGoal::Desirable, true) => (AbsoluteBenefitIncrease, RelativeBenefitIncrease),
        (StudyGoal::Desirable, false) => (AbsoluteBenefitReduction, RelativeBenefitReduction),
    }
}

/// Impact measures; require a non-zero control risk and a non-zero difference.
pub fn impact_measures(risks: &Risks, goal: StudyGoal) -> Option<ImpactMeasures> {
    let rd = risks.difference();
    if risks.control <= 0.0 || rd == 0.0 {
        return None;
    }
    let absolute = rd.abs();
    let (absolute_label, relative_label) = impact_labels(goal, rd > 0.0);
    Some(ImpactMeasures {
        absolute: ImpactMeasure {
            label: absolute_label,
            value: absolute,
        },
        relative: ImpactMeasure {
            label: relative_label,
            value: absolute / risks.control,
        },
    })
}

/// Benefit when the difference moves the outcome in the wanted direction.
pub fn nnt_kind(goal: StudyGoal, rd: f64) -> NntKind {
    let benefit = match goal {
        StudyGoal::Undesirable => rd < 0.0,
        StudyGoal::Desirable => rd > 0.0,
    };
    if benefit {
        NntKind::Benefit
    } else {
        NntKind::Harm
    }
}

/// Number needed to treat/harm from a risk difference and its interval.
///
/// Bounds are `1/rd.upper` and `1/rd.lower`; an interval crossing zero yields
/// inverted or infinite bounds, which are returned untouched.
pub fn number_needed(rd: &IntervalEstimate, goal: StudyGoal) -> Option<NumberNeeded> {
    if rd.value == 0.0 {
        return None;
    }
    Some(NumberNeeded {
        value: 1.0 / rd.value.abs(),
        kind: nnt_kind(goal, rd.value),
        lower: 1.0 / rd.upper,
        upper: 1.0 / rd.lower,
    })
}
