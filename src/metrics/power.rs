//! Post-hoc power of the two-tailed two-proportion z-test.

use super::{
    normal::cdf, result::PowerAnalysis, risk::Risks, table::ContingencyTable, ALPHA, Z_CRITICAL,
};

/// Post-hoc power for the observed risks at [`ALPHA`].
///
/// When the two risks are identical the null hypothesis holds exactly, and
/// power is reported as the false-positive rate (`alpha`) by convention.
pub fn post_hoc_power(table: &ContingencyTable, risks: &Risks) -> PowerAnalysis {
    let null_only = PowerAnalysis {
        power: None,
        type1_error: ALPHA,
        type2_error: None,
    };

    if risks.exposed == risks.control {
        return PowerAnalysis {
            power: Some(ALPHA),
            type1_error: ALPHA,
            type2_error: Some(1.0 - ALPHA),
        };
    }

    let n1 = table.exposed_total();
    let n2 = table.control_total();
    let pooled = (table.a as f64 + table.c as f64) / (n1 + n2);
    if pooled <= 0.0 || pooled >= 1.0 {
        return null_only;
    }

    let se_null = (pooled * (1.0 - pooled) * (1.0 / n1 + 1.0 / n2)).sqrt();
    let critical_diff = Z_CRITICAL * se_null;
    let se_alt = (risks.exposed * (1.0 - risks.exposed) / n1
        + risks.control * (1.0 - risks.control) / n2)
        .sqrt();
    if se_alt == 0.0 {
        return null_only;
    }

    let observed_diff = risks.difference();
    let upper_tail = 1.0 - cdf((critical_diff - observed_diff) / se_alt);
    let lower_tail = cdf((-critical_diff - observed_diff) / se_alt);
    let power = upper_tail + lower_tail;
    PowerAnalysis {
        power: Some(power),
        type1_error: ALPHA,
        type2_error: Some(1.0 - power),
    }
}
