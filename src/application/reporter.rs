// Result reporting: turn a SolveResult into user-facing text

use std::fmt::Write;

use crate::domain::{Model, Sense, SolveResult, SolveStatus};

/// Render a solve result as a status-specific, human-readable report
pub fn render(model: &Model, result: &SolveResult) -> String {
    let mut out = String::new();
    match result.status {
        SolveStatus::Optimal => {
            let label = match model.objective().map(|o| o.sense) {
                Some(Sense::Maximize) => "Overall profit",
                _ => "Overall cost",
            };
            let value = result.objective_value.unwrap_or(0.0);
            let _ = writeln!(out, "{label} = ${value}");
            let _ = writeln!(out);
            for (name, value) in &result.variable_values {
                let _ = writeln!(out, "{name} = {value}");
            }
        }
        SolveStatus::Infeasible => {
            out.push_str("The problem is infeasible: no solution satisfies all constraints.\n");
        }
        SolveStatus::Unbounded => {
            out.push_str("The problem is unbounded: the objective can improve indefinitely.\n");
        }
        SolveStatus::Abnormal => {
            let _ = writeln!(out, "Solver stopped due to an abnormal error: {}", result.message);
        }
        SolveStatus::Unknown => {
            let _ = writeln!(out, "Solver ended with status: {}", result.message);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LinearExpr, Objective, SolveStatus};
    use std::collections::BTreeMap;

    #[test]
    fn optimal_report_lists_objective_and_variables() {
        let mut model = Model::new("t");
        let x = model.continuous("acres_wheat").unwrap();
        model.set_objective(Objective {
            sense: Sense::Maximize,
            expr: LinearExpr::term(x, 1.0),
        });

        let mut values = BTreeMap::new();
        values.insert("acres_wheat".to_string(), 120.0);
        let report = render(&model, &SolveResult::optimal(420.0, values));

        assert!(report.contains("Overall profit = $420"));
        assert!(report.contains("acres_wheat = 120"));
    }

    #[test]
    fn infeasible_report_names_the_status() {
        let model = Model::new("t");
        let result = SolveResult::terminal(SolveStatus::Infeasible, "infeasible");
        assert!(render(&model, &result).contains("infeasible"));
    }
}
