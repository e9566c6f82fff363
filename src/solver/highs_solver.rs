// HiGHS solver adapter, compiled behind the "highs" feature
//
// Uses the row-problem API: columns first with their objective coefficients,
// then the constraint rows. The backend status is folded into the closed
// five-way SolveStatus; anything outside the recognized set is reported as
// Unknown with the raw status kept in the message for diagnostics.

use std::collections::BTreeMap;

use highs::{HighsModelStatus, RowProblem, Sense as HighsSense};

use crate::domain::{
    Model, RelOp, Sense, SolveResult, SolveStatus, SolverError, SolverService, VarDomain,
};

pub struct HighsSolver;

impl HighsSolver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HighsSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl SolverService for HighsSolver {
    fn solve(&self, model: &Model) -> crate::domain::solver_service::Result<SolveResult> {
        self.validate(model)?;
        let objective = model
            .objective()
            .ok_or_else(|| SolverError::InvalidModel("missing objective".to_string()))?;

        let mut pb = RowProblem::default();
        let mut cols = Vec::with_capacity(model.num_variables());
        for (id, def) in model.registry().iter() {
            let lower = def.lower;
            let upper = def.upper.unwrap_or(f64::INFINITY);
            let obj_coeff = objective.expr.coefficient(id);
            let col = match def.domain {
                VarDomain::Integer => pb.add_integer_column(obj_coeff, lower..upper),
                VarDomain::Continuous => pb.add_column(obj_coeff, lower..upper),
            };
            cols.push(col);
        }

        for constraint in model.constraints() {
            let terms: Vec<_> = constraint
                .expr
                .terms()
                .map(|(var, coeff)| (cols[var.index()], coeff))
                .collect();
            let rhs = constraint.rhs - constraint.expr.constant_term();
            match constraint.op {
                RelOp::LessOrEqual => pb.add_row(..=rhs, &terms),
                RelOp::Equal => pb.add_row(rhs..=rhs, &terms),
                RelOp::GreaterOrEqual => pb.add_row(rhs.., &terms),
            }
        }

        let sense = match objective.sense {
            Sense::Minimize => HighsSense::Minimise,
            Sense::Maximize => HighsSense::Maximise,
        };
        let solved = pb.optimise(sense).solve();

        match solved.status() {
            HighsModelStatus::Optimal => {
                let solution = solved.get_solution();
                let by_id = solution.columns();
                let mut values = BTreeMap::new();
                for (id, def) in model.registry().iter() {
                    values.insert(def.name.clone(), by_id[id.index()]);
                }
                let objective_value = objective.expr.eval(|v| by_id[v.index()]);
                Ok(SolveResult::optimal(objective_value, values))
            }
            HighsModelStatus::Infeasible => Ok(SolveResult::terminal(
                SolveStatus::Infeasible,
                "no solution satisfies all constraints",
            )),
            HighsModelStatus::Unbounded | HighsModelStatus::UnboundedOrInfeasible => {
                Ok(SolveResult::terminal(
                    SolveStatus::Unbounded,
                    "the objective can improve indefinitely",
                ))
            }
            HighsModelStatus::LoadError
            | HighsModelStatus::ModelError
            | HighsModelStatus::PresolveError
            | HighsModelStatus::SolveError
            | HighsModelStatus::PostsolveError => Ok(SolveResult::terminal(
                SolveStatus::Abnormal,
                format!("{:?}", solved.status()),
            )),
            other => Ok(SolveResult::terminal(
                SolveStatus::Unknown,
                format!("{other:?}"),
            )),
        }
    }

    fn name(&self) -> &str {
        "HiGHS"
    }

    fn supports_mip(&self) -> bool {
        true
    }
}
