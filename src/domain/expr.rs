// Linear expressions over decision variables
//
// The algebraic primitive everything else composes from: a sparse map from
// variable identity to coefficient plus a scalar constant. A variable absent
// from the map has implicit coefficient zero, and zero coefficients are never
// stored, so two expressions that are equal as functions compare equal.

use std::collections::BTreeMap;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// Identity of a decision variable within one model
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VarId(pub(crate) usize);

impl VarId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Additive combination of variables with coefficients, plus a constant
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinearExpr {
    terms: BTreeMap<VarId, f64>,
    constant: f64,
}

impl LinearExpr {
    /// The zero expression
    pub fn new() -> Self {
        Self::default()
    }

    /// Expression consisting of a single term `coeff * var`
    pub fn term(var: VarId, coeff: f64) -> Self {
        let mut expr = Self::new();
        expr.add_term(var, coeff);
        expr
    }

    /// Constant expression with no variable terms
    pub fn constant(value: f64) -> Self {
        Self {
            terms: BTreeMap::new(),
            constant: value,
        }
    }

    /// Add `coeff * var` to this expression
    pub fn add_term(&mut self, var: VarId, coeff: f64) {
        let entry = self.terms.entry(var).or_insert(0.0);
        *entry += coeff;
        if *entry == 0.0 {
            self.terms.remove(&var);
        }
    }

    /// Coefficient of `var`; zero when the variable does not appear
    pub fn coefficient(&self, var: VarId) -> f64 {
        self.terms.get(&var).copied().unwrap_or(0.0)
    }

    pub fn constant_term(&self) -> f64 {
        self.constant
    }

    /// Iterate over the non-zero terms in variable order
    pub fn terms(&self) -> impl Iterator<Item = (VarId, f64)> + '_ {
        self.terms.iter().map(|(&v, &c)| (v, c))
    }

    pub fn is_constant(&self) -> bool {
        self.terms.is_empty()
    }

    /// Evaluate the expression with variable values supplied by `lookup`
    pub fn eval(&self, lookup: impl Fn(VarId) -> f64) -> f64 {
        self.terms
            .iter()
            .map(|(&v, &c)| c * lookup(v))
            .sum::<f64>()
            + self.constant
    }
}

impl Add for LinearExpr {
    type Output = LinearExpr;

    fn add(mut self, rhs: LinearExpr) -> LinearExpr {
        self += rhs;
        self
    }
}

impl AddAssign for LinearExpr {
    fn add_assign(&mut self, rhs: LinearExpr) {
        for (var, coeff) in rhs.terms {
            self.add_term(var, coeff);
        }
        self.constant += rhs.constant;
    }
}

impl Sub for LinearExpr {
    type Output = LinearExpr;

    fn sub(mut self, rhs: LinearExpr) -> LinearExpr {
        self -= rhs;
        self
    }
}

impl SubAssign for LinearExpr {
    fn sub_assign(&mut self, rhs: LinearExpr) {
        for (var, coeff) in rhs.terms {
            self.add_term(var, -coeff);
        }
        self.constant -= rhs.constant;
    }
}

impl Mul<f64> for LinearExpr {
    type Output = LinearExpr;

    fn mul(self, scale: f64) -> LinearExpr {
        if scale == 0.0 {
            return LinearExpr::new();
        }
        LinearExpr {
            terms: self
                .terms
                .into_iter()
                .map(|(v, c)| (v, c * scale))
                .collect(),
            constant: self.constant * scale,
        }
    }
}

impl Mul<LinearExpr> for f64 {
    type Output = LinearExpr;

    fn mul(self, expr: LinearExpr) -> LinearExpr {
        expr * self
    }
}

impl Neg for LinearExpr {
    type Output = LinearExpr;

    fn neg(self) -> LinearExpr {
        self * -1.0
    }
}
