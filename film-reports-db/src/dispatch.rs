//! Report definitions and the validate → bind → execute dispatcher.
//!
//! Every report is a static [`ReportDef`]. Calling a report:
//!
//! 1. checks each argument against its declared [`ParamSpec`],
//! 2. selects the report's SQL text and binds the validated values,
//! 3. hands the bound [`Query`] to the injected [`QueryExecutor`].
//!
//! If step 1 fails (or the report is not implemented) the caller gets `None`
//! and the executor is never touched. Executor errors are returned untouched.

use std::cmp::Ordering;

use film_reports_model::{Arg, ResultTable, Value};

use crate::executor::{Query, QueryExecutor};

// ── Definitions ─────────────────────────────────────────────────────────────

/// The runtime shape a parameter must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// `Arg::Int`. Booleans are not integers.
    Integer,
    /// `Arg::Int` or a finite `Arg::Float`.
    Number,
    /// `Arg::Text`.
    Text,
    /// `Arg::Int` (an id) or `Arg::Text` (a name).
    IntegerOrText,
    /// `Arg::List` of `Arg::Text`.
    TextList,
}

impl ParamKind {
    pub fn accepts(self, arg: &Arg) -> bool {
        match (self, arg) {
            (ParamKind::Integer, Arg::Int(_)) => true,
            (ParamKind::Number, Arg::Int(_)) => true,
            (ParamKind::Number, Arg::Float(f)) => f.is_finite(),
            (ParamKind::Text, Arg::Text(_)) => true,
            (ParamKind::IntegerOrText, Arg::Int(_) | Arg::Text(_)) => true,
            (ParamKind::TextList, Arg::List(items)) => {
                items.iter().all(|i| matches!(i, Arg::Text(_)))
            }
            _ => false,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ParamKind::Integer => "integer",
            ParamKind::Number => "number",
            ParamKind::Text => "text",
            ParamKind::IntegerOrText => "integer or text",
            ParamKind::TextList => "list of text",
        }
    }
}

/// An extra predicate on a parameter's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// The value must be `>= 0`.
    NonNegative,
    /// The value must be `>=` the value of the named earlier parameter.
    NotLessThan(&'static str),
}

#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamKind,
    pub constraint: Option<Constraint>,
}

impl ParamSpec {
    pub const fn new(name: &'static str, kind: ParamKind) -> Self {
        Self {
            name,
            kind,
            constraint: None,
        }
    }

    pub const fn with(self, constraint: Constraint) -> Self {
        Self {
            constraint: Some(constraint),
            ..self
        }
    }
}

/// Which SQL text a report runs.
#[derive(Debug, Clone, Copy)]
pub enum QueryPlan {
    /// One statement for every valid input.
    Fixed(&'static str),
    /// Chosen by the runtime type of the first argument.
    ByKind {
        integer: &'static str,
        text: &'static str,
    },
    /// Declared but never implemented; always yields no result.
    NotImplemented,
}

/// A named, parameterized, read-only report with a fixed output shape.
#[derive(Debug, Clone, Copy)]
pub struct ReportDef {
    pub name: &'static str,
    pub description: &'static str,
    pub params: &'static [ParamSpec],
    pub columns: &'static [&'static str],
    pub order_by: &'static [&'static str],
    pub plan: QueryPlan,
}

impl ReportDef {
    pub fn is_implemented(&self) -> bool {
        !matches!(self.plan, QueryPlan::NotImplemented)
    }

    fn param_index(&self, name: &str) -> Option<usize> {
        self.params.iter().position(|p| p.name == name)
    }
}

// ── Validation ──────────────────────────────────────────────────────────────

/// Arguments that passed every check of one report.
///
/// Only [`validate`] constructs this, and only this can be turned into a
/// [`Query`], so unchecked input never reaches a statement.
#[derive(Debug)]
pub struct ValidatedArgs<'a> {
    def: &'a ReportDef,
    args: &'a [Arg],
}

/// Check `args` against the report's declared parameters.
///
/// Returns `None` on the first violated rule; the rule is logged at debug
/// level and not otherwise surfaced.
pub fn validate<'a>(def: &'a ReportDef, args: &'a [Arg]) -> Option<ValidatedArgs<'a>> {
    if args.len() != def.params.len() {
        log::debug!(
            "{}: expected {} argument(s), got {}",
            def.name,
            def.params.len(),
            args.len()
        );
        return None;
    }

    for (spec, arg) in def.params.iter().zip(args) {
        if !spec.kind.accepts(arg) {
            log::debug!(
                "{}: {} must be {}, got {}",
                def.name,
                spec.name,
                spec.kind.label(),
                arg.type_name()
            );
            return None;
        }
    }

    for (spec, arg) in def.params.iter().zip(args) {
        let Some(constraint) = spec.constraint else {
            continue;
        };
        let satisfied = match constraint {
            Constraint::NonNegative => compare(arg, &Arg::Int(0)).is_some_and(Ordering::is_ge),
            Constraint::NotLessThan(other) => def
                .param_index(other)
                .and_then(|i| compare(arg, &args[i]))
                .is_some_and(Ordering::is_ge),
        };
        if !satisfied {
            match constraint {
                Constraint::NonNegative => {
                    log::debug!("{}: {} must be non-negative", def.name, spec.name)
                }
                Constraint::NotLessThan(other) => {
                    log::debug!("{}: {} must be >= {}", def.name, spec.name, other)
                }
            }
            return None;
        }
    }

    Some(ValidatedArgs { def, args })
}

/// Order two numeric arguments.
///
/// Two integers compare exactly as `i64`; any float on either side compares
/// as `f64`. `None` when either side is not numeric.
fn compare(a: &Arg, b: &Arg) -> Option<Ordering> {
    match (a, b) {
        (Arg::Int(x), Arg::Int(y)) => Some(x.cmp(y)),
        _ => a.as_number()?.partial_cmp(&b.as_number()?),
    }
}

impl ValidatedArgs<'_> {
    /// Select the statement and bind the validated values.
    ///
    /// `None` only for reports without SQL or arguments that have no scalar
    /// binding (lists).
    pub fn into_query(self) -> Option<Query> {
        let sql = match self.def.plan {
            QueryPlan::Fixed(sql) => sql,
            QueryPlan::ByKind { integer, text } => match self.args.first() {
                Some(Arg::Int(_)) => integer,
                Some(Arg::Text(_)) => text,
                _ => return None,
            },
            QueryPlan::NotImplemented => return None,
        };
        let params = self
            .args
            .iter()
            .map(bind)
            .collect::<Option<Vec<Value>>>()?;
        Some(Query::new(self.def.name, sql, params))
    }
}

fn bind(arg: &Arg) -> Option<Value> {
    match arg {
        Arg::Int(i) => Some(Value::Integer(*i)),
        Arg::Float(f) => Some(Value::Real(*f)),
        Arg::Text(s) => Some(Value::Text(s.clone())),
        Arg::Null | Arg::Bool(_) | Arg::List(_) => None,
    }
}

// ── Dispatch ────────────────────────────────────────────────────────────────

/// Validate and bind without executing.
pub fn build_query(def: &ReportDef, args: &[Arg]) -> Option<Query> {
    if !def.is_implemented() {
        log::debug!("{}: report is not implemented", def.name);
        return None;
    }
    validate(def, args)?.into_query()
}

/// Run one report: validate, bind, execute.
///
/// `Ok(None)` is the absent-result sentinel: the arguments were rejected or
/// the report is not implemented, and no query was issued.
pub fn run_report<E: QueryExecutor + ?Sized>(
    executor: &E,
    def: &ReportDef,
    args: &[Arg],
) -> Result<Option<ResultTable>, E::Error> {
    let Some(query) = build_query(def, args) else {
        return Ok(None);
    };
    log::debug!("{}: executing with {} bound value(s)", def.name, query.params().len());
    executor.execute(&query).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RANGE: ReportDef = ReportDef {
        name: "range",
        description: "test range",
        params: &[
            ParamSpec::new("lo", ParamKind::Number),
            ParamSpec::new("hi", ParamKind::Number).with(Constraint::NotLessThan("lo")),
        ],
        columns: &["x"],
        order_by: &[],
        plan: QueryPlan::Fixed("SELECT ?1 AS x WHERE ?1 <= ?2"),
    };

    #[test]
    fn test_param_kinds() {
        assert!(ParamKind::Integer.accepts(&Arg::Int(1)));
        assert!(!ParamKind::Integer.accepts(&Arg::Bool(true)));
        assert!(!ParamKind::Integer.accepts(&Arg::Float(1.0)));
        assert!(ParamKind::Number.accepts(&Arg::Float(1.5)));
        assert!(!ParamKind::Number.accepts(&Arg::Float(f64::INFINITY)));
        assert!(!ParamKind::Text.accepts(&Arg::Null));
        assert!(ParamKind::IntegerOrText.accepts(&Arg::Text("Action".into())));
        assert!(!ParamKind::IntegerOrText.accepts(&Arg::Float(1.0)));
        assert!(ParamKind::TextList.accepts(&Arg::from(vec!["a", "b"])));
        assert!(ParamKind::TextList.accepts(&Arg::List(vec![])));
        assert!(!ParamKind::TextList.accepts(&Arg::from(vec![1, 2])));
        assert!(!ParamKind::TextList.accepts(&Arg::Text("a".into())));
    }

    #[test]
    fn test_ordering_constraint() {
        assert!(validate(&RANGE, &[Arg::Int(1), Arg::Int(1)]).is_some());
        assert!(validate(&RANGE, &[Arg::Int(1), Arg::Float(0.5)]).is_none());
        assert!(validate(&RANGE, &[Arg::Int(1)]).is_none());
    }

    #[test]
    fn test_compare_is_exact_for_integers() {
        let big = 1_i64 << 53;
        assert_eq!(compare(&Arg::Int(big + 1), &Arg::Int(big)), Some(Ordering::Greater));
        assert_eq!(compare(&Arg::Int(i64::MIN), &Arg::Int(0)), Some(Ordering::Less));
        assert_eq!(compare(&Arg::Float(2.5), &Arg::Int(2)), Some(Ordering::Greater));
        assert_eq!(compare(&Arg::Text("1".into()), &Arg::Int(1)), None);
    }

    #[test]
    fn test_query_binds_in_order() {
        let query = build_query(&RANGE, &[Arg::Int(3), Arg::Float(4.5)]).unwrap();
        assert_eq!(query.report(), "range");
        assert_eq!(query.params(), [Value::Integer(3), Value::Real(4.5)]);
    }

    #[test]
    fn test_not_implemented_never_builds() {
        let stub = ReportDef {
            plan: QueryPlan::NotImplemented,
            ..RANGE
        };
        assert!(!stub.is_implemented());
        assert!(build_query(&stub, &[Arg::Int(1), Arg::Int(2)]).is_none());
    }
}
