mod symbols;
pub use symbols::*;

mod term;
pub use term::*;

mod formula;
pub use formula::*;

mod variables;
pub use variables::*;

mod inference;
pub use inference::*;

mod parse;
pub use parse::*;


#[cfg(test)]
mod tests {
    use crate::ast::{parse_formula, parse_inference, Formula, Inference, Term, Variable};

    fn p() -> Formula { Formula::atom("P") }
    fn q() -> Formula { Formula::atom("Q") }
    fn r() -> Formula { Formula::atom("R") }

    #[test]
    fn parse_simple_0() {
        let source = "llama";
        let formula = parse_formula(source).expect("should not error");
        assert_eq!(formula, Formula::atom("llama"))
    }
    #[test]
    fn parse_simple_1() {
        let source = "P∨Q∨R";
        let formula = parse_formula(source).expect("should not error");
        // disjunction chains associate to the left
        assert_eq!(formula, Formula::or(Formula::or(p(), q()), r()))
    }
    #[test]
    fn parse_simple_2() {
        let source = "P ∧ Q ∧ R";
        let formula = parse_formula(source).expect("should not error");
        assert_eq!(formula, Formula::and(Formula::and(p(), q()), r()))
    }
    #[test]
    fn parse_simple_3() {
        let source = "P→Q→R";
        let formula = parse_formula(source).expect("should not error");
        // implication chains associate to the right
        assert_eq!(formula, Formula::implies(p(), Formula::implies(q(), r())))
    }
    #[test]
    fn parse_simple_4() {
        let source = "¬P";
        let formula = parse_formula(source).expect("should not error");
        assert_eq!(formula, p().negate())
    }
    #[test]
    fn parse_simple_5() {
        let source = "P↔Q";
        let formula = parse_formula(source).expect("should not error");
        assert_eq!(formula, Formula::iff(p(), q()))
    }
    #[test]
    fn parse_simple_6() {
        let source = "⊤ ∨ ¬⊥";
        let formula = parse_formula(source).expect("should not error");
        assert_eq!(formula, Formula::or(Formula::top(), Formula::bottom().negate()))
    }
    #[test]
    fn parse_ascii_0() {
        let source = "~(P & Q) <-> (~P | ~Q) -> R";
        let formula = parse_formula(source).expect("should not error");
        let expected = Formula::iff(
            Formula::and(p(), q()).negate(),
            Formula::implies(Formula::or(p().negate(), q().negate()), r()),
        );
        assert_eq!(formula, expected)
    }

    #[test]
    fn parse_precedence_0() {
        // ↔ is loosest, then →, then ∨, then ∧, then ¬
        let source = "¬P∧Q∨R→P↔Q";
        let formula = parse_formula(source).expect("should not error");
        let expected = Formula::iff(
            Formula::implies(
                Formula::or(Formula::and(p().negate(), q()), r()),
                p(),
            ),
            q(),
        );
        assert_eq!(formula, expected)
    }
    #[test]
    fn parse_nested_0() {
        let source = "(P∧(P→Q))→Q";
        let formula = parse_formula(source).expect("should not error");
        let expected = Formula::implies(Formula::and(p(), Formula::implies(p(), q())), q());
        assert_eq!(formula, expected)
    }

    #[test]
    fn parse_predicate_0() {
        let source = "∀x.(F(x)→G(a))";
        let formula = parse_formula(source).expect("should not error");
        let x = Variable::new("x");
        let expected = Formula::for_all(x.clone(), Formula::implies(
            Formula::predicate("F", Term::variable(x)),
            Formula::predicate("G", Term::name("a")),
        ));
        assert_eq!(formula, expected)
    }
    #[test]
    fn parse_predicate_1() {
        // x is only a variable under its binder
        let source = "F(x) ∧ ∃x.F(s(x))";
        let formula = parse_formula(source).expect("should not error");
        let x = Variable::new("x");
        let expected = Formula::and(
            Formula::predicate("F", Term::name("x")),
            Formula::exists(x.clone(), Formula::predicate("F", Term::operator("s", Term::variable(x)))),
        );
        assert_eq!(formula, expected)
    }
    #[test]
    fn parse_predicate_2() {
        // reserved names are variables wherever they occur
        let source = "¬F(ζ0)";
        let formula = parse_formula(source).expect("should not error");
        let expected = Formula::predicate("F", Term::variable(Variable::fresh(0))).negate();
        assert_eq!(formula, expected)
    }

    #[test]
    fn parse_failure_0() {
        let _ = parse_formula("P∧").expect_err("a dangling connective should not parse");
    }
    #[test]
    fn parse_failure_1() {
        let _ = parse_formula("(P∨Q").expect_err("unbalanced parenthesis should not parse");
    }
    #[test]
    fn parse_failure_2() {
        let _ = parse_formula("").expect_err("nothing is not a formula");
    }
    #[test]
    fn parse_failure_3() {
        let _ = parse_formula("∀.F(x)").expect_err("a quantifier needs a variable");
    }

    #[test]
    fn parse_inference_0() {
        let inference = parse_inference("P, P→Q ⊨ Q").expect("should not error");
        assert_eq!(inference, Inference::new(vec![p(), Formula::implies(p(), q())], q()));
    }
    #[test]
    fn parse_inference_1() {
        let inference = parse_inference("⊨ P∨¬P").expect("should not error");
        assert_eq!(inference, Inference::theorem(Formula::or(p(), p().negate())));
    }
    #[test]
    fn parse_inference_2() {
        let inference = parse_inference("P∨¬P").expect("should not error");
        assert_eq!(inference, Inference::theorem(Formula::or(p(), p().negate())));
    }
    #[test]
    fn parse_inference_3() {
        let inference = parse_inference("P |= P | Q").expect("should not error");
        assert_eq!(inference, Inference::new(vec![p()], Formula::or(p(), q())));
    }
    #[test]
    fn parse_inference_failure_0() {
        let _ = parse_inference("P, Q").expect_err("premises need a consequence");
    }

    #[test]
    fn show_0() {
        let formula = Formula::implies(Formula::and(p(), Formula::implies(p(), q())), q());
        assert_eq!(formula.to_string(), "((P∧(P→Q))→Q)");
    }
    #[test]
    fn show_1() {
        let x = Variable::new("x");
        let formula = Formula::exists(x.clone(), Formula::predicate("N", Term::operator("s", Term::variable(x))).negate());
        assert_eq!(formula.to_string(), "∃x.¬N(s(x))");
    }
    #[test]
    fn show_inference_0() {
        assert_eq!(Inference::theorem(p()).to_string(), "⊨ P");
        assert_eq!(Inference::new(vec![p()], q()).to_string(), "P ⊨ Q");
        let inference = Inference::new(vec![p(), Formula::implies(p(), q())], q());
        assert_eq!(inference.to_string(), "P, (P→Q) ⊨ Q");
    }
    #[test]
    fn round_trip_0() {
        let x = Variable::new("x");
        let formula = Formula::iff(
            Formula::for_all(x.clone(), Formula::implies(
                Formula::predicate("N", Term::variable(x.clone())),
                Formula::predicate("N", Term::operator("s", Term::variable(x))),
            )),
            Formula::or(Formula::top(), Formula::predicate("N", Term::name("0")).negate().negate()),
        );
        let reparsed = parse_formula(&formula.to_string()).expect("rendered formulas should parse");
        assert_eq!(reparsed, formula);
    }

    #[test]
    fn is_same_0() {
        assert!(p().is_same(&p()));
        assert!(!p().is_same(&q()));
        assert!(p().negate().is_same(&p().negate()));
    }
    #[test]
    fn is_same_commutative_0() {
        assert!(Formula::and(p(), q()).is_same(&Formula::and(q(), p())));
        assert!(Formula::or(p(), q()).is_same(&Formula::or(q(), p())));
        assert!(Formula::iff(p(), q()).is_same(&Formula::iff(q(), p())));
        // implication does not commute
        assert!(!Formula::implies(p(), q()).is_same(&Formula::implies(q(), p())));
    }
    #[test]
    fn is_same_double_negation_0() {
        assert!(p().negate().negate().is_same(&p()));
        assert!(p().is_same(&p().negate().negate().negate().negate()));
        assert!(Formula::and(p().negate().negate(), q()).is_same(&Formula::and(q(), p())));
    }
    #[test]
    fn contradicts_0() {
        assert!(p().contradicts(&p().negate()));
        assert!(p().negate().contradicts(&p()));
        assert!(!p().contradicts(&q().negate()));
        assert!(!p().contradicts(&p()));
        // ¬(Q∧P) against P∧Q
        assert!(Formula::and(p(), q()).contradicts(&Formula::and(q(), p()).negate()));
        // ¬¬¬P against P
        assert!(p().contradicts(&p().negate().negate().negate()));
    }
}
