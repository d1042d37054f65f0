// tests/properties.rs
use lsystem_sketch::{
    LSystemDefinition, Parameters, RuleTable, Sentence, TurtleInterpreter, generate,
    generated_len,
};
use proptest::prelude::*;

/// Drops every ']' that would pop an empty stack.
fn balance(raw: &str) -> String {
    let mut depth = 0usize;
    raw.chars()
        .filter(|&c| match c {
            '[' => {
                depth += 1;
                true
            }
            ']' if depth == 0 => false,
            ']' => {
                depth -= 1;
                true
            }
            _ => true,
        })
        .collect()
}

/// Removes every bracketed block, including unclosed ones.
fn strip_branches(s: &str) -> String {
    let mut depth = 0usize;
    let mut out = String::new();
    for c in s.chars() {
        match c {
            '[' => depth += 1,
            ']' => depth -= 1,
            _ if depth == 0 => out.push(c),
            _ => {}
        }
    }
    out
}

proptest! {
    /// One draw command per `F`.
    #[test]
    fn draw_count_matches_f_count(raw in "[F+\\-\\[\\]XY]{0,80}", angle in -180.0f32..180.0) {
        let sentence = Sentence::new(balance(&raw));
        let interpreter = TurtleInterpreter::default();
        let out = interpreter.render(&sentence, Parameters::new(4.0, angle)).unwrap();
        let f_count = sentence.symbols().filter(|&c| c == 'F').count();
        prop_assert_eq!(out.commands.len(), f_count);
    }

    /// Closed branches leave no trace on the cursor.
    #[test]
    fn closed_branches_restore_cursor(raw in "[F+\\-\\[\\]]{0,80}", angle in -180.0f32..180.0) {
        let mut s = balance(&raw);
        let open = s.matches('[').count() - s.matches(']').count();
        s.extend(std::iter::repeat_n(']', open));

        let interpreter = TurtleInterpreter::default();
        let p = Parameters::new(3.0, angle);
        let full = interpreter.render(&Sentence::new(s.clone()), p).unwrap();
        let trunk = interpreter.render(&Sentence::new(strip_branches(&s)), p).unwrap();
        prop_assert_eq!(full.open_branches, 0);
        prop_assert_eq!(full.final_state, trunk.final_state);
    }

    /// Strings without rule keys are fixed points of rewriting.
    #[test]
    fn no_match_is_identity(raw in "[+\\-\\[\\]XYZ]{0,60}") {
        let rules = LSystemDefinition::fractal_plant().rules;
        let sentence = Sentence::new(raw);
        prop_assert_eq!(generate(&sentence, &rules), sentence);
    }

    /// `generated_len` predicts the size of the next generation.
    #[test]
    fn generated_len_is_exact(raw in "[ABF+\\-]{0,40}", rep in "[ABF]{0,6}") {
        let rules = RuleTable::from_pairs([("A", rep.as_str()), ("F", "F+F")]).unwrap();
        let sentence = Sentence::new(raw);
        prop_assert_eq!(generated_len(&sentence, &rules), generate(&sentence, &rules).len());
    }
}
