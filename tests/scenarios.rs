//! End-to-end behaviour of the conditional pass on whole buffers.

use lexpp::{preprocess, PreprocessError, Preprocessor, SymbolTable};

fn run(defs: &[&str], src: &str) -> Result<String, PreprocessError> {
    let table = SymbolTable::new(defs.iter().copied());
    let out = Preprocessor::new(&table).run(src.as_bytes())?;
    Ok(String::from_utf8(out).expect("utf8 in, utf8 out"))
}

fn newline_positions(s: &str) -> Vec<usize> {
    s.bytes().enumerate().filter(|(_, c)| *c == b'\n').map(|(i, _)| i).collect()
}

const KEYWORDS: [&str; 5] = ["%ifdef", "%ifndef", "%if", "%else", "%endif"];

const SAMPLES: &[&str] = &[
    "%ifdef FOO\nkeep this\n%endif\n",
    "%ifndef BAR\nA\n%else\nB\n%endif\n",
    "%if A && (B || !C)\none\n%else\ntwo\n%endif\nthree",
    "%ifdef X\n%ifdef Y\n%ifdef Z\nz\n%endif\ny\n%endif\nx\n%endif\n",
    "%{\npackage main\n%}\n%%\n%ifdef DEBUG\n\"dbg\"  return DBG\n%endif\n[a-z]+  return ID\n%%\n",
    "a\r\n%ifdef A\r\nb\r\n%endif\r\nc",
];

#[test]
fn scenario_defined_symbol_keeps_body() {
    let out = run(&["FOO"], "%ifdef FOO\nkeep this\n%endif\n").unwrap();
    let lines: Vec<&str> = out.split('\n').collect();
    assert_eq!(lines, vec!["          ", "keep this", "      ", ""]);
}

#[test]
fn scenario_ifndef_else() {
    let out = run(&[], "%ifndef BAR\nA\n%else\nB\n%endif\n").unwrap();
    let lines: Vec<&str> = out.split('\n').collect();
    assert_eq!(lines, vec!["           ", "A", "     ", " ", "      ", ""]);
}

#[test]
fn scenario_missing_endif() {
    for defs in [&[][..], &["FOO"][..], &["BAR", "BAZ"][..]] {
        let err = run(defs, "%ifdef NOT_THERE\nx\n").unwrap_err();
        assert_eq!(err.to_string(), "unterminated %ifdef starting on line 1");
    }
    let err = run(&["FOO"], "%ifndef FOO\nx\n").unwrap_err();
    assert_eq!(err.to_string(), "unterminated %ifdef starting on line 1");
}

#[test]
fn scenario_dangling_and() {
    let err = run(&["A"], "%if A &&\n").unwrap_err();
    assert_eq!(err.to_string(), "%if syntax error on line 1. [A &&] <-- syntax error here");
}

#[test]
fn scenario_negated_condition() {
    let out = run(&["A"], "%if !A\nhidden\n%endif\n").unwrap();
    assert!(!out.contains("hidden"));
    assert_eq!(out.len(), "%if !A\nhidden\n%endif\n".len());
}

#[test]
fn length_and_newlines_are_invariant() {
    for src in SAMPLES {
        for defs in [&[][..], &["FOO", "A", "X", "Y", "DEBUG"][..], &["B", "Z", "BAR"][..]] {
            let out = run(defs, src).unwrap();
            assert_eq!(out.len(), src.len(), "length changed for {src:?}");
            assert_eq!(newline_positions(&out), newline_positions(src), "newlines moved for {src:?}");
        }
    }
}

#[test]
fn directives_never_survive() {
    for src in SAMPLES {
        for defs in [&[][..], &["FOO", "A", "B", "X", "Y", "Z", "DEBUG"][..]] {
            let out = run(defs, src).unwrap();
            for kw in KEYWORDS {
                assert!(!out.contains(kw), "{kw} leaked from {src:?}: {out:?}");
            }
        }
    }
}

#[test]
fn three_level_nesting_under_false_outer() {
    let src = "%ifdef X\n%ifdef Y\n%ifdef Z\nz\n%endif\ny\n%endif\nx\n%endif\nafter\n";
    let out = run(&["Y", "Z"], src).unwrap();
    let (body, tail) = out.split_at(src.len() - "after\n".len());
    assert!(body.bytes().all(|c| c == b' ' || c == b'\n'));
    assert_eq!(tail, "after\n");
}

#[test]
fn rerun_on_output_is_a_noop() {
    for src in SAMPLES {
        let once = run(&["A", "FOO", "X"], src).unwrap();
        assert_eq!(run(&["A", "FOO", "X"], &once).unwrap(), once);
        assert_eq!(run(&[], &once).unwrap(), once);
    }
}

#[test]
fn lexer_sections_are_untouched() {
    let src = SAMPLES[4];
    let out = run(&[], src).unwrap();
    assert!(out.starts_with("%{\npackage main\n%}\n%%\n"));
    assert!(out.ends_with("[a-z]+  return ID\n%%\n"));
    assert!(!out.contains("DBG"));
}

#[test]
fn crlf_lines_keep_their_shape() {
    let out = run(&[], "a\r\n%ifdef A\r\nb\r\n%endif\r\nc").unwrap();
    assert_eq!(out, "a\r\n         \n  \n       \nc");
}

#[test]
fn in_place_api_reports_stats() {
    let table = SymbolTable::from_define_list(["FOO, BAR"]);
    let mut buf = b"%ifdef FOO\nx\n%endif\n%ifdef NOPE\ny\n%endif\n".to_vec();
    let stats = preprocess(&mut buf, &table).unwrap();
    assert_eq!(stats.directives, 4);
    assert_eq!(stats.regions, 1);
    assert_eq!(&buf[11..13], b"x\n");
}

#[test]
fn shared_table_across_passes() {
    let table = SymbolTable::new(["A"]);
    let pp = Preprocessor::new(&table);
    let first = pp.run(b"%if A\n1\n%endif\n").unwrap();
    let second = pp.run(b"%if !A\n2\n%endif\n").unwrap();
    assert_eq!(first, b"     \n1\n      \n");
    assert_eq!(second, b"      \n \n      \n");
}
