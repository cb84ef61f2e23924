//! Discovery-layer tests: parsing fixtures, collecting classes and
//! resolving inherited methods across headers.

use std::path::{Path, PathBuf};

use cpp_mockgen::parser::collector::collect_classes;
use cpp_mockgen::parser::cpp::{diagnostics, CppParser};
use cpp_mockgen::resolver::{load_units, HeaderIndex};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[test]
fn test_fixtures_parse_without_diagnostics() {
    let mut parser = CppParser::new().unwrap();
    for name in ["I2.hpp", "T.hpp", "IBase.hpp", "IDerived.hpp"] {
        let units = load_units(&mut parser, &fixture(name), &[]).unwrap();
        for unit in &units {
            assert!(
                diagnostics(unit).is_empty(),
                "unexpected diagnostics in {}",
                name
            );
        }
    }
}

#[test]
fn test_collect_i2() {
    let mut parser = CppParser::new().unwrap();
    let units = load_units(&mut parser, &fixture("I2.hpp"), &[]).unwrap();
    let classes = collect_classes(&units[0]);

    assert_eq!(classes.len(), 1);
    let i2 = &classes[0];
    assert_eq!(i2.expr(), "n1::I2");
    assert!(!i2.is_template());

    let spellings: Vec<_> = i2.methods.iter().map(|m| m.spelling.as_str()).collect();
    assert_eq!(
        spellings,
        vec![
            "f0",
            "f1",
            "f3",
            "f5",
            "f6",
            "f7",
            "operator()",
            "operator[]",
            "operator->"
        ]
    );

    assert_eq!(i2.methods[2].display_name, "f3(int, double)");
    assert_eq!(i2.methods[2].arity, 2);
    assert!(i2.methods[0].is_const);
    assert!(!i2.methods[1].is_const);
    assert_eq!(
        i2.methods[4].display_name,
        "f6(const std::shared_ptr<int>&)"
    );
}

#[test]
fn test_collect_template_class() {
    let mut parser = CppParser::new().unwrap();
    let units = load_units(&mut parser, &fixture("T.hpp"), &[]).unwrap();
    let classes = collect_classes(&units[0]);

    assert_eq!(classes.len(), 1);
    let t = &classes[0];
    assert_eq!(t.expr(), "n::T<Elem>");
    assert_eq!(t.template_params, vec!["Elem"]);
    assert_eq!(t.methods.len(), 2);
    assert_eq!(t.methods[1].display_name, "Push(const Elem&)");
}

#[test]
fn test_inherited_methods_resolved_across_headers() {
    let mut parser = CppParser::new().unwrap();
    let entry = fixture("IDerived.hpp");
    let units = load_units(&mut parser, &entry, &[]).unwrap();
    assert_eq!(units.len(), 2);

    let mut index = HeaderIndex::new();
    let mut derived = None;
    for unit in &units {
        for class in collect_classes(unit) {
            if class.expr() == "n1::IDerived" {
                derived = Some(class.clone());
            }
            index.insert(class);
        }
    }

    let derived = derived.expect("IDerived not collected");
    assert_eq!(derived.bases, vec!["IBase"]);

    // own methods first, then the base's, duplicates kept
    let names: Vec<_> = derived
        .all_pure_virtual_methods(&index)
        .into_iter()
        .map(|m| m.display_name)
        .collect();
    assert_eq!(
        names,
        vec!["close()", "open()", "open()", "read(int)"]
    );
}
