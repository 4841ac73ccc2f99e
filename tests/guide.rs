use std::fs;

use formulae::{Environment, evaluate};
use walkdir::WalkDir;

/// A fenced formula from the guide, with the value its fence declares.
struct GuideExample {
    code:     String,
    expected: Option<f64>,
}

#[test]
fn guide_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("docs/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, example) in extract_formula_blocks(&content).into_iter().enumerate() {
            count += 1;
            let mut env = Environment::new();
            let value = evaluate(&example.code, &mut env).unwrap_or_else(|e| {
                                                             panic!("Formula example {} in {:?} failed:\n{}\nError: {e}",
                                                                    i + 1,
                                                                    path,
                                                                    example.code)
                                                         });

            if let Some(expected) = example.expected {
                assert!((value - expected).abs() < 1e-9,
                        "Formula example {} in {:?} gave {value}, expected {expected}:\n{}",
                        i + 1,
                        path,
                        example.code);
            }
        }
    }

    assert!(count > 0, "No formula examples found in docs/src");
}

fn extract_formula_blocks(content: &str) -> Vec<GuideExample> {
    let mut blocks = Vec::new();
    let mut current: Option<GuideExample> = None;

    for line in content.lines() {
        let trimmed = line.trim_start();
        if let Some(info) = trimmed.strip_prefix("```formula") {
            let expected = info.trim();
            current = Some(GuideExample { code:     String::new(),
                                          expected: (!expected.is_empty()).then(|| {
                                                                              expected.parse()
                                                                                      .expect("numeric fence annotation")
                                                                          }), });
            continue;
        }
        if trimmed.starts_with("```") {
            if let Some(block) = current.take() {
                blocks.push(block);
            }
            continue;
        }
        if let Some(block) = current.as_mut() {
            block.code.push_str(line);
            block.code.push('\n');
        }
    }

    blocks
}
