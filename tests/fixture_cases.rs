#[cfg(test)]
mod tests {
    use number_parse::parse_number;
    use serde::Deserialize;
    use std::fs;
    use std::path::{Path, PathBuf};

    #[derive(Debug, Deserialize)]
    struct TestCase {
        raw: String,
        locale: String,
        // Missing for cases the parser must reject.
        expected: Option<f64>,
    }

    #[derive(Debug, Deserialize)]
    struct TestCases {
        cases: Vec<TestCase>,
    }

    fn run_test_case(case: &TestCase) -> Result<(), String> {
        let result = parse_number(&case.raw, &case.locale);

        if result != case.expected {
            return Err(format!(
                "\n✗ Mismatch for input: {:?}\nLocale:     \"{}\"\nExpected:   {:?}\nActual:     {:?}",
                case.raw, case.locale, case.expected, result
            ));
        }

        Ok(())
    }

    #[test]
    fn test_fixture_cases() {
        let toml_path: PathBuf = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("parse-cases.toml");

        let toml_content = fs::read_to_string(&toml_path)
            .unwrap_or_else(|e| panic!("Failed to read TOML file {}: {}", toml_path.display(), e));

        let test_suite: TestCases = toml::from_str(&toml_content)
            .unwrap_or_else(|e| panic!("Failed to parse TOML file {}: {}", toml_path.display(), e));

        assert!(!test_suite.cases.is_empty(), "fixture should carry cases");

        let mut failed = 0;
        for (i, case) in test_suite.cases.iter().enumerate() {
            if let Err(msg) = run_test_case(case) {
                failed += 1;
                // Print immediately for CI logs if --nocapture is used
                eprintln!("\n[Case {}] {}", i + 1, msg);
            }
        }

        assert_eq!(failed, 0, "{} fixture case(s) failed", failed);
    }
}
