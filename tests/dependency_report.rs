/// End-to-end tests: real directories in, report files out.

use cdeps::application::AnalyzeUsecase;
use cdeps::common::error::AnalyzeError;
use cdeps::domain::config::AnalysisConfig;
use cdeps::infrastructure::concurrency::build_thread_pool;
use cdeps::infrastructure::RegexCallExtractor;
use cdeps::ports::json_report::JsonReportExporter;
use cdeps::ports::text_report::TextReportExporter;
use cdeps::ports::OutputExporter;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_sources(dir: &Path, files: &[(&str, &str)]) {
    for (name, body) in files {
        fs::write(dir.join(name), body).unwrap();
    }
}

fn run_text(input: &Path, output: &Path, pool: Option<&rayon::ThreadPool>) -> Result<String, AnalyzeError> {
    let extractor = RegexCallExtractor::new();
    let exporter = TextReportExporter::default();
    let usecase = AnalyzeUsecase {
        extractor: &extractor,
        exporter: &exporter,
        pool,
    };
    usecase.run(&AnalysisConfig::new(input), output)?;
    Ok(fs::read_to_string(output).unwrap())
}

#[test]
fn test_shared_callee_counted_per_file() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("src");
    fs::create_dir(&src).unwrap();
    write_sources(
        &src,
        &[
            ("zeta.c", "void zeta(void) { compute(1); compute(2); }"),
            ("alpha.c", "int alpha(int x) { return compute(x); }"),
        ],
    );

    let report = run_text(&src, &dir.path().join("report.txt"), None).unwrap();

    assert!(report.contains("  compute: called by 2 files\n"), "report:\n{}", report);
    let alpha_at = report.find("\nalpha.c:\n").expect("alpha.c listed");
    let zeta_at = report.find("\nzeta.c:\n").expect("zeta.c listed");
    assert!(alpha_at < zeta_at);
    assert_eq!(report.matches("  -> compute\n").count(), 2);
    // Function definitions look like calls to the heuristic.
    assert!(report.contains("  -> alpha\n"));
}

#[test]
fn test_empty_directory_produces_empty_sections() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("src");
    fs::create_dir(&src).unwrap();

    let report = run_text(&src, &dir.path().join("report.txt"), None).unwrap();

    assert_eq!(
        report,
        "CSPICE Function Dependency Analysis\n\
         ===================================\n\
         \n\
         Most Called Functions (likely core utilities):\n\
         \n\
         \n\
         Detailed Dependencies:\n"
    );
}

#[test]
fn test_missing_directory_writes_no_report() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("cspice").join("src");
    let output = dir.path().join("analysis").join("function_dependencies.txt");

    let err = run_text(&missing, &output, None).unwrap_err();

    assert!(matches!(err, AnalyzeError::MissingInputDir(ref p) if p == &missing));
    assert!(err.to_string().contains(&missing.display().to_string()));
    assert!(!output.exists());
    assert!(!output.parent().unwrap().exists());
}

#[test]
fn test_report_is_idempotent_across_runs_and_thread_counts() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("src");
    fs::create_dir(&src).unwrap();
    let files: Vec<(String, String)> = (0..250)
        .map(|i| {
            (
                format!("unit_{:03}.c", i),
                format!("void f{i}_x(void) {{ chkin_c(\"f\"); helper_{}(); chkout_c(\"f\"); }}", i % 7),
            )
        })
        .collect();
    let borrowed: Vec<(&str, &str)> = files.iter().map(|(n, b)| (n.as_str(), b.as_str())).collect();
    write_sources(&src, &borrowed);

    let first = run_text(&src, &dir.path().join("a.txt"), None).unwrap();
    let second = run_text(&src, &dir.path().join("a.txt"), None).unwrap();
    let single = build_thread_pool(Some(1)).unwrap();
    let serial = run_text(&src, &dir.path().join("b.txt"), Some(&single)).unwrap();

    assert_eq!(first, second);
    assert_eq!(first, serial);
    assert!(first.contains("  chkin_c: called by 250 files\n"));
    // Ties at 250 resolve by name.
    let chkin = first.find("  chkin_c:").unwrap();
    let chkout = first.find("  chkout_c:").unwrap();
    assert!(chkin < chkout);
}

#[test]
fn test_top_section_is_capped_at_twenty() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("src");
    fs::create_dir(&src).unwrap();
    let body: String = (0..30).map(|i| format!("call_{:02}();\n", i)).collect();
    write_sources(&src, &[("many.c", &body)]);

    let report = run_text(&src, &dir.path().join("r.txt"), None).unwrap();

    assert_eq!(report.matches(": called by 1 files").count(), 20);
    assert_eq!(report.matches("  -> call_").count(), 30);
}

#[test]
fn test_unreadable_entry_does_not_stop_the_run() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("src");
    fs::create_dir(&src).unwrap();
    fs::create_dir(src.join("trap.c")).unwrap();
    fs::write(src.join("ok.c"), b"good_call();\n\xff\xfe bad_bytes_call();").unwrap();

    let report = run_text(&src, &dir.path().join("r.txt"), None).unwrap();

    assert!(report.contains("\nok.c:\n  -> bad_bytes_call\n  -> good_call\n"));
    assert!(!report.contains("trap.c"));
}

#[test]
fn test_json_report_matches_text_ordering() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("src");
    fs::create_dir(&src).unwrap();
    write_sources(
        &src,
        &[("b.c", "compute(); other();"), ("a.c", "compute();"), ("c.c", "/* nothing() */")],
    );
    let output = dir.path().join("nested").join("deps.json");

    let extractor = RegexCallExtractor::new();
    let exporter = JsonReportExporter::default();
    let usecase = AnalyzeUsecase {
        extractor: &extractor,
        exporter: &exporter,
        pool: None,
    };
    let summary = usecase.run(&AnalysisConfig::new(&src), &output).unwrap();

    assert_eq!(summary.files_scanned, 3);
    assert_eq!(summary.files_with_calls, 2);
    assert_eq!(summary.distinct_calls, 2);

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(json["total_files"], 3);
    assert_eq!(json["top_called"][0]["name"], "compute");
    assert_eq!(json["top_called"][0]["count"], 2);
    assert_eq!(json["dependencies"][0]["file"], "a.c");
    assert_eq!(json["dependencies"][1]["calls"], serde_json::json!(["compute", "other"]));
    assert_eq!(json["dependencies"].as_array().unwrap().len(), 2);

    let analysis = usecase.analyze(&AnalysisConfig::new(&src)).unwrap();
    assert!(TextReportExporter::default()
        .render(&analysis)
        .unwrap()
        .contains("\nb.c:\n  -> compute\n  -> other\n"));
}

#[cfg(unix)]
#[test]
fn test_names_colliding_after_lossy_decoding_are_counted_once() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let dir = tempdir().unwrap();
    let src = dir.path().join("src");
    fs::create_dir(&src).unwrap();
    // Both decode to "a\u{FFFD}.c".
    for raw in [&b"a\xff.c"[..], &b"a\xfe.c"[..]] {
        fs::write(src.join(OsStr::from_bytes(raw)), "compute();").unwrap();
    }

    let extractor = RegexCallExtractor::new();
    let exporter = TextReportExporter::default();
    let usecase = AnalyzeUsecase {
        extractor: &extractor,
        exporter: &exporter,
        pool: None,
    };
    let analysis = usecase.analyze(&AnalysisConfig::new(&src)).unwrap();

    let members = analysis
        .dependencies
        .iter()
        .filter(|(_, calls)| calls.contains("compute"))
        .count();
    assert_eq!(analysis.dependencies.len(), 1);
    assert_eq!(analysis.frequencies.count("compute"), members);
    assert_eq!(analysis.frequencies, analysis.dependencies.frequencies());
}
