// Composition tests: the pipeline stages chained together.
//
//   CSV -> ReviewTable -> normalized text -> sentiment / similarity -> report
//
// Uses temporary CSV files and models that need no downloads.

use std::io::Write;

use reviewlens::output::json::write_to;
use reviewlens::output::terminal::{sentiment_line, similarity_line};
use reviewlens::pipeline::analysis::{analyze_file, AnalysisOptions};
use reviewlens::pipeline::context::AnalysisContext;
use reviewlens::reviews::loader::{load_reviews, DEFAULT_TEXT_COLUMN};
use reviewlens::sentiment::analyzer::LexiconAnalyzer;
use reviewlens::sentiment::classifier::{classify, SentimentLabel};
use reviewlens::sentiment::traits::{FixedScoreModel, SentimentScore};
use reviewlens::similarity::lexical::LexicalModel;
use reviewlens::text::normalizer::TextNormalizer;

fn write_csv(rows: &[Option<&str>]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "id,reviews.text").unwrap();
    for (i, row) in rows.iter().enumerate() {
        match row {
            Some(text) => writeln!(file, "{},\"{}\"", i, text.replace('"', "\"\"")).unwrap(),
            None => writeln!(file, "{},", i).unwrap(),
        }
    }
    file.flush().unwrap();
    file
}

fn context() -> AnalysisContext {
    AnalysisContext::new(
        TextNormalizer::with_stop_words(["would", "not", "again", "the", "is", "it", "this"]),
        Box::new(LexiconAnalyzer),
        Box::new(LexicalModel),
    )
}

// ============================================================
// Load -> normalize -> classify
// ============================================================

#[test]
fn three_row_scenario() {
    let file = write_csv(&[
        Some("Great product!"),
        None,
        Some("Terrible, would not buy again."),
    ]);

    let table = load_reviews(file.path(), DEFAULT_TEXT_COLUMN).unwrap();
    assert_eq!(table.len(), 2);

    let ctx = context();
    let normalized = ctx.normalize(&table.records()[0].text);
    assert_eq!(normalized, "great product !");

    let fixed = FixedScoreModel(SentimentScore {
        polarity: 0.8,
        subjectivity: 0.75,
    });
    let result = classify(&fixed, &normalized).unwrap();
    assert_eq!(result.label, SentimentLabel::Positive);

    let second = ctx.normalize(&table.records()[1].text);
    assert_eq!(ctx.classify(&second).unwrap().label, SentimentLabel::Negative);
}

#[test]
fn three_row_scenario_with_english_stop_list() {
    let file = write_csv(&[
        Some("Great product!"),
        None,
        Some("Terrible, would not buy again."),
    ]);
    let table = load_reviews(file.path(), DEFAULT_TEXT_COLUMN).unwrap();
    assert_eq!(table.len(), 2);

    let ctx = AnalysisContext::lexical();

    let first = ctx.normalize(&table.records()[0].text);
    assert_eq!(first, "great product !");
    let result = ctx.classify(&first).unwrap();
    assert_eq!(result.label, SentimentLabel::Positive, "{result:?}");

    let second = ctx.normalize(&table.records()[1].text);
    assert_eq!(second, "terrible , would buy .");
    assert_eq!(ctx.classify(&second).unwrap().label, SentimentLabel::Negative);
}

#[test]
fn english_stop_list_pipeline_output_is_well_formed() {
    let file = write_csv(&[
        Some("Great product!"),
        None,
        Some("Terrible, would not buy again."),
    ]);
    let table = load_reviews(file.path(), DEFAULT_TEXT_COLUMN).unwrap();
    let ctx = AnalysisContext::lexical();

    for record in table.records() {
        let normalized = ctx.normalize(&record.text);
        assert_eq!(normalized, normalized.to_lowercase());
        assert_eq!(normalized, normalized.trim());
        assert!(!normalized.contains("  "), "{normalized:?}");
        assert_eq!(ctx.normalize(&normalized), normalized);
    }
}

// ============================================================
// Full analysis run
// ============================================================

#[test]
fn analyze_file_produces_report() {
    let file = write_csv(&[
        Some("This tablet is great"),
        Some("Battery life is terrible"),
        None,
        Some("Battery life is excellent"),
        Some("Fine for the price"),
        Some("Screen is nice"),
        Some("Not worth it"),
    ]);

    let options = AnalysisOptions {
        preview: 10,
        sample: 5,
        pair: Some((1, 3)),
    };
    let report = analyze_file(&context(), file.path(), DEFAULT_TEXT_COLUMN, &options).unwrap();

    assert_eq!(report.rows_read, 7);
    assert_eq!(report.rows_kept, 6);
    assert_eq!(report.normalized_preview.len(), 6);
    assert_eq!(report.sentiments.len(), 5);

    let indices: Vec<usize> = report.sentiments.iter().map(|s| s.index).collect();
    assert_eq!(indices, vec![0, 1, 3, 4, 5]);
    assert_eq!(report.sentiments[0].sentiment.label, SentimentLabel::Positive);
    assert_eq!(report.sentiments[1].sentiment.label, SentimentLabel::Negative);

    let pair = report.similarity.as_ref().unwrap();
    assert_eq!((pair.first, pair.second), (1, 3));
    // "battery life terrible" vs "battery life excellent" share 2 of 3 words.
    assert!((pair.score - 2.0 / 3.0).abs() < 1e-9, "got {}", pair.score);
    assert_eq!(similarity_line(pair), "Similarity between customer reviews 1 and 3 is 0.67.");
}

#[test]
fn pair_pointing_at_dropped_row_aborts_run() {
    let file = write_csv(&[Some("good"), None, Some("bad")]);
    let options = AnalysisOptions {
        pair: Some((0, 1)),
        ..AnalysisOptions::default()
    };
    let err = analyze_file(&context(), file.path(), DEFAULT_TEXT_COLUMN, &options).unwrap_err();
    assert!(format!("{err:#}").contains("Review row 1 not found"));
}

#[test]
fn pair_with_empty_normalized_text_aborts_run() {
    let file = write_csv(&[Some("good"), Some("it is")]);
    let options = AnalysisOptions {
        pair: Some((0, 1)),
        ..AnalysisOptions::default()
    };
    let err = analyze_file(&context(), file.path(), DEFAULT_TEXT_COLUMN, &options).unwrap_err();
    assert!(
        err.chain().any(|e| e.to_string().contains("empty")),
        "unexpected error: {err:#}"
    );
}

#[test]
fn missing_column_aborts_run() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "id,body").unwrap();
    writeln!(file, "1,hello").unwrap();
    file.flush().unwrap();

    let err = analyze_file(
        &context(),
        file.path(),
        DEFAULT_TEXT_COLUMN,
        &AnalysisOptions::default(),
    )
    .unwrap_err();
    assert!(format!("{err:#}").contains("not found in header"));
}

// ============================================================
// Rendering
// ============================================================

#[test]
fn sentiment_line_format() {
    let result = classify(&LexiconAnalyzer, "great product !").unwrap();
    let line = sentiment_line(1, &result);
    assert!(
        line.starts_with("Customer review 1 - Sentiment(polarity=0.8, subjectivity=0.75), "),
        "got {line}"
    );
    assert!(line.contains("Positive"));
}

#[test]
fn json_report_round_trips_through_serde() {
    let file = write_csv(&[Some("great screen"), Some("great battery")]);
    let options = AnalysisOptions {
        preview: 10,
        sample: 5,
        pair: Some((0, 1)),
    };
    let report = analyze_file(&context(), file.path(), DEFAULT_TEXT_COLUMN, &options).unwrap();

    let mut buf = Vec::new();
    write_to(&report, &mut buf).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();

    assert_eq!(value["rows_kept"], 2);
    assert_eq!(value["similarity_model"], "lexical");
    assert_eq!(value["sentiments"][0]["label"], "Positive");
    assert_eq!(value["sentiments"][0]["text"], "great screen");
    assert!(value["similarity"]["score"].as_f64().unwrap() > 0.0);
    assert!(value["generated_at"].is_string());
}
