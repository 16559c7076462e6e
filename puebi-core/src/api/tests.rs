//! Tests for the sanitizer API surface

use super::*;
use crate::language::Lexicon;
use std::sync::Arc;

#[test]
fn test_output_serializes_to_json() {
    let output = Sanitizer::new().sanitize_with_report("dirumah saya");
    let json = serde_json::to_value(&output).unwrap();
    assert_eq!(json["text"], "Di rumah saya");
    assert_eq!(json["stats"]["changed"], true);
    assert!(json["processing_time_us"].is_u64());
}

#[test]
fn test_custom_lexicon_through_builder() {
    let lexicon = Lexicon::from_toml_str(
        r#"
[metadata]
code = "id-bank"
name = "Bank"

[capitalization]
exceptions = ["Mandiri"]
protected_heads = []

[currency]
symbol = "IDR"
"#,
    )
    .unwrap();

    let config = Config::builder().lexicon(lexicon).build().unwrap();
    let sanitizer = Sanitizer::with_config(config);
    assert_eq!(sanitizer.config().lexicon().code(), "id-bank");
    assert_eq!(
        sanitizer.sanitize("transfer ke Bank Mandiri idr 50"),
        "Transfer ke bank Mandiri IDR50"
    );
}

#[test]
fn test_sanitizer_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Sanitizer>();

    let sanitizer = Arc::new(Sanitizer::new());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let sanitizer = Arc::clone(&sanitizer);
            std::thread::spawn(move || sanitizer.sanitize("hai andi, Apa Kabar?"))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), "Hai Andi, apa kabar?");
    }
}
