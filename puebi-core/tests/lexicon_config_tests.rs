//! Integration tests for custom lexicon files

use puebi_core::{Config, Error, Lexicon, LexiconConfig, Sanitizer, DEFAULT_LEXICON_TOML};
use std::io::Write;
use tempfile::NamedTempFile;

const KOPERASI_LEXICON: &str = r#"
[metadata]
code = "id-koperasi"
name = "Koperasi"

[capitalization]
exceptions = ["Sejahtera"]
protected_heads = ["Koperasi", "Salam"]

[greeting]
words = ["Salam"]
max_name_tokens = 2

[prepositions]
prefixes = ["di"]
places = ["koperasi"]

[[phrases]]
pattern = '(?i)\bsimpan[ -]pinjam\b'
replacement = "simpan pinjam"

[currency]
symbol = "IDR"
"#;

fn write_lexicon(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_sanitizer_from_lexicon_file() {
    let file = write_lexicon(KOPERASI_LEXICON);
    let sanitizer = Sanitizer::from_lexicon_file(file.path()).unwrap();
    assert_eq!(sanitizer.config().lexicon().code(), "id-koperasi");

    assert_eq!(
        sanitizer.sanitize("salam budi santoso, Pinjaman Simpan-Pinjam dikoperasi Sejahtera cair idr 500000"),
        "Salam Budi Santoso, pinjaman simpan pinjam di koperasi Sejahtera cair IDR500000"
    );
}

#[test]
fn test_default_words_do_not_leak_into_custom_lexicon() {
    let file = write_lexicon(KOPERASI_LEXICON);
    let config = Config::builder().lexicon_file(file.path()).build().unwrap();
    let sanitizer = Sanitizer::with_config(config);

    // "Jakarta" is only an exception in the built-in lexicon
    assert_eq!(sanitizer.sanitize("Kantor Di Jakarta"), "Kantor di jakarta");
    assert_eq!(sanitizer.sanitize("bayar Rp 100"), "Bayar rp 100");
}

#[test]
fn test_embedded_lexicon_round_trips_through_toml() {
    let config: LexiconConfig = toml::from_str(DEFAULT_LEXICON_TOML).unwrap();
    let serialized = toml::to_string(&config).unwrap();
    let lexicon = Lexicon::from_toml_str(&serialized).unwrap();

    assert_eq!(lexicon.code(), "id");
    assert!(lexicon.is_exception("Call"));
    assert!(lexicon.is_protected_head("Jalan"));
    assert!(!lexicon.is_protected_head("jalan"));
    assert_eq!(lexicon.max_name_tokens(), 4);
    assert_eq!(lexicon.currency_symbol(), "Rp");
}

#[test]
fn test_invalid_pattern_is_reported() {
    let content = KOPERASI_LEXICON.replace(r"(?i)\bsimpan[ -]pinjam\b", "simpan(pinjam");
    let file = write_lexicon(&content);

    match Sanitizer::from_lexicon_file(file.path()) {
        Err(Error::InvalidPattern { pattern, .. }) => assert_eq!(pattern, "simpan(pinjam"),
        other => panic!("expected an invalid pattern error, got {other:?}"),
    }
}

#[test]
fn test_malformed_toml_is_reported() {
    let file = write_lexicon("[metadata\ncode = ");
    assert!(matches!(
        Sanitizer::from_lexicon_file(file.path()),
        Err(Error::Parse(_))
    ));
}

#[test]
fn test_missing_section_is_reported() {
    let file = write_lexicon("[metadata]\ncode = \"x\"\nname = \"X\"\n");
    assert!(Lexicon::from_file(file.path()).is_err());
}

#[test]
fn test_empty_symbol_is_rejected() {
    let content = KOPERASI_LEXICON.replace(r#"symbol = "IDR""#, r#"symbol = """#);
    let file = write_lexicon(&content);

    let err = Lexicon::from_file(file.path()).unwrap_err();
    assert!(matches!(err, Error::InvalidLexicon(_)));
    assert!(err.to_string().contains("currency.symbol"));
}
