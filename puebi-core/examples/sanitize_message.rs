//! Sanitize a typical transaction notification

use puebi_core::{is_sentence_capitalized, title_case, Config, Pass, Sanitizer};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let message = "Hai Luqman, Anda telah melakukan Transfer Real Time dari rekening 1023613267 \
sejumlah Rp 12.000. Pastikan transaksi ini benar dilakukan atau Hubungi Call Center 1500 035.";

    println!("=== Example 1: Default pipeline ===");
    let sanitizer = Sanitizer::new();
    let output = sanitizer.sanitize_with_report(message);
    println!("Input:  {message}");
    println!("Output: {}", output.text);
    println!(
        "Lowered {} of {} words in {} sentences ({} us)",
        output.stats.lowered, output.stats.words, output.stats.sentences, output.processing_time_us
    );

    println!("\n=== Example 2: Skipping passes ===");
    let config = Config::builder()
        .disable(Pass::Decapitalize)
        .disable(Pass::Currency)
        .build()?;
    let casing_kept = Sanitizer::with_config(config);
    println!("Output: {}", casing_kept.sanitize(message));

    println!("\n=== Example 3: Helpers ===");
    println!("Capitalized: {}", is_sentence_capitalized("halo semua"));
    println!("Title case:  {}", title_case("bank rakyat indonesia"));

    Ok(())
}
