use criterion::{black_box, criterion_group, criterion_main, Criterion};
use infconv::{convert_inf, convert_inf_with_config, ConversionConfig};

fn benchmark_inf_to_json_conversion(c: &mut Criterion) {
    // Small driver-style file benchmark
    c.bench_function("small_file", |b| {
        let source = "\
[Version]
Signature=$CHICAGO$
Class=Media
ClassGUID={4d36e96c-e325-11ce-bfc1-08002be10318}

[Strings]
DiskName=Driver Disk
Vendor=Acme
";
        b.iter(|| convert_inf(black_box(source)))
    });

    // Comment-heavy file benchmark
    c.bench_function("comment_heavy", |b| {
        let mut source = String::from("; File header\n\n[Settings]\n");
        for i in 0..50 {
            source.push_str(&format!("; option {} explanation\nOption{}=value{}\n", i, i, i));
        }
        b.iter(|| convert_inf(black_box(&source)))
    });

    // Many-sections benchmark
    c.bench_function("many_sections", |b| {
        let mut source = String::new();
        for i in 0..1000 {
            source.push_str(&format!("[Section{}]\nId={}\nName=Item{}\nEnabled=yes\n", i, i, i));
        }
        b.iter(|| convert_inf(black_box(&source)))
    });

    // Typed values with all flags enabled
    c.bench_function("typed_values", |b| {
        let mut source = String::from("[Data]\n");
        for i in 0..500 {
            source.push_str(&format!("Int{}={}\nFloat{}={}.5\nFlag{}=yes\nEmpty{}=\n", i, i, i, i, i, i));
        }
        let config = ConversionConfig::default()
            .with_yes_no_as_boolean(true)
            .with_empty_as_null(true)
            .with_strip_quotes(true);
        b.iter(|| convert_inf_with_config(black_box(&source), &config))
    });

    // JSONC output with preserved comments
    c.bench_function("jsonc_output", |b| {
        let mut source = String::from("; header\n\n");
        for i in 0..200 {
            source.push_str(&format!("[S{}]\n; about key\nKey{}=value ; inline\n;Old{}=retired\n\n", i, i, i));
        }
        let config = ConversionConfig::default().with_preserve_comments(true);
        b.iter(|| convert_inf_with_config(black_box(&source), &config))
    });
}

criterion_group!(benches, benchmark_inf_to_json_conversion);
criterion_main!(benches);
