//! Criterion benchmark: render a synthetic document end to end.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use texdown_parser::{parse, ParseOptions};
use texdown_render::Renderer;

fn synthetic_document() -> String {
    let mut doc = String::new();
    for section in 0..200 {
        doc.push_str(&format!("## Section {section}\n\n"));
        doc.push_str("Body text with 50% specials & under_scores, *emphasis*, ");
        doc.push_str("[a link](http://example.com/path), and `inline_code`.\n\n");
        doc.push_str("```rust\nlet x = 1;\n```\n\n");
        doc.push_str("|A|B|\n|---|---|\n|1|2|\n\n");
    }
    doc
}

fn bench_render(c: &mut Criterion) {
    let doc = synthetic_document();

    c.bench_function("render_document", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(doc.len() * 2);
            {
                let mut renderer = Renderer::new(&mut out);
                parse(black_box(&doc), &ParseOptions::default(), |event| {
                    renderer.render_event(&event)
                })
                .unwrap();
            }
            out
        })
    });
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
