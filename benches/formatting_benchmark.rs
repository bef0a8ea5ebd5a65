use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tailwind_formatter::{format_text, pack, FormatterConfig, LayoutOptions, WrapIndentStyle};

const CLASSES: &[&str] = &[
    "flex", "flex-col", "items-center", "justify-center", "p-4", "md:p-6", "lg:p-8",
    "m-2", "bg-blue-500", "hover:bg-blue-600", "text-white", "text-sm", "md:text-base",
    "font-semibold", "rounded-lg", "border", "shadow-md", "transition", "duration-300",
    "hover:scale-105", "cursor-pointer", "fill-current", "sr-only", "w-full", "sm:w-1/2",
];

/// Build a class list of `count` classes cycling through a realistic set
fn class_list(count: usize) -> String {
    CLASSES.iter().cycle().take(count).cloned().collect::<Vec<_>>().join(" ")
}

/// Build a markup document with `tags` class-bearing elements
fn document(tags: usize) -> String {
    let mut content = String::from("<main>\n");
    for i in 0..tags {
        let classes = CLASSES
            .iter()
            .cycle()
            .skip(i % CLASSES.len())
            .take(12)
            .cloned()
            .collect::<Vec<_>>()
            .join(" ");
        content.push_str(&format!("  <div id=\"item-{}\" class=\"{}\">\n", i, classes));
        content.push_str(&format!("    Item {}\n", i));
        content.push_str("  </div>\n");
    }
    content.push_str("</main>\n");
    content
}

fn benchmark_pack(c: &mut Criterion) {
    let mut group = c.benchmark_group("pack");

    for count in [10, 50, 250].iter() {
        let input = class_list(*count);

        group.bench_with_input(BenchmarkId::new("bounded", count), &input, |b, input| {
            let options = LayoutOptions::default();
            b.iter(|| pack(black_box(input), black_box(&options)));
        });

        group.bench_with_input(BenchmarkId::new("unbounded", count), &input, |b, input| {
            let options = LayoutOptions {
                max_line_width: 0,
                ..LayoutOptions::default()
            };
            b.iter(|| pack(black_box(input), black_box(&options)));
        });

        group.bench_with_input(BenchmarkId::new("extra_wrap_indent", count), &input, |b, input| {
            let options = LayoutOptions {
                max_line_width: 40,
                wrap_indent_style: WrapIndentStyle::Extra,
                ..LayoutOptions::default()
            };
            b.iter(|| pack(black_box(input), black_box(&options)));
        });
    }

    group.finish();
}

fn benchmark_documents(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_text");
    let config = FormatterConfig::default();

    for tags in [10, 100, 1000].iter() {
        let text = document(*tags);

        group.bench_with_input(BenchmarkId::new("unformatted", tags), &text, |b, text| {
            b.iter(|| format_text(black_box(text), black_box(&config)));
        });

        let formatted = format_text(&text, &config).text;
        group.bench_with_input(BenchmarkId::new("already_formatted", tags), &formatted, |b, text| {
            b.iter(|| format_text(black_box(text), black_box(&config)));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_pack, benchmark_documents);
criterion_main!(benches);
