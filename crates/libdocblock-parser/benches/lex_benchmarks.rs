use criterion::Criterion;
use criterion::Throughput;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use libdocblock_parser::token_source::StrDocblockTokenSource;

const PROSE_ONLY: &str = "/**
 * Loads the user profile for the given account.
 *
 * This paragraph is long enough that the lexer has to skip a fair amount of
 * text (including e-mail addresses like someone@example.com) before it
 * reaches the end of the comment without finding a single directive.
 *
 * @author Someone
 */";

const ROUTE_DOCBLOCK: &str = "/**
 * Shows a single article.
 *
 * @Route(\"/articles/{id}\", name=\"article_show\", methods={\"GET\", \"HEAD\"})
 * @Cache(expires=\"tomorrow\", public=true, maxage=3600)
 * @Security(\"is_granted('ROLE_USER')\")
 */";

fn nested_docblock() -> String {
    let mut out = String::from("/**\n * @Table(name=\"t\", indexes={\n");
    for i in 0..200 {
        out.push_str(&format!(
            " *   @Index(name=\"idx_{i}\", columns={{\"a_{i}\", \"b_{i}\"}}, options={{\"where\": \"x > {i}\", \"weight\": {i}.5}}),\n"
        ));
    }
    out.push_str(" * })\n */");
    out
}

// ─── Lexer (Tokenization Only) ───────────────────────────

fn lexer(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    group.throughput(Throughput::Bytes(PROSE_ONLY.len() as u64));
    group.bench_function("prose_only", |b| {
        b.iter(|| {
            for token in StrDocblockTokenSource::new(black_box(PROSE_ONLY)) {
                black_box(token);
            }
        })
    });

    group.throughput(Throughput::Bytes(ROUTE_DOCBLOCK.len() as u64));
    group.bench_function("route_docblock", |b| {
        b.iter(|| {
            for token in StrDocblockTokenSource::new(black_box(ROUTE_DOCBLOCK)) {
                black_box(token);
            }
        })
    });

    let nested = nested_docblock();
    group.throughput(Throughput::Bytes(nested.len() as u64));
    group.bench_function("nested_200_entries", |b| {
        b.iter(|| {
            for token in StrDocblockTokenSource::new(black_box(&nested)) {
                black_box(token);
            }
        })
    });

    group.finish();
}

criterion_group!(benches, lexer);
criterion_main!(benches);
