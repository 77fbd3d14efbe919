use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use graphql_introspect::{FieldDescriptor, SchemaIndex, TypeDescriptor, TypeRef};
use graphql_type_graph::{build_all, flat_fields, Depth, EdgeMap, GraphBuilder};
use std::hint::black_box;

/// Builds a schema of `size` entity types. Every entity points at the next
/// two (wrapping around, so the graph is full of cycles) and has a Relay
/// style connection to the previous one.
fn synthetic_schema(size: usize) -> SchemaIndex {
    let mut types = Vec::with_capacity(size * 3 + 1);

    types.push(TypeDescriptor::object(
        "Query",
        (0..size)
            .map(|i| FieldDescriptor::new(format!("entity{i}"), TypeRef::object(format!("Entity{i}"))))
            .collect(),
    ));

    for i in 0..size {
        let next = (i + 1) % size;
        let after = (i + 2) % size;
        let prev = (i + size - 1) % size;

        types.push(TypeDescriptor::object(
            format!("Entity{i}"),
            vec![
                FieldDescriptor::new("id", TypeRef::non_null(TypeRef::scalar("ID"))),
                FieldDescriptor::new("name", TypeRef::scalar("String")),
                FieldDescriptor::new("next", TypeRef::object(format!("Entity{next}"))),
                FieldDescriptor::new(
                    "related",
                    TypeRef::non_null(TypeRef::list(TypeRef::object(format!("Entity{after}")))),
                ),
                FieldDescriptor::new(
                    "previous",
                    TypeRef::object(format!("Entity{prev}Connection")),
                ),
            ],
        ));
        types.push(TypeDescriptor::object(
            format!("Entity{i}Connection"),
            vec![FieldDescriptor::new(
                "edges",
                TypeRef::list(TypeRef::object(format!("Entity{i}Edge"))),
            )],
        ));
        types.push(TypeDescriptor::object(
            format!("Entity{i}Edge"),
            vec![FieldDescriptor::new("node", TypeRef::object(format!("Entity{i}")))],
        ));
    }

    SchemaIndex::from_types(types)
}

fn bench_edge_map(c: &mut Criterion) {
    let index = synthetic_schema(200);

    c.bench_function("edge_map_200_types", |b| {
        b.iter(|| black_box(EdgeMap::from_index(black_box(&index))));
    });
}

fn bench_flat_fields(c: &mut Criterion) {
    let index = synthetic_schema(200);

    c.bench_function("flat_fields_200_types", |b| {
        b.iter(|| black_box(flat_fields(black_box(&index))));
    });
}

fn bench_build_all_by_depth(c: &mut Criterion) {
    let index = synthetic_schema(50);
    let edges = EdgeMap::from_index(&index);

    let mut group = c.benchmark_group("build_all_depth");
    for max in [1, 2, 3, 4] {
        group.bench_with_input(BenchmarkId::from_parameter(max), &max, |b, &max| {
            b.iter(|| black_box(build_all(&index, &edges, Depth::Limited(max))));
        });
    }
    group.finish();
}

fn bench_single_root_unbounded(c: &mut Criterion) {
    // Unbounded expansion visits every simple path, so keep the schema small
    let index = synthetic_schema(8);
    let edges = EdgeMap::from_index(&index);
    let builder = GraphBuilder::new(&index, &edges).with_depth(Depth::Unbounded);

    c.bench_function("build_root_unbounded_8_types", |b| {
        b.iter(|| black_box(builder.build(black_box("Entity0"))));
    });
}

criterion_group!(
    benches,
    bench_edge_map,
    bench_flat_fields,
    bench_build_all_by_depth,
    bench_single_root_unbounded,
);
criterion_main!(benches);
