//! Performance benchmarks for the PAYG Withholding Engine.
//!
//! This benchmark suite verifies that the calculation engine meets performance targets:
//! - Direct withholding calculation: < 100μs mean
//! - Single withholding request through the router: < 1ms mean
//! - Batch of 100 withholding requests: < 100ms mean
//! - Batch of 1000 withholding requests: < 500ms mean
//! - STP shaping for pay runs up to 250 employees: < 10ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rust_decimal::Decimal;
use std::str::FromStr;

use payg_engine::api::{create_router, AppState, WithholdingRequest};
use payg_engine::calculation::calculate_payg_withholding;
use payg_engine::config::ConfigLoader;
use payg_engine::models::{PayFrequency, TaxDetails};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a benchmark state with loaded tax tables.
fn create_bench_state() -> AppState {
    let config = ConfigLoader::load("./config/ato").expect("Failed to load config");
    AppState::new(config)
}

/// Creates a withholding request for a given gross and frequency.
fn create_withholding_request(gross: &str, frequency: &str) -> WithholdingRequest {
    let request_json = serde_json::json!({
        "gross_amount": gross,
        "pay_frequency": frequency,
        "employee_details": {
            "has_private_health_insurance": false,
            "marital_status": "single"
        }
    });

    serde_json::from_value(request_json).expect("Failed to create request")
}

/// Creates an STP request body with the specified number of employees.
fn create_stp_body(employee_count: usize) -> String {
    let employees: Vec<serde_json::Value> = (0..employee_count)
        .map(|i| {
            serde_json::json!({
                "employee_id": format!("emp_bench_{:04}", i),
                "tax_file_number": "123456782",
                "gross_amount": format!("{}.25", 900 + (i % 40) * 25),
                "tax_withheld": format!("{}.60", 120 + (i % 40) * 5),
                "superannuation": format!("{}.53", 103 + (i % 40) * 3),
                "net_pay": format!("{}.65", 779 + (i % 40) * 20)
            })
        })
        .collect();

    let request_json = serde_json::json!({
        "business_id": "biz_bench_001",
        "payrun_id": "run_bench_001",
        "pay_date": "2025-07-15",
        "employees": employees
    });

    serde_json::to_string(&request_json).unwrap()
}

/// Benchmark: Direct withholding calculation, no HTTP layer.
///
/// Target: < 100μs mean
fn bench_direct_calculation(c: &mut Criterion) {
    let config = ConfigLoader::load("./config/ato").expect("Failed to load config");
    let tables = config.latest().expect("no tax tables loaded").clone();
    let details = TaxDetails::default();
    let gross = Decimal::from_str("1923.08").unwrap();

    c.bench_function("direct_withholding", |b| {
        b.iter(|| {
            black_box(calculate_payg_withholding(
                black_box(gross),
                PayFrequency::Fortnightly,
                &details,
                &tables,
            ))
        })
    });
}

/// Benchmark: Single withholding request through the router.
///
/// Target: < 1ms mean
fn bench_single_withholding(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_bench_state();
    let router = create_router(state);
    let request = create_withholding_request("1923.08", "fortnightly");
    let body = serde_json::to_string(&request).unwrap();

    c.bench_function("single_withholding", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/calculate-payg")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: Batch of 100 withholding requests.
///
/// Target: < 100ms mean
fn bench_batch_100(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_bench_state();

    // Pre-create 100 different requests (vary gross, frequency and
    // declaration details for a realistic mix)
    let frequencies = ["weekly", "fortnightly", "monthly"];
    let requests: Vec<String> = (0..100)
        .map(|i| {
            let request_json = serde_json::json!({
                "gross_amount": format!("{}.{:02}", 800 + i * 37, i % 100),
                "pay_frequency": frequencies[i % 3],
                "employee_details": {
                    "has_private_health_insurance": i % 2 == 0,
                    "marital_status": if i % 3 == 0 { "family" } else { "single" }
                }
            });
            serde_json::to_string(&request_json).unwrap()
        })
        .collect();

    let mut group = c.benchmark_group("batch_processing");
    group.throughput(Throughput::Elements(100));

    group.bench_function("batch_100", |b| {
        b.to_async(&rt).iter(|| async {
            let mut results = Vec::with_capacity(100);
            for body in &requests {
                let router = create_router(state.clone());
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/calculate-payg")
                            .header("Content-Type", "application/json")
                            .body(Body::from(body.clone()))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                results.push(response);
            }
            black_box(results)
        })
    });

    group.finish();
}

/// Benchmark: Batch of 1000 withholding requests.
///
/// Target: < 500ms mean
fn bench_batch_1000(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_bench_state();

    // Pre-create 1000 different requests
    let frequencies = ["weekly", "fortnightly", "monthly", "yearly"];
    let requests: Vec<String> = (0..1000)
        .map(|i| {
            let request_json = serde_json::json!({
                "gross_amount": format!("{}.{:02}", 500 + i * 11, i % 100),
                "pay_frequency": frequencies[i % 4],
                "employee_details": {
                    "has_private_health_insurance": i % 2 == 0,
                    "marital_status": if i % 3 == 0 { "family" } else { "single" }
                }
            });
            serde_json::to_string(&request_json).unwrap()
        })
        .collect();

    let mut group = c.benchmark_group("large_batch_processing");
    group.throughput(Throughput::Elements(1000));
    // Reduce sample size for large batches to keep benchmark time reasonable
    group.sample_size(10);

    group.bench_function("batch_1000", |b| {
        b.to_async(&rt).iter(|| async {
            let mut results = Vec::with_capacity(1000);
            for body in &requests {
                let router = create_router(state.clone());
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/calculate-payg")
                            .header("Content-Type", "application/json")
                            .body(Body::from(body.clone()))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                results.push(response);
            }
            black_box(results)
        })
    });

    group.finish();
}

/// Benchmark: STP shaping across pay run sizes.
fn bench_stp_scaling(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_bench_state();

    let mut group = c.benchmark_group("stp_scaling");

    for employee_count in [1, 10, 50, 100, 250].iter() {
        let router = create_router(state.clone());
        let body = create_stp_body(*employee_count);

        group.throughput(Throughput::Elements(*employee_count as u64));
        group.bench_with_input(
            BenchmarkId::new("employees", employee_count),
            employee_count,
            |b, _| {
                b.to_async(&rt).iter(|| async {
                    let router = router.clone();
                    let response = router
                        .oneshot(
                            Request::builder()
                                .method("POST")
                                .uri("/stp-data")
                                .header("Content-Type", "application/json")
                                .body(Body::from(body.clone()))
                                .unwrap(),
                        )
                        .await
                        .unwrap();
                    black_box(response)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_direct_calculation,
    bench_single_withholding,
    bench_batch_100,
    bench_batch_1000,
    bench_stp_scaling,
);
criterion_main!(benches);
