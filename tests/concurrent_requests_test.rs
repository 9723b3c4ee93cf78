mod common;

use artisan_pricing::domain::pricing::PredictionResult;
use artisan_pricing::infrastructure::model_store::ModelStore;
use common::{cleanup, scratch_model_path, spawn_server};
use futures::future::join_all;
use serde_json::{Value, json};

/// 100 simultaneous requests with distinct inputs each get their own price.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_requests_are_independent() {
    let model_path = scratch_model_path("concurrent");
    let server = spawn_server(&model_path, "reject").await;
    let model = ModelStore::new(&model_path)
        .load()
        .unwrap()
        .expect("fallback artifact persisted")
        .model();

    let client = reqwest::Client::new();
    let url = server.url("/predict-price");

    let inputs: Vec<(i64, f64, f64)> = (0..100)
        .map(|i| {
            let complexity = 1 + (i % 5) as i64;
            let demand = (i % 11) as f64 / 10.0;
            let rating = 1.0 + (i % 9) as f64 * 0.5;
            (complexity, demand, rating)
        })
        .collect();

    let requests = inputs.iter().map(|&(complexity, demand, rating)| {
        let client = client.clone();
        let url = url.clone();
        async move {
            let response = client
                .post(&url)
                .json(&json!({ "complexity": complexity, "demand": demand, "rating": rating }))
                .send()
                .await
                .unwrap();
            assert!(response.status().is_success());
            response.json::<Value>().await.unwrap()["suggested_price"]
                .as_f64()
                .unwrap()
        }
    });

    let prices = join_all(requests).await;

    for (&(complexity, demand, rating), price) in inputs.iter().zip(prices) {
        let raw = model
            .predict(&[complexity as f64, demand, rating])
            .unwrap();
        let expected = PredictionResult::from_raw(raw).suggested_price;
        assert!(price >= 50.0);
        assert!(
            (price - expected).abs() < 1e-9,
            "({complexity}, {demand}, {rating}): expected {expected}, got {price}"
        );
    }

    server.stop().await;
    cleanup(&model_path);
}
