//! Aggregation engine.
//!
//! Resolves a request, fans the resolvable categories out to their providers
//! concurrently, and folds whatever succeeded into one response. A failing
//! provider only removes its own category.

use std::borrow::Cow;
use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use log::{debug, error, info, warn};
use tokio::time::Instant;

use super::provider_registry::ProviderRegistry;
use super::report::AggregateReport;
use crate::errors::{GatewayError, OmissionReason};
use crate::models::{
    AggregateRequest, AggregateResponse, Category, CategoryResult, ProviderId, ResolvedCategory,
};
use crate::provider::CategoryProvider;
use crate::resolver::{CategoryResolver, TableResolver};
use crate::settings::GatewaySettings;

/// Result of one scheduled provider call.
struct UnitOutcome {
    category: Category,
    provider_id: ProviderId,
    elapsed: Duration,
    result: Result<CategoryResult, GatewayError>,
}

/// Parallel aggregation engine.
///
/// Stateless across requests: the resolver tables are read-only and the
/// providers share a pooled HTTP client, so one instance serves every
/// request concurrently.
pub struct Aggregator {
    resolver: Arc<dyn CategoryResolver>,
    registry: ProviderRegistry,
    timeout: Duration,
}

impl Aggregator {
    pub fn new(
        resolver: Arc<dyn CategoryResolver>,
        registry: ProviderRegistry,
        timeout: Duration,
    ) -> Self {
        Self {
            resolver,
            registry,
            timeout,
        }
    }

    /// Production engine: embedded lookup tables and the three HTTP providers.
    pub fn from_settings(settings: &GatewaySettings) -> Self {
        Self::new(
            Arc::new(TableResolver::new()),
            ProviderRegistry::from_settings(settings),
            settings.timeout,
        )
    }

    /// Uniform per-call timeout applied to every provider call.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Aggregate the requested categories.
    ///
    /// Provider failures never fail the call; the affected category is left
    /// out. Only a wiring defect (see [`GatewayError::is_defect`]) is returned
    /// as an error.
    pub async fn aggregate(
        &self,
        request: &AggregateRequest,
    ) -> Result<AggregateResponse, GatewayError> {
        self.aggregate_with_report(request)
            .await
            .map(|(response, _)| response)
    }

    /// Like [`aggregate`](Self::aggregate), also returning why each omitted
    /// category is missing.
    pub async fn aggregate_with_report(
        &self,
        request: &AggregateRequest,
    ) -> Result<(AggregateResponse, AggregateReport), GatewayError> {
        let normalized = self.resolver.normalize(request);
        let mut report = AggregateReport::new();

        for dropped in normalized.dropped {
            debug!(
                "Omitting category '{}': unknown identifier '{}'",
                dropped.category, dropped.identifier
            );
            report.record_omitted(
                dropped.category,
                None,
                OmissionReason::UnknownIdentifier {
                    identifier: dropped.identifier,
                },
                None,
            );
        }

        let mut units = Vec::with_capacity(normalized.resolved.len());
        for resolved in normalized.resolved {
            match self.registry.get(resolved.category) {
                Some(provider) => units.push(self.run_unit(Arc::clone(provider), resolved)),
                None => {
                    warn!(
                        "Omitting category '{}': no provider registered",
                        resolved.category
                    );
                    report.record_omitted(
                        resolved.category,
                        None,
                        OmissionReason::NoProvider,
                        None,
                    );
                }
            }
        }

        // Settle all units; a failure never short-circuits its siblings.
        let outcomes = join_all(units).await;

        let mut response = AggregateResponse::new();
        let mut defect: Option<GatewayError> = None;

        for UnitOutcome {
            category,
            provider_id,
            elapsed,
            result,
        } in outcomes
        {
            match result {
                Ok(result) if !result.is_empty() => {
                    debug!(
                        "Category '{}' fetched from '{}' in {:?}",
                        category, provider_id, elapsed
                    );
                    response.insert(category, result);
                    report.record_included(category, provider_id, elapsed);
                }
                Ok(_) => {
                    warn!(
                        "Omitting category '{}': provider '{}' returned no fields",
                        category, provider_id
                    );
                    report.record_omitted(
                        category,
                        Some(provider_id),
                        OmissionReason::EmptyResult,
                        Some(elapsed),
                    );
                }
                Err(e) if e.is_defect() => {
                    error!(
                        "Category '{}' hit a defect in provider '{}': {}",
                        category, provider_id, e
                    );
                    report.record_omitted(
                        category,
                        Some(provider_id),
                        e.omission_reason(),
                        Some(elapsed),
                    );
                    defect.get_or_insert(e);
                }
                Err(e) => {
                    warn!(
                        "Omitting category '{}': provider '{}' failed after {:?}: {}",
                        category, provider_id, elapsed, e
                    );
                    report.record_omitted(
                        category,
                        Some(provider_id),
                        e.omission_reason(),
                        Some(elapsed),
                    );
                }
            }
        }

        if let Some(e) = defect {
            return Err(e);
        }

        info!(
            "Aggregated {}/{} requested categories [{}]",
            report.included().len(),
            report.attempts.len(),
            report.summary()
        );

        Ok((response, report))
    }

    /// Run one provider call under the shared timeout.
    async fn run_unit(
        &self,
        provider: Arc<dyn CategoryProvider>,
        resolved: ResolvedCategory,
    ) -> UnitOutcome {
        let started = Instant::now();
        let result = match tokio::time::timeout(self.timeout, provider.fetch(&resolved.params)).await
        {
            Ok(result) => result,
            Err(_) => Err(GatewayError::Timeout {
                provider: provider.id().to_string(),
            }),
        };

        UnitOutcome {
            category: resolved.category,
            provider_id: Cow::Borrowed(provider.id()),
            elapsed: started.elapsed(),
            result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NormalizedParams;
    use async_trait::async_trait;
    use serde_json::{json, Number};

    enum Behavior {
        Succeed(CategoryResult),
        Fail(fn() -> GatewayError),
    }

    struct FakeProvider {
        category: Category,
        delay: Duration,
        behavior: Behavior,
    }

    #[async_trait]
    impl CategoryProvider for FakeProvider {
        fn id(&self) -> &'static str {
            match self.category {
                Category::Economy => "FAKE_ECONOMY",
                Category::Weather => "FAKE_WEATHER",
                Category::AirQuality => "FAKE_AIR",
            }
        }

        fn category(&self) -> Category {
            self.category
        }

        async fn fetch(&self, _params: &NormalizedParams) -> Result<CategoryResult, GatewayError> {
            tokio::time::sleep(self.delay).await;
            match &self.behavior {
                Behavior::Succeed(result) => Ok(result.clone()),
                Behavior::Fail(make_error) => Err(make_error()),
            }
        }
    }

    fn economy_result() -> CategoryResult {
        CategoryResult::new().with_field("btc_usd", Some(Number::from(68421)))
    }

    fn weather_result() -> CategoryResult {
        CategoryResult::new()
            .with_field("temperature", Some(Number::from(22)))
            .with_field("wind_speed", Number::from_f64(15.2))
    }

    fn air_result() -> CategoryResult {
        CategoryResult::new().with_field("pm10", Some(Number::from(45)))
    }

    fn fake(category: Category, delay_ms: u64, behavior: Behavior) -> Arc<dyn CategoryProvider> {
        Arc::new(FakeProvider {
            category,
            delay: Duration::from_millis(delay_ms),
            behavior,
        })
    }

    fn all_succeeding(delays: [u64; 3]) -> ProviderRegistry {
        ProviderRegistry::new()
            .with_provider(fake(
                Category::Economy,
                delays[0],
                Behavior::Succeed(economy_result()),
            ))
            .with_provider(fake(
                Category::Weather,
                delays[1],
                Behavior::Succeed(weather_result()),
            ))
            .with_provider(fake(
                Category::AirQuality,
                delays[2],
                Behavior::Succeed(air_result()),
            ))
    }

    fn engine(registry: ProviderRegistry, timeout: Duration) -> Aggregator {
        Aggregator::new(Arc::new(TableResolver::new()), registry, timeout)
    }

    fn full_request() -> AggregateRequest {
        AggregateRequest::new()
            .with_economy("btc")
            .with_weather("algeria")
            .with_air_quality("algeria")
    }

    #[tokio::test(start_paused = true)]
    async fn test_all_categories_succeed() {
        let aggregator = engine(all_succeeding([10, 10, 10]), Duration::from_secs(10));

        let (response, report) = aggregator
            .aggregate_with_report(&full_request())
            .await
            .unwrap();

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "economy": {"btc_usd": 68421},
                "weather": {"temperature": 22, "wind_speed": 15.2},
                "air": {"pm10": 45}
            })
        );
        assert_eq!(report.included().len(), 3);
        assert!(report.omitted().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_absent_categories_never_appear() {
        let aggregator = engine(all_succeeding([10, 10, 10]), Duration::from_secs(10));
        let request = AggregateRequest::new()
            .with_weather("algeria")
            .with_air_quality("algeria");

        let response = aggregator.aggregate(&request).await.unwrap();

        assert_eq!(
            response.categories(),
            vec![Category::Weather, Category::AirQuality]
        );
        assert!(response.economy.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_unknown_asset_omits_only_economy() {
        let aggregator = engine(all_succeeding([10, 10, 10]), Duration::from_secs(10));
        let request = AggregateRequest::new()
            .with_economy("doge")
            .with_weather("algeria");

        let (response, report) = aggregator.aggregate_with_report(&request).await.unwrap();

        assert_eq!(response.categories(), vec![Category::Weather]);
        assert_eq!(
            report.omission_reason(Category::Economy),
            Some(&OmissionReason::UnknownIdentifier {
                identifier: "doge".to_string()
            })
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_unknown_asset_alone_yields_empty_response() {
        let aggregator = engine(all_succeeding([10, 10, 10]), Duration::from_secs(10));
        let request = AggregateRequest::new().with_economy("doge");

        let response = aggregator.aggregate(&request).await.unwrap();

        assert!(response.is_empty());
        assert_eq!(serde_json::to_string(&response).unwrap(), "{}");
    }

    #[tokio::test(start_paused = true)]
    async fn test_failing_provider_omits_only_its_category() {
        let registry = all_succeeding([10, 10, 10]).with_provider(fake(
            Category::Weather,
            10,
            Behavior::Fail(|| GatewayError::HttpStatus {
                provider: "FAKE_WEATHER".to_string(),
                status: 500,
            }),
        ));
        let aggregator = engine(registry, Duration::from_secs(10));

        let (response, report) = aggregator
            .aggregate_with_report(&full_request())
            .await
            .unwrap();

        assert_eq!(
            response.categories(),
            vec![Category::Economy, Category::AirQuality]
        );
        assert_eq!(
            report.omission_reason(Category::Weather),
            Some(&OmissionReason::HttpStatus { status: 500 })
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_latency_is_bounded_by_slowest_unit() {
        let aggregator = engine(all_succeeding([100, 200, 300]), Duration::from_secs(10));

        let started = Instant::now();
        let response = aggregator.aggregate(&full_request()).await.unwrap();
        let elapsed = started.elapsed();

        assert_eq!(response.categories().len(), 3);
        assert!(elapsed >= Duration::from_millis(300));
        assert!(elapsed < Duration::from_millis(600), "elapsed {:?}", elapsed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_latency_for_each_fan_out_width() {
        let requests = [
            AggregateRequest::new().with_economy("btc"),
            AggregateRequest::new()
                .with_economy("btc")
                .with_weather("algeria"),
            full_request(),
        ];

        for (index, request) in requests.iter().enumerate() {
            let aggregator = engine(all_succeeding([250, 250, 250]), Duration::from_secs(10));
            let started = Instant::now();
            let response = aggregator.aggregate(request).await.unwrap();
            let elapsed = started.elapsed();

            assert_eq!(response.categories().len(), index + 1);
            assert!(elapsed < Duration::from_millis(500), "elapsed {:?}", elapsed);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_does_not_delay_siblings() {
        let registry = all_succeeding([100, 100, 100]).with_provider(fake(
            Category::Weather,
            60_000,
            Behavior::Succeed(weather_result()),
        ));
        let aggregator = engine(registry, Duration::from_secs(1));

        let started = Instant::now();
        let (response, report) = aggregator
            .aggregate_with_report(&full_request())
            .await
            .unwrap();
        let elapsed = started.elapsed();

        assert_eq!(
            response.categories(),
            vec![Category::Economy, Category::AirQuality]
        );
        assert_eq!(
            report.omission_reason(Category::Weather),
            Some(&OmissionReason::Timeout)
        );
        assert!(elapsed < Duration::from_secs(2), "elapsed {:?}", elapsed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_result_is_omitted() {
        let registry = all_succeeding([10, 10, 10]).with_provider(fake(
            Category::AirQuality,
            10,
            Behavior::Succeed(CategoryResult::new()),
        ));
        let aggregator = engine(registry, Duration::from_secs(10));

        let (response, report) = aggregator
            .aggregate_with_report(&full_request())
            .await
            .unwrap();

        assert!(!response.contains(Category::AirQuality));
        assert_eq!(
            report.omission_reason(Category::AirQuality),
            Some(&OmissionReason::EmptyResult)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_all_providers_failing_is_not_an_error() {
        let failing = || GatewayError::Timeout {
            provider: "FAKE".to_string(),
        };
        let registry = ProviderRegistry::new()
            .with_provider(fake(Category::Economy, 10, Behavior::Fail(failing)))
            .with_provider(fake(Category::Weather, 10, Behavior::Fail(failing)))
            .with_provider(fake(Category::AirQuality, 10, Behavior::Fail(failing)));
        let aggregator = engine(registry, Duration::from_secs(10));

        let response = aggregator.aggregate(&full_request()).await.unwrap();

        assert!(response.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_missing_provider_is_omitted() {
        let registry = ProviderRegistry::new().with_provider(fake(
            Category::Economy,
            10,
            Behavior::Succeed(economy_result()),
        ));
        let aggregator = engine(registry, Duration::from_secs(10));

        let (response, report) = aggregator
            .aggregate_with_report(&full_request())
            .await
            .unwrap();

        assert_eq!(response.categories(), vec![Category::Economy]);
        assert_eq!(
            report.omission_reason(Category::Weather),
            Some(&OmissionReason::NoProvider)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_defect_propagates() {
        let registry = all_succeeding([10, 10, 10]).with_provider(fake(
            Category::Economy,
            10,
            Behavior::Fail(|| GatewayError::ParamsMismatch {
                provider: "FAKE_ECONOMY".to_string(),
                params: "Location".to_string(),
            }),
        ));
        let aggregator = engine(registry, Duration::from_secs(10));

        let error = aggregator.aggregate(&full_request()).await.unwrap_err();

        assert!(error.is_defect());
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_request_yields_empty_response() {
        let aggregator = engine(all_succeeding([10, 10, 10]), Duration::from_secs(10));

        let (response, report) = aggregator
            .aggregate_with_report(&AggregateRequest::new())
            .await
            .unwrap();

        assert!(response.is_empty());
        assert!(report.attempts.is_empty());
    }
}
