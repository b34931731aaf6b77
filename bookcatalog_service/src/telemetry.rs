// Based on https://github.com/LukeMathWalker/tracing-actix-web/blob/main/examples/opentelemetry/src/main.rs#L15
use anyhow::Context;
use opentelemetry::global;
use opentelemetry_sdk::propagation::TraceContextPropagator;
use opentelemetry_sdk::runtime::TokioCurrentThread;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, Registry};

/// Installs the global `tracing` subscriber: bunyan json logs on stdout and,
/// when `jaeger_enabled`, spans exported to a jaeger agent
pub fn init_telemetry(app_name: &str, jaeger_enabled: bool) -> anyhow::Result<()> {
    global::set_text_map_propagator(TraceContextPropagator::new());

    let telemetry = if jaeger_enabled {
        // Spans are exported in batch
        #[allow(deprecated)]
        let tracer = opentelemetry_jaeger::new_agent_pipeline()
            .with_service_name(app_name)
            .install_batch(TokioCurrentThread)
            .context("Failed to install OpenTelemetry tracer")?;
        Some(tracing_opentelemetry::layer().with_tracer(tracer))
    } else {
        None
    };

    // Tunable via `RUST_LOG` env variable
    let env_filter = EnvFilter::try_from_default_env().unwrap_or(EnvFilter::new("info"));
    let formatting_layer = BunyanFormattingLayer::new(app_name.into(), std::io::stdout);
    let subscriber = Registry::default()
        .with(env_filter)
        .with(telemetry)
        .with(JsonStorageLayer)
        .with(formatting_layer);
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install `tracing` subscriber")
}
