pub use eid_greetings::api::handler;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    eid_greetings::setup_logging();
    lambda_runtime::run(lambda_runtime::service_fn(handler)).await
}
