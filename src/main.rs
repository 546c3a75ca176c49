mod telemetry;

use rendezvous_api::{account, service};
use rendezvous_infra::setup_context;
use telemetry::{get_subscriber, init_subscriber};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("rendezvous".into(), "info".into());
    init_subscriber(subscriber);

    let ctx = setup_context().await?;

    let services = service::list_services(&ctx, Default::default()).await?;
    let categories = service::get_categories(&ctx).await?;
    info!(
        "Catalogue has {} services in {} categories: {}",
        services.len(),
        categories.len(),
        categories.join(", ")
    );
    let bookings = ctx.repos.bookings.find_all().await;
    info!("{} bookings in storage", bookings.len());

    match account::current_session(&ctx).await? {
        Some(session) => info!(
            "Signed in as {} ({})",
            session.user.display_name(),
            session.user_type()
        ),
        None => info!("Nobody is signed in"),
    }

    Ok(())
}
