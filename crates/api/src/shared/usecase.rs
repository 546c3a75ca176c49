use crate::error::RendezvousError;
use futures::future::{AbortHandle, Abortable, Aborted};
use rendezvous_infra::RendezvousContext;
use std::{fmt::Debug, future::Future};
use tracing::{error, warn};

#[async_trait::async_trait(?Send)]
pub trait UseCase: Debug {
    type Response;
    type Error: Debug;

    const NAME: &'static str;

    async fn execute(&mut self, ctx: &RendezvousContext) -> Result<Self::Response, Self::Error>;
}

#[tracing::instrument(name = "UseCase executed", skip(usecase, ctx), fields(usecase = %U::NAME))]
pub async fn execute<U>(mut usecase: U, ctx: &RendezvousContext) -> Result<U::Response, U::Error>
where
    U: UseCase,
{
    let res = usecase.execute(ctx).await;

    if let Err(e) = &res {
        error!("Use case error: {:?}", e);
    }

    res
}

/// Runs the `UseCase` so that it can be aborted from the outside through
/// the returned `AbortHandle`. An aborted `UseCase` stops at its next
/// await point and resolves to `RendezvousError::Cancelled`.
pub fn execute_cancellable<'a, U>(
    usecase: U,
    ctx: &'a RendezvousContext,
) -> (
    AbortHandle,
    impl Future<Output = Result<U::Response, RendezvousError>> + 'a,
)
where
    U: UseCase + 'a,
    RendezvousError: From<U::Error>,
{
    let (handle, registration) = AbortHandle::new_pair();
    let execution = Abortable::new(execute(usecase, ctx), registration);
    let fut = async move {
        match execution.await {
            Ok(res) => res.map_err(RendezvousError::from),
            Err(Aborted) => {
                warn!("Use case {} was cancelled", U::NAME);
                Err(RendezvousError::Cancelled)
            }
        }
    };
    (handle, fut)
}
