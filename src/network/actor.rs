//! Network actor - runs API calls in the Tokio async runtime

use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::auth::AuthService;
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::client::ApiClient;

/// Network actor that turns commands into API calls
pub struct NetworkActor {
    api: ApiClient,
    auth: Arc<dyn AuthService>,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_requests: JoinSet<()>,
}

impl NetworkActor {
    pub fn new(
        api: ApiClient,
        auth: Arc<dyn AuthService>,
        response_tx: mpsc::UnboundedSender<NetworkResponse>,
    ) -> Self {
        NetworkActor {
            api,
            auth,
            response_tx,
            active_requests: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::FetchReview { seq, application_id, token }) => {
                            let response_tx = self.response_tx.clone();
                            let api = self.api.clone();

                            self.active_requests.spawn(async move {
                                tracing::info!(seq, application_id = %application_id, "Fetching application");
                                let start = Instant::now();
                                let result = api.fetch_review(&application_id, token.as_deref()).await;
                                let time_ms = start.elapsed().as_millis() as u64;

                                let response = match result {
                                    Ok(bundle) => NetworkResponse::ReviewLoaded {
                                        seq,
                                        bundle: Box::new(bundle),
                                        time_ms,
                                    },
                                    Err(e) => {
                                        tracing::warn!(seq, application_id = %application_id, error = %e, "Failed to load application");
                                        NetworkResponse::ReviewFailed {
                                            seq,
                                            message: e.to_string(),
                                            time_ms,
                                        }
                                    }
                                };
                                let _ = response_tx.send(response);
                            });
                        }

                        Some(NetworkCommand::SubmitRegistration { id, form }) => {
                            let response_tx = self.response_tx.clone();
                            let api = self.api.clone();

                            self.active_requests.spawn(async move {
                                tracing::info!(id, "Submitting registration");
                                let outcome = api.register(&form).await;
                                tracing::info!(id, outcome = ?outcome, "Registration completed");
                                let _ = response_tx.send(NetworkResponse::RegistrationFinished { id, outcome });
                            });
                        }

                        Some(NetworkCommand::Login { id, credentials }) => {
                            let response_tx = self.response_tx.clone();
                            let login = self.auth.login(credentials);

                            self.active_requests.spawn(async move {
                                let outcome = login.await;
                                let _ = response_tx.send(NetworkResponse::LoginFinished { id, outcome });
                            });
                        }

                        Some(NetworkCommand::Shutdown) | None => {
                            self.active_requests.abort_all();
                            break;
                        }
                    }
                }

                // Clean up completed tasks
                Some(_result) = self.active_requests.join_next() => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::LoginOutcome;
    use crate::models::Credentials;
    use futures_util::future::{BoxFuture, FutureExt};

    struct NoAccountAuth;

    impl AuthService for NoAccountAuth {
        fn login(&self, _credentials: Credentials) -> BoxFuture<'static, LoginOutcome> {
            async { LoginOutcome::NoAccount }.boxed()
        }
    }

    #[tokio::test]
    async fn test_login_goes_through_injected_service() {
        let (resp_tx, mut resp_rx) = mpsc::unbounded_channel();
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let api = ApiClient::new(reqwest::Client::new(), "http://127.0.0.1:9");
        let actor = NetworkActor::new(api, Arc::new(NoAccountAuth), resp_tx);
        let handle = tokio::spawn(actor.run(cmd_rx));

        cmd_tx
            .send(NetworkCommand::Login {
                id: 7,
                credentials: Credentials { username: "a".into(), password: "b".into() },
            })
            .unwrap();

        match resp_rx.recv().await {
            Some(NetworkResponse::LoginFinished { id, outcome }) => {
                assert_eq!(id, 7);
                assert_eq!(outcome, LoginOutcome::NoAccount);
            }
            other => panic!("unexpected response: {:?}", other),
        }

        cmd_tx.send(NetworkCommand::Shutdown).unwrap();
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_unreachable_backend_reports_review_failure() {
        let (resp_tx, mut resp_rx) = mpsc::unbounded_channel();
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let api = ApiClient::new(reqwest::Client::new(), "http://127.0.0.1:9");
        tokio::spawn(NetworkActor::new(api, Arc::new(NoAccountAuth), resp_tx).run(cmd_rx));

        cmd_tx
            .send(NetworkCommand::FetchReview { seq: 3, application_id: "1".into(), token: None })
            .unwrap();

        match resp_rx.recv().await {
            Some(NetworkResponse::ReviewFailed { seq, .. }) => assert_eq!(seq, 3),
            other => panic!("unexpected response: {:?}", other),
        }
    }
}
