//! # Mock Framework
//!
//! Utilities for testing clients and the controller without a running actor.
//!
//! Use [`create_mock_client`] to get a client and the receiving end of its
//! channel, then answer each request with helpers like [`expect_list`] or
//! [`expect_delete`]. Responding with an `Err` simulates a failing backend,
//! which the in-memory store never does on its own.

use tokio::sync::mpsc;

use crate::actor_framework::{Entity, ResourceClient, ResourceRequest, Response};

/// Creates a mock client and a receiver for asserting requests.
///
/// The client sends to a channel the test controls, so every request can be
/// inspected and answered (success, failure, or not at all) deterministically.
pub fn create_mock_client<T: Entity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a List request
pub async fn expect_list<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<Response<Vec<T>>> {
    match receiver.recv().await {
        Some(ResourceRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::CreatePayload, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { payload, respond_to }) => Some((payload, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Update request
pub async fn expect_update<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Patch, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Update { id, patch, respond_to }) => Some((id, patch, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Delete request
pub async fn expect_delete<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Response<T::Id>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Delete { id, respond_to, .. }) => Some((id, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor_framework::FrameworkError;
    use crate::clients::PackageClient;
    use crate::domain::{Package, PackageCreate, TrainingType};
    use crate::package_actor::PackageError;

    #[tokio::test]
    async fn test_mock_client() {
        let (inner, mut receiver) = create_mock_client::<Package>(10);
        let client = PackageClient::new(inner);

        // Test Create
        let create_task = tokio::spawn(async move {
            client
                .add_package(PackageCreate {
                    name: "Test".to_string(),
                    training_type: TrainingType::Ems,
                    sessions: 8,
                    price: 900.0,
                    trainer_id: None,
                })
                .await
        });

        let (payload, responder) = expect_create(&mut receiver).await.expect("Expected Create request");
        assert_eq!(payload.name, "Test");
        let created = Package::new("p1", payload.name, payload.training_type, payload.sessions, payload.price);
        responder.send(Ok(created.clone())).unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(result, Ok(created));
    }

    #[tokio::test]
    async fn test_injected_failure_reaches_caller() {
        let (inner, mut receiver) = create_mock_client::<Package>(10);
        let client = PackageClient::new(inner);

        let delete_task = tokio::spawn(async move { client.delete_package("p1".into()).await });

        let (id, responder) = expect_delete(&mut receiver).await.expect("Expected Delete request");
        assert_eq!(id, "p1");
        responder.send(Err(FrameworkError::NotFound(id))).unwrap();

        let result = delete_task.await.unwrap();
        assert_eq!(result, Err(PackageError::NotFound("p1".into())));
    }

    #[tokio::test]
    async fn test_client_update_is_forwarded_whole() {
        use crate::clients::UserClient;
        use crate::domain::User;
        use chrono::NaiveDate;

        let (inner, mut receiver) = create_mock_client::<User>(10);
        let client = UserClient::new(inner);
        let day = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let edited = User::client("c1", "Fatima", "Riyadh", Some("p2".into()), Some(0), day);

        let sent = edited.clone();
        let update_task = tokio::spawn(async move { client.update_client(sent).await });

        let (id, patch, responder) = expect_update(&mut receiver).await.expect("Expected Update request");
        assert_eq!(id, "c1");
        assert_eq!(patch, edited);
        responder.send(Ok(patch)).unwrap();

        assert_eq!(update_task.await.unwrap(), Ok(edited));
    }
}
