use tracing::{debug, instrument};

use crate::actor_framework::ResourceClient;
use crate::domain::{NewTrainer, User, UserCreate, UserRole};
use crate::user_actor::UserError;

/// Client for interacting with the User actor.
///
/// Trainers and clients share one collection; the role-specific methods only
/// differ in the role they accept.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl_basic_client!(UserClient, User, UserError, users);

impl UserClient {
    #[instrument(skip(self), fields(trainer_name = %trainer.name))]
    pub async fn add_trainer(&self, trainer: NewTrainer) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner
            .create(UserCreate::from(trainer))
            .await
            .map_err(UserError::from)
    }

    #[instrument(skip(self, trainer), fields(user_id = %trainer.id))]
    pub async fn update_trainer(&self, trainer: User) -> Result<User, UserError> {
        debug!("Sending request");
        self.replace(trainer, UserRole::Trainer).await
    }

    #[instrument(skip(self))]
    pub async fn delete_trainer(&self, id: String) -> Result<String, UserError> {
        debug!("Sending request");
        self.inner
            .delete(id, Some(UserRole::Trainer))
            .await
            .map_err(UserError::from)
    }

    #[instrument(skip(self, client), fields(user_id = %client.id))]
    pub async fn update_client(&self, client: User) -> Result<User, UserError> {
        debug!("Sending request");
        self.replace(client, UserRole::Client).await
    }

    async fn replace(&self, user: User, expected: UserRole) -> Result<User, UserError> {
        if user.role != expected {
            return Err(UserError::ValidationError(format!(
                "{} has role {:?}, expected {:?}",
                user.id, user.role, expected
            )));
        }
        self.inner
            .update(user.id.clone(), user)
            .await
            .map_err(UserError::from)
    }
}
