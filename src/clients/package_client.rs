use tracing::{debug, instrument};

use crate::actor_framework::ResourceClient;
use crate::domain::{Package, PackageCreate};
use crate::package_actor::PackageError;

/// Client for interacting with the Package actor.
#[derive(Clone)]
pub struct PackageClient {
    inner: ResourceClient<Package>,
}

impl_basic_client!(PackageClient, Package, PackageError, packages);

impl PackageClient {
    #[instrument(skip(self), fields(package_name = %package.name))]
    pub async fn add_package(&self, package: PackageCreate) -> Result<Package, PackageError> {
        debug!("Sending request");
        self.inner.create(package).await.map_err(PackageError::from)
    }

    #[instrument(skip(self, package), fields(package_id = %package.id))]
    pub async fn update_package(&self, package: Package) -> Result<Package, PackageError> {
        debug!("Sending request");
        self.inner
            .update(package.id.clone(), package)
            .await
            .map_err(PackageError::from)
    }

    /// Clients still pointing at the package keep their `package_id`.
    #[instrument(skip(self))]
    pub async fn delete_package(&self, id: String) -> Result<String, PackageError> {
        debug!("Sending request");
        self.inner.delete(id, ()).await.map_err(PackageError::from)
    }
}
