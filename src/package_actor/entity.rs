use crate::actor_framework::Entity;
use crate::domain::{Package, PackageCreate};

impl Entity for Package {
    type Id = String;
    type CreatePayload = PackageCreate;
    type Patch = Package;
    type DeleteGuard = ();

    fn id(&self) -> &String {
        &self.id
    }

    /// Creates a new Package from creation parameters.
    ///
    /// # Errors
    /// Rejects an empty name and a negative or non-finite price.
    fn from_create(id: String, params: PackageCreate) -> Result<Self, String> {
        let package = Self {
            id,
            name: params.name,
            training_type: params.training_type,
            sessions: params.sessions,
            price: params.price,
            trainer_id: params.trainer_id,
        };
        validate(&package)?;
        Ok(package)
    }

    fn on_update(&mut self, patch: Package) -> Result<(), String> {
        let replacement = Package {
            id: self.id.clone(),
            ..patch
        };
        validate(&replacement)?;
        *self = replacement;
        Ok(())
    }
}

fn validate(package: &Package) -> Result<(), String> {
    if package.name.trim().is_empty() {
        return Err("package name must not be empty".to_string());
    }
    if !package.price.is_finite() || package.price < 0.0 {
        return Err(format!("invalid price: {}", package.price));
    }
    Ok(())
}
