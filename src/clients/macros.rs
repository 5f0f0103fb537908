macro_rules! impl_client_new {
    ($client_name:ident, $entity:ty) => {
        impl $client_name {
            pub fn new(inner: $crate::actor_framework::ResourceClient<$entity>) -> Self {
                Self { inner }
            }
        }
    };
}

macro_rules! impl_client_fetch {
    ($client_name:ident, $entity:ty, $error:ty, $collection:ident) => {
        paste::paste! {
            impl $client_name {
                /// Fetches a copy of the whole collection.
                #[tracing::instrument(skip(self))]
                pub async fn [<fetch_ $collection>](&self) -> Result<Vec<$entity>, $error> {
                    tracing::debug!("Sending request");
                    self.inner.list().await.map_err(<$error>::from)
                }
            }
        }
    };
}

macro_rules! impl_basic_client {
    ($client_name:ident, $entity:ty, $error:ty, $collection:ident) => {
        impl_client_new!($client_name, $entity);
        impl_client_fetch!($client_name, $entity, $error, $collection);
    };
}
