// Shared by every integration test binary; each uses a different subset.
#![allow(dead_code)]

pub mod factory;
pub mod suite;

pub use factory::ProductFactory;

/// Expands the full product-model suite against one backend.
///
/// `setup` is an async fn returning a repository over an empty `products`
/// table. Extra attributes are applied to every generated test.
macro_rules! product_model_tests {
    ($(#[$meta:meta])* setup = $setup:path) => {
        #[tokio::test]
        $(#[$meta])*
        async fn add_a_product() {
            crate::common::suite::add_a_product(&$setup().await).await;
        }

        #[tokio::test]
        $(#[$meta])*
        async fn read_a_product() {
            crate::common::suite::read_a_product(&$setup().await).await;
        }

        #[tokio::test]
        $(#[$meta])*
        async fn update_a_product() {
            crate::common::suite::update_a_product(&$setup().await).await;
        }

        #[tokio::test]
        $(#[$meta])*
        async fn update_without_id_is_rejected() {
            crate::common::suite::update_without_id_is_rejected(&$setup().await).await;
        }

        #[tokio::test]
        $(#[$meta])*
        async fn update_of_deleted_product_is_not_found() {
            crate::common::suite::update_of_deleted_product_is_not_found(&$setup().await).await;
        }

        #[tokio::test]
        $(#[$meta])*
        async fn delete_a_product() {
            crate::common::suite::delete_a_product(&$setup().await).await;
        }

        #[tokio::test]
        $(#[$meta])*
        async fn list_all_products() {
            crate::common::suite::list_all_products(&$setup().await).await;
        }

        #[tokio::test]
        $(#[$meta])*
        async fn find_unknown_id_returns_none() {
            crate::common::suite::find_unknown_id_returns_none(&$setup().await).await;
        }

        #[tokio::test]
        $(#[$meta])*
        async fn find_by_name() {
            crate::common::suite::find_by_name(&$setup().await).await;
        }

        #[tokio::test]
        $(#[$meta])*
        async fn find_by_availability() {
            crate::common::suite::find_by_availability(&$setup().await).await;
        }

        #[tokio::test]
        $(#[$meta])*
        async fn find_by_category() {
            crate::common::suite::find_by_category(&$setup().await).await;
        }

        #[tokio::test]
        $(#[$meta])*
        async fn find_by_price() {
            crate::common::suite::find_by_price(&$setup().await).await;
        }

        #[tokio::test]
        $(#[$meta])*
        async fn finders_return_every_match() {
            crate::common::suite::finders_return_every_match(&$setup().await).await;
        }

        #[tokio::test]
        $(#[$meta])*
        async fn deserialized_product_survives_storage() {
            crate::common::suite::deserialized_product_survives_storage(&$setup().await).await;
        }
    };
}

pub(crate) use product_model_tests;
