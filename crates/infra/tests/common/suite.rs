//! Backend-agnostic product model scenarios.
//!
//! Every function expects a repository over an empty `products` table.

use serde_json::json;

use catalog_core::{DataValidationError, ProductId};
use catalog_products::{CatalogError, Category, Price, Product, ProductRepository};

use super::ProductFactory;

fn assert_same_attributes(actual: &Product, expected: &Product) {
    assert_eq!(actual.name, expected.name);
    assert_eq!(actual.description, expected.description);
    assert_eq!(actual.price.amount(), expected.price.amount());
    assert_eq!(actual.available, expected.available);
    assert_eq!(actual.category, expected.category);
}

async fn create_batch<R: ProductRepository>(repo: &R, size: usize) -> Vec<Product> {
    let mut products = ProductFactory::new().build_batch(size);
    for product in &mut products {
        product.create(repo).await.unwrap();
    }
    products
}

pub async fn add_a_product<R: ProductRepository>(repo: &R) {
    assert!(Product::all(repo).await.unwrap().is_empty());

    let mut product = ProductFactory::new().build();
    product.id = None;
    product.create(repo).await.unwrap();
    assert!(product.id.is_some());

    let products = Product::all(repo).await.unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].id, product.id);
    assert_same_attributes(&products[0], &product);
}

pub async fn read_a_product<R: ProductRepository>(repo: &R) {
    let mut product = ProductFactory::new().build();
    product.create(repo).await.unwrap();
    let id = product.id.expect("create assigns an id");

    let found = Product::find(repo, id).await.unwrap().expect("stored product");
    assert_eq!(found.id, Some(id));
    assert_same_attributes(&found, &product);
}

pub async fn update_a_product<R: ProductRepository>(repo: &R) {
    let mut products = create_batch(repo, 2).await;
    let bystander = products.pop().unwrap();
    let mut product = products.pop().unwrap();
    let original_id = product.id;

    product.description = "testing".to_string();
    product.price = Price::from_cents(4_200);
    product.update(repo).await.unwrap();
    assert_eq!(product.id, original_id);

    let stored = Product::find(repo, original_id.unwrap()).await.unwrap().unwrap();
    assert_eq!(stored.description, "testing");
    assert_eq!(stored.price, Price::from_cents(4_200));

    let untouched = Product::find(repo, bystander.id.unwrap()).await.unwrap().unwrap();
    assert_eq!(untouched, bystander);
    assert_eq!(Product::all(repo).await.unwrap().len(), 2);
}

pub async fn update_without_id_is_rejected<R: ProductRepository>(repo: &R) {
    create_batch(repo, 2).await;
    let before = Product::all(repo).await.unwrap();

    let mut product = ProductFactory::new().build();
    product.id = None;
    let err = product.update(repo).await.unwrap_err();

    assert!(matches!(
        err,
        CatalogError::Validation(DataValidationError::MissingId { .. })
    ));
    assert_eq!(Product::all(repo).await.unwrap(), before);
}

pub async fn update_of_deleted_product_is_not_found<R: ProductRepository>(repo: &R) {
    let mut product = ProductFactory::new().build();
    product.create(repo).await.unwrap();
    product.delete(repo).await.unwrap();

    let err = product.update(repo).await.unwrap_err();
    assert!(matches!(err, CatalogError::NotFound(id) if Some(id) == product.id));
    assert!(Product::all(repo).await.unwrap().is_empty());
}

pub async fn delete_a_product<R: ProductRepository>(repo: &R) {
    let mut products = create_batch(repo, 2).await;
    let bystander = products.pop().unwrap();
    let product = products.pop().unwrap();
    assert_eq!(Product::all(repo).await.unwrap().len(), 2);

    product.delete(repo).await.unwrap();
    assert_eq!(Product::all(repo).await.unwrap(), vec![bystander.clone()]);

    // Row already gone: no error, nothing else removed.
    product.delete(repo).await.unwrap();
    assert_eq!(Product::all(repo).await.unwrap(), vec![bystander]);
}

pub async fn list_all_products<R: ProductRepository>(repo: &R) {
    assert!(Product::all(repo).await.unwrap().is_empty());

    let created = create_batch(repo, 5).await;

    let products = Product::all(repo).await.unwrap();
    assert_eq!(products.len(), 5);
    let ids: Vec<_> = products.iter().map(|p| p.id).collect();
    let expected: Vec<_> = created.iter().map(|p| p.id).collect();
    assert_eq!(ids, expected);
}

pub async fn find_unknown_id_returns_none<R: ProductRepository>(repo: &R) {
    create_batch(repo, 1).await;
    assert_eq!(Product::find(repo, ProductId::new(i64::MAX)).await.unwrap(), None);
}

pub async fn find_by_name<R: ProductRepository>(repo: &R) {
    let products = create_batch(repo, 5).await;
    let name = products[0].name.clone();
    let count = products.iter().filter(|p| p.name == name).count() as u64;

    let found = Product::find_by_name(repo, name.clone());
    assert_eq!(found.count().await.unwrap(), count);
    for product in found.fetch_all().await.unwrap() {
        assert_eq!(product.name, name);
    }
}

pub async fn find_by_availability<R: ProductRepository>(repo: &R) {
    let products = create_batch(repo, 10).await;
    let available = products[0].available;
    let count = products.iter().filter(|p| p.available == available).count() as u64;

    let found = Product::find_by_availability(repo, available);
    assert_eq!(found.count().await.unwrap(), count);
    let rows = found.fetch_all().await.unwrap();
    assert_eq!(rows.len() as u64, count);
    for product in rows {
        assert_eq!(product.available, available);
    }
}

pub async fn find_by_category<R: ProductRepository>(repo: &R) {
    let products = create_batch(repo, 10).await;
    let category = products[0].category;
    let count = products.iter().filter(|p| p.category == category).count() as u64;

    let found = Product::find_by_category(repo, category);
    assert_eq!(found.count().await.unwrap(), count);
    for product in found.fetch_all().await.unwrap() {
        assert_eq!(product.category, category);
    }

    let absent = Category::ALL
        .into_iter()
        .find(|c| products.iter().all(|p| p.category != *c));
    if let Some(absent) = absent {
        assert_eq!(Product::find_by_category(repo, absent).count().await.unwrap(), 0);
    }
}

pub async fn find_by_price<R: ProductRepository>(repo: &R) {
    let products = create_batch(repo, 10).await;
    let price = products[0].price;
    let count = products.iter().filter(|p| p.price == price).count() as u64;

    let found = Product::find_by_price(repo, price).unwrap();
    assert_eq!(found.count().await.unwrap(), count);
    for product in found.fetch_all().await.unwrap() {
        assert_eq!(product.price, price);
    }

    let quoted = format!("\"{price}\"");
    let by_text = Product::find_by_price(repo, quoted.as_str()).unwrap();
    assert_eq!(by_text.count().await.unwrap(), count);
}

pub async fn finders_return_every_match<R: ProductRepository>(repo: &R) {
    let mut factory = ProductFactory::new();
    let mut stored = Vec::new();
    for (name, cents) in [("Hat", 1_250), ("Shirt", 999), ("Hat", 1_250), ("Hat", 500)] {
        let mut product = factory.build();
        product.name = name.to_string();
        product.price = Price::from_cents(cents);
        product.create(repo).await.unwrap();
        stored.push(product);
    }
    let ids = |rows: Vec<Product>| rows.into_iter().map(|p| p.id).collect::<Vec<_>>();

    let by_name = Product::find_by_name(repo, "Hat");
    assert_eq!(by_name.count().await.unwrap(), 3);
    assert_eq!(
        ids(by_name.fetch_all().await.unwrap()),
        vec![stored[0].id, stored[2].id, stored[3].id]
    );

    let by_price = Product::find_by_price(repo, Price::from_cents(1_250)).unwrap();
    assert_eq!(by_price.count().await.unwrap(), 2);
    assert_eq!(
        ids(by_price.fetch_all().await.unwrap()),
        vec![stored[0].id, stored[2].id]
    );

    assert_eq!(Product::find_by_name(repo, "Pants").count().await.unwrap(), 0);
    assert!(
        Product::find_by_price(repo, "0.01")
            .unwrap()
            .fetch_all()
            .await
            .unwrap()
            .is_empty()
    );
}

pub async fn deserialized_product_survives_storage<R: ProductRepository>(repo: &R) {
    let data = json!({
        "name": "Test",
        "description": "This is a test",
        "price": 12.99,
        "available": true,
        "category": "TOOLS",
    });

    let mut product = Product::default();
    product.deserialize(&data).unwrap().create(repo).await.unwrap();

    let stored = Product::find(repo, product.id.unwrap()).await.unwrap().unwrap();
    assert_eq!(stored.price, "12.99".parse::<Price>().unwrap());
    assert_eq!(stored.category, Category::Tools);

    let serialized = stored.serialize();
    assert_eq!(serialized["price"], json!("12.99"));
    assert_eq!(serialized["category"], json!("TOOLS"));
    assert_eq!(serialized["id"], json!(product.id.unwrap().get()));
}
