//! Storage backends for a [`Catalog`](super::Catalog): one store type per entity.

use crate::model::{
    Address, Cart, Category, Inventory, Order, Payment, Product, Rating, Review, Seller, User,
};
use std::marker::PhantomData;
use store_framework::{DocumentFormat, DocumentStore, EntityStore, ResourceStore};

/// Chooses the store of every entity.
///
/// Stores that are handed to other entities' hooks as a ledger or lookup must be
/// `'static`, because those hooks take trait objects.
pub trait Backend {
    type Users: EntityStore<User>;
    type Addresses: EntityStore<Address>;
    type Products: EntityStore<Product> + 'static;
    type Categories: EntityStore<Category>;
    type Inventories: EntityStore<Inventory>;
    type Sellers: EntityStore<Seller>;
    type Carts: EntityStore<Cart>;
    type Orders: EntityStore<Order> + 'static;
    type Payments: EntityStore<Payment>;
    type Ratings: EntityStore<Rating> + 'static;
    type Reviews: EntityStore<Review>;
}

/// Everything in process memory. State lives as long as the catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct InMemory;

impl Backend for InMemory {
    type Users = ResourceStore<User>;
    type Addresses = ResourceStore<Address>;
    type Products = ResourceStore<Product>;
    type Categories = ResourceStore<Category>;
    type Inventories = ResourceStore<Inventory>;
    type Sellers = ResourceStore<Seller>;
    type Carts = ResourceStore<Cart>;
    type Orders = ResourceStore<Order>;
    type Payments = ResourceStore<Payment>;
    type Ratings = ResourceStore<Rating>;
    type Reviews = ResourceStore<Review>;
}

/// One document per entity, all in format `F`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Files<F>(PhantomData<F>);

impl<F: DocumentFormat + 'static> Backend for Files<F> {
    type Users = DocumentStore<User, F>;
    type Addresses = DocumentStore<Address, F>;
    type Products = DocumentStore<Product, F>;
    type Categories = DocumentStore<Category, F>;
    type Inventories = DocumentStore<Inventory, F>;
    type Sellers = DocumentStore<Seller, F>;
    type Carts = DocumentStore<Cart, F>;
    type Orders = DocumentStore<Order, F>;
    type Payments = DocumentStore<Payment, F>;
    type Ratings = DocumentStore<Rating, F>;
    type Reviews = DocumentStore<Review, F>;
}
