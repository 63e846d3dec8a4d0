//! # Catalog
//!
//! Users, products, carts, orders, payments and reviews for a small store, built on
//! [`store_framework`]. Every entity can be kept in memory (a manager) or in a JSON / XML
//! document (a handler) with the same typed API.
//!
//! ## Layout
//!
//! - [`model`]: plain data types, ids and create/update payloads.
//! - One module per entity ([`user`], [`address`], [`product`], [`category`],
//!   [`inventory`], [`seller`], [`cart`], [`order`], [`payment`], [`rating`], [`review`])
//!   holding its errors, actions, document record and `StoreEntity` implementation.
//! - [`ledger`]: the narrow traits through which entities reach each other.
//! - [`managers`] and [`handlers`]: typed operations per entity.
//! - [`lifecycle`]: the [`Catalog`](lifecycle::Catalog) that wires every manager together,
//!   and tracing setup.
//! - [`config`]: data directory and document format from the environment.
//! - [`mock`]: ledger test doubles.

pub mod address;
pub mod cart;
pub mod category;
pub mod config;
mod error;
pub mod handlers;
pub mod inventory;
pub mod ledger;
pub mod lifecycle;
pub mod managers;
pub mod mock;
pub mod model;
pub mod order;
pub mod payment;
pub mod product;
pub mod rating;
pub mod records;
pub mod review;
pub mod seller;
pub mod user;
