use super::backend::{Backend, Files, InMemory};
use super::error::CatalogError;
use crate::handlers::{
    AddressHandler, CartHandler, CategoryHandler, InventoryHandler, OrderHandler, PaymentHandler,
    ProductHandler, RatingHandler, ReviewHandler, SellerHandler, UserHandler,
};
use crate::ledger::ProductLookup;
use crate::managers::{
    AddressManager, CartManager, CategoryManager, InventoryManager, OrderManager,
    PaymentManager, ProductManager, RatingManager, ReviewManager, SellerManager, UserManager,
};
use crate::model::{
    Address, Cart, CartId, CartLine, Category, CategoryId, Inventory, Order, OrderCreate, OrderId,
    OrderStatus, Payment, PaymentCreate, PaymentId, PaymentStatus, Product, ProductId, Rating,
    Review, ReviewCreate, Seller, SellerId, User, UserCreate, UserId,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use store_framework::{DocumentFormat, Manager, Persisted};
use tracing::{info, instrument, warn};

/// One manager per entity over a shared [`Backend`], plus the workflows that span several
/// of them.
///
/// The managers are public; single-entity operations are called on them directly. The
/// methods on `Catalog` pass the right manager as ledger or lookup to the others, e.g.
/// [`add_to_cart`](Self::add_to_cart) moves stock out of [`products`](Self::products).
///
/// # Example
///
/// ```rust
/// use catalog::lifecycle::Catalog;
/// use catalog::model::{ProductCreate, UserCreate};
///
/// let mut catalog = Catalog::in_memory();
/// let widget = catalog
///     .products
///     .create_product(ProductCreate::new("Widget", "Tools", 10.0, 5))
///     .unwrap();
/// let (_user, cart) = catalog
///     .register_user(UserCreate::new("alice@example.com", "Alice"))
///     .unwrap();
///
/// catalog.add_to_cart(cart.id, widget.id, 3).unwrap();
/// assert_eq!(catalog.products.check_stock(widget.id).unwrap(), 2);
/// ```
pub struct Catalog<B: Backend = InMemory> {
    pub users: UserManager<B::Users>,
    pub addresses: AddressManager<B::Addresses>,
    pub products: ProductManager<B::Products>,
    pub categories: CategoryManager<B::Categories>,
    pub inventories: InventoryManager<B::Inventories>,
    pub sellers: SellerManager<B::Sellers>,
    pub carts: CartManager<B::Carts>,
    pub orders: OrderManager<B::Orders>,
    pub payments: PaymentManager<B::Payments>,
    pub ratings: RatingManager<B::Ratings>,
    pub reviews: ReviewManager<B::Reviews>,
}

impl Catalog {
    /// Creates an empty catalog kept in memory.
    pub fn in_memory() -> Self {
        Self {
            users: UserManager::new(),
            addresses: AddressManager::new(),
            products: ProductManager::new(),
            categories: CategoryManager::new(),
            inventories: InventoryManager::new(),
            sellers: SellerManager::new(),
            carts: CartManager::new(),
            orders: OrderManager::new(),
            payments: PaymentManager::new(),
            ratings: RatingManager::new(),
            reviews: ReviewManager::new(),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl<F: DocumentFormat + 'static> Catalog<Files<F>> {
    /// Opens one `<collection>.<ext>` document per entity inside `data_dir`.
    ///
    /// Nothing is read until the first call; missing files are created on the first write.
    /// Carts, categories, inventories and sellers resolve their products against the
    /// products document of the same directory.
    pub fn open(data_dir: impl AsRef<Path>) -> Self {
        let dir = data_dir.as_ref();
        info!(data_dir = %dir.display(), format = F::EXTENSION, "Opening catalog documents");
        let products: Arc<dyn ProductLookup> =
            Arc::new(ProductHandler::<F>::open(document::<Product, F>(dir)));

        Self {
            users: UserHandler::open(document::<User, F>(dir)),
            addresses: AddressHandler::open(document::<Address, F>(dir)),
            products: ProductHandler::open(document::<Product, F>(dir)),
            categories: CategoryHandler::open(
                document::<Category, F>(dir),
                Arc::clone(&products),
            ),
            inventories: InventoryHandler::open(
                document::<Inventory, F>(dir),
                Arc::clone(&products),
            ),
            sellers: SellerHandler::open(
                document::<Seller, F>(dir),
                Arc::clone(&products),
            ),
            carts: CartHandler::open(document::<Cart, F>(dir), products),
            orders: OrderHandler::open(document::<Order, F>(dir)),
            payments: PaymentHandler::open(document::<Payment, F>(dir)),
            ratings: RatingHandler::open(document::<Rating, F>(dir)),
            reviews: ReviewHandler::open(document::<Review, F>(dir)),
        }
    }
}

fn document<T: Persisted, F: DocumentFormat>(dir: &Path) -> PathBuf {
    dir.join(format!("{}.{}", T::COLLECTION, F::EXTENSION))
}

impl<B: Backend> Catalog<B> {
    /// Registers a user together with their empty cart.
    #[instrument(skip(self, params), fields(email = %params.email))]
    pub fn register_user(&mut self, params: UserCreate) -> Result<(User, Cart), CatalogError> {
        let user = self.users.create_user(params)?;
        let cart = self.carts.create_cart(user.id)?;
        info!(user_id = %user.id, cart_id = %cart.id, "Registered user");
        Ok((user, cart))
    }

    /// Reserves `quantity` units of the product in the cart.
    #[instrument(skip(self))]
    pub fn add_to_cart(
        &mut self,
        cart_id: CartId,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<CartLine, CatalogError> {
        Ok(self
            .carts
            .add_to_cart(cart_id, product_id, quantity, &mut self.products)?)
    }

    /// Drops the product's line and restocks its units.
    #[instrument(skip(self))]
    pub fn remove_from_cart(
        &mut self,
        cart_id: CartId,
        product_id: ProductId,
    ) -> Result<u32, CatalogError> {
        Ok(self
            .carts
            .remove_from_cart(cart_id, product_id, &mut self.products)?)
    }

    #[instrument(skip(self))]
    pub fn clear_cart(&mut self, cart_id: CartId) -> Result<u32, CatalogError> {
        Ok(self.carts.clear_cart(cart_id, &mut self.products)?)
    }

    /// Deletes the cart and restocks whatever it still holds.
    #[instrument(skip(self))]
    pub fn delete_cart(&mut self, cart_id: CartId) -> Result<(), CatalogError> {
        Ok(self.carts.delete_cart(cart_id, &mut self.products)?)
    }

    /// Turns the cart's contents into a `Pending` order and empties the cart.
    ///
    /// The reserved units move with the order. The order is validated before the cart is
    /// touched, so a rejected order leaves the cart as it was.
    #[instrument(skip(self, address))]
    pub fn checkout(
        &mut self,
        cart_id: CartId,
        address: Address,
        payment_method: &str,
    ) -> Result<Order, CatalogError> {
        let cart = self.carts.read(cart_id)?;
        let order = self.orders.create_order(OrderCreate {
            cart,
            address,
            payment_method: payment_method.to_string(),
        })?;
        if let Err(e) = self.carts.checkout(cart_id) {
            warn!(order_id = %order.id, error = %e, "Cart checkout failed, dropping order");
            if let Err(undo) = self.orders.delete_order(order.id) {
                warn!(order_id = %order.id, error = %undo, "Could not drop order");
            }
            return Err(e.into());
        }
        info!(order_id = %order.id, total = order.total_amount, "Checked out");
        Ok(order)
    }

    #[instrument(skip(self))]
    pub fn place_order(&mut self, order_id: OrderId) -> Result<OrderStatus, CatalogError> {
        Ok(self.orders.place_order(order_id)?)
    }

    /// Cancels the order and returns its units to stock.
    #[instrument(skip(self))]
    pub fn cancel_order(&mut self, order_id: OrderId) -> Result<OrderStatus, CatalogError> {
        Ok(self.orders.cancel_order(order_id, &mut self.products)?)
    }

    #[instrument(skip(self))]
    pub fn complete_order(&mut self, order_id: OrderId) -> Result<OrderStatus, CatalogError> {
        Ok(self.orders.complete_order(order_id)?)
    }

    /// Opens an `Unpaid` payment for the order's full total.
    #[instrument(skip(self))]
    pub fn pay(&mut self, order_id: OrderId, payment_method: &str) -> Result<Payment, CatalogError> {
        let order = self.orders.read(order_id)?;
        let params = PaymentCreate {
            order_id,
            amount: order.total_amount,
            payment_method: payment_method.to_string(),
        };
        Ok(self.payments.create_payment(params, &mut self.orders)?)
    }

    #[instrument(skip(self))]
    pub fn process_payment(&mut self, payment_id: PaymentId) -> Result<PaymentStatus, CatalogError> {
        Ok(self.payments.process_payment(payment_id, &mut self.orders)?)
    }

    #[instrument(skip(self))]
    pub fn refund_payment(&mut self, payment_id: PaymentId) -> Result<PaymentStatus, CatalogError> {
        Ok(self.payments.refund_payment(payment_id)?)
    }

    /// Stores a review of an existing product and folds its score into the product rating.
    #[instrument(skip(self, comment))]
    pub fn review(
        &mut self,
        user_id: UserId,
        product_id: ProductId,
        rating: u8,
        comment: &str,
    ) -> Result<Review, CatalogError> {
        let product = self.products.read(product_id)?;
        let params = ReviewCreate {
            user_id,
            product,
            rating,
            comment: comment.to_string(),
        };
        Ok(self.reviews.add_review(params, &mut self.ratings)?)
    }

    /// Files an existing product under the category.
    #[instrument(skip(self))]
    pub fn categorize(
        &mut self,
        category_id: CategoryId,
        product_id: ProductId,
    ) -> Result<usize, CatalogError> {
        let product = self.products.read(product_id)?;
        Ok(self.categories.add_product(category_id, product)?)
    }

    /// Lists an existing product in the seller's inventory.
    #[instrument(skip(self))]
    pub fn stock_seller(
        &mut self,
        seller_id: SellerId,
        product_id: ProductId,
    ) -> Result<usize, CatalogError> {
        let product = self.products.read(product_id)?;
        Ok(self.sellers.add_product(seller_id, product)?)
    }
}
