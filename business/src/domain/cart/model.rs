use super::errors::CartError;
use crate::domain::shared::collection::{Collection, Identified};
use crate::domain::shared::value_objects::{CartId, ProductId};

pub type CartCollection = Collection<Cart>;

/// One product line in a cart. `quantity` is at least 1.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub product_id: ProductId,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    pub id: CartId,
    pub products: Vec<CartItem>,
}

impl Identified for Cart {
    type Id = CartId;

    fn id(&self) -> CartId {
        self.id
    }
}

impl Cart {
    pub fn new(id: CartId) -> Self {
        Self {
            id,
            products: Vec::new(),
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(id: CartId, products: Vec<CartItem>) -> Self {
        Self { id, products }
    }

    /// Lines stay unique by product: adding a product already in the cart
    /// bumps its quantity instead of appending a second line.
    pub fn add_product(&mut self, product_id: ProductId) -> &CartItem {
        let index = match self
            .products
            .iter()
            .position(|item| item.product_id == product_id)
        {
            Some(index) => {
                self.products[index].quantity = self.products[index].quantity.saturating_add(1);
                index
            }
            None => {
                self.products.push(CartItem {
                    product_id,
                    quantity: 1,
                });
                self.products.len() - 1
            }
        };
        &self.products[index]
    }

    pub fn quantity_of(&self, product_id: ProductId) -> u32 {
        self.products
            .iter()
            .find(|item| item.product_id == product_id)
            .map(|item| item.quantity)
            .unwrap_or(0)
    }
}

impl Collection<Cart> {
    pub fn open_cart(&mut self) -> Cart {
        self.push_next(Cart::new).clone()
    }

    /// The product id is not checked against the product catalog.
    pub fn add_to_cart(&mut self, cart_id: CartId, product_id: ProductId) -> Result<Cart, CartError> {
        let cart = self
            .find_mut(cart_id)
            .ok_or(CartError::NotFound { id: cart_id })?;
        cart.add_product(product_id);
        Ok(cart.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_open_carts_with_increasing_ids() {
        let mut carts = CartCollection::empty();

        let first = carts.open_cart();
        let second = carts.open_cart();

        assert_eq!(first.id, CartId::new(1));
        assert_eq!(second.id, CartId::new(2));
        assert!(second.products.is_empty());
        assert_eq!(carts.last_id(), 2);
    }

    #[test]
    fn should_increment_quantity_when_product_added_twice() {
        let mut carts = CartCollection::empty();
        let cart = carts.open_cart();

        carts.add_to_cart(cart.id, ProductId::new(5)).unwrap();
        let updated = carts.add_to_cart(cart.id, ProductId::new(5)).unwrap();

        assert_eq!(updated.products.len(), 1);
        assert_eq!(updated.quantity_of(ProductId::new(5)), 2);
    }

    #[test]
    fn should_keep_insertion_order_when_adding_different_products() {
        let mut cart = Cart::new(CartId::new(1));

        cart.add_product(ProductId::new(9));
        cart.add_product(ProductId::new(2));
        cart.add_product(ProductId::new(9));

        let ids: Vec<u64> = cart.products.iter().map(|i| i.product_id.value()).collect();
        assert_eq!(ids, vec![9, 2]);
        assert_eq!(cart.quantity_of(ProductId::new(2)), 1);
    }

    #[test]
    fn should_accept_unknown_product_when_adding_to_cart() {
        let mut carts = CartCollection::empty();
        let cart = carts.open_cart();

        let updated = carts.add_to_cart(cart.id, ProductId::new(404)).unwrap();

        assert_eq!(updated.quantity_of(ProductId::new(404)), 1);
    }

    #[test]
    fn should_return_not_found_when_cart_missing() {
        let mut carts = CartCollection::empty();

        let result = carts.add_to_cart(CartId::new(1), ProductId::new(1));

        assert!(matches!(result, Err(CartError::NotFound { .. })));
        assert_eq!(carts.last_id(), 0);
    }
}
