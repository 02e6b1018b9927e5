pub mod cart;
pub mod invoice;
pub mod offer;
