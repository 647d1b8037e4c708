pub mod file_store;
pub mod lenient;
pub mod product {
    pub mod entity;
    pub mod repository;
}
pub mod cart {
    pub mod entity;
    pub mod repository;
}
