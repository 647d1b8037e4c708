pub mod error;
pub mod tags;
pub mod health {
    pub mod routes;
}
pub mod product {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod cart {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod realtime {
    pub mod channel;
    pub mod events;
    pub mod routes;
}
