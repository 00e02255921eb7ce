// Adapters layer: concrete implementations of the domain ports (page
// surface, http transport).

pub mod http;
pub mod page;
