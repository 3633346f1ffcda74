pub mod adapters;
pub mod fetcher;
pub mod model;
pub mod params;
