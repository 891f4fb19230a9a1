pub mod buckets;
pub mod cluster;
pub mod domains;
pub mod events;
pub mod normalize;
pub mod report;
pub mod store;
pub mod top;
