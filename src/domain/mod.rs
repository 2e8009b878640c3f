// Domain types and value objects
pub mod point;
pub mod series;

// Re-export commonly used types
pub use point::Point;
pub use series::Series;
